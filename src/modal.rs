use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Element, Length};

use crate::style;
use data::Instrument;
use data::card::has_content;

/// Stack a modal over a base element, dimming the backdrop. Clicking the
/// backdrop emits `on_blur`; clicks inside the content are consumed.
pub fn dialog_modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(style::modal_backdrop)).on_press(on_blur)
        )
    ]
    .into()
}

/// The "why is this hot" detail panel. Purely a display collaborator: it
/// shows whichever hot fields carry content plus the rank snapshot, and
/// reports close / concept-filter intents upward.
pub fn hot_info_panel<'a, Message: Clone + 'a>(
    instrument: &'a Instrument,
    on_close: Message,
    on_concept_filter: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let header = {
        let rank = instrument
            .hot_rank
            .map_or("Hot".to_string(), |rank| format!("Hot #{rank}"));

        row![
            text(format!("{instrument}")).size(14).style(style::title_text),
            text(instrument.kind.to_string())
                .size(11)
                .style(style::dimmed_text),
            iced::widget::space::horizontal(),
            text(rank).size(13),
            button(text("✕").size(12))
                .style(style::button::transparent)
                .on_press(on_close),
        ]
        .align_y(Alignment::Center)
        .spacing(8)
    };

    let mut body = column![].spacing(12);

    if has_content(instrument.hot_concept.as_deref())
        && let Some(concept) = &instrument.hot_concept
    {
        let chip = button(
            container(text(concept.trim()).size(12))
                .style(style::concept_chip)
                .padding([2, 8]),
        )
        .style(style::button::transparent)
        .on_press(on_concept_filter(concept.trim().to_string()));

        body = body.push(
            row![text("Concept").size(12).style(style::dimmed_text), chip]
                .align_y(Alignment::Center)
                .spacing(8),
        );
    }

    if has_content(instrument.hot_rank_reason.as_deref())
        && let Some(reason) = &instrument.hot_rank_reason
    {
        body = body.push(
            column![
                text("Why it ranks").size(12).style(style::dimmed_text),
                text(reason.trim()).size(13),
            ]
            .spacing(4),
        );
    }

    if let Some(ranked_at) = instrument.ranked_at {
        body = body.push(
            text(format!("as of {}", ranked_at.format("%Y-%m-%d %H:%M UTC")))
                .size(11)
                .style(style::dimmed_text),
        );
    }

    container(column![header, body].spacing(16))
        .padding(20)
        .width(Length::Fixed(360.0))
        .style(style::dashboard_modal)
        .into()
}
