use crate::style;
use data::card::Visibility;
use iced::widget::tooltip::Position;
use iced::widget::{button, container, scrollable, text};
use iced::{Element, Theme};

/// A simple tooltip around an element, skipped when no text is given.
pub fn tooltip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tooltip: Option<&'a str>,
    position: Position,
) -> Element<'a, Message> {
    match tooltip {
        Some(tooltip) => iced::widget::tooltip(
            content,
            container(text(tooltip)).style(style::tooltip).padding(8),
            position,
        )
        .into(),
        None => content.into(),
    }
}

pub fn button_with_tooltip<'a, M: Clone + 'a>(
    content: impl Into<Element<'a, M>>,
    message: M,
    tooltip_text: Option<&'a str>,
    tooltip_pos: Position,
    style_fn: impl Fn(&Theme, button::Status) -> button::Style + 'static,
) -> Element<'a, M> {
    let btn = button(content).style(style_fn).on_press(message);

    if let Some(text) = tooltip_text {
        tooltip(btn, Some(text), tooltip_pos)
    } else {
        btn.into()
    }
}

pub fn scrollable_content<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    scrollable::Scrollable::with_direction(
        content,
        scrollable::Direction::Vertical(scrollable::Scrollbar::new().width(4).scroller_width(4)),
    )
    .into()
}

/// A control that always keeps its layout slot. With `hit` off it gets no
/// press handler, with `paint` off the style function is expected to draw it
/// fully transparent; either way the row never reflows.
pub fn reserved_control<'a, M: Clone + 'a>(
    content: impl Into<Element<'a, M>>,
    on_press: M,
    visibility: Visibility,
    width: f32,
    style_fn: impl Fn(&Theme, button::Status) -> button::Style + 'static,
) -> Element<'a, M> {
    let mut btn = button(content).style(style_fn).padding(2);

    if visibility.hit {
        btn = btn.on_press(on_press);
    }

    container(btn).center_x(width).into()
}
