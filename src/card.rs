use iced::widget::tooltip::Position as TooltipPosition;
use iced::widget::{button, column, container, mouse_area, pick_list, row, rule, space, text};
use iced::{Alignment, Element, Length};

use data::card::{HotDisclosure, InteractionFlags, favorites_visibility};
use data::chart::{ChartConfig, Indicator, Overlay, Period, SeriesQuery, TimeRange};
use data::config::state::CardSpec;
use data::instrument::{Instrument, InstrumentKind, ViewToggle};
use data::util;

use crate::engine::{ChartProps, EnginePane};
use crate::{modal, style, widget};

const CHART_PANE_HEIGHT: f32 = 200.0;
const STAR_SLOT_WIDTH: f32 = 28.0;

/// One instrument card on the dashboard.
///
/// `original_kind` is fixed for the lifetime of the card; link toggles only
/// flip `toggle`, they never rewrite the instrument itself.
pub struct Card {
    pub id: uuid::Uuid,
    instrument: Instrument,
    original_kind: InstrumentKind,
    toggle: ViewToggle,
    settings: data::card::Settings,
    engine: EnginePane,
    hot_modal_open: bool,
    hovered: bool,
    focused: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    HoverChanged(bool),
    FocusChanged(bool),
    LinkToggled,
    PeriodSelected(Period),
    RangeSelected(TimeRange),
    IndicatorSelected(Indicator),
    OverlayToggled(Overlay),
    HotInfoPressed,
    HotInfoClosed,
    ConceptFilterPressed(String),
    FavoritePressed,
    OpenQuotePage,
    Remove,
}

/// Intents the parent dashboard must handle on the card's behalf.
pub enum Action {
    ToggleFavorite { code: String, kind: InstrumentKind },
    FilterByConcept(String),
    Remove,
}

impl Card {
    pub fn new(spec: CardSpec) -> Self {
        let original_kind = spec.instrument.kind;

        let mut card = Self {
            id: uuid::Uuid::new_v4(),
            instrument: spec.instrument,
            original_kind,
            toggle: ViewToggle::default(),
            settings: spec.settings,
            engine: EnginePane::default(),
            hot_modal_open: false,
            hovered: false,
            focused: false,
        };
        card.sync_engine();
        card
    }

    pub fn to_spec(&self) -> CardSpec {
        CardSpec {
            instrument: self.instrument.clone(),
            settings: self.settings.clone(),
        }
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn is_hot_info_open(&self) -> bool {
        self.hot_modal_open
    }

    /// Unconditional close, used by the card itself and by Esc handling
    /// upstream. Closing an already-closed panel is a no-op.
    pub fn close_hot_info(&mut self) {
        self.hot_modal_open = false;
    }

    pub fn update(&mut self, message: Message) -> Option<Action> {
        let action = match message {
            Message::HoverChanged(hovered) => {
                self.hovered = hovered;
                None
            }
            Message::FocusChanged(focused) => {
                self.focused = focused;
                None
            }
            Message::LinkToggled => {
                // The toggle button only exists on linkable cards; the guard
                // keeps the transition total over the message set anyway.
                if self.instrument.is_linkable() {
                    match self.original_kind {
                        InstrumentKind::ConvertibleBond => {
                            self.toggle.showing_underlying = !self.toggle.showing_underlying;
                        }
                        InstrumentKind::Stock => {
                            self.toggle.showing_bond = !self.toggle.showing_bond;
                        }
                        _ => {}
                    }
                }
                None
            }
            Message::PeriodSelected(period) => {
                self.settings.period = period;
                None
            }
            Message::RangeSelected(range) => {
                self.settings.range = Some(range);
                None
            }
            Message::IndicatorSelected(indicator) => {
                self.settings.indicator = Some(indicator);
                None
            }
            Message::OverlayToggled(overlay) => {
                self.settings.overlays[overlay] = !self.settings.overlays[overlay];
                None
            }
            Message::HotInfoPressed => {
                // The affordance carries no press handler while the gate is
                // closed; this guard keeps the transition safe regardless.
                if HotDisclosure::from_instrument(&self.instrument).can_open() {
                    self.hot_modal_open = true;
                }
                None
            }
            Message::HotInfoClosed => {
                self.close_hot_info();
                None
            }
            Message::ConceptFilterPressed(concept) => {
                self.close_hot_info();
                Some(Action::FilterByConcept(concept))
            }
            Message::FavoritePressed => Some(Action::ToggleFavorite {
                code: self.instrument.code.clone(),
                kind: self.original_kind,
            }),
            Message::OpenQuotePage => {
                data::link::open_in_browser(&self.instrument);
                None
            }
            Message::Remove => Some(Action::Remove),
        };

        self.sync_engine();
        action
    }

    /// Code the engine is asked to chart: the linked series while a link
    /// toggle is active, the instrument's own otherwise.
    fn effective_code(&self) -> &str {
        if self.toggle.any_active()
            && let Some(code) = self.instrument.linked_code.as_deref()
        {
            return code;
        }
        &self.instrument.code
    }

    fn series_query(&self) -> SeriesQuery {
        SeriesQuery {
            native: self.instrument.kind,
            original: self.original_kind,
            showing_underlying: self.toggle.showing_underlying,
            showing_bond: self.toggle.showing_bond,
            fallback: self.instrument.kind,
        }
    }

    /// Derived fresh for every render pass; never cached or persisted.
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::derive(
            self.effective_code(),
            &self.series_query(),
            self.settings.period,
            self.settings.range,
            self.settings.indicator,
        )
    }

    fn sync_engine(&mut self) {
        let config = self.chart_config();
        let props = ChartProps::new(&config, self.settings.enabled_overlays());
        self.engine.sync(props);
    }

    pub fn view(&self, is_favorited: bool, favorites_mode: bool) -> Element<'_, Message> {
        let disclosure = HotDisclosure::from_instrument(&self.instrument);

        let title_row = self.title_row(&disclosure, is_favorited, favorites_mode);
        let selector_row = self.selector_row();

        let mount: Element<'_, Message> = match self.engine.props() {
            Some(props) => crate::engine::pane(props),
            None => iced::widget::Space::new().into(),
        };
        let chart_pane = container(mount).height(Length::Fixed(CHART_PANE_HEIGHT));

        let is_hovered = self.hovered;
        let body = container(
            column![
                title_row,
                selector_row,
                rule::horizontal(1.0).style(style::ruler),
                chart_pane,
            ]
            .spacing(8),
        )
        .padding(12)
        .style(move |theme| style::card_container(theme, is_hovered));

        let base: Element<'_, Message> = mouse_area(body)
            .on_enter(Message::HoverChanged(true))
            .on_exit(Message::HoverChanged(false))
            .into();

        if self.hot_modal_open {
            modal::dialog_modal(
                base,
                modal::hot_info_panel(
                    &self.instrument,
                    Message::HotInfoClosed,
                    Message::ConceptFilterPressed,
                ),
                Message::HotInfoClosed,
            )
        } else {
            base
        }
    }

    fn title_row(
        &self,
        disclosure: &HotDisclosure,
        is_favorited: bool,
        favorites_mode: bool,
    ) -> Element<'_, Message> {
        let can_open = disclosure.can_open();

        // The flame is a button so a press is consumed here and never
        // reaches the card's own mouse area.
        let flame = {
            let mut btn = button(text("🔥").size(13))
                .style(move |theme, status| style::button::flame(theme, status, can_open))
                .padding(2);

            if can_open {
                btn = btn.on_press(Message::HotInfoPressed);
            }

            widget::tooltip(
                btn,
                if can_open {
                    Some("Why is this hot?")
                } else {
                    None
                },
                TooltipPosition::Top,
            )
        };

        let name = text(format!("{}", self.instrument))
            .size(13)
            .style(style::title_text);

        let quote: Element<'_, Message> = match (
            self.instrument.last_price,
            self.instrument.day_change_pct,
        ) {
            (Some(price), Some(change)) => row![
                text(format!("{price:.2}")).size(12),
                text(util::pct_change(change))
                    .size(12)
                    .style(move |theme| style::change_text(theme, change)),
            ]
            .spacing(6)
            .into(),
            (Some(price), None) => text(format!("{price:.2}")).size(12).into(),
            _ => iced::widget::Space::new().into(),
        };

        let link_toggle: Element<'_, Message> = if self.instrument.is_linkable() {
            let label = match self.original_kind {
                InstrumentKind::ConvertibleBond if !self.toggle.showing_underlying => "Underlying",
                InstrumentKind::ConvertibleBond => "Bond",
                InstrumentKind::Stock if !self.toggle.showing_bond => "Bond",
                _ => "Stock",
            };
            let is_active = self.toggle.any_active();

            widget::tooltip(
                button(text(label).size(11))
                    .style(move |theme, status| {
                        style::button::bordered_toggle(theme, status, is_active)
                    })
                    .on_press(Message::LinkToggled),
                Some("Switch between bond and underlying"),
                TooltipPosition::Top,
            )
        } else {
            iced::widget::Space::new().into()
        };

        let quote_link = widget::button_with_tooltip(
            text("⇗").size(12),
            Message::OpenQuotePage,
            Some("Open quote page"),
            TooltipPosition::Top,
            style::button::transparent,
        );

        let star = {
            let flags = InteractionFlags {
                favorites_mode,
                hovered: self.hovered,
                focused: self.focused,
            };
            let visibility = favorites_visibility(flags);
            let paint = visibility.paint;

            widget::reserved_control(
                text(if is_favorited { "★" } else { "☆" }).size(13),
                Message::FavoritePressed,
                visibility,
                STAR_SLOT_WIDTH,
                move |theme, status| style::button::star(theme, status, is_favorited, paint),
            )
        };

        let remove = button(text("✕").size(11))
            .style(style::button::transparent)
            .on_press(Message::Remove)
            .padding(2);

        row![
            flame,
            name,
            quote,
            space::horizontal(),
            link_toggle,
            quote_link,
            star,
            remove,
        ]
        .align_y(Alignment::Center)
        .spacing(6)
        .into()
    }

    fn selector_row(&self) -> Element<'_, Message> {
        let period = pick_list(
            Period::ALL,
            Some(self.settings.period),
            Message::PeriodSelected,
        )
        .text_size(11);

        let range = pick_list(
            TimeRange::ALL_OPTIONS,
            self.settings.range,
            Message::RangeSelected,
        )
        .placeholder("Range")
        .text_size(11);

        let indicator = pick_list(
            Indicator::ALL,
            self.settings.indicator,
            Message::IndicatorSelected,
        )
        .placeholder("Indicator")
        .text_size(11);

        let mut overlays = row![].spacing(4);
        for overlay in Overlay::ALL {
            let is_active = self.settings.overlays[overlay];
            overlays = overlays.push(
                button(text(overlay.to_string()).size(10))
                    .style(move |theme, status| {
                        style::button::bordered_toggle(theme, status, is_active)
                    })
                    .on_press(Message::OverlayToggled(overlay)),
            );
        }

        row![period, range, indicator, space::horizontal(), overlays]
            .align_y(Alignment::Center)
            .spacing(6)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SyncAction;

    fn bond_card() -> Card {
        let mut instrument =
            Instrument::new("113009", "Aviation EB", InstrumentKind::ConvertibleBond)
                .with_linked_code("600115");
        instrument.hot_concept = Some("  ".to_string());
        instrument.hot_rank_reason = Some("AI demand surge".to_string());

        Card::new(CardSpec {
            instrument,
            settings: data::card::Settings::default(),
        })
    }

    #[test]
    fn flame_press_on_gateless_card_never_opens() {
        let instrument = Instrument::new("600036", "CMB", InstrumentKind::Stock);
        let mut card = Card::new(CardSpec {
            instrument,
            settings: data::card::Settings::default(),
        });

        card.update(Message::HotInfoPressed);
        assert!(!card.is_hot_info_open());
    }

    #[test]
    fn whitespace_concept_with_valid_reason_opens() {
        let mut card = bond_card();

        let disclosure = HotDisclosure::from_instrument(card.instrument());
        assert!(!disclosure.has_concept);
        assert!(disclosure.has_reason);

        card.update(Message::HotInfoPressed);
        assert!(card.is_hot_info_open());

        card.update(Message::HotInfoClosed);
        assert!(!card.is_hot_info_open());

        // Closing again is a no-op.
        card.update(Message::HotInfoClosed);
        assert!(!card.is_hot_info_open());
    }

    #[test]
    fn bond_card_defaults_to_bond_series() {
        let card = bond_card();
        let config = card.chart_config();

        assert_eq!(config.kind, InstrumentKind::ConvertibleBond);
        assert_eq!(config.key.code, "113009");
    }

    #[test]
    fn link_toggle_switches_to_underlying_and_remounts() {
        let mut card = bond_card();
        card.update(Message::LinkToggled);

        let config = card.chart_config();
        assert_eq!(config.kind, InstrumentKind::Stock);
        assert_eq!(config.key.code, "600115");

        // Toggling back restores the bond series.
        card.update(Message::LinkToggled);
        let config = card.chart_config();
        assert_eq!(config.kind, InstrumentKind::ConvertibleBond);
        assert_eq!(config.key.code, "113009");
    }

    #[test]
    fn stock_card_toggles_to_bond_series() {
        let instrument = Instrument::new("600115", "China Eastern", InstrumentKind::Stock)
            .with_linked_code("113009");
        let mut card = Card::new(CardSpec {
            instrument,
            settings: data::card::Settings::default(),
        });

        card.update(Message::LinkToggled);
        let config = card.chart_config();
        assert_eq!(config.kind, InstrumentKind::ConvertibleBond);
        assert_eq!(config.key.code, "113009");
    }

    #[test]
    fn unlinked_stock_ignores_link_toggle() {
        let instrument = Instrument::new("600036", "CMB", InstrumentKind::Stock);
        let mut card = Card::new(CardSpec {
            instrument,
            settings: data::card::Settings::default(),
        });

        card.update(Message::LinkToggled);

        assert!(!card.toggle.any_active());
        let config = card.chart_config();
        assert_eq!(config.kind, InstrumentKind::Stock);
        assert_eq!(config.key.code, "600036");
    }

    #[test]
    fn engine_pane_tracks_card_updates() {
        let mut card = bond_card();
        card.update(Message::RangeSelected(TimeRange::All));
        card.update(Message::OverlayToggled(Overlay::Volume));

        let props = card.engine.props().expect("engine synced on every update");
        assert_eq!(props.bar_count, 1095);
        assert_eq!(props.overlays, vec![Overlay::Volume]);
        assert_eq!(props.key, card.chart_config().key);
    }

    #[test]
    fn concept_card_ignores_link_toggle() {
        let instrument = Instrument::new("BK0493", "New Energy", InstrumentKind::Concept);
        let mut card = Card::new(CardSpec {
            instrument,
            settings: data::card::Settings::default(),
        });

        card.update(Message::LinkToggled);
        assert_eq!(card.chart_config().kind, InstrumentKind::Concept);
    }

    #[test]
    fn period_change_remounts_overlay_change_does_not() {
        let mut card = bond_card();

        let mut engine = EnginePane::default();
        let before = ChartProps::new(&card.chart_config(), card.settings.enabled_overlays());
        engine.sync(before);

        card.update(Message::OverlayToggled(Overlay::Volume));
        let after = ChartProps::new(&card.chart_config(), card.settings.enabled_overlays());
        assert_eq!(engine.sync(after), SyncAction::UpdatedInPlace);

        card.update(Message::PeriodSelected(Period::Weekly));
        let after = ChartProps::new(&card.chart_config(), card.settings.enabled_overlays());
        assert_eq!(engine.sync(after), SyncAction::Reinitialized);
    }

    #[test]
    fn range_selection_reaches_the_bar_count() {
        let mut card = bond_card();

        card.update(Message::RangeSelected(TimeRange::All));
        assert_eq!(card.chart_config().bar_count, 1095);

        card.update(Message::RangeSelected(TimeRange::Bars(60)));
        assert_eq!(card.chart_config().bar_count, 60);
    }
}
