#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod card;
mod engine;
mod logger;
mod modal;
mod style;
mod widget;
mod window;

use card::Card;
use data::config::state::{CardSpec, State, WindowSpec};
use data::instrument::{Instrument, InstrumentKind};

use iced::widget::tooltip::Position as TooltipPosition;
use iced::{
    Alignment, Element, Subscription, Task, keyboard,
    widget::{button, column, container, pick_list, row, space, text},
};

fn main() {
    logger::setup(cfg!(debug_assertions)).expect("Failed to initialize logger");

    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map_or_else(
            || "unknown location".to_string(),
            |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
        );
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());

        log::error!(target: "panic", "Panic at {location}: {message}");

        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!(target: "panic", "Backtrace:\n{backtrace}");
    }));

    let _ = iced::daemon(Hotboard::new, Hotboard::update, Hotboard::view)
        .settings(iced::Settings {
            antialiasing: true,
            default_text_size: iced::Pixels(12.0),
            ..Default::default()
        })
        .title(Hotboard::title)
        .theme(Hotboard::theme)
        .scale_factor(Hotboard::scale_factor)
        .subscription(Hotboard::subscription)
        .run();
}

struct Hotboard {
    main_window: window::Id,
    cards: Vec<Card>,
    favorites: data::favorites::Favorites,
    favorites_mode: bool,
    concept_filter: Option<String>,
    theme: data::Theme,
    scale_factor: data::ScaleFactor,
    saved_window: Option<WindowSpec>,
}

#[derive(Debug, Clone)]
enum Message {
    Card {
        id: uuid::Uuid,
        event: card::Message,
    },
    ToggleFavoritesMode,
    ThemeSelected(data::Theme),
    ClearConceptFilter,
    GoBack,
    WindowEvent(window::Event),
    ExitRequested(Option<WindowSpec>),
}

impl Hotboard {
    fn new() -> (Self, Task<Message>) {
        let saved_state = data::load_saved_state();

        let (main_window_id, open_main_window) = {
            let (position, size) = window::position_and_size(saved_state.main_window);
            let config = window::Settings {
                size,
                position,
                exit_on_close_request: false,
                ..window::settings()
            };
            window::open(config)
        };

        let specs = if saved_state.cards.is_empty() {
            starter_cards()
        } else {
            saved_state.cards
        };

        let state = Self {
            main_window: main_window_id,
            cards: specs.into_iter().map(Card::new).collect(),
            favorites: saved_state.favorites,
            favorites_mode: saved_state.favorites_mode,
            concept_filter: None,
            theme: saved_state.theme,
            scale_factor: saved_state.scale_factor,
            saved_window: saved_state.main_window,
        };

        (state, open_main_window.discard())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Card { id, event } => {
                let Some(card) = self.cards.iter_mut().find(|card| card.id == id) else {
                    return Task::none();
                };

                match card.update(event) {
                    Some(card::Action::ToggleFavorite { code, kind }) => {
                        let favorited = self.favorites.toggle(&code, kind);
                        log::info!(
                            "{code} {} favorites",
                            if favorited { "added to" } else { "removed from" },
                        );
                    }
                    Some(card::Action::FilterByConcept(concept)) => {
                        self.concept_filter = Some(concept);
                    }
                    Some(card::Action::Remove) => {
                        self.cards.retain(|card| card.id != id);
                    }
                    None => {}
                }
            }
            Message::ToggleFavoritesMode => {
                self.favorites_mode = !self.favorites_mode;
            }
            Message::ThemeSelected(theme) => {
                self.theme = theme;
            }
            Message::ClearConceptFilter => {
                self.concept_filter = None;
            }
            Message::GoBack => {
                if self.cards.iter().any(Card::is_hot_info_open) {
                    for card in &mut self.cards {
                        card.close_hot_info();
                    }
                } else {
                    self.concept_filter = None;
                }
            }
            Message::WindowEvent(event) => match event {
                window::Event::CloseRequested(id) => {
                    if id == self.main_window {
                        return window::collect_spec(id, Message::ExitRequested);
                    }
                }
            },
            Message::ExitRequested(spec) => {
                self.save_state_to_disk(spec);
                return iced::exit();
            }
        }

        Task::none()
    }

    fn view(&self, id: window::Id) -> Element<'_, Message> {
        if id != self.main_window {
            return column![].into();
        }

        let favorites_mode = self.favorites_mode;
        let favorites_toggle = widget::tooltip(
            button(text("★ Favorites").size(12))
                .style(move |theme, status| {
                    style::button::bordered_toggle(theme, status, favorites_mode)
                })
                .on_press(Message::ToggleFavoritesMode),
            Some("Pin the favorite stars on every card"),
            TooltipPosition::Bottom,
        );

        let filter_chip: Element<'_, Message> = match &self.concept_filter {
            Some(concept) => button(text(format!("✕ {concept}")).size(12))
                .style(|theme, status| style::button::bordered_toggle(theme, status, true))
                .on_press(Message::ClearConceptFilter)
                .into(),
            None => iced::widget::Space::new().into(),
        };

        let theme_picker = pick_list(
            data::Theme::all(),
            Some(self.theme.clone()),
            Message::ThemeSelected,
        )
        .text_size(11);

        let header = row![
            text("Hotboard").size(16).style(style::title_text),
            filter_chip,
            space::horizontal(),
            favorites_toggle,
            theme_picker,
        ]
        .align_y(Alignment::Center)
        .spacing(8);

        let mut cards = column![].spacing(8);
        let mut shown = 0;

        for card in &self.cards {
            if !self.matches_filter(card) {
                continue;
            }
            shown += 1;

            let id = card.id;
            let is_favorited = self
                .favorites
                .is_favorited(&card.instrument().code, None, None);

            cards = cards.push(
                card.view(is_favorited, self.favorites_mode)
                    .map(move |event| Message::Card { id, event }),
            );
        }

        if shown == 0 {
            cards = cards.push(
                container(
                    text(match &self.concept_filter {
                        Some(concept) => format!("No cards match \"{concept}\""),
                        None => "No cards on the board".to_string(),
                    })
                    .size(13)
                    .style(style::dimmed_text),
                )
                .padding(24),
            );
        }

        column![header, widget::scrollable_content(cards)]
            .spacing(12)
            .padding(12)
            .into()
    }

    fn matches_filter(&self, card: &Card) -> bool {
        match &self.concept_filter {
            Some(filter) => card
                .instrument()
                .hot_concept
                .as_deref()
                .is_some_and(|concept| concept.trim() == filter),
            None => true,
        }
    }

    fn title(&self, _window: window::Id) -> String {
        match &self.concept_filter {
            Some(concept) => format!("Hotboard - {concept}"),
            None => "Hotboard".to_string(),
        }
    }

    fn theme(&self, _window: window::Id) -> iced::Theme {
        self.theme.clone().into()
    }

    fn scale_factor(&self, _window: window::Id) -> f32 {
        self.scale_factor.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_events = window::events().map(Message::WindowEvent);

        let hotkeys = keyboard::listen().filter_map(|event| {
            let keyboard::Event::KeyPressed { key, .. } = event else {
                return None;
            };
            match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::GoBack),
                _ => None,
            }
        });

        Subscription::batch(vec![window_events, hotkeys])
    }

    fn save_state_to_disk(&self, window: Option<WindowSpec>) {
        let state = State {
            theme: self.theme.clone(),
            scale_factor: self.scale_factor,
            main_window: window.or(self.saved_window),
            favorites: self.favorites.clone(),
            favorites_mode: self.favorites_mode,
            cards: self.cards.iter().map(Card::to_spec).collect(),
        };

        match data::write_saved_state(&state) {
            Ok(()) => log::info!("Persisted state"),
            Err(e) => log::error!("Failed to write state to file: {e}"),
        }
    }
}

/// Cards shown the very first time the app runs, before any state was saved.
fn starter_cards() -> Vec<CardSpec> {
    let mut aviation_eb =
        Instrument::new("113009", "Aviation EB", InstrumentKind::ConvertibleBond)
            .with_linked_code("600115");
    aviation_eb.hot_concept = Some("Civil Aviation".to_string());
    aviation_eb.hot_rank_reason =
        Some("Summer travel bookings running ahead of pre-2019 levels".to_string());
    aviation_eb.hot_rank = Some(12);
    aviation_eb.last_price = Some(118.42);
    aviation_eb.day_change_pct = Some(1.35);

    let mut china_eastern = Instrument::new("600115", "China Eastern", InstrumentKind::Stock)
        .with_linked_code("113009");
    china_eastern.last_price = Some(4.12);
    china_eastern.day_change_pct = Some(-0.48);

    let mut new_energy = Instrument::new("BK0493", "New Energy", InstrumentKind::Concept);
    new_energy.hot_concept = Some("New Energy".to_string());
    new_energy.hot_rank = Some(3);

    [aviation_eb, china_eastern, new_energy]
        .into_iter()
        .map(|instrument| CardSpec {
            instrument,
            settings: data::card::Settings::default(),
        })
        .collect()
}
