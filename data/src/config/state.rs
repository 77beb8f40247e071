use serde::{Deserialize, Serialize};

use super::ScaleFactor;
use super::theme::Theme;
use crate::card;
use crate::favorites::Favorites;
use crate::instrument::Instrument;

/// Size and position of the main window.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct WindowSpec {
    pub width: f32,
    pub height: f32,
    pub pos_x: f32,
    pub pos_y: f32,
}

impl WindowSpec {
    pub fn size(&self) -> iced_core::Size {
        iced_core::Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn position(&self) -> iced_core::Point {
        iced_core::Point {
            x: self.pos_x,
            y: self.pos_y,
        }
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            pos_x: 0.0,
            pos_y: 0.0,
        }
    }
}

/// One saved card: the instrument as originally loaded plus its view
/// settings. Link toggles are deliberately not persisted; a card always
/// reopens on its original side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CardSpec {
    pub instrument: Instrument,
    #[serde(default)]
    pub settings: card::Settings,
}

/// Whole-application state written to disk on exit.
#[derive(Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct State {
    pub theme: Theme,
    pub scale_factor: ScaleFactor,
    pub main_window: Option<WindowSpec>,
    pub favorites: Favorites,
    pub favorites_mode: bool,
    pub cards: Vec<CardSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::InstrumentKind;

    #[test]
    fn state_roundtrips_through_json() {
        let mut state = State::default();
        state.favorites_mode = true;
        state.favorites.add("600036", None, InstrumentKind::Stock);
        state.cards.push(CardSpec {
            instrument: Instrument::new("113009", "Aviation EB", InstrumentKind::ConvertibleBond),
            settings: card::Settings::default(),
        });

        let json = serde_json::to_string(&state).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();

        assert!(back.favorites_mode);
        assert!(back.favorites.is_favorited("600036", None, None));
        assert_eq!(back.cards, state.cards);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let back: State = serde_json::from_str("{}").unwrap();
        assert!(!back.favorites_mode);
        assert!(back.cards.is_empty());
        assert_eq!(back.theme, Theme::default());
    }
}
