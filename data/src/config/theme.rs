use serde::{Deserialize, Serialize};

/// Wrapper over the built-in iced themes, persisted by name. Custom palettes
/// are not supported; an unknown name falls back to the default at load.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme(pub iced_core::Theme);

impl Default for Theme {
    fn default() -> Self {
        Self(default_theme())
    }
}

impl From<Theme> for iced_core::Theme {
    fn from(val: Theme) -> Self {
        val.0
    }
}

pub fn default_theme() -> iced_core::Theme {
    iced_core::Theme::Ferra
}

const NAMED_THEMES: &[(&str, iced_core::Theme)] = &[
    ("ferra", iced_core::Theme::Ferra),
    ("dark", iced_core::Theme::Dark),
    ("light", iced_core::Theme::Light),
    ("dracula", iced_core::Theme::Dracula),
    ("nord", iced_core::Theme::Nord),
    ("solarized_light", iced_core::Theme::SolarizedLight),
    ("solarized_dark", iced_core::Theme::SolarizedDark),
    ("gruvbox_light", iced_core::Theme::GruvboxLight),
    ("gruvbox_dark", iced_core::Theme::GruvboxDark),
    ("tokyo_night", iced_core::Theme::TokyoNight),
    ("tokyo_night_storm", iced_core::Theme::TokyoNightStorm),
    ("tokyo_night_light", iced_core::Theme::TokyoNightLight),
    ("kanagawa_wave", iced_core::Theme::KanagawaWave),
    ("kanagawa_dragon", iced_core::Theme::KanagawaDragon),
    ("kanagawa_lotus", iced_core::Theme::KanagawaLotus),
    ("moonfly", iced_core::Theme::Moonfly),
    ("nightfly", iced_core::Theme::Nightfly),
    ("oxocarbon", iced_core::Theme::Oxocarbon),
];

impl Theme {
    /// Themes offered in the settings pick list.
    pub fn all() -> Vec<Theme> {
        NAMED_THEMES
            .iter()
            .map(|(_, theme)| Theme(theme.clone()))
            .collect()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let name = NAMED_THEMES
            .iter()
            .find(|(_, theme)| *theme == self.0)
            .map_or("ferra", |(name, _)| name);

        name.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;

        let theme = NAMED_THEMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, theme)| theme.clone())
            .unwrap_or_else(|| {
                log::warn!("Unknown theme {name:?} in saved state, using default");
                default_theme()
            });

        Ok(Theme(theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_by_name() {
        let theme = Theme(iced_core::Theme::Nord);
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, "\"nord\"");

        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let back: Theme = serde_json::from_str("\"lava-lamp\"").unwrap();
        assert_eq!(back, Theme::default());
    }
}
