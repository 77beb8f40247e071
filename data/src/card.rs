use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::chart::{Indicator, Overlay, Period, TimeRange};
use crate::instrument::Instrument;

/// Persisted view settings for one card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub period: Period,
    pub range: Option<TimeRange>,
    pub indicator: Option<Indicator>,
    pub overlays: EnumMap<Overlay, bool>,
}

impl Settings {
    pub fn enabled_overlays(&self) -> Vec<Overlay> {
        Overlay::ALL
            .into_iter()
            .filter(|overlay| self.overlays[*overlay])
            .collect()
    }
}

/// Whether a hot-rank field carries displayable content. Blank and
/// whitespace-only values are uniformly treated as absent.
pub fn has_content(field: Option<&str>) -> bool {
    field.is_some_and(|s| !s.trim().is_empty())
}

/// Validity of the "why is this hot" disclosure, derived fresh from the
/// instrument's current fields on every render. Only the open/closed flag
/// itself lives on the card and survives re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotDisclosure {
    pub has_concept: bool,
    pub has_reason: bool,
}

impl HotDisclosure {
    pub fn from_instrument(instrument: &Instrument) -> Self {
        Self {
            has_concept: has_content(instrument.hot_concept.as_deref()),
            has_reason: has_content(instrument.hot_rank_reason.as_deref()),
        }
    }

    /// The flame affordance is interactive only when there is something
    /// to show.
    pub fn can_open(&self) -> bool {
        self.has_concept || self.has_reason
    }
}

/// Hover/focus/mode flags owned by the parent dashboard. The card layer only
/// reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFlags {
    pub favorites_mode: bool,
    pub hovered: bool,
    pub focused: bool,
}

/// Paint and hit-testing are independent flags so the favorites control can
/// keep its layout slot while being invisible and inert. Conditional
/// mounting would reflow the title row on every hover transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub paint: bool,
    pub hit: bool,
}

/// Visibility of the favorites control: shown while the dashboard is in
/// favorites mode or the card is hovered. Keyboard focus does not widen it.
pub fn favorites_visibility(flags: InteractionFlags) -> Visibility {
    let visible = flags.favorites_mode || flags.hovered;

    Visibility {
        paint: visible,
        hit: visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::InstrumentKind;

    #[test]
    fn blank_fields_are_absent() {
        assert!(!has_content(None));
        assert!(!has_content(Some("")));
        assert!(!has_content(Some("   ")));
        assert!(!has_content(Some("\t\n")));
        assert!(has_content(Some("AI demand surge")));
    }

    #[test]
    fn gate_opens_on_either_field() {
        let mut bond = Instrument::new("113009", "Aviation EB", InstrumentKind::ConvertibleBond);
        bond.hot_concept = Some("  ".to_string());
        bond.hot_rank_reason = Some("AI demand surge".to_string());

        let gate = HotDisclosure::from_instrument(&bond);
        assert!(!gate.has_concept);
        assert!(gate.has_reason);
        assert!(gate.can_open());

        bond.hot_rank_reason = None;
        let gate = HotDisclosure::from_instrument(&bond);
        assert!(!gate.can_open());
    }

    #[test]
    fn favorites_visible_in_mode_or_on_hover() {
        let cases = [
            (false, false, false),
            (true, false, true),
            (false, true, true),
            (true, true, true),
        ];

        for (favorites_mode, hovered, expected) in cases {
            let vis = favorites_visibility(InteractionFlags {
                favorites_mode,
                hovered,
                focused: false,
            });
            assert_eq!(vis.paint, expected);
            assert_eq!(vis.hit, expected);
        }
    }

    #[test]
    fn focus_alone_does_not_reveal_favorites() {
        let vis = favorites_visibility(InteractionFlags {
            favorites_mode: false,
            hovered: false,
            focused: true,
        });
        assert!(!vis.paint);
        assert!(!vis.hit);
    }

    #[test]
    fn enabled_overlays_follow_the_map() {
        let mut settings = Settings::default();
        assert!(settings.enabled_overlays().is_empty());

        settings.overlays[Overlay::Volume] = true;
        assert_eq!(settings.enabled_overlays(), vec![Overlay::Volume]);
    }
}
