use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of data series an instrument maps to. Also the value the chart
/// engine is asked for after view toggles are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum InstrumentKind {
    Stock,
    ConvertibleBond,
    Concept,
    Industry,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 4] = [
        InstrumentKind::Stock,
        InstrumentKind::ConvertibleBond,
        InstrumentKind::Concept,
        InstrumentKind::Industry,
    ];
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrumentKind::Stock => write!(f, "Stock"),
            InstrumentKind::ConvertibleBond => write!(f, "Convertible Bond"),
            InstrumentKind::Concept => write!(f, "Concept"),
            InstrumentKind::Industry => write!(f, "Industry"),
        }
    }
}

/// A hot-ranked instrument as loaded into a card.
///
/// The hot-rank fields come from the ranking feed and may be blank or
/// whitespace; validity is decided at the disclosure gate, not here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Instrument {
    pub code: String,
    pub name: String,
    pub kind: InstrumentKind,
    #[serde(default)]
    pub hot_concept: Option<String>,
    #[serde(default)]
    pub hot_rank_reason: Option<String>,
    #[serde(default)]
    pub hot_rank: Option<u32>,
    #[serde(default)]
    pub ranked_at: Option<DateTime<Utc>>,
    /// Code of the linked series, e.g. a convertible bond's underlying stock
    /// or a stock's listed convertible.
    #[serde(default)]
    pub linked_code: Option<String>,
    #[serde(default)]
    pub last_price: Option<f32>,
    #[serde(default)]
    pub day_change_pct: Option<f32>,
}

impl Instrument {
    pub fn new(code: &str, name: &str, kind: InstrumentKind) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            kind,
            hot_concept: None,
            hot_rank_reason: None,
            hot_rank: None,
            ranked_at: None,
            linked_code: None,
            last_price: None,
            day_change_pct: None,
        }
    }

    pub fn with_linked_code(mut self, code: &str) -> Self {
        self.linked_code = Some(code.to_string());
        self
    }

    /// Whether the card can offer the bond/underlying link toggle at all.
    pub fn is_linkable(&self) -> bool {
        self.linked_code.is_some()
            && matches!(
                self.kind,
                InstrumentKind::Stock | InstrumentKind::ConvertibleBond
            )
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Which side of an instrument link the chart pane is showing.
///
/// `showing_underlying` is meaningful only when the native kind is a
/// convertible bond; `showing_bond` only when the originally loaded kind is
/// a stock. At most one of the two applies to any given instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewToggle {
    pub showing_underlying: bool,
    pub showing_bond: bool,
}

impl ViewToggle {
    pub fn any_active(&self) -> bool {
        self.showing_underlying || self.showing_bond
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_toggle_requires_linked_code() {
        let mut stock = Instrument::new("600519", "Kweichow Moutai", InstrumentKind::Stock);
        assert!(!stock.is_linkable());

        stock.linked_code = Some("113589".to_string());
        assert!(stock.is_linkable());

        let concept = Instrument::new("BK0493", "New Energy", InstrumentKind::Concept)
            .with_linked_code("whatever");
        assert!(!concept.is_linkable());
    }
}
