use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

use crate::instrument::InstrumentKind;

/// Bar count handed to the engine when the user picked no range.
pub const DEFAULT_BAR_COUNT: u16 = 200;
/// Fixed cap for the "All" range, roughly three years of daily bars.
pub const ALL_RANGE_BARS: u16 = 1095;

/// Candle aggregation period selectable on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Daily => write!(f, "1D"),
            Period::Weekly => write!(f, "1W"),
            Period::Monthly => write!(f, "1M"),
        }
    }
}

/// Indicator pane requested from the engine below the main series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Indicator {
    Ma,
    Macd,
    Rsi,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Ma, Indicator::Macd, Indicator::Rsi];
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Ma => write!(f, "MA"),
            Indicator::Macd => write!(f, "MACD"),
            Indicator::Rsi => write!(f, "RSI"),
        }
    }
}

/// Overlays drawn on top of the main series. Unlike the indicator, toggling
/// an overlay updates the engine in place and never remounts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Enum)]
pub enum Overlay {
    Volume,
    Turnover,
}

impl Overlay {
    pub const ALL: [Overlay; 2] = [Overlay::Volume, Overlay::Turnover];
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlay::Volume => write!(f, "Volume"),
            Overlay::Turnover => write!(f, "Turnover"),
        }
    }
}

/// User-facing time range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TimeRange {
    All,
    Bars(u16),
}

impl TimeRange {
    pub const ALL_OPTIONS: [TimeRange; 4] = [
        TimeRange::Bars(60),
        TimeRange::Bars(120),
        TimeRange::Bars(250),
        TimeRange::All,
    ];
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::All => write!(f, "All"),
            TimeRange::Bars(count) => write!(f, "{count}"),
        }
    }
}

/// Map the selected range to a concrete bar count for the engine.
pub fn bar_count(range: Option<TimeRange>) -> u16 {
    match range {
        Some(TimeRange::All) => ALL_RANGE_BARS,
        Some(TimeRange::Bars(count)) => count,
        None => DEFAULT_BAR_COUNT,
    }
}

/// Inputs to one series-kind resolution, gathered fresh per render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesQuery {
    /// Kind of the instrument currently held by the card.
    pub native: InstrumentKind,
    /// Kind of the instrument as originally loaded, before any link toggle.
    pub original: InstrumentKind,
    pub showing_underlying: bool,
    pub showing_bond: bool,
    /// Returned unchanged when no rule applies.
    pub fallback: InstrumentKind,
}

struct Rule {
    matches: fn(&SeriesQuery) -> bool,
    resolve: fn(&SeriesQuery) -> InstrumentKind,
}

/// Priority-ordered: the first matching rule wins. The order is the tie-break
/// policy between the bond-side and stock-side link toggles, so it must stay
/// auditable as a flat list.
const CASCADE: &[Rule] = &[
    Rule {
        matches: |q| q.native == InstrumentKind::ConvertibleBond && q.showing_underlying,
        resolve: |_| InstrumentKind::Stock,
    },
    Rule {
        matches: |q| q.native == InstrumentKind::ConvertibleBond,
        resolve: |_| InstrumentKind::ConvertibleBond,
    },
    Rule {
        matches: |q| q.original == InstrumentKind::Stock && q.showing_bond,
        resolve: |_| InstrumentKind::ConvertibleBond,
    },
    Rule {
        matches: |q| q.original == InstrumentKind::Stock,
        resolve: |_| InstrumentKind::Stock,
    },
];

/// Compute the effective series kind to request from the engine.
///
/// Total over its domain: concepts, industries, and any unrecognized
/// combination fall through to the literal fallback.
pub fn resolve_series_kind(query: &SeriesQuery) -> InstrumentKind {
    debug_assert!(
        !(query.native == InstrumentKind::ConvertibleBond
            && query.original == InstrumentKind::Stock),
        "bond-side and stock-side link paths must be mutually exclusive per instrument",
    );

    CASCADE
        .iter()
        .find(|rule| (rule.matches)(query))
        .map_or(query.fallback, |rule| (rule.resolve)(query))
}

/// Remount identity for the chart engine.
///
/// Two derivations compare equal iff every field is equal; any change makes
/// the engine discard internal state and reinitialize instead of updating
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ChartKey {
    pub code: String,
    pub period: Period,
    pub range: Option<TimeRange>,
    pub indicator: Option<Indicator>,
}

impl fmt::Display for ChartKey {
    /// Composite rendering with `|` separators. `|` and `\` inside the code
    /// are escaped so distinct tuples can never collide as strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, &self.code)?;
        write!(f, "|{}|", self.period)?;
        if let Some(range) = self.range {
            write!(f, "{range}")?;
        }
        f.write_char('|')?;
        if let Some(indicator) = self.indicator {
            write!(f, "{indicator}")?;
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, field: &str) -> fmt::Result {
    for ch in field.chars() {
        if matches!(ch, '|' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    Ok(())
}

/// Read-only chart configuration, recomputed on every render pass from the
/// card's instrument, original instrument, toggles, and user selections.
/// Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: InstrumentKind,
    pub bar_count: u16,
    pub key: ChartKey,
}

impl ChartConfig {
    pub fn derive(
        code: &str,
        query: &SeriesQuery,
        period: Period,
        range: Option<TimeRange>,
        indicator: Option<Indicator>,
    ) -> Self {
        Self {
            kind: resolve_series_kind(query),
            bar_count: bar_count(range),
            key: ChartKey {
                code: code.to_string(),
                period,
                range,
                indicator,
            },
        }
    }
}
