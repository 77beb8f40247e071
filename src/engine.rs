//! Boundary to the charting engine.
//!
//! The engine itself is an opaque collaborator: given a resolved series kind
//! and a bar count it fetches and renders candles on its own. This module
//! only hands over derived configuration and decides, by identity key,
//! whether the engine may update in place or must be reinitialized.

use data::InstrumentKind;
use data::chart::{ChartConfig, ChartKey, Indicator, Overlay, Period};

use crate::style;
use iced::widget::{center, column, container, text};
use iced::{Element, Length};

/// Everything the engine needs for one mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProps {
    pub code: String,
    pub kind: InstrumentKind,
    pub bar_count: u16,
    pub period: Period,
    pub indicator: Option<Indicator>,
    pub overlays: Vec<Overlay>,
    pub key: ChartKey,
}

impl ChartProps {
    pub fn new(config: &ChartConfig, overlays: Vec<Overlay>) -> Self {
        Self {
            code: config.key.code.clone(),
            kind: config.kind,
            bar_count: config.bar_count,
            period: config.key.period,
            indicator: config.key.indicator,
            overlays,
            key: config.key.clone(),
        }
    }
}

/// Outcome of applying freshly derived props to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Identity changed: the engine discards internal state and starts over.
    Reinitialized,
    /// Same identity, other props changed: incremental update.
    UpdatedInPlace,
    Unchanged,
}

/// Tracks what the engine was last configured with, so each derivation can
/// be classified as a remount or an in-place update.
#[derive(Debug, Default)]
pub struct EnginePane {
    last: Option<ChartProps>,
}

impl EnginePane {
    pub fn sync(&mut self, props: ChartProps) -> SyncAction {
        let action = match &self.last {
            None => SyncAction::Reinitialized,
            Some(last) if last.key != props.key => SyncAction::Reinitialized,
            Some(last) if *last != props => SyncAction::UpdatedInPlace,
            Some(_) => SyncAction::Unchanged,
        };

        match action {
            SyncAction::Reinitialized => {
                log::debug!("chart engine reinitialized: {}", props.key);
            }
            SyncAction::UpdatedInPlace => {
                log::debug!("chart engine updated in place: {}", props.key);
            }
            SyncAction::Unchanged => {}
        }

        self.last = Some(props);
        action
    }

    pub fn props(&self) -> Option<&ChartProps> {
        self.last.as_ref()
    }
}

/// The engine's mount surface inside a card, rendered from the props the
/// engine was last synced with. Rendering internals live in the engine.
pub fn pane<'a, Message: 'a>(props: &ChartProps) -> Element<'a, Message> {
    let summary = text(format!(
        "{} · {} · {} bars",
        props.code, props.kind, props.bar_count,
    ))
    .size(13);

    let detail = {
        let indicator = props
            .indicator
            .map_or("no indicator".to_string(), |i| i.to_string());

        text(format!(
            "{} · {indicator} · {} overlays",
            props.period,
            props.overlays.len(),
        ))
        .size(11)
        .style(style::dimmed_text)
    };

    container(center(
        column![summary, detail].spacing(4).align_x(iced::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::chart_pane)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::chart::{SeriesQuery, TimeRange};
    use data::instrument::InstrumentKind::*;

    fn props(period: Period, range: Option<TimeRange>) -> ChartProps {
        let query = SeriesQuery {
            native: Stock,
            original: Stock,
            showing_underlying: false,
            showing_bond: false,
            fallback: Stock,
        };
        let config = ChartConfig::derive("600036", &query, period, range, None);
        ChartProps::new(&config, vec![])
    }

    #[test]
    fn first_sync_reinitializes() {
        let mut pane = EnginePane::default();
        assert!(pane.props().is_none());

        assert_eq!(
            pane.sync(props(Period::Daily, None)),
            SyncAction::Reinitialized
        );
        assert_eq!(pane.props(), Some(&props(Period::Daily, None)));
    }

    #[test]
    fn identity_change_forces_reinit() {
        let mut pane = EnginePane::default();
        pane.sync(props(Period::Daily, None));

        assert_eq!(
            pane.sync(props(Period::Weekly, None)),
            SyncAction::Reinitialized
        );
        assert_eq!(
            pane.sync(props(Period::Weekly, Some(TimeRange::All))),
            SyncAction::Reinitialized
        );
    }

    #[test]
    fn same_identity_same_props_is_a_noop() {
        let mut pane = EnginePane::default();
        pane.sync(props(Period::Daily, None));

        assert_eq!(pane.sync(props(Period::Daily, None)), SyncAction::Unchanged);
    }

    #[test]
    fn overlay_change_updates_in_place() {
        let mut pane = EnginePane::default();
        let base = props(Period::Daily, None);
        pane.sync(base.clone());

        let mut with_overlay = base;
        with_overlay.overlays = vec![Overlay::Volume];

        assert_eq!(pane.sync(with_overlay), SyncAction::UpdatedInPlace);
    }
}
