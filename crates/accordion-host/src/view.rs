#![forbid(unsafe_code)]

//! The panel view adapter.
//!
//! [`PanelView`] couples one [`PanelSetState`] with the host's instantiated
//! cards. It is the only writer of the state; the host redraws from the
//! projection returned by each mutation and never recovers open/visible
//! state from its own presentation tree.

use crate::{CardError, CardHost};
use accordion_core::{ConfigError, Filter, PanelEntry, PanelSetConfig, PanelSetState};

/// Per-item card slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSlot<C> {
    /// The item carries no card configuration.
    Empty,
    /// The instantiated card handle.
    Ready(C),
    /// Instantiation failed; the panel still works, the slot stays empty.
    Failed(CardError),
}

impl<C> CardSlot<C> {
    /// The card handle, if instantiation succeeded.
    #[must_use]
    pub fn card(&self) -> Option<&C> {
        match self {
            Self::Ready(card) => Some(card),
            Self::Empty | Self::Failed(_) => None,
        }
    }
}

/// Owns a panel-set state plus the cards instantiated for its items.
pub struct PanelView<H: CardHost> {
    state: PanelSetState,
    host: H,
    cards: Vec<CardSlot<H::Card>>,
}

impl<H> std::fmt::Debug for PanelView<H>
where
    H: CardHost + std::fmt::Debug,
    H::Card: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelView")
            .field("state", &self.state)
            .field("host", &self.host)
            .field("cards", &self.cards)
            .finish()
    }
}

impl<H: CardHost> PanelView<H> {
    /// Construct the state and eagerly instantiate one card per item that
    /// carries a card configuration, regardless of open or visible state.
    ///
    /// A failed instantiation is recorded in its slot and does not abort the
    /// mount; the panel renders without its embedded card.
    pub fn mount(config: PanelSetConfig, mut host: H) -> Result<Self, ConfigError> {
        let state = PanelSetState::new(config)?;
        let cards = state
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| match &item.card {
                None => CardSlot::Empty,
                Some(card_config) => match host.create_card(card_config) {
                    Ok(card) => CardSlot::Ready(card),
                    Err(err) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(index, error = %err, "card instantiation failed");
                        #[cfg(not(feature = "tracing"))]
                        let _ = index;
                        CardSlot::Failed(err)
                    }
                },
            })
            .collect();

        Ok(Self { state, host, cards })
    }

    /// The underlying state model (read-only; mutate through the forwarders).
    #[must_use]
    pub fn state(&self) -> &PanelSetState {
        &self.state
    }

    /// The per-item card slots, in item order.
    #[must_use]
    pub fn cards(&self) -> &[CardSlot<H::Card>] {
        &self.cards
    }

    /// The card slot for one item.
    #[must_use]
    pub fn card(&self, index: usize) -> &CardSlot<H::Card> {
        &self.cards[index]
    }

    /// Forward updated shared host context to every instantiated card.
    pub fn set_context(&mut self, context: &H::Context) {
        for slot in &mut self.cards {
            if let CardSlot::Ready(card) = slot {
                self.host.update_card(card, context);
            }
        }
    }

    /// Toggle one panel and return the fresh projection.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range, matching the state model's
    /// contract.
    pub fn toggle(&mut self, index: usize) -> Vec<PanelEntry> {
        self.state.toggle(index);
        self.state.derive()
    }

    /// Replace the active filter and return the fresh projection.
    pub fn set_filter(&mut self, filter: Option<Filter>) -> Vec<PanelEntry> {
        self.state.set_filter(filter);
        self.state.derive()
    }

    /// Activate a configured filter by name; `None` when the name is unknown
    /// (the active filter is then left unchanged).
    pub fn activate_filter(&mut self, name: &str) -> Option<Vec<PanelEntry>> {
        self.state
            .activate_filter(name)
            .then(|| self.state.derive())
    }

    /// Replace the search term and return the fresh projection.
    pub fn set_search(&mut self, term: &str) -> Vec<PanelEntry> {
        self.state.set_search(term);
        self.state.derive()
    }

    /// Expand or collapse every panel and return the fresh projection.
    pub fn set_open_all(&mut self, open: bool) -> Vec<PanelEntry> {
        self.state.set_open_all(open);
        self.state.derive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accordion_core::{CardConfig, Item, OpenPolicy};

    /// In-memory host recording every create/update call.
    #[derive(Debug, Default)]
    struct RecordingHost {
        created: Vec<serde_json::Value>,
        updates: Vec<(usize, String)>,
        fail_on: Option<serde_json::Value>,
    }

    impl CardHost for RecordingHost {
        type Card = usize;
        type Context = String;

        fn create_card(&mut self, config: &CardConfig) -> Result<usize, CardError> {
            if self.fail_on.as_ref() == Some(config.value()) {
                return Err(CardError::Creation("boom".into()));
            }
            self.created.push(config.value().clone());
            Ok(self.created.len() - 1)
        }

        fn update_card(&mut self, card: &mut usize, context: &String) {
            self.updates.push((*card, context.clone()));
        }
    }

    fn card(name: &str) -> CardConfig {
        CardConfig::new(serde_json::json!({"type": name}))
    }

    fn mounted(host: RecordingHost) -> PanelView<RecordingHost> {
        let config = PanelSetConfig::new(vec![
            Item::new().title("Living Room").card(card("light-card")),
            Item::new().title("Hallway"),
            Item::new().title("Garage").card(card("cover-card")),
        ]);
        PanelView::mount(config, host).unwrap()
    }

    #[test]
    fn mount_instantiates_cards_eagerly() {
        let view = mounted(RecordingHost::default());
        // All panels are closed and nothing was toggled, yet both cards exist.
        assert!(matches!(view.card(0), CardSlot::Ready(0)));
        assert!(matches!(view.card(1), CardSlot::Empty));
        assert!(matches!(view.card(2), CardSlot::Ready(1)));
    }

    #[test]
    fn mount_with_empty_items_propagates_config_error() {
        let result = PanelView::mount(
            PanelSetConfig::new(Vec::new()),
            RecordingHost::default(),
        );
        assert_eq!(result.unwrap_err(), ConfigError::NoItems);
    }

    #[test]
    fn failed_card_is_recorded_without_aborting_mount() {
        let host = RecordingHost {
            fail_on: Some(serde_json::json!({"type": "cover-card"})),
            ..RecordingHost::default()
        };
        let view = mounted(host);
        assert!(matches!(view.card(0), CardSlot::Ready(0)));
        assert!(matches!(view.card(2), CardSlot::Failed(_)));
        assert!(view.card(2).card().is_none());
    }

    #[test]
    fn context_reaches_every_instantiated_card() {
        let mut view = mounted(RecordingHost::default());
        view.set_context(&"tick".to_string());
        view.set_context(&"tock".to_string());
        assert_eq!(
            view.host.updates,
            vec![
                (0, "tick".into()),
                (1, "tick".into()),
                (0, "tock".into()),
                (1, "tock".into()),
            ]
        );
    }

    #[test]
    fn context_skips_failed_slots() {
        let host = RecordingHost {
            fail_on: Some(serde_json::json!({"type": "cover-card"})),
            ..RecordingHost::default()
        };
        let mut view = mounted(host);
        view.set_context(&"tick".to_string());
        assert_eq!(view.host.updates, vec![(0, "tick".into())]);
    }

    #[test]
    fn mutations_return_the_fresh_projection() {
        let mut view = mounted(RecordingHost::default());
        let entries = view.toggle(2);
        assert!(entries[2].open && !entries[0].open);

        let entries = view.set_search("garage");
        assert_eq!(
            entries.iter().filter(|e| e.visible).count(),
            1,
            "only the Garage panel should remain visible"
        );

        let entries = view.set_open_all(false);
        assert!(entries.iter().all(|e| !e.open));
    }

    #[test]
    fn activate_filter_with_unknown_name_returns_none() {
        let config = PanelSetConfig::new(vec![Item::new().title("Garage").category("cover")])
            .policy(OpenPolicy::Independent)
            .filters(vec![Filter::from_expression(
                "Covers",
                "item.category === 'cover'",
            )]);
        let mut view = PanelView::mount(config, RecordingHost::default()).unwrap();
        assert!(view.activate_filter("Missing").is_none());
        let entries = view.activate_filter("Covers").unwrap();
        assert!(entries[0].visible);
    }
}
