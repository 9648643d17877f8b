#![forbid(unsafe_code)]

//! The panel-set state model.
//!
//! [`PanelSetState`] is the single source of truth for a set of collapsible
//! panels: which are open (under an [`OpenPolicy`]) and which are visible
//! (the conjunction of the active filter and the search term). All operations
//! are synchronous and total once their preconditions hold; rendering layers
//! consume the [`PanelSetState::derive`] projection after every mutation.
//!
//! # Invariants
//!
//! 1. Under [`OpenPolicy::Exclusive`], at most one panel is open after any
//!    [`toggle`](PanelSetState::toggle). [`set_open_all`](PanelSetState::set_open_all)
//!    is the documented escape hatch that bypasses this (expand-all controls).
//! 2. `visible(i) == matches_filter(i) && matches_search(i)`, recomputed in
//!    full on every projection; visibility is never cached.
//! 3. Items are never reordered or removed; identity is the configured index.

use crate::config::{ConfigError, PanelSetConfig};
use crate::filter::Filter;
use crate::item::Item;
use crate::search;

/// How toggling one panel affects the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OpenPolicy {
    /// At most one panel open at a time (classic accordion behavior).
    #[default]
    Exclusive,
    /// Any subset of panels may be open simultaneously.
    Independent,
}

/// Derived per-panel output consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelEntry {
    /// The item's configured index.
    pub index: usize,
    /// Whether the panel is expanded.
    pub open: bool,
    /// Whether the panel passes the active filter and search term.
    pub visible: bool,
}

/// Panels grouped by room, for the grouped presentation variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelGroup {
    /// The shared room, or `None` for the trailing ungrouped panels.
    pub room: Option<String>,
    /// Entries in configured item order.
    pub entries: Vec<PanelEntry>,
}

/// State for one panel set. Single-owner, mutated in place, no interior
/// concurrency.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSetState {
    items: Vec<Item>,
    open: Vec<bool>,
    policy: OpenPolicy,
    filters: Vec<Filter>,
    active_filter: Option<Filter>,
    search: String,
}

impl PanelSetState {
    /// Build the state from a configuration.
    ///
    /// Fails with [`ConfigError::NoItems`] when the item list is empty. With
    /// `open_at_start` under the exclusive policy, only index 0 starts open
    /// (the tie-break for "all open" being unsatisfiable under at-most-one).
    pub fn new(config: PanelSetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let PanelSetConfig {
            items,
            policy,
            open_at_start,
            filters,
        } = config;

        let open = match (open_at_start, policy) {
            (false, _) => vec![false; items.len()],
            (true, OpenPolicy::Independent) => vec![true; items.len()],
            (true, OpenPolicy::Exclusive) => {
                let mut open = vec![false; items.len()];
                open[0] = true;
                open
            }
        };

        Ok(Self {
            items,
            open,
            policy,
            filters,
            active_filter: None,
            search: String::new(),
        })
    }

    /// The configured items, in identity order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: a constructed state holds at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The open policy.
    #[must_use]
    pub fn policy(&self) -> OpenPolicy {
        self.policy
    }

    /// The configured filter palette, in configured order.
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// The active filter, if any.
    #[must_use]
    pub fn active_filter(&self) -> Option<&Filter> {
        self.active_filter.as_ref()
    }

    /// The normalized search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Whether the panel at `index` is open.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range; passing a valid index is the
    /// caller's contract.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open[index]
    }

    /// Toggle the panel at `index`.
    ///
    /// Under [`OpenPolicy::Exclusive`], opening a panel closes every other
    /// one, and toggling the already-open panel collapses the whole set.
    /// Under [`OpenPolicy::Independent`], only `index` is affected. Filter
    /// and search state are untouched.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range (contract violation by the
    /// rendering layer, not a runtime condition).
    pub fn toggle(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "panel index {index} out of range for {} items",
            self.items.len()
        );

        match self.policy {
            OpenPolicy::Exclusive => {
                let was_open = self.open[index];
                self.open.fill(false);
                self.open[index] = !was_open;
            }
            OpenPolicy::Independent => {
                self.open[index] = !self.open[index];
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            index,
            open = self.open[index],
            open_count = self.open.iter().filter(|&&o| o).count(),
            "panel toggled"
        );
    }

    /// Replace the active filter. Open flags are untouched.
    pub fn set_filter(&mut self, filter: Option<Filter>) {
        self.active_filter = filter;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            filter = self.active_filter.as_ref().map(Filter::name),
            visible_count = self.visible_count(),
            "filter changed"
        );
    }

    /// Activate a filter from the configured palette by name.
    ///
    /// Returns false (leaving the active filter unchanged) when no configured
    /// filter has that name.
    pub fn activate_filter(&mut self, name: &str) -> bool {
        match self.filters.iter().find(|f| f.name() == name).cloned() {
            Some(filter) => {
                self.set_filter(Some(filter));
                true
            }
            None => false,
        }
    }

    /// Replace the search term, normalizing it (trim + case-fold) first.
    /// Open flags are untouched; the empty term matches every item.
    pub fn set_search(&mut self, term: &str) {
        self.search = search::normalize(term);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            term = %self.search,
            visible_count = self.visible_count(),
            "search changed"
        );
    }

    /// Open or close every panel unconditionally.
    ///
    /// This is the expand-all / collapse-all escape hatch: it deliberately
    /// bypasses the exclusive at-most-one invariant.
    pub fn set_open_all(&mut self, open: bool) {
        self.open.fill(open);

        #[cfg(feature = "tracing")]
        tracing::debug!(open, "bulk open state set");
    }

    fn matches_filter(&self, item: &Item) -> bool {
        match &self.active_filter {
            None => true,
            Some(filter) => filter.matches(item),
        }
    }

    fn matches_search(&self, item: &Item, index: usize) -> bool {
        search::item_matches(item, index, &self.search)
    }

    /// Whether the panel at `index` passes both the active filter and the
    /// search term.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        let item = &self.items[index];
        self.matches_filter(item) && self.matches_search(item, index)
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn visible_count(&self) -> usize {
        (0..self.items.len()).filter(|&i| self.is_visible(i)).count()
    }

    /// Project the full per-panel state, in item order.
    ///
    /// Pure: recomputed from scratch on every call, no cached visibility.
    #[must_use]
    pub fn derive(&self) -> Vec<PanelEntry> {
        (0..self.items.len())
            .map(|index| PanelEntry {
                index,
                open: self.open[index],
                visible: self.is_visible(index),
            })
            .collect()
    }

    /// Project the per-panel state grouped by room.
    ///
    /// Rooms appear in order of first appearance; items without a room are
    /// collected into a trailing group with `room: None` (omitted when every
    /// item has a room). Entry order inside each group follows item order.
    #[must_use]
    pub fn derive_grouped(&self) -> Vec<PanelGroup> {
        let mut groups: Vec<PanelGroup> = Vec::new();
        let mut ungrouped: Vec<PanelEntry> = Vec::new();

        for entry in self.derive() {
            match &self.items[entry.index].room {
                Some(room) => {
                    match groups
                        .iter_mut()
                        .find(|g| g.room.as_deref() == Some(room.as_str()))
                    {
                        Some(group) => group.entries.push(entry),
                        None => groups.push(PanelGroup {
                            room: Some(room.clone()),
                            entries: vec![entry],
                        }),
                    }
                }
                None => ungrouped.push(entry),
            }
        }

        if !ungrouped.is_empty() {
            groups.push(PanelGroup {
                room: None,
                entries: ungrouped,
            });
        }
        groups
    }
}
