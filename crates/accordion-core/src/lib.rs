#![forbid(unsafe_code)]

//! Panel-set state model for accordion panels.
//!
//! A panel set is an ordered, fixed list of collapsible items. This crate owns
//! the single source of truth for which panels are open and which are visible:
//! open flags under an [`OpenPolicy`], plus a visibility predicate that is the
//! conjunction of the active [`Filter`] and the current search term. Rendering
//! layers consume the [`PanelSetState::derive`] projection after every mutation
//! and never recover state from their own presentation tree.
//!
//! # Example
//!
//! ```
//! use accordion_core::{Item, OpenPolicy, PanelSetConfig, PanelSetState};
//!
//! let config = PanelSetConfig::new(vec![
//!     Item::new().title("Living Room").category("light"),
//!     Item::new().title("Kitchen").category("light"),
//! ])
//! .policy(OpenPolicy::Exclusive);
//!
//! let mut state = PanelSetState::new(config).unwrap();
//! state.toggle(0);
//! state.toggle(1);
//!
//! let entries = state.derive();
//! assert!(!entries[0].open); // auto-closed by the exclusive policy
//! assert!(entries[1].open);
//! ```

pub mod config;
pub mod filter;
pub mod item;
pub mod search;
pub mod state;

pub use config::{ConfigError, PanelSetConfig};
pub use filter::{Condition, ConditionParseError, Field, Filter, FilterCondition, Literal};
pub use item::{CardConfig, Item};
pub use state::{OpenPolicy, PanelEntry, PanelGroup, PanelSetState};
