#![forbid(unsafe_code)]

//! Host embedding layer for accordion panel sets.
//!
//! The state model in `accordion-core` is deliberately ignorant of any UI
//! framework. This crate provides the seam to the embedding environment: a
//! [`CardHost`] trait the host implements to instantiate and update embedded
//! sub-widgets ("cards"), and a [`PanelView`] adapter that owns the state
//! plus the instantiated cards and hands the host a fresh projection after
//! every mutation.
//!
//! Cards are instantiated **eagerly** at mount time, once per item, regardless
//! of the panel's open or visible state; shared host-context updates are
//! forwarded to every instantiated card.

use std::fmt;

pub mod view;

pub use view::{CardSlot, PanelView};

use accordion_core::CardConfig;

/// Errors a host can report while instantiating a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The host does not support this card configuration.
    Unsupported(String),
    /// Instantiation was attempted and failed.
    Creation(String),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(msg) => write!(f, "unsupported card configuration: {msg}"),
            Self::Creation(msg) => write!(f, "card creation failed: {msg}"),
        }
    }
}

impl std::error::Error for CardError {}

/// The embedding environment's side of the contract.
///
/// `Card` is the host's handle to one instantiated sub-widget; `Context` is
/// the shared host data (the source's `hass` object) pushed to every card
/// whenever it changes.
pub trait CardHost {
    type Card;
    type Context;

    /// Instantiate a sub-widget from its opaque configuration.
    fn create_card(&mut self, config: &CardConfig) -> Result<Self::Card, CardError>;

    /// Push updated shared context to an instantiated card.
    fn update_card(&mut self, card: &mut Self::Card, context: &Self::Context);
}
