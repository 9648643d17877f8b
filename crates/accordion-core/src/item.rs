#![forbid(unsafe_code)]

//! Collapsible panel items.
//!
//! An [`Item`] is one entry in the panel set: a display title plus optional
//! classification fields consulted by search and filters, and an opaque
//! [`CardConfig`] handed to the host layer for sub-widget embedding. Item
//! identity is positional; the configured order is fixed for the lifetime of
//! the panel set.

use std::borrow::Cow;

/// Opaque configuration for an embedded sub-widget ("card").
///
/// The state model never inspects the contents; it is carried through to the
/// host collaborator verbatim at mount time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardConfig(pub serde_json::Value);

impl CardConfig {
    /// Wrap a host-defined configuration value.
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying value (for the host layer only).
    #[must_use]
    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// One collapsible entry in a panel set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    /// Display label. When absent, [`Item::display_title`] falls back to
    /// `"Item {index+1}"`.
    pub title: Option<String>,
    /// Optional classification field used by search and filters.
    pub category: Option<String>,
    /// Optional secondary grouping field.
    pub room: Option<String>,
    /// Favorite flag, exposed to the filter grammar as a boolean field.
    pub favorite: bool,
    /// Configuration for the embedded sub-widget, if any.
    pub card: Option<CardConfig>,
}

impl Item {
    /// Create an empty item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the category field.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the room grouping field.
    #[must_use]
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Mark the item as a favorite.
    #[must_use]
    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Attach an embedded sub-widget configuration.
    #[must_use]
    pub fn card(mut self, card: CardConfig) -> Self {
        self.card = Some(card);
        self
    }

    /// The title shown to the user: the configured title, or `"Item {n}"`
    /// (1-based) when none was configured.
    #[must_use]
    pub fn display_title(&self, index: usize) -> Cow<'_, str> {
        match &self.title {
            Some(title) => Cow::Borrowed(title.as_str()),
            None => Cow::Owned(format!("Item {}", index + 1)),
        }
    }
}
