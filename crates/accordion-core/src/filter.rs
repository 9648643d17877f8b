#![forbid(unsafe_code)]

//! Named filters and the condition grammar.
//!
//! A [`Filter`] selects a subset of items by name. Its optional [`Condition`]
//! is a closed predicate grammar — one item field, a strict-equality operator,
//! one literal — parsed from the declarative string form
//! `item.<field> === <literal>`. Condition text is interpreted by a safe
//! evaluator and is never compiled or executed as code.
//!
//! Malformed condition text fails **closed**: a filter holding an expression
//! that did not parse matches nothing, so a single typo in user-supplied
//! configuration hides items instead of breaking the whole panel set.

use crate::item::Item;
use std::fmt;

/// Filter names that match every item regardless of condition.
///
/// Compared case-insensitively; the localized `"Alle"` spelling is accepted
/// alongside `"All"`.
pub const MATCH_ALL_NAMES: &[&str] = &["All", "Alle"];

// ---------------------------------------------------------------------------
// Condition grammar
// ---------------------------------------------------------------------------

/// Item fields addressable by a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Category,
    Room,
    Favorite,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "category" => Some(Self::Category),
            "room" => Some(Self::Room),
            "favorite" => Some(Self::Favorite),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Room => "room",
            Self::Favorite => "favorite",
        }
    }
}

/// Right-hand side of a condition: a quoted string or a bare boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Bool(bool),
}

impl Literal {
    fn parse(text: &str) -> Result<Self, ConditionParseError> {
        match text {
            "true" => return Ok(Self::Bool(true)),
            "false" => return Ok(Self::Bool(false)),
            _ => {}
        }
        let bytes = text.as_bytes();
        if bytes.len() >= 2 {
            let quote = bytes[0];
            if (quote == b'\'' || quote == b'"') && bytes[bytes.len() - 1] == quote {
                return Ok(Self::Str(text[1..text.len() - 1].to_string()));
            }
        }
        Err(ConditionParseError::BadLiteral(text.to_string()))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Error from parsing a condition expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionParseError {
    /// The expression was empty or whitespace.
    Empty,
    /// The expression is not of the form `item.<field> === <literal>`.
    UnsupportedShape(String),
    /// The referenced field is not part of the item model.
    UnknownField(String),
    /// The right-hand side is neither a quoted string nor `true`/`false`.
    BadLiteral(String),
}

impl fmt::Display for ConditionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty condition expression"),
            Self::UnsupportedShape(expr) => {
                write!(f, "condition is not `item.<field> === <literal>`: {expr}")
            }
            Self::UnknownField(name) => write!(f, "unknown item field: {name}"),
            Self::BadLiteral(text) => write!(f, "invalid condition literal: {text}"),
        }
    }
}

impl std::error::Error for ConditionParseError {}

/// A single strict-equality test of one item field against one literal.
///
/// This is the full expressive power of the filter grammar; there is no
/// boolean composition, no ranges, no nested fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    field: Field,
    literal: Literal,
}

impl Condition {
    /// Construct a condition directly from its parts.
    #[must_use]
    pub fn new(field: Field, literal: Literal) -> Self {
        Self { field, literal }
    }

    /// Parse the declarative string form `item.<field> === <literal>`.
    ///
    /// The loose `==` operator is accepted as an alias for `===`. Literals
    /// are single- or double-quoted strings, or bare `true`/`false`.
    pub fn parse(input: &str) -> Result<Self, ConditionParseError> {
        let expr = input.trim();
        if expr.is_empty() {
            return Err(ConditionParseError::Empty);
        }

        let (lhs, rhs) = if let Some(pos) = expr.find("===") {
            (&expr[..pos], &expr[pos + 3..])
        } else if let Some(pos) = expr.find("==") {
            (&expr[..pos], &expr[pos + 2..])
        } else {
            return Err(ConditionParseError::UnsupportedShape(expr.to_string()));
        };

        let field_name = lhs
            .trim()
            .strip_prefix("item.")
            .ok_or_else(|| ConditionParseError::UnsupportedShape(expr.to_string()))?
            .trim();
        let field = Field::from_name(field_name)
            .ok_or_else(|| ConditionParseError::UnknownField(field_name.to_string()))?;
        let literal = Literal::parse(rhs.trim())?;

        Ok(Self { field, literal })
    }

    /// Evaluate the condition against an item.
    ///
    /// Type-mismatched comparisons (a string literal against the `favorite`
    /// flag, a boolean against a text field) and comparisons against a missing
    /// optional field never match.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match (self.field, &self.literal) {
            (Field::Title, Literal::Str(s)) => item.title.as_deref() == Some(s.as_str()),
            (Field::Category, Literal::Str(s)) => item.category.as_deref() == Some(s.as_str()),
            (Field::Room, Literal::Str(s)) => item.room.as_deref() == Some(s.as_str()),
            (Field::Favorite, Literal::Bool(b)) => item.favorite == *b,
            _ => false,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item.{} === {}", self.field.name(), self.literal)
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// How a filter decides whether an item matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCondition {
    /// No condition configured: every item matches.
    MatchAll,
    /// A parsed condition to evaluate per item.
    Test(Condition),
    /// Raw condition text that failed to parse; matches nothing.
    Invalid(String),
}

/// A named, declarative predicate selecting a subset of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    name: String,
    condition: FilterCondition,
}

impl Filter {
    /// A filter with no condition; matches every item.
    #[must_use]
    pub fn match_all(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            condition: FilterCondition::MatchAll,
        }
    }

    /// A filter with an already-constructed condition.
    #[must_use]
    pub fn with_condition(name: impl Into<String>, condition: Condition) -> Self {
        Self {
            name: name.into(),
            condition: FilterCondition::Test(condition),
        }
    }

    /// A filter parsed from declarative condition text.
    ///
    /// Parsing never fails outward: malformed text is retained as
    /// [`FilterCondition::Invalid`] and the filter matches nothing. Callers
    /// that want the parse error should use [`Condition::parse`] directly.
    #[must_use]
    pub fn from_expression(name: impl Into<String>, expression: &str) -> Self {
        let condition = match Condition::parse(expression) {
            Ok(condition) => FilterCondition::Test(condition),
            Err(_) => FilterCondition::Invalid(expression.to_string()),
        };
        Self {
            name: name.into(),
            condition,
        }
    }

    /// The filter's display label and matching key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The filter's condition.
    #[must_use]
    pub fn condition(&self) -> &FilterCondition {
        &self.condition
    }

    /// Whether this filter is the reserved match-all pseudo-filter.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        MATCH_ALL_NAMES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(&self.name))
    }

    /// Evaluate the filter against an item.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        if self.is_match_all() {
            return true;
        }
        match &self.condition {
            FilterCondition::MatchAll => true,
            FilterCondition::Test(condition) => condition.matches(item),
            FilterCondition::Invalid(_) => false,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Filter, FilterCondition};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Wire shape: `{ "name": "...", "condition": "item.category === 'light'" }`.
    #[derive(Serialize, Deserialize)]
    struct FilterRepr {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
    }

    impl Serialize for Filter {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let condition = match &self.condition {
                FilterCondition::MatchAll => None,
                FilterCondition::Test(condition) => Some(condition.to_string()),
                FilterCondition::Invalid(raw) => Some(raw.clone()),
            };
            FilterRepr {
                name: self.name.clone(),
                condition,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Filter {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = FilterRepr::deserialize(deserializer)?;
            Ok(match repr.condition {
                None => Filter::match_all(repr.name),
                Some(expression) => Filter::from_expression(repr.name, &expression),
            })
        }
    }
}
