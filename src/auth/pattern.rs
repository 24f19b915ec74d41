//! Structured wildcard patterns for Azure action strings.
//!
//! An action string is a slash-delimited permission identifier such as
//! `Microsoft.Compute/virtualMachines/read`. Patterns may use `*` as a
//! wildcard, either as a whole field (`Microsoft.Storage/*`) or as a single
//! segment inside the resource type (`Microsoft.Storage/storageAccounts/*/shares/read`).
//!
//! Each distinct string is parsed once into an [`ActionPattern`] triple;
//! matching then compares structured fields instead of rebuilding regexes
//! per comparison.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when an action string does not conform to the
/// `provider/[type/.../]action` wildcard grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Empty action string")]
    Empty,

    #[error("Action string '{0}' must name a resource provider and an action")]
    TooFewSegments(String),

    #[error("Two-segment action string '{0}' must contain exactly one wildcard segment")]
    WildcardCount(String),
}

/// One field of an [`ActionPattern`]: either the wildcard `*` or a literal.
///
/// The resource-type field's literal may span multiple `/`-separated
/// segments and may itself contain `*` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    Any,
    Literal(String),
}

impl Field {
    fn parse(segment: &str) -> Self {
        if segment == "*" {
            Field::Any
        } else {
            Field::Literal(segment.to_string())
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Field::Any => "*",
            Field::Literal(s) => s,
        }
    }

    /// Symmetric field match: a whole-field wildcard on either side matches
    /// anything; otherwise both literals must agree segment-wise, where a
    /// `*` segment on either side matches exactly one segment.
    fn matches(&self, other: &Field) -> bool {
        match (self, other) {
            (Field::Any, _) | (_, Field::Any) => true,
            (Field::Literal(a), Field::Literal(b)) => segments_match(a, b),
        }
    }
}

fn segments_match(a: &str, b: &str) -> bool {
    let left: Vec<&str> = a.split('/').collect();
    let right: Vec<&str> = b.split('/').collect();
    left.len() == right.len()
        && left
            .iter()
            .zip(&right)
            .all(|(l, r)| *l == "*" || *r == "*" || l == r)
}

/// An immutable `(provider, resource_type, action)` triple parsed from an
/// action string.
///
/// Parsing rules:
/// - `"*"` is the universal pattern (all three fields wildcard).
/// - Two segments must contain exactly one wildcard: `*/action` or
///   `provider/*`.
/// - Three or more segments: first is the provider, last is the action,
///   everything in between (rejoined with `/`) is the resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPattern {
    provider: Field,
    resource_type: Field,
    action: Field,
}

impl ActionPattern {
    /// The pattern that matches every action.
    pub fn universal() -> Self {
        Self {
            provider: Field::Any,
            resource_type: Field::Any,
            action: Field::Any,
        }
    }

    pub fn provider(&self) -> &str {
        self.provider.as_str()
    }

    pub fn resource_type(&self) -> &str {
        self.resource_type.as_str()
    }

    pub fn action(&self) -> &str {
        self.action.as_str()
    }

    /// Checks whether two patterns match field-by-field.
    ///
    /// The relation is commutative and reflexive; a wildcard matches
    /// anything in either operand.
    pub fn matches(&self, other: &ActionPattern) -> bool {
        self.provider.matches(&other.provider)
            && self.resource_type.matches(&other.resource_type)
            && self.action.matches(&other.action)
    }

    fn is_universal(&self) -> bool {
        self.provider == Field::Any
            && self.resource_type == Field::Any
            && self.action == Field::Any
    }
}

impl FromStr for ActionPattern {
    type Err = PatternError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if raw == "*" {
            return Ok(Self::universal());
        }

        let segments: Vec<&str> = raw.split('/').collect();
        match segments.len() {
            1 => Err(PatternError::TooFewSegments(raw.to_string())),
            2 => match (segments[0], segments[1]) {
                ("*", "*") => Err(PatternError::WildcardCount(raw.to_string())),
                ("*", action) => Ok(Self {
                    provider: Field::Any,
                    resource_type: Field::Any,
                    action: Field::Literal(action.to_string()),
                }),
                (provider, "*") => Ok(Self {
                    provider: Field::Literal(provider.to_string()),
                    resource_type: Field::Any,
                    action: Field::Any,
                }),
                _ => Err(PatternError::WildcardCount(raw.to_string())),
            },
            len => Ok(Self {
                provider: Field::parse(segments[0]),
                resource_type: Field::parse(&segments[1..len - 1].join("/")),
                action: Field::parse(segments[len - 1]),
            }),
        }
    }
}

impl fmt::Display for ActionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            write!(f, "*")
        } else {
            write!(
                f,
                "{}/{}/{}",
                self.provider.as_str(),
                self.resource_type.as_str(),
                self.action.as_str()
            )
        }
    }
}
