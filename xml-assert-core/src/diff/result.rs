use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Classifies a detected difference for filtering and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    ElementTagName,
    NamespacePrefix,
    AttrValue,
    TextValue,
    ChildNodeNotFound,
    ChildSequence,
}

/// A single structural disagreement between the expected and actual trees.
///
/// Each variant carries the dotted tree path of the disagreement plus the
/// expected-side and actual-side renderings. Produced once by detection,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Difference {
    /// Expanded element names (URI + local) disagree at the same position.
    ElementTagName {
        path: String,
        expected: String,
        actual: String,
    },
    /// Same expanded name, different prefix spelling (element or attribute).
    NamespacePrefix {
        path: String,
        expected: String,
        actual: String,
    },
    /// Attribute missing, extra, or carrying a different value.
    AttrValue {
        path: String,
        attribute: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// Text content disagrees.
    TextValue {
        path: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// A child on one side has no counterpart on the other.
    ChildNodeNotFound {
        path: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// Same child on both sides, different sibling position (1-based).
    ChildSequence {
        path: String,
        expected_position: usize,
        actual_position: usize,
    },
}

impl Difference {
    pub fn kind(&self) -> DifferenceKind {
        match self {
            Difference::ElementTagName { .. } => DifferenceKind::ElementTagName,
            Difference::NamespacePrefix { .. } => DifferenceKind::NamespacePrefix,
            Difference::AttrValue { .. } => DifferenceKind::AttrValue,
            Difference::TextValue { .. } => DifferenceKind::TextValue,
            Difference::ChildNodeNotFound { .. } => DifferenceKind::ChildNodeNotFound,
            Difference::ChildSequence { .. } => DifferenceKind::ChildSequence,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Difference::ElementTagName { path, .. }
            | Difference::NamespacePrefix { path, .. }
            | Difference::AttrValue { path, .. }
            | Difference::TextValue { path, .. }
            | Difference::ChildNodeNotFound { path, .. }
            | Difference::ChildSequence { path, .. } => path,
        }
    }
}

impl Display for Difference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Difference::ElementTagName {
                path,
                expected,
                actual,
            } => write!(
                f,
                "expected element tag name '{expected}' but was '{actual}' at {path}"
            ),
            Difference::NamespacePrefix {
                path,
                expected,
                actual,
            } => write!(
                f,
                "expected namespace prefix '{expected}' but was '{actual}' at {path}"
            ),
            Difference::AttrValue {
                path,
                attribute,
                expected,
                actual,
            } => match (expected, actual) {
                (Some(expected), Some(actual)) => write!(
                    f,
                    "expected attribute '{attribute}' value '{expected}' but was '{actual}' at {path}"
                ),
                (Some(expected), None) => write!(
                    f,
                    "expected attribute '{attribute}' with value '{expected}' but attribute was absent at {path}"
                ),
                (None, Some(actual)) => write!(
                    f,
                    "unexpected attribute '{attribute}' with value '{actual}' at {path}"
                ),
                (None, None) => write!(f, "attribute '{attribute}' differs at {path}"),
            },
            Difference::TextValue {
                path,
                expected,
                actual,
            } => match (expected, actual) {
                (Some(expected), Some(actual)) => write!(
                    f,
                    "expected text '{expected}' but was '{actual}' at {path}"
                ),
                (Some(expected), None) => write!(
                    f,
                    "expected text '{expected}' but element had no text at {path}"
                ),
                (None, Some(actual)) => {
                    write!(f, "expected no text but was '{actual}' at {path}")
                }
                (None, None) => write!(f, "text differs at {path}"),
            },
            Difference::ChildNodeNotFound {
                path,
                expected,
                actual,
            } => match (expected, actual) {
                (Some(expected), _) => {
                    write!(f, "expected child '{expected}' but was not found at {path}")
                }
                (_, Some(actual)) => write!(f, "unexpected child '{actual}' at {path}"),
                (None, None) => write!(f, "child not found at {path}"),
            },
            Difference::ChildSequence {
                path,
                expected_position,
                actual_position,
            } => write!(
                f,
                "expected child at position {expected_position} but was at position {actual_position} at {path}"
            ),
        }
    }
}
