use serde::Serialize;
use thiserror::Error;

use crate::diff::{detect, filter_differences, Difference};
use crate::normalize::normalize;
use crate::parser::{parse, ParseError};

/// Switches controlling which detected differences count against equality.
///
/// Each switch is independent; any combination is valid. The defaults match
/// the legacy assertion configuration: everything ignorable is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Prune elements that have no children and no text before comparing.
    pub ignore_empty_nodes: bool,
    /// Treat namespace prefix respelling as insignificant.
    pub ignore_namespace_prefixes: bool,
    /// Treat sibling reordering as insignificant.
    pub ignore_child_order: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            ignore_empty_nodes: true,
            ignore_namespace_prefixes: true,
            ignore_child_order: true,
        }
    }
}

impl CompareConfig {
    /// A configuration with every switch off: every difference counts.
    pub fn strict() -> Self {
        Self {
            ignore_empty_nodes: false,
            ignore_namespace_prefixes: false,
            ignore_child_order: false,
        }
    }
}

/// Errors from [`compare`]: one of the two inputs failed to parse.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The expected document is not well-formed XML.
    #[error("expected document is malformed: {0}")]
    ExpectedMalformed(#[source] ParseError),
    /// The actual document is not well-formed XML.
    #[error("actual document is malformed: {0}")]
    ActualMalformed(#[source] ParseError),
}

/// Verdict of one comparison: pass/fail plus the surviving differences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// True when no difference survived filtering.
    pub passed: bool,
    /// Surviving differences, in detection order.
    pub differences: Vec<Difference>,
}

impl ComparisonResult {
    fn pass() -> Self {
        Self {
            passed: true,
            differences: Vec::new(),
        }
    }

    /// Diagnostic message, one rendered difference per line. `None` on pass.
    pub fn message(&self) -> Option<String> {
        if self.differences.is_empty() {
            return None;
        }
        Some(
            self.differences
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// Compare two XML documents for semantic equality.
///
/// Parses both inputs, normalizes both with the same configuration, detects
/// every structural difference, and drops the kinds the configuration
/// declares insignificant. Passes iff nothing survives.
///
/// An empty `expected` or `actual` string short-circuits to a pass with no
/// differences. This mirrors the legacy behavior for test wiring that has
/// not populated a value yet; it is a compatibility quirk, not a validation
/// rule, and does not extend to any other input.
pub fn compare(
    expected: &str,
    actual: &str,
    config: &CompareConfig,
) -> Result<ComparisonResult, CompareError> {
    if expected.is_empty() || actual.is_empty() {
        return Ok(ComparisonResult::pass());
    }

    let expected_tree = parse(expected.as_bytes()).map_err(CompareError::ExpectedMalformed)?;
    let actual_tree = parse(actual.as_bytes()).map_err(CompareError::ActualMalformed)?;

    let expected_tree = normalize(expected_tree, config);
    let actual_tree = normalize(actual_tree, config);

    let differences = filter_differences(detect(&expected_tree, &actual_tree), config);

    Ok(ComparisonResult {
        passed: differences.is_empty(),
        differences,
    })
}
