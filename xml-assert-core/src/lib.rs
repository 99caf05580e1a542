//! Semantic XML comparison for test assertions.
//!
//! Two documents are parsed into trees, normalized, walked in lock-step to
//! enumerate every structural disagreement, and filtered down to the
//! differences the caller considers significant. The verdict of [`compare`]
//! is pass/fail plus a rendered diagnostic for each surviving difference.

pub mod compare;
pub mod diff;
pub mod format;
pub mod normalize;
pub mod parser;
pub mod tree;

pub use compare::{compare, CompareConfig, CompareError, ComparisonResult};
pub use diff::{detect, filter_differences, Difference, DifferenceKind};
pub use format::{format_json, format_summary, format_text};
pub use normalize::normalize;
pub use parser::{parse, parse_file, ParseError};
pub use tree::{Attribute, ExpandedName, QName, XmlNode};
