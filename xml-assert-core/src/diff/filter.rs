use std::collections::HashSet;

use crate::compare::CompareConfig;
use crate::diff::result::{Difference, DifferenceKind};

/// The set of difference kinds the configuration declares insignificant.
pub fn ignorable_kinds(config: &CompareConfig) -> HashSet<DifferenceKind> {
    let mut kinds = HashSet::new();
    if config.ignore_namespace_prefixes {
        kinds.insert(DifferenceKind::NamespacePrefix);
    }
    if config.ignore_child_order {
        kinds.insert(DifferenceKind::ChildSequence);
    }
    kinds
}

/// Drop differences of ignorable kinds, keeping the rest in detection order.
///
/// Dropping a sequence difference treats the reordered children as identical
/// at that position: detection already paired them by name before position,
/// so no positional residue is left behind for filtering to miss. With no
/// ignorable kinds configured this is a pass-through.
pub fn filter_differences(differences: Vec<Difference>, config: &CompareConfig) -> Vec<Difference> {
    let kinds = ignorable_kinds(config);
    if kinds.is_empty() {
        return differences;
    }

    differences
        .into_iter()
        .filter(|difference| !kinds.contains(&difference.kind()))
        .collect()
}
