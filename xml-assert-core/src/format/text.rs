use crate::diff::result::{Difference, DifferenceKind};

/// Format differences as plain text, one rendered line per difference.
pub fn format_text(differences: &[Difference]) -> String {
    differences
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a simple summary of per-kind difference counts.
pub fn format_summary(differences: &[Difference]) -> String {
    let mut tag_name = 0;
    let mut namespace_prefix = 0;
    let mut attr_value = 0;
    let mut text_value = 0;
    let mut child_not_found = 0;
    let mut child_sequence = 0;

    for difference in differences {
        match difference.kind() {
            DifferenceKind::ElementTagName => tag_name += 1,
            DifferenceKind::NamespacePrefix => namespace_prefix += 1,
            DifferenceKind::AttrValue => attr_value += 1,
            DifferenceKind::TextValue => text_value += 1,
            DifferenceKind::ChildNodeNotFound => child_not_found += 1,
            DifferenceKind::ChildSequence => child_sequence += 1,
        }
    }

    format!(
        "tag_name={tag_name} namespace_prefix={namespace_prefix} attr_value={attr_value} text_value={text_value} child_not_found={child_not_found} child_sequence={child_sequence}"
    )
}
