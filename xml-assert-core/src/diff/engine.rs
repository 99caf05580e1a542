use crate::diff::result::Difference;
use crate::tree::{ExpandedName, XmlNode};

/// Enumerate every structural disagreement between two trees.
///
/// Synchronized depth-first walk; exhaustive (never stops at the first
/// difference) and pure (neither tree is mutated). Paths are dotted, rooted
/// at the expected document's root name, with 1-based indices per sibling
/// name group, e.g. `root.ns:item[2]`.
pub fn detect(expected: &XmlNode, actual: &XmlNode) -> Vec<Difference> {
    let mut out = Vec::new();
    let root_path = expected.name.qualified();
    detect_node(expected, actual, &root_path, &mut out);
    out
}

fn detect_node(expected: &XmlNode, actual: &XmlNode, path: &str, out: &mut Vec<Difference>) {
    let names_match = expected.name.matches(&actual.name);
    if !names_match {
        out.push(Difference::ElementTagName {
            path: path.to_string(),
            expected: expected.name.qualified(),
            actual: actual.name.qualified(),
        });
    }

    // Prefix spelling is compared on its own, whether or not the expanded
    // names agree.
    if expected.name.prefix != actual.name.prefix {
        out.push(Difference::NamespacePrefix {
            path: path.to_string(),
            expected: expected.name.qualified(),
            actual: actual.name.qualified(),
        });
    }

    if !names_match {
        // Attribute and text comparison of differently named elements would
        // only add noise; their children still get walked.
        detect_children(expected, actual, path, out);
        return;
    }

    detect_attributes(expected, actual, path, out);

    let expected_text = normalize_text(&expected.text);
    let actual_text = normalize_text(&actual.text);
    if expected_text != actual_text {
        out.push(Difference::TextValue {
            path: path.to_string(),
            expected: expected_text.map(str::to_string),
            actual: actual_text.map(str::to_string),
        });
    }

    detect_children(expected, actual, path, out);
}

fn detect_attributes(expected: &XmlNode, actual: &XmlNode, path: &str, out: &mut Vec<Difference>) {
    for (name, expected_attr) in &expected.attributes {
        match actual.attributes.get(name) {
            Some(actual_attr) => {
                if expected_attr.value != actual_attr.value {
                    out.push(Difference::AttrValue {
                        path: path.to_string(),
                        attribute: expected_attr.qualified(name),
                        expected: Some(expected_attr.value.clone()),
                        actual: Some(actual_attr.value.clone()),
                    });
                }
                if expected_attr.prefix != actual_attr.prefix {
                    out.push(Difference::NamespacePrefix {
                        path: path.to_string(),
                        expected: expected_attr.qualified(name),
                        actual: actual_attr.qualified(name),
                    });
                }
            }
            None => out.push(Difference::AttrValue {
                path: path.to_string(),
                attribute: expected_attr.qualified(name),
                expected: Some(expected_attr.value.clone()),
                actual: None,
            }),
        }
    }

    for (name, actual_attr) in &actual.attributes {
        if !expected.attributes.contains_key(name) {
            out.push(Difference::AttrValue {
                path: path.to_string(),
                attribute: actual_attr.qualified(name),
                expected: None,
                actual: Some(actual_attr.value.clone()),
            });
        }
    }
}

/// Children are grouped by expanded name in first-seen order across both
/// sides, then matched by index within each group. Pairing by identity before
/// position means a reordered-but-equal child yields a sequence difference
/// only, never cascaded content mismatches.
fn detect_children(expected: &XmlNode, actual: &XmlNode, path: &str, out: &mut Vec<Difference>) {
    let mut names: Vec<ExpandedName> = Vec::new();
    for child in expected.children.iter().chain(actual.children.iter()) {
        let name = child.name.expanded();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    for name in names {
        let expected_group = name_group(expected, &name);
        let actual_group = name_group(actual, &name);

        let max = expected_group.len().max(actual_group.len());
        for i in 0..max {
            match (expected_group.get(i), actual_group.get(i)) {
                (Some(&(expected_pos, expected_child)), Some(&(actual_pos, actual_child))) => {
                    let child_path =
                        format!("{path}.{}[{}]", expected_child.name.qualified(), i + 1);
                    if expected_pos != actual_pos {
                        out.push(Difference::ChildSequence {
                            path: child_path.clone(),
                            expected_position: expected_pos + 1,
                            actual_position: actual_pos + 1,
                        });
                    }
                    detect_node(expected_child, actual_child, &child_path, out);
                }
                (Some(&(_, expected_child)), None) => {
                    let child_path =
                        format!("{path}.{}[{}]", expected_child.name.qualified(), i + 1);
                    out.push(Difference::ChildNodeNotFound {
                        path: child_path,
                        expected: Some(expected_child.to_string()),
                        actual: None,
                    });
                }
                (None, Some(&(_, actual_child))) => {
                    let child_path = format!("{path}.{}[{}]", actual_child.name.qualified(), i + 1);
                    out.push(Difference::ChildNodeNotFound {
                        path: child_path,
                        expected: None,
                        actual: Some(actual_child.to_string()),
                    });
                }
                (None, None) => {}
            }
        }
    }
}

fn name_group<'a>(node: &'a XmlNode, name: &ExpandedName) -> Vec<(usize, &'a XmlNode)> {
    node.children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.name.expanded() == *name)
        .collect()
}

fn normalize_text(input: &Option<String>) -> Option<&str> {
    input.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
