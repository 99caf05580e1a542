use crate::compare::CompareConfig;
use crate::tree::XmlNode;

/// Apply configured normalization to a parsed tree.
///
/// With `ignore_empty_nodes` set this returns a pruned copy; otherwise the
/// tree passes through unchanged.
pub fn normalize(tree: XmlNode, config: &CompareConfig) -> XmlNode {
    if config.ignore_empty_nodes {
        prune_empty(&tree)
    } else {
        tree
    }
}

/// Build a copy with empty descendants pruned, bottom-up: each child subtree
/// is pruned first, then dropped if nothing remains in it. An element whose
/// only children prune away is itself removed one level up. The root is
/// always returned, even when everything under it collapses.
fn prune_empty(node: &XmlNode) -> XmlNode {
    let mut pruned = XmlNode {
        name: node.name.clone(),
        attributes: node.attributes.clone(),
        children: Vec::new(),
        text: node.text.clone(),
    };

    for child in &node.children {
        let child = prune_empty(child);
        if !child.is_empty() {
            pruned.children.push(child);
        }
    }

    pruned
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::compare::CompareConfig;
    use crate::parser::parse;

    #[test]
    fn nested_empty_chain_collapses_to_bare_root() {
        let tree = parse(b"<root><a><b/></a><c>kept</c></root>").expect("parse");
        let pruned = normalize(tree, &CompareConfig::default());

        assert!(pruned.get_child("a").is_none());
        assert_eq!(pruned.get_child("c").and_then(|c| c.text.as_deref()), Some("kept"));
    }

    #[test]
    fn root_survives_even_when_empty() {
        let tree = parse(b"<root><a/></root>").expect("parse");
        let pruned = normalize(tree, &CompareConfig::default());

        assert_eq!(pruned.name.local, "root");
        assert!(pruned.is_empty());
    }

    #[test]
    fn pass_through_when_switch_is_off() {
        let tree = parse(b"<root><a/></root>").expect("parse");
        let kept = normalize(tree.clone(), &CompareConfig::strict());

        assert_eq!(kept, tree);
    }
}
