use xml_assert_core::{parse, ExpandedName, ParseError};

#[test]
fn parses_attributes_text_and_nested_elements() {
    let node = parse(b"<config><items><item id=\"1\">first</item><item id=\"2\"/></items></config>")
        .expect("parse should succeed");
    assert_eq!(node.name.local, "config");

    let items = node.get_child("items").expect("items should exist");
    let item_nodes = items.get_children("item");
    assert_eq!(item_nodes.len(), 2);
    assert_eq!(item_nodes[0].text.as_deref(), Some("first"));

    let id = ExpandedName::new(None::<String>, "id");
    assert_eq!(item_nodes[0].attributes.get(&id).map(|a| a.value.as_str()), Some("1"));
    assert!(item_nodes[1].is_empty());
}

#[test]
fn resolves_prefixed_and_default_namespaces() {
    let node = parse(
        br#"<x:root xmlns:x="urn:a" xmlns:y="urn:b"><y:item y:flag="on" plain="1"/></x:root>"#,
    )
    .expect("parse should succeed");

    assert_eq!(node.name.uri.as_deref(), Some("urn:a"));
    assert_eq!(node.name.local, "root");
    assert_eq!(node.name.prefix.as_deref(), Some("x"));

    let item = &node.children[0];
    assert_eq!(item.name.uri.as_deref(), Some("urn:b"));
    assert_eq!(item.name.prefix.as_deref(), Some("y"));

    let flag = ExpandedName::new(Some("urn:b"), "flag");
    let flag_attr = item.attributes.get(&flag).expect("prefixed attribute");
    assert_eq!(flag_attr.prefix.as_deref(), Some("y"));
    assert_eq!(flag_attr.value, "on");

    // Unprefixed attributes never take the default namespace.
    let plain = ExpandedName::new(None::<String>, "plain");
    assert!(item.attributes.contains_key(&plain));
}

#[test]
fn default_namespace_applies_to_elements_only() {
    let node = parse(br#"<root xmlns="urn:a"><child attr="v"/></root>"#).expect("parse");

    assert_eq!(node.name.uri.as_deref(), Some("urn:a"));
    assert!(node.name.prefix.is_none());

    let child = &node.children[0];
    assert_eq!(child.name.uri.as_deref(), Some("urn:a"));
    let attr = ExpandedName::new(None::<String>, "attr");
    assert!(child.attributes.contains_key(&attr));
}

#[test]
fn namespace_declarations_are_not_attributes() {
    let node = parse(br#"<root xmlns="urn:a" xmlns:x="urn:b" real="1"/>"#).expect("parse");
    assert_eq!(node.attributes.len(), 1);
    assert!(node
        .attributes
        .contains_key(&ExpandedName::new(None::<String>, "real")));
}

#[test]
fn coalesces_text_around_comments_and_cdata() {
    let node = parse(b"<a>one<!-- ignored -->two<![CDATA[ & three]]></a>").expect("parse");
    assert_eq!(node.text.as_deref(), Some("onetwo & three"));
    assert!(node.children.is_empty());
}

#[test]
fn decodes_entities_in_text_and_attributes() {
    let node = parse(br#"<a name="x &amp; y">1 &lt; 2</a>"#).expect("parse");
    assert_eq!(node.text.as_deref(), Some("1 < 2"));
    let name = ExpandedName::new(None::<String>, "name");
    assert_eq!(node.attributes.get(&name).map(|a| a.value.as_str()), Some("x & y"));
}

#[test]
fn discards_whitespace_only_text_between_elements() {
    let node = parse(b"<root>\n  <a>text</a>\n  <b/>\n</root>").expect("parse");
    assert!(node.text.is_none());
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].text.as_deref(), Some("text"));
}

#[test]
fn rejects_unclosed_elements() {
    let err = parse(b"<root><a>").expect_err("unclosed element must not parse");
    assert!(matches!(err, ParseError::Malformed(_) | ParseError::Xml(_)));
}

#[test]
fn rejects_multiple_top_level_elements() {
    let err = parse(b"<root/><extra/>").expect_err("second root must not parse");
    assert!(matches!(err, ParseError::Malformed(_)));
}

#[test]
fn rejects_document_without_root() {
    assert!(parse(b"").is_err());
    assert!(parse(b"<!-- only a comment -->").is_err());
}

#[test]
fn rejects_undeclared_namespace_prefix() {
    let err = parse(b"<x:root/>").expect_err("undeclared prefix must not parse");
    assert!(matches!(err, ParseError::Malformed(_)));
}
