use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{QName as RawName, ResolveResult};
use quick_xml::NsReader;
use thiserror::Error;

use crate::tree::{Attribute, ExpandedName, QName, XmlNode};

/// Errors that can occur while parsing XML into an [`XmlNode`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input XML could not be decoded or tokenized.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Input bytes were not valid UTF-8 for tag/attribute/text extraction.
    #[error("invalid UTF-8 while parsing XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Failed to decode text entity or bytes.
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// Failed to read input file.
    #[error("failed to read XML file: {0}")]
    Io(#[from] std::io::Error),
    /// Structural issue in XML document.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Parse XML bytes into an [`XmlNode`] tree.
///
/// Namespace-aware: element and attribute names carry their resolved URI and
/// the prefix spelled in the source. Adjacent text and CDATA coalesce into a
/// single text value; comments, processing instructions, and whitespace-only
/// text between elements are discarded. External entities are never resolved.
pub fn parse(xml: &[u8]) -> Result<XmlNode, ParseError> {
    let mut reader = NsReader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let node = build_node_start(&e, &reader)?;
                stack.push(node);
            }
            Event::Empty(e) => {
                let node = build_node_start(&e, &reader)?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.unescape()?.into_owned();
                    if !text.trim().is_empty() {
                        append_text(current, &text);
                    }
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = std::str::from_utf8(e.as_ref())?.to_string();
                    if !text.trim().is_empty() {
                        append_text(current, &text);
                    }
                }
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    ParseError::Malformed("encountered closing tag without open tag".to_string())
                })?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ParseError::Malformed(
            "unclosed element(s) at end of document".to_string(),
        ));
    }

    root.ok_or_else(|| ParseError::Malformed("no root element found".to_string()))
}

/// Parse an XML file into an [`XmlNode`] tree.
pub fn parse_file(path: &Path) -> Result<XmlNode, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

fn attach(
    node: XmlNode,
    stack: &mut Vec<XmlNode>,
    root: &mut Option<XmlNode>,
) -> Result<(), ParseError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_none() {
        *root = Some(node);
    } else {
        return Err(ParseError::Malformed(
            "multiple top-level elements found".to_string(),
        ));
    }
    Ok(())
}

fn append_text(node: &mut XmlNode, text: &str) {
    match &mut node.text {
        Some(existing) => existing.push_str(text),
        None => node.text = Some(text.to_string()),
    }
}

fn build_node_start(
    e: &quick_xml::events::BytesStart<'_>,
    reader: &NsReader<&[u8]>,
) -> Result<XmlNode, ParseError> {
    let (resolution, _) = reader.resolve_element(e.name());
    let (uri, local, prefix) = resolve_name(resolution, e.name())?;

    let mut node = XmlNode {
        name: QName { uri, local, prefix },
        attributes: BTreeMap::new(),
        children: Vec::new(),
        text: None,
    };

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        // xmlns="..." and xmlns:p="..." are namespace bindings, not data.
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }

        let (resolution, _) = reader.resolve_attribute(attr.key);
        let (uri, local, prefix) = resolve_name(resolution, attr.key)?;
        let value = attr
            .decode_and_unescape_value(reader.decoder())?
            .into_owned();
        node.attributes
            .insert(ExpandedName { uri, local }, Attribute { prefix, value });
    }

    Ok(node)
}

fn resolve_name(
    resolution: ResolveResult<'_>,
    raw: RawName<'_>,
) -> Result<(Option<String>, String, Option<String>), ParseError> {
    let uri = match resolution {
        ResolveResult::Bound(ns) => Some(std::str::from_utf8(ns.into_inner())?.to_string()),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(ParseError::Malformed(format!(
                "undeclared namespace prefix '{}'",
                String::from_utf8_lossy(&prefix)
            )))
        }
    };

    let local = std::str::from_utf8(raw.local_name().into_inner())?.to_string();
    let prefix = match raw.prefix() {
        Some(p) => Some(std::str::from_utf8(p.into_inner())?.to_string()),
        None => None,
    };

    Ok((uri, local, prefix))
}
