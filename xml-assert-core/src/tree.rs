use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Namespace URI plus local name, the identity of an element or attribute.
///
/// Prefix spelling is deliberately absent: two names with the same URI and
/// local part are the same name no matter how the document spelled them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpandedName {
    /// Namespace URI the name is bound to, if any.
    pub uri: Option<String>,
    /// Local part of the name.
    pub local: String,
}

impl ExpandedName {
    pub fn new(uri: Option<impl Into<String>>, local: impl Into<String>) -> Self {
        Self {
            uri: uri.map(Into::into),
            local: local.into(),
        }
    }
}

/// Qualified element name: identity plus the prefix as spelled in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QName {
    /// Namespace URI the name resolves to, if any.
    pub uri: Option<String>,
    /// Local part of the name.
    pub local: String,
    /// Prefix as spelled in the source document, if any.
    pub prefix: Option<String>,
}

impl QName {
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            uri: None,
            local: local.into(),
            prefix: None,
        }
    }

    /// True when URI and local name agree; prefix spelling does not count.
    pub fn matches(&self, other: &QName) -> bool {
        self.uri == other.uri && self.local == other.local
    }

    pub fn expanded(&self) -> ExpandedName {
        ExpandedName {
            uri: self.uri.clone(),
            local: self.local.clone(),
        }
    }

    /// Prefixed spelling, e.g. `ns:item`, or just the local name.
    pub fn qualified(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local),
            None => self.local.clone(),
        }
    }
}

/// Attribute payload: value plus the prefix it was spelled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Prefix as spelled in the source document, if any.
    pub prefix: Option<String>,
    /// Attribute value, entity-decoded.
    pub value: String,
}

impl Attribute {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            prefix: None,
            value: value.into(),
        }
    }

    /// Prefixed spelling of the attribute name this payload belongs to.
    pub fn qualified(&self, name: &ExpandedName) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", name.local),
            None => name.local.clone(),
        }
    }
}

/// A parsed XML element, owning its whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    /// Qualified element name.
    pub name: QName,
    /// Attributes keyed by expanded name. Namespace declarations are
    /// bindings, not attributes, and never appear here.
    pub attributes: BTreeMap<ExpandedName, Attribute>,
    /// Child elements, in document order.
    pub children: Vec<XmlNode>,
    /// Coalesced text content, if any survived whitespace stripping.
    pub text: Option<String>,
}

impl XmlNode {
    /// Create a new node with no namespace, attributes, children, or text.
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            name: QName::local(local),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// An element with no children and no text is structurally empty.
    /// Attributes do not count.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }

    /// Return the first child with the provided local name.
    pub fn get_child(&self, local: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name.local == local)
    }

    /// Return all children with the provided local name.
    pub fn get_children(&self, local: &str) -> Vec<&XmlNode> {
        self.children
            .iter()
            .filter(|child| child.name.local == local)
            .collect()
    }
}

impl Display for XmlNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name.qualified())?;
        for (name, attr) in &self.attributes {
            write!(f, " {}=\"{}\"", attr.qualified(name), attr.value)?;
        }

        if self.is_empty() {
            return write!(f, "/>");
        }

        write!(f, ">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", text)?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.name.qualified())
    }
}
