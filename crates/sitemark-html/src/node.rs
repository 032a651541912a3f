//! HTML node model and renderer.
//!
//! Rendering follows two fixed conventions of this project:
//! every element gets an explicit closing tag (including `img`), and only
//! leaves render their attributes. Attribute values are written verbatim.

use crate::NodeError;

/// Element attributes in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Parent(Parent),
}

/// A childless node holding literal text.
///
/// With no tag the value is rendered as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

/// A node wrapping an ordered list of children.
///
/// `tag` and `children` are only checked when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    pub tag: Option<String>,
    pub children: Vec<Node>,
    pub attributes: Attributes,
}

impl Node {
    /// A tagged leaf: `<tag>value</tag>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf(Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Vec::new(),
        })
    }

    /// An untagged leaf rendered as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(Leaf {
            tag: None,
            value: value.into(),
            attributes: Vec::new(),
        })
    }

    /// Build a leaf from optional parts, rejecting a missing value.
    ///
    /// An empty string is a valid value; `None` is not.
    pub fn try_leaf(tag: Option<&str>, value: Option<&str>) -> Result<Self, NodeError> {
        let value = value.ok_or(NodeError::MissingValue)?;
        Ok(Node::Leaf(Leaf {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attributes: Vec::new(),
        }))
    }

    /// A parent node. Never fails; see [`Node::render`].
    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Parent(Parent {
            tag: Some(tag.into()),
            children,
            attributes: Vec::new(),
        })
    }

    /// Append an attribute. Existing attributes keep their order.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let attributes = match &mut self {
            Node::Leaf(leaf) => &mut leaf.attributes,
            Node::Parent(parent) => &mut parent.attributes,
        };
        attributes.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attributes,
            Node::Parent(parent) => &parent.attributes,
        }
    }

    /// Render this node and its subtree to an HTML string.
    ///
    /// Fails on the first parent (in document order) that has no tag or
    /// no children.
    pub fn render(&self) -> Result<String, NodeError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        match self {
            Node::Leaf(leaf) => {
                leaf.render_into(out);
                Ok(())
            }
            Node::Parent(parent) => parent.render_into(out),
        }
    }
}

impl Leaf {
    fn render_into(&self, out: &mut String) {
        let tag = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                out.push_str(&self.value);
                return;
            }
        };

        out.push('<');
        out.push_str(tag);
        out.push_str(&render_attributes(&self.attributes));
        out.push('>');
        out.push_str(&self.value);
        out.push_str(&format!("</{tag}>"));
    }
}

impl Parent {
    fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        let tag = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(NodeError::MissingTag),
        };
        if self.children.is_empty() {
            return Err(NodeError::EmptyChildren {
                tag: tag.to_string(),
            });
        }

        // Parents never render their own attributes.
        out.push_str(&format!("<{tag}>"));
        for child in &self.children {
            child.render_into(out)?;
        }
        out.push_str(&format!("</{tag}>"));
        Ok(())
    }
}

/// Serialize attributes as ` name="value"` pairs. Values are not escaped.
pub fn render_attributes(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    format!(" {}", pairs.join(" "))
}
