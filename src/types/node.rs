//! Design document node tree.
//!
//! Nodes are a tagged union over the API's `type` field. Each variant only
//! carries the fields that make sense for it, so extractors match on shape
//! instead of null-checking every optional property.

use super::Rgba;

/// A node in the design document tree.
///
/// Parents own their children; the tree has no back-references.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    /// Layer name. Not unique, even among siblings.
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

/// Node variant, keyed by the API `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document,
    Canvas,
    Container(ContainerKind, Visual),
    Shape(ShapeKind, Visual),
    Text(Visual),
    /// Any tag this crate does not know about, kept verbatim.
    Other(String, Visual),
}

/// Frame-like nodes that group other layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
}

/// Leaf vector geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Star,
    Polygon,
    RegularPolygon,
    BooleanOperation,
}

/// Paint, geometry and style references shared by every drawable node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Visual {
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub bounds: Option<Bounds>,
    pub corner_radius: Option<f64>,
    pub styles: StyleRefs,
}

/// A single fill or stroke.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Gradients, images and anything else; only the tag is kept.
    Other(String),
}

/// Absolute bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Style ids a node references, keyed by style slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleRefs {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub text: Option<String>,
    pub effect: Option<String>,
    pub grid: Option<String>,
}

impl ContainerKind {
    fn from_type(type_name: &str) -> Option<Self> {
        Some(match type_name {
            "FRAME" => ContainerKind::Frame,
            "GROUP" => ContainerKind::Group,
            "SECTION" => ContainerKind::Section,
            "COMPONENT" => ContainerKind::Component,
            "COMPONENT_SET" => ContainerKind::ComponentSet,
            "INSTANCE" => ContainerKind::Instance,
            _ => return None,
        })
    }

    fn type_name(self) -> &'static str {
        match self {
            ContainerKind::Frame => "FRAME",
            ContainerKind::Group => "GROUP",
            ContainerKind::Section => "SECTION",
            ContainerKind::Component => "COMPONENT",
            ContainerKind::ComponentSet => "COMPONENT_SET",
            ContainerKind::Instance => "INSTANCE",
        }
    }
}

impl ShapeKind {
    fn from_type(type_name: &str) -> Option<Self> {
        Some(match type_name {
            "RECTANGLE" => ShapeKind::Rectangle,
            "ELLIPSE" => ShapeKind::Ellipse,
            "VECTOR" => ShapeKind::Vector,
            "LINE" => ShapeKind::Line,
            "STAR" => ShapeKind::Star,
            "POLYGON" => ShapeKind::Polygon,
            "REGULAR_POLYGON" => ShapeKind::RegularPolygon,
            "BOOLEAN_OPERATION" => ShapeKind::BooleanOperation,
            _ => return None,
        })
    }

    fn type_name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::Ellipse => "ELLIPSE",
            ShapeKind::Vector => "VECTOR",
            ShapeKind::Line => "LINE",
            ShapeKind::Star => "STAR",
            ShapeKind::Polygon => "POLYGON",
            ShapeKind::RegularPolygon => "REGULAR_POLYGON",
            ShapeKind::BooleanOperation => "BOOLEAN_OPERATION",
        }
    }
}

impl NodeKind {
    /// Build a variant from an API type tag and its visual properties.
    ///
    /// `DOCUMENT` and `CANVAS` discard the visual part.
    pub fn from_type(type_name: &str, visual: Visual) -> Self {
        if let Some(kind) = ContainerKind::from_type(type_name) {
            return NodeKind::Container(kind, visual);
        }
        if let Some(kind) = ShapeKind::from_type(type_name) {
            return NodeKind::Shape(kind, visual);
        }
        match type_name {
            "DOCUMENT" => NodeKind::Document,
            "CANVAS" => NodeKind::Canvas,
            "TEXT" => NodeKind::Text(visual),
            other => NodeKind::Other(other.to_string(), visual),
        }
    }
}

impl Node {
    /// Create a node with no children.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// The API type tag (`RECTANGLE`, `TEXT`, ...).
    pub fn type_name(&self) -> &str {
        match &self.kind {
            NodeKind::Document => "DOCUMENT",
            NodeKind::Canvas => "CANVAS",
            NodeKind::Container(kind, _) => kind.type_name(),
            NodeKind::Shape(kind, _) => kind.type_name(),
            NodeKind::Text(_) => "TEXT",
            NodeKind::Other(name, _) => name,
        }
    }

    /// Visual properties, if this node is drawable.
    pub fn visual(&self) -> Option<&Visual> {
        match &self.kind {
            NodeKind::Document | NodeKind::Canvas => None,
            NodeKind::Container(_, v)
            | NodeKind::Shape(_, v)
            | NodeKind::Text(v)
            | NodeKind::Other(_, v) => Some(v),
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self.kind, NodeKind::Document)
    }

    /// Depth-first pre-order iterator over this node and all descendants.
    ///
    /// Children are visited in their stored order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order traversal, see [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the first child is popped next
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
