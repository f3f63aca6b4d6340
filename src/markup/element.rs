//! Element tree built by the page renderer.
//!
//! Elements are plain data: a tag, attributes, a class list, a style map,
//! children and event listeners. Listeners carry what the handler needs
//! (a product index) rather than closures, so a tree can be compared,
//! printed and rebuilt freely.

use std::fmt;

use crate::core::action::Action;
use crate::core::binding::{ClassList, StyleMap};

/// Child-index path from the document root. Indexes count element children
/// only, like `Element.children` in a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the `index`-th element child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(index);
        Self(steps)
    }

    pub fn steps(&self) -> &[usize] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    MouseOver,
    Input,
}

/// An event delivered by the input-dispatch side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    MouseOver,
    /// The target input's new raw value.
    Input(String),
}

impl DomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomEvent::MouseOver => EventKind::MouseOver,
            DomEvent::Input(_) => EventKind::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Select the product at this index.
    SelectProduct(usize),
    /// Write the event's value into the selection.
    WriteSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub kind: EventKind,
    pub handler: Handler,
}

impl Listener {
    /// Translate a matching event into the action it triggers.
    pub fn handle(&self, event: &DomEvent) -> Option<Action> {
        if event.kind() != self.kind {
            return None;
        }
        match (self.handler, event) {
            (Handler::SelectProduct(index), _) => Some(Action::Hover(index)),
            (Handler::WriteSelection, DomEvent::Input(value)) => {
                Some(Action::Input(value.clone()))
            }
            (Handler::WriteSelection, DomEvent::MouseOver) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    attributes: Vec<(String, String)>,
    classes: ClassList,
    style: StyleMap,
    value: Option<String>,
    nodes: Vec<Node>,
    listeners: Vec<Listener>,
}

const VOID_TAGS: &[&str] = &["input", "br"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            attributes: Vec::new(),
            classes: ClassList::new(),
            style: StyleMap::new(),
            value: None,
            nodes: Vec::new(),
            listeners: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------------

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Merge tokens into the class list (static classes first, bound after).
    pub fn with_classes(mut self, classes: &ClassList) -> Self {
        self.classes.merge(classes);
        self
    }

    /// Single-class binding: add `token` only when `active`.
    pub fn with_class_if(mut self, token: &str, active: bool) -> Self {
        if active {
            self.classes.push(token);
        }
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.nodes.push(Node::Element(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.nodes.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.listeners.push(Listener { kind, handler });
        self
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class_name(&self) -> String {
        self.classes.to_string()
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Rendered inline style, or `None` when nothing is bound.
    pub fn style(&self) -> Option<String> {
        (!self.style.is_empty()).then(|| self.style.to_string())
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Attribute as it would appear in markup. `id`, `class` and `style`
    /// are synthesized from the bound values.
    pub fn attr(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            "class" => (!self.classes.is_empty()).then(|| self.class_name()),
            "style" => self.style(),
            _ => self
                .attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone()),
        }
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Element children, skipping text nodes.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children().nth(index)
    }

    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// Concatenated text of every descendant.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Rendered text of a table row: cell texts joined by tabs. Other
    /// elements fall back to their trimmed text content.
    pub fn inner_text(&self) -> String {
        if self.tag == "tr" {
            return self
                .children()
                .map(|cell| cell.text_content().trim().to_string())
                .collect::<Vec<_>>()
                .join("\t");
        }
        self.text_content().trim().to_string()
    }

    /// Every `tr` below this element, in document order.
    pub fn rows(&self) -> Vec<&Element> {
        let mut rows = Vec::new();
        self.walk(&mut |el| {
            if el.tag == "tr" {
                rows.push(el);
            }
        });
        rows
    }

    /// Visit descendants in document order (not including `self`).
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        for child in self.children() {
            visit(child);
            child.walk(visit);
        }
    }

    /// Depth-first search for the first descendant matching `predicate`,
    /// returning its path relative to `base`.
    pub fn find_path(
        &self,
        base: &NodePath,
        predicate: &impl Fn(&Element) -> bool,
    ) -> Option<NodePath> {
        for (index, child) in self.children().enumerate() {
            let path = base.child(index);
            if predicate(child) {
                return Some(path);
            }
            if let Some(found) = child.find_path(&path, predicate) {
                return Some(found);
            }
        }
        None
    }

    /// Follow `path` down from this element.
    pub fn at(&self, path: &NodePath) -> Option<&Element> {
        path.steps()
            .iter()
            .try_fold(self, |el, &index| el.child(index))
    }
}

// ============================================================================
// HTML Serialization
// ============================================================================

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for name in ["id", "class", "style"] {
            if let Some(value) = self.attr(name) {
                write!(f, " {}=\"{}\"", name, escape(&value))?;
            }
        }
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        if let Some(value) = &self.value {
            write!(f, " value=\"{}\"", escape(value))?;
        }
        if VOID_TAGS.contains(&self.tag) {
            return write!(f, ">");
        }
        write!(f, ">")?;
        for node in &self.nodes {
            match node {
                Node::Text(text) => write!(f, "{}", escape(text))?,
                Node::Element(el) => write!(f, "{el}")?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}
