//! In-process document model the page controllers render into.
//!
//! # Responsibility
//! - Own an arena of elements addressable by `NodeId` and by markup `id`.
//! - Provide the handful of mutations the renderers need (clear, append,
//!   classes, attributes, inline style, text, raw inner markup).
//! - Serialize any subtree back to HTML.
//!
//! # Invariants
//! - Removing a subtree frees every descendant id; freed ids are never
//!   reused.
//! - `query_class` only returns elements attached under the root.

pub mod reveal;
pub mod scroll;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::{Display, Formatter};

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Stable handle to one element of a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// One element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    dom_id: Option<String>,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: Option<String>,
    inner_html: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    disabled: bool,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            dom_id: None,
            classes: BTreeSet::new(),
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
            text: None,
            inner_html: String::new(),
            children: Vec::new(),
            parent: None,
            disabled: false,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn dom_id(&self) -> Option<&str> {
        self.dom_id.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Adds every whitespace-separated class in `classes`.
    pub fn add_classes(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }

    /// `true` when inline style is `display: none`.
    pub fn is_hidden(&self) -> bool {
        self.style("display") == Some("none")
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.set_style("display", "none");
        } else {
            self.style.remove("display");
        }
    }

    /// Like `set_hidden(false)` but forces a display mode.
    pub fn show_as(&mut self, display: &str) {
        self.set_style("display", display);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

/// Element arena rooted at a `body` element.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: HashMap<NodeId, Element>,
    by_dom_id: HashMap<String, NodeId>,
    root: NodeId,
    next_id: u64,
    scroll_requests: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document with only a `body` root.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Element::new("body"));
        Self {
            nodes,
            by_dom_id: HashMap::new(),
            root,
            next_id: 1,
            scroll_requests: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Element::new(tag));
        id
    }

    /// Creates an element with a markup `id` and appends it to `parent`.
    ///
    /// Returns `None` when `parent` does not exist.
    pub fn create_with_id(&mut self, parent: NodeId, tag: &str, dom_id: &str) -> Option<NodeId> {
        let id = self.create_element(tag);
        if let Some(element) = self.nodes.get_mut(&id) {
            element.dom_id = Some(dom_id.to_string());
        }
        self.by_dom_id.insert(dom_id.to_string(), id);
        if self.append_child(parent, id) {
            Some(id)
        } else {
            self.remove_subtree(id);
            None
        }
    }

    /// Appends a detached `child` under `parent`.
    ///
    /// Returns `false` when either node is missing or `child` already has a
    /// parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || !self.nodes.contains_key(&parent) {
            return false;
        }
        match self.nodes.get_mut(&child) {
            Some(element) if element.parent.is_none() && child != self.root => {
                element.parent = Some(parent);
            }
            _ => return false,
        }
        if let Some(element) = self.nodes.get_mut(&parent) {
            element.children.push(child);
        }
        true
    }

    pub fn get_element_by_id(&self, dom_id: &str) -> Option<NodeId> {
        self.by_dom_id.get(dom_id).copied()
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(&node)
    }

    /// Convenience lookup by markup `id`.
    pub fn by_id_mut(&mut self, dom_id: &str) -> Option<&mut Element> {
        let node = self.get_element_by_id(dom_id)?;
        self.nodes.get_mut(&node)
    }

    pub fn by_id(&self, dom_id: &str) -> Option<&Element> {
        let node = self.get_element_by_id(dom_id)?;
        self.nodes.get(&node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// `true` when `node` is reachable from the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.nodes.get(&id).and_then(|element| element.parent);
        }
        false
    }

    /// Drops all children of `node`, its text and raw inner markup.
    pub fn clear(&mut self, node: NodeId) {
        let children = match self.nodes.get_mut(&node) {
            Some(element) => {
                element.text = None;
                element.inner_html.clear();
                std::mem::take(&mut element.children)
            }
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    /// Replaces content with raw markup, like assigning `innerHTML`.
    pub fn set_inner_html(&mut self, node: NodeId, html: impl Into<String>) {
        self.clear(node);
        if let Some(element) = self.nodes.get_mut(&node) {
            element.inner_html = html.into();
        }
    }

    /// Replaces content with escaped text, like assigning `textContent`.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.clear(node);
        if let Some(element) = self.nodes.get_mut(&node) {
            element.text = Some(text.into());
        }
    }

    /// Attached elements carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(self.root, &mut |id, element| {
            if element.has_class(class) {
                found.push(id);
            }
        });
        found
    }

    /// Attached descendants of `scope` carrying attribute `name`.
    pub fn query_attr(&self, scope: NodeId, name: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(scope, &mut |id, element| {
            if element.attr(name).is_some() {
                found.push(id);
            }
        });
        found
    }

    /// Records a smooth-scroll request to the element with `dom_id`.
    pub fn scroll_into_view(&mut self, dom_id: &str) {
        if self.by_dom_id.contains_key(dom_id) {
            self.scroll_requests.push(dom_id.to_string());
        }
    }

    /// Drains scroll requests issued since the last call.
    pub fn take_scroll_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.scroll_requests)
    }

    /// Serializes `node` and its subtree.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    /// Serializes only the content of `node`.
    pub fn inner_html_of(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(element) = self.nodes.get(&node) {
            self.write_content(element, &mut out);
        }
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.nodes.get(&node) else {
            return;
        };
        out.push('<');
        out.push_str(&element.tag);
        if let Some(dom_id) = &element.dom_id {
            push_attr(out, "id", dom_id);
        }
        if !element.classes.is_empty() {
            let classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
            push_attr(out, "class", &classes.join(" "));
        }
        for (name, value) in &element.attrs {
            push_attr(out, name, value);
        }
        if !element.style.is_empty() {
            let style: Vec<String> = element
                .style
                .iter()
                .map(|(property, value)| format!("{property}:{value}"))
                .collect();
            push_attr(out, "style", &style.join(";"));
        }
        if element.disabled {
            out.push_str(" disabled");
        }
        out.push('>');
        if VOID_TAGS.contains(&element.tag.as_str()) {
            return;
        }
        self.write_content(element, out);
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }

    fn write_content(&self, element: &Element, out: &mut String) {
        if let Some(text) = &element.text {
            out.push_str(&escape_html(text));
        }
        out.push_str(&element.inner_html);
        for child in &element.children {
            self.write_html(*child, out);
        }
    }

    fn walk<F: FnMut(NodeId, &Element)>(&self, node: NodeId, visit: &mut F) {
        if let Some(element) = self.nodes.get(&node) {
            visit(node, element);
            for child in &element.children {
                self.walk(*child, visit);
            }
        }
    }

    fn remove_subtree(&mut self, node: NodeId) {
        if let Some(element) = self.nodes.remove(&node) {
            if let Some(dom_id) = &element.dom_id {
                if self.by_dom_id.get(dom_id) == Some(&node) {
                    self.by_dom_id.remove(dom_id);
                }
            }
            for child in element.children {
                self.remove_subtree(child);
            }
        }
    }
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}
