//! Element Snapshots
//!
//! A serializable stand-in for the live document: the selected element's node
//! tree plus the page facts the context builder asks about. The CLI reads these
//! from JSON; tests build them with the `with_*` helpers.

use crate::context::inspect::{classes, ElementInspector, Selector};
use crate::error::ControlError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// One node of the element tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<NodeSnapshot>,
}

fn default_tag() -> String {
    "div".to_string()
}

impl NodeSnapshot {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: NodeSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn matches(&self, selector: &Selector) -> bool {
        if let Some(tag) = &selector.tag {
            if !self.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        selector.classes.iter().all(|class| self.has_class(class))
            && selector
                .attributes
                .iter()
                .all(|(name, value)| match (self.attributes.get(name), value) {
                    (Some(actual), Some(expected)) => actual == expected,
                    (Some(_), None) => true,
                    (None, _) => false,
                })
    }

    /// Descendants in document order, excluding `self`
    fn descendants(&self) -> Vec<&NodeSnapshot> {
        let mut out = Vec::new();
        let mut stack: Vec<&NodeSnapshot> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// `self` followed by its descendants
    fn subtree(&self) -> Vec<&NodeSnapshot> {
        let mut out = vec![self];
        out.extend(self.descendants());
        out
    }
}

/// Page-level facts around the selected element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Canvas elements before the selected one, in document order
    #[serde(default)]
    pub elements_before: Vec<NodeSnapshot>,
    /// Canvas elements after the selected one, in document order
    #[serde(default)]
    pub elements_after: Vec<NodeSnapshot>,
}

impl PageSnapshot {
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_element_before(mut self, node: NodeSnapshot) -> Self {
        self.elements_before.push(node);
        self
    }

    pub fn with_element_after(mut self, node: NodeSnapshot) -> Self {
        self.elements_after.push(node);
        self
    }
}

/// The selected element together with its page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    #[serde(flatten)]
    pub element: NodeSnapshot,
    #[serde(default)]
    pub page: PageSnapshot,
}

impl ElementSnapshot {
    /// An empty canvas element on an empty page
    pub fn canvas_element() -> Self {
        Self {
            element: NodeSnapshot::new("div").with_class(classes::CANVAS_ELEMENT),
            page: PageSnapshot::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ControlError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ControlError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.element = self.element.with_class(class);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.element = self.element.with_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: NodeSnapshot) -> Self {
        self.element = self.element.with_child(child);
        self
    }

    pub fn with_page(mut self, page: PageSnapshot) -> Self {
        self.page = page;
        self
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    let parsed = Selector::parse(selector);
    if parsed.is_none() {
        warn!(selector, "Ignoring malformed selector");
    }
    parsed
}

fn count_in<'a>(nodes: impl IntoIterator<Item = &'a NodeSnapshot>, selector: &str) -> usize {
    let Some(selector) = parse_selector(selector) else {
        return 0;
    };
    nodes
        .into_iter()
        .flat_map(NodeSnapshot::subtree)
        .filter(|node| node.matches(&selector))
        .count()
}

impl ElementInspector for ElementSnapshot {
    fn has_class(&self, class: &str) -> bool {
        self.element.has_class(class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attributes.get(name).map(String::as_str)
    }

    fn count_descendants(&self, selector: &str) -> usize {
        let Some(selector) = parse_selector(selector) else {
            return 0;
        };
        self.element
            .descendants()
            .into_iter()
            .filter(|node| node.matches(&selector))
            .count()
    }

    fn descendant_attribute(&self, selector: &str, attribute: &str) -> Option<&str> {
        let selector = parse_selector(selector)?;
        self.element
            .descendants()
            .into_iter()
            .find(|node| node.matches(&selector))
            .and_then(|node| node.attributes.get(attribute))
            .map(String::as_str)
    }

    fn page_has_class(&self, class: &str) -> bool {
        self.page.classes.iter().any(|c| c == class)
    }

    fn page_attribute(&self, name: &str) -> Option<&str> {
        self.page.attributes.get(name).map(String::as_str)
    }

    fn count_page_elements_with_attribute(&self, name: &str, value: &str) -> usize {
        self.page
            .elements_before
            .iter()
            .chain(self.page.elements_after.iter())
            .flat_map(NodeSnapshot::subtree)
            .filter(|node| node.attributes.get(name).is_some_and(|v| v == value))
            .count()
    }

    fn count_preceding(&self, selector: &str) -> usize {
        count_in(&self.page.elements_before, selector)
    }

    fn count_following(&self, selector: &str) -> usize {
        count_in(&self.page.elements_after, selector)
    }
}
