//! In-memory document adapter.
//!
//! Backs the integration suites and
//! any host-side harness with the
//! same contract the browser
//! adapter honors: id lookups only
//! see attached nodes, removal
//! detaches, selector queries walk
//! the tree in document order. The
//! selector grammar covers what the
//! bootstrap actually asks for:
//! `tag`, `.class`, `[attr]` and
//! `[attr="value"]` parts, in any
//! combination.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{
  Dom,
  Rect,
  Size
};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeNode(usize);

#[derive(Debug, Default)]
struct Element {
  tag:        String,
  classes:    Vec<String>,
  attributes: BTreeMap<String, String>,
  styles:     BTreeMap<String, String>,
  text:       String,
  markup:     String,
  children:   Vec<usize>,
  parent:     Option<usize>,
  rect:       Option<Rect>,
  measured:   Option<Size>,
  clicks:     u32,
  focused:    u32
}

#[derive(Debug)]
struct Inner {
  elements:     Vec<Element>,
  preferences:  BTreeMap<String, String>,
  path:         String,
  prefers_dark: bool,
  default_size: Size
}

const ROOT: usize = 0;
const BODY: usize = 1;

/// Fake document with `<html>` and
/// `<body>` pre-seeded.
#[derive(Clone)]
pub struct FakeDom {
  inner: Rc<RefCell<Inner>>
}

impl Default for FakeDom {
  fn default() -> Self {
    Self::new()
  }
}

impl FakeDom {
  pub fn new() -> Self {
    let root = Element {
      tag: "html".to_string(),
      children: vec![BODY],
      ..Element::default()
    };
    let body = Element {
      tag: "body".to_string(),
      parent: Some(ROOT),
      ..Element::default()
    };
    Self {
      inner: Rc::new(RefCell::new(
        Inner {
          elements:     vec![
            root, body,
          ],
          preferences:  BTreeMap::new(),
          path:         "/".to_string(),
          prefers_dark: false,
          default_size: Size::new(
            0.0, 0.0
          )
        }
      ))
    }
  }

  /// Creates an element already
  /// attached to `<body>`.
  pub fn seed(
    &self,
    tag: &str
  ) -> FakeNode {
    let node = self.create_element(tag);
    self.append_child(
      &self.body(),
      &node
    );
    node
  }

  pub fn set_path(&self, path: &str) {
    self.inner.borrow_mut().path =
      path.to_string();
  }

  pub fn set_prefers_dark(
    &self,
    value: bool
  ) {
    self
      .inner
      .borrow_mut()
      .prefers_dark = value;
  }

  pub fn set_rect(
    &self,
    node: &FakeNode,
    rect: Rect
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .rect = Some(rect);
  }

  pub fn set_measured_size(
    &self,
    node: &FakeNode,
    size: Size
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .measured = Some(size);
  }

  /// Size reported for nodes with
  /// no explicit override, e.g.
  /// tooltips created by the code
  /// under test.
  pub fn set_default_measured_size(
    &self,
    size: Size
  ) {
    self
      .inner
      .borrow_mut()
      .default_size = size;
  }

  pub fn clicks(
    &self,
    node: &FakeNode
  ) -> u32 {
    self.inner.borrow().elements
      [node.0]
      .clicks
  }

  pub fn focus_count(
    &self,
    node: &FakeNode
  ) -> u32 {
    self.inner.borrow().elements
      [node.0]
      .focused
  }

  pub fn classes_of(
    &self,
    node: &FakeNode
  ) -> Vec<String> {
    self.inner.borrow().elements
      [node.0]
      .classes
      .clone()
  }

  pub fn text_of(
    &self,
    node: &FakeNode
  ) -> String {
    self.inner.borrow().elements
      [node.0]
      .text
      .clone()
  }

  pub fn style_of(
    &self,
    node: &FakeNode,
    property: &str
  ) -> Option<String> {
    self.inner.borrow().elements
      [node.0]
      .styles
      .get(property)
      .cloned()
  }

  pub fn is_attached(
    &self,
    node: &FakeNode
  ) -> bool {
    self
      .attached_order()
      .contains(&node.0)
  }

  fn attached_order(
    &self
  ) -> Vec<usize> {
    let inner = self.inner.borrow();
    let mut order = Vec::new();
    let mut stack = vec![ROOT];
    while let Some(index) = stack.pop()
    {
      order.push(index);
      let element =
        &inner.elements[index];
      for child in
        element.children.iter().rev()
      {
        stack.push(*child);
      }
    }
    order
  }
}

impl Dom for FakeDom {
  type Node = FakeNode;

  fn root(&self) -> FakeNode {
    FakeNode(ROOT)
  }

  fn body(&self) -> FakeNode {
    FakeNode(BODY)
  }

  fn element_by_id(
    &self,
    id: &str
  ) -> Option<FakeNode> {
    let order = self.attached_order();
    let inner = self.inner.borrow();
    order
      .into_iter()
      .find(|index| {
        inner.elements[*index]
          .attributes
          .get("id")
          .is_some_and(|v| v == id)
      })
      .map(FakeNode)
  }

  fn query_all(
    &self,
    selector: &str
  ) -> Vec<FakeNode> {
    let Some(selector) =
      parse_selector(selector)
    else {
      return Vec::new();
    };
    let order = self.attached_order();
    let inner = self.inner.borrow();
    order
      .into_iter()
      .filter(|index| {
        selector.matches(
          &inner.elements[*index]
        )
      })
      .map(FakeNode)
      .collect()
  }

  fn create_element(
    &self,
    tag: &str
  ) -> FakeNode {
    let mut inner =
      self.inner.borrow_mut();
    inner.elements.push(Element {
      tag: tag.to_string(),
      ..Element::default()
    });
    FakeNode(inner.elements.len() - 1)
  }

  fn append_child(
    &self,
    parent: &FakeNode,
    child: &FakeNode
  ) {
    let mut inner =
      self.inner.borrow_mut();
    if let Some(old) = inner.elements
      [child.0]
      .parent
    {
      inner.elements[old]
        .children
        .retain(|c| *c != child.0);
    }
    inner.elements[child.0].parent =
      Some(parent.0);
    inner.elements[parent.0]
      .children
      .push(child.0);
  }

  fn remove(&self, node: &FakeNode) {
    let mut inner =
      self.inner.borrow_mut();
    if let Some(parent) =
      inner.elements[node.0].parent
    {
      inner.elements[parent]
        .children
        .retain(|c| *c != node.0);
    }
    inner.elements[node.0].parent =
      None;
  }

  fn add_class(
    &self,
    node: &FakeNode,
    class: &str
  ) {
    let mut inner =
      self.inner.borrow_mut();
    let classes = &mut inner.elements
      [node.0]
      .classes;
    if !classes
      .iter()
      .any(|c| c == class)
    {
      classes.push(class.to_string());
    }
  }

  fn remove_class(
    &self,
    node: &FakeNode,
    class: &str
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .classes
      .retain(|c| c != class);
  }

  fn has_class(
    &self,
    node: &FakeNode,
    class: &str
  ) -> bool {
    self.inner.borrow().elements
      [node.0]
      .classes
      .iter()
      .any(|c| c == class)
  }

  fn set_id(
    &self,
    node: &FakeNode,
    id: &str
  ) {
    self.set_attribute(
      node, "id", id
    );
  }

  fn set_class_name(
    &self,
    node: &FakeNode,
    value: &str
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .classes = value
      .split_whitespace()
      .map(str::to_string)
      .collect();
  }

  fn set_text(
    &self,
    node: &FakeNode,
    text: &str
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .text = text.to_string();
  }

  fn set_markup(
    &self,
    node: &FakeNode,
    markup: &str
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .markup = markup.to_string();
  }

  fn has_content(
    &self,
    node: &FakeNode
  ) -> bool {
    let inner = self.inner.borrow();
    let element =
      &inner.elements[node.0];
    !element.text.trim().is_empty()
      || !element
        .markup
        .trim()
        .is_empty()
      || !element.children.is_empty()
  }

  fn clear_content(
    &self,
    node: &FakeNode
  ) {
    let mut inner =
      self.inner.borrow_mut();
    let children = std::mem::take(
      &mut inner.elements[node.0]
        .children
    );
    for child in children {
      inner.elements[child].parent =
        None;
    }
    inner.elements[node.0]
      .text
      .clear();
    inner.elements[node.0]
      .markup
      .clear();
  }

  fn attribute(
    &self,
    node: &FakeNode,
    name: &str
  ) -> Option<String> {
    self.inner.borrow().elements
      [node.0]
      .attributes
      .get(name)
      .cloned()
  }

  fn set_attribute(
    &self,
    node: &FakeNode,
    name: &str,
    value: &str
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .attributes
      .insert(
        name.to_string(),
        value.to_string()
      );
  }

  fn set_style(
    &self,
    node: &FakeNode,
    property: &str,
    value: &str
  ) {
    self.inner.borrow_mut().elements
      [node.0]
      .styles
      .insert(
        property.to_string(),
        value.to_string()
      );
  }

  fn bounding_rect(
    &self,
    node: &FakeNode
  ) -> Rect {
    self.inner.borrow().elements
      [node.0]
      .rect
      .unwrap_or(Rect::new(
        0.0, 0.0, 0.0, 0.0
      ))
  }

  fn measured_size(
    &self,
    node: &FakeNode
  ) -> Size {
    let inner = self.inner.borrow();
    inner.elements[node.0]
      .measured
      .unwrap_or(inner.default_size)
  }

  fn click(&self, node: &FakeNode) {
    self.inner.borrow_mut().elements
      [node.0]
      .clicks += 1;
  }

  fn focus(&self, node: &FakeNode) {
    self.inner.borrow_mut().elements
      [node.0]
      .focused += 1;
  }

  fn current_path(&self) -> String {
    self.inner.borrow().path.clone()
  }

  fn preference(
    &self,
    key: &str
  ) -> Option<String> {
    self
      .inner
      .borrow()
      .preferences
      .get(key)
      .cloned()
  }

  fn set_preference(
    &self,
    key: &str,
    value: &str
  ) {
    self
      .inner
      .borrow_mut()
      .preferences
      .insert(
        key.to_string(),
        value.to_string()
      );
  }

  fn prefers_dark(&self) -> bool {
    self.inner.borrow().prefers_dark
  }
}

#[derive(Debug)]
struct Selector {
  tag:     Option<String>,
  classes: Vec<String>,
  attrs:   Vec<(String, Option<String>)>
}

impl Selector {
  fn matches(
    &self,
    element: &Element
  ) -> bool {
    if let Some(tag) = &self.tag
      && !element
        .tag
        .eq_ignore_ascii_case(tag)
    {
      return false;
    }
    for class in &self.classes {
      if !element
        .classes
        .iter()
        .any(|c| c == class)
      {
        return false;
      }
    }
    for (name, expected) in
      &self.attrs
    {
      match (
        element.attributes.get(name),
        expected
      ) {
        | (None, _) => return false,
        | (Some(_), None) => {}
        | (
          Some(actual),
          Some(expected)
        ) => {
          if actual != expected {
            return false;
          }
        }
      }
    }
    true
  }
}

fn parse_selector(
  raw: &str
) -> Option<Selector> {
  let mut selector = Selector {
    tag:     None,
    classes: Vec::new(),
    attrs:   Vec::new()
  };
  let mut rest = raw.trim();
  if rest.is_empty() {
    return None;
  }

  let tag_end = rest
    .find(['.', '['])
    .unwrap_or(rest.len());
  if tag_end > 0 {
    selector.tag = Some(
      rest[..tag_end].to_string()
    );
    rest = &rest[tag_end..];
  }

  while !rest.is_empty() {
    if let Some(tail) =
      rest.strip_prefix('.')
    {
      let end = tail
        .find(['.', '['])
        .unwrap_or(tail.len());
      if end == 0 {
        return None;
      }
      selector.classes.push(
        tail[..end].to_string()
      );
      rest = &tail[end..];
    } else if let Some(tail) =
      rest.strip_prefix('[')
    {
      let end = tail.find(']')?;
      let body = &tail[..end];
      rest = &tail[end + 1..];
      match body.split_once('=') {
        | Some((name, value)) => {
          let value = value
            .trim_matches(['"', '\'']);
          selector.attrs.push((
            name.trim().to_string(),
            Some(value.to_string())
          ));
        }
        | None => {
          selector.attrs.push((
            body.trim().to_string(),
            None
          ));
        }
      }
    } else {
      return None;
    }
  }

  Some(selector)
}
