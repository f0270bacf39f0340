//! Document adapter boundary.
//!
//! Controllers never touch a real
//! document; they speak this trait.
//! The wasm crate backs it with
//! `web-sys`, tests with the
//! in-memory [`fake::FakeDom`].

pub mod fake;

/// Viewport-relative box of an
/// element, in CSS pixels.
#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct Rect {
  pub left:   f64,
  pub top:    f64,
  pub width:  f64,
  pub height: f64
}

impl Rect {
  pub fn new(
    left: f64,
    top: f64,
    width: f64,
    height: f64
  ) -> Self {
    Self {
      left,
      top,
      width,
      height
    }
  }
}

/// Rendered size of an element.
#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct Size {
  pub width:  f64,
  pub height: f64
}

impl Size {
  pub fn new(
    width: f64,
    height: f64
  ) -> Self {
    Self { width, height }
  }
}

/// Single-page document surface the
/// controllers run against.
///
/// Lookups return `None` when the
/// page does not carry the element;
/// callers treat that as "feature
/// absent" and no-op. Mutations on
/// detached nodes are harmless.
pub trait Dom: Clone {
  type Node: Clone + PartialEq;

  /// Root element carrying the
  /// theme marker class.
  fn root(&self) -> Self::Node;

  fn body(&self) -> Self::Node;

  fn element_by_id(
    &self,
    id: &str
  ) -> Option<Self::Node>;

  /// All attached elements matching
  /// a CSS selector, in document
  /// order.
  fn query_all(
    &self,
    selector: &str
  ) -> Vec<Self::Node>;

  /// Creates a detached element.
  fn create_element(
    &self,
    tag: &str
  ) -> Self::Node;

  fn append_child(
    &self,
    parent: &Self::Node,
    child: &Self::Node
  );

  /// Detaches the node from the
  /// document.
  fn remove(&self, node: &Self::Node);

  fn add_class(
    &self,
    node: &Self::Node,
    class: &str
  );

  fn remove_class(
    &self,
    node: &Self::Node,
    class: &str
  );

  fn has_class(
    &self,
    node: &Self::Node,
    class: &str
  ) -> bool;

  fn set_id(
    &self,
    node: &Self::Node,
    id: &str
  );

  fn set_class_name(
    &self,
    node: &Self::Node,
    value: &str
  );

  fn set_text(
    &self,
    node: &Self::Node,
    text: &str
  );

  /// Replaces the node's children
  /// with raw markup.
  fn set_markup(
    &self,
    node: &Self::Node,
    markup: &str
  );

  /// Whether the node has any
  /// non-whitespace content.
  fn has_content(
    &self,
    node: &Self::Node
  ) -> bool;

  fn clear_content(
    &self,
    node: &Self::Node
  );

  fn attribute(
    &self,
    node: &Self::Node,
    name: &str
  ) -> Option<String>;

  fn set_attribute(
    &self,
    node: &Self::Node,
    name: &str,
    value: &str
  );

  fn set_style(
    &self,
    node: &Self::Node,
    property: &str,
    value: &str
  );

  fn bounding_rect(
    &self,
    node: &Self::Node
  ) -> Rect;

  /// Layout size of the node after
  /// insertion.
  fn measured_size(
    &self,
    node: &Self::Node
  ) -> Size;

  /// Synthesizes a click on the
  /// node.
  fn click(&self, node: &Self::Node);

  fn focus(&self, node: &Self::Node);

  /// Path component of the current
  /// document location.
  fn current_path(&self) -> String;

  /// Persisted preference lookup
  /// (browser local storage).
  fn preference(
    &self,
    key: &str
  ) -> Option<String>;

  fn set_preference(
    &self,
    key: &str,
    value: &str
  );

  /// OS-level dark color-scheme
  /// preference.
  fn prefers_dark(&self) -> bool;
}
