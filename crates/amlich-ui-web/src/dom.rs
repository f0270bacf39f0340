//! `web-sys` implementation of the
//! document adapter.
//!
//! Every fallible JS call collapses
//! into the adapter's contract:
//! lookups return `None`, mutations
//! on odd nodes do nothing.

use amlich_ui_core::dom::{
  Dom,
  Rect,
  Size
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  Storage,
  Window
};

#[derive(Clone)]
pub struct WebDom {
  window:   Window,
  document: Document
}

impl WebDom {
  pub fn new() -> Option<Self> {
    let window = web_sys::window()?;
    let document =
      window.document()?;
    Some(Self { window, document })
  }

  pub fn window(&self) -> &Window {
    &self.window
  }

  pub fn document(
    &self
  ) -> &Document {
    &self.document
  }

  fn storage(
    &self
  ) -> Option<Storage> {
    self
      .window
      .local_storage()
      .ok()
      .flatten()
  }
}

impl Dom for WebDom {
  type Node = Element;

  fn root(&self) -> Element {
    self
      .document
      .document_element()
      .expect(
        "document has no root \
         element"
      )
  }

  fn body(&self) -> Element {
    Element::from(
      self.document.body().expect(
        "document has no body"
      )
    )
  }

  fn element_by_id(
    &self,
    id: &str
  ) -> Option<Element> {
    self
      .document
      .get_element_by_id(id)
  }

  fn query_all(
    &self,
    selector: &str
  ) -> Vec<Element> {
    let Ok(list) = self
      .document
      .query_selector_all(selector)
    else {
      return Vec::new();
    };
    (0..list.length())
      .filter_map(|index| {
        list.item(index)
      })
      .filter_map(|node| {
        node
          .dyn_into::<Element>()
          .ok()
      })
      .collect()
  }

  fn create_element(
    &self,
    tag: &str
  ) -> Element {
    self
      .document
      .create_element(tag)
      .expect(
        "failed creating element"
      )
  }

  fn append_child(
    &self,
    parent: &Element,
    child: &Element
  ) {
    let _ =
      parent.append_child(child);
  }

  fn remove(&self, node: &Element) {
    node.remove();
  }

  fn add_class(
    &self,
    node: &Element,
    class: &str
  ) {
    let _ = node
      .class_list()
      .add_1(class);
  }

  fn remove_class(
    &self,
    node: &Element,
    class: &str
  ) {
    let _ = node
      .class_list()
      .remove_1(class);
  }

  fn has_class(
    &self,
    node: &Element,
    class: &str
  ) -> bool {
    node
      .class_list()
      .contains(class)
  }

  fn set_id(
    &self,
    node: &Element,
    id: &str
  ) {
    node.set_id(id);
  }

  fn set_class_name(
    &self,
    node: &Element,
    value: &str
  ) {
    node.set_class_name(value);
  }

  fn set_text(
    &self,
    node: &Element,
    text: &str
  ) {
    node
      .set_text_content(Some(text));
  }

  fn set_markup(
    &self,
    node: &Element,
    markup: &str
  ) {
    node.set_inner_html(markup);
  }

  fn has_content(
    &self,
    node: &Element
  ) -> bool {
    !node
      .inner_html()
      .trim()
      .is_empty()
  }

  fn clear_content(
    &self,
    node: &Element
  ) {
    node.set_inner_html("");
  }

  fn attribute(
    &self,
    node: &Element,
    name: &str
  ) -> Option<String> {
    node.get_attribute(name)
  }

  fn set_attribute(
    &self,
    node: &Element,
    name: &str,
    value: &str
  ) {
    let _ =
      node.set_attribute(name, value);
  }

  fn set_style(
    &self,
    node: &Element,
    property: &str,
    value: &str
  ) {
    if let Some(element) =
      node.dyn_ref::<HtmlElement>()
    {
      let _ = element
        .style()
        .set_property(
          property, value
        );
    }
  }

  fn bounding_rect(
    &self,
    node: &Element
  ) -> Rect {
    let rect = node
      .get_bounding_client_rect();
    Rect::new(
      rect.left(),
      rect.top(),
      rect.width(),
      rect.height()
    )
  }

  fn measured_size(
    &self,
    node: &Element
  ) -> Size {
    node
      .dyn_ref::<HtmlElement>()
      .map(|element| {
        Size::new(
          f64::from(
            element.offset_width()
          ),
          f64::from(
            element.offset_height()
          )
        )
      })
      .unwrap_or(Size::new(0.0, 0.0))
  }

  fn click(&self, node: &Element) {
    if let Some(element) =
      node.dyn_ref::<HtmlElement>()
    {
      element.click();
    }
  }

  fn focus(&self, node: &Element) {
    if let Some(element) =
      node.dyn_ref::<HtmlElement>()
    {
      let _ = element.focus();
    }
  }

  fn current_path(&self) -> String {
    self
      .window
      .location()
      .pathname()
      .unwrap_or_else(|_| {
        "/".to_string()
      })
  }

  fn preference(
    &self,
    key: &str
  ) -> Option<String> {
    self.storage().and_then(
      |storage| {
        storage
          .get_item(key)
          .ok()
          .flatten()
      }
    )
  }

  fn set_preference(
    &self,
    key: &str,
    value: &str
  ) {
    if let Some(storage) =
      self.storage()
    {
      let _ = storage
        .set_item(key, value);
    }
  }

  fn prefers_dark(&self) -> bool {
    self
      .window
      .match_media(
        "(prefers-color-scheme: \
         dark)"
      )
      .ok()
      .flatten()
      .is_some_and(|media| {
        media.matches()
      })
  }
}
