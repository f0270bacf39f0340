//! Tooltip manager.
//!
//! At most one tooltip node exists
//! in the document at any instant;
//! it lives under a fixed id and is
//! replaced wholesale on every
//! show. Anchors are discovered by
//! attribute and stamped with a
//! wired marker so a re-install
//! after a content swap returns
//! only the anchors that still need
//! pointer listeners.

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::dom::{
  Dom,
  Rect,
  Size
};

const TOOLTIP_CLASSES: &str =
  "absolute z-50 px-2 py-1 text-sm \
   text-white bg-gray-900 rounded \
   shadow-lg pointer-events-none";

/// Top-left corner for a tooltip
/// centered above its anchor.
pub fn placement(
  anchor: Rect,
  tip: Size,
  offset: f64
) -> (f64, f64) {
  let left = anchor.left
    + anchor.width / 2.0
    - tip.width / 2.0;
  let top = anchor.top
    - tip.height
    - offset;
  (left, top)
}

/// Stamps unwired anchors and
/// returns them; strictly additive
/// across repeated calls.
pub(crate) fn install<D: Dom>(
  dom: &D,
  config: &BootstrapConfig
) -> Vec<D::Node> {
  let wired: Vec<D::Node> = dom
    .query_all(
      &config.tooltip_selector()
    )
    .into_iter()
    .filter(|anchor| {
      dom
        .attribute(
          anchor,
          &config
            .tooltip_wired_attribute
        )
        .is_none()
    })
    .collect();
  for anchor in &wired {
    dom.set_attribute(
      anchor,
      &config.tooltip_wired_attribute,
      "true"
    );
  }
  if !wired.is_empty() {
    debug!(
      anchors = wired.len(),
      "wired tooltip anchors"
    );
  }
  wired
}

pub(crate) fn show<D: Dom>(
  dom: &D,
  config: &BootstrapConfig,
  anchor: &D::Node
) {
  hide(dom, config);
  let Some(text) = dom.attribute(
    anchor,
    &config.tooltip_attribute
  ) else {
    return;
  };

  let tip = dom.create_element("div");
  dom.set_id(
    &tip,
    &config.tooltip_id
  );
  dom.set_class_name(
    &tip,
    TOOLTIP_CLASSES
  );
  dom.set_text(&tip, &text);
  dom.append_child(
    &dom.body(),
    &tip
  );

  // Measured only after insertion;
  // a detached node has no layout.
  let (left, top) = placement(
    dom.bounding_rect(anchor),
    dom.measured_size(&tip),
    config.tooltip_offset_px
  );
  dom.set_style(
    &tip,
    "left",
    &format!("{left}px")
  );
  dom.set_style(
    &tip,
    "top",
    &format!("{top}px")
  );
}

pub(crate) fn hide<D: Dom>(
  dom: &D,
  config: &BootstrapConfig
) {
  if let Some(tip) = dom
    .element_by_id(&config.tooltip_id)
  {
    dom.remove(&tip);
  }
}

#[cfg(test)]
mod tests {
  use super::placement;
  use crate::dom::{
    Rect,
    Size
  };

  #[test]
  fn centered_above_the_anchor() {
    let anchor = Rect::new(
      100.0, 200.0, 60.0, 20.0
    );
    let tip = Size::new(40.0, 30.0);

    let (left, top) =
      placement(anchor, tip, 5.0);
    assert_eq!(left, 110.0);
    assert_eq!(top, 165.0);
  }

  #[test]
  fn wide_tip_may_overhang_left() {
    let anchor = Rect::new(
      10.0, 100.0, 20.0, 20.0
    );
    let tip = Size::new(80.0, 16.0);

    let (left, top) =
      placement(anchor, tip, 5.0);
    assert_eq!(left, -20.0);
    assert_eq!(top, 79.0);
  }
}
