//! Adapter over the six request
//! lifecycle events the
//! HTML-over-the-wire library
//! emits. Retries, backoff and
//! queuing stay on the library's
//! side; this layer only reflects
//! request state into the page.

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::dom::Dom;
use crate::tooltip;

fn set_indicator<D: Dom>(
  dom: &D,
  config: &BootstrapConfig,
  visible: bool
) {
  let Some(indicator) = dom
    .element_by_id(
      &config.loading_indicator_id
    )
  else {
    return;
  };
  dom.set_style(
    &indicator,
    "display",
    if visible { "block" } else {
      "none"
    }
  );
}

pub(crate) fn request_started<
  D: Dom,
>(
  dom: &D,
  config: &BootstrapConfig
) {
  set_indicator(dom, config, true);
}

pub(crate) fn request_finished<
  D: Dom,
>(
  dom: &D,
  config: &BootstrapConfig
) {
  set_indicator(dom, config, false);
}

/// After a fragment swap: animate
/// the swapped region and pick up
/// tooltip anchors the new markup
/// brought in. Returns the anchors
/// that still need pointer
/// listeners.
pub(crate) fn content_swapped<
  D: Dom,
>(
  dom: &D,
  config: &BootstrapConfig,
  target: Option<&D::Node>
) -> Vec<D::Node> {
  if let Some(target) = target {
    dom.add_class(
      target,
      &config.swap_animation_class
    );
  }
  let anchors =
    tooltip::install(dom, config);
  debug!(
    animated = target.is_some(),
    new_anchors = anchors.len(),
    "content swapped"
  );
  anchors
}
