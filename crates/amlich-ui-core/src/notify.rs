//! Toast banners.
//!
//! Banners are fixed-position,
//! self-dismissing after a
//! configured TTL, and carry an
//! inline dismiss control. There is
//! no stacking logic; layout is
//! whatever the page stylesheet
//! does with them.

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::dom::Dom;
use crate::schedule::Scheduler;

const BANNER_BASE_CLASSES: &str =
  "fixed top-4 right-4 z-50 px-4 \
   py-3 rounded-md shadow-lg \
   text-white max-w-sm";

const DISMISS_ICON: &str =
  "<svg class=\"w-4 h-4\" \
   fill=\"none\" \
   stroke=\"currentColor\" \
   viewBox=\"0 0 24 24\">\
   <path \
   stroke-linecap=\"round\" \
   stroke-linejoin=\"round\" \
   stroke-width=\"2\" \
   d=\"M6 18L18 6M6 6l12 12\">\
   </path></svg>";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum NoticeKind {
  #[default]
  Info,
  Success,
  Error
}

impl NoticeKind {
  /// Lenient parse of the label the
  /// public surface accepts;
  /// anything unknown is info.
  pub fn from_label(
    label: Option<&str>
  ) -> NoticeKind {
    match label {
      | Some("error") => {
        NoticeKind::Error
      }
      | Some("success") => {
        NoticeKind::Success
      }
      | _ => NoticeKind::Info
    }
  }

  pub fn color_class(
    self
  ) -> &'static str {
    match self {
      | NoticeKind::Error => {
        "bg-red-500"
      }
      | NoticeKind::Success => {
        "bg-green-500"
      }
      | NoticeKind::Info => {
        "bg-blue-500"
      }
    }
  }
}

/// Parts of a shown banner the
/// event layer still needs: the
/// node to remove and the dismiss
/// control to wire.
#[derive(Debug, Clone)]
pub struct Banner<N> {
  pub root:    N,
  pub dismiss: N
}

pub(crate) fn show<D, S>(
  dom: &D,
  scheduler: &S,
  config: &BootstrapConfig,
  message: &str,
  kind: NoticeKind
) -> Banner<D::Node>
where
  D: Dom + 'static,
  S: Scheduler
{
  debug!(
    ?kind,
    message,
    "showing banner"
  );
  let banner =
    dom.create_element("div");
  dom.set_class_name(
    &banner,
    &format!(
      "{BANNER_BASE_CLASSES} {}",
      kind.color_class()
    )
  );

  let row = dom.create_element("div");
  dom.set_class_name(
    &row,
    "flex items-center"
  );
  let text =
    dom.create_element("span");
  dom.set_class_name(
    &text, "flex-1"
  );
  dom.set_text(&text, message);
  let dismiss =
    dom.create_element("button");
  dom.set_class_name(
    &dismiss,
    "ml-2 text-white \
     hover:text-gray-200"
  );
  dom.set_markup(
    &dismiss,
    DISMISS_ICON
  );

  dom.append_child(&row, &text);
  dom.append_child(&row, &dismiss);
  dom.append_child(&banner, &row);
  dom.append_child(
    &dom.body(),
    &banner
  );

  // Removing an already dismissed
  // banner again is harmless, so
  // the timer needs no cancel path.
  let ttl_dom = dom.clone();
  let ttl_node = banner.clone();
  scheduler.fire_and_forget(
    config.banner_ttl_ms,
    Box::new(move || {
      ttl_dom.remove(&ttl_node);
    })
  );

  Banner {
    root: banner,
    dismiss
  }
}
