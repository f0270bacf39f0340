//! Navigation highlighting. Runs
//! once at boot; later client-side
//! swaps do not re-run it.

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::dom::Dom;

/// Exact-match comparison; the root
/// path only matches itself.
pub fn is_active(
  current_path: &str,
  href: &str
) -> bool {
  if current_path == "/" {
    return href == "/";
  }
  href == current_path
}

pub(crate) fn highlight<D: Dom>(
  dom: &D,
  config: &BootstrapConfig
) {
  let current = dom.current_path();
  let links = dom.query_all(
    &config.nav_link_selector
  );
  debug!(
    path = %current,
    links = links.len(),
    "highlighting navigation"
  );
  for link in links {
    let Some(href) =
      dom.attribute(&link, "href")
    else {
      continue;
    };
    if is_active(&current, &href) {
      dom.add_class(
        &link,
        &config.nav_active_class
      );
    }
  }
}
