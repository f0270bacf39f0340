//! Theme controller.
//!
//! Effective theme on boot: stored
//! preference, else the OS
//! color-scheme preference, else
//! light. Applying a theme toggles
//! the root marker class and swaps
//! the two header icons: the moon
//! shows in light mode, the sun in
//! dark mode.

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::dom::Dom;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Theme {
  Light,
  Dark
}

impl Theme {
  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Theme::Light => "light",
      | Theme::Dark => "dark"
    }
  }

  pub fn from_storage(
    raw: &str
  ) -> Option<Theme> {
    match raw {
      | "light" => Some(Theme::Light),
      | "dark" => Some(Theme::Dark),
      | _ => None
    }
  }

  pub fn flipped(self) -> Theme {
    match self {
      | Theme::Light => Theme::Dark,
      | Theme::Dark => Theme::Light
    }
  }
}

/// Boot-time resolution order:
/// stored value, OS preference,
/// light.
pub fn resolve(
  stored: Option<&str>,
  system_dark: bool
) -> Theme {
  stored
    .and_then(Theme::from_storage)
    .unwrap_or(if system_dark {
      Theme::Dark
    } else {
      Theme::Light
    })
}

struct Controls<N> {
  toggle:     N,
  moon_icon:  N,
  sun_icon:   N
}

fn controls<D: Dom>(
  dom: &D,
  config: &BootstrapConfig
) -> Option<Controls<D::Node>> {
  Some(Controls {
    toggle:    dom.element_by_id(
      &config.theme_toggle_id
    )?,
    moon_icon: dom.element_by_id(
      &config.theme_dark_icon_id
    )?,
    sun_icon:  dom.element_by_id(
      &config.theme_light_icon_id
    )?
  })
}

fn apply<D: Dom>(
  dom: &D,
  config: &BootstrapConfig,
  controls: &Controls<D::Node>,
  theme: Theme
) {
  let root = dom.root();
  match theme {
    | Theme::Dark => {
      dom.add_class(
        &root,
        &config.dark_class
      );
      dom.add_class(
        &controls.moon_icon,
        &config.hidden_class
      );
      dom.remove_class(
        &controls.sun_icon,
        &config.hidden_class
      );
    }
    | Theme::Light => {
      dom.remove_class(
        &root,
        &config.dark_class
      );
      dom.remove_class(
        &controls.moon_icon,
        &config.hidden_class
      );
      dom.add_class(
        &controls.sun_icon,
        &config.hidden_class
      );
    }
  }
}

/// Resolves and applies the boot
/// theme. Returns the toggle
/// control for click wiring, or
/// `None` when the page has no
/// theme controls at all.
pub(crate) fn initialize<D: Dom>(
  dom: &D,
  config: &BootstrapConfig
) -> Option<D::Node> {
  let controls = controls(dom, config)?;
  let stored = dom.preference(
    &config.theme_storage_key
  );
  let theme = resolve(
    stored.as_deref(),
    dom.prefers_dark()
  );
  debug!(
    theme = theme.storage_value(),
    stored = stored.is_some(),
    "applying boot theme"
  );
  apply(dom, config, &controls, theme);
  Some(controls.toggle)
}

/// Flips the applied theme,
/// persists the new value and
/// updates the icons. No-op on a
/// page without theme controls.
pub(crate) fn toggle<D: Dom>(
  dom: &D,
  config: &BootstrapConfig
) {
  let Some(controls) =
    controls(dom, config)
  else {
    return;
  };
  let current = if dom.has_class(
    &dom.root(),
    &config.dark_class
  ) {
    Theme::Dark
  } else {
    Theme::Light
  };
  let next = current.flipped();
  dom.set_preference(
    &config.theme_storage_key,
    next.storage_value()
  );
  debug!(
    theme = next.storage_value(),
    "theme toggled"
  );
  apply(dom, config, &controls, next);
}
