//! The composed page controller.
//!
//! One instance owns the whole
//! behavioral surface; the event
//! layer forwards raw events into
//! these methods and wires the
//! nodes the boot pass hands back.

use tracing::info;

use crate::config::{
  BootSettings,
  BootstrapConfig
};
use crate::dom::Dom;
use crate::lifecycle;
use crate::messages::Messages;
use crate::nav;
use crate::notify::{
  self,
  Banner,
  NoticeKind
};
use crate::schedule::Scheduler;
use crate::shortcuts::{
  self,
  KeyInput,
  KeyOutcome
};
use crate::theme;
use crate::tooltip;

/// Nodes the boot pass discovered
/// that still need event listeners.
pub struct BootWiring<N> {
  pub theme_toggle: Option<N>,
  pub tooltip_anchors: Vec<N>
}

pub struct UiBootstrap<D, S> {
  dom:       D,
  scheduler: S,
  config:    BootstrapConfig,
  messages:  Messages
}

impl<D, S> UiBootstrap<D, S>
where
  D: Dom + 'static,
  S: Scheduler
{
  pub fn new(
    dom: D,
    scheduler: S,
    settings: BootSettings
  ) -> Self {
    Self {
      dom,
      scheduler,
      config: settings.config,
      messages: settings.messages
    }
  }

  pub fn config(
    &self
  ) -> &BootstrapConfig {
    &self.config
  }

  /// One-time startup pass: theme,
  /// navigation, first tooltip
  /// sweep.
  pub fn boot(
    &self
  ) -> BootWiring<D::Node> {
    let theme_toggle =
      theme::initialize(
        &self.dom,
        &self.config
      );
    nav::highlight(
      &self.dom,
      &self.config
    );
    let tooltip_anchors =
      tooltip::install(
        &self.dom,
        &self.config
      );
    info!(
      "calendar page bootstrap \
       initialized"
    );
    BootWiring {
      theme_toggle,
      tooltip_anchors
    }
  }

  pub fn toggle_theme(&self) {
    theme::toggle(
      &self.dom,
      &self.config
    );
  }

  pub fn handle_key(
    &self,
    input: &KeyInput
  ) -> KeyOutcome {
    shortcuts::dispatch(
      &self.dom,
      &self.config,
      input
    )
  }

  pub fn tooltip_enter(
    &self,
    anchor: &D::Node
  ) {
    tooltip::show(
      &self.dom,
      &self.config,
      anchor
    );
  }

  pub fn tooltip_leave(&self) {
    tooltip::hide(
      &self.dom,
      &self.config
    );
  }

  pub fn request_started(&self) {
    lifecycle::request_started(
      &self.dom,
      &self.config
    );
  }

  pub fn request_finished(&self) {
    lifecycle::request_finished(
      &self.dom,
      &self.config
    );
  }

  /// Header injected into every
  /// partial-page request.
  pub fn request_header(
    &self
  ) -> (&str, &str) {
    (
      self
        .config
        .request_header_name
        .as_str(),
      self
        .config
        .request_header_value
        .as_str()
    )
  }

  /// Returns tooltip anchors the
  /// swapped-in markup introduced;
  /// the caller wires them.
  pub fn content_swapped(
    &self,
    target: Option<&D::Node>
  ) -> Vec<D::Node> {
    lifecycle::content_swapped(
      &self.dom,
      &self.config,
      target
    )
  }

  pub fn response_error(
    &self
  ) -> Banner<D::Node> {
    self.notify(
      &self.messages.response_error,
      NoticeKind::Error
    )
  }

  pub fn send_error(
    &self
  ) -> Banner<D::Node> {
    self.notify(
      &self.messages.send_error,
      NoticeKind::Error
    )
  }

  pub fn notify(
    &self,
    message: &str,
    kind: NoticeKind
  ) -> Banner<D::Node> {
    notify::show(
      &self.dom,
      &self.scheduler,
      &self.config,
      message,
      kind
    )
  }

  pub fn dismiss(
    &self,
    banner: &Banner<D::Node>
  ) {
    self.dom.remove(&banner.root);
  }
}
