//! Headless core of the Lịch Âm
//! Dương page bootstrap.
//!
//! The server renders the page and
//! htmx swaps fragments into it;
//! this crate owns the behavior
//! attached on top: theme toggling,
//! request-lifecycle indicators,
//! keyboard chords, tooltips, toast
//! banners, and nav highlighting.
//! Every document access goes
//! through the [`dom::Dom`] adapter
//! and every timer through
//! [`schedule::Scheduler`], so the
//! whole surface runs and tests on
//! the host target without a
//! rendering engine.

pub mod bootstrap;
pub mod config;
pub mod datetime;
pub mod debounce;
pub mod dom;
pub mod lifecycle;
pub mod messages;
pub mod nav;
pub mod notify;
pub mod schedule;
pub mod shortcuts;
pub mod theme;
pub mod tooltip;

pub use bootstrap::{
  BootWiring,
  UiBootstrap
};
pub use config::{
  BootSettings,
  BootstrapConfig
};
pub use dom::{
  Dom,
  Rect,
  Size
};
pub use messages::Messages;
pub use notify::{
  Banner,
  NoticeKind
};
pub use schedule::Scheduler;
pub use shortcuts::{
  KeyInput,
  KeyOutcome,
  Shortcut
};
pub use theme::Theme;
