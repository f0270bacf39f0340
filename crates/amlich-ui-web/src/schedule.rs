//! Browser-backed one-shot timers.

use amlich_ui_core::schedule::Scheduler;
use gloo::timers::callback::Timeout;

#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
  type Handle = Timeout;

  fn after(
    &self,
    delay_ms: u32,
    callback: Box<dyn FnOnce()>
  ) -> Timeout {
    Timeout::new(delay_ms, move || {
      callback()
    })
  }

  fn fire_and_forget(
    &self,
    delay_ms: u32,
    callback: Box<dyn FnOnce()>
  ) {
    Timeout::new(delay_ms, move || {
      callback()
    })
    .forget();
  }
}
