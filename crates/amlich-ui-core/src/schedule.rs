//! One-shot timer boundary.
//!
//! The page only ever arms two
//! kinds of timers: the banner
//! auto-dismiss and the debounce
//! delay. Both are one-shot; the
//! debounce one must be cancelable.

pub mod fake;

/// Host for one-shot timers.
pub trait Scheduler {
  /// Cancels the timer when
  /// dropped.
  type Handle;

  /// Arms a cancelable timer.
  fn after(
    &self,
    delay_ms: u32,
    callback: Box<dyn FnOnce()>
  ) -> Self::Handle;

  /// Arms a timer that outlives any
  /// handle.
  fn fire_and_forget(
    &self,
    delay_ms: u32,
    callback: Box<dyn FnOnce()>
  );
}
