//! Manually advanced scheduler for
//! host-side tests.

use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

use super::Scheduler;

struct Timer {
  seq:       u64,
  deadline:  u64,
  cancelled: Rc<Cell<bool>>,
  callback:  Box<dyn FnOnce()>
}

#[derive(Default)]
struct Inner {
  now:    u64,
  seq:    u64,
  timers: Vec<Timer>
}

/// Deterministic clock; timers fire
/// only from [`FakeScheduler::advance`],
/// in deadline order.
#[derive(Clone, Default)]
pub struct FakeScheduler {
  inner: Rc<RefCell<Inner>>
}

/// Cancels its timer on drop.
pub struct FakeHandle {
  cancelled: Rc<Cell<bool>>
}

impl Drop for FakeHandle {
  fn drop(&mut self) {
    self.cancelled.set(true);
  }
}

impl FakeScheduler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn now(&self) -> u64 {
    self.inner.borrow().now
  }

  /// Number of armed, uncancelled
  /// timers.
  pub fn pending(&self) -> usize {
    self
      .inner
      .borrow()
      .timers
      .iter()
      .filter(|t| !t.cancelled.get())
      .count()
  }

  /// Moves the clock forward,
  /// running every timer that comes
  /// due. Callbacks may arm new
  /// timers; those fire too if they
  /// fall inside the window.
  pub fn advance(&self, ms: u64) {
    let target =
      self.inner.borrow().now + ms;
    loop {
      let next = {
        let mut inner =
          self.inner.borrow_mut();
        inner
          .timers
          .retain(|t| {
            !t.cancelled.get()
          });
        let due = inner
          .timers
          .iter()
          .enumerate()
          .filter(|(_, t)| {
            t.deadline <= target
          })
          .min_by_key(|(_, t)| {
            (t.deadline, t.seq)
          })
          .map(|(i, _)| i);
        match due {
          | Some(index) => {
            let timer = inner
              .timers
              .swap_remove(index);
            inner.now = timer.deadline;
            Some(timer.callback)
          }
          | None => {
            inner.now = target;
            None
          }
        }
      };
      match next {
        | Some(callback) => {
          callback();
        }
        | None => break
      }
    }
  }

  fn arm(
    &self,
    delay_ms: u32,
    callback: Box<dyn FnOnce()>
  ) -> Rc<Cell<bool>> {
    let cancelled =
      Rc::new(Cell::new(false));
    let mut inner =
      self.inner.borrow_mut();
    inner.seq += 1;
    let timer = Timer {
      seq:       inner.seq,
      deadline:  inner.now
        + u64::from(delay_ms),
      cancelled: Rc::clone(
        &cancelled
      ),
      callback
    };
    inner.timers.push(timer);
    cancelled
  }
}

impl Scheduler for FakeScheduler {
  type Handle = FakeHandle;

  fn after(
    &self,
    delay_ms: u32,
    callback: Box<dyn FnOnce()>
  ) -> FakeHandle {
    FakeHandle {
      cancelled: self
        .arm(delay_ms, callback)
    }
  }

  fn fire_and_forget(
    &self,
    delay_ms: u32,
    callback: Box<dyn FnOnce()>
  ) {
    let _ =
      self.arm(delay_ms, callback);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn advance_runs_due_timers_in_order()
  {
    let scheduler =
      FakeScheduler::new();
    let order = Rc::new(RefCell::new(
      Vec::new()
    ));

    let first = Rc::clone(&order);
    scheduler.fire_and_forget(
      20,
      Box::new(move || {
        first.borrow_mut().push(20);
      })
    );
    let second = Rc::clone(&order);
    scheduler.fire_and_forget(
      10,
      Box::new(move || {
        second.borrow_mut().push(10);
      })
    );

    scheduler.advance(30);
    assert_eq!(
      *order.borrow(),
      vec![10, 20]
    );
    assert_eq!(scheduler.now(), 30);
  }

  #[test]
  fn dropping_handle_cancels() {
    let scheduler =
      FakeScheduler::new();
    let fired =
      Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let handle = scheduler.after(
      10,
      Box::new(move || {
        flag.set(true);
      })
    );
    drop(handle);

    scheduler.advance(50);
    assert!(!fired.get());
    assert_eq!(scheduler.pending(), 0);
  }
}
