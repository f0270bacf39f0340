//! Trailing-edge debounce over a
//! [`Scheduler`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::schedule::Scheduler;

/// Runs its callback once, `wait`
/// milliseconds after the last
/// [`poke`](Debouncer::poke). Each
/// poke cancels the pending timer
/// by dropping its handle.
pub struct Debouncer<S: Scheduler> {
  scheduler: S,
  wait:      u32,
  callback:  Rc<dyn Fn()>,
  pending:   RefCell<Option<S::Handle>>
}

impl<S: Scheduler> Debouncer<S> {
  pub fn new(
    scheduler: S,
    wait: u32,
    callback: Rc<dyn Fn()>
  ) -> Self {
    Self {
      scheduler,
      wait,
      callback,
      pending: RefCell::new(None)
    }
  }

  pub fn poke(&self) {
    let callback =
      Rc::clone(&self.callback);
    let handle = self.scheduler.after(
      self.wait,
      Box::new(move || callback())
    );
    // Replacing the slot drops the
    // previous handle, cancelling
    // its timer.
    *self.pending.borrow_mut() =
      Some(handle);
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;
  use crate::schedule::fake::FakeScheduler;

  #[test]
  fn burst_collapses_to_one_call() {
    let scheduler =
      FakeScheduler::new();
    let calls =
      Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&calls);
    let debouncer = Debouncer::new(
      scheduler.clone(),
      100,
      Rc::new(move || {
        counter.set(
          counter.get() + 1
        );
      })
    );

    debouncer.poke();
    scheduler.advance(25);
    debouncer.poke();
    scheduler.advance(25);
    debouncer.poke();

    // 50ms in, three pokes seen,
    // nothing fired yet.
    assert_eq!(calls.get(), 0);

    scheduler.advance(99);
    assert_eq!(calls.get(), 0);
    scheduler.advance(1);
    assert_eq!(calls.get(), 1);

    scheduler.advance(1_000);
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn quiet_poke_fires_after_wait() {
    let scheduler =
      FakeScheduler::new();
    let calls =
      Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&calls);
    let debouncer = Debouncer::new(
      scheduler.clone(),
      40,
      Rc::new(move || {
        counter.set(
          counter.get() + 1
        );
      })
    );

    debouncer.poke();
    scheduler.advance(40);
    assert_eq!(calls.get(), 1);

    debouncer.poke();
    scheduler.advance(40);
    assert_eq!(calls.get(), 2);
  }
}
