//! The `window.CalendarApp`
//! namespace inline template
//! scripts call into: notify, the
//! two fixed-locale formatters and
//! a debounce wrapper.

use std::cell::RefCell;
use std::rc::Rc;

use amlich_ui_core::datetime;
use amlich_ui_core::debounce::Debouncer;
use amlich_ui_core::NoticeKind;
use js_sys::{
  Function,
  Object,
  Reflect
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::schedule::BrowserScheduler;
use crate::wire;

const NAMESPACE: &str = "CalendarApp";

pub(crate) fn install(
  window: &Window
) {
  let namespace = Object::new();

  let notify = Closure::<
    dyn Fn(String, Option<String>),
  >::new(
    |message: String,
     kind: Option<String>| {
      show_notification(
        &message,
        kind.as_deref()
      );
    }
  );
  set(
    &namespace,
    "notify",
    notify.into_js_value()
  );

  let format_date = Closure::<
    dyn Fn(String) -> String,
  >::new(|value: String| {
    datetime::format_date(&value)
      .unwrap_or(value)
  });
  set(
    &namespace,
    "formatDate",
    format_date.into_js_value()
  );

  let format_date_time = Closure::<
    dyn Fn(String) -> String,
  >::new(|value: String| {
    datetime::format_date_time(
      &value
    )
    .unwrap_or(value)
  });
  set(
    &namespace,
    "formatDateTime",
    format_date_time.into_js_value()
  );

  let debounce = Closure::<
    dyn Fn(Function, f64) -> JsValue,
  >::new(
    |func: Function, wait: f64| {
      debounced(func, wait as u32)
    }
  );
  set(
    &namespace,
    "debounce",
    debounce.into_js_value()
  );

  let _ = Reflect::set(
    window.as_ref(),
    &JsValue::from_str(NAMESPACE),
    &namespace
  );
}

fn show_notification(
  message: &str,
  kind: Option<&str>
) {
  let kind =
    NoticeKind::from_label(kind);
  let listener =
    wire::with_bootstrap(
      |bootstrap| {
        let banner = bootstrap
          .notify(message, kind);
        wire::wire_banner(
          bootstrap, banner
        )
      }
    );
  if let Some(listener) = listener {
    wire::push_listeners(vec![
      listener,
    ]);
  }
}

/// Wraps a JS function so it runs
/// once, `wait` ms after the last
/// call. The latest (single)
/// argument wins and is forwarded.
fn debounced(
  func: Function,
  wait: u32
) -> JsValue {
  let latest = Rc::new(RefCell::new(
    JsValue::UNDEFINED
  ));
  let callback: Rc<dyn Fn()> = {
    let latest = Rc::clone(&latest);
    Rc::new(move || {
      let arg =
        latest.borrow().clone();
      let _ = func.call1(
        &JsValue::NULL,
        &arg
      );
    })
  };
  let debouncer = Debouncer::new(
    BrowserScheduler,
    wait,
    callback
  );
  Closure::<dyn FnMut(JsValue)>::new(
    move |arg: JsValue| {
      *latest.borrow_mut() = arg;
      debouncer.poke();
    }
  )
  .into_js_value()
}

fn set(
  target: &Object,
  key: &str,
  value: JsValue
) {
  let _ = Reflect::set(
    target,
    &JsValue::from_str(key),
    &value
  );
}
