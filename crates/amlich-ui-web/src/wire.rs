//! Event wiring.
//!
//! Controllers never see raw
//! events; this layer converts
//! them and forwards into the
//! bootstrap, keeping every
//! listener handle alive for the
//! page lifetime in a thread-local
//! runtime (the page is single
//! threaded).

use std::cell::RefCell;
use std::rc::Rc;

use amlich_ui_core::{
  Banner,
  BootWiring,
  Dom,
  KeyInput,
  KeyOutcome,
  UiBootstrap
};
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  CustomEvent,
  Element,
  KeyboardEvent
};

use crate::dom::WebDom;
use crate::schedule::BrowserScheduler;

pub(crate) type Bootstrap =
  UiBootstrap<WebDom, BrowserScheduler>;

struct Runtime {
  bootstrap: Rc<Bootstrap>,
  listeners: Vec<EventListener>
}

thread_local! {
  static RUNTIME: RefCell<Option<Runtime>> =
    const { RefCell::new(None) };
}

/// Runs `f` against the live
/// bootstrap, if the page booted.
pub(crate) fn with_bootstrap<R>(
  f: impl FnOnce(&Rc<Bootstrap>) -> R
) -> Option<R> {
  RUNTIME.with(|slot| {
    slot
      .borrow()
      .as_ref()
      .map(|runtime| {
        f(&runtime.bootstrap)
      })
  })
}

pub(crate) fn push_listeners(
  fresh: Vec<EventListener>
) {
  RUNTIME.with(|slot| {
    if let Some(runtime) =
      slot.borrow_mut().as_mut()
    {
      runtime
        .listeners
        .extend(fresh);
    }
  });
}

/// Attaches every boot-time
/// listener and records the
/// runtime.
pub(crate) fn install(
  bootstrap: Rc<Bootstrap>,
  wiring: BootWiring<Element>,
  dom: &WebDom
) {
  let mut listeners = Vec::new();
  if let Some(toggle) =
    wiring.theme_toggle
  {
    listeners.push(wire_theme(
      &bootstrap, &toggle
    ));
  }
  listeners.push(wire_keyboard(
    &bootstrap, dom
  ));
  listeners.extend(
    wire_tooltip_anchors(
      &bootstrap,
      wiring.tooltip_anchors
    )
  );
  listeners
    .extend(wire_htmx(&bootstrap, dom));

  RUNTIME.with(|slot| {
    *slot.borrow_mut() =
      Some(Runtime {
        bootstrap,
        listeners
      });
  });
}

fn wire_theme(
  bootstrap: &Rc<Bootstrap>,
  toggle: &Element
) -> EventListener {
  let bootstrap = Rc::clone(bootstrap);
  EventListener::new(
    toggle,
    "click",
    move |_| bootstrap.toggle_theme()
  )
}

fn wire_keyboard(
  bootstrap: &Rc<Bootstrap>,
  dom: &WebDom
) -> EventListener {
  let bootstrap = Rc::clone(bootstrap);
  EventListener::new(
    dom.document(),
    "keydown",
    move |event| {
      let Some(keyboard) = event
        .dyn_ref::<KeyboardEvent>()
      else {
        return;
      };
      let input = KeyInput {
        key:  keyboard.key(),
        ctrl: keyboard.ctrl_key(),
        meta: keyboard.meta_key()
      };
      if let KeyOutcome::Handled {
        suppress_default: true,
        ..
      } =
        bootstrap.handle_key(&input)
      {
        keyboard.prevent_default();
      }
    }
  )
}

pub(crate) fn wire_tooltip_anchors(
  bootstrap: &Rc<Bootstrap>,
  anchors: Vec<Element>
) -> Vec<EventListener> {
  let mut listeners =
    Vec::with_capacity(
      anchors.len() * 2
    );
  for anchor in anchors {
    let enter = {
      let bootstrap =
        Rc::clone(bootstrap);
      let target = anchor.clone();
      let anchor = anchor.clone();
      EventListener::new(
        &target,
        "mouseenter",
        move |_| {
          bootstrap
            .tooltip_enter(&anchor)
        }
      )
    };
    let leave = {
      let bootstrap =
        Rc::clone(bootstrap);
      EventListener::new(
        &anchor,
        "mouseleave",
        move |_| {
          bootstrap.tooltip_leave()
        }
      )
    };
    listeners.push(enter);
    listeners.push(leave);
  }
  listeners
}

/// One-shot dismiss wiring for a
/// banner's inline close control.
pub(crate) fn wire_banner(
  bootstrap: &Rc<Bootstrap>,
  banner: Banner<Element>
) -> EventListener {
  let bootstrap = Rc::clone(bootstrap);
  let target = banner.dismiss.clone();
  EventListener::once(
    &target,
    "click",
    move |_| {
      bootstrap.dismiss(&banner)
    }
  )
}

fn wire_htmx(
  bootstrap: &Rc<Bootstrap>,
  dom: &WebDom
) -> Vec<EventListener> {
  let body = dom.body();
  let mut listeners = Vec::new();

  let config = {
    let bootstrap =
      Rc::clone(bootstrap);
    EventListener::new(
      &body,
      "htmx:configRequest",
      move |event| {
        let Some(headers) =
          event_detail(event, "headers")
        else {
          return;
        };
        let (name, value) =
          bootstrap.request_header();
        let _ = Reflect::set(
          &headers,
          &JsValue::from_str(name),
          &JsValue::from_str(value)
        );
      }
    )
  };
  listeners.push(config);

  let before = {
    let bootstrap =
      Rc::clone(bootstrap);
    EventListener::new(
      &body,
      "htmx:beforeRequest",
      move |_| {
        bootstrap.request_started()
      }
    )
  };
  listeners.push(before);

  let after = {
    let bootstrap =
      Rc::clone(bootstrap);
    EventListener::new(
      &body,
      "htmx:afterRequest",
      move |_| {
        bootstrap.request_finished()
      }
    )
  };
  listeners.push(after);

  let swap = {
    let bootstrap =
      Rc::clone(bootstrap);
    EventListener::new(
      &body,
      "htmx:afterSwap",
      move |event| {
        let target =
          event_detail(event, "target")
            .and_then(|value| {
              value
                .dyn_into::<Element>()
                .ok()
            });
        let anchors = bootstrap
          .content_swapped(
            target.as_ref()
          );
        let fresh =
          wire_tooltip_anchors(
            &bootstrap, anchors
          );
        push_listeners(fresh);
      }
    )
  };
  listeners.push(swap);

  let response_error = {
    let bootstrap =
      Rc::clone(bootstrap);
    EventListener::new(
      &body,
      "htmx:responseError",
      move |_| {
        let banner =
          bootstrap.response_error();
        push_listeners(vec![
          wire_banner(
            &bootstrap, banner
          ),
        ]);
      }
    )
  };
  listeners.push(response_error);

  let send_error = {
    let bootstrap =
      Rc::clone(bootstrap);
    EventListener::new(
      &body,
      "htmx:sendError",
      move |_| {
        let banner =
          bootstrap.send_error();
        push_listeners(vec![
          wire_banner(
            &bootstrap, banner
          ),
        ]);
      }
    )
  };
  listeners.push(send_error);

  listeners
}

fn event_detail(
  event: &web_sys::Event,
  key: &str
) -> Option<JsValue> {
  let custom =
    event.dyn_ref::<CustomEvent>()?;
  Reflect::get(
    &custom.detail(),
    &JsValue::from_str(key)
  )
  .ok()
  .filter(|value| {
    !value.is_undefined()
      && !value.is_null()
  })
}
