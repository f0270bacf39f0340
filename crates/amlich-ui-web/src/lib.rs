//! Browser entrypoint for the Lịch
//! Âm Dương page bootstrap.
//!
//! The server renders the page;
//! this module loads alongside it,
//! waits for the document if it is
//! still parsing, then boots the
//! controllers and wires their
//! events.

mod dom;
mod namespace;
mod schedule;
mod wire;

use std::rc::Rc;

use amlich_ui_core::{
  BootSettings,
  UiBootstrap
};
use gloo::events::EventListener;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::DocumentReadyState;

use crate::dom::WebDom;
use crate::schedule::BrowserScheduler;

/// Optional page-embedded JSON
/// block overriding the contract
/// and message catalog.
const CONFIG_BLOCK_ID: &str =
  "calendar-app-config";

#[wasm_bindgen(start)]
pub fn start() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let Some(dom) = WebDom::new()
  else {
    return;
  };

  if dom.document().ready_state()
    == DocumentReadyState::Loading
  {
    let target =
      dom.document().clone();
    EventListener::once(
      &target,
      "DOMContentLoaded",
      move |_| boot(&dom)
    )
    .forget();
  } else {
    boot(&dom);
  }
}

fn boot(dom: &WebDom) {
  let settings = load_settings(dom);
  let bootstrap =
    Rc::new(UiBootstrap::new(
      dom.clone(),
      BrowserScheduler,
      settings
    ));
  let wiring = bootstrap.boot();
  namespace::install(dom.window());
  wire::install(
    bootstrap, wiring, dom
  );
}

fn load_settings(
  dom: &WebDom
) -> BootSettings {
  let Some(block) = dom
    .document()
    .get_element_by_id(
      CONFIG_BLOCK_ID
    )
  else {
    return BootSettings::default();
  };
  let raw = block
    .text_content()
    .unwrap_or_default();
  match BootSettings::from_json(&raw)
  {
    | Ok(settings) => settings,
    | Err(error) => {
      tracing::warn!(
        %error,
        "ignoring malformed \
         bootstrap config block"
      );
      BootSettings::default()
    }
  }
}
