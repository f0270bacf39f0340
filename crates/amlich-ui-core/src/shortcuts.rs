//! Global keyboard chords.
//!
//! Each keystroke is checked
//! independently; there is no modal
//! state. Unmapped keys pass
//! through untouched.

use tracing::debug;

use crate::config::BootstrapConfig;
use crate::dom::Dom;

/// One keystroke as the event layer
/// saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
  pub key:  String,
  pub ctrl: bool,
  pub meta: bool
}

impl KeyInput {
  fn command(&self) -> bool {
    self.ctrl || self.meta
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Shortcut {
  /// Ctrl/Cmd+N — open the new-note
  /// form.
  NewNote,
  /// Escape — close the note form.
  CloseForm,
  /// Ctrl/Cmd+/ — jump to search.
  FocusSearch
}

#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
  Ignored,
  Handled {
    shortcut: Shortcut,
    /// Whether the browser default
    /// for the chord must be
    /// suppressed.
    suppress_default: bool
  }
}

/// Chord table. Shifted chords fall
/// through naturally because the
/// key value itself changes case.
pub fn match_chord(
  input: &KeyInput
) -> Option<Shortcut> {
  match input.key.as_str() {
    | "n" if input.command() => {
      Some(Shortcut::NewNote)
    }
    | "/" if input.command() => {
      Some(Shortcut::FocusSearch)
    }
    | "Escape" => {
      Some(Shortcut::CloseForm)
    }
    | _ => None
  }
}

pub(crate) fn dispatch<D: Dom>(
  dom: &D,
  config: &BootstrapConfig,
  input: &KeyInput
) -> KeyOutcome {
  let Some(shortcut) =
    match_chord(input)
  else {
    return KeyOutcome::Ignored;
  };
  debug!(
    ?shortcut,
    "keyboard chord matched"
  );

  let suppress_default = match
    shortcut
  {
    | Shortcut::NewNote => {
      if let Some(button) = dom
        .query_all(
          &config.new_note_selector
        )
        .into_iter()
        .next()
      {
        dom.click(&button);
      }
      true
    }
    | Shortcut::CloseForm => {
      if let Some(container) = dom
        .element_by_id(
          &config
            .note_form_container_id
        )
        && dom.has_content(&container)
      {
        dom.clear_content(&container);
      }
      false
    }
    | Shortcut::FocusSearch => {
      if let Some(input) = dom
        .query_all(
          &config
            .search_input_selector
        )
        .into_iter()
        .next()
      {
        dom.focus(&input);
      }
      true
    }
  };

  KeyOutcome::Handled {
    shortcut,
    suppress_default
  }
}
