use amlich_ui_core::dom::fake::{FakeDom, FakeNode};
use amlich_ui_core::schedule::fake::FakeScheduler;
use amlich_ui_core::{
    BootSettings, Dom, KeyInput, KeyOutcome, Shortcut, UiBootstrap,
};

fn bootstrap(dom: &FakeDom) -> UiBootstrap<FakeDom, FakeScheduler> {
    UiBootstrap::new(dom.clone(), FakeScheduler::new(), BootSettings::default())
}

fn seed_theme_controls(dom: &FakeDom) -> (FakeNode, FakeNode, FakeNode) {
    let toggle = dom.seed("button");
    dom.set_id(&toggle, "theme-toggle");
    let moon = dom.seed("svg");
    dom.set_id(&moon, "theme-toggle-dark-icon");
    let sun = dom.seed("svg");
    dom.set_id(&sun, "theme-toggle-light-icon");
    (toggle, moon, sun)
}

#[test]
fn system_dark_boot_applies_marker_and_swaps_icons() {
    let dom = FakeDom::new();
    let (_, moon, sun) = seed_theme_controls(&dom);
    dom.set_prefers_dark(true);

    let ui = bootstrap(&dom);
    let wiring = ui.boot();

    assert!(wiring.theme_toggle.is_some());
    assert!(dom.has_class(&dom.root(), "dark"));
    assert!(dom.has_class(&moon, "hidden"));
    assert!(!dom.has_class(&sun, "hidden"));
}

#[test]
fn double_toggle_round_trips_state_and_preference() {
    let dom = FakeDom::new();
    let (_, moon, sun) = seed_theme_controls(&dom);
    dom.set_preference("theme", "light");

    let ui = bootstrap(&dom);
    ui.boot();
    assert!(!dom.has_class(&dom.root(), "dark"));

    ui.toggle_theme();
    assert!(dom.has_class(&dom.root(), "dark"));
    assert_eq!(dom.preference("theme").as_deref(), Some("dark"));
    assert!(dom.has_class(&moon, "hidden"));
    assert!(!dom.has_class(&sun, "hidden"));

    ui.toggle_theme();
    assert!(!dom.has_class(&dom.root(), "dark"));
    assert_eq!(dom.preference("theme").as_deref(), Some("light"));
    assert!(!dom.has_class(&moon, "hidden"));
    assert!(dom.has_class(&sun, "hidden"));
}

#[test]
fn boot_without_theme_controls_is_a_no_op() {
    let dom = FakeDom::new();
    dom.set_prefers_dark(true);

    let ui = bootstrap(&dom);
    let wiring = ui.boot();

    assert!(wiring.theme_toggle.is_none());
    assert!(!dom.has_class(&dom.root(), "dark"));
}

#[test]
fn new_note_chord_clicks_the_affordance() {
    let dom = FakeDom::new();
    let button = dom.seed("button");
    dom.set_attribute(&button, "hx-get", "/notes/new");

    let ui = bootstrap(&dom);
    let outcome = ui.handle_key(&KeyInput {
        key: "n".to_string(),
        ctrl: true,
        meta: false,
    });

    assert_eq!(
        outcome,
        KeyOutcome::Handled {
            shortcut: Shortcut::NewNote,
            suppress_default: true,
        }
    );
    assert_eq!(dom.clicks(&button), 1);
}

#[test]
fn new_note_chord_without_affordance_still_suppresses_default() {
    let dom = FakeDom::new();
    let ui = bootstrap(&dom);

    let outcome = ui.handle_key(&KeyInput {
        key: "n".to_string(),
        ctrl: false,
        meta: true,
    });
    assert_eq!(
        outcome,
        KeyOutcome::Handled {
            shortcut: Shortcut::NewNote,
            suppress_default: true,
        }
    );
}

#[test]
fn escape_clears_a_non_empty_form_container() {
    let dom = FakeDom::new();
    let container = dom.seed("div");
    dom.set_id(&container, "note-form-container");
    dom.set_markup(&container, "<form><input></form>");

    let ui = bootstrap(&dom);
    let outcome = ui.handle_key(&KeyInput {
        key: "Escape".to_string(),
        ctrl: false,
        meta: false,
    });

    assert_eq!(
        outcome,
        KeyOutcome::Handled {
            shortcut: Shortcut::CloseForm,
            suppress_default: false,
        }
    );
    assert!(!dom.has_content(&container));
}

#[test]
fn escape_on_an_empty_container_is_a_no_op() {
    let dom = FakeDom::new();
    let container = dom.seed("div");
    dom.set_id(&container, "note-form-container");

    let ui = bootstrap(&dom);
    let outcome = ui.handle_key(&KeyInput {
        key: "Escape".to_string(),
        ctrl: false,
        meta: false,
    });

    assert_eq!(
        outcome,
        KeyOutcome::Handled {
            shortcut: Shortcut::CloseForm,
            suppress_default: false,
        }
    );
    assert!(!dom.has_content(&container));
}

#[test]
fn search_chord_focuses_the_first_search_input() {
    let dom = FakeDom::new();
    let first = dom.seed("input");
    dom.set_attribute(&first, "type", "search");
    let second = dom.seed("input");
    dom.set_attribute(&second, "type", "search");

    let ui = bootstrap(&dom);
    let outcome = ui.handle_key(&KeyInput {
        key: "/".to_string(),
        ctrl: true,
        meta: false,
    });

    assert_eq!(
        outcome,
        KeyOutcome::Handled {
            shortcut: Shortcut::FocusSearch,
            suppress_default: true,
        }
    );
    assert_eq!(dom.focus_count(&first), 1);
    assert_eq!(dom.focus_count(&second), 0);
}

#[test]
fn unmapped_keys_pass_through() {
    let dom = FakeDom::new();
    let ui = bootstrap(&dom);

    let outcome = ui.handle_key(&KeyInput {
        key: "a".to_string(),
        ctrl: false,
        meta: false,
    });
    assert_eq!(outcome, KeyOutcome::Ignored);
}

#[test]
fn boot_highlights_exact_nav_matches_only() {
    let dom = FakeDom::new();
    let notes = dom.seed("a");
    dom.add_class(&notes, "nav-link");
    dom.set_attribute(&notes, "href", "/notes");
    let home = dom.seed("a");
    dom.add_class(&home, "nav-link");
    dom.set_attribute(&home, "href", "/");
    dom.set_path("/notes");

    let ui = bootstrap(&dom);
    ui.boot();

    assert!(dom.has_class(&notes, "active"));
    assert!(!dom.has_class(&home, "active"));
}

#[test]
fn root_path_highlights_the_root_link() {
    let dom = FakeDom::new();
    let home = dom.seed("a");
    dom.add_class(&home, "nav-link");
    dom.set_attribute(&home, "href", "/");
    dom.set_path("/");

    let ui = bootstrap(&dom);
    ui.boot();

    assert!(dom.has_class(&home, "active"));
}
