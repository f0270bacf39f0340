use amlich_ui_core::dom::fake::FakeDom;
use amlich_ui_core::schedule::fake::FakeScheduler;
use amlich_ui_core::{
    BootSettings, Dom, NoticeKind, Rect, Size, UiBootstrap,
};

fn bootstrap(
    dom: &FakeDom,
    scheduler: &FakeScheduler,
) -> UiBootstrap<FakeDom, FakeScheduler> {
    UiBootstrap::new(dom.clone(), scheduler.clone(), BootSettings::default())
}

fn banner_text(dom: &FakeDom) -> Vec<String> {
    dom.query_all(".flex-1")
        .iter()
        .map(|node| dom.text_of(node))
        .collect()
}

#[test]
fn notify_inserts_one_styled_banner_and_auto_dismisses() {
    let dom = FakeDom::new();
    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);

    ui.notify("X", NoticeKind::Error);

    assert_eq!(dom.query_all(".bg-red-500").len(), 1);
    assert_eq!(banner_text(&dom), vec!["X".to_string()]);

    scheduler.advance(4_999);
    assert_eq!(dom.query_all(".bg-red-500").len(), 1);
    scheduler.advance(1);
    assert!(dom.query_all(".bg-red-500").is_empty());
}

#[test]
fn notify_kind_picks_the_color_class() {
    let dom = FakeDom::new();
    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);

    ui.notify("saved", NoticeKind::Success);
    ui.notify("fyi", NoticeKind::Info);

    assert_eq!(dom.query_all(".bg-green-500").len(), 1);
    assert_eq!(dom.query_all(".bg-blue-500").len(), 1);
}

#[test]
fn manual_dismissal_beats_the_timer() {
    let dom = FakeDom::new();
    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);

    let banner = ui.notify("going away", NoticeKind::Info);
    ui.dismiss(&banner);
    assert!(!dom.is_attached(&banner.root));

    // The TTL timer still fires; removing a detached banner is a no-op.
    scheduler.advance(10_000);
    assert!(!dom.is_attached(&banner.root));
}

#[test]
fn response_error_shows_the_exact_localized_message() {
    let dom = FakeDom::new();
    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);

    ui.response_error();
    assert_eq!(
        banner_text(&dom),
        vec!["Có lỗi xảy ra. Vui lòng thử lại.".to_string()]
    );
    assert_eq!(dom.query_all(".bg-red-500").len(), 1);
}

#[test]
fn send_error_shows_the_exact_localized_message() {
    let dom = FakeDom::new();
    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);

    ui.send_error();
    assert_eq!(
        banner_text(&dom),
        vec!["Không thể kết nối đến máy chủ.".to_string()]
    );
}

#[test]
fn request_lifecycle_drives_the_indicator() {
    let dom = FakeDom::new();
    let indicator = dom.seed("div");
    dom.set_id(&indicator, "loading-indicator");
    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);

    ui.request_started();
    assert_eq!(dom.style_of(&indicator, "display").as_deref(), Some("block"));

    ui.request_finished();
    assert_eq!(dom.style_of(&indicator, "display").as_deref(), Some("none"));
}

#[test]
fn lifecycle_without_indicator_is_a_no_op() {
    let dom = FakeDom::new();
    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);

    ui.request_started();
    ui.request_finished();
}

#[test]
fn swap_animates_target_and_wires_only_new_anchors() {
    let dom = FakeDom::new();
    let early = dom.seed("span");
    dom.set_attribute(&early, "data-tooltip", "cũ");

    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);
    let wiring = ui.boot();
    assert_eq!(wiring.tooltip_anchors, vec![early.clone()]);

    let target = dom.seed("div");
    let fresh = dom.seed("span");
    dom.set_attribute(&fresh, "data-tooltip", "mới");

    let new_anchors = ui.content_swapped(Some(&target));
    assert!(dom.has_class(&target, "form-slide-in"));
    assert_eq!(new_anchors, vec![fresh]);

    // A further sweep with nothing new stays empty.
    assert!(ui.content_swapped(None).is_empty());
}

#[test]
fn tooltip_shows_positioned_above_the_anchor() {
    let dom = FakeDom::new();
    let anchor = dom.seed("button");
    dom.set_attribute(&anchor, "data-tooltip", "Xem chi tiết");
    dom.set_rect(&anchor, Rect::new(100.0, 200.0, 60.0, 20.0));
    dom.set_default_measured_size(Size::new(40.0, 30.0));

    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);
    ui.boot();

    ui.tooltip_enter(&anchor);
    let tip = dom.element_by_id("custom-tooltip").expect("tooltip shown");
    assert_eq!(dom.text_of(&tip), "Xem chi tiết");
    assert_eq!(dom.style_of(&tip, "left").as_deref(), Some("110px"));
    assert_eq!(dom.style_of(&tip, "top").as_deref(), Some("165px"));

    ui.tooltip_leave();
    assert!(dom.element_by_id("custom-tooltip").is_none());
}

#[test]
fn at_most_one_tooltip_exists() {
    let dom = FakeDom::new();
    let first = dom.seed("button");
    dom.set_attribute(&first, "data-tooltip", "một");
    let second = dom.seed("button");
    dom.set_attribute(&second, "data-tooltip", "hai");

    let scheduler = FakeScheduler::new();
    let ui = bootstrap(&dom, &scheduler);
    ui.boot();

    ui.tooltip_enter(&first);
    ui.tooltip_enter(&second);

    let tips = dom.query_all("[id=\"custom-tooltip\"]");
    assert_eq!(tips.len(), 1);
    assert_eq!(dom.text_of(&tips[0]), "hai");
}
