use app::components::{nav_slots, NavSlot, NAV_LINKS};
use app::mount::MountState;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn links(slots: &[NavSlot]) -> Vec<(&'static str, &'static str)> {
    slots
        .iter()
        .filter_map(|slot| match slot {
            NavSlot::Link(link) => Some((link.label, link.href)),
            NavSlot::ThemeToggle => None,
        })
        .collect()
}

fn toggles(slots: &[NavSlot]) -> usize {
    slots
        .iter()
        .filter(|slot| matches!(slot, NavSlot::ThemeToggle))
        .count()
}

#[test]
fn server_render_then_client_mount() {
    setup();

    // SSR and the first client render: the effect hasn't run yet.
    let mut state = MountState::default();
    let slots = nav_slots(state);
    assert!(links(&slots).is_empty());
    assert_eq!(0, toggles(&slots));

    assert!(state.mark_ready());
    let slots = nav_slots(state);
    assert_eq!(vec![("Home", "/"), ("Blog", "/blog")], links(&slots));
    assert_eq!(1, toggles(&slots));
    assert_eq!(NAV_LINKS.len() + 1, slots.len());
}

#[test]
fn mounting_twice_changes_nothing() {
    setup();

    let mut once = MountState::Pending;
    once.mark_ready();

    let mut twice = MountState::Pending;
    assert!(twice.mark_ready());
    assert!(!twice.mark_ready());

    assert_eq!(once, twice);
    assert_eq!(nav_slots(once), nav_slots(twice));
}

#[test]
fn never_goes_back_to_pending() {
    setup();

    let mut state = MountState::Pending;
    state.mark_ready();
    for _ in 0..3 {
        state.mark_ready();
        assert!(state.is_ready());
        assert!(!nav_slots(state).is_empty());
    }
}

#[cfg(feature = "ssr")]
#[test]
fn server_rendered_nav_bar_is_empty() {
    use app::components::NavBar;
    use leptos::prelude::*;
    use leptos_router::{components::Router, location::RequestUrl};

    setup();

    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(RequestUrl::new("/"));
        view! { <Router><NavBar /></Router> }.to_html()
    });
    assert!(!html.contains("<nav"), "unexpected nav in {html}");
    assert!(!html.contains("Home"), "unexpected link in {html}");
    assert!(!html.contains("Blog"), "unexpected link in {html}");
    assert!(!html.contains("<button"), "unexpected toggle in {html}");
}
