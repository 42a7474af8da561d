use std::collections::HashMap;

use constellation_engine::page::{
    HEADER_OFFSET, Menu, NAV_LINKS, NavState, ScrollRequest, Section, scroll_to_section,
    validate_anchors,
};
use proptest::prelude::*;

/// Viewport-relative tops for a page scrolled to 0
fn layout() -> HashMap<String, f64> {
    Section::anchors()
        .enumerate()
        .map(|(i, id)| (id.to_string(), 800.0 * (i as f64 + 1.0)))
        .collect()
}

#[test]
fn every_nav_link_resolves_on_a_full_page() {
    let page = layout();
    assert!(validate_anchors(page.keys().map(String::as_str)).is_ok());

    let lookup = |id: &str| page.get(id).copied();
    let mut nav = NavState::new();
    for link in NAV_LINKS {
        let id = link.section.anchor().unwrap();
        let req = nav.activate_link(&lookup, id, 0.0).unwrap();
        assert_eq!(req.top, page[id] - HEADER_OFFSET);
    }
}

#[test]
fn mobile_flow_open_pick_close() {
    let page = layout();
    let lookup = |id: &str| page.get(id).copied();
    let mut nav = NavState::new();

    assert_eq!(nav.toggle_menu(), Menu::Open);
    let req = nav.activate_link(&lookup, "contact", 120.0);
    assert_eq!(nav.menu(), Menu::Closed);
    assert_eq!(req, Some(ScrollRequest { top: page["contact"] + 120.0 - 100.0 }));

    // Missing target still closes the menu, but scrolls nowhere
    nav.toggle_menu();
    assert_eq!(nav.activate_link(&lookup, "blog", 120.0), None);
    assert_eq!(nav.menu(), Menu::Closed);
}

#[test]
fn scrolled_flag_at_reference_offsets() {
    let mut nav = NavState::new();
    let expected = [(0.0, false), (49.0, false), (50.0, false), (51.0, true), (500.0, true)];
    for (offset, scrolled) in expected {
        nav.on_scroll(offset);
        assert_eq!(nav.is_scrolled(), scrolled, "offset {offset}");
    }
}

proptest! {
    #[test]
    fn scrolled_iff_past_fifty(offset in -1_000.0f64..10_000.0) {
        let mut nav = NavState::new();
        nav.on_scroll(offset);
        prop_assert_eq!(nav.is_scrolled(), offset > 50.0);
    }

    #[test]
    fn target_is_top_plus_scroll_minus_header(top in -5_000.0f64..5_000.0, scroll in 0.0f64..20_000.0) {
        let lookup = move |_: &str| Some(top);
        let req = scroll_to_section(&lookup, "about", scroll).unwrap();
        prop_assert_eq!(req.top, top + scroll - 100.0);
    }

    #[test]
    fn toggling_twice_is_identity(start_open in any::<bool>(), offset in 0.0f64..200.0) {
        let mut nav = NavState::new();
        nav.on_scroll(offset);
        if start_open {
            nav.toggle_menu();
        }
        let before = nav;
        nav.toggle_menu();
        nav.toggle_menu();
        prop_assert_eq!(nav, before);
    }
}
