use super::*;

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 100.0, 600.0),
        SectionBounds::new("about", 700.0, 500.0),
        SectionBounds::new("skills", 1200.0, 800.0),
        SectionBounds::new("contact", 2000.0, 400.0),
    ]
}

fn snapshot(offset: f64) -> ScrollSnapshot {
    ScrollSnapshot { offset, sections: page() }
}

// =============================================================
// SectionBounds
// =============================================================

#[test]
fn section_contains_is_half_open() {
    let section = SectionBounds::new("about", 700.0, 500.0);
    assert!(!section.contains(699.9));
    assert!(section.contains(700.0));
    assert!(section.contains(1199.9));
    assert!(!section.contains(1200.0));
}

#[test]
fn zero_height_section_contains_nothing() {
    let section = SectionBounds::new("empty", 300.0, 0.0);
    assert!(!section.contains(300.0));
}

// =============================================================
// compute — active section
// =============================================================

#[test]
fn offset_inside_one_section_activates_only_that_section() {
    // 900 + lookahead lands inside "about".
    let state = compute(&snapshot(900.0));
    assert_eq!(state.active_section.as_deref(), Some("about"));
}

#[test]
fn every_section_is_reachable() {
    for section in page() {
        let offset = section.top - ACTIVE_LOOKAHEAD_PX + 1.0;
        let state = compute(&snapshot(offset));
        assert_eq!(state.active_section.as_deref(), Some(section.id.as_str()));
    }
}

#[test]
fn offset_before_all_sections_activates_nothing() {
    let state = compute(&snapshot(0.0));
    assert_eq!(state.active_section, None);
}

#[test]
fn offset_past_all_sections_activates_nothing() {
    let state = compute(&snapshot(5000.0));
    assert_eq!(state.active_section, None);
}

#[test]
fn boundary_belongs_to_the_following_section() {
    let state = compute(&snapshot(1200.0 - ACTIVE_LOOKAHEAD_PX));
    assert_eq!(state.active_section.as_deref(), Some("skills"));
}

#[test]
fn overlapping_sections_resolve_to_last_in_document_order() {
    let snapshot = ScrollSnapshot {
        offset: 420.0,
        sections: vec![SectionBounds::new("first", 0.0, 1000.0), SectionBounds::new("second", 400.0, 200.0)],
    };
    assert_eq!(compute(&snapshot).active_section.as_deref(), Some("second"));
}

#[test]
fn empty_layout_activates_nothing() {
    let state = compute(&ScrollSnapshot { offset: 300.0, sections: Vec::new() });
    assert_eq!(state.active_section, None);
    assert!(state.scrolled);
}

// =============================================================
// compute — scrolled flag
// =============================================================

#[test]
fn scrolled_flag_threshold_is_exclusive() {
    assert!(!compute(&snapshot(0.0)).scrolled);
    assert!(!compute(&snapshot(50.0)).scrolled);
    assert!(compute(&snapshot(51.0)).scrolled);
}

// =============================================================
// ScrollTracker
// =============================================================

#[test]
fn tracker_starts_with_nothing_active() {
    let tracker = ScrollTracker::new();
    assert_eq!(tracker.state(), &ScrollState::default());
}

#[test]
fn tracker_reports_first_change() {
    let mut tracker = ScrollTracker::new();
    let changed = tracker.on_scroll(&snapshot(900.0)).cloned();
    assert_eq!(
        changed,
        Some(ScrollState { active_section: Some("about".to_owned()), scrolled: true })
    );
}

#[test]
fn tracker_is_idempotent_for_unchanged_input() {
    let mut tracker = ScrollTracker::new();
    assert!(tracker.on_scroll(&snapshot(900.0)).is_some());
    let before = tracker.state().clone();
    assert!(tracker.on_scroll(&snapshot(900.0)).is_none());
    assert_eq!(tracker.state(), &before);
}

#[test]
fn tracker_ignores_movement_within_the_same_section() {
    let mut tracker = ScrollTracker::new();
    assert!(tracker.on_scroll(&snapshot(800.0)).is_some());
    assert!(tracker.on_scroll(&snapshot(850.0)).is_none());
}

#[test]
fn tracker_clears_active_section_when_scrolling_back_to_top() {
    let mut tracker = ScrollTracker::new();
    tracker.on_scroll(&snapshot(900.0));
    let state = tracker.on_scroll(&snapshot(0.0)).cloned();
    assert_eq!(state, Some(ScrollState::default()));
}
