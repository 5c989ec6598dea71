//! Section routing and carousel rotation.

mod common;

use welcomedesk::core::dashboard::panel_for_index;

use common::*;

#[test]
fn test_sections_map_to_panels() {
    assert_eq!(panel_for_index(0), Panel::Cards);
    assert_eq!(panel_for_index(1), Panel::Overview);
    assert_eq!(panel_for_index(2), Panel::Mentorship);
    assert_eq!(panel_for_index(3), Panel::Social);
    assert_eq!(panel_for_index(4), Panel::Cards);
    assert_eq!(panel_for_index(usize::MAX), Panel::Cards);

    for section in Section::ALL {
        assert_eq!(Section::from_index(section.index()), Some(section));
    }
}

#[test]
fn test_navigator_starts_on_first_card_of_onboarding() {
    let nav = DashboardNavigator::new();
    assert_eq!(nav.section(), Section::Onboarding);
    assert_eq!(nav.panel(), Panel::Cards);
    assert_eq!(nav.carousel().active_card(), Card::Checklist);
}

#[test]
fn test_carousel_wraps_both_ways() {
    let mut carousel = Carousel::default();
    assert_eq!(carousel.previous(), 2);
    assert_eq!(carousel.active_card(), Card::InteractiveTutorials);
    assert_eq!(carousel.next(), 0);

    let mut carousel = Carousel::default();
    carousel.next();
    carousel.next();
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(carousel.next(), 0);
}

#[test]
fn test_indicator_matches_active_index() {
    let mut carousel = Carousel::default();
    for _ in 0..7 {
        let markers = carousel.indicator();
        assert_eq!(markers.len(), Carousel::LEN);
        assert_eq!(markers.iter().filter(|&&m| m).count(), 1);
        assert!(markers[carousel.active_index()]);
        carousel.next();
    }
}

#[test]
fn test_leaving_onboarding_resets_carousel() {
    let mut nav = DashboardNavigator::new();
    nav.next_card();
    assert_eq!(nav.carousel().active_index(), 1);

    // Re-selecting the visible section keeps the position.
    nav.select_section(0);
    assert_eq!(nav.carousel().active_index(), 1);

    assert_eq!(nav.select_section(2), Section::Mentorship);
    assert_eq!(nav.panel(), Panel::Mentorship);
    nav.select_section(0);
    assert_eq!(nav.carousel().active_index(), 0);
}

#[test]
fn test_out_of_range_selection_shows_cards() {
    let mut nav = DashboardNavigator::new();
    nav.select_section(3);
    assert_eq!(nav.panel(), Panel::Social);
    assert_eq!(nav.select_section(42), Section::Onboarding);
    assert_eq!(nav.panel(), Panel::Cards);
}
