use super::*;
use std::collections::HashSet;

/// Every accordion key on the page, prizes first.
fn accordion_keys() -> impl Iterator<Item = &'static str> {
    PRIZE_CATEGORIES.iter().map(|p| p.key).chain(FAQS.iter().map(|f| f.key))
}

// =============================================================
// Accordion keys
// =============================================================

#[test]
fn accordion_keys_are_unique() {
    let keys: Vec<&str> = accordion_keys().collect();
    let unique: HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(keys.len(), 12);
    assert_eq!(unique.len(), keys.len());
}

#[test]
fn prize_keys_in_page_order() {
    let keys: Vec<&str> = PRIZE_CATEGORIES.iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["start", "foundation", "gti", "software", "proscale"]);
}

#[test]
fn prize_amounts_descend_by_place() {
    for category in PRIZE_CATEGORIES {
        let [first, second, third] = category.amounts;
        assert!(first > second && second > third, "{}", category.key);
    }
}

// =============================================================
// Currency
// =============================================================

#[test]
fn brl_groups_thousands_with_dots() {
    assert_eq!(format_brl(500), "R$ 500");
    assert_eq!(format_brl(1000), "R$ 1.000");
    assert_eq!(format_brl(6000), "R$ 6.000");
    assert_eq!(format_brl(1_234_567), "R$ 1.234.567");
}

#[test]
fn brl_zero() {
    assert_eq!(format_brl(0), "R$ 0");
}

// =============================================================
// Sections
// =============================================================

#[test]
fn about_cards_stagger_by_100ms() {
    let delays: Vec<f64> = ABOUT_CARDS.iter().map(|c| c.delay_ms).collect();
    assert_eq!(delays, vec![0.0, 100.0, 200.0, 300.0, 400.0, 500.0]);
}

#[test]
fn footer_links_skip_faq() {
    let ids: Vec<&str> = footer_links().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["sobre", "trilhas", "regras", "prazos"]);
}

#[test]
fn nav_ids_are_unique() {
    let ids: HashSet<&str> = NAV_LINKS.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), NAV_LINKS.len());
}

#[test]
fn every_track_has_a_guide() {
    for track in SEMESTER_TRACKS {
        match track.body {
            TrackBody::Common { topics, guide_url } => {
                assert!(!topics.is_empty());
                assert!(guide_url.starts_with("https://drive.google.com/"));
            }
            TrackBody::PerCourse(courses) => {
                assert!(courses.iter().all(|c| c.guide_url.starts_with("https://drive.google.com/")));
            }
        }
    }
    assert!(ENGINEERING_TRACK.guide_url.starts_with("https://drive.google.com/"));
}

#[test]
fn requirement_markers_are_two_digits() {
    assert_eq!(requirement_marker(0), "01");
    assert_eq!(requirement_marker(5), "06");
}

#[test]
fn only_last_faq_links_contact() {
    let with_contact: Vec<&str> = FAQS.iter().filter(|f| f.with_contact).map(|f| f.key).collect();
    assert_eq!(with_contact, vec!["faq7"]);
}

#[test]
fn deadlines_point_at_distinct_forms() {
    assert_eq!(DEADLINES[0].link, DeadlineLink::Registration);
    assert_eq!(DEADLINES[1].link, DeadlineLink::Submission);
}
