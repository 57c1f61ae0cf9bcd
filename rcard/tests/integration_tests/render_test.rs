// tests/integration_tests/render_test.rs
use crate::common::rendered;

#[test]
fn test_default_render_has_every_section_in_order() {
    let out = rendered("default", false, None);

    let banners = [
        "Nandini Maheshwari",
        "SUMMARY",
        "SKILLS",
        "EXPERIENCE",
        "EDUCATION",
        "PROJECTS",
        "ACHIEVEMENTS",
        "CERTIFICATIONS",
        "Thanks for checking out my resume!",
    ];

    let mut last = 0;
    for banner in banners {
        let pos = out.find(banner).unwrap_or_else(|| panic!("missing {banner}"));
        assert!(pos >= last, "{banner} should come after the previous section");
        last = pos;
    }
}

#[test]
fn test_header_and_footer_are_boxed() {
    let out = rendered("default", false, None);
    // Double border around the header, single border around the footer
    assert!(out.contains('╔'));
    assert!(out.contains('╚'));
    assert!(out.contains('┌'));
    assert!(out.contains('└'));
}

#[test]
fn test_footer_reports_theme_name_even_when_unknown() {
    let out = rendered("neon", false, None);
    // Unknown themes fall back to the default palette but keep their name
    assert!(out.contains("neon"));
}

#[test]
fn test_render_is_idempotent() {
    let first = rendered("dark", true, Some("backend"));
    let second = rendered("dark", true, Some("backend"));
    assert_eq!(first, second);
}

#[test]
fn test_spec_example_backend_dark_shows_full_card() {
    // `--skills backend --theme dark` without compact: filtered skills plus
    // every other section.
    let out = rendered("dark", false, Some("backend"));
    assert!(out.contains("BACKEND SKILLS:"));
    assert!(out.contains("EXPERIENCE"));
    assert!(out.contains("EDUCATION"));
    assert!(out.contains("Thanks for checking out my resume!"));
}
