// tests/integration_tests/compact_test.rs
use crate::common::rendered;

#[test]
fn test_compact_caps_experience_at_two_entries() {
    let out = rendered("default", true, None);
    assert!(out.contains("Aum Group"));
    assert!(out.contains("Icon Consulting Group"));
    assert!(!out.contains("Corazor Technology Pvt Ltd"));
}

#[test]
fn test_compact_keeps_first_project_achievement_certification() {
    let out = rendered("default", true, None);

    assert!(out.contains("Griz - AI Therapist"));
    assert!(!out.contains("Chatly - WebRTC Project"));
    assert!(!out.contains("DevTube - Video Streaming Backend"));

    assert!(out.contains("NASA Space Apps Challenge (Global Nominee)"));
    assert!(!out.contains("Open Source Contributions"));

    assert!(out.contains("Postman API Fundamentals Student Expert (Feb 2024)"));
    assert!(!out.contains("Azure Cloud Native Technologies (Mar 2024)"));
}

#[test]
fn test_compact_without_filter_still_shows_all_sections() {
    let out = rendered("default", true, None);
    for banner in ["EXPERIENCE", "EDUCATION", "PROJECTS", "ACHIEVEMENTS", "CERTIFICATIONS"] {
        assert!(out.contains(banner), "compact output should keep the {banner} section");
    }
}

#[test]
fn test_compact_with_filter_suppresses_later_sections() {
    let out = rendered("default", true, Some("backend"));

    assert!(out.contains("BACKEND SKILLS:"));
    assert!(!out.contains("EXPERIENCE"));
    assert!(!out.contains("EDUCATION"));
    assert!(!out.contains("PROJECTS"));
    assert!(!out.contains("ACHIEVEMENTS"));
    assert!(!out.contains("CERTIFICATIONS"));

    // Header, summary and footer still frame the card
    assert!(out.contains("Nandini Maheshwari"));
    assert!(out.contains("SUMMARY"));
    assert!(out.contains("Thanks for checking out my resume!"));
}

#[test]
fn test_full_mode_with_filter_keeps_all_sections() {
    // The suppression rule needs compact AND a filter; a filter alone is not
    // enough.
    let out = rendered("dark", false, Some("backend"));
    assert!(out.contains("BACKEND SKILLS:"));
    for banner in ["EXPERIENCE", "EDUCATION", "PROJECTS", "ACHIEVEMENTS", "CERTIFICATIONS"] {
        assert!(out.contains(banner));
    }
}
