// tests/integration_tests/help_test.rs
use crate::common::resume;
use rcard::cli::help_text;

#[test]
fn test_help_shows_usage_and_flags() {
    colored::control::set_override(false);
    let text = help_text(&resume());

    assert!(text.contains("Nandini Maheshwari - Resume Card"));
    assert!(text.contains("Usage: rcard [options]"));
    assert!(text.contains("-s, --skills <category>"));
    assert!(text.contains("-t, --theme <name>"));
    assert!(text.contains("-c, --compact"));
    assert!(text.contains("-h, --help"));
}

#[test]
fn test_help_contains_no_resume_sections() {
    colored::control::set_override(false);
    let text = help_text(&resume());

    for banner in ["SUMMARY", "EXPERIENCE", "EDUCATION", "PROJECTS", "CERTIFICATIONS"] {
        assert!(!text.contains(banner));
    }
    assert!(!text.contains("Thanks for checking out my resume!"));
}

#[test]
fn test_help_names_the_real_categories() {
    colored::control::set_override(false);
    let text = help_text(&resume());
    assert!(text.contains("languages, frontend, backend, database, tools, cloud"));
}
