// src/core/render.rs
use colored::Colorize as _;

use crate::core::layout::{self, Border, BoxStyle};
use crate::core::theme::Theme;
use crate::models::ResumeData;

/// ANSI sequence that clears the screen and homes the cursor, emitted before
/// the card is printed.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[1;1H";

/// Presentation options derived from the command line, resolved once per run.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme_name: String,
    pub compact: bool,
    pub skill_filter: Option<String>,
}

/// Renders the complete card: header, summary and skills always, the
/// remaining sections unless compact mode is combined with a skill filter,
/// and the footer last.
#[must_use]
pub fn render(resume: &ResumeData, opts: &RenderOptions) -> String {
    let theme = Theme::resolve(&opts.theme_name);
    let compact = opts.compact;

    let mut out = String::new();
    out.push_str(&header(resume, theme, compact));
    out.push('\n');
    out.push_str(&section("Summary", &summary(resume, theme), theme, compact));
    out.push('\n');
    out.push_str(&section(
        "Skills",
        &skills(resume, theme, opts.skill_filter.as_deref()),
        theme,
        compact,
    ));
    out.push('\n');

    if !compact || opts.skill_filter.is_none() {
        out.push_str(&section("Experience", &experience(resume, theme, compact), theme, compact));
        out.push('\n');
        out.push_str(&section("Education", &education(resume, theme), theme, compact));
        out.push('\n');
        out.push_str(&section("Projects", &projects(resume, theme, compact), theme, compact));
        out.push('\n');
        out.push_str(&section(
            "Achievements",
            &achievements(resume, theme, compact),
            theme,
            compact,
        ));
        out.push('\n');
        out.push_str(&section(
            "Certifications",
            &certifications(resume, theme, compact),
            theme,
            compact,
        ));
        out.push('\n');
    }

    out.push_str(&footer(resume, theme, opts));
    out
}

/// Identity and contact block inside a double-bordered box.
#[must_use]
pub fn header(resume: &ResumeData, theme: Theme, compact: bool) -> String {
    let body = format!(
        "{}\n  {}\n\n  📧 {}\n  📱 {}\n  📍 {}\n  💼 {}\n  🌐 {}\n  🔗 {}",
        resume.name.color(theme.primary).bold(),
        resume.title.color(theme.secondary),
        resume.email,
        resume.phone,
        resume.location,
        resume.linkedin,
        resume.github,
        resume.website,
    );

    layout::boxed(
        &body,
        BoxStyle {
            border: Border::Double,
            color: theme.primary,
            padded: !compact,
            centered: false,
        },
    )
}

/// Titled section: an uppercase banner between separator rules, then the body.
#[must_use]
pub fn section(title: &str, content: &str, theme: Theme, compact: bool) -> String {
    let rule = layout::separator(compact);
    let rule = rule.color(theme.secondary).bold();
    format!(
        "\n{rule}\n{}\n{rule}\n\n{content}",
        title.to_uppercase().color(theme.secondary).bold()
    )
}

#[must_use]
pub fn summary(resume: &ResumeData, theme: Theme) -> String {
    resume.summary.color(theme.text).to_string()
}

/// Skills section. With a filter set, shows the one matching category plus a
/// usage hint, or an inline error listing the valid categories; otherwise
/// lists every category in authored order.
#[must_use]
pub fn skills(resume: &ResumeData, theme: Theme, filter: Option<&str>) -> String {
    if let Some(filter) = filter {
        let category = filter.to_lowercase();
        let Some(group) = resume.skill_group(&category) else {
            return format!(
                "❌ Category \"{category}\" not found. Available: {}",
                resume.categories().join(", ")
            )
            .red()
            .to_string();
        };

        let items: Vec<String> = group
            .items
            .iter()
            .map(|s| format!("▪ {s}").color(theme.accent).to_string())
            .collect();
        return format!(
            "{}\n{}\n\n{}\n{}",
            format!("{} SKILLS:", category.to_uppercase())
                .color(theme.accent)
                .bold(),
            items.join("\n"),
            "💡 Tip: Use --skills <category> to filter other skill categories".dimmed(),
            format!("Available categories: {}", resume.categories().join(", ")).dimmed(),
        );
    }

    resume
        .skills
        .iter()
        .map(|group| {
            let items: Vec<String> = group
                .items
                .iter()
                .map(|s| format!("▪ {s}").color(theme.accent).to_string())
                .collect();
            format!(
                "{}\n{}",
                format!("{}:", group.category.to_uppercase())
                    .color(theme.accent)
                    .bold(),
                items.join("\n")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Work history. Compact mode keeps only the two most recent entries.
#[must_use]
pub fn experience(resume: &ResumeData, theme: Theme, compact: bool) -> String {
    let take = if compact { 2 } else { resume.experience.len() };
    resume
        .experience
        .iter()
        .take(take)
        .map(|job| {
            format!(
                "{} - {}\n{}\n{}",
                job.company.color(theme.secondary).bold(),
                job.position.color(theme.text).bold(),
                job.duration.dimmed(),
                job.description.color(theme.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[must_use]
pub fn education(resume: &ResumeData, theme: Theme) -> String {
    resume
        .education
        .iter()
        .map(|edu| {
            format!(
                "{}\n{} - {}",
                edu.institution.color(theme.secondary).bold(),
                edu.degree.color(theme.text),
                edu.year.dimmed(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Project list. Compact mode keeps only the first entry.
#[must_use]
pub fn projects(resume: &ResumeData, theme: Theme, compact: bool) -> String {
    let take = if compact { 1 } else { resume.projects.len() };
    resume
        .projects
        .iter()
        .take(take)
        .map(|project| {
            format!(
                "{}\n{}\n{}",
                project.name.color(theme.secondary).bold(),
                project.description.color(theme.text),
                format!("Tech: {}", project.tech).dimmed(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Achievement list. Compact mode keeps only the first entry.
#[must_use]
pub fn achievements(resume: &ResumeData, theme: Theme, compact: bool) -> String {
    let take = if compact { 1 } else { resume.achievements.len() };
    resume
        .achievements
        .iter()
        .take(take)
        .map(|ach| {
            format!(
                "{}\n{}",
                ach.title.color(theme.secondary).bold(),
                ach.description.color(theme.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Certification list. Compact mode keeps only the first entry.
#[must_use]
pub fn certifications(resume: &ResumeData, theme: Theme, compact: bool) -> String {
    let take = if compact { 1 } else { resume.certifications.len() };
    resume
        .certifications
        .iter()
        .take(take)
        .map(|cert| format!("▪ {cert}").color(theme.accent).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Closing block inside a single-bordered, centered box. Names the active
/// theme so the cosmetic options are discoverable.
#[must_use]
pub fn footer(resume: &ResumeData, theme: Theme, opts: &RenderOptions) -> String {
    let body = format!(
        "{}\n{} {} {}\n{} {} {}\n{} {}",
        "Thanks for checking out my resume!"
            .color(theme.primary)
            .bold(),
        "Run".dimmed(),
        "cargo install rcard".color(theme.primary),
        "to install globally".dimmed(),
        "Theme:".dimmed(),
        opts.theme_name.color(theme.secondary),
        "| Use --help for more options".dimmed(),
        "Connect with me:".dimmed(),
        resume.email.color(theme.secondary),
    );

    layout::boxed(
        &body,
        BoxStyle {
            border: Border::Single,
            color: theme.primary,
            padded: !opts.compact,
            centered: true,
        },
    )
}
