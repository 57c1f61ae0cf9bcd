// src/cli.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize as _;

use crate::core::render::{self, CLEAR_SCREEN, RenderOptions};
use crate::models::ResumeData;

/// Command-line flags. Parsing never fails: argv is reduced to the tokens the
/// program understands (see [`recognized`]) before clap sees it, and the
/// built-in help flag is replaced with an explicit field so the program
/// prints its own usage text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, ignore_errors = true)]
pub struct Args {
    /// Filter the skills section to a single category
    #[arg(short = 's', long = "skills", value_name = "CATEGORY", allow_hyphen_values = true)]
    pub skills: Option<String>,

    /// Color theme (default, dark, minimal)
    #[arg(
        short = 't',
        long,
        default_value = "default",
        value_name = "NAME",
        allow_hyphen_values = true
    )]
    pub theme: String,

    /// Abbreviated output with fewer entries per section
    #[arg(short = 'c', long)]
    pub compact: bool,

    /// Show this help message
    #[arg(short = 'h', long)]
    pub help: bool,
}

fn canonical(flag: &str) -> Option<(&'static str, bool)> {
    match flag {
        "-s" | "--skills" => Some(("skills", true)),
        "-t" | "--theme" => Some(("theme", true)),
        "-c" | "--compact" => Some(("compact", false)),
        "-h" | "--help" => Some(("help", false)),
        "-V" | "--version" => Some(("version", false)),
        _ => None,
    }
}

/// Reduces raw argv to the tokens the program understands: each known flag is
/// kept (first occurrence wins), the token following `--skills`/`--theme` is
/// kept as that flag's value, and everything else is dropped. Unrecognized
/// arguments therefore never disturb the flags around them.
#[must_use]
pub fn recognized<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<String> = Vec::new();
    let mut seen: Vec<&'static str> = Vec::new();

    // argv[0] is the binary name, kept as-is
    if let Some(bin) = iter.next() {
        out.push(bin);
    }

    while let Some(arg) = iter.next() {
        let (flag, has_inline_value) = match arg.find('=') {
            Some(i) if arg.starts_with('-') => (&arg[..i], true),
            _ => (arg.as_str(), false),
        };
        let Some((name, takes_value)) = canonical(flag) else {
            continue;
        };
        if !takes_value && has_inline_value {
            continue;
        }

        let duplicate = seen.contains(&name);
        if !duplicate {
            seen.push(name);
            out.push(arg.clone());
        }
        if takes_value && !has_inline_value {
            // The following token is this flag's value, duplicate or not
            if let Some(value) = iter.next() {
                if !duplicate {
                    out.push(value);
                }
            }
        }
    }

    out
}

/// Usage text, branded with the resume owner's name.
#[must_use]
pub fn help_text(resume: &ResumeData) -> String {
    format!(
        "{}\n{}\n\nOptions:\n  \
         -s, --skills <category>    Filter skills by category ({})\n  \
         -t, --theme <name>         Choose theme (default, dark, minimal)\n  \
         -c, --compact              Show compact version\n  \
         -h, --help                 Show this help message\n\n\
         Examples:\n  \
         rcard --skills backend\n  \
         rcard --theme dark\n  \
         rcard --compact\n  \
         rcard --skills frontend --theme minimal",
        format!("{} - Resume Card", resume.name).cyan().bold(),
        "\nUsage: rcard [options]".yellow(),
        resume.categories().join(", "),
    )
}

/// One parse-format-print cycle: help text if requested, otherwise clear the
/// screen and print the card. Always succeeds for the shipped data.
///
/// # Errors
///
/// Returns an error only if the embedded resume document fails to parse.
pub fn run(args: &Args) -> Result<()> {
    let resume = ResumeData::builtin()?;

    if args.help {
        println!("{}", help_text(&resume));
        return Ok(());
    }

    let opts = RenderOptions {
        theme_name: args.theme.clone(),
        compact: args.compact,
        skill_filter: args.skills.clone(),
    };

    print!("{CLEAR_SCREEN}");
    println!("{}", render::render(&resume, &opts));
    Ok(())
}
