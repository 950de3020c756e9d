//! Terminal front end
//!
//! Prints the portfolio sections with crossterm styling. The animated mode
//! drives the reveal state machine with a real tick loop, so the terminal
//! shows the same cascade the web page does.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveToColumn, MoveUp, Show},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{stdout, Write};
use std::time::Instant;

use crate::config::Config;
use crate::profile::skills::DetailPanel;
use crate::profile::Profile;
use crate::render::listing::{self, DisplayRow};
use crate::reveal::{BarReveal, PanelReveal};
use crate::types::SectionId;

/// Width of a proficiency bar, in cells.
const BAR_CELLS: usize = 24;

/// Map a configured color name onto a terminal color. Unknown names fall
/// back to white rather than failing the render.
fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "grey" | "gray" => Color::Grey,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        _ => Color::White,
    }
}

/// Draw a bar at a given width percent.
fn bar(width_percent: f32) -> String {
    let filled = ((width_percent / 100.0) * BAR_CELLS as f32).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn print_heading(title: &str) -> Result<()> {
    execute!(
        stdout(),
        Print("\n"),
        SetForegroundColor(Color::White),
        Print(format!("━━ {} ", title)),
        SetForegroundColor(Color::DarkGrey),
        Print("━".repeat(40_usize.saturating_sub(title.len()))),
        ResetColor,
        Print("\n\n"),
    )?;
    Ok(())
}

/// One row of a listing at a given bar width.
fn print_row(row: &DisplayRow, width_percent: f32, config: &Config) -> Result<()> {
    let color = parse_color(config.theme.color_name(row.bucket));
    let indent = if row.sub_item { "    " } else { "  " };
    let pulse = if row.emphasized { "*" } else { " " };
    execute!(
        stdout(),
        Print(format!("{}{:<38}", indent, row.name)),
        SetForegroundColor(color),
        Print(bar(width_percent)),
        ResetColor,
        Print(format!(" {:>3}/10 ", row.level.value())),
        SetForegroundColor(color),
        Print(format!("{:<12}", row.label)),
        ResetColor,
        Print(pulse),
        Print("\n"),
    )?;
    Ok(())
}

fn print_legend() -> Result<()> {
    execute!(
        stdout(),
        SetForegroundColor(Color::DarkGrey),
        Print("  Expert (9-10) · Advanced (7-8) · Intermediate (5-6) · Familiar (0-4)\n"),
        ResetColor,
    )?;
    Ok(())
}

/// Print a detail panel with every bar at its settled width.
pub fn print_panel(panel: &DetailPanel, config: &Config) -> Result<()> {
    print_heading(&panel.title)?;
    println!("  {}\n", panel.subtitle);

    let rows = listing::display_list(&panel.listing, &config.animation);
    let mut current_group: Option<&str> = None;
    for row in &rows {
        if row.group.as_deref() != current_group {
            current_group = row.group.as_deref();
            if let Some(group) = current_group {
                execute!(
                    stdout(),
                    SetForegroundColor(Color::White),
                    Print(format!("  {}\n", group)),
                    ResetColor,
                )?;
            }
        }
        print_row(row, row.width_percent as f32, config)?;
    }
    println!();
    print_legend()?;
    Ok(())
}

/// Animated variant: drives the reveal state machine frame by frame until
/// every bar settles. Closing early is not possible from this code path,
/// so the loop simply runs to the settled state.
pub async fn animate_panel(panel: &DetailPanel, config: &Config) -> Result<()> {
    print_heading(&panel.title)?;
    println!("  {}\n", panel.subtitle);

    // per-row delays come from the display list, so the grouped stagger
    // carries over into the animation
    let rows = listing::display_list(&panel.listing, &config.animation);
    let mut reveal = panel_reveal_from_rows(&rows, config);

    let mut out = stdout();
    execute!(out, Hide)?;

    reveal.set_visible(true, Instant::now());
    let mut first_frame = true;
    loop {
        let now = Instant::now();
        if !first_frame {
            execute!(out, MoveUp(rows.len() as u16), MoveToColumn(0))?;
        }
        first_frame = false;
        for (row, bar_state) in rows.iter().zip(reveal.bars()) {
            print_row(row, bar_state.width_percent(now), config)?;
        }
        out.flush()?;
        if reveal.fully_revealed(now) {
            break;
        }
        tokio::time::sleep(config.animation.frame()).await;
    }

    execute!(out, Show)?;
    println!();
    print_legend()?;
    Ok(())
}

/// Build a panel reveal whose per-bar delays match the display list.
fn panel_reveal_from_rows(rows: &[DisplayRow], config: &Config) -> PanelReveal {
    let bars: Vec<BarReveal> = rows
        .iter()
        .map(|row| BarReveal::new(row.level, row.delay(), config.animation.reveal()))
        .collect();
    PanelReveal::from_bars(bars)
}

fn print_hero(profile: &Profile) -> Result<()> {
    execute!(
        stdout(),
        Print("\n"),
        SetForegroundColor(Color::White),
        Print(format!("{}\n", profile.identity.name)),
        SetForegroundColor(Color::Cyan),
        Print(format!("{}\n", profile.identity.title)),
        ResetColor,
        SetForegroundColor(Color::DarkGrey),
        Print(format!(
            "{} · {}\n\n",
            profile.identity.location, profile.identity.availability
        )),
        ResetColor,
    )?;
    println!("{}\n", profile.identity.summary);
    println!("CV document: {}", profile.identity.cv_file);
    Ok(())
}

fn print_skills_overview(profile: &Profile) -> Result<()> {
    print_heading(SectionId::Skills.title())?;
    for category in &profile.skill_categories {
        execute!(
            stdout(),
            SetForegroundColor(Color::White),
            Print(format!("  {}\n", category.title)),
            ResetColor,
        )?;
        for bullet in &category.bullets {
            println!("    - {}", bullet);
        }
        execute!(
            stdout(),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "    details: my-portfolio skills {}\n\n",
                category.panel.as_slug()
            )),
            ResetColor,
        )?;
    }
    Ok(())
}

fn print_experience(profile: &Profile) -> Result<()> {
    print_heading(SectionId::Experience.title())?;
    for item in &profile.experience {
        execute!(
            stdout(),
            SetForegroundColor(Color::White),
            Print(format!("  {} — {}\n", item.company, item.role)),
            SetForegroundColor(Color::DarkGrey),
            Print(format!("  {} · {}\n", item.location, item.period)),
            ResetColor,
        )?;
        for highlight in &item.highlights {
            println!("    ✓ {}", highlight);
        }
        println!();
    }
    Ok(())
}

fn print_certifications(profile: &Profile) -> Result<()> {
    print_heading(SectionId::Certifications.title())?;
    for cert in &profile.certifications {
        match &cert.issuer {
            Some(issuer) => println!("  🏅 {} ({})", cert.name, issuer),
            None => println!("  🏅 {}", cert.name),
        }
    }
    println!();
    Ok(())
}

fn print_education(profile: &Profile, _config: &Config) -> Result<()> {
    print_heading(SectionId::Education.title())?;
    println!("  {}", profile.education.degree.title);
    println!("  {}\n", profile.education.degree.institution);
    for lang in &profile.education.languages {
        execute!(
            stdout(),
            Print(format!("  {:<12}", lang.language)),
            SetForegroundColor(Color::Green),
            Print(bar(lang.percent as f32)),
            ResetColor,
            Print(format!(" {}\n", lang.level)),
        )?;
    }
    println!();
    Ok(())
}

fn print_contact(profile: &Profile) -> Result<()> {
    print_heading(SectionId::Contact.title())?;
    for channel in &profile.contact.channels {
        match &channel.href {
            Some(href) => println!("  {}: {} <{}>", channel.label, channel.value, href),
            None => println!("  {}: {}", channel.label, channel.value),
        }
    }
    println!("\n  {}", profile.contact.availability_title);
    println!("  {}\n", profile.contact.availability_note);
    Ok(())
}

/// Print one section.
pub fn print_section(profile: &Profile, config: &Config, section: SectionId) -> Result<()> {
    match section {
        SectionId::Hero => print_hero(profile),
        SectionId::Skills => print_skills_overview(profile),
        SectionId::Experience => print_experience(profile),
        SectionId::Certifications => print_certifications(profile),
        SectionId::Education => print_education(profile, config),
        SectionId::Contact => print_contact(profile),
    }
}

/// Print the whole portfolio in page order.
pub fn print_portfolio(profile: &Profile, config: &Config) -> Result<()> {
    for section in SectionId::all() {
        print_section(profile, config, *section)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar(0.0), "░".repeat(BAR_CELLS));
        assert_eq!(bar(100.0), "█".repeat(BAR_CELLS));
        let half = bar(50.0);
        assert_eq!(half.chars().filter(|&c| c == '█').count(), BAR_CELLS / 2);
    }

    #[test]
    fn test_bar_never_overflows() {
        assert_eq!(bar(250.0).chars().count(), BAR_CELLS);
        assert_eq!(bar(250.0), "█".repeat(BAR_CELLS));
    }

    #[test]
    fn test_parse_color_falls_back_to_white() {
        assert_eq!(parse_color("green"), Color::Green);
        assert_eq!(parse_color("no-such-color"), Color::White);
    }
}
