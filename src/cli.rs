//! CLI interface for my-portfolio

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::config::{self, Config};
use crate::contact::{self, ContactMessage};
use crate::profile;
use crate::profile::skills::PanelId;
use crate::render::terminal;
use crate::server;
use crate::types::SectionId;

#[derive(Parser)]
#[command(name = "my-portfolio")]
#[command(about = "Personal portfolio/CV in the terminal or served as a single page", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the portfolio (or one section) to the terminal
    Show {
        /// Section to print: hero, skills, experience, certifications,
        /// education, contact (default: all)
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Print a skills detail panel with proficiency bars
    Skills {
        /// Panel: infrastructure, virtualization, networking, backup
        panel: String,
        /// Animate the reveal instead of printing settled bars
        #[arg(short, long)]
        animate: bool,
    },
    /// Send a message through the (simulated) contact form
    Contact {
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
        /// The message body
        #[arg(short, long)]
        message: String,
    },
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },
    /// Configure presentation settings
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the per-bar stagger in milliseconds
        #[arg(long)]
        set_stagger_ms: Option<u64>,
        /// Set the bar transition duration in milliseconds
        #[arg(long)]
        set_reveal_ms: Option<u64>,
        /// Set the path of the downloadable CV document
        #[arg(long)]
        set_cv_path: Option<String>,
        /// Enable or disable the simulated outbox
        #[arg(long)]
        set_outbox: Option<bool>,
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Show { section: None }) => {
            let config = Config::load()?;
            terminal::print_portfolio(profile::builtin(), &config)?;
        }
        Some(Commands::Show { section: Some(name) }) => {
            let Some(section) = SectionId::from_anchor(&name) else {
                anyhow::bail!(
                    "Unknown section '{}'. Available: {}",
                    name,
                    SectionId::all()
                        .iter()
                        .map(|s| s.as_anchor())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            let config = Config::load()?;
            terminal::print_section(profile::builtin(), &config, section)?;
        }
        Some(Commands::Skills { panel, animate }) => {
            let Some(id) = PanelId::from_slug(&panel) else {
                anyhow::bail!(
                    "Unknown panel '{}'. Available: {}",
                    panel,
                    PanelId::all()
                        .iter()
                        .map(|p| p.as_slug())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            let config = Config::load()?;
            let detail = profile::builtin()
                .panel(id)
                .ok_or_else(|| anyhow::anyhow!("panel missing from profile"))?;
            if animate {
                terminal::animate_panel(detail, &config).await?;
            } else {
                terminal::print_panel(detail, &config)?;
            }
        }
        Some(Commands::Contact { name, email, message }) => {
            let config = Config::load()?;
            let msg = ContactMessage { name, email, message };

            let spinner = sending_spinner();
            let result = contact::submit(&msg, &config.contact).await;
            spinner.finish_and_clear();

            match result {
                Ok(receipt) => println!("✅ {}", receipt.confirmation),
                Err(e) if e.is_transient() => {
                    println!("⚠ {}", e);
                    anyhow::bail!("submission failed, try again later");
                }
                Err(e) => {
                    println!("❌ {}", e);
                    anyhow::bail!("submission rejected, fix the message and retry");
                }
            }
        }
        Some(Commands::Serve { port, host }) => {
            let config = Config::load()?;
            let host = host.unwrap_or(config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            server::start(&host, port).await?;
        }
        Some(Commands::Config {
            show,
            set_stagger_ms,
            set_reveal_ms,
            set_cv_path,
            set_outbox,
            reset,
        }) => {
            if reset {
                config::reset_config()?;
                return Ok(());
            }
            let mut changed = false;
            if let Some(ms) = set_stagger_ms {
                config::set_stagger_ms(ms)?;
                changed = true;
            }
            if let Some(ms) = set_reveal_ms {
                config::set_reveal_ms(ms)?;
                changed = true;
            }
            if let Some(path) = set_cv_path {
                config::set_cv_path(&path)?;
                changed = true;
            }
            if let Some(enabled) = set_outbox {
                config::set_outbox(enabled)?;
                changed = true;
            }
            if show || !changed {
                config::show_config()?;
            }
        }
    }

    Ok(())
}

/// Spinner shown while the simulated submission waits out its delay.
fn sending_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.dim} {msg}")
            .unwrap(),
    );
    pb.set_message("Sending message...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
