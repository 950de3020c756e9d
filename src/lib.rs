//! My Portfolio - Personal CV Library
//!
//! A single-page portfolio/CV for an IT infrastructure professional:
//! - Compiled-in profile data (skills taxonomy, work history, certifications)
//! - Proficiency classifier mapping 0-10 scores to tiers and colors
//! - Reveal state machine with staggered, replayable bar animations
//! - Terminal and single-page HTML renderers sharing one display list
//! - Simulated contact form with an explicit failure path
//!
//! # Example
//!
//! ```
//! use my_portfolio::proficiency::Level;
//!
//! let level = Level::new(9);
//! assert_eq!(level.tier().label(), "Expert");
//! assert_eq!(level.width_percent(), 90);
//! ```

// Core modules (order matters for cross-module dependencies)
pub mod types;
pub mod proficiency;
pub mod reveal;
pub mod profile;
pub mod config;
pub mod contact;
pub mod render;
pub mod server;
pub mod cli;

// Re-export commonly used types for convenience
pub use proficiency::{ColorBucket, Level, Tier};

pub use reveal::{BarReveal, PanelReveal, RevealPhase, StaggerSchedule};

pub use profile::{Profile, SkillRecord};

pub use config::Config;

pub use contact::{ContactError, ContactMessage, ContactReceipt};

pub use render::{display_list, DisplayRow};

pub use server::{start as start_server, ServerState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Personal CV Library", NAME, VERSION)
}
