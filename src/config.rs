//! Configuration management
//!
//! Manages presentation configuration: animation timing, theme colors,
//! contact-form simulation settings, server defaults, and the CV asset
//! path. Decorative constants (which color a tier gets, which delay a bar
//! uses) live here, outside the domain logic.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::proficiency::ColorBucket;
use crate::reveal;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Reveal animation timing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Tier colors for the terminal and the web page
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Contact-form simulation settings
    #[serde(default)]
    pub contact: ContactConfig,
    /// Web server defaults
    #[serde(default)]
    pub server: ServerConfig,
    /// Static assets
    #[serde(default)]
    pub assets: AssetConfig,
}

/// Timing of the proficiency-bar reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Duration of one bar's transition, in milliseconds
    #[serde(default = "default_reveal_ms")]
    pub reveal_ms: u64,
    /// Per-index stagger between bars, in milliseconds
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
    /// Frame interval of the terminal animation loop, in milliseconds
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

fn default_reveal_ms() -> u64 {
    reveal::DEFAULT_REVEAL.as_millis() as u64
}

fn default_stagger_ms() -> u64 {
    reveal::DEFAULT_STAGGER.as_millis() as u64
}

fn default_frame_ms() -> u64 {
    30
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_ms: default_reveal_ms(),
            stagger_ms: default_stagger_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl AnimationConfig {
    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Colors per tier bucket. Terminal names feed crossterm, CSS classes feed
/// the web page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_highest_color")]
    pub highest: String,
    #[serde(default = "default_mid_high_color")]
    pub mid_high: String,
    #[serde(default = "default_mid_color")]
    pub mid: String,
    #[serde(default = "default_lowest_color")]
    pub lowest: String,
}

fn default_highest_color() -> String {
    "green".to_string()
}

fn default_mid_high_color() -> String {
    "cyan".to_string()
}

fn default_mid_color() -> String {
    "grey".to_string()
}

fn default_lowest_color() -> String {
    "dark_grey".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            highest: default_highest_color(),
            mid_high: default_mid_high_color(),
            mid: default_mid_color(),
            lowest: default_lowest_color(),
        }
    }
}

impl ThemeConfig {
    /// Configured color name for a bucket.
    pub fn color_name(&self, bucket: ColorBucket) -> &str {
        match bucket {
            ColorBucket::Highest => &self.highest,
            ColorBucket::MidHigh => &self.mid_high,
            ColorBucket::Mid => &self.mid,
            ColorBucket::Lowest => &self.lowest,
        }
    }

    /// CSS class for a bucket, used by the web renderer.
    pub fn css_class(bucket: ColorBucket) -> &'static str {
        match bucket {
            ColorBucket::Highest => "bar-highest",
            ColorBucket::MidHigh => "bar-mid-high",
            ColorBucket::Mid => "bar-mid",
            ColorBucket::Lowest => "bar-lowest",
        }
    }
}

/// Contact-form simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Fixed delay before the simulated submission reports success
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
    /// When false, submissions fail with a retryable "unavailable" error
    #[serde(default = "default_true")]
    pub outbox_enabled: bool,
    /// Maximum accepted message length
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_max_message_len() -> usize {
    2000
}

fn default_true() -> bool {
    true
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_delay_ms(),
            outbox_enabled: default_true(),
            max_message_len: default_max_message_len(),
        }
    }
}

/// Web server defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Static asset locations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetConfig {
    /// Path to the downloadable CV document. Relative paths resolve
    /// against the current working directory.
    #[serde(default)]
    pub cv_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            let config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path.parent().context("Config path has no parent")?;

        std::fs::create_dir_all(parent).context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "my-portfolio", "my-portfolio")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Show current configuration
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Animation:");
    println!("  reveal:   {} ms", config.animation.reveal_ms);
    println!("  stagger:  {} ms", config.animation.stagger_ms);
    println!("  frame:    {} ms", config.animation.frame_ms);
    println!("Theme:");
    println!("  highest:  {}", config.theme.highest);
    println!("  mid-high: {}", config.theme.mid_high);
    println!("  mid:      {}", config.theme.mid);
    println!("  lowest:   {}", config.theme.lowest);
    println!("Contact:");
    println!("  delay:    {} ms", config.contact.simulated_delay_ms);
    println!(
        "  outbox:   {}",
        if config.contact.outbox_enabled { "enabled" } else { "disabled" }
    );
    println!("  max len:  {} chars", config.contact.max_message_len);
    println!("Server:");
    println!("  bind:     {}:{}", config.server.host, config.server.port);
    match &config.assets.cv_path {
        Some(path) => println!("CV asset:   {}", path.display()),
        None => println!("CV asset:   not configured"),
    }

    Ok(())
}

/// Set the per-index stagger
pub fn set_stagger_ms(ms: u64) -> Result<()> {
    let mut config = Config::load()?;
    config.animation.stagger_ms = ms;
    config.save()?;
    println!("Stagger set to {} ms", ms);
    Ok(())
}

/// Set the bar transition duration
pub fn set_reveal_ms(ms: u64) -> Result<()> {
    let mut config = Config::load()?;
    config.animation.reveal_ms = ms;
    config.save()?;
    println!("Reveal duration set to {} ms", ms);
    Ok(())
}

/// Set the CV document path
pub fn set_cv_path(path: &str) -> Result<()> {
    let mut config = Config::load()?;
    let path = PathBuf::from(path);
    if !path.exists() {
        anyhow::bail!("CV file does not exist: {}", path.display());
    }
    config.assets.cv_path = Some(path);
    config.save()?;
    println!("CV path updated");
    Ok(())
}

/// Enable or disable the simulated outbox
pub fn set_outbox(enabled: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.contact.outbox_enabled = enabled;
    config.save()?;
    println!("Outbox {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

/// Reset configuration to defaults
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_design_timing() {
        let config = Config::default();
        assert_eq!(config.animation.reveal(), Duration::from_millis(700));
        assert_eq!(config.animation.stagger(), Duration::from_millis(100));
        assert_eq!(config.contact.simulated_delay_ms, 1000);
        assert!(config.contact.outbox_enabled);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.animation.stagger_ms, config.animation.stagger_ms);
        assert_eq!(parsed.theme.highest, config.theme.highest);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[animation]\nstagger_ms = 250\n").unwrap();
        assert_eq!(parsed.animation.stagger_ms, 250);
        assert_eq!(parsed.animation.reveal_ms, 700);
        assert_eq!(parsed.server.port, 8080);
    }

    #[test]
    fn test_css_class_per_bucket() {
        assert_eq!(ThemeConfig::css_class(ColorBucket::Highest), "bar-highest");
        assert_eq!(ThemeConfig::css_class(ColorBucket::Lowest), "bar-lowest");
    }
}
