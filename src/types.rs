//! Shared types used across modules
//!
//! This module contains types that are used by multiple modules
//! to avoid circular dependencies.

use serde::{Deserialize, Serialize};

/// A top-level section of the single page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Skills,
    Experience,
    Certifications,
    Education,
    Contact,
}

impl SectionId {
    /// Sections in page order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Hero,
            SectionId::Skills,
            SectionId::Experience,
            SectionId::Certifications,
            SectionId::Education,
            SectionId::Contact,
        ]
    }

    /// Sections listed in the header nav (the hero has no nav entry).
    pub fn nav() -> &'static [SectionId] {
        &[
            SectionId::Skills,
            SectionId::Experience,
            SectionId::Certifications,
            SectionId::Education,
            SectionId::Contact,
        ]
    }

    /// Anchor id used for `#fragment` navigation.
    pub fn as_anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Certifications => "certifications",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Parse from an anchor/CLI string.
    pub fn from_anchor(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hero" => Some(SectionId::Hero),
            "skills" => Some(SectionId::Skills),
            "experience" => Some(SectionId::Experience),
            "certifications" => Some(SectionId::Certifications),
            "education" => Some(SectionId::Education),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    /// Heading shown for this section.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Hero => "About",
            SectionId::Skills => "Technical Skills",
            SectionId::Experience => "Professional Experience",
            SectionId::Certifications => "Certifications",
            SectionId::Education => "Education & Languages",
            SectionId::Contact => "Get in Touch",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_round_trip() {
        for section in SectionId::all() {
            assert_eq!(SectionId::from_anchor(section.as_anchor()), Some(*section));
        }
        assert_eq!(SectionId::from_anchor("SKILLS"), Some(SectionId::Skills));
        assert_eq!(SectionId::from_anchor("downloads"), None);
    }

    #[test]
    fn test_nav_excludes_hero() {
        assert!(!SectionId::nav().contains(&SectionId::Hero));
        assert_eq!(SectionId::nav().len(), SectionId::all().len() - 1);
    }
}
