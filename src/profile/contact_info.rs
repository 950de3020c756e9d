//! Contact details shown next to the form

use serde::{Deserialize, Serialize};

/// One contact row: mailto/profile links are opaque strings, never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub channels: Vec<ContactChannel>,
    pub availability_title: String,
    pub availability_note: String,
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        channels: vec![
            ContactChannel {
                label: "Email".to_string(),
                value: "milos.avramovic@live.com".to_string(),
                href: Some("mailto:milos.avramovic@live.com".to_string()),
                icon: "mail".to_string(),
            },
            ContactChannel {
                label: "LinkedIn".to_string(),
                value: "LinkedIn Profile".to_string(),
                href: Some("https://www.linkedin.com/in/milos-avramovic-5424ab30".to_string()),
                icon: "linkedin".to_string(),
            },
            ContactChannel {
                label: "Location".to_string(),
                value: "Valencia, Spain".to_string(),
                href: None,
                icon: "map-pin".to_string(),
            },
        ],
        availability_title: "Available for Work".to_string(),
        availability_note: "Open to full-time positions, contract work, and consulting \
                            opportunities. Available for remote work and relocation within \
                            Europe."
            .to_string(),
    }
}
