//! Certifications

use serde::{Deserialize, Serialize};

/// An industry certification card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl Certification {
    fn new(name: &str, issuer: &str) -> Self {
        Self {
            name: name.to_string(),
            issuer: Some(issuer.to_string()),
        }
    }
}

pub fn certifications() -> Vec<Certification> {
    vec![
        Certification::new("VMware vSphere 8 – Install, Configure, Manage", "VMware"),
        Certification::new("MikroTik Certified (MTCNA, MTCRE, MTCSE)", "MikroTik"),
        Certification::new("Cisco CCNA", "Cisco"),
        Certification::new("Microsoft MCSE", "Microsoft"),
        Certification::new("Microsoft Specialist: Hyper-V & System Center", "Microsoft"),
        Certification::new("Extreme Networks WiNG", "Extreme Networks"),
    ]
}
