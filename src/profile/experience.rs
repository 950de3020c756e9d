//! Work history

use serde::{Deserialize, Serialize};

/// One position on the experience timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub location: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// The timeline, newest first. Rendered in input order.
pub fn work_history() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            company: "Avnet".to_string(),
            role: "System Administrator (x86 / Virtualization)".to_string(),
            location: "Europe & Middle East".to_string(),
            period: "07/2022 – 11/2025".to_string(),
            highlights: vec![
                "VMware infrastructure and Horizon administration".to_string(),
                "Azure environments management".to_string(),
                "Windows Server 2019–2022 deployment".to_string(),
                "Veeam backup and disaster recovery".to_string(),
                "Delivered 10+ successful infrastructure projects".to_string(),
                "Worked with distributed teams (EU, USA, Asia)".to_string(),
            ],
        },
        ExperienceItem {
            company: "Algotech Serbia".to_string(),
            role: "System Administrator".to_string(),
            location: "Serbia".to_string(),
            period: "02/2012 – 08/2021".to_string(),
            highlights: vec![
                "Full enterprise IT infrastructure administration".to_string(),
                "VMware & Hyper-V virtualization".to_string(),
                "Network design (LAN, VLAN, VPN, firewalls)".to_string(),
                "20+ infrastructure projects completed".to_string(),
                "400+ workstations and 200+ servers deployed".to_string(),
            ],
        },
        ExperienceItem {
            company: "Freelance IT Consultant".to_string(),
            role: "IT Infrastructure Consultant".to_string(),
            location: "Remote".to_string(),
            period: "2004 – Present".to_string(),
            highlights: vec![
                "IT infrastructure design and consulting".to_string(),
                "Windows & Linux servers administration".to_string(),
                "Network security and optimization".to_string(),
                "Multi-client environments management".to_string(),
            ],
        },
    ]
}
