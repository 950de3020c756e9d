//! Skills taxonomy: overview categories and the four detail panels
//!
//! Records keep their input order everywhere; duplicates are legal and
//! rendered as distinct entries (the same icon tag is reused across
//! unrelated records on purpose).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::proficiency::Level;

/// A named capability with a 0-10 proficiency score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Decorative icon tag; which glyph it maps to is theme territory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Continuous decorative pulse, independent of the level.
    #[serde(default)]
    pub emphasized: bool,
    /// Rendered indented under its group heading.
    #[serde(default)]
    pub sub_item: bool,
}

impl SkillRecord {
    fn new(name: &str, level: i64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            level: Level::new(level),
            description: Some(description.to_string()),
            icon: None,
            emphasized: false,
            sub_item: false,
        }
    }

    fn icon(mut self, tag: &str) -> Self {
        self.icon = Some(tag.to_string());
        self
    }

    fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    fn sub_item(mut self) -> Self {
        self.sub_item = true;
        self
    }
}

/// A titled group of records inside a grouped listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub skills: Vec<SkillRecord>,
}

/// Listing shape of a detail panel. Flat panels stagger by item index;
/// grouped panels stagger by `(group, item)` position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SkillListing {
    Flat { skills: Vec<SkillRecord> },
    Grouped { groups: Vec<SkillGroup> },
}

impl SkillListing {
    /// All records in input order, flattening groups in group order.
    pub fn records(&self) -> Vec<&SkillRecord> {
        match self {
            SkillListing::Flat { skills } => skills.iter().collect(),
            SkillListing::Grouped { groups } => {
                groups.iter().flat_map(|g| g.skills.iter()).collect()
            }
        }
    }
}

/// Identifier of a detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    Infrastructure,
    Virtualization,
    Networking,
    Backup,
}

impl PanelId {
    pub fn all() -> &'static [PanelId] {
        &[
            PanelId::Infrastructure,
            PanelId::Virtualization,
            PanelId::Networking,
            PanelId::Backup,
        ]
    }

    /// URL/CLI slug for this panel.
    pub fn as_slug(&self) -> &'static str {
        match self {
            PanelId::Infrastructure => "infrastructure",
            PanelId::Virtualization => "virtualization",
            PanelId::Networking => "networking",
            PanelId::Backup => "backup",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "infrastructure" | "systems" => Some(PanelId::Infrastructure),
            "virtualization" | "cloud" => Some(PanelId::Virtualization),
            "networking" | "security" => Some(PanelId::Networking),
            "backup" | "monitoring" => Some(PanelId::Backup),
            _ => None,
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// A detail panel: title, subtitle, and its listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailPanel {
    pub id: PanelId,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub listing: SkillListing,
}

/// An overview card in the Skills section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub bullets: Vec<String>,
    /// Detail panel this card opens.
    pub panel: PanelId,
}

/// The four overview cards.
pub fn overview_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "Infrastructure & Systems".to_string(),
            icon: "server".to_string(),
            bullets: vec![
                "Windows Server (2012–2025): AD, DNS, DHCP, DFS, IIS, WSUS".to_string(),
                "Linux Administration: Debian, Red Hat, CentOS".to_string(),
            ],
            panel: PanelId::Infrastructure,
        },
        SkillCategory {
            title: "Virtualization & Cloud".to_string(),
            icon: "cloud".to_string(),
            bullets: vec![
                "VMware ESXi, vCenter, VMware Horizon".to_string(),
                "Hyper-V".to_string(),
                "Microsoft Azure, Microsoft 365 / Office 365".to_string(),
            ],
            panel: PanelId::Virtualization,
        },
        SkillCategory {
            title: "Networking & Security".to_string(),
            icon: "shield".to_string(),
            bullets: vec![
                "LAN, VLAN, VPN, Firewall".to_string(),
                "MikroTik RouterOS, IPsec".to_string(),
                "System hardening & access management".to_string(),
            ],
            panel: PanelId::Networking,
        },
        SkillCategory {
            title: "Backup & Monitoring".to_string(),
            icon: "database".to_string(),
            bullets: vec![
                "Veeam Backup & Disaster Recovery".to_string(),
                "Microsoft SCOM".to_string(),
            ],
            panel: PanelId::Backup,
        },
    ]
}

/// The four detail panels with their full listings.
pub fn detail_panels() -> Vec<DetailPanel> {
    vec![
        infrastructure_panel(),
        virtualization_panel(),
        networking_panel(),
        backup_panel(),
    ]
}

fn infrastructure_panel() -> DetailPanel {
    DetailPanel {
        id: PanelId::Infrastructure,
        title: "Infrastructure & Systems".to_string(),
        subtitle: "Detailed proficiency breakdown".to_string(),
        icon: Some("server".to_string()),
        listing: SkillListing::Grouped {
            groups: vec![
                SkillGroup {
                    title: "Windows Server 2012–2025".to_string(),
                    icon: Some("server".to_string()),
                    skills: vec![SkillRecord::new(
                        "Windows Server Administration",
                        8,
                        "Core server management and configuration",
                    )],
                },
                SkillGroup {
                    title: "Active Directory Services".to_string(),
                    icon: Some("shield".to_string()),
                    skills: vec![
                        SkillRecord::new(
                            "AD DS (Domain Services)",
                            7,
                            "Main component for managing identities and security",
                        )
                        .sub_item(),
                        SkillRecord::new(
                            "AD CS (Certificate Services)",
                            5,
                            "Manages digital certificates",
                        )
                        .sub_item(),
                        SkillRecord::new(
                            "AD FS (Federation Services)",
                            7,
                            "Enables SSO and identity sharing",
                        )
                        .sub_item(),
                        SkillRecord::new(
                            "AD LDS (Lightweight Directory Services)",
                            7,
                            "Directory service for applications",
                        )
                        .sub_item(),
                        SkillRecord::new(
                            "AD RMS (Rights Management Services)",
                            7,
                            "Manages document access permissions",
                        )
                        .sub_item(),
                    ],
                },
                SkillGroup {
                    title: "Core Infrastructure Services".to_string(),
                    icon: None,
                    skills: vec![
                        SkillRecord::new("DNS", 8, "Critical for locating domain controllers"),
                        SkillRecord::new("DHCP", 9, "Automatic IP address management within AD"),
                        SkillRecord::new("DFS", 7, "Centralized management of shared folders"),
                        SkillRecord::new("IIS", 7, "Web server for hosting websites and services"),
                        SkillRecord::new("WSUS", 7, "Centralized Microsoft update management"),
                    ],
                },
                SkillGroup {
                    title: "Linux Administration".to_string(),
                    icon: None,
                    skills: vec![SkillRecord::new(
                        "Linux Server Management",
                        4,
                        "Installing and securing Linux-based servers (Debian, Red Hat, CentOS)",
                    )],
                },
            ],
        },
    }
}

fn virtualization_panel() -> DetailPanel {
    DetailPanel {
        id: PanelId::Virtualization,
        title: "Virtualization & Cloud".to_string(),
        subtitle: "Enterprise virtualization and cloud platform expertise".to_string(),
        icon: Some("cloud".to_string()),
        listing: SkillListing::Flat {
            skills: vec![
                SkillRecord::new(
                    "VMware ESXi",
                    9,
                    "Type-1 'bare-metal' hypervisor for direct hardware installation and \
                     isolated VM management.",
                )
                .icon("server"),
                SkillRecord::new(
                    "VMware vCenter Server",
                    8,
                    "Centralized management platform for vSphere to monitor and configure \
                     multiple ESXi hosts.",
                )
                .icon("database"),
                SkillRecord::new(
                    "Omnissa Horizon",
                    7,
                    "Virtualization platform for delivering and securing virtual desktops \
                     and apps from centralized locations.",
                )
                .icon("monitor"),
                SkillRecord::new(
                    "Hyper-V",
                    8,
                    "Microsoft's Type-1 hypervisor for server consolidation and running \
                     diverse OSes side-by-side.",
                )
                .icon("server"),
                SkillRecord::new(
                    "Microsoft Azure",
                    7,
                    "Comprehensive cloud platform with over 200 services for computing, AI, \
                     and networking.",
                )
                .icon("cloud"),
                SkillRecord::new(
                    "Microsoft 365",
                    7,
                    "Cloud-based productivity suite (Teams, Exchange, SharePoint) with \
                     integrated cloud services.",
                )
                .icon("cloud"),
            ],
        },
    }
}

fn networking_panel() -> DetailPanel {
    DetailPanel {
        id: PanelId::Networking,
        title: "Networking & Security".to_string(),
        subtitle: "Enterprise networking infrastructure and security expertise".to_string(),
        icon: Some("shield".to_string()),
        listing: SkillListing::Grouped {
            groups: vec![
                SkillGroup {
                    title: "Networking".to_string(),
                    icon: Some("network".to_string()),
                    skills: vec![
                        SkillRecord::new(
                            "LAN",
                            9,
                            "Local network connecting devices within a single geographic area \
                             like an office or data center.",
                        )
                        .icon("network"),
                        SkillRecord::new(
                            "VLAN",
                            9,
                            "Logical segmentation of physical networks to improve security, \
                             performance, and traffic isolation.",
                        )
                        .icon("wifi"),
                        SkillRecord::new(
                            "VPN",
                            7,
                            "Secure, encrypted tunneling services for protecting data privacy \
                             and enabling remote access.",
                        )
                        .icon("lock"),
                    ],
                },
                SkillGroup {
                    title: "Security".to_string(),
                    icon: Some("shield-check".to_string()),
                    skills: vec![
                        SkillRecord::new(
                            "Firewall",
                            7,
                            "Hardware and software systems for monitoring and controlling \
                             traffic based on strict security rules.",
                        )
                        .icon("shield")
                        .emphasized(),
                        SkillRecord::new(
                            "MikroTik RouterOS",
                            7,
                            "Advanced Linux-based OS for RouterBOARD hardware, focusing on \
                             professional routing and firewalling.",
                        )
                        .icon("server"),
                        SkillRecord::new(
                            "IPsec",
                            7,
                            "Protocol suite for securing IP communications through \
                             authentication and encryption of every packet.",
                        )
                        .icon("lock"),
                        SkillRecord::new(
                            "System Hardening",
                            7,
                            "Proactive reduction of the attack surface through configuration, \
                             policy, and vulnerability management.",
                        )
                        .icon("shield-check")
                        .emphasized(),
                    ],
                },
            ],
        },
    }
}

fn backup_panel() -> DetailPanel {
    DetailPanel {
        id: PanelId::Backup,
        title: "Backup & Monitoring".to_string(),
        subtitle: "Enterprise data protection and infrastructure monitoring".to_string(),
        icon: Some("database".to_string()),
        listing: SkillListing::Flat {
            skills: vec![
                SkillRecord::new(
                    "Veeam Backup & Replication",
                    6,
                    "Comprehensive data protection and disaster recovery software for \
                     virtual, physical, and cloud-based workloads, ensuring business \
                     continuity.",
                )
                .icon("hard-drive"),
                SkillRecord::new(
                    "Microsoft SCOM",
                    7,
                    "Enterprise-level monitoring solution within the System Center suite. \
                     Used for proactive detection of performance and availability issues \
                     across servers and applications.",
                )
                .icon("activity")
                .emphasized(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proficiency::Tier;

    #[test]
    fn test_panel_slugs_round_trip() {
        for id in PanelId::all() {
            assert_eq!(PanelId::from_slug(id.as_slug()), Some(*id));
        }
        assert_eq!(PanelId::from_slug("cloud"), Some(PanelId::Virtualization));
        assert_eq!(PanelId::from_slug("nonsense"), None);
    }

    #[test]
    fn test_listing_records_preserve_order() {
        let panel = networking_panel();
        let names: Vec<&str> = panel.listing.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "LAN",
                "VLAN",
                "VPN",
                "Firewall",
                "MikroTik RouterOS",
                "IPsec",
                "System Hardening"
            ]
        );
    }

    #[test]
    fn test_known_levels_classify() {
        let infra = infrastructure_panel();
        let records = infra.listing.records();
        let ad_cs = records.iter().find(|r| r.name.starts_with("AD CS")).unwrap();
        assert_eq!(ad_cs.level.tier(), Tier::Intermediate);
        let linux = records
            .iter()
            .find(|r| r.name == "Linux Server Management")
            .unwrap();
        assert_eq!(linux.level.tier(), Tier::Familiar);
    }

    #[test]
    fn test_emphasized_flags_carried() {
        let panel = networking_panel();
        let records = panel.listing.records();
        assert!(records.iter().find(|r| r.name == "Firewall").unwrap().emphasized);
        assert!(!records.iter().find(|r| r.name == "IPsec").unwrap().emphasized);
    }
}
