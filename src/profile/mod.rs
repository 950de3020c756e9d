//! Portfolio content model
//!
//! Immutable data compiled into the binary: who the CV belongs to, the
//! skills taxonomy, work history, certifications, education, and contact
//! details. Everything is serde-serializable so the JSON API and the
//! renderers share one set of types. There is no runtime creation,
//! mutation, or deletion of records.

pub mod certifications;
pub mod contact_info;
pub mod education;
pub mod experience;
pub mod skills;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use certifications::Certification;
pub use contact_info::{ContactChannel, ContactInfo};
pub use education::{Degree, Education, LanguageSkill};
pub use experience::ExperienceItem;
pub use skills::{DetailPanel, PanelId, SkillCategory, SkillGroup, SkillListing, SkillRecord};

/// Hero block: identity and headline content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub location: String,
    pub availability: String,
    pub summary: String,
    /// File name of the downloadable CV document.
    pub cv_file: String,
}

/// The whole portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    /// Overview cards shown in the Skills section.
    pub skill_categories: Vec<SkillCategory>,
    /// Detail panels opened from the overview cards.
    pub detail_panels: Vec<DetailPanel>,
    pub experience: Vec<ExperienceItem>,
    pub certifications: Vec<Certification>,
    pub education: Education,
    pub contact: ContactInfo,
}

impl Profile {
    /// Look up a detail panel by its id.
    pub fn panel(&self, id: PanelId) -> Option<&DetailPanel> {
        self.detail_panels.iter().find(|p| p.id == id)
    }
}

static BUILTIN: Lazy<Profile> = Lazy::new(|| Profile {
    identity: Identity {
        name: "Milos Avramovic".to_string(),
        title: "Senior System Administrator | IT Infrastructure Consultant".to_string(),
        location: "Valencia, Spain".to_string(),
        availability: "Available for International Work".to_string(),
        summary: "Senior System Administrator and IT Infrastructure Consultant with over \
                  14 years of experience in designing, managing, and maintaining enterprise \
                  IT environments. Extensive expertise with Windows Server, VMware, Hyper-V, \
                  Azure, networking, and virtualization. Proven track record of delivering \
                  complex infrastructure projects for international teams across Europe, \
                  the USA, and Asia."
            .to_string(),
        cv_file: "CV_Milos_Avramovic_Eng.pdf".to_string(),
    },
    skill_categories: skills::overview_categories(),
    detail_panels: skills::detail_panels(),
    experience: experience::work_history(),
    certifications: certifications::certifications(),
    education: education::education(),
    contact: contact_info::contact_info(),
});

/// The compiled-in profile.
pub fn builtin() -> &'static Profile {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_has_all_panels() {
        let profile = builtin();
        assert_eq!(profile.detail_panels.len(), 4);
        for id in PanelId::all() {
            assert!(profile.panel(*id).is_some(), "missing panel {:?}", id);
        }
    }

    #[test]
    fn test_builtin_profile_sections_populated() {
        let profile = builtin();
        assert_eq!(profile.skill_categories.len(), 4);
        assert_eq!(profile.experience.len(), 3);
        assert_eq!(profile.certifications.len(), 6);
        assert_eq!(profile.education.languages.len(), 3);
        assert!(!profile.contact.channels.is_empty());
    }

    #[test]
    fn test_profile_serializes() {
        let json = serde_json::to_string(builtin()).unwrap();
        assert!(json.contains("Milos Avramovic"));
        assert!(json.contains("VMware ESXi"));
    }
}
