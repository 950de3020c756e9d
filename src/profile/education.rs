//! Education and languages

use serde::{Deserialize, Serialize};

/// A completed degree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Degree {
    pub title: String,
    pub institution: String,
}

/// A spoken language with a 0-100 progress value. Language bars take their
/// width directly in percent; the proficiency classifier does not apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: Degree,
    pub languages: Vec<LanguageSkill>,
}

pub fn education() -> Education {
    Education {
        degree: Degree {
            title: "Bachelor of Economics – Computer Engineering".to_string(),
            institution: "Megatrend University, Serbia".to_string(),
        },
        languages: vec![
            LanguageSkill {
                language: "Serbian".to_string(),
                level: "Native".to_string(),
                percent: 100,
            },
            LanguageSkill {
                language: "English".to_string(),
                level: "Advanced".to_string(),
                percent: 90,
            },
            LanguageSkill {
                language: "Spanish".to_string(),
                level: "Basic".to_string(),
                percent: 30,
            },
        ],
    }
}
