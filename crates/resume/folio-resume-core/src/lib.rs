//! Résumé record: the static content the site is composed from.
//!
//! The JSON shape follows the common résumé schema subset the page uses
//! (camelCase keys). Parsing validates the few fields the page cannot render
//! without.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use folio_icons_core::IconKind;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("resume json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("basics.name must not be blank")]
    BlankName,
    #[error("basics.email `{0}` is not an email address")]
    InvalidEmail(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub position: String,
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Icon selector key (`dev`, `network`, `satcom`, `mil`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl Work {
    /// Missing type reads as `dev`.
    pub fn experience_icon(&self) -> IconKind {
        IconKind::for_experience(self.r#type.as_deref().unwrap_or("dev"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub study_type: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Skill {
    pub fn icon(&self) -> IconKind {
        IconKind::for_skill(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub basics: Basics,
    #[serde(default)]
    pub work: Vec<Work>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Icon kinds resolved for every card, in record order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeIcons {
    pub work: Vec<IconKind>,
    pub skills: Vec<IconKind>,
}

impl Resume {
    /// Parse and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ResumeError> {
        let resume: Resume = serde_json::from_str(s)?;
        resume.validate()?;
        debug!(
            "resume loaded: {} work, {} education, {} skill groups",
            resume.work.len(),
            resume.education.len(),
            resume.skills.len()
        );
        Ok(resume)
    }

    pub fn validate(&self) -> Result<(), ResumeError> {
        if self.basics.name.trim().is_empty() {
            return Err(ResumeError::BlankName);
        }
        if let Some(email) = &self.basics.email {
            let valid = email
                .split_once('@')
                .map(|(user, domain)| !user.is_empty() && !domain.is_empty())
                .unwrap_or(false);
            if !valid {
                return Err(ResumeError::InvalidEmail(email.clone()));
            }
        }
        Ok(())
    }

    /// `mailto:` link for the contact button, if an email is set.
    pub fn contact_href(&self) -> Option<String> {
        self.basics.email.as_ref().map(|e| format!("mailto:{e}"))
    }

    pub fn icons(&self) -> ResumeIcons {
        ResumeIcons {
            work: self.work.iter().map(Work::experience_icon).collect(),
            skills: self.skills.iter().map(Skill::icon).collect(),
        }
    }

    /// Total keyword badges across skill groups.
    pub fn keyword_count(&self) -> usize {
        self.skills.iter().map(|s| s.keywords.len()).sum()
    }
}
