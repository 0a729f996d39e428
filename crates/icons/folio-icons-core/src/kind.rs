//! Icon selection: label → kind.

use serde::{Deserialize, Serialize};

/// Which label table a kind was chosen from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFamily {
    /// Work history entries, selected by the job `type`.
    Experience,
    /// Skill groups, selected by the group name.
    Skill,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Dev,
    Network,
    Satcom,
    Defense,
    Software,
    Networking,
    Leadership,
}

impl IconKind {
    pub const ALL: [IconKind; 7] = [
        IconKind::Dev,
        IconKind::Network,
        IconKind::Satcom,
        IconKind::Defense,
        IconKind::Software,
        IconKind::Networking,
        IconKind::Leadership,
    ];

    /// Exact match on the job type; unknown or empty types fall back to `Dev`.
    pub fn for_experience(job_type: &str) -> Self {
        match job_type {
            "network" => IconKind::Network,
            "satcom" => IconKind::Satcom,
            "mil" => IconKind::Defense,
            _ => IconKind::Dev,
        }
    }

    /// Case-sensitive substring match on the skill group name, first hit wins.
    pub fn for_skill(category: &str) -> Self {
        if category.contains("Software") {
            IconKind::Software
        } else if category.contains("Networking") {
            IconKind::Networking
        } else {
            IconKind::Leadership
        }
    }

    /// Select from the table for `family`.
    pub fn select(family: IconFamily, label: &str) -> Self {
        match family {
            IconFamily::Experience => Self::for_experience(label),
            IconFamily::Skill => Self::for_skill(label),
        }
    }

    pub fn family(self) -> IconFamily {
        match self {
            IconKind::Dev | IconKind::Network | IconKind::Satcom | IconKind::Defense => {
                IconFamily::Experience
            }
            IconKind::Software | IconKind::Networking | IconKind::Leadership => IconFamily::Skill,
        }
    }

    /// Stable lowercase name, same as the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            IconKind::Dev => "dev",
            IconKind::Network => "network",
            IconKind::Satcom => "satcom",
            IconKind::Defense => "defense",
            IconKind::Software => "software",
            IconKind::Networking => "networking",
            IconKind::Leadership => "leadership",
        }
    }

    /// Whether hover emphasis changes this icon's motion.
    pub fn reacts_to_emphasis(self) -> bool {
        self.family() == IconFamily::Skill
    }
}
