use serde::{Deserialize, Serialize};

/// Stored role ladder for principals, ordered by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Normal,
    Evaluator,
    Admin,
    SuperAdmin,
}

impl Role {
    pub const fn ordered() -> [Self; 4] {
        [Self::Normal, Self::Evaluator, Self::Admin, Self::SuperAdmin]
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Evaluator => 1,
            Self::Admin => 2,
            Self::SuperAdmin => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Evaluator => "evaluator",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Whether the role carries company administration capabilities.
    pub const fn has_admin_access(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

/// Broad occupation split used across the people catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Administrative,
    Engineer,
}

impl Occupation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Administrative => "administrative",
            Self::Engineer => "engineer",
        }
    }
}

/// Seniority ladder for engineering staff, ordered from junior to senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Trainee,
    Junior,
    JuniorPlus,
    Mid,
    MidPlus,
    Senior,
    SeniorPlus,
}

impl Level {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trainee => "trainee",
            Self::Junior => "junior",
            Self::JuniorPlus => "junior_plus",
            Self::Mid => "mid",
            Self::MidPlus => "mid_plus",
            Self::Senior => "senior",
            Self::SeniorPlus => "senior_plus",
        }
    }
}
