use serde::{Deserialize, Serialize};

use crate::people::{CompanyId, UserId};

/// Operations a subject can request against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Manage,
    Create,
    Read,
    Update,
    Edit,
    Destroy,
}

impl Action {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Manage,
            Self::Create,
            Self::Read,
            Self::Update,
            Self::Edit,
            Self::Destroy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Manage => "manage",
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Edit => "edit",
            Self::Destroy => "destroy",
        }
    }
}

/// Resource families under access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    AdminAccount,
    Employee,
    Office,
    Project,
    Client,
    RegionalHoliday,
    Allocation,
    Evaluation,
    Questionnaire,
    Skill,
    Punch,
}

impl ResourceKind {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::AdminAccount,
            Self::Employee,
            Self::Office,
            Self::Project,
            Self::Client,
            Self::RegionalHoliday,
            Self::Allocation,
            Self::Evaluation,
            Self::Questionnaire,
            Self::Skill,
            Self::Punch,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AdminAccount => "admin_account",
            Self::Employee => "employee",
            Self::Office => "office",
            Self::Project => "project",
            Self::Client => "client",
            Self::RegionalHoliday => "regional_holiday",
            Self::Allocation => "allocation",
            Self::Evaluation => "evaluation",
            Self::Questionnaire => "questionnaire",
            Self::Skill => "skill",
            Self::Punch => "punch",
        }
    }
}

/// Typed, company-scoped reference to the object being acted upon.
///
/// For an `Employee` resource the owner is the employee's own user id; for a
/// `Punch` it is the user who punched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub company_id: CompanyId,
    pub owner_id: Option<UserId>,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, company_id: CompanyId) -> Self {
        Self {
            kind,
            company_id,
            owner_id: None,
        }
    }

    #[must_use]
    pub fn owned_by(mut self, owner: UserId) -> Self {
        self.owner_id = Some(owner);
        self
    }
}
