//! Shared people model consumed by both the access and evaluation cores.

mod roles;

pub use roles::{Level, Occupation, Role};

use serde::{Deserialize, Serialize};

/// Identifier wrapper for employees and administrative accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

/// Identifier wrapper for companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub u64);

/// Identifier wrapper for offices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OfficeId(pub u64);

/// Acting principal handed to the access policy.
///
/// Callers always pass the subject explicitly; there is no ambient
/// current-user state anywhere in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: UserId,
    /// `None` only for super admins, which act across companies.
    pub company_id: Option<CompanyId>,
    pub role: Role,
    /// Administrative accounts live in a separate principal space from
    /// regular employees and get the admin rule set.
    pub admin_account: bool,
    /// Derived capability: the subject currently heads at least one office.
    /// Resolved by the directory, never stored as a role value.
    pub office_head: bool,
}

impl Subject {
    pub fn employee(id: UserId, company_id: CompanyId) -> Self {
        Self {
            id,
            company_id: Some(company_id),
            role: Role::Normal,
            admin_account: false,
            office_head: false,
        }
    }

    pub fn admin(id: UserId, company_id: CompanyId) -> Self {
        Self {
            id,
            company_id: Some(company_id),
            role: Role::Admin,
            admin_account: true,
            office_head: false,
        }
    }

    pub fn super_admin(id: UserId) -> Self {
        Self {
            id,
            company_id: None,
            role: Role::SuperAdmin,
            admin_account: true,
            office_head: false,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn heading_office(mut self) -> Self {
        self.office_head = true;
        self
    }
}

/// Directory collaborator resolving principals and office membership.
pub trait UserDirectory: Send + Sync {
    /// Resolve a principal id to its role, company, and office-headship.
    fn subject(&self, id: UserId) -> Option<Subject>;

    /// The office the user currently belongs to, if any.
    fn office_of(&self, id: UserId) -> Option<OfficeId>;
}
