//! Access-control core: who may do what to which resource.
//!
//! Authorization is a pure decision over an immutable rule table built at
//! process start. Callers pass the acting [`Subject`](crate::people::Subject)
//! explicitly and gate every mutating or reading operation on the returned
//! [`Decision`].

pub mod domain;
mod resolver;
pub mod rules;

#[cfg(test)]
mod tests;

pub use domain::{Action, ResourceKind, ResourceRef};
pub use resolver::Decision;
pub use rules::{
    standard_rules, PermissionRule, ResourceSelector, RoleClass, RuleEffect, RuleScope,
};

use crate::people::Subject;

/// Immutable rule table with the deny-overrides resolver applied on top.
pub struct AccessPolicy {
    rules: Vec<PermissionRule>,
}

impl AccessPolicy {
    /// The standing company policy.
    pub fn standard() -> Self {
        Self::with_rules(rules::standard_rules())
    }

    pub fn with_rules(rules: Vec<PermissionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[PermissionRule] {
        &self.rules
    }

    /// Decide whether `subject` may perform `action` on `resource`.
    pub fn authorize(&self, subject: &Subject, action: Action, resource: &ResourceRef) -> Decision {
        resolver::resolve(&self.rules, subject, action, resource)
    }

    /// Boolean form of [`AccessPolicy::authorize`] for call sites that gate
    /// on a plain condition.
    pub fn allows(&self, subject: &Subject, action: Action, resource: &ResourceRef) -> bool {
        self.authorize(subject, action, resource).is_allowed()
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
