use serde::{Deserialize, Serialize};

use super::domain::{Action, ResourceRef};
use super::rules::{PermissionRule, RuleEffect};
use crate::people::Subject;

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allowed,
    Denied,
}

impl Decision {
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Denied => "denied",
        }
    }
}

/// Deny-overrides resolution over an immutable rule table.
///
/// Any matching deny defeats every matching grant for the same request; a
/// request matched by no grant is denied. Resource kinds no rule covers fall
/// through to the same default denial.
pub(crate) fn resolve(
    rules: &[PermissionRule],
    subject: &Subject,
    action: Action,
    resource: &ResourceRef,
) -> Decision {
    let mut granted = false;

    for rule in rules {
        if !rule.matches(subject, action, resource) {
            continue;
        }
        match rule.effect {
            RuleEffect::Deny => return Decision::Denied,
            RuleEffect::Grant => granted = true,
        }
    }

    if granted {
        Decision::Allowed
    } else {
        Decision::Denied
    }
}
