use super::domain::{Action, ResourceKind, ResourceRef};
use crate::people::{Role, Subject};

/// Which partition of principals a rule binds to.
///
/// The base classes are mutually exclusive: a super admin matches only
/// `SuperAdmin` no matter what other flags the subject carries, an
/// administrative account matches only `CompanyAdmin`, and everyone else is
/// an `Employee`. `OfficeHead` layers extra rules onto employee subjects
/// that currently head an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleClass {
    SuperAdmin,
    CompanyAdmin,
    Employee,
    OfficeHead,
}

impl RoleClass {
    pub fn binds(self, subject: &Subject) -> bool {
        match self {
            Self::SuperAdmin => subject.role == Role::SuperAdmin,
            Self::CompanyAdmin => subject.role != Role::SuperAdmin && subject.admin_account,
            Self::Employee => subject.role != Role::SuperAdmin && !subject.admin_account,
            Self::OfficeHead => Self::Employee.binds(subject) && subject.office_head,
        }
    }
}

/// Whether a matching rule permits or forbids the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    Grant,
    Deny,
}

/// Resource families a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceSelector {
    All,
    Only(&'static [ResourceKind]),
}

impl ResourceSelector {
    pub fn covers(self, kind: ResourceKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(kinds) => kinds.contains(&kind),
        }
    }
}

/// Instance predicate attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// No restriction on the target instance.
    Global,
    /// Subject and resource belong to the same company.
    SameCompany,
    /// Same company, and the subject owns the resource.
    SameCompanyAndOwner,
    /// The resource is the subject's own record.
    OwnRecord,
}

impl RuleScope {
    pub fn permits(self, subject: &Subject, resource: &ResourceRef) -> bool {
        match self {
            Self::Global => true,
            Self::SameCompany => subject.company_id == Some(resource.company_id),
            Self::SameCompanyAndOwner => {
                subject.company_id == Some(resource.company_id)
                    && resource.owner_id == Some(subject.id)
            }
            Self::OwnRecord => resource.owner_id == Some(subject.id),
        }
    }
}

/// One grant or deny entry in the permission table.
#[derive(Debug, Clone, Copy)]
pub struct PermissionRule {
    pub binds: RoleClass,
    pub effect: RuleEffect,
    pub actions: &'static [Action],
    pub resources: ResourceSelector,
    pub scope: RuleScope,
}

impl PermissionRule {
    pub(crate) fn matches(&self, subject: &Subject, action: Action, resource: &ResourceRef) -> bool {
        self.binds.binds(subject)
            && self.covers_action(action)
            && self.resources.covers(resource.kind)
            && self.scope.permits(subject, resource)
    }

    /// A rule granting `manage` covers every requested action.
    pub(crate) fn covers_action(&self, requested: Action) -> bool {
        self.actions
            .iter()
            .any(|action| *action == Action::Manage || *action == requested)
    }
}

const COMPANY_MANAGED: &[ResourceKind] = &[
    ResourceKind::AdminAccount,
    ResourceKind::Employee,
    ResourceKind::Office,
    ResourceKind::Project,
    ResourceKind::Client,
    ResourceKind::RegionalHoliday,
    ResourceKind::Allocation,
    ResourceKind::Evaluation,
    ResourceKind::Questionnaire,
    ResourceKind::Skill,
];

const COMPANY_CREATABLE: &[ResourceKind] = &[
    ResourceKind::AdminAccount,
    ResourceKind::Employee,
    ResourceKind::Office,
    ResourceKind::Project,
    ResourceKind::Client,
    ResourceKind::Allocation,
    ResourceKind::Evaluation,
    ResourceKind::Questionnaire,
    ResourceKind::RegionalHoliday,
    ResourceKind::Skill,
];

/// The standing permission table.
///
/// Deny entries dominate grants within their match, so declaration order
/// carries no meaning. The admin create grant is deliberately unscoped: the
/// observed behavior lets admins create records outside their own company
/// while managing only inside it.
pub fn standard_rules() -> Vec<PermissionRule> {
    vec![
        PermissionRule {
            binds: RoleClass::SuperAdmin,
            effect: RuleEffect::Grant,
            actions: &[Action::Manage],
            resources: ResourceSelector::All,
            scope: RuleScope::Global,
        },
        PermissionRule {
            binds: RoleClass::CompanyAdmin,
            effect: RuleEffect::Grant,
            actions: &[Action::Manage],
            resources: ResourceSelector::Only(COMPANY_MANAGED),
            scope: RuleScope::SameCompany,
        },
        PermissionRule {
            binds: RoleClass::CompanyAdmin,
            effect: RuleEffect::Grant,
            actions: &[Action::Read],
            resources: ResourceSelector::Only(&[ResourceKind::Punch]),
            scope: RuleScope::SameCompany,
        },
        PermissionRule {
            binds: RoleClass::CompanyAdmin,
            effect: RuleEffect::Grant,
            actions: &[Action::Create],
            resources: ResourceSelector::Only(COMPANY_CREATABLE),
            scope: RuleScope::Global,
        },
        PermissionRule {
            binds: RoleClass::CompanyAdmin,
            effect: RuleEffect::Deny,
            actions: &[Action::Destroy],
            resources: ResourceSelector::Only(&[ResourceKind::Employee, ResourceKind::Project]),
            scope: RuleScope::Global,
        },
        PermissionRule {
            binds: RoleClass::Employee,
            effect: RuleEffect::Grant,
            actions: &[Action::Manage],
            resources: ResourceSelector::Only(&[ResourceKind::Punch]),
            scope: RuleScope::SameCompanyAndOwner,
        },
        PermissionRule {
            binds: RoleClass::Employee,
            effect: RuleEffect::Grant,
            actions: &[Action::Read],
            resources: ResourceSelector::Only(&[ResourceKind::Employee]),
            scope: RuleScope::SameCompany,
        },
        PermissionRule {
            binds: RoleClass::Employee,
            effect: RuleEffect::Grant,
            actions: &[Action::Edit, Action::Update],
            resources: ResourceSelector::Only(&[ResourceKind::Employee]),
            scope: RuleScope::OwnRecord,
        },
        PermissionRule {
            binds: RoleClass::OfficeHead,
            effect: RuleEffect::Grant,
            actions: &[Action::Manage],
            resources: ResourceSelector::Only(&[ResourceKind::Evaluation]),
            scope: RuleScope::SameCompany,
        },
        PermissionRule {
            binds: RoleClass::OfficeHead,
            effect: RuleEffect::Deny,
            actions: &[Action::Destroy, Action::Edit, Action::Update],
            resources: ResourceSelector::Only(&[ResourceKind::Evaluation]),
            scope: RuleScope::Global,
        },
    ]
}
