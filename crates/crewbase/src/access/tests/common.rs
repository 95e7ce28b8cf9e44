use crate::access::{AccessPolicy, ResourceKind, ResourceRef};
use crate::people::{CompanyId, Subject, UserId};

pub(super) fn policy() -> AccessPolicy {
    AccessPolicy::standard()
}

pub(super) fn company() -> CompanyId {
    CompanyId(1)
}

pub(super) fn other_company() -> CompanyId {
    CompanyId(2)
}

pub(super) fn super_admin() -> Subject {
    Subject::super_admin(UserId(1))
}

pub(super) fn admin() -> Subject {
    Subject::admin(UserId(10), company())
}

pub(super) fn employee() -> Subject {
    Subject::employee(UserId(7), company())
}

pub(super) fn office_head() -> Subject {
    Subject::employee(UserId(8), company()).heading_office()
}

pub(super) fn resource(kind: ResourceKind) -> ResourceRef {
    ResourceRef::new(kind, company())
}

pub(super) fn foreign_resource(kind: ResourceKind) -> ResourceRef {
    ResourceRef::new(kind, other_company())
}
