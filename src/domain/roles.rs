/// Role and permission checks, kept as flat string sets to match the role
/// labels stored on member records.

pub const ROLE_KEYS: [&str; 7] = [
    "admin",
    "president",
    "vicePresident",
    "secretary",
    "treasurer",
    "groupLeader",
    "partLeader",
];

/// Roles allowed to approve or reject a lottery.
const EXECUTIVE_ROLES: [&str; 5] = [
    "admin",
    "president",
    "vicePresident",
    "secretary",
    "treasurer",
];

pub const PERM_EVENT_EDIT: &str = "eventEdit";
pub const PERM_NOTICE_EDIT: &str = "noticeEdit";

/// Every club role may create and edit events and notices; holding any
/// further capability (approving lotteries, admin screens) is gated by the
/// stricter checks below.
fn permissions_for(role: &str) -> &'static [&'static str] {
    if is_known_role(role) {
        &[PERM_EVENT_EDIT, PERM_NOTICE_EDIT]
    } else {
        &[]
    }
}

pub fn has_permission(roles: &[String], permission: &str) -> bool {
    roles
        .iter()
        .any(|role| permissions_for(role).contains(&permission))
}

pub fn is_executive(roles: &[String]) -> bool {
    roles
        .iter()
        .any(|role| EXECUTIVE_ROLES.contains(&role.as_str()))
}

pub fn is_admin(roles: &[String]) -> bool {
    roles.iter().any(|role| role == "admin")
}

pub fn is_known_role(role: &str) -> bool {
    ROLE_KEYS.contains(&role)
}
