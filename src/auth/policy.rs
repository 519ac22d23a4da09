//! # Authorization policy
//!
//! One decision function, [`authorize`], plus a declarative table of
//! [`Policy`] values, one per GraphQL operation. Dispatchers look up their
//! operation's policy and call `authorize` before touching an upstream.
//!
//! | Operation | Requires | Owner bypass |
//! |---|---|---|
//! | `userDetailById` | admin | yes |
//! | `disableUnableUser` | admin | no |
//! | `signUpUser` | admin | no |
//! | `logIn`, `refreshToken`, `registerUser` | public | - |
//! | `updateUser` | admin | yes |
//! | reason / log reads and writes | admin or user | - |

use super::identity::{Identity, Role};

/// Set of roles a protected operation accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleSet {
    admin: bool,
    user: bool,
}

impl RoleSet {
    pub const ADMIN: RoleSet = RoleSet {
        admin: true,
        user: false,
    };

    pub const ADMIN_OR_USER: RoleSet = RoleSet {
        admin: true,
        user: true,
    };

    pub fn contains(&self, role: &Role) -> bool {
        match role {
            Role::Admin => self.admin,
            Role::User => self.user,
            Role::Other(_) => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// No identity required.
    Public,
    /// Caller must be authenticated and hold one of the roles, unless the
    /// policy allows an ownership bypass and the caller owns the resource.
    Roles(RoleSet),
}

/// Authorization rule attached to a single operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub operation: &'static str,
    pub access: Access,
    pub owner_bypass: bool,
}

impl Policy {
    pub const fn public(operation: &'static str) -> Self {
        Self {
            operation,
            access: Access::Public,
            owner_bypass: false,
        }
    }

    pub const fn roles(operation: &'static str, roles: RoleSet) -> Self {
        Self {
            operation,
            access: Access::Roles(roles),
            owner_bypass: false,
        }
    }

    pub const fn with_owner_bypass(mut self) -> Self {
        self.owner_bypass = true;
        self
    }
}

// Auth domain
pub const USER_DETAIL_BY_ID: Policy =
    Policy::roles("userDetailById", RoleSet::ADMIN).with_owner_bypass();
pub const DISABLE_UNABLE_USER: Policy = Policy::roles("disableUnableUser", RoleSet::ADMIN);
pub const SIGN_UP_USER: Policy = Policy::roles("signUpUser", RoleSet::ADMIN);
pub const LOG_IN: Policy = Policy::public("logIn");
pub const REFRESH_TOKEN: Policy = Policy::public("refreshToken");
pub const UPDATE_USER: Policy = Policy::roles("updateUser", RoleSet::ADMIN).with_owner_bypass();
pub const REGISTER_USER: Policy = Policy::public("registerUser");

// Logs domain
pub const GET_ALL_REASONS: Policy = Policy::roles("getAllReasons", RoleSet::ADMIN_OR_USER);
pub const GET_REASON_BY_ID: Policy = Policy::roles("getReasonById", RoleSet::ADMIN_OR_USER);
pub const GET_ALL_LOGS: Policy = Policy::roles("getAllLogs", RoleSet::ADMIN_OR_USER);
pub const GET_LOG_BY_ID: Policy = Policy::roles("getLogById", RoleSet::ADMIN_OR_USER);
pub const GET_LOGS_BY_USER: Policy = Policy::roles("getLogsByUser", RoleSet::ADMIN_OR_USER);
pub const GET_LOGS_BY_REASON: Policy = Policy::roles("getLogsByReason", RoleSet::ADMIN_OR_USER);
pub const GET_LOGS_BY_DATE: Policy = Policy::roles("getLogsByDate", RoleSet::ADMIN_OR_USER);
pub const GET_LOGS_BY_REASON_AND_DATE: Policy =
    Policy::roles("getLogsByReasonAndDate", RoleSet::ADMIN_OR_USER);
pub const CREATE_REASON: Policy = Policy::roles("createReason", RoleSet::ADMIN_OR_USER);
pub const UPDATE_REASON: Policy = Policy::roles("updateReason", RoleSet::ADMIN_OR_USER);
pub const DELETE_REASON_BY_ID: Policy =
    Policy::roles("deleteReasonById", RoleSet::ADMIN_OR_USER);
pub const CREATE_LOG: Policy = Policy::roles("createLog", RoleSet::ADMIN_OR_USER);
pub const UPDATE_LOG: Policy = Policy::roles("updateLog", RoleSet::ADMIN_OR_USER);

/// Every operation the gateway exposes.
pub const ALL: &[Policy] = &[
    USER_DETAIL_BY_ID,
    DISABLE_UNABLE_USER,
    SIGN_UP_USER,
    LOG_IN,
    REFRESH_TOKEN,
    UPDATE_USER,
    REGISTER_USER,
    GET_ALL_REASONS,
    GET_REASON_BY_ID,
    GET_ALL_LOGS,
    GET_LOG_BY_ID,
    GET_LOGS_BY_USER,
    GET_LOGS_BY_REASON,
    GET_LOGS_BY_DATE,
    GET_LOGS_BY_REASON_AND_DATE,
    CREATE_REASON,
    UPDATE_REASON,
    DELETE_REASON_BY_ID,
    CREATE_LOG,
    UPDATE_LOG,
];

/// Why a request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// No identity was established.
    Unauthenticated,
    /// Identity established, but neither role nor ownership grants access.
    Unauthorized,
}

impl Denial {
    /// Numeric code reported to GraphQL clients.
    pub fn code(&self) -> u16 {
        match self {
            Denial::Unauthenticated => 407,
            Denial::Unauthorized => 403,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(Denial),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            Decision::Allowed => Ok(()),
            Decision::Denied(denial) => Err(denial),
        }
    }
}

/// Decides whether `identity` may run the operation guarded by `policy`.
///
/// `owner_id` is the user id the operation targets, if any. It only matters
/// when the policy declares an ownership bypass.
pub fn authorize(identity: &Identity, policy: &Policy, owner_id: Option<&str>) -> Decision {
    let roles = match policy.access {
        Access::Public => return Decision::Allowed,
        Access::Roles(roles) => roles,
    };

    let Some(user_id) = identity.user_id() else {
        return Decision::Denied(Denial::Unauthenticated);
    };

    if identity.role().is_some_and(|role| roles.contains(role)) {
        return Decision::Allowed;
    }

    if policy.owner_bypass && owner_id == Some(user_id) {
        return Decision::Allowed;
    }

    Decision::Denied(Denial::Unauthorized)
}
