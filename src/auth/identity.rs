use std::fmt;

/// Role of an authenticated caller, as reported by the auth microservice.
///
/// Only two codes carry meaning in this gateway: `"1"` (admin) and `"2"`
/// (standard user). Every other code is kept verbatim in [`Role::Other`]
/// and is never granted anything a role check guards.
///
/// ```rust
/// use audit_gateway::auth::Role;
///
/// assert_eq!(Role::from_code("1"), Role::Admin);
/// assert_eq!(Role::from_code("3"), Role::Other("3".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    pub const ADMIN_CODE: &'static str = "1";
    pub const USER_CODE: &'static str = "2";

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            Self::ADMIN_CODE => Role::Admin,
            Self::USER_CODE => Role::User,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Role::Admin => Self::ADMIN_CODE,
            Role::User => Self::USER_CODE,
            Role::Other(code) => code,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The caller behind a single GraphQL request.
///
/// # Overview
///
/// An `Identity` is produced once per request by
/// [`IdentityResolver`](crate::auth::IdentityResolver) and is then passed
/// explicitly to every dispatch entry point. It is never cached across
/// requests and never persisted.
///
/// - no `user_id`: anonymous caller (no token was sent)
/// - `user_id` present: the token was verified upstream; `role` is whatever
///   the user record carried, possibly nothing
///
/// # Example
///
/// ```rust
/// use audit_gateway::auth::{Identity, Role};
///
/// let anon = Identity::anonymous();
/// assert!(!anon.is_authenticated());
///
/// let admin = Identity::authenticated("7", Some(Role::Admin));
/// assert_eq!(admin.user_id(), Some("7"));
/// assert!(admin.is_admin());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    user_id: Option<String>,
    role: Option<Role>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            role,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(Role::Admin))
    }
}
