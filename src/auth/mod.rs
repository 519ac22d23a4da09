//! Authentication (who is calling) and authorization (may they do this).

pub mod identity;
pub mod policy;
pub mod resolver;

pub use identity::{Identity, Role};
pub use policy::{Decision, Denial, Policy, authorize};
pub use resolver::IdentityResolver;
