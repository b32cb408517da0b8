//! Role authorization check.

use super::model::Role;
use crate::session::Session;

/// Checks whether `session` satisfies `required`.
///
/// Admin satisfies both admin and user requirements; user satisfies only
/// user; an absent session satisfies nothing. Pure function: the caller is
/// responsible for auditing denials.
pub fn is_authorized(required: Role, session: Option<&Session>) -> bool {
    let Some(session) = session else {
        return false;
    };
    match required {
        Role::User => matches!(session.role, Role::User | Role::Admin),
        Role::Admin => session.role == Role::Admin,
    }
}
