//! Ownership/role authorization gate.
//!
//! Single source of truth for "may this user mutate this row". Every
//! repository update/delete path calls through here before touching the
//! database; handler-level role extractors are a convenience on top, not
//! the security boundary.

use crate::error::CoreError;
use crate::roles::ROLE_ADMIN;
use crate::types::DbId;

/// True when the actor may update or delete an entity owned by `owner`.
///
/// Admins may mutate anything; everyone else only their own rows.
pub fn can_mutate(owner: DbId, actor_id: DbId, actor_role: &str) -> bool {
    actor_role == ROLE_ADMIN || owner == actor_id
}

/// Enforce [`can_mutate`], failing with [`CoreError::Forbidden`].
///
/// `entity` names the entity type for the error message.
pub fn ensure_can_mutate(
    entity: &'static str,
    owner: DbId,
    actor_id: DbId,
    actor_role: &str,
) -> Result<(), CoreError> {
    if can_mutate(owner, actor_id, actor_role) {
        return Ok(());
    }
    Err(CoreError::Forbidden(format!(
        "Only the owner or an admin may modify this {entity}"
    )))
}

/// True when the role may reach admin-prefixed routes.
pub fn can_access_admin_area(role: &str) -> bool {
    role == ROLE_ADMIN
}

/// Enforce an admin-only operation, failing with [`CoreError::Forbidden`].
///
/// Used by repositories whose entities (products, users) have no
/// per-row owner semantics: only admins may mutate them at all.
pub fn ensure_admin(operation: &'static str, actor_role: &str) -> Result<(), CoreError> {
    if can_access_admin_area(actor_role) {
        return Ok(());
    }
    Err(CoreError::Forbidden(format!(
        "Admin role required to {operation}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_USER;

    #[test]
    fn owner_may_mutate() {
        assert!(can_mutate(7, 7, ROLE_USER));
    }

    #[test]
    fn admin_may_mutate_anything() {
        assert!(can_mutate(7, 99, ROLE_ADMIN));
    }

    #[test]
    fn stranger_may_not_mutate() {
        assert!(!can_mutate(7, 8, ROLE_USER));
    }

    #[test]
    fn ensure_reports_forbidden() {
        let err = ensure_can_mutate("reply", 7, 8, ROLE_USER).unwrap_err();
        match err {
            CoreError::Forbidden(msg) => assert!(msg.contains("reply")),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn ensure_admin_rejects_regular_users() {
        assert!(ensure_admin("create products", ROLE_ADMIN).is_ok());
        assert!(ensure_admin("create products", ROLE_USER).is_err());
    }

    #[test]
    fn admin_area_is_admin_only() {
        assert!(can_access_admin_area(ROLE_ADMIN));
        assert!(!can_access_admin_area(ROLE_USER));
        assert!(!can_access_admin_area("reviewer"));
    }
}
