//! Caller resolution and permission gates.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use common::{AppError, AppResult};
use domain::{Capability, Identity, UserId};

use crate::state::AppState;

/// The caller of the current request, anonymous unless a bearer token resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller(Option<Identity>);

impl Caller {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self(Some(identity))
    }

    pub fn id(&self) -> Option<UserId> {
        self.0.as_ref().map(|identity| identity.id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }

    /// Check if the caller holds `capability`. Anonymous callers hold none.
    pub fn can(&self, capability: Capability) -> bool {
        self.0
            .as_ref()
            .is_some_and(|identity| identity.can(capability))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Caller>().cloned().unwrap_or_default())
    }
}

/// Authorization predicate evaluated before a gated handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any authenticated caller
    Authenticated,
    /// An authenticated caller holding the capability
    Capability(Capability),
}

impl Permission {
    pub fn check(&self, caller: &Caller) -> AppResult<()> {
        if !caller.is_authenticated() {
            return Err(AppError::LoginRequired);
        }

        match self {
            Permission::Authenticated => Ok(()),
            Permission::Capability(capability) if caller.can(*capability) => Ok(()),
            Permission::Capability(capability) => {
                tracing::debug!(
                    user_id = ?caller.id(),
                    capability = %capability,
                    "Caller lacks capability"
                );
                Err(AppError::Forbidden)
            }
        }
    }
}

/// Resolve the bearer token (if any) into a [`Caller`] stored in request extensions.
///
/// Requests without a bearer token proceed anonymously; a token that does not
/// resolve is rejected outright.
pub async fn identify(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let caller = match bearer {
        None => Caller::anonymous(),
        Some(TypedHeader(Authorization(bearer))) => {
            let id = state.identity.resolve(bearer.token()).await.map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                e
            })?;
            let capabilities = state.identity.capabilities(id).await?;
            tracing::debug!(
                user_id = id,
                capabilities = capabilities.len(),
                "Resolved caller"
            );
            Caller::authenticated(Identity::new(id, capabilities))
        }
    };

    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}

/// Route middleware enforcing `permission` against the resolved caller.
///
/// Installed with `middleware::from_fn_with_state(permission, require_permission)`.
pub async fn require_permission(
    State(permission): State<Permission>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let caller = request
        .extensions()
        .get::<Caller>()
        .cloned()
        .unwrap_or_default();
    permission.check(&caller)?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Role;

    fn caller(role: Role) -> Caller {
        Caller::authenticated(Identity::new(5, role.capabilities()))
    }

    #[test]
    fn anonymous_caller_needs_login() {
        let err = Permission::Authenticated
            .check(&Caller::anonymous())
            .unwrap_err();
        assert!(matches!(err, AppError::LoginRequired));

        let err = Permission::Capability(Capability::Read)
            .check(&Caller::anonymous())
            .unwrap_err();
        assert!(matches!(err, AppError::LoginRequired));
    }

    #[test]
    fn any_identity_passes_authenticated_gate() {
        assert!(Permission::Authenticated
            .check(&caller(Role::Subscriber))
            .is_ok());
    }

    #[test]
    fn missing_capability_is_forbidden() {
        let err = Permission::Capability(Capability::ManageOptions)
            .check(&caller(Role::Editor))
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn held_capability_passes() {
        assert!(Permission::Capability(Capability::PublishPosts)
            .check(&caller(Role::Author))
            .is_ok());
    }

    #[test]
    fn caller_accessors() {
        let anon = Caller::anonymous();
        assert!(!anon.is_authenticated());
        assert_eq!(anon.id(), None);
        assert!(!anon.can(Capability::Read));

        let admin = caller(Role::Administrator);
        assert!(admin.is_authenticated());
        assert_eq!(admin.id(), Some(5));
        assert!(admin.can(Capability::ManageOptions));
    }
}
