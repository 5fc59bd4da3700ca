/**
 * Authentication Middleware
 *
 * Two pieces work together:
 *
 * 1. `load_logged_in_user` runs before every request. It reads the user id
 *    from the session, loads that user and stores the result as a
 *    `CurrentUser` in the request extensions. A session pointing at a
 *    deleted user simply yields no user.
 * 2. `login_required` wraps individual routes. Without a current user it
 *    redirects to the login page and the wrapped handler never runs.
 *
 * Handlers read the value through the `CurrentUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::routes::paths;
use crate::backend::views::redirect;

/// The user resolved for the current request, if any
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    /// Borrow the user, if one is logged in
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.is_some()
    }
}

/// Current-user resolver
///
/// Runs before every request and attaches a `CurrentUser` to the request
/// extensions. Requires the session layer to wrap it.
pub async fn load_logged_in_user(
    State(auth): State<AuthService>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = auth.current_user(&session).await?;
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Login-required guard
///
/// Passes the request through unchanged when a user is logged in, otherwise
/// answers with a redirect to the login page.
pub async fn login_required(request: Request, next: Next) -> Response {
    let logged_in = request
        .extensions()
        .get::<CurrentUser>()
        .is_some_and(CurrentUser::is_logged_in);

    if !logged_in {
        tracing::debug!("Redirecting anonymous request for {} to login", request.uri().path());
        return redirect(paths::LOGIN);
    }

    next.run(request).await
}

/// Axum extractor for the current user
///
/// Fails with 500 if `load_logged_in_user` was not installed, since that is
/// a wiring mistake rather than an anonymous visitor.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            BackendError::handler(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Current user was not resolved for this request",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header, middleware, routing::get, Router};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tower::ServiceExt;

    fn alice() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn guarded_app(current: Option<CurrentUser>, calls: Arc<AtomicUsize>) -> Router {
        let app = Router::new()
            .route(
                "/secret",
                get(move || {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        "secret"
                    }
                }),
            )
            .route_layer(middleware::from_fn(login_required));

        match current {
            Some(current) => app.layer(axum::Extension(current)),
            None => app,
        }
    }

    async fn get_secret(app: Router) -> Response {
        app.oneshot(axum::http::Request::get("/secret").body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_guard_runs_handler_for_logged_in_user() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(Some(CurrentUser(Some(alice()))), calls.clone());

        let response = get_secret(app).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_guard_redirects_anonymous_user() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(Some(CurrentUser(None)), calls.clone());

        let response = get_secret(app).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], paths::LOGIN);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_guard_redirects_when_unresolved() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(None, calls.clone());

        let response = get_secret(app).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_extractor_reads_extension() {
        let request = axum::http::Request::get("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(CurrentUser(Some(alice())));

        let current = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(current.user(), Some(&alice()));
    }

    #[tokio::test]
    async fn test_extractor_without_resolver_is_error() {
        let request = axum::http::Request::get("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let err = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
