use axum::{
    extract::{Request, State},
    http::{
        header::{HeaderName, AUTHORIZATION},
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::auth::{extract_bearer_token, AuthError, AuthService, Role};

/// Requires a bearer token issued at user login
pub async fn user_auth_middleware(
    State(auth_service): State<AuthService>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    authenticate(&auth_service, request, next, Role::User).await
}

/// Requires a bearer token issued at trainer login
pub async fn trainer_auth_middleware(
    State(auth_service): State<AuthService>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    authenticate(&auth_service, request, next, Role::Trainer).await
}

async fn authenticate(
    auth_service: &AuthService,
    mut request: Request,
    next: Next,
    role: Role,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;

    let token = extract_bearer_token(auth_header)?;

    let session = auth_service.validate_session(token, role).map_err(|err| {
        tracing::debug!("Rejected {} request: {}", role, err);
        err
    })?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// CORS configuration for the browser client
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Security headers middleware
pub fn security_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{JwtService, UserSession};
    use crate::repository::MemoryStore;
    use axum::{
        body::Body,
        http::StatusCode,
        middleware::from_fn_with_state,
        routing::get,
        Extension, Router,
    };
    use chrono::Duration;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn auth_service() -> AuthService {
        let store = Arc::new(MemoryStore::new());
        AuthService::new(
            store.clone(),
            store,
            JwtService::new("test_secret", Duration::hours(1)),
        )
    }

    fn protected_app(auth: AuthService) -> Router {
        async fn whoami(Extension(session): Extension<UserSession>) -> String {
            session.account_id.to_string()
        }

        let users = Router::new()
            .route("/user", get(whoami))
            .route_layer(from_fn_with_state(auth.clone(), user_auth_middleware));
        let trainers = Router::new()
            .route("/trainer", get(whoami))
            .route_layer(from_fn_with_state(auth, trainer_auth_middleware));

        users.merge(trainers)
    }

    fn request(uri: &str, authorization: Option<&str>) -> Request {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_user_token_reaches_handler() {
        let auth = auth_service();
        let account_id = Uuid::new_v4();
        let token = auth.jwt().create_token(account_id, Role::User).unwrap();

        let response = protected_app(auth)
            .oneshot(request("/user", Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, account_id.to_string());
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header_is_unauthorized() {
        let app = protected_app(auth_service());

        for header in [None, Some("Token abc"), Some("Bearer "), Some("Bearer not-a-jwt")] {
            let response = app.clone().oneshot(request("/user", header)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{:?}", header);
        }
    }

    #[tokio::test]
    async fn test_roles_do_not_cross() {
        let auth = auth_service();
        let user_token = auth.jwt().create_token(Uuid::new_v4(), Role::User).unwrap();
        let trainer_token = auth.jwt().create_token(Uuid::new_v4(), Role::Trainer).unwrap();
        let app = protected_app(auth);

        let response = app
            .clone()
            .oneshot(request("/trainer", Some(&format!("Bearer {}", user_token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(request("/user", Some(&format!("Bearer {}", trainer_token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
