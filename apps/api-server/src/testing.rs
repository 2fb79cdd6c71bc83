//! Test support - the full service wired to in-memory repositories.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};

use bloglist_core::domain::User;
use bloglist_core::ports::{PasswordService, TokenService};
use bloglist_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

use crate::handlers;
use crate::state::AppState;

pub fn token_service() -> Arc<dyn TokenService> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 1,
        issuer: "bloglist-test".to_string(),
    }))
}

pub fn password_service() -> Arc<dyn PasswordService> {
    Arc::new(Argon2PasswordService::new())
}

/// Build the service the way `main` does, minus the HTTP listener.
pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(token_service()))
            .app_data(web::Data::new(password_service()))
            .app_data(crate::path_config())
            .configure(handlers::configure_routes)
            .default_service(web::route().to(handlers::unknown_endpoint)),
    )
    .await
}

/// Insert a user with a properly hashed password straight into the state.
pub async fn seed_user(state: &AppState, username: &str, password: &str) -> User {
    let hash = password_service().hash(password).unwrap();
    state
        .users
        .insert(User::new(username.to_string(), None, hash))
        .await
        .unwrap()
}

/// An `Authorization` header value for the given user, signed with the same
/// configuration as the test app's token service.
pub fn bearer_for(user: &User) -> String {
    let token = token_service()
        .generate_token(user.id, &user.username)
        .unwrap();
    format!("Bearer {token}")
}
