//! Login handler - issues signed tokens for blog mutations.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use bloglist_core::ports::{AuthError, PasswordService, TokenService};
use bloglist_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/login
///
/// An unknown username and a wrong password answer identically so the
/// response does not reveal which usernames exist.
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (username, password) = match (req.username, req.password) {
        (Some(username), Some(password)) => (username, password),
        _ => return Err(AppError::from(AuthError::InvalidCredentials)),
    };

    // Find user by username
    let user = match state.users.find_by_username(&username).await? {
        Some(user) => user,
        None => return Err(AppError::from(AuthError::InvalidCredentials)),
    };

    // Verify password
    let valid = password_service
        .verify(&password, &user.password_hash)
        .map_err(AppError::from)?;

    if !valid {
        return Err(AppError::from(AuthError::InvalidCredentials));
    }

    // Generate token
    let token = token_service
        .generate_token(user.id, &user.username)
        .map_err(AppError::from)?;

    tracing::info!(user = %user.username, "Login succeeded");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use bloglist_shared::ErrorBody;
    use bloglist_shared::dto::LoginResponse;
    use serde_json::json;

    use crate::state::AppState;
    use crate::testing;

    #[actix_web::test]
    async fn login_succeeds_with_correct_credentials() {
        let state = AppState::in_memory();
        testing::seed_user(&state, "mluukkai", "salainen").await;
        let app = testing::init_app(state).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": "mluukkai", "password": "salainen"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: LoginResponse = test::read_body_json(resp).await;
        assert!(!body.token.is_empty());
        assert_eq!(body.username, "mluukkai");
    }

    #[actix_web::test]
    async fn login_fails_with_wrong_password() {
        let state = AppState::in_memory();
        testing::seed_user(&state, "mluukkai", "salainen").await;
        let app = testing::init_app(state).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": "mluukkai", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "invalid username or password");
    }

    #[actix_web::test]
    async fn login_fails_with_unknown_username() {
        let state = AppState::in_memory();
        testing::seed_user(&state, "mluukkai", "salainen").await;
        let app = testing::init_app(state).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": "nobody", "password": "salainen"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Indistinguishable from a wrong password
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "invalid username or password");
    }

    #[actix_web::test]
    async fn login_token_authorizes_blog_creation() {
        let state = AppState::in_memory();
        testing::seed_user(&state, "mluukkai", "salainen").await;
        let app = testing::init_app(state).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": "mluukkai", "password": "salainen"}))
            .to_request();
        let login: LoginResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(("Authorization", format!("Bearer {}", login.token)))
            .set_json(json!({"title": "Type wars", "url": "http://blog.cleancoder.com/type-wars"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
