//! User collection handlers.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::User;
use bloglist_core::ports::PasswordService;
use bloglist_shared::dto::{BlogSummary, CreateUserRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 3;

fn user_json(user: User, blogs: Vec<BlogSummary>) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        name: user.name,
        blogs,
    }
}

/// POST /api/users
pub async fn create(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    let username = req
        .username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("username is required".to_string()))?;
    let password = req
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("password is required".to_string()))?;

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    // Check if the username is taken
    if state.users.find_by_username(&username).await?.is_some() {
        return Err(AppError::BadRequest("username must be unique".to_string()));
    }

    // Hash password
    let password_hash = password_service.hash(&password).map_err(AppError::from)?;

    // Create user
    let user = User::new(username, req.name, password_hash);
    let saved = state.users.insert(user).await?;

    tracing::info!(user = %saved.username, "User created");

    Ok(HttpResponse::Created().json(user_json(saved, Vec::new())))
}

/// GET /api/users - users with their blogs populated as id + title.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    let blogs = state.blogs.find_all().await?;

    let mut by_owner: HashMap<Uuid, Vec<BlogSummary>> = HashMap::new();
    for blog in blogs {
        if let Some(user_id) = blog.user_id {
            by_owner.entry(user_id).or_default().push(BlogSummary {
                id: blog.id,
                title: blog.title,
            });
        }
    }

    let body: Vec<UserResponse> = users
        .into_iter()
        .map(|user| {
            let owned = by_owner.remove(&user.id).unwrap_or_default();
            user_json(user, owned)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
