//! Blog collection handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_shared::dto::{BlogResponse, CreateBlogRequest, UpdateBlogRequest, UserSummary};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn blog_json(blog: Blog, owner: Option<&User>) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user: owner.map(|u| UserSummary {
            id: u.id,
            username: u.username.clone(),
            name: u.name.clone(),
        }),
    }
}

/// GET /api/blogs
///
/// All blogs, each with its owning user populated.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;
    let users: HashMap<Uuid, User> = state
        .users
        .find_all()
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let body: Vec<BlogResponse> = blogs
        .into_iter()
        .map(|blog| {
            let owner = blog.user_id.and_then(|id| users.get(&id));
            blog_json(blog, owner)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("blog not found".to_string()))?;

    let owner = match blog.user_id {
        Some(user_id) => state.users.find_by_id(user_id).await?,
        None => None,
    };

    Ok(HttpResponse::Ok().json(blog_json(blog, owner.as_ref())))
}

/// POST /api/blogs - protected route; the token's user becomes the owner.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    let title = req
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("title is required".to_string()))?;
    let url = req
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("url is required".to_string()))?;

    // Resolve the authenticated user
    let owner = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("token user does not exist".to_string()))?;

    let blog = Blog::new(
        Some(owner.id),
        title,
        req.author,
        url,
        req.likes.unwrap_or(0),
    );
    let saved = state.blogs.insert(blog).await?;

    tracing::info!(blog_id = %saved.id, user = %owner.username, "Blog created");

    Ok(HttpResponse::Created().json(blog_json(saved, Some(&owner))))
}

/// PUT /api/blogs/{id} - partial update; omitted fields keep prior values.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("blog not found".to_string()))?;

    if let Some(title) = req.title {
        blog.title = title;
    }
    if let Some(author) = req.author {
        blog.author = Some(author);
    }
    if let Some(url) = req.url {
        blog.url = url;
    }
    if let Some(likes) = req.likes {
        blog.likes = likes;
    }
    blog.updated_at = chrono::Utc::now();

    let saved = state.blogs.update(blog).await?;

    let owner = match saved.user_id {
        Some(user_id) => state.users.find_by_id(user_id).await?,
        None => None,
    };

    Ok(HttpResponse::Ok().json(blog_json(saved, owner.as_ref())))
}

/// DELETE /api/blogs/{id} - protected route; only the owner may delete.
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("blog not found".to_string()))?;

    if blog.user_id != Some(identity.user_id) {
        return Err(AppError::Unauthorized(
            "only the creator of a blog may delete it".to_string(),
        ));
    }

    state.blogs.delete(id).await?;

    tracing::info!(blog_id = %id, user = %identity.username, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}
