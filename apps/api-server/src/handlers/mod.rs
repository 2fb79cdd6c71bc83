//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod login;
mod users;

use actix_web::{HttpResponse, web};
use bloglist_shared::ErrorBody;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Blog routes
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::remove)),
            )
            // User routes
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::create)),
            )
            // Login
            .route("/login", web::post().to(login::login)),
    );
}

/// Fallback for requests that match no route.
pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::unknown_endpoint())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use bloglist_shared::ErrorBody;

    use crate::state::AppState;
    use crate::testing;

    #[actix_web::test]
    async fn unknown_routes_get_a_json_404() {
        let app = testing::init_app(AppState::in_memory()).await;

        let req = test::TestRequest::get().uri("/api/nonexistent").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "unknown endpoint");
    }
}
