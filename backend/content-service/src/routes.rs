//! Route configuration
//!
//! Centralized route setup extracted from main.rs.
//! Registration and login are public; everything else sits behind the JWT
//! middleware.

use crate::handlers;
use crate::middleware::JwtAuthMiddleware;
use actix_web::web;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/health/live", web::get().to(handlers::liveness_check))
            .configure(routes::auth::configure)
            .configure(routes::posts::configure)
            .configure(routes::users::configure)
            .configure(routes::contents::configure),
    );
}

// Sub-modules for each domain
mod routes {
    use super::*;

    pub mod auth {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.route("/register", web::post().to(handlers::register))
                .route("/login", web::post().to(handlers::login))
                .service(
                    web::resource("/logout")
                        .wrap(JwtAuthMiddleware)
                        .route(web::post().to(handlers::logout)),
                );
        }
    }

    pub mod posts {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/posts")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::get().to(handlers::index_posts))
                    .route("", web::post().to(handlers::store_post))
                    .route("/{id}", web::get().to(handlers::show_post))
                    .route("/{id}", web::patch().to(handlers::update_post))
                    .route("/{id}", web::delete().to(handlers::destroy_post))
                    .route("/{post_id}/comments", web::post().to(handlers::store_comment))
                    .route("/{post_id}/likes", web::post().to(handlers::store_like))
                    .route("/{post_id}/likes", web::delete().to(handlers::destroy_like)),
            );
        }
    }

    pub mod users {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/users")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::get().to(handlers::index_users))
                    .route("/{id}", web::get().to(handlers::show_user)),
            );
        }
    }

    pub mod contents {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/contents")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::get().to(handlers::index_contents))
                    .route("", web::post().to(handlers::store_content))
                    .route("/{id}", web::get().to(handlers::show_content))
                    .route("/{id}", web::patch().to(handlers::update_content))
                    .route("/{id}", web::delete().to(handlers::delete_content)),
            );
        }
    }
}
