use actix_web::web;

use crate::error::AppError;
use crate::handlers::{health_check, liveness, todos, users};

pub use crate::handlers::route_not_found;

/// Registers every route of the API.
///
/// `ServiceConfig::route` lifts the method guard onto the resource, so a known
/// path with an unregistered method falls through to the app's default service
/// (`route_not_found`) instead of answering 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid id: {}", err)).into()
    }))
    .route("/", web::get().to(liveness))
    .route("/health", web::get().to(health_check))
    .route("/users", web::post().to(users::create_user))
    .route("/users", web::get().to(users::list_users))
    .route("/users/{id}", web::get().to(users::get_user))
    .route("/users/{id}", web::put().to(users::update_user))
    .route("/users/{id}", web::delete().to(users::delete_user))
    .route("/todos", web::post().to(todos::create_todo))
    .route("/todos", web::get().to(todos::list_todos))
    .route("/todos/{id}", web::get().to(todos::get_todo))
    .route("/todos/{id}", web::put().to(todos::update_todo))
    .route("/todos/{id}", web::delete().to(todos::delete_todo));
}
