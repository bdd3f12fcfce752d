use async_trait::async_trait;

use crate::db::models::{NewTodo, NewUser, Todo, UpdateTodo, UpdateUser, User};
use crate::error::AppError;

/// Store operations the HTTP handlers depend on.
///
/// Every method is a single statement. Lookups by id return `Ok(None)` and
/// deletes return `Ok(false)` when no row matched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository: Send + Sync {
    async fn create_user(&self, user: &NewUser) -> Result<User, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError>;
    async fn update_user(&self, id: i32, user: &UpdateUser) -> Result<Option<User>, AppError>;
    async fn delete_user(&self, id: i32) -> Result<bool, AppError>;

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, AppError>;
    async fn list_todos(&self) -> Result<Vec<Todo>, AppError>;
    async fn get_todo(&self, id: i32) -> Result<Option<Todo>, AppError>;
    async fn update_todo(&self, id: i32, todo: &UpdateTodo) -> Result<Option<Todo>, AppError>;
    async fn delete_todo(&self, id: i32) -> Result<bool, AppError>;

    /// Round-trips a trivial query; used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;

    async fn close(&self);
}
