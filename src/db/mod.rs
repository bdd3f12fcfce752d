//! Persistence layer for the todo API
//!
//! Row types, the `Repository` seam the handlers call through,
//! its PostgreSQL implementation and the schema initializer.

pub mod models;
pub mod operations;
pub mod repository;
pub mod schema;

pub use models::{NewTodo, NewUser, Todo, UpdateTodo, UpdateUser, User};
pub use operations::DbOperations;
pub use repository::Repository;

#[cfg(test)]
pub use repository::MockRepository;
