use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::db::models::{NewTodo, NewUser, Todo, UpdateTodo, UpdateUser, User};
use crate::db::repository::Repository;
use crate::db::schema;
use crate::error::{AppError, DatabaseError};

pub struct DbOperations {
    pool: Arc<PgPool>,
}

impl DbOperations {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn new_with_options(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }

    pub async fn init_schema(&self) -> Result<(), DatabaseError> {
        schema::initialize(self.pool()).await
    }
}

#[async_trait]
impl Repository for DbOperations {
    async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users(name, email) VALUES($1, $2) RETURNING *",
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(self.pool())
        .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(self.pool())
            .await?;

        Ok(users)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(user)
    }

    async fn update_user(&self, id: i32, user: &UpdateUser) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET name = $1, email = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> Result<bool, AppError> {
        // todos referencing this user go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos(user_id, title) VALUES($1, $2) RETURNING *",
        )
        .bind(todo.user_id)
        .bind(&todo.title)
        .fetch_one(self.pool())
        .await?;

        Ok(todo)
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, AppError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT * FROM todos")
            .fetch_all(self.pool())
            .await?;

        Ok(todos)
    }

    async fn get_todo(&self, id: i32) -> Result<Option<Todo>, AppError> {
        let todo = sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(todo)
    }

    async fn update_todo(&self, id: i32, todo: &UpdateTodo) -> Result<Option<Todo>, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos SET title = $1, completed = COALESCE($2, completed), updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&todo.title)
        .bind(todo.completed)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(todo)
    }

    async fn delete_todo(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
