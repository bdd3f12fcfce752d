use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::db::{NewTodo, UpdateTodo};
use crate::error::AppError;
use crate::handlers::{required, Envelope};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub user_id: Option<i32>,
    pub title: Option<String>,
}

impl CreateTodoRequest {
    fn into_new_todo(self) -> Result<NewTodo, AppError> {
        let user_id = self
            .user_id
            .ok_or_else(|| AppError::ValidationError("user_id is required".into()))?;

        Ok(NewTodo {
            user_id,
            title: required(self.title, "title")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    fn into_update(self) -> Result<UpdateTodo, AppError> {
        Ok(UpdateTodo {
            title: required(self.title, "title")?,
            completed: self.completed,
        })
    }
}

pub async fn create_todo(
    req: web::Json<CreateTodoRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = req.into_inner().into_new_todo()?;
    info!("Creating todo for user {}", input.user_id);

    // an unknown user_id fails on the foreign key and surfaces as a store error
    let todo = state.store.create_todo(&input).await.map_err(|e| {
        error!("Failed to create todo for user {}: {}", input.user_id, e);
        e
    })?;

    Ok(HttpResponse::Created().json(Envelope::ok("Todo created Successfully", todo)))
}

pub async fn list_todos(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let todos = state.store.list_todos().await.map_err(|e| {
        error!("Failed to list todos: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(Envelope::ok("Todos retrieved Successfully", todos)))
}

pub async fn get_todo(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let todo = state.store.get_todo(id).await.map_err(|e| {
        error!("Failed to fetch todo {}: {}", id, e);
        e
    })?;

    match todo {
        Some(todo) => Ok(HttpResponse::Ok().json(Envelope::ok("Todo retrieved Successfully", todo))),
        None => {
            warn!("Todo {} not found", id);
            Err(AppError::NotFound("Todo"))
        }
    }
}

pub async fn update_todo(
    path: web::Path<i32>,
    req: web::Json<UpdateTodoRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let changes = req.into_inner().into_update()?;
    info!("Updating todo {}", id);

    let todo = state.store.update_todo(id, &changes).await.map_err(|e| {
        error!("Failed to update todo {}: {}", id, e);
        e
    })?;

    match todo {
        Some(todo) => Ok(HttpResponse::Ok().json(Envelope::ok("Todo updated Successfully", todo))),
        None => {
            warn!("Todo {} not found for update", id);
            Err(AppError::NotFound("Todo"))
        }
    }
}

pub async fn delete_todo(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let deleted = state.store.delete_todo(id).await.map_err(|e| {
        error!("Failed to delete todo {}: {}", id, e);
        e
    })?;

    if !deleted {
        warn!("Todo {} not found for delete", id);
        return Err(AppError::NotFound("Todo"));
    }

    info!("Deleted todo {}", id);
    Ok(HttpResponse::Ok().json(Envelope::empty("Todo deleted Successfully")))
}
