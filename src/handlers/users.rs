use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::db::{NewUser, UpdateUser};
use crate::error::AppError;
use crate::handlers::{required, Envelope};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserRequest {
    fn into_new_user(self) -> Result<NewUser, AppError> {
        Ok(NewUser {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
        })
    }

    fn into_update(self) -> Result<UpdateUser, AppError> {
        Ok(UpdateUser {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
        })
    }
}

pub async fn create_user(
    req: web::Json<UserRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = req.into_inner().into_new_user()?;

    match state.store.create_user(&input).await {
        Ok(user) => {
            info!("Created user {}", user.id);
            Ok(HttpResponse::Created().json(Envelope::ok("User created Successfully", user)))
        }
        Err(e) => {
            error!("Failed to create user: {}", e);
            Err(e)
        }
    }
}

pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = state.store.list_users().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(Envelope::ok("Users retrieved Successfully", users)))
}

pub async fn get_user(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match state.store.get_user(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(Envelope::ok("User retrieved Successfully", user))),
        None => {
            warn!("User {} not found", id);
            Err(AppError::NotFound("User"))
        }
    }
}

pub async fn update_user(
    path: web::Path<i32>,
    req: web::Json<UserRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let changes = req.into_inner().into_update()?;
    info!("Updating user {}", id);

    let updated = state.store.update_user(id, &changes).await.map_err(|e| {
        error!("Failed to update user {}: {}", id, e);
        e
    })?;

    match updated {
        Some(user) => Ok(HttpResponse::Ok().json(Envelope::ok("User updated Successfully", user))),
        None => {
            warn!("User {} not found for update", id);
            Err(AppError::NotFound("User"))
        }
    }
}

pub async fn delete_user(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    info!("Deleting user {} and their todos", id);

    let deleted = state.store.delete_user(id).await.map_err(|e| {
        error!("Failed to delete user {}: {}", id, e);
        e
    })?;

    if !deleted {
        warn!("User {} not found for delete", id);
        return Err(AppError::NotFound("User"));
    }

    Ok(HttpResponse::Ok().json(Envelope::empty("User deleted Successfully")))
}
