use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::services::activities_service::{self, ActivityView};

pub async fn activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<BTreeMap<String, ActivityView>>, ApiError> {
    let activities = activities_service::list_activities(&pool).await?;
    Ok(Json(activities))
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub activity_name: String,
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<SignupResponse>, ApiError> {
    activities_service::signup(&pool, &activity_name, &query.email).await?;

    Ok(Json(SignupResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
        activity_name,
        email: query.email,
    }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<SignupResponse>, ApiError> {
    activities_service::unregister(&pool, &activity_name, &query.email).await?;

    Ok(Json(SignupResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
        activity_name,
        email: query.email,
    }))
}
