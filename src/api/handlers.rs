//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::{Item, ItemId};
use crate::Error;

const NOT_FOUND_DETAIL: &str = "Элемент не найден";

/// Service index: descriptive payload listing the available routes
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Stockroom catalog service".to_string(),
        endpoints: vec![
            EndpointInfo {
                path: "/",
                method: "GET",
                description: "This document",
            },
            EndpointInfo {
                path: "/api/info",
                method: "GET",
                description: "Service metadata",
            },
            EndpointInfo {
                path: "/items",
                method: "GET",
                description: "Fetch all items",
            },
            EndpointInfo {
                path: "/items/{item_id}",
                method: "GET",
                description: "Fetch one item by id",
            },
        ],
    })
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// Fixed service metadata
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
}

/// List all items, database first with static fallback.
///
/// A failed database read degrades to the static catalog, and a failed
/// static read degrades to an empty list. This route never errors.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    if let Some(db) = &state.database {
        match db.fetch_all().await {
            Ok(items) => return Json(items),
            Err(err) => {
                tracing::warn!(error = %err, "Database read failed; using static catalog");
            }
        }
    }

    Json(state.catalog.load_or_empty().await)
}

/// Fetch one item by id, database first with static fallback.
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
) -> Result<Json<Item>, (StatusCode, Json<ErrorBody>)> {
    if let Some(db) = &state.database {
        match db.fetch_by_id(item_id).await {
            Ok(item) => return Ok(Json(item)),
            Err(Error::NotFound(_)) => {}
            Err(err) => {
                tracing::warn!(error = %err, "Database read failed; using static catalog");
            }
        }
    }

    match state.catalog.find(item_id).await {
        Ok(item) => Ok(Json(item)),
        Err(Error::NotFound(_)) => Err(not_found()),
        Err(err) => {
            tracing::warn!(error = %err, "Static catalog unavailable");
            Err(not_found())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: NOT_FOUND_DETAIL.to_string(),
        }),
    )
}
