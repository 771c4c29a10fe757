//! Item CRUD handlers.
//!
//! Handlers validate input at the boundary, go through the repository trait
//! object for storage access, and map outcomes to response codes. Derived
//! expiry fields are computed against the current UTC date for every
//! response.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use pantry_core::item::CreateItemRequest;
use pantry_core::storage::{ItemFilter, DEFAULT_EXPIRING_WINDOW_DAYS};

use crate::{error::AppError, models::ItemResponse, state::AppState};

/// The current UTC calendar date, the reference point for all derived
/// expiry fields.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 404 response naming the missing id.
fn not_found_response(id: i64) -> Response {
    tracing::warn!(item_id = %id, "Pantry item not found");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("Pantry item with id {id} not found")
        })),
    )
        .into_response()
}

/// Query parameters for listing items.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsQuery {
    /// Substring that must occur in the item name (case-sensitive).
    pub q: Option<String>,
    /// Filter by the opened flag.
    pub opened: Option<bool>,
    /// Inclusive upper bound on the best-before date (ISO 8601: YYYY-MM-DD).
    pub expires_before: Option<NaiveDate>,
}

impl From<ListItemsQuery> for ItemFilter {
    fn from(query: ListItemsQuery) -> Self {
        ItemFilter {
            q: query.q.filter(|q| !q.trim().is_empty()),
            opened: query.opened,
            expires_before: query.expires_before,
        }
    }
}

/// Query parameters for the expiring-soon listing.
#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    /// Size of the window in days from today (default: 7, no upper bound).
    #[serde(default = "default_expiring_days")]
    pub days: i64,
}

fn default_expiring_days() -> i64 {
    DEFAULT_EXPIRING_WINDOW_DAYS
}

/// List items with optional filters (GET /items).
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    tracing::info!(
        q = ?query.q,
        opened = ?query.opened,
        expires_before = ?query.expires_before,
        "Fetching pantry items"
    );

    let filter = ItemFilter::from(query);
    let items = state.items.list(&filter).await?;

    let today = today();
    let body = items
        .iter()
        .map(|item| ItemResponse::from_item(item, today))
        .collect();

    Ok(Json(body))
}

/// List items expiring within a number of days (GET /items/expiring).
pub async fn list_expiring_items(
    State(state): State<AppState>,
    Query(query): Query<ExpiringQuery>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let today = today();
    let filter = ItemFilter::expiring_within(today, query.days);

    let items = state.items.list(&filter).await?;

    tracing::info!(
        count = items.len(),
        days = query.days,
        "Fetched items expiring soon"
    );

    let body = items
        .iter()
        .map(|item| ItemResponse::from_item(item, today))
        .collect();

    Ok(Json(body))
}

/// Get a single item by id (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, Response> {
    let item = state
        .items
        .get(id)
        .await
        .map_err(|e| AppError::from(e).into_response())?
        .ok_or_else(|| not_found_response(id))?;

    Ok(Json(ItemResponse::from_item(&item, today())))
}

/// Create a new item (POST /items).
///
/// On success returns 201 with the stored item and a Location header
/// pointing at the get-by-id route. Validation failures return 400 with one
/// message per violated constraint and persist nothing.
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, Response> {
    tracing::debug!(payload = ?payload, "Received create item request");

    let new_item = payload.validate().map_err(|violations| {
        let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
        tracing::warn!(details = ?details, "Rejected invalid create item request");
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Validation failed",
                "details": details,
            })),
        )
            .into_response()
    })?;

    let item = state
        .items
        .create(&new_item)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(item_id = %item.id, name = %item.name, "Created pantry item");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/items/{}", item.id))],
        Json(ItemResponse::from_item(&item, today())),
    ))
}

/// Flip the opened flag of an item (PATCH /items/{id}/toggle-opened).
pub async fn toggle_opened(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, Response> {
    let item = state
        .items
        .toggle_opened(id)
        .await
        .map_err(|e| AppError::from(e).into_response())?
        .ok_or_else(|| not_found_response(id))?;

    tracing::info!(item_id = %id, is_opened = item.is_opened, "Toggled opened flag");

    Ok(Json(ItemResponse::from_item(&item, today())))
}

/// Delete an item by id (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    let deleted = state
        .items
        .delete(id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    if !deleted {
        return Err(not_found_response(id));
    }

    tracing::info!(item_id = %id, "Deleted pantry item");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_maps_to_filter() {
        let query = ListItemsQuery {
            q: Some("Milk".to_string()),
            opened: Some(true),
            expires_before: NaiveDate::from_ymd_opt(2024, 7, 1),
        };

        let filter = ItemFilter::from(query);

        assert_eq!(filter.q.as_deref(), Some("Milk"));
        assert_eq!(filter.opened, Some(true));
        assert_eq!(
            filter.expires_before,
            NaiveDate::from_ymd_opt(2024, 7, 1)
        );
    }

    #[test]
    fn test_blank_q_imposes_no_constraint() {
        let query = ListItemsQuery {
            q: Some("   ".to_string()),
            ..ListItemsQuery::default()
        };

        let filter = ItemFilter::from(query);

        assert_eq!(filter, ItemFilter::none());
    }

    #[test]
    fn test_expiring_query_defaults_to_seven_days() {
        let query: ExpiringQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.days, 7);
    }
}
