use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use portal_content::GridCard;
use portal_infra::DocumentStore;

use crate::app::errors::{self, ApiError};
use crate::app::services::AppServices;

/// Homepage deck: enabled cards in display order.
pub async fn list_enabled_cards(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.blocking(|s| Ok(s.cards.load()?)).await {
        Ok(deck) => Json(deck.enabled_sorted()).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_all_cards(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.blocking(|s| Ok(s.cards.load()?)).await {
        Ok(deck) => Json(deck).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn save_card(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<GridCard>, JsonRejection>,
) -> Response {
    let Json(card) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };
    let id = card.id.clone();

    let saved = services
        .blocking(move |s| s.cards.modify(|deck| deck.upsert(card).map_err(ApiError::from)))
        .await;

    match saved {
        Ok(()) => {
            tracing::info!(%id, "card saved");
            Json(serde_json::json!({ "message": "Card saved successfully" })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn toggle_card(Extension(services): Extension<Arc<AppServices>>, Path(id): Path<String>) -> Response {
    let toggled = {
        let id = id.clone();
        services
            .blocking(move |s| s.cards.modify(|deck| deck.toggle(&id).map_err(ApiError::from)))
            .await
    };

    match toggled {
        Ok(enabled) => {
            tracing::info!(%id, enabled, "card toggled");
            Json(serde_json::json!({
                "message": "Card toggled successfully",
                "enabled": enabled,
            }))
            .into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn delete_card(Extension(services): Extension<Arc<AppServices>>, Path(id): Path<String>) -> Response {
    let removed = {
        let id = id.clone();
        services
            .blocking(move |s| s.cards.modify(|deck| deck.remove(&id).map_err(ApiError::from)))
            .await
    };

    match removed {
        Ok(_) => {
            tracing::info!(%id, "card deleted");
            Json(serde_json::json!({ "message": "Card deleted successfully" })).into_response()
        }
        Err(e) => e.into_response(),
    }
}
