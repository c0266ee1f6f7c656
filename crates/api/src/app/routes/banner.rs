use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};

use portal_content::BannerUpdate;
use portal_infra::DocumentStore;

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn get_banner(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.blocking(|s| Ok(s.current_banner()?)).await {
        Ok(banner) => Json(banner).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_banner(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<BannerUpdate>, JsonRejection>,
) -> Response {
    let Json(update) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    let saved = services
        .blocking(move |s| {
            let banner = update.apply(&s.current_banner()?);
            s.banner.save(&banner)?;
            Ok(banner)
        })
        .await;

    let banner = match saved {
        Ok(b) => b,
        Err(e) => return e.into_response(),
    };

    tracing::info!(visible = banner.style.is_visible, image = %banner.image, "banner updated");
    Json(banner).into_response()
}
