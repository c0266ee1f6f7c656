use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::ConnectInfo,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use uuid::Uuid;

use portal_content::Visit;
use portal_infra::DocumentStore;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

const VISITOR_COOKIE: &str = "visitor_id";
const ONE_YEAR_SECS: u64 = 365 * 24 * 60 * 60;

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, v)| *k == name && !v.is_empty())
        .map(|(_, v)| v)
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

/// Count a page view; new visitors get a year-long id cookie.
pub async fn track_visit(
    Extension(services): Extension<Arc<AppServices>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Response {
    let existing = cookie_value(&headers, VISITOR_COOKIE).map(str::to_string);
    let is_new = existing.is_none();
    let visitor_id = existing.unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    let visit = Visit {
        visitor_id: visitor_id.clone(),
        ip: peer.map(|ConnectInfo(addr)| addr.ip().to_string()).unwrap_or_default(),
        user_agent: header_str(&headers, header::USER_AGENT).unwrap_or_default(),
        referrer: header_str(&headers, header::REFERER),
    };

    let recorded = services
        .blocking(move |s| {
            s.visits.modify(|stats| {
                stats.record_visit(&visit, Utc::now());
                Ok::<_, ApiError>(())
            })
        })
        .await;
    if let Err(e) = recorded {
        return e.into_response();
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    if is_new {
        let cookie = format!("{VISITOR_COOKIE}={visitor_id}; Path=/; Max-Age={ONE_YEAR_SECS}; HttpOnly");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

pub async fn visitor_stats(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.blocking(|s| Ok(s.visits.load()?)).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => e.into_response(),
    }
}
