//! HTTP handlers for the portfolio page, JSON API, and CV download

use axum::{
    extract::{Json, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use crate::contact::{self, ContactError, ContactMessage};
use crate::profile::skills::PanelId;
use crate::render::{html, listing, DisplayRow};
use crate::server::ServerState;
use crate::types::SectionId;

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub sections: Vec<&'static str>,
}

/// One detail panel's display list
#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub panel: PanelId,
    pub title: String,
    pub subtitle: String,
    /// Transition duration shared by every bar, in milliseconds
    pub reveal_ms: u64,
    pub rows: Vec<DisplayRow>,
}

/// The rendered single page
pub async fn page_handler(State(state): State<ServerState>) -> Html<String> {
    Html(html::render_page(&state.profile, &state.config))
}

/// Status handler
pub async fn status_handler(State(_state): State<ServerState>) -> impl IntoResponse {
    let response = StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sections: SectionId::all().iter().map(|s| s.as_anchor()).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Full profile as JSON
pub async fn profile_handler(State(state): State<ServerState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.profile.as_ref().clone())).into_response()
}

/// Display list for one detail panel
pub async fn skills_handler(
    State(state): State<ServerState>,
    Path(panel): Path<String>,
) -> impl IntoResponse {
    let Some(id) = PanelId::from_slug(&panel) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Unknown skills panel",
                "details": format!("no panel named '{}'", panel)
            })),
        )
            .into_response();
    };

    // every PanelId has a panel in the built-in profile
    let Some(detail) = state.profile.panel(id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Panel not present in profile" })),
        )
            .into_response();
    };

    let response = SkillsResponse {
        panel: id,
        title: detail.title.clone(),
        subtitle: detail.subtitle.clone(),
        reveal_ms: state.config.animation.reveal_ms,
        rows: listing::display_list(&detail.listing, &state.config.animation),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Contact submission. Success returns the receipt; failures carry a
/// `retryable` flag so the form can surface a retry prompt.
pub async fn contact_handler(
    State(state): State<ServerState>,
    Json(req): Json<ContactMessage>,
) -> impl IntoResponse {
    match contact::submit(&req, &state.config.contact).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(e @ ContactError::Unavailable) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": e.to_string(),
                "retryable": true
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": e.to_string(),
                "retryable": false
            })),
        )
            .into_response(),
    }
}

/// Where the CV document lives: the configured path, or the profile's file
/// name resolved against the working directory.
pub fn cv_location(state: &ServerState) -> PathBuf {
    state
        .config
        .assets
        .cv_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(&state.profile.identity.cv_file))
}

/// CV download handler
pub async fn cv_handler(State(state): State<ServerState>) -> impl IntoResponse {
    let path = cv_location(&state);

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "cv.pdf".to_string());
            let mut headers = HeaderMap::new();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            );
            if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename)) {
                headers.insert(header::CONTENT_DISPOSITION, value);
            }
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "CV document not available",
                "details": format!("expected at {}", path.display())
            })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile;
    use std::sync::Arc;

    fn state() -> ServerState {
        ServerState {
            config: Arc::new(Config::default()),
            profile: Arc::new(profile::builtin().clone()),
        }
    }

    #[test]
    fn test_cv_location_prefers_configured_path() {
        let mut config = Config::default();
        config.assets.cv_path = Some(PathBuf::from("/tmp/custom.pdf"));
        let state = ServerState {
            config: Arc::new(config),
            profile: Arc::new(profile::builtin().clone()),
        };
        assert_eq!(cv_location(&state), PathBuf::from("/tmp/custom.pdf"));
    }

    #[test]
    fn test_cv_location_falls_back_to_profile_file() {
        let state = state();
        assert_eq!(
            cv_location(&state),
            PathBuf::from("CV_Milos_Avramovic_Eng.pdf")
        );
    }
}
