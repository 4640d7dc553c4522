use axum::{
    routing::post,
    Router,
    extract::{rejection::JsonRejection, Json, State},
    middleware,
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::error::AppError;
use crate::api::models::DownloadRequest;
use crate::api::origin::check_origin;
use crate::api::response;
use crate::relay;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    let static_dir = app_state.config.static_dir.clone();
    // Unknown paths get index.html so client-side routes still load the page.
    let assets = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/download", post(download_handler))
        .fallback_service(assets)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn_with_state(app_state.clone(), check_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn download_handler(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(reason = %rejection, "rejected download request body");
            return AppError::InvalidInput("Invalid request body".to_string()).into_response();
        }
    };

    let url = req.url.unwrap_or_default();
    match relay::extract(&state.upstream, &url).await {
        Ok(data) => response::success(data).into_response(),
        Err(err) => {
            match &err {
                AppError::InvalidInput(msg) => warn!(url = %url, "{}", msg),
                other => error!(url = %url, error = ?other, "download failed"),
            }
            err.into_response()
        }
    }
}
