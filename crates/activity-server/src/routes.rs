use axum::{response::Redirect, routing::get, Router};
use tower_http::services::ServeDir;

use activity_shared::config::StaticFilesSettings;

/// `/` redirects to the front-end index; `/static` serves the asset directory.
pub fn static_routes(cfg: &StaticFilesSettings) -> Router {
    let index = format!("/static/{}", cfg.index.trim_start_matches('/'));

    Router::new()
        .route(
            "/",
            get(move || {
                let index = index.clone();
                async move { Redirect::temporary(&index) }
            }),
        )
        .nest_service("/static", ServeDir::new(&cfg.dir))
}
