use axum::{routing::get, Router};

use super::pages;
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home::home_page))
        .route("/posts", get(pages::posts::posts_fragment))
        .fallback(pages::not_found::not_found)
}
