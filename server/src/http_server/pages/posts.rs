use std::sync::Arc;

use axum::extract::State;
use maud::Markup;
use posts::PostSource;

use crate::http_server::{templates::posts::PostListView, ResponseResult};

/// Just the list, no page chrome.
pub(crate) async fn posts_fragment(
    State(posts): State<Arc<dyn PostSource>>,
) -> ResponseResult<Markup> {
    Ok(PostListView::new(posts.as_ref()).render()?)
}
