use std::sync::Arc;

use axum::extract::State;
use maud::{html, Markup};
use posts::PostSource;

use crate::http_server::{
    templates::{base, posts::PostListView},
    ResponseResult,
};

pub(crate) async fn home_page(State(posts): State<Arc<dyn PostSource>>) -> ResponseResult<Markup> {
    let post_list = PostListView::new(posts.as_ref()).render()?;

    Ok(base(html! {
      h1 class="text-3xl" { "Posts" }

      (post_list)
    }))
}
