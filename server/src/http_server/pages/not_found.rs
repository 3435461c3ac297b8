use axum::http::{StatusCode, Uri};
use maud::{html, Markup};

use crate::http_server::templates::base;

pub(crate) async fn not_found(uri: Uri) -> (StatusCode, Markup) {
    tracing::debug!(path = uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        base(html! {
          h1 class="text-3xl" { "Not Found" }
          p {
            "Nothing lives at " code { (uri.path()) } ". "
            a href="/" { "Back to the posts" }
          }
        }),
    )
}
