use std::sync::Arc;

use axum::extract::FromRef;
use posts::PostSource;

use crate::AppState;

impl FromRef<AppState> for Arc<dyn PostSource> {
    fn from_ref(state: &AppState) -> Self {
        state.posts.clone()
    }
}
