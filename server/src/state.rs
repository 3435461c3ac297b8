use std::{path::PathBuf, sync::Arc};

use color_eyre::eyre::WrapErr;
use posts::{EmbeddedPosts, JsonFilePosts, PostSource};
use tracing::instrument;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub posts_path: Option<PathBuf>,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env", err)]
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .wrap_err_with(|| format!("Invalid PORT {port}, should be a port number"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            posts_path: lookup("POSTS_PATH").map(PathBuf::from),
        })
    }

    /// `POSTS_PATH` wins when set, otherwise the posts bundled into the binary.
    pub fn posts_source(&self) -> crate::Result<Arc<dyn PostSource>> {
        match &self.posts_path {
            Some(path) => {
                let source = JsonFilePosts::new(path);
                tracing::info!(path = %source.path().display(), "Reading posts from file");

                Ok(Arc::new(source))
            }
            None => {
                tracing::info!("Using embedded posts");

                Ok(Arc::new(EmbeddedPosts::from_static_data()?))
            }
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub posts: Arc<dyn PostSource>,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> crate::Result<Self> {
        let app = AppConfig::from_env()?;
        let posts = app.posts_source()?;

        Ok(Self { app, posts })
    }
}
