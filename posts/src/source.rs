use std::path::{Path, PathBuf};

use color_eyre::{eyre::Context, Result};
use tracing::instrument;

use crate::PostRecord;

static EMBEDDED_POSTS_JSON: &str = include_str!("../data/posts.json");

/// Something that can hand out the current list of posts.
///
/// Called once per render with no arguments. Failures are returned as-is and
/// are the caller's to deal with.
pub trait PostSource: Send + Sync {
    fn posts(&self) -> Result<Vec<PostRecord>>;
}

impl<F> PostSource for F
where
    F: Fn() -> Result<Vec<PostRecord>> + Send + Sync,
{
    fn posts(&self) -> Result<Vec<PostRecord>> {
        self()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticPosts(pub Vec<PostRecord>);

impl PostSource for StaticPosts {
    fn posts(&self) -> Result<Vec<PostRecord>> {
        Ok(self.0.clone())
    }
}

/// The post list compiled into the binary from `data/posts.json`.
#[derive(Debug, Clone)]
pub struct EmbeddedPosts(StaticPosts);

impl EmbeddedPosts {
    pub fn from_static_data() -> Result<Self> {
        let posts = parse_posts(EMBEDDED_POSTS_JSON).wrap_err("Embedded posts failed to parse")?;

        Ok(Self(StaticPosts(posts)))
    }
}

impl PostSource for EmbeddedPosts {
    fn posts(&self) -> Result<Vec<PostRecord>> {
        self.0.posts()
    }
}

/// Reads a JSON file of posts on every call.
#[derive(Debug, Clone)]
pub struct JsonFilePosts {
    path: PathBuf,
}

impl JsonFilePosts {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostSource for JsonFilePosts {
    #[instrument(name = "JsonFilePosts::posts", skip(self), fields(path = %self.path.display()), err)]
    fn posts(&self) -> Result<Vec<PostRecord>> {
        let contents = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Could not read posts from {}", self.path.display()))?;

        let posts = parse_posts(&contents)
            .wrap_err_with(|| format!("Posts file {} is not valid", self.path.display()))?;
        tracing::debug!(count = posts.len(), "Loaded posts from file");

        Ok(posts)
    }
}

pub fn parse_posts(json: &str) -> Result<Vec<PostRecord>> {
    serde_json::from_str(json).wrap_err("Posts should be a JSON array of {id, content} objects")
}
