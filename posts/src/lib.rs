use serde::{Deserialize, Serialize};

pub mod source;
pub mod validate;

pub use source::{EmbeddedPosts, JsonFilePosts, PostSource, StaticPosts};

/// A single post as handed out by a [`PostSource`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostRecord {
    pub id: i64,
    #[serde(alias = "data")]
    pub content: String,
}

impl PostRecord {
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// The display line for this post, `<id> : <content>`.
    pub fn line(&self) -> String {
        format!("{} : {}", self.id, self.content)
    }
}
