use maud::{html, Markup, Render};
use posts::{PostRecord, PostSource};

/// Fetches posts from its source on every render and lays them out one line
/// per post.
///
/// Nothing is cached between renders and source failures come straight back
/// out of [`PostListView::render`].
pub(crate) struct PostListView<'a, S: PostSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: PostSource + ?Sized> PostListView<'a, S> {
    pub(crate) fn new(source: &'a S) -> Self {
        Self { source }
    }

    #[tracing::instrument(name = "PostListView::render", skip(self), err)]
    pub(crate) fn render(&self) -> crate::Result<Markup> {
        let posts = self.source.posts()?;
        tracing::debug!(count = posts.len(), "Rendering posts");

        Ok(PostLines(&posts).render())
    }
}

/// The line markup for an already fetched list. Duplicate ids are rendered
/// as-is.
pub(crate) struct PostLines<'a>(pub(crate) &'a [PostRecord]);

impl Render for PostLines<'_> {
    fn render(&self) -> Markup {
        html! {
          div class="flex flex-col" {
            @for post in self.0 {
              p class="my-4" data-key=(post.id) { (post.id) " : " (post.content) }
            }
          }
        }
    }
}
