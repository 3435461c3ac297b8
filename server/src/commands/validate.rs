use posts::{validate::duplicate_ids, PostSource};

use crate::{AppConfig, Result};

pub(crate) fn validate() -> Result<()> {
    let source = AppConfig::from_env()?.posts_source()?;

    validate_source(source.as_ref())
}

pub(crate) fn validate_source(source: &dyn PostSource) -> Result<()> {
    let posts = source.posts()?;
    println!("Validating {} posts", posts.len());

    let duplicates = duplicate_ids(&posts);
    if !duplicates.is_empty() {
        let report = duplicates
            .iter()
            .map(|(id, count)| format!("{id} (x{count})"))
            .collect::<Vec<_>>()
            .join(", ");

        return Err(color_eyre::eyre::eyre!(
            "Post ids must be unique. Found these duplicates {report}"
        ));
    }

    println!("Posts Valid! ✅");

    Ok(())
}

#[cfg(test)]
mod test {
    use posts::{PostRecord, StaticPosts};

    use super::*;

    #[test]
    fn unique_ids_pass() {
        let source = StaticPosts(vec![PostRecord::new(1, "a"), PostRecord::new(2, "b")]);

        validate_source(&source).unwrap();
    }

    #[test]
    fn empty_passes() {
        validate_source(&StaticPosts::default()).unwrap();
    }

    #[test]
    fn duplicates_are_reported() {
        let source = StaticPosts(vec![
            PostRecord::new(1, "a"),
            PostRecord::new(1, "b"),
            PostRecord::new(2, "c"),
        ]);

        let err = validate_source(&source).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Post ids must be unique. Found these duplicates 1 (x2)"
        );
    }

    #[test]
    fn embedded_posts_are_valid() {
        let source = posts::EmbeddedPosts::from_static_data().unwrap();

        validate_source(&source).unwrap();
    }
}
