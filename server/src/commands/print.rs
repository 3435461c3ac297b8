use std::io::Write;

use color_eyre::eyre::WrapErr;
use posts::PostSource;

use crate::{AppConfig, Result};

pub(crate) fn print_posts() -> Result<()> {
    let config = AppConfig::from_env()?;

    let stdout = std::io::stdout();
    print_from_config(&config, &mut stdout.lock())
}

/// `out` only ever receives post lines. Logging goes through the tracing
/// subscriber, which writes to stderr.
pub(crate) fn print_from_config(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let source = config.posts_source()?;

    write_lines(source.as_ref(), out)
}

pub(crate) fn write_lines(source: &dyn PostSource, out: &mut impl Write) -> Result<()> {
    for post in source.posts()? {
        writeln!(out, "{}", post.line()).wrap_err("Couldn't write post line")?;
    }

    Ok(())
}
