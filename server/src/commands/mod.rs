use clap::Subcommand;

use crate::Result;

pub(crate) mod print;
pub(crate) mod validate;

#[derive(Subcommand, Default)]
pub(crate) enum Command {
    /// Serve the post list over HTTP
    #[default]
    Serve,
    /// Print one line per post to stdout
    Print,
    /// Check the configured posts for duplicate ids
    Validate,
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Print => print::print_posts(),
            Command::Validate => validate::validate(),
        }
    }
}
