use tracing::info;

use crate::{
    http_server::{routes, server::run_server},
    AppState, Result,
};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;
    let port = app_state.app.port;

    info!(port, "Starting post list server");
    run_server(routes::make_router().with_state(app_state), port).await?;

    info!("Main Returning");

    Ok(())
}
