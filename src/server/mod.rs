mod handlers;
mod router;
mod state;

pub use router::create_router;
pub use state::AppState;

use crate::config::Config;
use crate::utils::error::Result;
use tokio::net::TcpListener;

/// Bind the configured address and serve until the process exits.
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(
        "Promotion lookup listening on http://{} (id format: {:?})",
        listener.local_addr()?,
        state.lookup().id_format()
    );

    serve(listener, state).await
}

/// Serve on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
