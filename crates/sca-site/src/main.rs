//! Main entry point for the SCA site server.

use sca_config::ConfigLoader;
use sca_i18n::Catalog;
use sca_site::{bind, serve, SiteHandler, SiteResult};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> SiteResult<()> {
    let config = ConfigLoader::load()?;
    let _guard = sca_common::init_logging(config.logging.to_logging_config())?;

    info!("Starting SCA site v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.site.locales_dir {
        Some(dir) => {
            info!("Loading translations from {}", dir);
            Catalog::from_dir(dir)?
        }
        None => Catalog::embedded(),
    };

    let handler = SiteHandler::new(
        Arc::new(catalog),
        config.site.resolver(),
        config.site.base_url()?,
    );
    let listener = bind(config.site.socket_addr()?).await?;

    if let Err(e) = serve(listener, Arc::new(handler)).await {
        error!("Server stopped with error: {}", e);
        return Err(e);
    }

    info!("SCA site stopped");
    Ok(())
}
