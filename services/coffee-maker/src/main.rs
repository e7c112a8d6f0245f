//! coffee-maker Service

use coffee_bootstrap::run;
use coffee_maker::app::build_router;
use tracing::info;

const CONFIG_DIR: &str = "config";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run(CONFIG_DIR, |_config| async move {
        info!("Initializing coffee-maker Service...");
        build_router(CONFIG_DIR)
    })
    .await
}
