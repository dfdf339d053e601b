mod actor_framework;
mod domain;
mod order_actor;
mod clients;
mod purchase_view;

mod app_system;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{info, Instrument};
use crate::app_system::{demo_orders, load_seed_file, run_terminal, setup_tracing, AppError, Cli, PurchaseSystem};
use crate::purchase_view::{PurchaseView, Renderer};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting purchase tracker");

    let system = PurchaseSystem::new(cli.channel_capacity);

    let seed = match &cli.orders {
        Some(path) => load_seed_file(path).await?,
        None => demo_orders(),
    };
    system.seed(seed).await?;

    let mut view = PurchaseView::new(system.order_client.clone())
        .with_renderer(Renderer::new(cli.color));

    let span = tracing::info_span!("purchase_screen");
    let session = async {
        let mut stdout = tokio::io::stdout();
        run_terminal(&mut view, BufReader::new(tokio::io::stdin()), &mut stdout).await
    }
    .instrument(span)
    .await;

    drop(view);
    system.shutdown().await?;
    session?;

    info!("Purchase tracker exited");
    Ok(())
}
