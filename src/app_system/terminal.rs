use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};
use crate::purchase_view::{DispatchOutcome, PurchaseAction, PurchaseView, UiEvent, USAGE};
use super::AppError;

/// Line-oriented event loop for the purchase screen.
///
/// Each line is handled to completion before the next is read, and the screen
/// is re-rendered after every event that can change it. End of input quits.
#[instrument(skip_all)]
pub async fn run_terminal<R, W>(view: &mut PurchaseView, input: R, output: &mut W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(view.render().await?.as_bytes()).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let event = match line.parse::<UiEvent>() {
            Ok(event) => event,
            Err(e) => {
                debug!(error = %e, "Unrecognised input");
                write_line(output, &format!("{e}\n{USAGE}")).await?;
                continue;
            }
        };

        match event {
            UiEvent::Quit => break,
            UiEvent::Help => {
                write_line(output, USAGE).await?;
                continue;
            }
            UiEvent::Show => {}
            UiEvent::SelectTab(tab) => view.select_tab(tab),
            UiEvent::Press { order_id, action: PurchaseAction::Details } => {
                let text = view
                    .details(&order_id)
                    .await?
                    .unwrap_or_else(|| format!("{order_id}: no such order"));
                write_line(output, &text).await?;
                continue;
            }
            UiEvent::Press { order_id, action } => {
                let notice = match view.press(&order_id, action).await? {
                    DispatchOutcome::Transitioned { from, to } => format!("{order_id}: {from} -> {to}"),
                    DispatchOutcome::NoTransition => format!("{order_id}: {} (nothing to change)", action.label()),
                    DispatchOutcome::NotOffered => {
                        warn!(%order_id, action = action.label(), "Button not available for order");
                        format!("{order_id}: {} is not available", action.label())
                    }
                    DispatchOutcome::UnknownOrder => format!("{order_id}: no such order"),
                };
                write_line(output, &notice).await?;
            }
        }

        output.write_all(view.render().await?.as_bytes()).await?;
        output.flush().await?;
    }

    info!("Terminal session ended");
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
