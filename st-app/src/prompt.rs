use crate::{AppResult, PromptCommand, prompt_command::HELP};

use st_controller::{ActionOutcome, ControllerError, ControllerHandle};
use st_core::SleepEvent;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Read commands line by line and apply them through `handle` until `quit`
/// or end of input. Rejected commands are reported and the loop continues.
pub async fn run<R, W>(handle: &ControllerHandle, input: R, mut output: W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    say(&mut output, "Type 'help' for a list of commands.\n").await?;

    loop {
        let screen = handle.screen().await?;
        say(&mut output, &format!("{screen}> ")).await?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<PromptCommand>() {
            Ok(command) => command,
            Err(e) => {
                say(&mut output, &format!("error: {e}\n")).await?;
                continue;
            }
        };

        let reply = match command {
            PromptCommand::Quit => break,
            PromptCommand::Help => format!("{HELP}\n"),
            PromptCommand::Screen => format!("screen: {screen}\n"),
            PromptCommand::Action(action) => match handle.dispatch(action).await {
                Ok(ActionOutcome::ScreenChanged(screen)) => format!("screen: {screen}\n"),
                Ok(ActionOutcome::Recorded(event)) => describe(&event),
                Err(ControllerError::ChannelClosed) => {
                    return Err(ControllerError::ChannelClosed.into());
                }
                Err(e) => format!("error: {}\n", e.user_message()),
            },
        };
        say(&mut output, &reply).await?;
    }

    Ok(())
}

fn describe(event: &SleepEvent) -> String {
    let at = event
        .occurred_at()
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| format!("{} ms", event.timestamp_millis));
    format!("recorded sleep {} at {at}\n", event.kind)
}

async fn say<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> AppResult<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
