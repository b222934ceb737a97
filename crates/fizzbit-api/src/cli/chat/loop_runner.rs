//! Interactive chat loop for the terminal widget.
//!
//! Reads lines with rustyline-async and drives a [`ChatController`] whose
//! view is the terminal. Replies arrive on a background task while the
//! prompt stays live, so a second message sent too early gets the busy
//! notice just like the web widget.

use std::sync::Arc;

use console::style;

use fizzbit_core::widget::view::{ChatView, Notice};
use fizzbit_core::widget::{ChatController, Mood, SubmitOutcome};
use fizzbit_infra::gateway_client::GatewayHttpClient;
use fizzbit_types::config::WidgetConfig;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::view::{prompt_for, TerminalView};

type Controller = ChatController<GatewayHttpClient>;

/// Run the chat loop against the gateway at `base_url` until the user quits.
pub async fn run_chat_loop(base_url: &str, config: WidgetConfig) -> anyhow::Result<()> {
    let client = GatewayHttpClient::new(base_url)?;
    print_welcome_banner(client.base_url());

    // A failed probe is reported but the widget still starts.
    match client.health().await {
        Ok(health) => {
            tracing::debug!(status = %health.status, "Gateway health probe succeeded");
        }
        Err(err) => {
            tracing::warn!(error = %err, "Gateway health probe failed");
            println!(
                "  {} {}",
                style("!").yellow().bold(),
                style(format!("Gateway at {} is not answering yet.", client.base_url())).dim()
            );
            println!();
        }
    }

    let (mut input, writer) = ChatInput::new(prompt_for(Mood::Happy))?;
    let view = Arc::new(TerminalView::new(writer));
    let controller = ChatController::new(client, view.clone(), config);

    controller.start();
    controller.open();

    loop {
        match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                view.hint("Use /quit or Ctrl+D to leave.");
            }
            InputEvent::Line(line) => {
                if let Some(command) = commands::parse(&line) {
                    if !handle_command(command, &controller, &view).await {
                        break;
                    }
                } else {
                    send_line(&line, &controller, &view);
                }
            }
        }
        input.update_prompt(&prompt_for(view.mood()));
    }

    controller.shutdown();
    view.finish();
    input.flush();
    println!("  {}", style("😼 Fizzbit drifts back to Saturn. Later, Earthling.").dim());
    Ok(())
}

fn send_line(line: &str, controller: &Controller, view: &TerminalView) {
    controller.set_input(line);
    match controller.submit() {
        SubmitOutcome::PanelClosed => {
            view.hint("The chat panel is closed. /open to talk to Fizzbit.");
        }
        SubmitOutcome::Sent(_) => tracing::debug!("Message sent to gateway"),
        SubmitOutcome::Empty | SubmitOutcome::Busy => {}
    }
}

/// Returns `false` when the loop should end.
async fn handle_command(
    command: ChatCommand,
    controller: &Controller,
    view: &TerminalView,
) -> bool {
    match command {
        ChatCommand::Open => {
            if !controller.open() {
                view.hint("The chat panel is already open.");
            }
        }
        ChatCommand::Close => {
            if !controller.close() {
                view.hint("The chat panel is already closed.");
            }
        }
        ChatCommand::Skip => {
            if controller.is_revealing() {
                controller.skip_reveal();
            } else {
                view.hint("Nothing to skip.");
            }
        }
        ChatCommand::Fact => match controller.transport().space_fact().await {
            Ok(fact) => view.line(&format!("  {} {}", style("✦").magenta().bold(), fact.fact)),
            Err(err) => {
                tracing::warn!(error = %err, "Space fact request failed");
                view.notice(&Notice::error("Couldn't reach the fact satellite."));
            }
        },
        ChatCommand::Health => match controller.transport().health().await {
            Ok(health) => view.notice(&Notice::success(format!(
                "{} {}",
                health.status,
                style(health.message).dim()
            ))),
            Err(err) => view.notice(&Notice::error(err.to_string())),
        },
        ChatCommand::Help => {
            for line in commands::help_lines() {
                view.line(&line);
            }
        }
        ChatCommand::Quit => return false,
        ChatCommand::Unknown(cmd) => {
            view.hint(&format!("Unknown command {cmd}. Type /help for commands."));
        }
    }
    true
}
