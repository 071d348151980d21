//! Section CLI commands.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::cli::output::{action_failure, format_sections_table, hint, output, CommandOutput};
use crate::domain::models::{Collection, Config, ViewState};
use crate::domain::ports::SectionClient;
use crate::infrastructure::http::{HttpClientConfig, HttpSectionClient};
use crate::infrastructure::notify::TerminalNotifier;
use crate::services::{ConvergenceOutcome, DeleteOutcome, SectionsView};

#[derive(Args, Debug)]
pub struct SectionsArgs {
    #[command(subcommand)]
    pub command: SectionsCommands,
}

#[derive(Subcommand, Debug)]
pub enum SectionsCommands {
    /// List the sections of a house
    List {
        /// House ID
        house_id: String,
    },
    /// Keep a house's sections on screen, refreshing in the background
    Watch {
        /// House ID
        house_id: String,
        /// Stop after this many seconds (default: until Ctrl-C)
        #[arg(long = "for", value_name = "SECS")]
        duration_secs: Option<u64>,
    },
    /// Delete a section and wait until listings reflect it
    Delete {
        /// House ID
        house_id: String,
        /// Section ID
        section_id: String,
    },
}

#[derive(Debug, Serialize)]
struct SectionListOutput {
    house_id: String,
    #[serde(flatten)]
    collection: Collection,
}

impl CommandOutput for SectionListOutput {
    fn to_human(&self) -> String {
        format_sections_table(&self.collection)
    }
}

#[derive(Debug, Serialize)]
struct ViewStateOutput<'a> {
    house_id: &'a str,
    #[serde(flatten)]
    state: &'a ViewState,
}

impl CommandOutput for ViewStateOutput<'_> {
    fn to_human(&self) -> String {
        match self.state {
            ViewState::Loading => hint("Loading house sections..."),
            ViewState::Ready {
                collection,
                fetched_at,
            } => format!(
                "{}\n{}",
                format_sections_table(collection),
                hint(&format!("Updated {}", fetched_at.format("%Y-%m-%d %H:%M:%S UTC")))
            ),
            ViewState::Failed { error, .. } => format!(
                "{}\n{}",
                action_failure(&format!("Could not load house sections: {error}")),
                hint("Please try again shortly. Press Enter to retry now.")
            ),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeleteOutput {
    house_id: String,
    section_id: String,
    acknowledged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    convergence: Option<ConvergenceOutcome>,
}

impl CommandOutput for DeleteOutput {
    fn to_human(&self) -> String {
        match self.convergence {
            Some(ConvergenceOutcome::Exhausted { attempts }) => hint(&format!(
                "Listing still showed the section after {attempts} re-reads; it may take a moment to disappear."
            )),
            Some(outcome) => hint(&format!(
                "Listing updated after {} re-read{}.",
                outcome.attempts(),
                if outcome.attempts() == 1 { "" } else { "s" }
            )),
            None => String::new(),
        }
    }
}

fn build_client(config: &Config) -> Result<Arc<dyn SectionClient>> {
    let client = HttpSectionClient::with_config(HttpClientConfig::from(&config.api))
        .context("Failed to create section service client")?;
    Ok(Arc::new(client))
}

/// Handle section list command
async fn handle_list(client: Arc<dyn SectionClient>, house_id: String, json: bool) -> Result<()> {
    let collection = client
        .list(&house_id)
        .await
        .with_context(|| format!("Failed to list sections of house {house_id}"))?;

    output(
        &SectionListOutput {
            house_id,
            collection,
        },
        json,
    );
    Ok(())
}

/// Resolves on Ctrl-C or once `limit` has elapsed, whichever comes first.
///
/// Built once per watch so a signal that arrives while another arm is busy
/// stays latched.
async fn wait_for_stop(limit: Option<Duration>) {
    let deadline = async {
        match limit {
            Some(limit) => tokio::time::sleep(limit).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(err) = result {
                warn!(error = %err, "Failed to listen for Ctrl-C, waiting for the deadline");
                (&mut deadline).await;
            }
        }
        () = &mut deadline => {}
    }
}

/// Handle section watch command
async fn handle_watch(
    client: Arc<dyn SectionClient>,
    house_id: String,
    duration_secs: Option<u64>,
    json: bool,
) -> Result<()> {
    let notifier = Arc::new(TerminalNotifier::new(json));
    let view = SectionsView::mount(client, house_id, notifier).await;
    let mut updates = view.subscribe();

    let render = |state: &ViewState| {
        output(
            &ViewStateOutput {
                house_id: view.house_id(),
                state,
            },
            json,
        );
    };
    render(&updates.borrow_and_update());

    let stop = wait_for_stop(duration_secs.map(Duration::from_secs));
    tokio::pin!(stop);

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                render(&state);
            }
            line = stdin.next_line(), if stdin_open => {
                match line {
                    Ok(Some(_)) => {
                        // Result lands in the view state and is rendered from there
                        let _ = view.retry().await;
                    }
                    _ => stdin_open = false,
                }
            }
            () = &mut stop => break,
        }
    }

    view.unmount().await;
    Ok(())
}

/// Handle section delete command
async fn handle_delete(
    client: Arc<dyn SectionClient>,
    house_id: String,
    section_id: String,
    json: bool,
) -> Result<()> {
    let notifier = Arc::new(TerminalNotifier::new(json));
    let view = SectionsView::mount(client, house_id.clone(), notifier).await;

    let outcome = view.delete(&section_id).await;
    view.unmount().await;

    match outcome {
        DeleteOutcome::Deleted { convergence, .. } => {
            output(
                &DeleteOutput {
                    house_id,
                    section_id,
                    acknowledged: true,
                    convergence: Some(convergence),
                },
                json,
            );
            Ok(())
        }
        DeleteOutcome::Abandoned { attempts, .. } => {
            bail!("Delete of section {section_id} was acknowledged but the wait was cancelled after {attempts} re-reads")
        }
        DeleteOutcome::Rejected { error, .. } => Err(error)
            .with_context(|| format!("Delete of section {section_id} was rejected")),
    }
}

/// Execute a sections subcommand.
pub async fn execute(args: SectionsArgs, config: &Config, json: bool) -> Result<()> {
    let client = build_client(config)?;

    match args.command {
        SectionsCommands::List { house_id } => handle_list(client, house_id, json).await,
        SectionsCommands::Watch {
            house_id,
            duration_secs,
        } => handle_watch(client, house_id, duration_secs, json).await,
        SectionsCommands::Delete {
            house_id,
            section_id,
        } => handle_delete(client, house_id, section_id, json).await,
    }
}
