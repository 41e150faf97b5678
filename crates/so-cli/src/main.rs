mod args;

use std::path::{Path, PathBuf};

use serde::Serialize;
use so_core::models::{AudioUpload, NewAgent, NewCampaign, NewWork, OrchestratorConfig};
use so_core::services::config_loader;
use so_core::{Orchestrator, OrchestratorError};

use crate::args::{Command, USAGE};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    let invocation = match args::parse(&argv) {
        Ok(inv) => inv,
        Err(msg) => {
            eprintln!("{msg}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let _guard = if invocation.debug {
        Some(setup_debug_logging())
    } else {
        setup_stderr_logging();
        None
    };

    let config = resolve_config(invocation.config.as_deref())?;
    let orchestrator = Orchestrator::open(&config).await?;
    run(&orchestrator, invocation.command).await
}

/// Configure file-based tracing to `.slot-orchestrator-debug.log` in CWD.
/// Returns the guard that must be held alive for the duration of the program.
fn setup_debug_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", ".slot-orchestrator-debug.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .init();

    guard
}

fn setup_stderr_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// An explicit `--config` must exist. Without one, the default file in CWD is
/// used when present, otherwise the environment alone.
fn resolve_config(explicit: Option<&Path>) -> color_eyre::Result<OrchestratorConfig> {
    if let Some(path) = explicit {
        return Ok(config_loader::load(path)?);
    }
    match config_loader::load(&PathBuf::from(config_loader::CONFIG_FILENAME)) {
        Err(OrchestratorError::ConfigNotFound(_)) => {
            tracing::debug!("no config file; reading environment");
            Ok(config_loader::from_env()?)
        }
        other => Ok(other?),
    }
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(orchestrator: &Orchestrator, command: Command) -> color_eyre::Result<()> {
    match command {
        Command::Data => print_json(&orchestrator.get_orchestrator_data().await),
        Command::Slots => print_json(&orchestrator.get_slots().await),
        Command::Agents => print_json(&orchestrator.get_agents().await),
        Command::Workflows => print_json(&orchestrator.workflows().await),
        Command::CreateAgent { name, kind } => {
            let agent = orchestrator.create_agent(NewAgent { name, kind }).await?;
            print_json(&agent)
        }
        Command::Assign { slot_id, agent_id } => {
            let slot = orchestrator
                .assign_agent(&slot_id, agent_id.as_deref())
                .await?;
            print_json(&slot)
        }
        Command::CreateWork {
            title,
            writers,
            iswc,
            audio,
        } => {
            let audio = match audio {
                Some(path) => Some(read_audio(&path).await?),
                None => None,
            };
            let work = orchestrator
                .create_work(
                    NewWork {
                        title,
                        iswc,
                        writers,
                    },
                    audio,
                )
                .await?;
            print_json(&work)
        }
        Command::CreateCampaign {
            name,
            platform,
            strategy,
        } => {
            let campaign = orchestrator
                .create_campaign(NewCampaign {
                    name,
                    platform,
                    content_strategy: strategy,
                })
                .await?;
            print_json(&campaign)
        }
        Command::Trigger(id) => print_json(&orchestrator.trigger_campaign(&id).await?),
        Command::Activate(id) => toggle(orchestrator, &id, true).await,
        Command::Deactivate(id) => toggle(orchestrator, &id, false).await,
    }
}

async fn toggle(orchestrator: &Orchestrator, id: &str, active: bool) -> color_eyre::Result<()> {
    let ok = orchestrator.set_workflow_active(id, active).await;
    print_json(&serde_json::json!({ "workflowId": id, "active": active, "success": ok }))
}

async fn read_audio(path: &Path) -> color_eyre::Result<AudioUpload> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    Ok(AudioUpload {
        mime_type: audio_mime(path).map(String::from),
        file_name,
        bytes,
    })
}

fn audio_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "flac" => Some("audio/flac"),
        "ogg" => Some("audio/ogg"),
        "m4a" => Some("audio/mp4"),
        _ => None,
    }
}
