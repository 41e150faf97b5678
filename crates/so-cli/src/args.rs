use std::path::PathBuf;

use so_core::models::agent::MIRRORED_AGENT_TYPE;

/// Global flags plus the single operation to run.
#[derive(Debug, PartialEq)]
pub struct Invocation {
    pub config: Option<PathBuf>,
    pub debug: bool,
    pub command: Command,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Data,
    Slots,
    Agents,
    Workflows,
    CreateAgent {
        name: String,
        kind: String,
    },
    Assign {
        slot_id: String,
        agent_id: Option<String>,
    },
    CreateWork {
        title: String,
        writers: String,
        iswc: Option<String>,
        audio: Option<PathBuf>,
    },
    CreateCampaign {
        name: String,
        platform: String,
        strategy: String,
    },
    Trigger(String),
    Activate(String),
    Deactivate(String),
}

pub const USAGE: &str = "\
usage: slot-orchestrator [--config PATH] [--debug] <command>

commands:
  data                                    refresh and print all state
  slots                                   print slots
  agents                                  print agents
  workflows                               print engine workflows
  create-agent <name> [type]              create an agent (type defaults to Automation)
  assign <slot-id> [agent-id]             assign an agent, or clear the slot
  create-work --title T --writers W [--iswc I] [--audio PATH]
  create-campaign <name> <platform> <strategy>
  trigger <campaign-id>
  activate <workflow-id>
  deactivate <workflow-id>";

/// Parse everything after the program name.
pub fn parse(args: &[String]) -> Result<Invocation, String> {
    let mut config = None;
    let mut debug = false;
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" => debug = true,
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            _ => rest.push(arg.as_str()),
        }
    }

    let (name, operands) = rest.split_first().ok_or("missing command")?;
    let command = parse_command(name, operands)?;
    Ok(Invocation {
        config,
        debug,
        command,
    })
}

fn parse_command(name: &str, operands: &[&str]) -> Result<Command, String> {
    let arg = |i: usize, what: &str| -> Result<String, String> {
        operands
            .get(i)
            .map(|s| s.to_string())
            .ok_or_else(|| format!("{name}: missing {what}"))
    };

    let command = match name {
        "data" => Command::Data,
        "slots" => Command::Slots,
        "agents" => Command::Agents,
        "workflows" => Command::Workflows,
        "create-agent" => Command::CreateAgent {
            name: arg(0, "name")?,
            kind: operands
                .get(1)
                .map_or_else(|| MIRRORED_AGENT_TYPE.to_string(), |s| s.to_string()),
        },
        "assign" => Command::Assign {
            slot_id: arg(0, "slot id")?,
            agent_id: operands.get(1).map(|s| s.to_string()),
        },
        "create-work" => parse_create_work(operands)?,
        "create-campaign" => Command::CreateCampaign {
            name: arg(0, "name")?,
            platform: arg(1, "platform")?,
            strategy: arg(2, "content strategy")?,
        },
        "trigger" => Command::Trigger(arg(0, "campaign id")?),
        "activate" => Command::Activate(arg(0, "workflow id")?),
        "deactivate" => Command::Deactivate(arg(0, "workflow id")?),
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(command)
}

fn parse_create_work(operands: &[&str]) -> Result<Command, String> {
    let mut title = None;
    let mut writers = None;
    let mut iswc = None;
    let mut audio = None;

    let mut iter = operands.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .map(|s| s.to_string())
            .ok_or_else(|| format!("create-work: {flag} needs a value"))?;
        match *flag {
            "--title" => title = Some(value),
            "--writers" => writers = Some(value),
            "--iswc" => iswc = Some(value),
            "--audio" => audio = Some(PathBuf::from(value)),
            other => return Err(format!("create-work: unknown flag {other}")),
        }
    }

    Ok(Command::CreateWork {
        title: title.ok_or("create-work: --title is required")?,
        writers: writers.unwrap_or_default(),
        iswc,
        audio,
    })
}
