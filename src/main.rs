mod logging;
mod simulate;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use hoopfacts::skill::Skill;
use hoopfacts_core::{
    config::{self, SkillConfig},
    request::RequestEnvelope,
    response::{ResponseEnvelope, ResponsePayload},
};
use simulate::SimEvent;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hoopfacts",
    version,
    about = "Basketball Curiosities, a localized fact-telling voice skill"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "hoopfacts.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Handle one request envelope (JSON) and print the response envelope.
    Invoke {
        /// File containing the request. Reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Build a synthetic request and print the response envelope.
    Simulate {
        #[command(subcommand)]
        event: SimEvent,

        /// Request locale tag.
        #[arg(short, long, default_value = "en-US", global = true)]
        locale: String,
    },
    /// List the facts for a locale.
    Facts {
        /// Request locale tag.
        #[arg(short, long, default_value = "en-US")]
        locale: String,
    },
    /// Check the localization and fact tables.
    Validate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _log_guard = logging::init(&cfg.logging)?;
    logging::config_source(&cli.config);

    match cli.command {
        Commands::Invoke { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read request from stdin")?;
                    buf
                }
            };
            let event = RequestEnvelope::from_json(&raw)?;
            let skill = Skill::from_config(&cfg.skill)?;
            print_envelope(&skill.handle(&event))?;
        }
        Commands::Simulate { event, locale } => {
            let skill = Skill::from_config(&cfg.skill)?;
            let request = simulate::build_event(&event, &locale, &cfg.skill.fact_intent);
            print_envelope(&skill.handle(&request))?;
        }
        Commands::Facts { locale } => {
            let skill = Skill::from_config(&cfg.skill)?;
            for (i, fact) in skill.facts().facts_for(Some(&locale)).iter().enumerate() {
                println!("{:>2}. {fact}", i + 1);
            }
        }
        Commands::Validate => {
            // Build without the startup check so the failure is reported here.
            let skill = Skill::from_config(&SkillConfig {
                validate_on_start: false,
                ..cfg.skill.clone()
            })?;
            skill
                .validate()
                .with_context(|| format!("skill '{}' failed validation", skill.name()))?;
            println!("{}: localization and fact tables OK", skill.name());
        }
    }

    Ok(())
}

/// Print the wire envelope for `payload` as pretty JSON on stdout.
fn print_envelope(payload: &ResponsePayload) -> anyhow::Result<()> {
    let envelope = ResponseEnvelope::from(payload);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
