//! Charforge Engine - developer CLI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_engine::conversions::enum_mapper::DomainIdMapping;
use charforge_engine::infrastructure::rules_catalog::JsonRulesCatalog;
use charforge_engine::{ChoiceResolver, DraftAssembler, EngineConfig, RulesUseCases};
use charforge_shared::enums::{Background, Class, Race, WireEnum};

mod cli;

use cli::{Cli, Command, ListKind};

#[derive(Serialize)]
struct Summary {
    id: &'static str,
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_failures = load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for (path, error) in dotenv_failures {
        tracing::warn!(path = %path.display(), error = %error, "Failed to load env file");
    }

    let cli = Cli::parse();
    let config = EngineConfig::from_env();

    let rules_path = cli
        .rules
        .or(config.rules_path)
        .context("No rules catalog: pass --rules or set CHARFORGE_RULES_PATH")?;
    let catalog = JsonRulesCatalog::load(&rules_path).await?;

    tracing::debug!(
        strict = config.choices.strict,
        max_depth = config.choices.max_depth,
        "Choice resolver configured"
    );
    let rules = RulesUseCases::new(
        Arc::new(catalog),
        DraftAssembler::new(ChoiceResolver::new(config.choices)),
    );

    let output = match cli.command {
        Command::Race { id } => {
            let race = Race::from_domain_id(&id);
            if race.is_unspecified() {
                bail!("Unknown race: {id}");
            }
            serde_json::to_string_pretty(&rules.get_race_details(race).await?)?
        }
        Command::Class { id } => {
            let class = Class::from_domain_id(&id);
            if class.is_unspecified() {
                bail!("Unknown class: {id}");
            }
            serde_json::to_string_pretty(&rules.get_class_details(class).await?)?
        }
        Command::Background { id } => {
            let background = Background::from_domain_id(&id);
            if background.is_unspecified() {
                bail!("Unknown background: {id}");
            }
            serde_json::to_string_pretty(&rules.get_background_details(background).await?)?
        }
        Command::List { kind } => {
            let summaries: Vec<Summary> = match kind {
                ListKind::Races => rules
                    .list_races()
                    .await?
                    .into_iter()
                    .map(|r| Summary {
                        id: r.race.to_domain_id(),
                        name: r.name,
                    })
                    .collect(),
                ListKind::Classes => rules
                    .list_classes()
                    .await?
                    .into_iter()
                    .map(|c| Summary {
                        id: c.class.to_domain_id(),
                        name: c.name,
                    })
                    .collect(),
                ListKind::Backgrounds => rules
                    .list_backgrounds()
                    .await?
                    .into_iter()
                    .map(|b| Summary {
                        id: b.background.to_domain_id(),
                        name: b.name,
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&summaries)?
        }
    };

    println!("{output}");
    Ok(())
}

/// Load `.env.local` then `.env` from the repo root. Runs before logging is
/// up, so failures are returned for the caller to report.
fn load_dotenv_from_repo_root() -> Vec<(PathBuf, dotenvy::Error)> {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    load_dotenv_files(&repo_root)
}

fn load_dotenv_files(dir: &Path) -> Vec<(PathBuf, dotenvy::Error)> {
    // Prefer local overrides.
    [".env.local", ".env"]
        .into_iter()
        .map(|filename| dir.join(filename))
        .filter(|path| path.exists())
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => None,
            Err(error) => Some((path, error)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_env_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "not a valid line\n").unwrap();

        let failures = load_dotenv_files(dir.path());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, dir.path().join(".env"));
    }

    #[test]
    fn missing_env_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv_files(dir.path()).is_empty());
    }
}
