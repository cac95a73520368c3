//! Terminal client entry point.
//!
//! Runs one encounter against an enemy template chosen by `COMBAT_ENEMY`,
//! reading menu choices from stdin and printing the combat log to stdout.
mod config;
mod hero;
mod input;
mod logging;
mod presentation;

use std::io::{self, Write};

use anyhow::{Context, Result};
use combat_content::{Content, ContentFactory};
use combat_core::env::EnemyOracle;
use combat_core::{CombatEngine, CombatEnv, PcgRng};

use config::CliConfig;
use input::TerminalProvider;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    let content = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir).load()?,
        None => Content::bundled().context("Failed to parse bundled content")?,
    };

    let mut rules = content.config.clone();
    if config.debug {
        rules.debug_diagnostics = true;
    }

    let enemy = content
        .catalog
        .spawn_enemy(&config.enemy)
        .with_context(|| format!("Cannot start combat against '{}'", config.enemy))?;
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(enemy = %config.enemy, seed, "starting encounter");

    let rng = PcgRng;
    let env = CombatEnv::from_catalog(&content.catalog, &rng, &rules).with_seed(seed);
    let mut hero = hero::starter(&config.hero_name);

    println!("Encounter seed: {} (set COMBAT_SEED to replay)", seed);

    let report = {
        let stdin = io::stdin();
        let mut provider = TerminalProvider::new(stdin.lock(), io::stdout());
        CombatEngine::new(env, &mut hero, enemy).run(&mut provider)
    };

    let mut out = io::stdout().lock();
    presentation::write_summary(&mut out, &report, &hero)?;
    out.flush()?;

    tracing::info!(
        outcome = %report.outcome,
        rounds = report.rounds,
        "encounter finished"
    );
    Ok(())
}
