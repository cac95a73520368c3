//! Runtime configuration for the terminal client.
use std::env;
use std::path::PathBuf;

use combat_core::EnemyId;

/// Settings for one encounter, read from the environment.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory with the RON/TOML content files. `None` uses the bundled set.
    pub data_dir: Option<PathBuf>,
    pub enemy: EnemyId,
    /// Encounter seed. `None` draws a fresh one.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub hero_name: String,
    /// Forces `debug_diagnostics` on regardless of the rules file.
    pub debug: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            enemy: EnemyId::from(Self::DEFAULT_ENEMY),
            seed: None,
            session_id: None,
            hero_name: Self::DEFAULT_HERO.to_string(),
            debug: false,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_ENEMY: &'static str = "goblin_scout";
    pub const DEFAULT_HERO: &'static str = "Adventurer";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_DATA_DIR` - Content directory (default: bundled data)
    /// - `COMBAT_ENEMY` - Enemy template id (default: `goblin_scout`)
    /// - `COMBAT_SEED` - Encounter seed (default: random)
    /// - `COMBAT_SESSION_ID` - Log session name (default: timestamp)
    /// - `COMBAT_HERO_NAME` - Player character name (default: `Adventurer`)
    /// - `COMBAT_DEBUG` - Show content diagnostics in the combat log (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("COMBAT_DATA_DIR").ok().map(PathBuf::from);

        if let Ok(enemy) = env::var("COMBAT_ENEMY")
            && !enemy.trim().is_empty()
        {
            config.enemy = EnemyId::from(enemy.trim());
        }

        config.seed = read_env::<u64>("COMBAT_SEED");
        config.session_id = env::var("COMBAT_SESSION_ID").ok();

        if let Ok(name) = env::var("COMBAT_HERO_NAME")
            && !name.trim().is_empty()
        {
            config.hero_name = name.trim().to_string();
        }

        if let Some(enable) = read_env::<bool>("COMBAT_DEBUG") {
            config.debug = enable;
        } else if env::var("COMBAT_DEBUG").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.debug = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
