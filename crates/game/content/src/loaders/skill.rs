//! Skill catalog loader.

use std::path::Path;

use combat_core::SkillDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<SkillDefinition>,
}

/// Loader for skill catalog from RON files.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SkillDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SkillDefinition>> {
        let catalog: SkillCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        Ok(catalog.skills)
    }
}

#[cfg(test)]
mod tests {
    use combat_core::EquipmentSlot;

    use super::*;

    #[test]
    fn parses_requirement_and_stun() {
        let skills = SkillLoader::parse(
            r#"(
                skills: [
                    (
                        id: "shield_bash",
                        name: "Shield Bash",
                        cooldown: 3,
                        damage_multiplier: 0.5,
                        requires: Some(shield),
                        stun: Some((chance: 0.3, duration: 1)),
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(skills[0].requires, Some(EquipmentSlot::Shield));
        assert_eq!(skills[0].stun.map(|stun| stun.duration), Some(1));
    }
}
