use crate::state::{EnemyId, EnemyInstance, EnemyTemplate};

use super::OracleError;

pub trait EnemyOracle: Send + Sync {
    fn template(&self, id: &EnemyId) -> Option<&EnemyTemplate>;

    /// Looks up a template and spawns a fresh instance from it.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EnemyNotFound` if no template has this id.
    fn spawn_enemy(&self, id: &EnemyId) -> Result<EnemyInstance, OracleError> {
        self.template(id)
            .map(EnemyTemplate::spawn)
            .ok_or_else(|| OracleError::EnemyNotFound(id.clone()))
    }
}
