/// Value objects for imports domain
use super::entities::ImportState;
use serde::{Deserialize, Serialize};

/// Import state enum matching database type
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ImportState"]
#[serde(rename_all = "lowercase")]
pub enum ImportStateDb {
    Pending,
    Running,
    Completed,
    Failed,
}

impl std::fmt::Display for ImportStateDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&ImportState::from(*self), f)
    }
}

impl From<ImportState> for ImportStateDb {
    fn from(state: ImportState) -> Self {
        match state {
            ImportState::Pending => ImportStateDb::Pending,
            ImportState::Running => ImportStateDb::Running,
            ImportState::Completed => ImportStateDb::Completed,
            ImportState::Failed => ImportStateDb::Failed,
        }
    }
}

impl From<ImportStateDb> for ImportState {
    fn from(state: ImportStateDb) -> Self {
        match state {
            ImportStateDb::Pending => ImportState::Pending,
            ImportStateDb::Running => ImportState::Running,
            ImportStateDb::Completed => ImportState::Completed,
            ImportStateDb::Failed => ImportState::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_domain_state() {
        assert_eq!(ImportStateDb::Completed.to_string(), "completed");
        assert_eq!(
            ImportState::from(ImportStateDb::from(ImportState::Failed)),
            ImportState::Failed
        );
    }
}
