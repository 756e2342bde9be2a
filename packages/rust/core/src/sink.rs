//! Fire-and-forget persistence for finished blueprints.

use async_trait::async_trait;
use brandforge_shared::Blueprint;
use brandforge_storage::Storage;
use tracing::{info, warn};

/// Whether a blueprint made it to storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistOutcome {
    pub persisted: bool,
    /// Storage ID when persisted.
    pub id: Option<String>,
}

impl PersistOutcome {
    pub fn stored(id: impl Into<String>) -> Self {
        Self {
            persisted: true,
            id: Some(id.into()),
        }
    }

    pub fn not_persisted() -> Self {
        Self::default()
    }
}

/// Destination for completed blueprints. Implementations absorb their own
/// failures and report them through the outcome.
#[async_trait]
pub trait BlueprintSink: Send + Sync {
    async fn persist(&self, blueprint: &Blueprint) -> PersistOutcome;
}

#[async_trait]
impl BlueprintSink for Storage {
    async fn persist(&self, blueprint: &Blueprint) -> PersistOutcome {
        match self.insert_blueprint(blueprint).await {
            Ok(id) => {
                info!(%id, industry = %blueprint.architect.industry, "blueprint persisted");
                PersistOutcome::stored(id)
            }
            Err(e) => {
                warn!(error = %e, "failed to persist blueprint");
                PersistOutcome::not_persisted()
            }
        }
    }
}
