//! End-to-end forge pipeline: brief → architect → copy + visuals + integrations → blueprint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use brandforge_imagegen::{ImageGenerator, OpenAiImageClient};
use brandforge_shared::{Blueprint, Brief, ImageConfig, Result, image_api_key};
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::architect::architect;
use crate::copywriter::copywriter;
use crate::integration::integration;
use crate::sink::{BlueprintSink, PersistOutcome};
use crate::visual::{ImageSettings, visual};

/// Runs the generation stages for a brief.
///
/// Holds no per-run state, so one `Forge` can serve any number of
/// concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct Forge {
    image: Option<ImageSettings>,
}

impl Forge {
    /// A forge without an image generator; hero images use the fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an image generator.
    pub fn with_image_generator(
        mut self,
        generator: Arc<dyn ImageGenerator>,
        size: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        self.image = Some(ImageSettings {
            generator,
            size: size.into(),
            timeout,
        });
        self
    }

    /// Build a forge from the `[image]` config section.
    ///
    /// The generator is left out when the section is disabled, the API key
    /// env var is unset, or the client cannot be built from the section.
    pub fn from_config(config: &ImageConfig) -> Self {
        let Some(api_key) = image_api_key(config) else {
            return Self::new();
        };

        let client = match OpenAiImageClient::new(config, api_key) {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "image generator misconfigured, hero images will use the fallback");
                return Self::new();
            }
        };
        debug!(endpoint = %client.endpoint(), model = %config.model, "image generator configured");

        Self::new().with_image_generator(
            Arc::new(client),
            config.size.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Whether hero images will be requested from a generator.
    pub fn has_image_generator(&self) -> bool {
        self.image.is_some()
    }

    /// Run every stage and assemble the blueprint.
    ///
    /// Architect runs first. Integration needs only the brief and runs
    /// alongside copy and visuals.
    #[instrument(skip_all, fields(brand = %brief.brand_name))]
    pub async fn run(&self, brief: &Brief) -> Result<Blueprint> {
        let architecture = architect(brief);

        let (copy, visuals, integrations) = tokio::join!(
            async { copywriter(brief, &architecture) },
            visual(brief, &architecture, self.image.as_ref()),
            async { integration(brief) },
        );

        Ok(Blueprint {
            architect: architecture,
            copywriter: copy,
            visual: visuals,
            integration: integrations,
            created_at: Utc::now(),
            brief: brief.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Request flow
// ---------------------------------------------------------------------------

/// Result of [`build_blueprint`].
#[derive(Debug)]
pub struct BuildOutcome {
    pub blueprint: Blueprint,
    pub persisted: PersistOutcome,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the blueprint is complete.
    fn done(&self, blueprint: &Blueprint);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _blueprint: &Blueprint) {}
}

/// Validate a brief, run the forge and hand the result to `sink`.
///
/// Only validation can fail. Persistence problems are reported in the
/// outcome, and a missing sink means nothing is persisted.
#[instrument(skip_all, fields(brand = %brief.brand_name))]
pub async fn build_blueprint(
    forge: &Forge,
    brief: &Brief,
    sink: Option<&dyn BlueprintSink>,
    progress: &dyn ProgressReporter,
) -> Result<BuildOutcome> {
    let start = Instant::now();

    progress.phase("Validating brief");
    brief.validate()?;

    progress.phase("Generating blueprint");
    let blueprint = forge.run(brief).await?;

    let persisted = match sink {
        Some(sink) => {
            progress.phase("Saving blueprint");
            sink.persist(&blueprint).await
        }
        None => PersistOutcome::not_persisted(),
    };

    progress.done(&blueprint);

    let elapsed = start.elapsed();
    info!(
        industry = %blueprint.architect.industry,
        theme = %blueprint.architect.theme,
        pages = blueprint.architect.site_map.len(),
        persisted = persisted.persisted,
        elapsed_ms = elapsed.as_millis() as u64,
        "blueprint complete"
    );

    Ok(BuildOutcome {
        blueprint,
        persisted,
        elapsed,
    })
}
