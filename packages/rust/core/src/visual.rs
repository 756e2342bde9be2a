//! Visual stage: palette, effects, aesthetic notes and the hero image.
//!
//! The hero image is the only suspending step in the pipeline. A missing
//! generator, a generator error and a timeout all resolve to [`FALLBACK_IMAGE`].

use std::sync::Arc;
use std::time::Duration;

use brandforge_imagegen::ImageGenerator;
use brandforge_shared::vocabulary::DEFAULT_PALETTE;
use brandforge_shared::{ArchitectBlueprint, Brief, ColorEntry, Theme, VisualBlueprint};
use tracing::{debug, instrument, warn};

/// Hero image used whenever generation is unavailable or fails.
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1526498460520-4c246339dccb?auto=format&fit=crop&w=1400&q=80";

/// Effects for a theme with none of its own.
pub const FALLBACK_EFFECTS: &[&str] = &["Soft shadow layering", "Animated cards"];

/// Typography note included in every blueprint.
const TYPOGRAPHY_NOTE: &str = "Typography pairing: Display serif headline + geometric sans body.";

/// A configured image generator with the request shape and time bound.
#[derive(Clone)]
pub struct ImageSettings {
    pub generator: Arc<dyn ImageGenerator>,
    /// Requested resolution, `WxH`.
    pub size: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ImageSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSettings")
            .field("generator", &self.generator.name())
            .field("size", &self.size)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Build the visual direction for a brief.
#[instrument(skip_all, fields(theme = %architecture.theme))]
pub async fn visual(
    brief: &Brief,
    architecture: &ArchitectBlueprint,
    image: Option<&ImageSettings>,
) -> VisualBlueprint {
    let theme = architecture.theme;
    let hero_image_prompt = format!(
        "A {theme} inspired hero visual showcasing {} for {}.",
        brief.project_goals.to_lowercase(),
        brief.target_audience
    );

    let generated_image_url = match image {
        Some(settings) => generate_hero_image(settings, &hero_image_prompt).await,
        None => {
            debug!("no image generator configured, using fallback hero image");
            FALLBACK_IMAGE.to_string()
        }
    };

    let lead_feature = brief
        .key_features
        .first()
        .map(String::as_str)
        .unwrap_or("core");

    VisualBlueprint {
        hero_image_prompt,
        aesthetic_notes: vec![
            format!(
                "Primary aesthetic is {theme} with {} tone of voice.",
                brief.tone
            ),
            TYPOGRAPHY_NOTE.to_string(),
            format!("Use gradient overlays to reinforce {lead_feature} narrative."),
        ],
        color_palette: palette_for(theme),
        design_effects: effects_for(theme),
        generated_image_url,
    }
}

/// The theme's own palette, or the default one.
pub fn palette_for(theme: Theme) -> Vec<ColorEntry> {
    theme
        .palette()
        .unwrap_or(DEFAULT_PALETTE)
        .iter()
        .map(|swatch| swatch.to_entry())
        .collect()
}

/// The theme's effects, or [`FALLBACK_EFFECTS`] if it lists none.
pub fn effects_for(theme: Theme) -> Vec<String> {
    let effects = match theme.effects() {
        [] => FALLBACK_EFFECTS,
        list => list,
    };
    effects.iter().map(|e| e.to_string()).collect()
}

/// One bounded attempt at generating the hero image.
async fn generate_hero_image(settings: &ImageSettings, prompt: &str) -> String {
    let backend = settings.generator.name();
    let attempt = settings.generator.generate(prompt, &settings.size);

    match tokio::time::timeout(settings.timeout, attempt).await {
        Ok(Ok(url)) => {
            debug!(backend, "hero image generated");
            url
        }
        Ok(Err(e)) => {
            warn!(backend, error = %e, "hero image generation failed, using fallback");
            FALLBACK_IMAGE.to_string()
        }
        Err(_) => {
            warn!(
                backend,
                timeout_ms = settings.timeout.as_millis() as u64,
                "hero image generation timed out, using fallback"
            );
            FALLBACK_IMAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architect::architect;
    use crate::fixtures::{lumen_brief, neutral_brief};
    use async_trait::async_trait;
    use brandforge_shared::{BrandForgeError, ColorRole, Result};
    use std::sync::Mutex;

    /// Generator that records its calls and replies with a fixed outcome.
    struct StubGenerator {
        reply: std::result::Result<String, String>,
        delay: Duration,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl StubGenerator {
        fn ok(url: &str) -> Self {
            Self {
                reply: Ok(url.into()),
                delay: Duration::ZERO,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err("HTTP 500".into()),
                delay: Duration::ZERO,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn slow() -> Self {
            Self {
                reply: Ok("https://cdn.example.com/late.png".into()),
                delay: Duration::from_secs(5),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ImageGenerator for StubGenerator {
        async fn generate(&self, prompt: &str, size: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), size.to_string()));
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.reply
                .clone()
                .map_err(BrandForgeError::ImageGeneration)
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn settings(generator: Arc<StubGenerator>) -> ImageSettings {
        ImageSettings {
            generator,
            size: "1024x1024".into(),
            timeout: Duration::from_millis(200),
        }
    }

    #[tokio::test]
    async fn no_generator_uses_fallback() {
        let brief = lumen_brief();
        let arch = architect(&brief);
        let result = visual(&brief, &arch, None).await;
        assert_eq!(result.generated_image_url, FALLBACK_IMAGE);
    }

    #[tokio::test]
    async fn failing_generator_uses_fallback() {
        let brief = lumen_brief();
        let arch = architect(&brief);
        let stub = Arc::new(StubGenerator::failing());
        let result = visual(&brief, &arch, Some(&settings(stub.clone()))).await;
        assert_eq!(result.generated_image_url, FALLBACK_IMAGE);
        assert_eq!(stub.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn slow_generator_times_out_to_fallback() {
        let brief = lumen_brief();
        let arch = architect(&brief);
        let stub = Arc::new(StubGenerator::slow());
        let result = visual(&brief, &arch, Some(&settings(stub))).await;
        assert_eq!(result.generated_image_url, FALLBACK_IMAGE);
    }

    #[tokio::test]
    async fn generator_gets_prompt_and_size() {
        let brief = lumen_brief();
        let arch = architect(&brief);
        let stub = Arc::new(StubGenerator::ok("https://cdn.example.com/hero.png"));
        let result = visual(&brief, &arch, Some(&settings(stub.clone()))).await;

        assert_eq!(result.generated_image_url, "https://cdn.example.com/hero.png");
        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, result.hero_image_prompt);
        assert_eq!(calls[0].1, "1024x1024");
    }

    #[tokio::test]
    async fn prompt_and_notes() {
        let brief = lumen_brief();
        let arch = architect(&brief);
        let result = visual(&brief, &arch, None).await;

        assert_eq!(
            result.hero_image_prompt,
            "A Futuristic inspired hero visual showcasing launch an adaptive ai website \
             builder that composes conversion-optimized saas sites for Growth-stage SaaS founders."
        );
        assert_eq!(
            result.aesthetic_notes,
            vec![
                "Primary aesthetic is Futuristic with professional tone of voice.",
                "Typography pairing: Display serif headline + geometric sans body.",
                "Use gradient overlays to reinforce AI layout composer narrative.",
            ]
        );
    }

    #[tokio::test]
    async fn explicit_palette_and_effects() {
        let brief = lumen_brief();
        let arch = architect(&brief);
        let result = visual(&brief, &arch, None).await;

        let names: Vec<_> = result.color_palette.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Nightfall", "Plasma Blue", "Violet Pulse", "Ion"]);
        assert_eq!(result.design_effects, effects_for(Theme::Futuristic));
        assert!(!result.design_effects.is_empty());
    }

    #[tokio::test]
    async fn default_palette_for_themes_without_one() {
        let brief = neutral_brief();
        let arch = architect(&brief);
        assert_eq!(arch.theme, Theme::Minimalist);
        let result = visual(&brief, &arch, None).await;

        let roles: Vec<_> = result.color_palette.iter().map(|c| c.role).collect();
        assert_eq!(
            roles,
            vec![
                ColorRole::Background,
                ColorRole::Accent,
                ColorRole::Subtle,
                ColorRole::Text
            ]
        );
        assert_eq!(result.color_palette[0].name, "Obsidian");
        assert_eq!(result.color_palette[1].hex, "#6366F1");
    }

    #[test]
    fn every_theme_resolves_palette_and_effects() {
        for theme in Theme::ALL {
            assert!(!palette_for(theme).is_empty(), "{theme}");
            assert!(!effects_for(theme).is_empty(), "{theme}");
        }
    }
}
