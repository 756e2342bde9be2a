//! Core domain types: the incoming brief and the generated blueprint.
//!
//! Both serialize with camelCase field names, which is what renderers and
//! the persisted `blueprint_json` column expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BrandForgeError, Result};
use crate::vocabulary::{Industry, Theme};

// ---------------------------------------------------------------------------
// Brief
// ---------------------------------------------------------------------------

/// Tone of voice requested for the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Playful,
    Professional,
    Elevated,
    Experimental,
    Friendly,
}

impl Tone {
    /// Every tone, in declaration order.
    pub const ALL: [Tone; 5] = [
        Tone::Playful,
        Tone::Professional,
        Tone::Elevated,
        Tone::Experimental,
        Tone::Friendly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playful => "playful",
            Self::Professional => "professional",
            Self::Elevated => "elevated",
            Self::Experimental => "experimental",
            Self::Friendly => "friendly",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marketing brief describing the site to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub brand_name: String,
    pub brand_tagline: String,
    pub project_goals: String,
    pub target_audience: String,
    pub tone: Tone,
    /// Ordered; the first three drive most of the generated copy.
    pub key_features: Vec<String>,
    /// Free-form capability tags such as `subscriptions`.
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub enable_booking: bool,
    #[serde(default)]
    pub enable_payments: bool,
}

impl Brief {
    /// Check the boundary rules a brief must satisfy before it reaches the
    /// pipeline. Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> Result<()> {
        min_chars("brandName", &self.brand_name, 2)?;
        min_chars("brandTagline", &self.brand_tagline, 2)?;
        min_chars("projectGoals", &self.project_goals, 10)?;
        min_chars("targetAudience", &self.target_audience, 3)?;

        if self.key_features.is_empty() {
            return Err(BrandForgeError::validation(
                "keyFeatures must contain at least one feature",
            ));
        }
        for (i, feature) in self.key_features.iter().enumerate() {
            min_chars(&format!("keyFeatures[{i}]"), feature, 2)?;
        }

        Ok(())
    }

    /// Whether the integration tags ask for recurring billing.
    pub fn wants_subscriptions(&self) -> bool {
        self.integrations.iter().any(|tag| tag == SUBSCRIPTIONS_TAG)
    }

    /// The first `n` features (fewer if the brief has fewer).
    pub fn leading_features(&self, n: usize) -> &[String] {
        &self.key_features[..self.key_features.len().min(n)]
    }
}

/// Integration tag that switches billing to monthly subscriptions.
pub const SUBSCRIPTIONS_TAG: &str = "subscriptions";

fn min_chars(field: &str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(BrandForgeError::validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Architect output
// ---------------------------------------------------------------------------

/// One page in the generated site map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub label: String,
    pub description: String,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectBlueprint {
    pub industry: Industry,
    pub theme: Theme,
    /// Base pages first, then the industry's extra pages.
    pub site_map: Vec<PageDescriptor>,
}

// ---------------------------------------------------------------------------
// Copywriter output
// ---------------------------------------------------------------------------

/// Narrative copy for a single site-map page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopywriterBlueprint {
    pub hero_headline: String,
    pub hero_subheadline: String,
    pub call_to_action: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    /// schema.org document; `None` when it could not be serialized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<serde_json::Value>,
    pub page_sections: Vec<PageSection>,
}

// ---------------------------------------------------------------------------
// Visual output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Background,
    Accent,
    Text,
    Subtle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub hex: String,
    pub role: ColorRole,
    /// WCAG rating label, e.g. `AA` or `AAA`.
    pub contrast: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualBlueprint {
    pub hero_image_prompt: String,
    pub aesthetic_notes: Vec<String>,
    pub color_palette: Vec<ColorEntry>,
    pub design_effects: Vec<String>,
    pub generated_image_url: String,
}

// ---------------------------------------------------------------------------
// Integration output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    OneTime,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    Payment,
    Subscription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Whole currency units.
    pub price: u32,
    pub interval: BillingInterval,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeIntegration {
    pub enabled: bool,
    pub products: Vec<Product>,
    pub checkout_mode: CheckoutMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingProvider {
    Calendly,
    Cal,
    Savvycal,
    Tidyclub,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingIntegration {
    pub enabled: bool,
    pub provider: BookingProvider,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Form,
    Email,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactIntegration {
    pub enabled: bool,
    pub method: ContactMethod,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationBlueprint {
    /// Serialized as `null` when payments are off.
    pub stripe: Option<StripeIntegration>,
    /// Serialized as `null` when booking is off.
    pub booking: Option<BookingIntegration>,
    pub contact: ContactIntegration,
}

// ---------------------------------------------------------------------------
// Blueprint
// ---------------------------------------------------------------------------

/// The complete generated artifact for one brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub architect: ArchitectBlueprint,
    pub copywriter: CopywriterBlueprint,
    pub visual: VisualBlueprint,
    pub integration: IntegrationBlueprint,
    pub created_at: DateTime<Utc>,
    pub brief: Brief,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> Brief {
        Brief {
            brand_name: "Lumen".into(),
            brand_tagline: "Light up growth".into(),
            project_goals: "Launch an adaptive website builder".into(),
            target_audience: "Growth-stage founders".into(),
            tone: Tone::Professional,
            key_features: vec!["AI layout composer".into(), "SEO clustering".into()],
            integrations: vec![],
            enable_booking: false,
            enable_payments: false,
        }
    }

    #[test]
    fn brief_deserializes_camel_case_with_defaults() {
        let json = r#"{
            "brandName": "Lumen",
            "brandTagline": "Light up growth",
            "projectGoals": "Launch an adaptive website builder",
            "targetAudience": "Founders",
            "tone": "playful",
            "keyFeatures": ["Composer"]
        }"#;
        let parsed: Brief = serde_json::from_str(json).expect("deserialize brief");
        assert_eq!(parsed.tone, Tone::Playful);
        assert!(parsed.integrations.is_empty());
        assert!(!parsed.enable_booking);
        assert!(!parsed.enable_payments);
    }

    #[test]
    fn unknown_tone_is_rejected() {
        let json = r#"{
            "brandName": "Lumen", "brandTagline": "Hi", "projectGoals": "0123456789",
            "targetAudience": "abc", "tone": "grumpy", "keyFeatures": ["ab"]
        }"#;
        assert!(serde_json::from_str::<Brief>(json).is_err());
    }

    #[test]
    fn valid_brief_passes() {
        assert!(brief().validate().is_ok());
    }

    #[test]
    fn short_fields_are_rejected() {
        let mut b = brief();
        b.project_goals = "too short".into();
        let err = b.validate().unwrap_err();
        assert!(err.to_string().contains("projectGoals"));

        let mut b = brief();
        b.key_features = vec![];
        assert!(b.validate().is_err());

        let mut b = brief();
        b.key_features.push("x".into());
        let err = b.validate().unwrap_err();
        assert!(err.to_string().contains("keyFeatures[2]"));
    }

    #[test]
    fn lengths_count_characters() {
        let mut b = brief();
        b.brand_name = "é".into();
        assert!(b.validate().is_err());
        b.brand_name = "éé".into();
        assert!(b.validate().is_ok());
    }

    #[test]
    fn subscriptions_marker_detection() {
        let mut b = brief();
        assert!(!b.wants_subscriptions());
        b.integrations = vec!["crm".into(), "subscriptions".into()];
        assert!(b.wants_subscriptions());
    }

    #[test]
    fn leading_features_caps_at_available() {
        let b = brief();
        assert_eq!(b.leading_features(3).len(), 2);
        assert_eq!(b.leading_features(1), &["AI layout composer".to_string()]);
    }

    #[test]
    fn integration_serializes_absent_as_null() {
        let integration = IntegrationBlueprint {
            stripe: None,
            booking: None,
            contact: ContactIntegration {
                enabled: true,
                method: ContactMethod::Form,
                endpoint: "/api/contact?brand=Lumen".into(),
            },
        };
        let json = serde_json::to_value(&integration).expect("serialize");
        assert!(json["stripe"].is_null());
        assert!(json["booking"].is_null());
        assert_eq!(json["contact"]["method"], "form");
    }

    #[test]
    fn enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&BillingInterval::OneTime).unwrap(),
            r#""one_time""#
        );
        assert_eq!(
            serde_json::to_string(&CheckoutMode::Subscription).unwrap(),
            r#""subscription""#
        );
        assert_eq!(serde_json::to_string(&ColorRole::Subtle).unwrap(), r#""subtle""#);
        assert_eq!(serde_json::to_string(&BookingProvider::Cal).unwrap(), r#""cal""#);
    }
}
