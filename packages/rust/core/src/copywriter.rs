//! Copywriter stage: headlines, SEO metadata, structured data and page copy.

use brandforge_shared::{
    ArchitectBlueprint, Brief, CopywriterBlueprint, Industry, PageDescriptor, PageSection,
};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::text::title_case;

/// Canonical site URL written into the structured data.
pub const CANONICAL_URL: &str = "https://nexaforge.pro";

/// Call to action attached to every page section.
pub const SECTION_CTA: &str = "Explore more";

/// Primary call to action when payments are enabled.
pub const PAYMENTS_CTA: &str = "Start your plan";

/// Primary call to action otherwise.
pub const BOOKING_CTA: &str = "Book a session";

/// How many features the narrative copy mentions.
const FEATURE_HIGHLIGHTS: usize = 3;

// ---------------------------------------------------------------------------
// Structured data (schema.org)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct StructuredData<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    description: &'a str,
    slogan: &'a str,
    url: &'static str,
    audience: Audience<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offers: Option<Offer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Audience<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    audience_type: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    availability: &'static str,
    price_currency: &'static str,
}

/// Serialize a structured-data document, or `None` if it cannot be represented
/// as JSON.
fn to_json_ld<T: Serialize>(document: &T) -> Option<serde_json::Value> {
    match serde_json::to_value(document) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "structured data could not be serialized, omitting it");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Write the marketing copy for a brief and its architecture.
#[instrument(skip_all, fields(brand = %brief.brand_name, industry = %architecture.industry))]
pub fn copywriter(brief: &Brief, architecture: &ArchitectBlueprint) -> CopywriterBlueprint {
    let brand = title_case(&brief.brand_name);
    let highlights = brief.leading_features(FEATURE_HIGHLIGHTS).join(", ");

    let page_sections = architecture
        .site_map
        .iter()
        .map(|page| page_section(page, &brief.target_audience, &highlights))
        .collect();

    let meta_description = format!(
        "{brand} delivers {} for {}. Discover {highlights}.",
        brief.project_goals.to_lowercase(),
        brief.target_audience
    );

    let keywords = build_keywords(brief, architecture);

    let document = StructuredData {
        context: "https://schema.org",
        kind: if architecture.industry == Industry::ECommerce {
            "Store"
        } else {
            "Organization"
        },
        name: brand.clone(),
        description: &meta_description,
        slogan: &brief.brand_tagline,
        url: CANONICAL_URL,
        audience: Audience {
            kind: "Audience",
            audience_type: &brief.target_audience,
        },
        offers: brief.enable_payments.then_some(Offer {
            kind: "Offer",
            availability: "https://schema.org/InStock",
            price_currency: "USD",
        }),
    };
    let json_ld = to_json_ld(&document);

    CopywriterBlueprint {
        hero_headline: format!("{brand} – {}", brief.brand_tagline),
        hero_subheadline: brief.project_goals.clone(),
        call_to_action: if brief.enable_payments {
            PAYMENTS_CTA
        } else {
            BOOKING_CTA
        }
        .to_string(),
        meta_description,
        keywords,
        json_ld,
        page_sections,
    }
}

fn page_section(page: &PageDescriptor, audience: &str, highlights: &str) -> PageSection {
    PageSection {
        title: page.label.clone(),
        body: format!(
            "{} Tailored for {audience}. Key focus: {highlights}.",
            page.description
        ),
        cta: Some(SECTION_CTA.to_string()),
    }
}

/// Three SEO phrases in fixed order. Duplicates are kept.
fn build_keywords(brief: &Brief, architecture: &ArchitectBlueprint) -> Vec<String> {
    let industry = architecture.industry.as_str();
    let lead_feature = brief
        .key_features
        .first()
        .map(String::as_str)
        .unwrap_or("solutions");

    vec![
        format!("{} {industry}", brief.brand_name),
        format!("{} {lead_feature}", industry.to_lowercase()),
        format!(
            "{} {} experience",
            brief.target_audience,
            architecture.theme.as_str().to_lowercase()
        ),
    ]
}
