//! Architect stage: industry, theme and site map.

use brandforge_shared::vocabulary::BASE_PAGES;
use brandforge_shared::{ArchitectBlueprint, Brief, Industry, PageDescriptor};
use tracing::{debug, instrument};

use crate::classifier::{classify_industry, classify_theme};

/// Classify the brief and lay out its site map.
#[instrument(skip_all, fields(brand = %brief.brand_name))]
pub fn architect(brief: &Brief) -> ArchitectBlueprint {
    let industry = classify_industry(brief);
    let theme = classify_theme(brief);
    let site_map = build_site_map(industry);

    debug!(%industry, %theme, pages = site_map.len(), "architecture ready");

    ArchitectBlueprint {
        industry,
        theme,
        site_map,
    }
}

/// Base pages in fixed order, followed by the industry's own pages.
pub fn build_site_map(industry: Industry) -> Vec<PageDescriptor> {
    BASE_PAGES
        .iter()
        .chain(industry.extra_pages())
        .map(|page| page.to_descriptor())
        .collect()
}
