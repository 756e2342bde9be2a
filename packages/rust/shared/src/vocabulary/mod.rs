//! Static domain vocabulary: industries, themes and their lookup tables.
//!
//! Every table is a `match` over a closed enum returning `'static` data, so
//! lookups are total and the tables are shared read-only for the life of the
//! process. Declaration order in [`Industry::ALL`] and [`Theme::ALL`] is
//! significant: classification ties go to the earlier entry.

mod industry;
mod theme;

pub use industry::Industry;
pub use theme::Theme;

use crate::types::{ColorEntry, ColorRole, PageDescriptor};

/// A page blueprint baked into the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTemplate {
    pub label: &'static str,
    pub description: &'static str,
    pub sections: &'static [&'static str],
}

impl PageTemplate {
    pub fn to_descriptor(&self) -> PageDescriptor {
        PageDescriptor {
            label: self.label.to_string(),
            description: self.description.to_string(),
            sections: self.sections.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A palette color baked into the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub role: ColorRole,
    pub contrast: &'static str,
}

impl Swatch {
    pub fn to_entry(&self) -> ColorEntry {
        ColorEntry {
            name: self.name.to_string(),
            hex: self.hex.to_string(),
            role: self.role,
            contrast: self.contrast.to_string(),
        }
    }
}

/// Pages every site map starts with, in order.
pub const BASE_PAGES: &[PageTemplate] = &[
    PageTemplate {
        label: "Home",
        description: "High-impact hero, value proposition, social proof, and quick actions.",
        sections: &["Hero", "Value Props", "Featured Offer", "Testimonials", "CTA"],
    },
    PageTemplate {
        label: "Solutions",
        description: "Deep-dive into capabilities aligned with the target persona.",
        sections: &["Persona Painpoints", "Capabilities Matrix", "Feature Highlights"],
    },
];

/// Palette used by themes that do not define their own.
/// Roles are background, accent, subtle, text in that order.
pub const DEFAULT_PALETTE: &[Swatch] = &[
    Swatch { name: "Obsidian", hex: "#05060B", role: ColorRole::Background, contrast: "AAA" },
    Swatch { name: "Iris", hex: "#6366F1", role: ColorRole::Accent, contrast: "AA" },
    Swatch { name: "Quartz", hex: "#CBD5F5", role: ColorRole::Subtle, contrast: "AAA" },
    Swatch { name: "Dove", hex: "#E2E8F0", role: ColorRole::Text, contrast: "AAA" },
];
