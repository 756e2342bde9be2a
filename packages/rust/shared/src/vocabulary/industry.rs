use serde::{Deserialize, Serialize};

use super::PageTemplate;

/// Industry verticals a brief can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "E-commerce")]
    ECommerce,
    SaaS,
    Healthcare,
    Education,
    Finance,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Hospitality,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    Lifestyle,
    Technology,
    Consulting,
    #[serde(rename = "Marketing Agency")]
    MarketingAgency,
    Fitness,
    Nonprofit,
    Travel,
    Automotive,
    Entertainment,
    Media,
    Gaming,
    Legal,
    Manufacturing,
    Logistics,
    #[serde(rename = "Beauty & Wellness")]
    BeautyAndWellness,
    Sports,
}

impl Industry {
    /// Every industry, in tie-break order.
    pub const ALL: [Industry; 24] = [
        Industry::ECommerce,
        Industry::SaaS,
        Industry::Healthcare,
        Industry::Education,
        Industry::Finance,
        Industry::RealEstate,
        Industry::Hospitality,
        Industry::FoodAndBeverage,
        Industry::Lifestyle,
        Industry::Technology,
        Industry::Consulting,
        Industry::MarketingAgency,
        Industry::Fitness,
        Industry::Nonprofit,
        Industry::Travel,
        Industry::Automotive,
        Industry::Entertainment,
        Industry::Media,
        Industry::Gaming,
        Industry::Legal,
        Industry::Manufacturing,
        Industry::Logistics,
        Industry::BeautyAndWellness,
        Industry::Sports,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ECommerce => "E-commerce",
            Self::SaaS => "SaaS",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Finance => "Finance",
            Self::RealEstate => "Real Estate",
            Self::Hospitality => "Hospitality",
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Lifestyle => "Lifestyle",
            Self::Technology => "Technology",
            Self::Consulting => "Consulting",
            Self::MarketingAgency => "Marketing Agency",
            Self::Fitness => "Fitness",
            Self::Nonprofit => "Nonprofit",
            Self::Travel => "Travel",
            Self::Automotive => "Automotive",
            Self::Entertainment => "Entertainment",
            Self::Media => "Media",
            Self::Gaming => "Gaming",
            Self::Legal => "Legal",
            Self::Manufacturing => "Manufacturing",
            Self::Logistics => "Logistics",
            Self::BeautyAndWellness => "Beauty & Wellness",
            Self::Sports => "Sports",
        }
    }

    /// Lowercase keywords matched by substring against the brief.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::ECommerce => &["shop", "store", "commerce", "retail", "marketplace", "product"],
            Self::SaaS => &["software", "platform", "saas", "tool", "automation", "workflow"],
            Self::Healthcare => &["health", "clinic", "wellness", "medical", "care"],
            Self::Education => &["learn", "course", "academy", "education", "school", "teach"],
            Self::Finance => &["finance", "bank", "wealth", "invest", "payments", "accounting"],
            Self::RealEstate => &["property", "real estate", "listing", "homes", "rent", "broker"],
            Self::Hospitality => &["hotel", "stay", "hospitality", "experience", "resort"],
            Self::FoodAndBeverage => &["food", "restaurant", "cafe", "drink", "culinary"],
            Self::Lifestyle => &["lifestyle", "blog", "influencer", "magazine", "culture"],
            Self::Technology => &["tech", "hardware", "innovation", "ai", "cloud"],
            Self::Consulting => &["consult", "advisory", "strategy", "advisor", "expert"],
            Self::MarketingAgency => &["marketing", "campaign", "agency", "brand", "creative"],
            Self::Fitness => &["fitness", "gym", "training", "health", "workout", "athlete"],
            Self::Nonprofit => &["nonprofit", "charity", "donate", "impact", "mission"],
            Self::Travel => &["travel", "tour", "adventure", "journey", "trip"],
            Self::Automotive => &["auto", "car", "vehicle", "mobility", "transport"],
            Self::Entertainment => &["entertainment", "events", "show", "music", "film"],
            Self::Media => &["media", "news", "publication", "content", "podcast"],
            Self::Gaming => &["gaming", "game", "esports", "play", "interactive"],
            Self::Legal => &["law", "legal", "attorney", "firm", "compliance"],
            Self::Manufacturing => &["manufacturing", "factory", "production", "supply"],
            Self::Logistics => &["logistics", "shipping", "delivery", "supply chain", "freight"],
            Self::BeautyAndWellness => &["beauty", "spa", "cosmetic", "skincare", "wellness"],
            Self::Sports => &["sports", "team", "athletic", "league", "coach"],
        }
    }

    /// Industry-specific pages appended after the base pages.
    pub fn extra_pages(&self) -> &'static [PageTemplate] {
        match self {
            Self::ECommerce => &[PageTemplate {
                label: "Catalog",
                description: "Curated product categories with merchandising hooks.",
                sections: &["Collections", "Bundles", "Dynamic Upsells"],
            }],
            Self::SaaS => &[
                PageTemplate {
                    label: "Product",
                    description: "Detailed feature tour, integrations, automation recipes.",
                    sections: &["Feature Grid", "Workflow Examples", "Integration Gallery"],
                },
                PageTemplate {
                    label: "Pricing",
                    description: "Conversion optimized checkout with transparent tiers.",
                    sections: &["Tier Comparison", "Usage Calculator", "Enterprise CTA"],
                },
            ],
            Self::Healthcare => &[
                PageTemplate {
                    label: "Services",
                    description: "Care pathways, practitioners, patient outcomes",
                    sections: &["Care Pathways", "Specialist Directory", "Insurance Coverage"],
                },
                PageTemplate {
                    label: "Resources",
                    description: "Structured content for patient education and compliance.",
                    sections: &["Guides", "Clinical Insights", "FAQ"],
                },
            ],
            Self::Education => &[
                PageTemplate {
                    label: "Programs",
                    description: "Curriculum maps, learning outcomes, enrollment flow",
                    sections: &["Programs", "Instructors", "Admissions"],
                },
                PageTemplate {
                    label: "Resources",
                    description: "Content hub, knowledge base, alumni stories",
                    sections: &["Knowledge Hub", "Alumni", "Events"],
                },
            ],
            Self::Finance => &[PageTemplate {
                label: "Solutions",
                description: "Capital products, compliance and trust signals",
                sections: &["Products", "Risk Controls", "Case Studies"],
            }],
            Self::RealEstate => &[PageTemplate {
                label: "Listings",
                description: "Live property feed with advanced filtering and CTA",
                sections: &["Featured Listing", "Neighborhood Guides", "Schedule Tour"],
            }],
            Self::Hospitality => &[PageTemplate {
                label: "Experiences",
                description: "Immersive property story, amenities, booking widget",
                sections: &["Suites", "Dining", "Experiences"],
            }],
            Self::FoodAndBeverage => &[PageTemplate {
                label: "Menu",
                description: "Seasonal menus, pairing suggestions, order flow",
                sections: &["Signature Dishes", "Delivery", "Events"],
            }],
            Self::Lifestyle => &[PageTemplate {
                label: "Stories",
                description: "Editorial hub for lifestyle content and partnerships",
                sections: &["Spotlights", "Collaborations", "Newsletter"],
            }],
            Self::Technology => &[PageTemplate {
                label: "Platform",
                description: "Modules, architecture, innovation roadmap",
                sections: &["Tech Stack", "Roadmap", "Security"],
            }],
            Self::Consulting => &[PageTemplate {
                label: "Practices",
                description: "Service lines, methodology, case studies",
                sections: &["Framework", "Case Library", "Advisory Team"],
            }],
            Self::MarketingAgency => &[PageTemplate {
                label: "Work",
                description: "Portfolio, playbooks, growth experiments",
                sections: &["Case Studies", "Process", "Partners"],
            }],
            Self::Fitness => &[PageTemplate {
                label: "Programs",
                description: "Training plans, streaming classes, membership tiers",
                sections: &["Programs", "Trainers", "Schedule"],
            }],
            Self::Nonprofit => &[PageTemplate {
                label: "Impact",
                description: "Impact metrics, transparency reports, donation flows",
                sections: &["Impact Map", "Stories", "Financials"],
            }],
            Self::Travel => &[PageTemplate {
                label: "Destinations",
                description: "Curated itineraries, highlights, booking CTA",
                sections: &["Itineraries", "Gallery", "Trip Planner"],
            }],
            Self::Automotive => &[PageTemplate {
                label: "Models",
                description: "Vehicle lineup, configurator, financing",
                sections: &["Model Grid", "Configurator", "Test Drive"],
            }],
            Self::Entertainment => &[PageTemplate {
                label: "Shows",
                description: "Upcoming shows, streaming CTA, merch",
                sections: &["Calendar", "Media", "Community"],
            }],
            Self::Media => &[PageTemplate {
                label: "Editorial",
                description: "Featured stories, podcasts, subscription CTA",
                sections: &["Top Stories", "Newsletter", "Premium"],
            }],
            Self::Gaming => &[PageTemplate {
                label: "Game",
                description: "Core loop, features, community, roadmap",
                sections: &["Gameplay", "Lore", "Updates"],
            }],
            Self::Legal => &[PageTemplate {
                label: "Services",
                description: "Practice areas, attorneys, compliance",
                sections: &["Practice Areas", "Team", "Insights"],
            }],
            Self::Manufacturing => &[PageTemplate {
                label: "Capabilities",
                description: "Facilities, processes, quality assurance",
                sections: &["Capabilities", "Certifications", "Industries"],
            }],
            Self::Logistics => &[PageTemplate {
                label: "Network",
                description: "Coverage map, service levels, integrations",
                sections: &["Network", "Tracking", "Partners"],
            }],
            Self::BeautyAndWellness => &[PageTemplate {
                label: "Treatments",
                description: "Treatment menu, packages, loyalty",
                sections: &["Treatments", "Practitioners", "Membership"],
            }],
            Self::Sports => &[PageTemplate {
                label: "Club",
                description: "Teams, schedule, merch, community",
                sections: &["Teams", "Schedule", "Fan Zone"],
            }],
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
