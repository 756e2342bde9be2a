//! Briefs shared by the unit tests.

use brandforge_shared::{Brief, Tone};

/// A brief whose text matches no industry or theme keyword.
pub(crate) fn neutral_brief() -> Brief {
    Brief {
        brand_name: "Qwz".into(),
        brand_tagline: "Hello".into(),
        project_goals: "Build something lovely".into(),
        target_audience: "Everybody".into(),
        tone: Tone::Experimental,
        key_features: vec!["Quick".into(), "Wonderful".into()],
        integrations: vec![],
        enable_booking: false,
        enable_payments: false,
    }
}

/// The "Lumen" website-builder brief with payments and subscriptions on.
pub(crate) fn lumen_brief() -> Brief {
    Brief {
        brand_name: "Lumen".into(),
        brand_tagline: "Light up growth".into(),
        project_goals:
            "Launch an adaptive AI website builder that composes conversion-optimized SaaS sites"
                .into(),
        target_audience: "Growth-stage SaaS founders".into(),
        tone: Tone::Professional,
        key_features: vec![
            "AI layout composer".into(),
            "SEO clustering".into(),
            "Stripe checkout".into(),
        ],
        integrations: vec!["subscriptions".into()],
        enable_booking: false,
        enable_payments: true,
    }
}
