//! Keyword classifier for industries and themes.
//!
//! Scoring is plain substring containment against a lowercased blob of brief
//! fields. Each keyword counts at most once. The highest score wins and ties
//! go to the candidate declared first.

use brandforge_shared::{Brief, Industry, Theme, Tone};
use tracing::debug;

/// Theme chosen for professional briefs that match no theme keyword.
pub const PROFESSIONAL_DEFAULT_THEME: Theme = Theme::Luxury;

/// Theme every playful brief gets, regardless of score.
pub const PLAYFUL_THEME: Theme = Theme::Playful;

/// Number of `keywords` that occur in `blob`, which must already be lowercase.
pub fn score(blob: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| blob.contains(*kw)).count()
}

/// First candidate with the strictly highest score, with that score.
fn best_match<T: Copy>(
    candidates: &[T],
    blob: &str,
    keywords: impl Fn(&T) -> &'static [&'static str],
) -> Option<(T, usize)> {
    let mut best: Option<(T, usize)> = None;
    for candidate in candidates {
        let s = score(blob, keywords(candidate));
        match best {
            Some((_, top)) if s <= top => {}
            _ => best = Some((*candidate, s)),
        }
    }
    best
}

/// Pick the industry from brand name, goals and features.
pub fn classify_industry(brief: &Brief) -> Industry {
    let blob = format!(
        "{} {} {}",
        brief.brand_name,
        brief.project_goals,
        brief.key_features.join(" ")
    )
    .to_lowercase();

    match best_match(&Industry::ALL, &blob, Industry::keywords) {
        Some((industry, s)) if s > 0 => {
            debug!(%industry, score = s, "industry classified");
            industry
        }
        _ => {
            debug!("no industry keywords matched, using first industry");
            Industry::ALL[0]
        }
    }
}

/// Pick the theme from tone, goals and tagline.
///
/// Playful briefs always get [`PLAYFUL_THEME`]. Professional briefs with no
/// matching keywords get [`PROFESSIONAL_DEFAULT_THEME`].
pub fn classify_theme(brief: &Brief) -> Theme {
    let blob = format!(
        "{} {} {}",
        brief.tone, brief.project_goals, brief.brand_tagline
    )
    .to_lowercase();

    let best = best_match(&Theme::ALL, &blob, Theme::keywords);
    let top_score = best.map(|(_, s)| s).unwrap_or(0);

    let theme = if brief.tone == Tone::Professional && top_score == 0 {
        PROFESSIONAL_DEFAULT_THEME
    } else if brief.tone == Tone::Playful {
        PLAYFUL_THEME
    } else {
        best.map(|(theme, _)| theme).unwrap_or(Theme::ALL[0])
    };

    debug!(%theme, score = top_score, tone = %brief.tone, "theme classified");
    theme
}
