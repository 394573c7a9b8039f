use super::Context;
use crate::fontawesome;
use crate::sys;
use crate::workflow::filter::filter;
use crate::workflow::Feedback;
use crate::workflow::Item;
use anyhow::Context as _;
use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

pub const MAX_RESULTS: usize = 5;
pub const MIN_SCORE: i64 = 30;

/// Pick the glyphs to show: a random handful without a query, otherwise the
/// best fuzzy matches.
pub fn select_glyphs(query: Option<&str>, rng: &mut impl Rng) -> Vec<&'static str> {
    match query.filter(|q| !q.is_empty()) {
        None => fontawesome::CHARACTERS
            .choose_multiple(rng, MAX_RESULTS)
            .copied()
            .collect(),
        Some(q) => filter(q, fontawesome::CHARACTERS, MAX_RESULTS, MIN_SCORE)
            .into_iter()
            .map(|(name, _)| name)
            .collect(),
    }
}

pub fn run(ctx: &mut Context, query: Option<&str>, rng: &mut impl Rng) -> Result<Feedback> {
    let colour = ctx.settings.colour().to_owned();
    let glyphs = select_glyphs(query, rng);

    let mut feedback = Feedback::default();
    if glyphs.is_empty() {
        // beats the launcher falling back to its web searches
        feedback.push(Item::new("No matching icons").icon(sys::ICON_WARNING));
    }

    for glyph in glyphs {
        let icon_path = ctx
            .provisioner
            .icon(glyph, fontawesome::FONT, &colour)
            .context(format!("fetching icon {glyph}"))?;
        feedback.push(
            Item::new(glyph)
                .subtitle(format!("Font Awesome // #{colour}"))
                .arg(format!("{glyph}|{}|{colour}", fontawesome::FONT))
                .valid(true)
                .icon(icon_path),
        );
    }

    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn random_pick_is_five_distinct_glyphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for query in [None, Some("")] {
            let glyphs = select_glyphs(query, &mut rng);
            assert_eq!(glyphs.len(), MAX_RESULTS);
            assert_eq!(glyphs.iter().collect::<HashSet<_>>().len(), MAX_RESULTS);
            assert!(glyphs.iter().all(|g| fontawesome::CHARACTERS.contains(g)));
        }
    }

    #[test]
    fn query_limits_results() {
        let mut rng = StdRng::seed_from_u64(7);
        let glyphs = select_glyphs(Some("arrow"), &mut rng);
        assert!(!glyphs.is_empty());
        assert!(glyphs.len() <= MAX_RESULTS);
    }
}
