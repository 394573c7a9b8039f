use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Fuzzy-rank `choices` against `query`.
///
/// Returns at most `max_results` choices scoring at least `min_score`, best
/// first. Equal scores fall back to alphabetical order so the ranking is
/// stable.
pub fn filter<'a>(
    query: &str,
    choices: &[&'a str],
    max_results: usize,
    min_score: i64,
) -> Vec<(&'a str, i64)> {
    let matcher = SkimMatcherV2::default().ignore_case();

    let mut ranked = choices
        .iter()
        .filter_map(|&choice| {
            matcher
                .fuzzy_match(choice, query)
                .filter(|&score| score >= min_score)
                .map(|score| (choice, score))
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| a.cmp(b)));
    ranked.truncate(max_results);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: &[&str] = &["adjust", "anchor", "archive", "arrow-down", "bolt"];

    #[test]
    fn exact_name_ranks_first() {
        let res = filter("adjust", CHOICES, 5, 30);
        assert_eq!(res[0].0, "adjust");
    }

    #[test]
    fn results_are_capped_and_sorted() {
        let res = filter("a", CHOICES, 2, 0);
        assert!(res.len() <= 2);
        assert!(res.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn nothing_below_threshold() {
        assert!(filter("qqqq", CHOICES, 5, 30).is_empty());
        assert!(filter("adjust", CHOICES, 5, i64::MAX).is_empty());
    }
}
