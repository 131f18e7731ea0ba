//! Fuzzy medicine-name matching.
//!
//! Every catalog entry is scored against the query with a fixed set of rules,
//! checked in order, on lower-cased text:
//!
//! | Rule        | Score | Condition                                       |
//! |-------------|-------|-------------------------------------------------|
//! | exact       | 100   | entry equals the query                          |
//! | prefix      | 80    | entry starts with the query                     |
//! | substring   | 60    | entry contains the query                        |
//! | subsequence | 10/ch | query characters found in order, +20 if all are |
//!
//! Entries scoring 0 are dropped, the rest are sorted best first and capped at
//! [`MAX_RESULTS`].

use serde::Serialize;

/// Maximum number of matches returned by [`rank`].
pub const MAX_RESULTS: usize = 8;

/// Score for an entry equal to the query.
pub const EXACT_SCORE: u32 = 100;
/// Score for an entry starting with the query.
pub const PREFIX_SCORE: u32 = 80;
/// Score for an entry containing the query elsewhere.
pub const SUBSTRING_SCORE: u32 = 60;
/// Added per query character found in order by the subsequence scan.
pub const CHAR_SCORE: u32 = 10;
/// Added when the subsequence scan matched every query character.
pub const COMPLETE_BONUS: u32 = 20;

/// One catalog entry's relevance to a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Position of the entry in the catalog it was ranked from.
    pub index: usize,
    pub name: String,
    pub score: u32,
}

/// What a caller should display for the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is empty: hide the dropdown and show nothing.
    Cleared,
    /// Nothing scored above zero: show the "no medicines found" placeholder.
    NoMatches,
    Matches(Vec<Match>),
}

impl SearchOutcome {
    pub fn matches(&self) -> &[Match] {
        match self {
            SearchOutcome::Matches(matches) => matches,
            SearchOutcome::Cleared | SearchOutcome::NoMatches => &[],
        }
    }
}

/// Score a single entry against a query, case-insensitively.
pub fn score(entry: &str, query: &str) -> u32 {
    let entry = entry.to_lowercase();
    let query = query.to_lowercase();

    if entry == query {
        return EXACT_SCORE;
    }
    if entry.starts_with(&query) {
        return PREFIX_SCORE;
    }
    if entry.contains(&query) {
        return SUBSTRING_SCORE;
    }

    subsequence_score(&entry, &query)
}

fn subsequence_score(entry: &str, query: &str) -> u32 {
    let query: Vec<char> = query.chars().collect();
    let mut score = 0;
    let mut cursor = 0;

    for c in entry.chars() {
        if cursor == query.len() {
            break;
        }
        if c == query[cursor] {
            score += CHAR_SCORE;
            cursor += 1;
        }
    }

    if cursor == query.len() {
        score += COMPLETE_BONUS;
    }
    score
}

/// Rank catalog entries against `query`, best first.
///
/// Equal scores keep catalog order. The query is not checked for emptiness;
/// use [`search`] when the caller wants an empty query to clear the results.
pub fn rank<S: AsRef<str>>(query: &str, catalog: &[S]) -> Vec<Match> {
    let mut matches: Vec<Match> = catalog
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let entry = entry.as_ref();
            debug_assert!(!entry.is_empty(), "catalog entries must be non-empty");
            let score = score(entry, query);
            (score > 0).then(|| Match {
                index,
                name: entry.to_string(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_RESULTS);
    matches
}

/// Run a search the way an incremental search box does.
pub fn search<S: AsRef<str>>(query: &str, catalog: &[S]) -> SearchOutcome {
    if query.is_empty() {
        return SearchOutcome::Cleared;
    }

    let matches = rank(query, catalog);
    tracing::trace!(query, matched = matches.len(), "ranked catalog");
    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[&str] = &["Ibuprofen", "Insulin"];

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(score("Insulin", "iNSULIN"), 100);
    }

    #[test]
    fn prefix_and_substring_rules() {
        assert_eq!(score("Insulin", "ins"), 80);
        assert_eq!(score("Insulin", "sul"), 60);
    }

    #[test]
    fn subsequence_with_bonus() {
        // i +10, n +10, every query char matched +20
        assert_eq!(score("Ibuprofen", "in"), 40);
    }

    #[test]
    fn partial_subsequence_has_no_bonus() {
        // p and r match in order, z never does
        assert_eq!(score("Ibuprofen", "prz"), 20);
    }

    #[test]
    fn unrelated_query_scores_zero() {
        assert_eq!(score("Insulin", "zzz"), 0);
    }

    #[test]
    fn prefix_outranks_subsequence() {
        let matches = rank("In", CATALOG);
        assert_eq!(
            matches,
            vec![
                Match {
                    index: 1,
                    name: "Insulin".to_string(),
                    score: 80,
                },
                Match {
                    index: 0,
                    name: "Ibuprofen".to_string(),
                    score: 40,
                },
            ]
        );
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = ["Metformin", "Metoprolol", "Methadone"];
        let names: Vec<_> = rank("met", &catalog).into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["Metformin", "Metoprolol", "Methadone"]);
    }

    #[test]
    fn results_are_capped() {
        let catalog: Vec<String> = (0..20).map(|i| format!("Amox{i}")).collect();
        let matches = rank("amox", &catalog);
        assert_eq!(matches.len(), MAX_RESULTS);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[7].index, 7);
    }

    #[test]
    fn duplicates_are_not_merged() {
        let matches = rank("aspirin", &["Aspirin", "aspirin"]);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.score == 100));
    }

    #[test]
    fn empty_query_is_cleared() {
        assert_eq!(search("", CATALOG), SearchOutcome::Cleared);
        assert!(search("", CATALOG).matches().is_empty());
    }

    #[test]
    fn no_matches_outcome() {
        assert_eq!(search("zzz", CATALOG), SearchOutcome::NoMatches);
    }

    #[test]
    fn search_returns_ranked_matches() {
        let outcome = search("insulin", CATALOG);
        let matches = outcome.matches();
        assert_eq!(matches[0].name, "Insulin");
        assert_eq!(matches[0].score, 100);
    }
}
