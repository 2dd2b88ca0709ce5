//! Client-side search over the in-memory catalog.
//!
//! Pure array filtering, re-run in full on every invocation; there is no
//! index and none is needed at catalog scale.

use crate::model::{Case, CaseId, Lang, SearchFilters};
use std::collections::BTreeSet;

/// Compute the subset of `cases` satisfying all active criteria.
///
/// Criteria groups combine with AND. Within the free-text group the
/// query matches if it is a case-insensitive substring of any of title,
/// description, prompt, author, or a tag (all resolved in `lang`).
/// Category is exact equality against the resolved category. The tag
/// group requires every selected tag to be present on the case.
/// `favorites_only` intersects with `favorite_ids`.
///
/// With no query, category, or tags active the result is empty, not the
/// full catalog: "no search yet" is distinct from "matched nothing".
pub fn filter_cases<'a>(
    cases: &'a [Case],
    filters: &SearchFilters,
    favorite_ids: &BTreeSet<CaseId>,
    lang: Lang,
) -> Vec<&'a Case> {
    if filters.is_empty() {
        return Vec::new();
    }

    let query = filters.query.trim().to_lowercase();

    cases
        .iter()
        .filter(|case| query.is_empty() || matches_query(case, &query, lang))
        .filter(|case| {
            filters
                .category
                .as_deref()
                .map_or(true, |selected| case.category.get(lang) == selected)
        })
        .filter(|case| {
            let tags = case.tags_in(lang);
            filters.tags.iter().all(|selected| tags.contains(&selected.as_str()))
        })
        .filter(|case| !filters.favorites_only || favorite_ids.contains(&case.id))
        .collect()
}

fn matches_query(case: &Case, query: &str, lang: Lang) -> bool {
    case.title.get(lang).to_lowercase().contains(query)
        || case.description.get(lang).to_lowercase().contains(query)
        || case.prompt.get(lang).to_lowercase().contains(query)
        || case.author.to_lowercase().contains(query)
        || case
            .tags
            .iter()
            .any(|tag| tag.get(lang).to_lowercase().contains(query))
}
