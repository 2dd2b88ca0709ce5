use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::Favorites;
use crate::i18n::Translator;
use crate::model::{Case, SearchFilters};
use crate::search::filter_cases;

pub fn run(
    cases: &[Case],
    filters: &SearchFilters,
    favorites: &Favorites,
    t: &Translator,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if filters.is_empty() {
        result.add_message(CmdMessage::info(t.t("search.no_criteria")));
        return Ok(result);
    }

    let hits = filter_cases(cases, filters, &favorites.ids(), t.lang());
    result.listed_cases = hits.into_iter().cloned().collect();

    if result.listed_cases.is_empty() {
        result.add_message(CmdMessage::info(t.t("search.no_results")));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lang;
    use crate::test_fixtures::case_with;

    #[test]
    fn no_criteria_reports_instead_of_listing_everything() {
        let cases = vec![case_with(1, "A", "x", "3D", &[])];
        let favorites = Favorites::new();
        let result = run(
            &cases,
            &SearchFilters::default(),
            &favorites,
            &Translator::new(Lang::En),
        )
        .unwrap();
        assert!(result.listed_cases.is_empty());
        assert_eq!(result.messages[0].content, "Enter a query, category, or tag to search.");
    }

    #[test]
    fn matching_query_lists_hits_without_messages() {
        let cases = vec![
            case_with(1, "Figurine", "ZHO", "3D", &[]),
            case_with(2, "Map", "tokumin", "Maps", &[]),
        ];
        let favorites = Favorites::new();
        let filters = SearchFilters {
            query: "figurine".into(),
            ..Default::default()
        };
        let result = run(&cases, &filters, &favorites, &Translator::new(Lang::En)).unwrap();
        assert_eq!(result.listed_cases.len(), 1);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn zero_hits_reports_no_results() {
        let cases = vec![case_with(1, "Figurine", "ZHO", "3D", &[])];
        let favorites = Favorites::new();
        let filters = SearchFilters {
            query: "nonexistent".into(),
            ..Default::default()
        };
        let result = run(&cases, &filters, &favorites, &Translator::new(Lang::En)).unwrap();
        assert_eq!(result.messages[0].content, "No cases matched your search.");
    }
}
