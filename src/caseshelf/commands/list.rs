use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::Favorites;
use crate::i18n::Translator;
use crate::model::Case;

pub fn run(
    cases: &[Case],
    favorites: &Favorites,
    favorites_only: bool,
    t: &Translator,
) -> Result<CmdResult> {
    let listed: Vec<Case> = if favorites_only {
        favorites.cases().into_iter().cloned().collect()
    } else {
        cases.to_vec()
    };

    let mut result = CmdResult::default().with_listed_cases(listed);
    if result.listed_cases.is_empty() {
        let key = if favorites_only {
            "favorites.empty"
        } else {
            "list.empty"
        };
        result.add_message(CmdMessage::info(t.t(key)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lang;
    use crate::store::memory::MemoryStore;
    use crate::test_fixtures::case;

    #[test]
    fn lists_the_whole_catalog() {
        let cases = vec![case(1, "A"), case(2, "B")];
        let favorites = Favorites::new();
        let result = run(&cases, &favorites, false, &Translator::new(Lang::En)).unwrap();
        assert_eq!(result.listed_cases.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn favorites_only_lists_favorited_cases() {
        let cases = vec![case(1, "A"), case(2, "B")];
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle(&mut store, &cases[1]);

        let result = run(&cases, &favorites, true, &Translator::new(Lang::En)).unwrap();
        assert_eq!(result.listed_cases.len(), 1);
        assert_eq!(result.listed_cases[0].id, 2);
    }

    #[test]
    fn empty_favorites_list_carries_a_localized_message() {
        let favorites = Favorites::new();
        let result = run(&[], &favorites, true, &Translator::new(Lang::Zh)).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "还没有收藏。");
    }
}
