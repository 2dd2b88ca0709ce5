use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::Favorites;
use crate::i18n::Translator;
use crate::model::{Case, CaseId};
use crate::store::KvStore;

/// Flip the favorite state of each id. An id missing from the catalog
/// but still held in the favorites store is removed from it; an id known
/// to neither side is reported and skipped.
pub fn toggle<S: KvStore>(
    cases: &[Case],
    favorites: &mut Favorites,
    store: &mut S,
    ids: &[CaseId],
    t: &Translator,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let case = match cases.iter().find(|c| c.id == *id) {
            Some(case) => case.clone(),
            // Stale favorite whose case left the catalog.
            None => match favorites.cases().iter().find(|c| c.id == *id) {
                Some(case) => (*case).clone(),
                None => {
                    result
                        .add_message(CmdMessage::warning(format!("{}: {id}", t.t("view.not_found"))));
                    continue;
                }
            },
        };

        let now_favorite = favorites.toggle(store, &case);
        let key = if now_favorite {
            "favorites.added"
        } else {
            "favorites.removed"
        };
        result.add_message(CmdMessage::success(format!(
            "{}: {}",
            t.t(key),
            case.title.get(t.lang())
        )));
        result.listed_cases.push(case);
    }

    Ok(result)
}

/// Clear every favorite. Destructive, so it requires explicit consent.
pub fn clear<S: KvStore>(
    favorites: &mut Favorites,
    store: &mut S,
    confirmed: bool,
    t: &Translator,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::warning(t.t("favorites.confirm_clear")));
        return Ok(result);
    }

    favorites.clear(store);
    result.add_message(CmdMessage::success(t.t("favorites.cleared")));
    Ok(result)
}
