//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for every caseshelf operation.
//! It is a thin dispatch layer over the command modules: no business
//! logic, no terminal I/O, structured `Result<CmdResult>` out.
//!
//! The facade owns the composition: the blob store, the favorites store,
//! and the active display language all live here and are handed to
//! commands explicitly. There is no ambient global state; a test can
//! stand up a complete application around an in-memory store in two
//! lines.

use crate::catalog;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::favorites::{Favorites, SubscriptionId};
use crate::i18n::{self, Translator};
use crate::model::{Case, CaseId, Lang, SearchFilters};
use crate::store::KvStore;
use std::collections::BTreeSet;

pub struct ShelfApi<S: KvStore> {
    store: S,
    favorites: Favorites,
    lang: Lang,
}

impl<S: KvStore> ShelfApi<S> {
    /// Open the application state: read the persisted language, then the
    /// persisted favorites. Storage problems degrade to defaults; open
    /// itself cannot fail.
    pub fn open(store: S) -> Self {
        let lang = i18n::load_language(&store);
        let mut favorites = Favorites::new();
        favorites.load(&store);
        Self {
            store,
            favorites,
            lang,
        }
    }

    /// One-shot display-language override (not persisted).
    pub fn with_language(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn language(&self) -> Lang {
        self.lang
    }

    pub fn catalog(&self) -> &'static [Case] {
        catalog::cases()
    }

    pub fn is_favorite(&self, id: CaseId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorite_ids(&self) -> BTreeSet<CaseId> {
        self.favorites.ids()
    }

    pub fn subscribe_favorites(
        &mut self,
        observer: Box<dyn Fn(&BTreeSet<CaseId>)>,
    ) -> SubscriptionId {
        self.favorites.subscribe(observer)
    }

    pub fn unsubscribe_favorites(&mut self, id: SubscriptionId) {
        self.favorites.unsubscribe(id);
    }

    pub fn list_cases(&self, favorites_only: bool) -> Result<CmdResult> {
        commands::list::run(
            catalog::cases(),
            &self.favorites,
            favorites_only,
            &self.translator(),
        )
    }

    pub fn view_cases(&self, ids: &[CaseId]) -> Result<CmdResult> {
        commands::view::run(catalog::cases(), ids)
    }

    pub fn search_cases(&self, filters: &SearchFilters) -> Result<CmdResult> {
        commands::search::run(catalog::cases(), filters, &self.favorites, &self.translator())
    }

    pub fn toggle_favorites(&mut self, ids: &[CaseId]) -> Result<CmdResult> {
        let t = Translator::new(self.lang);
        commands::favorite::toggle(
            catalog::cases(),
            &mut self.favorites,
            &mut self.store,
            ids,
            &t,
        )
    }

    pub fn clear_favorites(&mut self, confirmed: bool) -> Result<CmdResult> {
        let t = Translator::new(self.lang);
        commands::favorite::clear(&mut self.favorites, &mut self.store, confirmed, &t)
    }

    /// Re-read favorites from the store, discarding in-memory state.
    pub fn refresh_favorites(&mut self) {
        self.favorites.refresh(&self.store);
    }

    pub fn get_language(&mut self) -> Result<CmdResult> {
        commands::language::run(&mut self.store, self.lang, commands::language::LanguageAction::Get)
    }

    pub fn set_language(&mut self, lang: Lang) -> Result<CmdResult> {
        let result = commands::language::run(
            &mut self.store,
            self.lang,
            commands::language::LanguageAction::Set(lang),
        )?;
        self.lang = lang;
        Ok(result)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(catalog::cases(), self.lang)
    }

    fn translator(&self) -> Translator {
        Translator::new(self.lang)
    }
}
