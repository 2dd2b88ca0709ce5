use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::i18n::{self, Translator};
use crate::model::Lang;
use crate::store::KvStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageAction {
    Get,
    Set(Lang),
}

pub fn run<S: KvStore>(store: &mut S, current: Lang, action: LanguageAction) -> Result<CmdResult> {
    match action {
        LanguageAction::Get => {
            let t = Translator::new(current);
            let mut result = CmdResult::default().with_language(current);
            result.add_message(CmdMessage::info(format!(
                "{}: {} ({})",
                t.t("lang.current"),
                current.code(),
                current.native_name()
            )));
            let listing = i18n::available_languages()
                .map(|(lang, name)| format!("{} ({name})", lang.code()))
                .collect::<Vec<_>>()
                .join(", ");
            result.add_message(CmdMessage::info(format!(
                "{}: {listing}",
                t.t("lang.available")
            )));
            Ok(result)
        }
        LanguageAction::Set(lang) => {
            i18n::store_language(store, lang);
            // Confirm in the language just switched to.
            let t = Translator::new(lang);
            let mut result = CmdResult::default().with_language(lang);
            result.add_message(CmdMessage::success(format!(
                "{}: {} ({})",
                t.t("lang.changed"),
                lang.code(),
                lang.native_name()
            )));
            Ok(result)
        }
    }
}
