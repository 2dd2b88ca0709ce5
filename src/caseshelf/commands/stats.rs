use crate::catalog;
use crate::commands::{CmdResult, ShelfStats};
use crate::error::Result;
use crate::model::{Case, Lang};

pub fn run(cases: &[Case], lang: Lang) -> Result<CmdResult> {
    let stats = ShelfStats {
        categories: catalog::category_stats(cases, lang),
        tags: catalog::tag_stats(cases, lang),
    };
    Ok(CmdResult::default().with_stats(stats))
}
