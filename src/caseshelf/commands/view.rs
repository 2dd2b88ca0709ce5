use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::model::{Case, CaseId};

pub fn run(cases: &[Case], ids: &[CaseId]) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(ids.len());
    for id in ids {
        let case = cases
            .iter()
            .find(|c| c.id == *id)
            .ok_or(ShelfError::CaseNotFound(*id))?;
        listed.push(case.clone());
    }
    Ok(CmdResult::default().with_listed_cases(listed))
}
