//! Shared test fixtures. Compiled for unit tests and, behind the
//! `test_utils` feature, for downstream integration tests.

use crate::model::{Case, CaseId, Lang, LocalizedText};
use chrono::{TimeZone, Utc};

/// Minimal English-only case.
pub fn case(id: CaseId, title: &str) -> Case {
    case_with(id, title, "op7418", "Image Generation", &[])
}

pub fn case_with(
    id: CaseId,
    title: &str,
    author: &str,
    category: &str,
    tags: &[&str],
) -> Case {
    Case {
        id,
        title: LocalizedText::plain(title),
        description: LocalizedText::plain(format!("{title} description")),
        prompt: LocalizedText::plain(format!("{title} prompt")),
        author: author.to_string(),
        category: LocalizedText::plain(category),
        tags: tags.iter().map(|t| LocalizedText::plain(*t)).collect(),
        input_images: vec![format!("cases/{id}/input1.jpg")],
        output_images: vec![format!("cases/{id}/output1.jpg")],
        created_at: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
    }
}

/// A case carrying English and Chinese variants in every localized field.
pub fn bilingual_case(id: CaseId, title_en: &str, title_zh: &str) -> Case {
    let mut case = case(id, title_en);
    case.title = LocalizedText::plain(title_en).with(Lang::Zh, title_zh);
    case.category = LocalizedText::plain("3D Modeling").with(Lang::Zh, "3D建模");
    case.tags = vec![
        LocalizedText::plain("figurine").with(Lang::Zh, "手办"),
        LocalizedText::plain("Blender").with(Lang::Zh, "Blender"),
    ];
    case
}
