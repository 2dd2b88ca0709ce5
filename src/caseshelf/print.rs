use caseshelf::commands::{CmdMessage, MessageLevel, ShelfStats};
use caseshelf::i18n::Translator;
use caseshelf::model::{Case, CaseId, Lang};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::collections::BTreeSet;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 96;
const TIME_WIDTH: usize = 16;
const FAVORITE_MARKER: &str = "★";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_cases(cases: &[Case], favorites: &BTreeSet<CaseId>, lang: Lang) {
    for case in cases {
        let marker = if favorites.contains(&case.id) {
            format!("{FAVORITE_MARKER} ").yellow().to_string()
        } else {
            "  ".to_string()
        };
        let id_col = format!("{:>3}. ", case.id);
        let title = case.title.get(lang);
        let category = case.category.get(lang);
        let left = format!("{id_col}{marker}{} {}", title.bold(), category.dimmed());

        let time_ago = format_time_ago(case.created_at);
        // Pad by display width, not char count; titles can be CJK.
        let plain_width =
            id_col.width() + 2 + title.width() + 1 + category.width();
        let padding = LINE_WIDTH
            .saturating_sub(plain_width)
            .saturating_sub(TIME_WIDTH)
            .max(1);
        let time_col = format!("{:>width$}", time_ago, width = TIME_WIDTH);
        println!("{left}{}{}", " ".repeat(padding), time_col.dimmed());
    }
}

pub(crate) fn print_full_cases(
    cases: &[Case],
    favorites: &BTreeSet<CaseId>,
    t: &Translator,
) {
    let lang = t.lang();
    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let marker = if favorites.contains(&case.id) {
            format!(" {FAVORITE_MARKER}").yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{} {}{marker}",
            format!("#{}", case.id).yellow(),
            case.title.get(lang).bold()
        );
        println!("--------------------------------");
        println!("{}", case.description.get(lang));
        println!();
        println!("{}:", t.t("view.prompt").bold());
        println!("{}", case.prompt.get(lang));
        println!();
        println!("{}: {}", t.t("view.author").bold(), case.author);
        println!("{}: {}", t.t("view.category").bold(), case.category.get(lang));
        println!("{}: {}", t.t("view.tags").bold(), case.tags_in(lang).join(", "));
        println!("{}: {}", t.t("view.input_images").bold(), case.input_images.join(", "));
        println!(
            "{}: {}",
            t.t("view.output_images").bold(),
            case.output_images.join(", ")
        );
    }
}

pub(crate) fn print_stats(stats: &ShelfStats, t: &Translator) {
    println!("{}", t.t("stats.categories").bold());
    for (category, count) in &stats.categories {
        println!("  {:>3}  {category}", count);
    }
    println!();
    println!("{}", t.t("stats.tags").bold());
    for (tag, count) in &stats.tags {
        println!("  {:>3}  {tag}", count);
    }
}

fn format_time_ago(created_at: DateTime<Utc>) -> String {
    let formatter = Formatter::new();
    let now = Utc::now();
    if created_at > now {
        return "just now".to_string();
    }
    let duration = (now - created_at).to_std().unwrap_or_default();
    formatter.convert(duration)
}
