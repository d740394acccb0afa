use colored::Colorize;
use traitz::api::{CmdMessage, Facet, MessageLevel};
use traitz::commands::filter::FilterOutcome;
use unicode_width::UnicodeWidthStr;

const CHECKED_MARK: &str = "[x]";
const UNCHECKED_MARK: &str = "[ ]";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_loading() {
    eprintln!("{}", "loading...".dimmed());
}

pub(crate) fn print_outcome(outcome: &FilterOutcome) {
    if outcome.is_sentinel {
        // The placeholder carries its own display name.
        for record in &outcome.records {
            println!("{}", record.name.dimmed());
        }
        return;
    }

    for record in &outcome.records {
        println!("{}", record.name);
    }
    if !outcome.all_unchecked {
        println!(
            "{}",
            format!("{} matching record(s)", outcome.matched).dimmed()
        );
    }
}

pub(crate) fn print_facets(facets: &[Facet], show_marks: bool) {
    if facets.is_empty() {
        println!("No trait values found.");
        return;
    }

    for (i, facet) in facets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", facet.trait_type.bold());

        let widest = facet
            .values
            .iter()
            .map(|v| v.value.width())
            .max()
            .unwrap_or(0);

        for value in &facet.values {
            let padding = widest.saturating_sub(value.value.width());
            let count = format!("({})", value.count).dimmed();
            if show_marks {
                let mark = if value.checked {
                    CHECKED_MARK.green()
                } else {
                    UNCHECKED_MARK.normal()
                };
                println!(
                    "  {} {}{}  {}",
                    mark,
                    value.value,
                    " ".repeat(padding),
                    count
                );
            } else {
                println!("  {}{}  {}", value.value, " ".repeat(padding), count);
            }
        }
    }
}

pub(crate) fn print_shell_help() {
    println!("{}", "Commands:".bold());
    println!("  toggle TRAIT=VALUE   check or uncheck a value (also: toggle TRAIT VALUE)");
    println!("  reset                uncheck everything");
    println!("  show                 print the current result");
    println!("  facets               list trait values, checked ones marked");
    println!("  help                 show this help");
    println!("  quit                 leave the shell");
}
