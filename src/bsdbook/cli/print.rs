use bsdbook::api::{CmdMessage, MessageLevel};
use bsdbook::config::BookConfig;
use bsdbook::model::{NoteEntry, TagMatch};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn render_books(books: &[String]) -> String {
    books.iter().map(|name| format!("{}\n", name)).collect()
}

/// `- <file> (Last Edited: <time>)`, with the timestamps lined up in one column.
pub fn render_note_entries(book: &str, entries: &[NoteEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(0);

    let mut output = format!("{}\n", format!("Notes in book '{}':", book).bold());
    for entry in entries {
        let padding = name_width - entry.name.width();
        output.push_str(&format!(
            "- {}{} (Last Edited: {})\n",
            entry.name,
            " ".repeat(padding),
            entry.last_modified_display()
        ));
    }
    output
}

pub fn render_tag_matches(matches: &[TagMatch]) -> String {
    matches
        .iter()
        .map(|m| {
            format!(
                "[Book: {}, Note: {}, Line {}] {}\n",
                m.book, m.note, m.line_number, m.line
            )
        })
        .collect()
}

pub fn render_config(config: &BookConfig) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn print_books(books: &[String]) {
    print!("{}", render_books(books));
}

pub fn print_note_entries(book: &str, entries: &[NoteEntry]) {
    print!("{}", render_note_entries(book, entries));
}

pub fn print_tag_matches(matches: &[TagMatch]) {
    print!("{}", render_tag_matches(matches));
}

pub fn print_config(config: &BookConfig) {
    print!("{}", render_config(config));
}
