//! Entry extraction from daily markdown notes

use crate::domain::JournalEntry;
use chrono::{NaiveDate, NaiveTime};
use pulldown_cmark::{Event, HeadingLevel, Parser as MdParser, Tag, TagEnd};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for mood hashtags: #word, #word-with-dashes, #word_underscore
fn mood_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#([a-zA-Z][a-zA-Z0-9_-]*)").unwrap())
}

/// First hashtag in a piece of text, lowercased.
fn extract_mood(text: &str) -> Option<String> {
    mood_tag_regex()
        .captures(text)
        .map(|cap| cap[1].to_lowercase())
}

/// Result of parsing one note file
#[derive(Debug, Clone, Default)]
pub struct ParsedNote {
    pub entries: Vec<JournalEntry>,
    pub warnings: Vec<String>,
}

/// Extract journal entries from a daily note.
///
/// Each level-2 heading of the form `## HH:MM #mood` opens one entry;
/// the time combines with the note's date into the entry timestamp and
/// the first hashtag becomes the mood label. Other level-2 headings
/// are treated as ordinary section headings. A note with body text but
/// no timed headings yields a single untimed entry at midnight.
///
/// A heading whose time token fails to parse produces an entry without
/// a timestamp plus a data-quality warning; parsing never fails as a
/// whole.
pub fn parse_note(content: &str, source: &str, date: NaiveDate) -> ParsedNote {
    let mut parsed = ParsedNote::default();
    let mut in_h2 = false;
    let mut heading_text = String::new();

    let parser = MdParser::new(content);

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) if level == HeadingLevel::H2 => {
                in_h2 = true;
                heading_text.clear();
            }

            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                in_h2 = false;
                finish_heading(&heading_text, source, date, &mut parsed);
            }

            Event::Text(text) if in_h2 => {
                heading_text.push_str(&text);
            }

            _ => {}
        }
    }

    // A note with content but no timed sections still marks the day
    // active: count it as a single untimed entry at midnight.
    if parsed.entries.is_empty() && !content.trim().is_empty() {
        parsed.entries.push(JournalEntry::new(
            format!("{}#1", source),
            Some(date.and_time(NaiveTime::MIN)),
            extract_mood(content),
        ));
    }

    parsed
}

fn finish_heading(heading: &str, source: &str, date: NaiveDate, parsed: &mut ParsedNote) {
    let Some(first_token) = heading.split_whitespace().next() else {
        return;
    };

    // Only time-shaped headings open entries.
    if !first_token.contains(':') {
        return;
    }

    let id = format!("{}#{}", source, parsed.entries.len() + 1);
    let mood = extract_mood(heading);

    match NaiveTime::parse_from_str(first_token, "%H:%M") {
        Ok(time) => {
            parsed
                .entries
                .push(JournalEntry::new(id, Some(date.and_time(time)), mood));
        }
        Err(_) => {
            parsed.warnings.push(format!(
                "{}: unparseable time '{}' in heading '{}'",
                source, first_token, heading
            ));
            parsed.entries.push(JournalEntry::new(id, None, mood));
        }
    }
}
