//! Habit display-name parsing.
//!
//! Routine habits may carry a bracket-delimited time badge in their name,
//! either trailing (`"Stretch [08:00]"`) or leading (`"[08:00] Stretch"`).
//! The badge is split out for display. Parsing applies to routine habits
//! only; non-routine names are shown verbatim even if they contain brackets.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::HabitTime;

/// A habit name split into its display text and optional time badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHabitName {
    pub display_name: String,
    pub time_badge: Option<String>,
}

fn trailing_badge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*?)\[(.*?)\]$").unwrap())
}

fn leading_badge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[(.*?)\]\s*(.*)$").unwrap())
}

/// Split a habit name into display text and time badge.
pub fn parse_name(name: &str, default_time: Option<HabitTime>) -> ParsedHabitName {
    if default_time != Some(HabitTime::Routine) {
        return ParsedHabitName {
            display_name: name.to_string(),
            time_badge: None,
        };
    }

    if let Some(caps) = trailing_badge_re().captures(name) {
        return ParsedHabitName {
            display_name: caps[1].trim().to_string(),
            time_badge: Some(caps[2].trim().to_string()),
        };
    }
    if let Some(caps) = leading_badge_re().captures(name) {
        return ParsedHabitName {
            display_name: caps[2].trim().to_string(),
            time_badge: Some(caps[1].trim().to_string()),
        };
    }
    ParsedHabitName {
        display_name: name.to_string(),
        time_badge: None,
    }
}
