use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Failed to read calendar: {0}")]
    Io(#[from] std::io::Error),
}

/// Marker starting each day's entry
pub const DATE_MARKER: &str = "📅";

/// A labelled field of a calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Saints,
    Feasts,
    Fasting,
    Readings,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Saints, Self::Feasts, Self::Fasting, Self::Readings];

    /// Label as it appears at the start of a calendar line
    pub fn label(self) -> &'static str {
        match self {
            Self::Saints => "[Saints]:",
            Self::Feasts => "[Feasts]:",
            Self::Fasting => "[Fasting]:",
            Self::Readings => "[Readings]:",
        }
    }
}

/// One day of the calendar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    /// Full date line, including the marker
    pub header: String,
    pub saints: String,
    pub feasts: String,
    pub fasting: String,
    pub readings: String,
}

impl CalendarEntry {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Saints => &self.saints,
            Field::Feasts => &self.feasts,
            Field::Fasting => &self.fasting,
            Field::Readings => &self.readings,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Saints => &mut self.saints,
            Field::Feasts => &mut self.feasts,
            Field::Fasting => &mut self.fasting,
            Field::Readings => &mut self.readings,
        }
    }
}

/// Date-indexed liturgical calendar
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    pub entries: Vec<CalendarEntry>,
}

impl Calendar {
    /// First entry whose date line matches `date`
    pub fn entry_for(&self, date: NaiveDate) -> Option<&CalendarEntry> {
        let prefix = date_header(date);
        self.entries.iter().find(|e| e.header.starts_with(&prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Date line prefix for a day, e.g. `📅 Saturday, October 17, 2026`
#[must_use]
pub fn date_header(date: NaiveDate) -> String {
    format!("{DATE_MARKER} {}", date.format("%A, %B %-d, %Y"))
}

/// Parse a calendar file
///
/// # Errors
///
/// Returns `CalendarError::Io` if the file cannot be read.
pub fn parse_calendar_file(path: &Path) -> Result<Calendar, CalendarError> {
    let content = std::fs::read_to_string(path)?;
    let calendar = parse_calendar(&content);
    debug!(path = %path.display(), entries = calendar.len(), "Loaded calendar");
    Ok(calendar)
}

/// Parse calendar text.
///
/// Lines before the first date line, and lines without a known label, are
/// ignored. A repeated label overwrites the earlier value.
#[must_use]
pub fn parse_calendar(text: &str) -> Calendar {
    let mut entries = Vec::new();
    let mut current: Option<CalendarEntry> = None;

    for line in text.lines().map(str::trim) {
        if line.starts_with(DATE_MARKER) {
            entries.extend(current.take());
            current = Some(CalendarEntry::new(line));
            continue;
        }

        let Some(entry) = current.as_mut() else {
            continue;
        };

        if let Some(field) = Field::ALL.into_iter().find(|f| line.starts_with(f.label())) {
            *entry.field_mut(field) = line[field.label().len()..].trim().to_string();
        }
    }
    entries.extend(current);

    Calendar { entries }
}
