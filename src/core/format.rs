//! Format template compiler
//!
//! A format template is plain text with `${...}` placeholders:
//!
//! | Placeholder  | Position | Value                         |
//! |--------------|----------|-------------------------------|
//! | `${time}`    | 1        | timestamp, per the time layout |
//! | `${level}`   | 2        | level name                    |
//! | `${file}`    | 3        | basename of the calling file  |
//! | `${line}`    | 4        | line of the call              |
//! | `${name}`    | 5        | logger name                   |
//! | `${message}` | 6        | message body                  |
//!
//! A template is compiled once into a list of literal and field segments and
//! rendered on every log call. Literal text, `%` included, is copied to the
//! output untouched.

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use regex::Regex;
use std::fmt::{self, Write};
use std::sync::OnceLock;

/// Template used by a freshly created logger.
pub const DEFAULT_FORMAT: &str = "${time} ${level} ${file}:${line} ${name}: ${message}";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([a-zA-Z]+)\}").expect("placeholder pattern is valid"))
}

/// A field a template can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Time,
    Level,
    File,
    Line,
    Name,
    Message,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Time,
        Placeholder::Level,
        Placeholder::File,
        Placeholder::Line,
        Placeholder::Name,
        Placeholder::Message,
    ];

    /// Look up a `${...}` token, braces included.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "${time}" => Some(Placeholder::Time),
            "${level}" => Some(Placeholder::Level),
            "${file}" => Some(Placeholder::File),
            "${line}" => Some(Placeholder::Line),
            "${name}" => Some(Placeholder::Name),
            "${message}" => Some(Placeholder::Message),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Time => "${time}",
            Placeholder::Level => "${level}",
            Placeholder::File => "${file}",
            Placeholder::Line => "${line}",
            Placeholder::Name => "${name}",
            Placeholder::Message => "${message}",
        }
    }

    /// 1-based position of this field in the render arguments.
    pub fn position(&self) -> usize {
        match self {
            Placeholder::Time => 1,
            Placeholder::Level => 2,
            Placeholder::File => 3,
            Placeholder::Line => 4,
            Placeholder::Name => 5,
            Placeholder::Message => 6,
        }
    }

    fn write_value(&self, out: &mut String, entry: &LogEntry) -> fmt::Result {
        match self {
            Placeholder::Time => out.write_str(&entry.time),
            Placeholder::Level => out.write_str(entry.level.to_str()),
            Placeholder::File => out.write_str(&entry.file),
            Placeholder::Line => write!(out, "{}", entry.line),
            Placeholder::Name => out.write_str(&entry.name),
            Placeholder::Message => out.write_str(&entry.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// A validated format template, ready to render.
///
/// # Examples
///
/// ```
/// use rust_named_logger::{CompiledFormat, LogEntry, LogLevel};
///
/// let format = CompiledFormat::compile("[${level}] ${message}").unwrap();
/// let entry = LogEntry::new(LogLevel::INFO, "T", "ok");
/// assert_eq!(format.render(&entry), "[INFO] ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    source: String,
    segments: Vec<Segment>,
}

impl CompiledFormat {
    /// Compile a raw template.
    ///
    /// Fails with [`LoggerError::InvalidFormat`] when the template contains
    /// no `${...}` token at all, and with [`LoggerError::InvalidVerb`] on the
    /// first token that is not a known placeholder.
    pub fn compile(raw: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut last = 0;
        let mut found = false;

        for token in placeholder_pattern().find_iter(raw) {
            found = true;
            let placeholder = Placeholder::from_token(token.as_str())
                .ok_or_else(|| LoggerError::invalid_verb(token.as_str()))?;

            if token.start() > last {
                segments.push(Segment::Literal(raw[last..token.start()].to_string()));
            }
            segments.push(Segment::Field(placeholder));
            last = token.end();
        }

        if !found {
            return Err(LoggerError::invalid_format(raw));
        }
        if last < raw.len() {
            segments.push(Segment::Literal(raw[last..].to_string()));
        }

        Ok(Self {
            source: raw.to_string(),
            segments,
        })
    }

    /// The template this format was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholders in template order, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(placeholder) => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Positional form of the template: fields as `{n}`, literal braces doubled.
    ///
    /// ```
    /// use rust_named_logger::CompiledFormat;
    ///
    /// let format = CompiledFormat::compile("{${level}} 100% ${message}").unwrap();
    /// assert_eq!(format.template(), "{{{2}}} 100% {6}");
    /// ```
    pub fn template(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    for ch in text.chars() {
                        match ch {
                            '{' => out.push_str("{{"),
                            '}' => out.push_str("}}"),
                            _ => out.push(ch),
                        }
                    }
                }
                Segment::Field(placeholder) => {
                    let _ = write!(out, "{{{}}}", placeholder.position());
                }
            }
        }
        out
    }

    /// Render one log line, without a trailing newline.
    pub fn render(&self, entry: &LogEntry) -> String {
        let mut out = String::with_capacity(self.source.len() + entry.message.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(placeholder) => {
                    // Writing into a String cannot fail
                    let _ = placeholder.write_value(&mut out, entry);
                }
            }
        }
        out
    }
}

impl Default for CompiledFormat {
    fn default() -> Self {
        let segments = vec![
            Segment::Field(Placeholder::Time),
            Segment::Literal(" ".to_string()),
            Segment::Field(Placeholder::Level),
            Segment::Literal(" ".to_string()),
            Segment::Field(Placeholder::File),
            Segment::Literal(":".to_string()),
            Segment::Field(Placeholder::Line),
            Segment::Literal(" ".to_string()),
            Segment::Field(Placeholder::Name),
            Segment::Literal(": ".to_string()),
            Segment::Field(Placeholder::Message),
        ];
        Self {
            source: DEFAULT_FORMAT.to_string(),
            segments,
        }
    }
}

impl fmt::Display for CompiledFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
