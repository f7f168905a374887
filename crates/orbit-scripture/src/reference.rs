use core::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::books::{book_code, book_display_name};

/// A parsed scripture reference, normalized to a USFM book code.
///
/// Produced by [`ScriptureRef::parse`]; the grammar accepts references like
/// `Matthew 2`, `John 3:16`, `Romans 12:1-2`, and `1 Corinthians 13`.
///
/// Parsing is purely syntactic plus a book-name existence check: chapter and
/// verse numbers are not validated against the actual extent of the book, and
/// a range's end verse is not required to be greater than its start. The
/// upstream content provider performs its own bounds validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ScriptureRef {
    /// Canonical 3-character USFM code (e.g. `MAT`).
    pub book: &'static str,
    pub chapter: u32,
    pub verse: Option<u32>,
    #[serde(rename = "endVerse")]
    pub end_verse: Option<u32>,
}

/// `<book> <chapter>[:<verse>[-<end-verse>]]`, where `<book>` is one or more
/// alphabetic words with an optional single leading digit (`1 corinthians`)
/// and an optional internal `of` conjunction (`song of solomon`).
///
/// Matched against input that has already been trimmed and lowercased.
const REFERENCE_PATTERN: &str = r"^((?:\d\s*)?[a-z]+(?:\s+of\s+[a-z]+)?)\s+(\d+)(?::(\d+)(?:-(\d+))?)?$";

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REFERENCE_PATTERN).expect("valid regex"))
}

impl ScriptureRef {
    /// Parse a free-text scripture reference.
    ///
    /// Input is trimmed and case-folded; internal whitespace in the book name
    /// is ignored (`1 Corinthians` and `1corinthians` are equivalent).
    /// Returns `None` for anything the grammar does not accept, including
    /// syntactically well-formed references to unrecognized books. Never
    /// panics and never returns a partial result.
    pub fn parse(input: &str) -> Option<Self> {
        let cleaned = input.trim().to_lowercase();
        if cleaned.is_empty() {
            return None;
        }

        let caps = reference_re().captures(&cleaned)?;

        let book_name: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
        let book = book_code(&book_name)?;

        let chapter: u32 = caps[2].parse().ok()?;
        let verse: Option<u32> = match caps.get(3) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        let end_verse: Option<u32> = match caps.get(4) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };

        Some(Self {
            book,
            chapter,
            verse,
            end_verse,
        })
    }

    /// Canonical machine-readable form, as accepted by the content provider's
    /// passage API: `MAT.2`, `JHN.3.16`, or `ROM.12.1-ROM.12.2` (ranges repeat
    /// the fully-qualified endpoint).
    ///
    /// A literal `0` verse or end verse passes the grammar but is dropped
    /// from both projections; the parsed field still records it. A `.0`
    /// endpoint must never reach the passage API.
    pub fn formatted(&self) -> String {
        let mut out = format!("{}.{}", self.book, self.chapter);
        if let Some(verse) = self.verse.filter(|&v| v != 0) {
            out.push_str(&format!(".{verse}"));
            if let Some(end) = self.end_verse.filter(|&v| v != 0) {
                out.push_str(&format!("-{}.{}.{}", self.book, self.chapter, end));
            }
        }
        out
    }

    /// Human-readable form shown in the UI: `Matthew 2`, `John 3:16`,
    /// `Romans 12:1-2`. Suppresses `0` verse segments the same way
    /// [`ScriptureRef::formatted`] does.
    pub fn display(&self) -> String {
        let name = book_display_name(self.book).unwrap_or(self.book);
        let mut out = format!("{} {}", name, self.chapter);
        if let Some(verse) = self.verse.filter(|&v| v != 0) {
            out.push_str(&format!(":{verse}"));
            if let Some(end) = self.end_verse.filter(|&v| v != 0) {
                out.push_str(&format!("-{end}"));
            }
        }
        out
    }
}

impl fmt::Display for ScriptureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
