//! Plain-text lexicon file loading.
//!
//! Two UTF-8 line formats:
//!
//! - Roots file: one root per line, e.g. `كتب`
//! - Patterns file: `id|structure|description|category` per line; the last
//!   two fields are optional
//!
//! In both formats lines are trimmed, and empty lines or lines starting
//! with `#` are skipped silently. A line that fails to parse is skipped
//! with a [`log::warn!`] naming its position and content; only failing to
//! read the file at all is an error.

use std::fs;
use std::path::Path;

use crate::lexicon::error::LexiconError;
use crate::lexicon::patterns::PatternStore;
use crate::lexicon::roots::RootStore;
use crate::morphology::{Pattern, Root};

// =============================================================================
// LoadReport
// =============================================================================

/// What a loader did with the lines of a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that parsed and went into the store.
    pub loaded: usize,
    /// Lines that failed to parse and were skipped with a warning.
    pub skipped: usize,
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} loaded, {} skipped", self.loaded, self.skipped)
    }
}

// =============================================================================
// Loaders
// =============================================================================

/// Loads a roots file into the store.
///
/// # Errors
///
/// Returns [`LexiconError::Io`] when the file cannot be read. Invalid root
/// lines are not errors; they are counted in the report and logged.
pub fn load_roots(
    path: impl AsRef<Path>,
    store: &mut RootStore,
) -> Result<LoadReport, LexiconError> {
    let path = path.as_ref();
    let text = read_lexicon_file(path)?;

    let mut report = LoadReport::default();
    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if skippable(line) {
            continue;
        }
        match Root::new(line) {
            Ok(root) => {
                store.insert(root);
                report.loaded += 1;
            }
            Err(error) => {
                log::warn!(
                    "{}:{}: skipping root line «{line}»: {error}",
                    path.display(),
                    index + 1
                );
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

/// Loads a patterns file into the store.
///
/// A line replacing an already-stored id displaces the old pattern, exactly
/// like [`PatternStore::insert`].
///
/// # Errors
///
/// Returns [`LexiconError::Io`] when the file cannot be read. Malformed
/// lines are not errors; they are counted in the report and logged.
pub fn load_patterns(
    path: impl AsRef<Path>,
    store: &mut PatternStore,
) -> Result<LoadReport, LexiconError> {
    let path = path.as_ref();
    let text = read_lexicon_file(path)?;

    let mut report = LoadReport::default();
    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if skippable(line) {
            continue;
        }
        match parse_pattern_line(path, index + 1, line) {
            Ok(pattern) => {
                store.insert(pattern);
                report.loaded += 1;
            }
            Err(error) => {
                log::warn!("{error}");
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

fn read_lexicon_file(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Comment and blank lines carry no entry.
fn skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Parses one `id|structure|description|category` line. The id and
/// structure are required and non-empty; the description defaults to empty,
/// the category to [`Pattern::DEFAULT_CATEGORY`].
fn parse_pattern_line(
    path: &Path,
    line_number: usize,
    line: &str,
) -> Result<Pattern, LexiconError> {
    let mut fields = line.split('|').map(str::trim);
    let id = fields.next().filter(|field| !field.is_empty());
    let structure = fields.next().filter(|field| !field.is_empty());

    let (Some(id), Some(structure)) = (id, structure) else {
        return Err(LexiconError::MalformedLine {
            path: path.to_path_buf(),
            line_number,
            content: line.to_string(),
        });
    };

    let description = fields.next().unwrap_or("");
    let category = fields
        .next()
        .filter(|field| !field.is_empty())
        .unwrap_or(Pattern::DEFAULT_CATEGORY);

    Ok(Pattern::new(id, structure)
        .with_description(description)
        .with_category(category))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(line: &str) -> Result<Pattern, LexiconError> {
        parse_pattern_line(Path::new("patterns.txt"), 1, line)
    }

    #[rstest]
    fn parse_pattern_line_reads_all_four_fields() {
        let pattern = parse("فاعل|فاعل|اسم الفاعل|اسم").unwrap();
        assert_eq!(pattern.id(), "فاعل");
        assert_eq!(pattern.structure(), "فاعل");
        assert_eq!(pattern.description(), "اسم الفاعل");
        assert_eq!(pattern.category(), "اسم");
    }

    #[rstest]
    fn parse_pattern_line_defaults_optional_fields() {
        let pattern = parse("فاعل|فاعل").unwrap();
        assert_eq!(pattern.description(), "");
        assert_eq!(pattern.category(), "general");
    }

    #[rstest]
    fn parse_pattern_line_defaults_empty_category() {
        let pattern = parse("فاعل|فاعل|وصف|").unwrap();
        assert_eq!(pattern.description(), "وصف");
        assert_eq!(pattern.category(), "general");
    }

    #[rstest]
    fn parse_pattern_line_trims_fields() {
        let pattern = parse(" فاعل | فاعل | وصف | اسم ").unwrap();
        assert_eq!(pattern.id(), "فاعل");
        assert_eq!(pattern.category(), "اسم");
    }

    #[rstest]
    #[case("فاعل")]
    #[case("فاعل|")]
    #[case("|فاعل")]
    #[case("|")]
    fn parse_pattern_line_rejects_missing_required_fields(#[case] line: &str) {
        let error = parse(line).unwrap_err();
        assert!(matches!(error, LexiconError::MalformedLine { .. }));
    }

    #[rstest]
    fn load_report_display_counts_both_outcomes() {
        let report = LoadReport {
            loaded: 12,
            skipped: 2,
        };
        assert_eq!(report.to_string(), "12 loaded, 2 skipped");
    }

    #[rstest]
    fn load_roots_surfaces_missing_files_as_io_errors() {
        let mut store = RootStore::new();
        let error = load_roots("definitely/not/here.txt", &mut store).unwrap_err();
        assert!(matches!(error, LexiconError::Io { .. }));
        assert!(store.is_empty());
    }

    #[rstest]
    fn load_patterns_surfaces_missing_files_as_io_errors() {
        let mut store = PatternStore::new();
        let error = load_patterns("definitely/not/here.txt", &mut store).unwrap_err();
        assert!(matches!(error, LexiconError::Io { .. }));
        assert!(store.is_empty());
    }
}
