//! Errors produced while loading lexicon files.

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// LexiconError
// =============================================================================

/// An error raised while reading a lexicon file.
#[derive(Debug)]
pub enum LexiconError {
    /// Reading the file itself failed.
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A line did not match the expected format. The loaders downgrade this
    /// to a warning and skip the line; it surfaces only through the log.
    MalformedLine {
        /// The file the line came from.
        path: PathBuf,
        /// 1-based line number.
        line_number: usize,
        /// The offending line, trimmed.
        content: String,
    },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(
                    formatter,
                    "failed to read lexicon file {}: {source}",
                    path.display()
                )
            }
            Self::MalformedLine {
                path,
                line_number,
                content,
            } => {
                write!(
                    formatter,
                    "{}:{line_number}: malformed pattern line «{content}»",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::MalformedLine { .. } => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;
    use std::path::Path;

    #[rstest]
    fn io_display_names_the_path() {
        let error = LexiconError::Io {
            path: Path::new("roots.txt").to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            error.to_string(),
            "failed to read lexicon file roots.txt: missing"
        );
        assert!(error.source().is_some());
    }

    #[rstest]
    fn malformed_line_display_names_position_and_content() {
        let error = LexiconError::MalformedLine {
            path: Path::new("patterns.txt").to_path_buf(),
            line_number: 7,
            content: "فاعل".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "patterns.txt:7: malformed pattern line «فاعل»"
        );
        assert!(error.source().is_none());
    }
}
