use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{Result, SplitError};

/// A `;` comment line followed by exactly one blank line.
static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";.*\n\n").expect("delimiter pattern is valid"));

/// One block of the input between delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// 1-based position in the unfiltered split.
    pub ordinal: usize,
    pub content: &'a str,
}

impl Segment<'_> {
    /// Empty or whitespace-only segments are never written. The ASCII
    /// separators U+001C..U+001F count as whitespace too.
    pub fn is_blank(&self) -> bool {
        self.content
            .chars()
            .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
    }

    pub fn file_name(&self) -> String {
        format!("{}.txt", self.ordinal)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub output_dir: PathBuf,
    pub segments: usize,
    pub written: Vec<usize>,
    pub skipped: Vec<usize>,
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits `text` on the delimiter, keeping empty pieces so ordinals line up
/// with the positions in the source file. `text` is expected to use `\n`
/// line endings, see [`normalize_newlines`].
pub fn split_segments(text: &str) -> Vec<Segment<'_>> {
    DELIMITER
        .split(text)
        .enumerate()
        .map(|(i, content)| Segment { ordinal: i + 1, content })
        .collect()
}

/// Reads `input`, creates `output_dir` and writes every non-blank segment to
/// `<ordinal>.txt` inside it.
///
/// `output_dir` must not exist yet and only its last component is created.
/// The first error aborts the run; files already written are left in place.
pub fn split(input: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<SplitReport> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    let text = read_input(input)?;
    let segments = split_segments(&text);
    debug!(input = %input.display(), segments = segments.len(), "split input");

    create_output_dir(output_dir)?;
    write_segments(output_dir, &segments)
}

fn write_segments(output_dir: &Path, segments: &[Segment<'_>]) -> Result<SplitReport> {
    let mut report = SplitReport {
        output_dir: output_dir.to_path_buf(),
        segments: segments.len(),
        ..Default::default()
    };

    for segment in segments {
        if segment.is_blank() {
            debug!(ordinal = segment.ordinal, "skipping blank segment");
            report.skipped.push(segment.ordinal);
            continue;
        }

        let path = output_dir.join(segment.file_name());
        write_new_file(&path, segment.content).map_err(|source| SplitError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(ordinal = segment.ordinal, path = %path.display(), "wrote level");
        report.written.push(segment.ordinal);
    }

    Ok(report)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(normalize_newlines)
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SplitError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => SplitError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })
}

fn create_output_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => SplitError::DirectoryExists {
            path: path.to_path_buf(),
        },
        _ => SplitError::Write {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_new_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
