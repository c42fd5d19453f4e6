use crate::domain::model::{Mark, StudentKey};
use crate::domain::ports::MarkRepository;
use crate::utils::error::{ProgressError, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 3] = ["subject", "score", "year"];
pub const DEFAULT_FILE_PREFIX: &str = "student_marks_";

/// Keeps each student's marks in `{data_dir}/{prefix}{key}.csv`.
#[derive(Debug, Clone)]
pub struct CsvFileRepository {
    data_dir: PathBuf,
    file_prefix: String,
}

impl CsvFileRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(data_dir, DEFAULT_FILE_PREFIX)
    }

    pub fn with_prefix(data_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    pub fn path_for(&self, key: &StudentKey) -> PathBuf {
        self.data_dir
            .join(format!("{}{}.csv", self.file_prefix, key.as_str()))
    }
}

impl MarkRepository for CsvFileRepository {
    fn load(&self, key: &StudentKey) -> Result<Vec<Mark>> {
        let path = self.path_for(key);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No marks file at {}, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // Any bad row throws away the whole file.
        match read_marks(file, &path) {
            Ok(marks) => {
                tracing::debug!("Loaded {} marks from {}", marks.len(), path.display());
                Ok(marks)
            }
            Err(e) => {
                tracing::debug!("Discarding stored marks: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, key: &StudentKey, marks: &[Mark]) -> Result<()> {
        let path = self.path_for(key);
        if !self.data_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.data_dir)?;
        }

        let tmp_path = temp_path_for(&path);
        write_marks(&tmp_path, marks)?;
        fs::rename(&tmp_path, &path)?;

        tracing::debug!("Saved {} marks to {}", marks.len(), path.display());
        Ok(())
    }
}

/// Parses a marks table. The first row is taken as the header and only has
/// to be readable; every other row must be `subject,score,year` with whole
/// numbers. A blank line after the header counts as a bad row.
pub fn read_marks<R: Read>(mut source: R, path: &Path) -> Result<Vec<Mark>> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    if let Some(line) = first_blank_data_line(&bytes) {
        return Err(corrupt(path, format!("row {}: blank line", line)));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());
    reader
        .headers()
        .map_err(|e| corrupt(path, format!("header: {}", e)))?;

    let mut marks = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| corrupt(path, e.to_string()))?;
        let mark = parse_row(&record).map_err(|reason| {
            corrupt(path, format!("row {}: {}", row + 2, reason))
        })?;
        marks.push(mark);
    }
    Ok(marks)
}

/// Line number of the first empty line after the header, ignoring newlines
/// inside quoted fields.
fn first_blank_data_line(bytes: &[u8]) -> Option<usize> {
    let mut in_quotes = false;
    let mut line = 1;
    let mut line_len = 0;
    for &b in bytes {
        match b {
            b'"' => {
                in_quotes = !in_quotes;
                line_len += 1;
            }
            b'\n' if !in_quotes => {
                if line_len == 0 && line > 1 {
                    return Some(line);
                }
                line += 1;
                line_len = 0;
            }
            b'\r' if !in_quotes => {}
            _ => line_len += 1,
        }
    }
    None
}

fn parse_row(record: &StringRecord) -> std::result::Result<Mark, String> {
    if record.len() != HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            record.len()
        ));
    }
    let number = |i: usize| {
        record[i]
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("{} '{}' is not a whole number", HEADER[i], &record[i]))
    };
    Ok(Mark::new(&record[0], number(1)?, number(2)?))
}

fn write_marks(path: &Path, marks: &[Mark]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for mark in marks {
        writer.serialize(mark)?;
    }
    writer.flush()?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

fn corrupt(path: &Path, reason: String) -> ProgressError {
    ProgressError::FileCorrupt {
        path: path.display().to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<Mark>> {
        read_marks(Cursor::new(text.as_bytes()), Path::new("test.csv"))
    }

    #[test]
    fn test_read_marks() {
        let marks = parse("subject,score,year\nMaths,87,1\nPhysics,74,2\n").unwrap();
        assert_eq!(marks, vec![Mark::new("Maths", 87, 1), Mark::new("Physics", 74, 2)]);
    }

    #[test]
    fn test_header_only_and_empty_text() {
        assert!(parse("subject,score,year\n").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_bad_number_is_corrupt() {
        let err = parse("subject,score,year\nMaths,NotANumber,1\nPhysics,74,2\n").unwrap_err();
        assert!(matches!(err, ProgressError::FileCorrupt { .. }));
    }

    #[test]
    fn test_wrong_column_count_is_corrupt() {
        assert!(parse("subject,score,year\nMaths,87\n").is_err());
        assert!(parse("subject,score,year\nMaths,87,1,extra\n").is_err());
    }

    #[test]
    fn test_quoted_subject_with_comma() {
        let marks = parse("subject,score,year\n\"Art, history\",65,3\n").unwrap();
        assert_eq!(marks, vec![Mark::new("Art, history", 65, 3)]);
    }

    #[test]
    fn test_out_of_range_values_still_load() {
        let marks = parse("subject,score,year\nMaths,150,9\n").unwrap();
        assert_eq!(marks, vec![Mark::new("Maths", 150, 9)]);
    }

    #[test]
    fn test_invalid_utf8_header_is_corrupt() {
        let result = read_marks(
            Cursor::new(&b"subj\xffect,score,year\nMaths,87,1\n"[..]),
            Path::new("test.csv"),
        );
        assert!(matches!(result, Err(ProgressError::FileCorrupt { .. })));
    }

    #[test]
    fn test_blank_lines() {
        assert!(parse("subject,score,year\nMaths,87,1\n\nPhysics,74,2\n").is_err());
        assert!(parse("subject,score,year\r\nMaths,87,1\r\n\r\n").is_err());
        assert!(parse("subject,score,year\n\n").is_err());
        // a newline inside a quoted subject is not a blank row
        let marks = parse("subject,score,year\n\"Art\n\nhistory\",65,3\n").unwrap();
        assert_eq!(marks, vec![Mark::new("Art\n\nhistory", 65, 3)]);
        assert_eq!(first_blank_data_line(b"\nMaths,87,1\n"), None);
    }

    #[test]
    fn test_temp_path_is_a_hidden_sibling() {
        let tmp = temp_path_for(Path::new("/data/student_marks_Ada.csv"));
        assert_eq!(tmp, PathBuf::from("/data/.student_marks_Ada.csv.tmp"));
    }
}
