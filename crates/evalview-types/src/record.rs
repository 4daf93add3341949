use crate::document::ResultDocument;
use crate::status::{Status, classify};
use std::path::Path;

/// One discovered result file.
///
/// Fields are private so that the two constructors can keep
/// `status == Error` exactly when `document` is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    filename: String,
    name: String,
    document: Option<ResultDocument>,
    status: Status,
    parse_error: Option<String>,
}

impl ResultRecord {
    /// Record for a file whose content parsed; status comes from [`classify`]
    pub fn parsed(filename: impl Into<String>, document: ResultDocument) -> Self {
        let filename = filename.into();
        let status = classify(&document);
        Self {
            name: display_name(&filename),
            filename,
            document: Some(document),
            status,
            parse_error: None,
        }
    }

    /// Record for a file that could not be read or parsed
    pub fn failed(filename: impl Into<String>, message: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            name: display_name(&filename),
            filename,
            document: None,
            status: Status::Error,
            parse_error: Some(message.into()),
        }
    }

    /// Parse JSON text, falling back to an error record on syntax errors
    pub fn from_json(filename: impl Into<String>, text: &str) -> Self {
        match ResultDocument::parse(text) {
            Ok(document) => Self::parsed(filename, document),
            Err(e) => Self::failed(filename, format!("Invalid JSON: {}", e)),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> Option<&ResultDocument> {
        self.document.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }
}

/// Filename without its extension
fn display_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Aggregate status tally over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pass: usize,
    pub fail: usize,
    pub error: usize,
}

impl StatusCounts {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            match record.status() {
                Status::Pass => counts.pass += 1,
                Status::Fail => counts.fail += 1,
                Status::Error => counts.error += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.error
    }
}
