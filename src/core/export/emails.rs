//! Treatment email exporter
//!
//! Filters a batch of applicants down to the treatment group and writes
//! their email addresses, tagged for the campaign, to a dated CSV file.

use crate::domain::applicant::Applicant;
use crate::domain::Result;
use chrono::Local;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Default campaign tag written next to every exported address
pub const DEFAULT_TAG: &str = "ab-test";

/// Writes treatment-group contact emails to a dated CSV file
pub struct EmailExporter {
    directory: PathBuf,
    tag: String,
}

impl EmailExporter {
    /// Create an exporter writing into the given directory
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            tag: DEFAULT_TAG.to_string(),
        }
    }

    /// Override the campaign tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Export the treatment-group emails from the given batch
    ///
    /// Writes a two-column CSV (`email,tag`) named
    /// `<directory>/<today:YYYY-MM-DD>_<tag>.csv`. The filename uses the
    /// current date at export time, not the experiment's target date. Any
    /// existing file of the same name is overwritten without warning.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn export_treatment_emails(&self, applicants: &[Applicant]) -> Result<PathBuf> {
        let today = Local::now().date_naive();
        let path = self
            .directory
            .join(format!("{}_{}.csv", today.format("%Y-%m-%d"), self.tag));

        let mut contents = String::from("email,tag\n");
        let mut count = 0usize;
        for applicant in applicants.iter().filter(|a| a.is_treatment()) {
            contents.push_str(&csv_field(&applicant.email));
            contents.push(',');
            contents.push_str(&csv_field(&self.tag));
            contents.push('\n');
            count += 1;
        }

        fs::write(&path, contents)?;

        tracing::info!(
            path = %path.display(),
            count = count,
            tag = %self.tag,
            "Exported treatment emails"
        );

        Ok(path)
    }
}

/// Quote a CSV field if it contains a delimiter, quote, or newline
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
