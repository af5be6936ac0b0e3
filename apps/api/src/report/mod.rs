// Report downloads: the AI review text as a plain-text file or a paginated PDF.

pub mod handlers;
pub mod pdf;

use serde::{Deserialize, Serialize};

/// Which flow produced the report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Review,
    Match,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Txt,
}

impl ReportKind {
    /// Heading printed under the report title.
    pub fn heading(self) -> &'static str {
        match self {
            ReportKind::Review => "Resume Review",
            ReportKind::Match => "Resume Match Report",
        }
    }

    pub fn file_name(self, format: ReportFormat) -> &'static str {
        match (self, format) {
            (ReportKind::Review, ReportFormat::Pdf) => "Resume_Review.pdf",
            (ReportKind::Review, ReportFormat::Txt) => "Resume_Review.txt",
            (ReportKind::Match, ReportFormat::Pdf) => "Resume_Match_Report.pdf",
            (ReportKind::Match, ReportFormat::Txt) => "Resume_Match.txt",
        }
    }
}

impl ReportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Txt => "text/plain; charset=utf-8",
        }
    }
}
