use crate::error::ScoreError;
use crate::evaluation::ScoreReport;
use crate::utils::file_parsing::format_float;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PUBLIC_SCORES_FILE: &str = "public_scores.txt";
pub const ALL_SCORES_FILE: &str = "all_scores.txt";

/// Renders one `<Title> test` block with a tab-indented line per metric.
pub fn render_section(title: &str, report: &ScoreReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title} test");
    for m in report.measurements() {
        let _ = writeln!(
            out,
            "\t{title} {}: {}",
            m.kind.report_label(),
            format_float(m.value)
        );
    }
    out
}

pub fn render_public(public: &ScoreReport) -> String {
    render_section("Public", public)
}

pub fn render_all(public: &ScoreReport, private: &ScoreReport) -> String {
    let mut out = render_section("Public", public);
    out.push_str(&render_section("Private", private));
    out
}

/// Where the two reports ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPaths {
    pub public: PathBuf,
    pub all: PathBuf,
}

/// Writes `public_scores.txt` and `all_scores.txt` into one directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Creates the output directory if needed and overwrites both reports.
    ///
    /// An empty output path means the current directory.
    pub fn write(
        &self,
        public: &ScoreReport,
        private: &ScoreReport,
    ) -> Result<ReportPaths, ScoreError> {
        if !self.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.output_dir)?;
        }

        let paths = ReportPaths {
            public: self.output_dir.join(PUBLIC_SCORES_FILE),
            all: self.output_dir.join(ALL_SCORES_FILE),
        };

        fs::write(&paths.public, render_public(public))?;
        fs::write(&paths.all, render_all(public, private))?;
        debug!(public = %paths.public.display(), all = %paths.all.display(), "reports written");

        Ok(paths)
    }
}
