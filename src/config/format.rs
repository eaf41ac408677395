//! Export format definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document formats the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Word document (default).
    #[default]
    Docx,
    /// OpenDocument text.
    Odt,
    /// Rich text format.
    Rtf,
    /// Markdown.
    #[serde(alias = "markdown")]
    Md,
    /// Standalone HTML.
    Html,
}

impl ExportFormat {
    /// File extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Odt => "odt",
            ExportFormat::Rtf => "rtf",
            ExportFormat::Md => "md",
            ExportFormat::Html => "html",
        }
    }

    /// Writer name understood by pandoc's `--to` option.
    pub fn pandoc_writer(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Odt => "odt",
            ExportFormat::Rtf => "rtf",
            ExportFormat::Md => "markdown",
            ExportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "docx" => Ok(ExportFormat::Docx),
            "odt" => Ok(ExportFormat::Odt),
            "rtf" => Ok(ExportFormat::Rtf),
            "md" | "markdown" => Ok(ExportFormat::Md),
            "html" => Ok(ExportFormat::Html),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert_eq!(".DOCX".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert_eq!("markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Md);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_markdown_uses_pandoc_writer_name() {
        assert_eq!(ExportFormat::Md.extension(), "md");
        assert_eq!(ExportFormat::Md.pandoc_writer(), "markdown");
    }
}
