//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ExportFormat};

/// CMS content exporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "cms-export",
    version,
    about = "Export content nodes from a legacy CMS into document files",
    long_about = "Logs into the site as an administrator, walks the admin node listing and \
                  converts the body of every node into a document with pandoc.\n\n\
                  Nodes whose document already exists are skipped, so an interrupted run \
                  can simply be started again."
)]
pub struct Args {
    /// Administrator login name.
    #[arg(long, env = "LOGIN", hide_env_values = true)]
    pub login: Option<String>,

    /// Administrator password.
    #[arg(long, env = "PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Base URL of the site.
    #[arg(short = 'u', long = "base-url")]
    pub base_url: Option<String>,

    /// Number of listing pages to walk.
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// Directory for exported documents.
    #[arg(short = 'd', long = "directory")]
    pub export_directory: Option<PathBuf>,

    /// Output document format.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to the pandoc executable.
    #[arg(long)]
    pub pandoc: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Re-export nodes even if their document already exists.
    #[arg(long)]
    pub overwrite: bool,

    /// Stop at the first node that fails to export.
    #[arg(long)]
    pub fail_fast: bool,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI export format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Word document.
    Docx,
    /// OpenDocument text.
    Odt,
    /// Rich text format.
    Rtf,
    /// Markdown.
    Md,
    /// Standalone HTML.
    Html,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Docx => ExportFormat::Docx,
            FormatArg::Odt => ExportFormat::Odt,
            FormatArg::Rtf => ExportFormat::Rtf,
            FormatArg::Md => ExportFormat::Md,
            FormatArg::Html => ExportFormat::Html,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Credentials
        if let Some(login) = self.login {
            config.account.login = login;
        }

        if let Some(password) = self.password {
            config.account.password = password;
        }

        // Site
        if let Some(base_url) = self.base_url {
            config.site.base_url = base_url;
        }

        if let Some(pages) = self.pages {
            config.site.num_pages = pages;
        }

        // Export options
        if let Some(dir) = self.export_directory {
            config.export.directory = dir;
        }

        if let Some(format) = self.format {
            config.export.format = format.into();
        }

        if let Some(pandoc) = self.pandoc {
            config.export.pandoc_path = pandoc;
        }

        // Boolean flags (only override if set to non-default)
        if self.overwrite {
            config.export.skip_existing = false;
        }

        if self.fail_fast {
            config.export.fail_fast = true;
        }

        if self.quiet {
            config.export.show_progress = false;
        }
    }
}
