//! HTML to document conversion.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::ExportFormat;
use crate::error::{Error, Result};

/// Converts an HTML fragment into a document file.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// Write `html` as a `format` document at `output`.
    async fn convert(&self, html: &str, format: ExportFormat, output: &Path) -> Result<()>;
}

/// Converter backed by the external `pandoc` program.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: PathBuf,
}

impl PandocConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, html: &str, format: ExportFormat, output: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .args(["--from", "html", "--to", format.pandoc_writer(), "--output"])
            .arg(output);

        if format == ExportFormat::Html {
            command.arg("--standalone");
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::PandocNotFound(self.program.display().to_string())
                } else {
                    Error::Conversion(format!("Failed to run pandoc: {}", e))
                }
            })?;

        // pandoc may exit before reading all of stdin; its status and stderr
        // explain that better than the broken pipe does.
        let fed = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(html.as_bytes()).await,
            None => Ok(()),
        };

        let result = child
            .wait_with_output()
            .await
            .map_err(|e| Error::Conversion(format!("Failed to wait for pandoc: {}", e)))?;

        if !result.status.success() {
            let status = result
                .status
                .code()
                .map_or_else(|| result.status.to_string(), |code| code.to_string());
            return Err(Error::Conversion(format!(
                "pandoc exited with status {}: {}",
                status,
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        fed.map_err(|e| Error::Conversion(format!("Failed to feed pandoc: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl DocumentConverter for PandocConverter {
    async fn convert(&self, html: &str, format: ExportFormat, output: &Path) -> Result<()> {
        let partial = partial_path(output);

        if let Err(e) = self.run(html, format, &partial).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e);
        }

        fs::rename(&partial, output).await?;
        Ok(())
    }
}

/// Hidden path in the output directory that pandoc writes to before the file
/// is moved into place.
///
/// The name does not grow with the output name, so any output name that fits
/// the file system has a partial path that fits too. A run interrupted
/// mid-conversion never leaves a file at `output`.
pub fn partial_path(output: &Path) -> PathBuf {
    output.with_file_name(format!(".{}.partial", uuid::Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_path_is_hidden_sibling() {
        let output = Path::new("export/42_news_My Page.docx");
        let partial = partial_path(output);

        assert_eq!(partial.parent(), output.parent());
        let name = partial.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with('.'));
        assert!(name.ends_with(".partial"));
        assert_ne!(partial_path(output), partial);
    }

    #[test]
    fn test_partial_path_length_is_fixed() {
        let long_title = "Ж".repeat(120);
        let output = PathBuf::from("export").join(format!("7_page_{}.docx", long_title));
        let partial = partial_path(&output);

        // "." + hyphenated uuid + ".partial"
        assert_eq!(partial.file_name().unwrap().len(), 1 + 36 + 8);
    }

    #[tokio::test]
    async fn test_missing_pandoc_binary() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");
        let converter = PandocConverter::new(dir.path().join("no-such-pandoc"));

        let err = converter
            .convert("<p>x</p>", ExportFormat::Docx, &output)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::PandocNotFound(_)));
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    fn fake_pandoc(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("pandoc");
        std::fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    /// Script that records its arguments and copies stdin to `--output`.
    #[cfg(unix)]
    fn recording_pandoc(dir: &Path) -> (PathBuf, PathBuf) {
        let args = dir.join("args.txt");
        let body = format!(
            r#"printf '%s\n' "$@" > '{}'
out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "--output" ]; then out="$2"; fi
  shift
done
cat > "$out""#,
            args.display()
        );
        (fake_pandoc(dir, &body), args)
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_converts_into_target_path() {
        let bin = tempfile::tempdir().unwrap();
        let export = tempfile::tempdir().unwrap();
        let (program, args) = recording_pandoc(bin.path());
        let output = export.path().join("42_news_My Page.docx");

        PandocConverter::new(program)
            .convert("<p>Body</p>", ExportFormat::Docx, &output)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "<p>Body</p>");
        assert_eq!(std::fs::read_dir(export.path()).unwrap().count(), 1);

        let args = std::fs::read_to_string(args).unwrap();
        let args: Vec<&str> = args.lines().collect();
        assert_eq!(&args[..4], ["--from", "html", "--to", "docx"]);
        assert_eq!(args[4], "--output");
        let partial = Path::new(args[5]);
        assert_eq!(partial.parent(), Some(export.path()));
        assert!(partial.to_str().unwrap().ends_with(".partial"));
        assert!(!args.contains(&"--standalone"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_standalone_html_and_markdown_writer() {
        let bin = tempfile::tempdir().unwrap();
        let export = tempfile::tempdir().unwrap();
        let (program, args) = recording_pandoc(bin.path());
        let converter = PandocConverter::new(program);

        let html_out = export.path().join("1_page_A.html");
        converter
            .convert("<p>A</p>", ExportFormat::Html, &html_out)
            .await
            .unwrap();
        let recorded = std::fs::read_to_string(&args).unwrap();
        assert!(recorded.lines().any(|arg| arg == "--standalone"));
        assert!(html_out.exists());

        let md_out = export.path().join("1_page_A.md");
        converter
            .convert("<p>A</p>", ExportFormat::Md, &md_out)
            .await
            .unwrap();
        let recorded = std::fs::read_to_string(&args).unwrap();
        let recorded: Vec<&str> = recorded.lines().collect();
        assert_eq!(recorded[3], "markdown");
        assert!(md_out.exists());
        assert_eq!(std::fs::read_dir(export.path()).unwrap().count(), 2);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_early_exit_reports_pandoc_stderr() {
        let bin = tempfile::tempdir().unwrap();
        let export = tempfile::tempdir().unwrap();
        let program = fake_pandoc(bin.path(), "echo 'Unknown output format docx' >&2\nexit 22");
        let output = export.path().join("out.docx");
        let html = "x".repeat(1024 * 1024);

        let err = PandocConverter::new(program)
            .convert(&html, ExportFormat::Docx, &output)
            .await
            .unwrap_err();

        match err {
            Error::Conversion(message) => {
                assert_eq!(
                    message,
                    "pandoc exited with status 22: Unknown output format docx"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(std::fs::read_dir(export.path()).unwrap().count(), 0);
    }
}
