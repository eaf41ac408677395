//! Configuration structures and loading logic.

use crate::config::format::ExportFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub login_form: LoginFormConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Source site endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL every path is joined against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Login form endpoint.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Admin page listing the content types.
    #[serde(default = "default_content_types_path")]
    pub content_types_path: String,

    /// Admin node listing, `{page}` is replaced with the page index.
    #[serde(default = "default_node_list_path")]
    pub node_list_path: String,

    /// Number of listing pages to walk.
    #[serde(default = "default_num_pages")]
    pub num_pages: u32,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout. The HTTP client default applies when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            content_types_path: default_content_types_path(),
            node_list_path: default_node_list_path(),
            num_pages: default_num_pages(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

/// Administrator credentials.
///
/// Normally supplied through the `LOGIN` and `PASSWORD` environment variables.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub login: String,

    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Static fields of the site's login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginFormConfig {
    #[serde(default = "default_form_id")]
    pub form_id: String,

    /// Value of the submit button.
    #[serde(default = "default_op")]
    pub op: String,

    /// Form build token issued by the site. Expires with the site's form cache.
    #[serde(default = "default_form_build_id")]
    pub form_build_id: String,

    /// Any further fields posted verbatim.
    #[serde(default = "default_extra_fields")]
    pub extra_fields: BTreeMap<String, String>,
}

impl Default for LoginFormConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            op: default_op(),
            form_build_id: default_form_build_id(),
            extra_fields: default_extra_fields(),
        }
    }
}

/// Export options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the documents are written to.
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// File name template with `{page_number}`, `{content_type}` and `{page_name}`.
    #[serde(default = "default_file_name_format")]
    pub file_name_format: String,

    #[serde(default)]
    pub format: ExportFormat,

    /// Skip nodes whose output file already exists.
    #[serde(default = "default_true")]
    pub skip_existing: bool,

    /// Path or name of the pandoc executable.
    #[serde(default = "default_pandoc_path")]
    pub pandoc_path: PathBuf,

    /// Abort the run on the first node that fails.
    #[serde(default)]
    pub fail_fast: bool,

    /// Whether to draw progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_name_format: default_file_name_format(),
            format: ExportFormat::default(),
            skip_existing: true,
            pandoc_path: default_pandoc_path(),
            fail_fast: false,
            show_progress: true,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

fn default_login_path() -> String {
    "/?q=node/100&destination=node/100".to_string()
}

fn default_content_types_path() -> String {
    "/?q=admin/content/types".to_string()
}

fn default_node_list_path() -> String {
    "/?q=admin/content/node&page={page}".to_string()
}

fn default_num_pages() -> u32 {
    57
}

fn default_user_agent() -> String {
    concat!("cms-export/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_form_id() -> String {
    "user_login_block".to_string()
}

fn default_op() -> String {
    "Вход в систему".to_string()
}

fn default_form_build_id() -> String {
    "form-wbr8299J4ABONGV6xQSbNLtC2kSDLoMIn3oPBgP2Byo".to_string()
}

fn default_extra_fields() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("openid_identifier".to_string(), String::new()),
        (
            "openid.return_to".to_string(),
            "http://localhost/?q=openid/authenticate&destination=node%2F100".to_string(),
        ),
    ])
}

fn default_export_directory() -> PathBuf {
    PathBuf::from("./export")
}

fn default_file_name_format() -> String {
    "{page_number}_{content_type}_{page_name}".to_string()
}

fn default_pandoc_path() -> PathBuf {
    PathBuf::from("pandoc")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Listing URL path for a page index.
    pub fn node_list_path(&self, page: u32) -> String {
        self.site.node_list_path.replace("{page}", &page.to_string())
    }
}
