//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Placeholder values left over from example configuration files.
const PLACEHOLDERS: &[&str] = &["replaceme", "your_login", "your_password"];

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_credential("login", &config.account.login)?;
    validate_credential("password", &config.account.password)?;
    validate_base_url(&config.site.base_url)?;
    validate_site(config)?;
    validate_file_name_format(&config.export.file_name_format)?;

    if config.login_form.form_id.trim().is_empty() {
        return Err(Error::MissingConfig("login_form.form_id".to_string()));
    }

    Ok(())
}

/// Validate a credential value.
pub fn validate_credential(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingConfig(format!(
            "{} (set {} in the environment or .env file)",
            field,
            field.to_uppercase()
        )));
    }

    let lower = value.to_lowercase();
    if PLACEHOLDERS.iter().any(|p| lower == *p) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' appears to be a placeholder", value),
        });
    }

    Ok(())
}

/// Validate the base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = url::Url::parse(base_url).map_err(|e| Error::ConfigValidation {
        field: "site.base_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", base_url, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::ConfigValidation {
            field: "site.base_url".to_string(),
            message: format!("Unsupported scheme '{}', expected http or https", scheme),
        }),
    }
}

fn validate_site(config: &Config) -> Result<()> {
    if config.site.num_pages == 0 {
        return Err(Error::ConfigValidation {
            field: "site.num_pages".to_string(),
            message: "At least one listing page is required".to_string(),
        });
    }

    if !config.site.node_list_path.contains("{page}") {
        return Err(Error::ConfigValidation {
            field: "site.node_list_path".to_string(),
            message: "Listing path must contain a {page} placeholder".to_string(),
        });
    }

    Ok(())
}

/// Validate the output file name template.
pub fn validate_file_name_format(format: &str) -> Result<()> {
    if !format.contains("{page_number}") {
        return Err(Error::ConfigValidation {
            field: "export.file_name_format".to_string(),
            message: "Template must contain {page_number} so node files do not collide"
                .to_string(),
        });
    }

    Ok(())
}
