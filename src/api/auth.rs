//! Administrator login.

use crate::api::client::{check_status, SiteClient};
use crate::config::{AccountConfig, LoginFormConfig};
use crate::error::{Error, Result};

/// Build the login form body.
///
/// Credentials go into `name`/`pass`, followed by the static form fields.
pub fn build_login_form(account: &AccountConfig, form: &LoginFormConfig) -> Vec<(String, String)> {
    let mut fields = vec![
        ("name".to_string(), account.login.clone()),
        ("pass".to_string(), account.password.clone()),
        ("form_id".to_string(), form.form_id.clone()),
        ("op".to_string(), form.op.clone()),
        ("form_build_id".to_string(), form.form_build_id.clone()),
    ];

    fields.extend(
        form.extra_fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );

    fields
}

/// Log into the site, leaving the session cookie in the client's jar.
///
/// Fails on any non-200 response or when the site set no cookie. A cookie
/// scoped to a narrower path than the base URL still counts.
pub async fn login(
    client: &SiteClient,
    login_path: &str,
    account: &AccountConfig,
    form: &LoginFormConfig,
) -> Result<()> {
    let url = client.url(login_path)?;
    let fields = build_login_form(account, form);

    let response = client.post_form(&url, &fields).await?;
    let set_cookie = response.cookies().next().is_some();
    check_status(response).map_err(|e| match e {
        Error::HttpStatus { .. } => Error::Authentication(e.to_string()),
        other => other,
    })?;

    if !set_cookie && !client.has_cookies() {
        return Err(Error::Authentication(
            "Session cookies were not set".to_string(),
        ));
    }

    tracing::info!("Logged in as {}", account.login);
    Ok(())
}
