//! CMS Export - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cms_export::{
    api::{self, SiteClient},
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    export::{run_export, PandocConverter},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_)
                | Error::HttpStatus { .. }
                | Error::Http(_)
                | Error::Structure(_) => ExitCode::from(exit_codes::SITE_ERROR as u8),
                Error::Conversion(_) | Error::PandocNotFound(_) => {
                    ExitCode::from(exit_codes::EXPORT_ERROR as u8)
                }
                Error::NodesFailed(_) => ExitCode::from(exit_codes::SOME_NODES_FAILED as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Credentials may live in a local .env file
    let dotenv = dotenvy::dotenv();

    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(
        &config.site.base_url,
        config.site.num_pages,
        &config.export.format.to_string(),
        &config.export.directory.display().to_string(),
    );

    // Log in
    print_info("Logging in...");
    let client = SiteClient::new(&config.site)?;
    api::login(
        &client,
        &config.site.login_path,
        &config.account,
        &config.login_form,
    )
    .await?;
    print_success(&format!("Logged in as: {}", config.account.login));

    // Export every listing page
    let converter = PandocConverter::new(&config.export.pandoc_path);
    let summary = run_export(&client, &config, &converter).await?;

    print_run_stats(&summary);

    if summary.failed() > 0 {
        return Err(Error::NodesFailed(summary.failed()));
    }

    Ok(())
}
