use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use urledit::UrlComponent;

/// Top-level CLI for urledit.
#[derive(Debug, Parser)]
#[command(name = "urledit")]
#[command(about = "Read and edit URL query params, hash params and components", long_about = None)]
pub struct Cli {
    /// Log debug details to stderr (overridden by URLEDIT_LOG / RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the first value of a query parameter.
    GetQuery { url: String, key: String },

    /// Set a query parameter, replacing existing values.
    SetQuery {
        url: String,
        key: String,
        value: String,
    },

    /// Remove a query parameter.
    DelQuery { url: String, key: String },

    /// Print the value of a hash parameter.
    GetHash { url: String, key: String },

    /// Set a hash parameter in the fragment.
    SetHash {
        url: String,
        key: String,
        value: String,
    },

    /// Remove a hash parameter from the fragment.
    DelHash { url: String, key: String },

    /// List the fragment path (prefixed with '#') and every hash parameter.
    HashParams { url: String },

    /// Print a URL component.
    Get {
        #[arg(value_enum)]
        component: ComponentArg,
        url: String,
    },

    /// Replace a URL component.
    Set {
        #[arg(value_enum)]
        component: ComponentArg,
        url: String,
        value: String,
    },

    /// Check a URL; exits with status 2 when it is not valid.
    Check {
        url: String,

        /// Also require an http or https scheme.
        #[arg(long)]
        http: bool,
    },

    /// Print the file extension of the URL path.
    FileType { url: String },

    /// Print the URL without query and fragment.
    Base { url: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ComponentArg {
    Path,
    Host,
    Hostname,
    Protocol,
}

impl From<ComponentArg> for UrlComponent {
    fn from(arg: ComponentArg) -> Self {
        match arg {
            ComponentArg::Path => UrlComponent::Path,
            ComponentArg::Host => UrlComponent::Host,
            ComponentArg::Hostname => UrlComponent::Hostname,
            ComponentArg::Protocol => UrlComponent::Protocol,
        }
    }
}

impl CliCommand {
    pub fn run(self) -> Result<ExitCode> {
        tracing::debug!("running command: {:?}", self);

        let output = match self {
            CliCommand::GetQuery { url, key } => urledit::get_query_param(&url, &key)
                .with_context(|| format!("reading query param '{}'", key))?,
            CliCommand::SetQuery { url, key, value } => urledit::set_query_param(&url, &key, &value)
                .with_context(|| format!("setting query param '{}'", key))?,
            CliCommand::DelQuery { url, key } => urledit::del_query_param(&url, &key)
                .with_context(|| format!("deleting query param '{}'", key))?,
            CliCommand::GetHash { url, key } => urledit::get_hash_param(&url, &key)
                .with_context(|| format!("reading hash param '{}'", key))?,
            CliCommand::SetHash { url, key, value } => urledit::set_hash_param(&url, &key, &value)
                .with_context(|| format!("setting hash param '{}'", key))?,
            CliCommand::DelHash { url, key } => urledit::del_hash_param(&url, &key)
                .with_context(|| format!("deleting hash param '{}'", key))?,
            CliCommand::HashParams { url } => {
                let query = urledit::get_hash_params(&url).context("reading hash params")?;
                let mut lines = vec![format!("#{}", query.path)];
                lines.extend(query.pairs.iter().map(|pair| pair.to_string()));
                lines.join("\n")
            }
            CliCommand::Get { component, url } => {
                let component = UrlComponent::from(component);
                urledit::get_component(&url, component)
                    .with_context(|| format!("reading {}", component))?
            }
            CliCommand::Set {
                component,
                url,
                value,
            } => {
                let component = UrlComponent::from(component);
                urledit::set_component(&url, component, &value)
                    .with_context(|| format!("setting {}", component))?
            }
            CliCommand::Check { url, http } => {
                let valid = if http {
                    urledit::check_valid_http_url(&url)
                } else {
                    urledit::check_valid(&url)
                };
                println!("{}", valid);
                return Ok(if valid { ExitCode::SUCCESS } else { ExitCode::from(2) });
            }
            CliCommand::FileType { url } => {
                urledit::get_url_file_type(&url).context("reading file type")?
            }
            CliCommand::Base { url } => urledit::get_base_url(&url).context("building base URL")?,
        };

        println!("{}", output);
        Ok(ExitCode::SUCCESS)
    }
}
