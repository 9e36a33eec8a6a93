//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::api::DEFAULT_USERS_URL;

/// `user-table` arguments. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-table",
    about = "Browse and filter a remote user directory in the terminal",
    version
)]
pub struct CliArgs {
    /// Endpoint returning a JSON array of users.
    #[arg(long, env = "USER_TABLE_URL", value_name = "url", default_value = DEFAULT_USERS_URL)]
    pub url: String,

    /// Theme file (`key = #RRGGBB` lines). A missing file means the built-in palette.
    #[arg(long, env = "USER_TABLE_THEME", value_name = "path", default_value = "theme.conf")]
    pub theme: PathBuf,

    /// Write logs to this file. Logging is off when omitted.
    #[arg(long = "log-file", env = "USER_TABLE_LOG", value_name = "path")]
    pub log_file: Option<PathBuf>,
}
