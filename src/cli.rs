//! CLI argument definitions using clap derive macros.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use tabela_core::config::{DEFAULT_LOGIN_URL, DEFAULT_TABLE_URL};

/// Scrape the 7vitrines table behind form-based login.
///
/// Logs into the portal with the given credentials, fetches the protected
/// table page, and prints the rows as a JSON envelope on stdout.
#[derive(Parser)]
#[command(name = "tabela")]
#[command(author, version, about)]
pub struct Args {
    /// Portal account email
    #[arg(short, long, env = "SCRAPER_USERNAME")]
    pub username: Option<String>,

    /// Portal account password
    #[arg(short, long, env = "SCRAPER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Login endpoint override (tests / staging)
    #[arg(long, default_value = DEFAULT_LOGIN_URL)]
    pub login_url: String,

    /// Table endpoint override (tests / staging)
    #[arg(long, default_value = DEFAULT_TABLE_URL)]
    pub table_url: String,

    /// Append request log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

// Manual Debug so the password never reaches diagnostic output.
impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("login_url", &self.login_url)
            .field("table_url", &self.table_url)
            .field("log_file", &self.log_file)
            .field("verbose", &self.verbose)
            .field("quiet", &self.quiet)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["tabela"]).unwrap();
        assert!(args.username.is_none());
        assert!(args.password.is_none());
        assert_eq!(args.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(args.table_url, DEFAULT_TABLE_URL);
        assert!(args.log_file.is_none());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_credentials_from_flags() {
        let args = Args::try_parse_from([
            "tabela",
            "--username",
            "user@example.com",
            "--password",
            "hunter2",
        ])
        .unwrap();
        assert_eq!(args.username.as_deref(), Some("user@example.com"));
        assert_eq!(args.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_cli_endpoint_overrides() {
        let args = Args::try_parse_from([
            "tabela",
            "--login-url",
            "http://127.0.0.1:8080/login",
            "--table-url",
            "http://127.0.0.1:8080/teste/table",
        ])
        .unwrap();
        assert_eq!(args.login_url, "http://127.0.0.1:8080/login");
        assert_eq!(args.table_url, "http://127.0.0.1:8080/teste/table");
    }

    #[test]
    fn test_cli_debug_redacts_password() {
        let args = Args::try_parse_from(["tabela", "-p", "hunter2"]).unwrap();
        let rendered = format!("{args:?}");
        assert!(!rendered.contains("hunter2"), "password leaked: {rendered}");
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["tabela", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["tabela", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
