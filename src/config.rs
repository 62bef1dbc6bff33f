//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "room-timer")]
#[command(about = "An in-memory HTTP server tracking pausable room timers")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Origin allowed to call the API from a browser
    #[arg(long, default_value = "http://localhost:5173")]
    pub cors_origin: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_frontend_setup() {
        let config = Config::try_parse_from(["room-timer"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn verbose_flag_enables_debug() {
        let config = Config::try_parse_from(["room-timer", "-v", "-p", "9000"]).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level(), "debug");
    }
}
