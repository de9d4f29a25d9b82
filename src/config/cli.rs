use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/analyze";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "topic-analyzer")]
#[command(about = "Submit topics to an analysis service and render the results")]
pub struct CliConfig {
    /// Analysis endpoint [default: http://127.0.0.1:5000/api/analyze]
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout; no timeout when unset
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Write the final page state as HTML to this path
    #[arg(long)]
    pub html_output: Option<String>,

    #[arg(long, help = "Disable ANSI bold in terminal output")]
    pub no_color: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Topics to analyze; reads one topic per line from stdin when empty
    pub topics: Vec<String>,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn html_output_path(&self) -> Option<&str> {
        self.html_output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("--endpoint", self.endpoint())?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("--timeout-seconds", timeout, 1)?;
        }
        if let Some(path) = &self.html_output {
            validation::validate_path("--html-output", path)?;
        }
        Ok(())
    }
}
