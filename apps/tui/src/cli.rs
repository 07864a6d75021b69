use clap::{CommandFactory, Parser};
use fan_value_engine::config::{CLUSTER_SUMMARY_ENV, DEBUG_ENV, FAN_DATA_ENV, LOG_FILE_ENV};
use fan_value_engine::View;

#[derive(Debug, Parser)]
#[command(name = "fan_value_engine", version, about = "Fan Value Engine dashboard")]
pub struct CliArgs {
    /// Print the dashboard figures and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless figures as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the fan table path
    #[arg(long, value_name = "PATH")]
    pub fans: Option<String>,

    /// Override the cluster summary path
    #[arg(long, value_name = "PATH")]
    pub clusters: Option<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Section shown at startup (overview, clusters, detail, advanced)
    #[arg(long, value_name = "VIEW", value_parser = parse_view, default_value = "overview")]
    pub view: View,
}

fn parse_view(value: &str) -> Result<View, String> {
    View::parse(value).ok_or_else(|| {
        let known: Vec<&str> = View::ALL.iter().map(|view| view.as_str()).collect();
        format!("unknown view {value:?}, expected one of: {}", known.join(", "))
    })
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.fans {
            std::env::set_var(FAN_DATA_ENV, path);
        }
        if let Some(path) = &self.clusters {
            std::env::set_var(CLUSTER_SUMMARY_ENV, path);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var(LOG_FILE_ENV, path);
        }
        if self.debug {
            std::env::set_var(DEBUG_ENV, "1");
        }
    }
}
