use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use qc_core::config::AppConfig;
use qc_term::{load_config, run_app, LaunchOptions};

/// Command-line arguments for qrcheck
#[derive(Parser, Debug)]
#[command(name = "qrcheck")]
#[command(about = "Scan entrance QR codes and validate them against the ticket service")]
#[command(version)]
struct Args {
    /// TOML launch configuration
    #[arg(short, long, env = "QC_CONFIG")]
    config: Option<PathBuf>,

    /// Scanner device path, or "-" for a scanner that types into this terminal
    #[arg(short, long)]
    device: Option<String>,

    /// Directory for settings, counters and logs
    #[arg(long, env = "QC_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Validation service URL to save before starting
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Feedback mode: bell, audio or off
    #[arg(short, long)]
    feedback: Option<String>,

    /// Also write logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Flags win over the config file.
    fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(device) = &self.device {
            config.scanner_device = device.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(feedback) = &self.feedback {
            config.feedback_mode = feedback.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => load_config(path.clone())?,
        None => AppConfig::empty(),
    };
    let config = args.apply_overrides(file_config);

    run_app(
        config,
        LaunchOptions {
            endpoint: args.endpoint,
            verbose: args.verbose,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let args = Args::try_parse_from([
            "qrcheck",
            "--device",
            "/dev/ttyACM1",
            "--feedback",
            "off",
        ])
        .unwrap();
        let file_config = AppConfig {
            scanner_device: "/dev/ttyACM0".into(),
            feedback_mode: "bell".into(),
            duplicate_window_ms: 1500,
            ..AppConfig::empty()
        };

        let config = args.apply_overrides(file_config);

        assert_eq!(config.scanner_device, "/dev/ttyACM1");
        assert_eq!(config.feedback_mode, "off");
        assert_eq!(config.duplicate_window_ms, 1500);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let args = Args::try_parse_from(["qrcheck"]).unwrap();
        let file_config = AppConfig {
            data_dir: PathBuf::from("/srv/gate"),
            ..AppConfig::empty()
        };

        assert_eq!(args.apply_overrides(file_config.clone()), file_config);
    }

    #[test]
    fn endpoint_is_not_part_of_launch_config() {
        let args = Args::try_parse_from(["qrcheck", "-e", "https://x"]).unwrap();
        assert_eq!(args.endpoint.as_deref(), Some("https://x"));
        assert_eq!(args.apply_overrides(AppConfig::empty()), AppConfig::empty());
    }
}
