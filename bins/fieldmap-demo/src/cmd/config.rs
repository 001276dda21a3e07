use clap::Args;
use serde::Deserialize;

use super::error::DemoError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub student: StudentConfig,
    pub json: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentConfig {
    pub name: Option<String>,
    pub age: Option<isize>,
    pub average_mark: Option<f32>,
    pub comment: Option<String>,
}

pub fn load_config(path: &str) -> Result<Config, DemoError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| DemoError::Config(format!("cannot read config {path}: {e}")))?;
    toml::from_str(&content).map_err(|e| DemoError::Config(format!("bad config {path}: {e}")))
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug, Default)]
pub struct DemoArgs {
    /// Path to config.toml
    #[arg(long, default_value = "fieldmap-demo.toml", env = "FIELDMAP_DEMO_CONFIG")]
    pub config: String,

    /// Student name
    #[arg(long)]
    pub name: Option<String>,

    /// Student age
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<isize>,

    /// Average mark
    #[arg(long)]
    pub average_mark: Option<f32>,

    /// Private comment, injected into the mapping before populating
    #[arg(long)]
    pub comment: Option<String>,

    /// Print the mapping as JSON instead of `map[k:v ...]`
    #[arg(long)]
    pub json: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Final configuration after merging: defaults < config.toml < CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Effective {
    pub name: String,
    pub age: isize,
    pub average_mark: f32,
    pub comment: String,
    pub json: bool,
}

impl Effective {
    pub fn new(args: &DemoArgs) -> Result<Self, DemoError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if std::path::Path::new(&args.config).exists() {
                    return Err(e);
                }
                tracing::debug!(config = %args.config, "no config file, using defaults");
                Config::default()
            }
        };

        Ok(Self {
            name: args.name.clone().or(cfg.student.name).unwrap_or_else(|| "Вася".into()),
            age: args.age.or(cfg.student.age).unwrap_or(20),
            average_mark: args.average_mark.or(cfg.student.average_mark).unwrap_or(4.8),
            comment: args
                .comment
                .clone()
                .or(cfg.student.comment)
                .unwrap_or_else(|| "Молодец".into()),
            json: args.json || cfg.json.unwrap_or(false),
        })
    }
}
