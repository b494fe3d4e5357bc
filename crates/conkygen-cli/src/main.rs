//! conkygen CLI - render a conky configuration document from a parameter file.

use clap::Parser;
use conkygen_core::{Formatter, ParamTree, StyleOverrides, Theme};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "conkygen")]
#[command(about = "Generate conky configuration documents from YAML or JSON parameters")]
#[command(version)]
struct Cli {
    /// Parameter file (.yaml, .yml, or .json)
    #[arg(required_unless_present = "list_designs")]
    config: Option<PathBuf>,

    /// Design to render
    #[arg(short, long, default_value = "standard")]
    design: String,

    /// List built-in designs and exit
    #[arg(long)]
    list_designs: bool,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Errors surfaced to the user when loading parameters or rendering.
#[derive(Debug)]
enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    UnknownDesign(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Yaml(e) => write!(f, "YAML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::UnknownDesign(name) => {
                write!(f, "unknown design '{name}' (try --list-designs)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parameter file formats the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
}

/// Pick the format from the file extension, falling back to sniffing the
/// first non-whitespace byte. YAML is the default since it is a superset
/// of what people actually write by hand.
fn detect_format(path: &Path, content: &str) -> ConfigFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => ConfigFormat::Yaml,
        Some("json") => ConfigFormat::Json,
        _ => {
            if content.trim_start().starts_with('{') {
                ConfigFormat::Json
            } else {
                ConfigFormat::Yaml
            }
        }
    }
}

fn load_params(path: &Path) -> Result<ParamTree, ConfigError> {
    let content = fs::read_to_string(path)?;
    match detect_format(path, &content) {
        ConfigFormat::Yaml => ParamTree::from_yaml(&content).map_err(ConfigError::Yaml),
        ConfigFormat::Json => ParamTree::from_json(&content).map_err(ConfigError::Json),
    }
}

fn render(config: &Path, design_name: &str) -> Result<String, ConfigError> {
    let design = conkygen_designs::find(design_name)
        .ok_or_else(|| ConfigError::UnknownDesign(design_name.to_string()))?;

    let params = load_params(config)?;
    let mut formatter = Formatter::with_theme(Theme::from_params(&params));
    formatter.set_parameters(&StyleOverrides::from_params(&params));
    design.render(&params, &mut formatter);
    Ok(formatter.generate())
}

fn list_designs() {
    for design in conkygen_designs::builtin() {
        println!("{:<12} {}", design.name(), design.description());
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.list_designs {
        list_designs();
        return;
    }

    // clap guarantees config is present when not listing
    let Some(config) = cli.config else {
        eprintln!("Error: missing parameter file");
        std::process::exit(1);
    };

    let document = match render(&config, &cli.design) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, document + "\n") {
                eprintln!("Error: failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => println!("{document}"),
    }
}
