use kdl::{KdlDocument, KdlError, KdlNode, KdlValue};
use log::info;
use miette::{Diagnostic, IntoDiagnostic, Result, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "aoc.kdl";
pub const DEFAULT_YEAR: u16 = 2025;
pub const DEFAULT_DAYS_DIR: &str = "src/days";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the config came from, `None` when running on defaults.
    pub path: Option<PathBuf>,
    pub year: u16,
    pub timing: bool,
    pub days_dir: PathBuf,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error(transparent)]
    #[diagnostic(code(config::io_error))]
    IoError(#[from] std::io::Error),

    #[error("Invalid KDL document")]
    #[diagnostic(code(config::parse_error))]
    KdlError(#[from] KdlError),

    #[error("Missing required field: {0}")]
    #[diagnostic(code(config::missing_value))]
    MissingValue(&'static str),

    #[error("Invalid value for {field}: {expected}")]
    #[diagnostic(code(config::wrong_value))]
    WrongValue {
        field: &'static str,
        expected: &'static str,
        #[source_code]
        src: String,
        #[label("this value")]
        bad_span: SourceSpan,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            year: DEFAULT_YEAR,
            timing: false,
            days_dir: PathBuf::from(DEFAULT_DAYS_DIR),
        }
    }
}

impl Config {
    pub fn load(path: PathBuf) -> Result<Self> {
        let config_file = std::fs::read_to_string(&path).into_diagnostic()?;
        let mut config = Self::parse(&config_file)?;

        info!("loaded config from {}", path.display());
        config.path = Some(path);
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file means defaults.
    pub fn load_or_default(path: PathBuf) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn parse(src: &str) -> Result<Self> {
        let kdl = src.parse::<KdlDocument>().into_diagnostic()?;

        let content = kdl
            .get("aoc")
            .ok_or(ConfigError::MissingValue("aoc"))?
            .children()
            .ok_or(ConfigError::MissingValue("aoc node is empty"))?;

        let mut config = Self::default();

        if let Some(node) = content.get("year") {
            let year = first_value(node, "year")?
                .as_integer()
                .and_then(|year| u16::try_from(year).ok())
                .ok_or_else(|| wrong_value(node, "year", "year must be a number like 2025", src))?;
            config.year = year;
        }

        if let Some(node) = content.get("timing") {
            config.timing = first_value(node, "timing")?
                .as_bool()
                .ok_or_else(|| wrong_value(node, "timing", "use #true or #false", src))?;
        }

        if let Some(node) = content.get("days-dir") {
            config.days_dir = first_value(node, "days-dir")?
                .as_string()
                .map(PathBuf::from)
                .ok_or_else(|| wrong_value(node, "days-dir", "paths must be strings", src))?;
        }

        Ok(config)
    }
}

fn first_value<'a>(node: &'a KdlNode, field: &'static str) -> Result<&'a KdlValue, ConfigError> {
    node.entries()
        .first()
        .map(|entry| entry.value())
        .ok_or(ConfigError::MissingValue(field))
}

fn wrong_value(
    node: &KdlNode,
    field: &'static str,
    expected: &'static str,
    src: &str,
) -> ConfigError {
    ConfigError::WrongValue {
        field,
        expected,
        src: src.to_string(),
        bad_span: node.span(),
    }
}
