use crate::input::INPUT_FILE_NAME;
use log::info;
use miette::{Diagnostic, Result};
use std::{fs, path::PathBuf};
use thiserror::Error;

const TEMPLATE: &str = include_str!("days/day00/mod.rs");
const TEMPLATE_MARKER: &str = "Day 00";

pub const LAST_DAY: u8 = 25;

#[derive(Debug)]
pub struct Scaffold {
    days_dir: PathBuf,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(code(scaffold::io_error))]
    IoError(#[from] std::io::Error),

    #[error("Day {0} already exists at {1}")]
    #[diagnostic(
        code(scaffold::already_exists),
        help("Remove the directory first if you really want to start over")
    )]
    AlreadyExists(u8, PathBuf),

    #[error("There is no day {0}")]
    #[diagnostic(code(scaffold::invalid_day), help("Puzzle days run from 1 to 25"))]
    InvalidDay(u8),
}

impl Scaffold {
    pub fn new(days_dir: PathBuf) -> Self {
        Self { days_dir }
    }

    pub fn module_name(day: u8) -> String {
        format!("day{day:02}")
    }

    pub fn day_dir(&self, day: u8) -> PathBuf {
        self.days_dir.join(Self::module_name(day))
    }

    /// Renders the day-00 template for `day`.
    pub fn render(day: u8) -> String {
        TEMPLATE.replace(TEMPLATE_MARKER, &format!("Day {day:02}"))
    }

    /// Writes `dayNN/mod.rs` and an empty `dayNN/input.txt`, returning the
    /// new directory. Never touches an existing day.
    pub fn create(&self, day: u8) -> Result<PathBuf> {
        if !(1..=LAST_DAY).contains(&day) {
            return Err(ScaffoldError::InvalidDay(day).into());
        }

        let dir = self.day_dir(day);
        if dir.exists() {
            return Err(ScaffoldError::AlreadyExists(day, dir).into());
        }

        fs::create_dir_all(&dir).map_err(ScaffoldError::from)?;
        fs::write(dir.join("mod.rs"), Self::render(day)).map_err(ScaffoldError::from)?;
        fs::write(dir.join(INPUT_FILE_NAME), "").map_err(ScaffoldError::from)?;

        info!("scaffolded day {day} in {}", dir.display());
        Ok(dir)
    }

    /// The module declaration and the `DAYS` entry to add to `days/mod.rs`.
    pub fn registration_hint(day: u8) -> (String, String) {
        let module = Self::module_name(day);
        (
            format!("pub mod {module};"),
            format!("day!({day}, {module}),"),
        )
    }
}
