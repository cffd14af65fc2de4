use std::{fmt, str::FromStr};

use crate::input::InputError;

pub type Answer = i64;

pub type PartFn = fn(&str) -> Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {}", self.number())
    }
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(format!("no part `{other}`, expected 1 or 2")),
        }
    }
}

/// One registered puzzle day.
///
/// Days are plain function pointers so the runner and the tests can drive
/// any of them the same way.
#[derive(Clone, Copy)]
pub struct Day {
    pub number: u8,
    pub title: &'static str,
    pub part1: PartFn,
    pub part2: PartFn,
    pub input: fn() -> Result<String, InputError>,
}

impl Day {
    pub fn solve(&self, part: Part, input: &str) -> Answer {
        match part {
            Part::One => (self.part1)(input),
            Part::Two => (self.part2)(input),
        }
    }

    pub fn load_input(&self) -> Result<String, InputError> {
        (self.input)()
    }

    pub fn name(&self) -> String {
        format!("day{:02}", self.number)
    }
}

impl fmt::Debug for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Day")
            .field("number", &self.number)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
