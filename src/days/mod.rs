use crate::solution::Day;

pub mod day00;

macro_rules! day {
    ($number:literal, $module:ident) => {
        Day {
            number: $number,
            title: $module::TITLE,
            part1: $module::part1,
            part2: $module::part2,
            input: $module::input,
        }
    };
}

/// Every registered day, in ascending order. `aoc new` prints the line to add here.
pub const DAYS: &[Day] = &[
    day!(0, day00),
];

pub fn find(number: u8) -> Option<&'static Day> {
    DAYS.iter().find(|day| day.number == number)
}

pub fn latest() -> Option<&'static Day> {
    DAYS.last()
}
