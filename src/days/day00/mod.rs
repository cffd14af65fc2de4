//! Day 00

use crate::{input::InputError, solution::Answer};

pub const TITLE: &str = "Day 00";

pub fn input() -> Result<String, InputError> {
    crate::read_input!()
}

pub fn part1(_input: &str) -> Answer {
    0
}

pub fn part2(_input: &str) -> Answer {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "";

    #[test]
    fn part1_solves_example() {
        assert_eq!(part1(EXAMPLE), 0);
    }

    #[test]
    fn part2_solves_example() {
        assert_eq!(part2(EXAMPLE), 0);
    }
}
