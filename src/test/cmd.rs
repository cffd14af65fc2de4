use clap::{CommandFactory, Parser};

use crate::{
    Part,
    cmd::{Cli, Commands},
};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn run_takes_optional_day_and_part() {
    let cli = Cli::try_parse_from(["aoc", "run", "3", "--part", "2"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Run {
            day: Some(3),
            part: Some(Part::Two)
        }
    ));

    let cli = Cli::try_parse_from(["aoc", "-vv", "solve"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(matches!(
        cli.command,
        Commands::Run {
            day: None,
            part: None
        }
    ));
}

#[test]
fn rejects_unknown_parts() {
    assert!(Cli::try_parse_from(["aoc", "run", "1", "-p", "3"]).is_err());
}

#[test]
fn config_defaults_to_aoc_kdl() {
    let cli = Cli::try_parse_from(["aoc", "list"]).unwrap();
    assert_eq!(cli.config, std::path::PathBuf::from("aoc.kdl"));
}

#[cfg(feature = "completions")]
#[test]
fn generates_completions() {
    use crate::cmd::Shell;

    let mut out = Vec::new();
    Shell::Bash.generate(&mut out);
    assert!(String::from_utf8(out).unwrap().contains("aoc"));
}
