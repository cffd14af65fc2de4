use aoc::{
    Day, Part,
    cmd::{Cli, Commands},
    config::Config,
    days, logging,
    scaffold::Scaffold,
};
use clap::Parser;
use cli_table::{Cell, Style, Table, print_stdout};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use miette::{IntoDiagnostic, Result, miette};
use owo_colors::OwoColorize;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = logging::init(cli.verbose)?;

    let config = Config::load_or_default(cli.config.clone())?;
    debug!("{config:?}");

    match &cli.command {
        Commands::Run { day, part } => {
            let day = match day {
                Some(number) => days::find(*number)
                    .ok_or_else(|| miette!(help = "see `aoc list`", "Day {number} is not registered"))?,
                None => days::latest().ok_or_else(|| miette!("No days registered yet"))?,
            };

            let parts = match part {
                Some(part) => vec![*part],
                None => Part::ALL.to_vec(),
            };

            run_day(&config, day, &parts)
        }
        Commands::List => {
            let table = days::DAYS
                .iter()
                .map(|day| {
                    vec![
                        day.number.cell(),
                        day.title.cell(),
                        match day.load_input() {
                            Ok(_) => "present".to_string(),
                            Err(err) => err.to_string(),
                        }
                        .cell(),
                    ]
                })
                .collect::<Vec<_>>()
                .table()
                .title(vec![
                    "Day".cell().bold(true),
                    "Title".cell().bold(true),
                    "Input".cell().bold(true),
                ]);

            print_stdout(table).into_diagnostic()?;
            Ok(())
        }
        Commands::New { day } => {
            let scaffold = Scaffold::new(config.days_dir.clone());
            let dir = scaffold.create(*day)?;
            let (module_line, entry_line) = Scaffold::registration_hint(*day);

            println!("{} {}", "created:".green().bold(), dir.display());
            println!(
                "{} add to {}:\n  {}\n  {}",
                "next:".blue().bold(),
                config.days_dir.join("mod.rs").display(),
                module_line.purple(),
                entry_line.purple(),
            );
            Ok(())
        }
        #[cfg(feature = "completions")]
        Commands::Completions { shell } => {
            shell.generate(&mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_day(config: &Config, day: &Day, parts: &[Part]) -> Result<()> {
    println!(
        "{} {} {}",
        config.year.to_string().dimmed(),
        day.name().green().bold(),
        day.title.underline().blue()
    );

    let input = day.load_input()?;

    let spinner_style = ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")
        .into_diagnostic()?
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");

    for part in parts {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!("[{}/2]", part.number()));
        pb.set_message(format!("solving {part}"));
        pb.enable_steady_tick(Duration::from_millis(80));

        let started = Instant::now();
        let answer = day.solve(*part, &input);
        let elapsed = started.elapsed();

        let mut line = format!("{}: {}", part, answer.bold());
        if config.timing {
            line.push_str(&format!(" {}", format!("({elapsed:.2?})").dimmed()));
        }
        pb.finish_with_message(line);
    }

    Ok(())
}
