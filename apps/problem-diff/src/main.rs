//! problem-diff CLI binary entry point.
//! Resolves configuration, runs the comparison, and prints a summary.

use clap::Parser;
use problem_diff::cli::{Cli, Commands, CompareArgs};
use problem_diff::config::{self, CliOverrides};
use problem_diff::error::Error;
use problem_diff::utils::{error_prefix, info_prefix, note_prefix};
use problem_diff::{output, run};
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Compare(args)) => compare(args),
        None => compare(CompareArgs::default()),
    }
}

fn compare(args: CompareArgs) {
    let mode = args.output.clone().unwrap_or_default();
    let eff = match config::resolve_effective(CliOverrides {
        root: args.root,
        first: args.first,
        second: args.second,
        only_first: args.only_first,
        only_second: args.only_second,
        both: args.both,
        output: args.output,
        duplicates: args.duplicates,
        pretty: if args.pretty { Some(true) } else { None },
    }) {
        Ok(eff) => eff,
        Err(e) => fail(&e, &mode),
    };

    let has_config_file = config::CONFIG_FILES
        .iter()
        .any(|f| eff.root.join(f).exists());
    if has_config_file && !eff.config_found {
        eprintln!(
            "{} {}",
            note_prefix(&eff.output),
            "Config file could not be parsed; using defaults."
        );
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    // Keep stdout for the JSON summary alone
    let mut writer: Box<dyn Write> = if eff.output == "json" {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let paths = match run::collect_paths(&eff, &mut reader, &mut writer) {
        Ok(p) => p,
        Err(e) => fail(&e, &eff.output),
    };

    if eff.output != "json" {
        eprintln!(
            "{} {}",
            info_prefix(&eff.output),
            format!("Matching repeated hashes with policy: {}", eff.duplicates)
        );
    }

    match run::process(paths, eff.duplicates, eff.pretty) {
        Ok(report) => output::print_summary(&report.written(), &report.summary, &eff.output),
        Err(e) => fail(&e, &eff.output),
    }
}

fn fail(e: &Error, output: &str) -> ! {
    if e.exit_code() == 2 {
        eprintln!("{} Error processing files: {}", error_prefix(output), e);
    } else {
        eprintln!("{} {}", error_prefix(output), e);
    }
    std::process::exit(e.exit_code());
}
