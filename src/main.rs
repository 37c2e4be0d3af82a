use clap::Parser;
use name2mtime::cli::Args;
use name2mtime::confirm::confirm;
use name2mtime::output::{display_json, display_summary, init_colors, ResultPrinter};
use name2mtime::update::FileOutcome;
use name2mtime::{logging, process_entries, scan_directory, AppError, Resolver, UpdateOptions};
use std::io::{self, Write};
use tracing::{debug, error, info};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let entries = scan_directory(&args.target_dir)?;
    info!("Found {} entries in {:?}", entries.len(), args.target_dir);

    if !args.dry && !args.yes {
        let confirmed = confirm(&mut io::stdin().lock(), &mut io::stderr())
            .map_err(|e| AppError::Other(format!("Failed to read confirmation: {}", e)))?;

        if !confirmed {
            info!("Aborted by user");
            eprintln!("Aborted, no files were changed.");
            return Ok(());
        }
    }

    let colors_enabled = init_colors();

    let resolver = Resolver::new();
    debug!(matchers = ?resolver, "Resolver ready");

    let options = UpdateOptions { dry_run: args.dry };
    let mut stdout = io::stdout().lock();

    let mut printer = ResultPrinter::new(&mut stdout, colors_enabled);
    let report = process_entries(&args.target_dir, &entries, &resolver, &options, |result| {
        if !args.json {
            printer.print(result);
        }
    });

    // stdout is gone, only the exit code is left to report
    if !printer.is_broken() {
        let displayed = if args.json {
            display_json(&report, &mut stdout)
        } else {
            display_summary(&report, &mut stdout, colors_enabled)
        };
        displayed
            .and_then(|()| stdout.flush())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    }

    let failed: Vec<String> = report
        .files
        .iter()
        .filter(|f| matches!(f.outcome, FileOutcome::Failed { .. }))
        .map(|f| f.name.clone())
        .collect();

    if !failed.is_empty() {
        return Err(AppError::UpdateFailed {
            failed: failed.len(),
            files: failed,
        });
    }

    Ok(())
}
