use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::runtime::Runtime;

use breachwatch::config::{validate_base_url, Config};
use breachwatch::logging::{init_file_tracing, init_stderr_tracing};
use breachwatch::lookup::LookupController;
use breachwatch::report::{current_year, format_footer, format_report, format_tips, ReportRenderer};

/// Exit code for a lookup that failed to reach the service.
const EXIT_LOOKUP_FAILED: u8 = 2;
/// Exit code for configuration and usage errors.
const EXIT_USAGE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "breachwatch")]
#[command(version)]
#[command(about = "Check whether an email address appears in known data breaches")]
#[command(after_help = "EXIT CODES (check):
    0  Lookup completed (breached or not)
    1  Configuration or usage error
    2  The lookup service could not be reached

Run without a command to start the interactive UI.")]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the lookup service base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one email address and print the report
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Email address to look up
    email: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Omit the security tips and footer from text output
    #[arg(long)]
    no_tips: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match &cli.command {
        Some(Command::Check(_)) => init_stderr_tracing(),
        None => init_file_tracing(),
    }

    let config = load_config(&cli)?;
    let runtime = Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Some(Command::Check(args)) => run_check(&runtime, &config, args),
        None => {
            let controller =
                LookupController::from_config(&config.lookup, runtime.handle().clone())
                    .context("Failed to create lookup client")?;
            let renderer = ReportRenderer::new(&config.display);
            breachwatch::ui::run(controller, renderer).context("Terminal UI failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        validate_base_url(base_url)?;
        config.lookup.base_url = base_url.clone();
    }

    Ok(config)
}

fn run_check(runtime: &Runtime, config: &Config, args: CheckArgs) -> Result<ExitCode> {
    if args.email.trim().is_empty() {
        bail!("Email address must not be empty. Usage: breachwatch check <EMAIL>");
    }

    let controller = LookupController::from_config(&config.lookup, runtime.handle().clone())
        .context("Failed to create lookup client")?;
    let Some(state) = runtime.block_on(controller.check(&args.email)) else {
        bail!("Email address must not be empty");
    };

    let report = ReportRenderer::new(&config.display).render(&state);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
        if !args.no_tips {
            println!();
            print!("{}", format_tips());
            println!();
            println!("{}", format_footer(current_year()));
        }
    }

    if state.transport_error.is_some() {
        return Ok(ExitCode::from(EXIT_LOOKUP_FAILED));
    }
    Ok(ExitCode::SUCCESS)
}
