//! docassert CLI

use std::io::{self, IsTerminal, Write};

use docassert::demo;
use docassert::reporting::write_summary;
use docassert::{IntoDiagnostic, Runner, RunnerConfig};
use docassert_diagnostic::emitter::{ColorMode, TerminalEmitter};
use docassert_diagnostic::ErrorCode;

fn main() {
    docassert::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "demo" => {
            let (config, colors) = match parse_run_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: docassert demo [--filter <text>] [--verbose] [--color=<when>]");
                    std::process::exit(1);
                }
            };
            run_demo(config, colors);
        }
        "explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: docassert explain <code>");
                std::process::exit(1);
            };
            explain(code);
        }
        "codes" => {
            for code in ErrorCode::ALL {
                println!("{code}  {}", code.description());
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn run_demo(config: RunnerConfig, colors: ColorMode) {
    let verbose = config.verbose;
    let runner = match demo::registry().and_then(|registry| Runner::with_config(registry, config)) {
        Ok(runner) => runner,
        Err(err) => {
            let mut emitter = TerminalEmitter::stderr(colors, io::stderr().is_terminal());
            emitter.emit(&err.to_diagnostic());
            emitter.flush();
            std::process::exit(1);
        }
    };

    let summary = runner.run_all(&demo::catalogue());

    let mut stdout = io::stdout().lock();
    let colors = if colors == ColorMode::Auto && !io::stdout().is_terminal() {
        ColorMode::Never
    } else {
        colors
    };
    if let Err(err) = write_summary(&mut stdout, &summary, verbose, colors) {
        eprintln!("error: failed to write report: {err}");
        std::process::exit(1);
    }
    let _ = stdout.flush();

    std::process::exit(summary.exit_code());
}

fn parse_run_options(args: &[String]) -> Result<(RunnerConfig, ColorMode), String> {
    let mut config = RunnerConfig::default();
    let mut colors = ColorMode::Auto;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" | "-v" => config.verbose = true,
            "--filter" => {
                let value = iter.next().ok_or("--filter needs a value")?;
                config.filter = Some(value.clone());
            }
            "--color=auto" => colors = ColorMode::Auto,
            "--color=always" => colors = ColorMode::Always,
            "--color=never" => colors = ColorMode::Never,
            other => {
                if let Some(value) = other.strip_prefix("--filter=") {
                    config.filter = Some(value.to_string());
                } else {
                    return Err(format!("unknown option `{other}`"));
                }
            }
        }
    }
    Ok((config, colors))
}

fn explain(code: &str) {
    let Some(code) = ErrorCode::parse(code) else {
        eprintln!("Unknown error code: {code}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit. Run `docassert codes` for a list.");
        std::process::exit(1);
    };
    println!("{code}: {}", code.description());
}

fn print_usage() {
    println!("docassert - run @assert directives from documentation comments");
    println!();
    println!("Usage: docassert <command> [options]");
    println!();
    println!("Commands:");
    println!("  demo [options]   Run the built-in demo catalogue");
    println!("  explain <code>   Describe an error code (e.g. E3001)");
    println!("  codes            List every error code");
    println!("  help             Show this message");
    println!();
    println!("Demo options:");
    println!("  --filter <text>  Only run cases whose name or symbol contains <text>");
    println!("  -v, --verbose    Show passing cases too");
    println!("  --color=<when>   auto, always or never");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=docassert=debug) for tracing output.");
}
