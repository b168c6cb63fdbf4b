mod debug_report;

use chrono::NaiveDateTime;
use reminder_intent::{Context, IntentParser, Locale, RuleExtractor};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let parser = match IntentParser::new(config.locale.code()) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let ctx = config.reference_time.map_or_else(Context::default, |reference_time| Context { reference_time });
    let report = parser.parse_verbose_with(&config.input, &ctx);
    let trace = RuleExtractor::new(config.locale).trace(&report.normalized, &ctx);
    debug_report::print_run(&report, &trace, config.color);

    if report.outcome.is_err() {
        std::process::exit(1);
    }
}

struct CliConfig {
    input: String,
    locale: Locale,
    reference_time: Option<NaiveDateTime>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut locale = Locale::default();
    let mut reference_time = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("reminder-intent {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--locale" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --locale expects a value".to_string())?;
                locale = parse_locale(&value)?;
            }
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = Some(parse_reference(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--locale=") => {
                locale = parse_locale(arg.trim_start_matches("--locale="))?;
            }
            _ if arg.starts_with("--reference=") => {
                reference_time = Some(parse_reference(arg.trim_start_matches("--reference="))?);
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, locale, reference_time, color })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse().map_err(|err| format!("error: {err} (expected one of: en, fr, ja)"))
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "reminder-intent {version}

Parse a spoken reminder phrase and show every stage.

Usage:
  reminder-intent [OPTIONS] [--] <phrase...>
  reminder-intent [OPTIONS] --input <text>

Options:
  -i, --input <text>         Phrase to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  -l, --locale <code>        Locale: en, fr or ja. Default: en
  --reference <timestamp>    \"Now\" in YYYY-MM-DDTHH:MM:SS. Default: local time.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Logging:
  RUST_LOG=reminder_intent=debug   Stage results.
  RUST_LOG=reminder_intent=trace   Rule activation and template attempts.

Exit codes:
  0  Phrase parsed.
  1  Phrase rejected.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
