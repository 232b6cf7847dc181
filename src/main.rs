mod debug_report;

use dialrange::{Error, LabeledRange, Options, PatternFlags, partition_verbose_with, pattern_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DIALRANGE_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let command = match parse_args() {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let code = match command {
        Command::Pattern { start, end, options } => match pattern_with(&start, &end, &options) {
            Ok(pattern) => {
                println!("{pattern}");
                0
            }
            Err(err) => report_error(&err),
        },
        Command::Partition(config) => run_partition(config),
    };
    std::process::exit(code);
}

enum Command {
    Pattern { start: String, end: String, options: Options },
    Partition(PartitionConfig),
}

struct PartitionConfig {
    input: Option<String>,
    local_digits: usize,
    options: Options,
    color: bool,
}

fn run_partition(config: PartitionConfig) -> i32 {
    let text = match read_input(config.input.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            return 2;
        }
    };
    let ranges = match parse_rows(&text, config.local_digits) {
        Ok(ranges) => ranges,
        Err(err) => {
            eprintln!("{err}");
            return 2;
        }
    };

    match partition_verbose_with(&ranges, &config.options) {
        Ok(res) => {
            debug_report::print_partition(&res.set, &res.details, config.color);
            0
        }
        Err(err) => report_error(&err),
    }
}

fn report_error(err: &Error) -> i32 {
    eprintln!("error: {err}");
    match err {
        Error::InvalidArgument(_) | Error::AmbiguousPrefix(_) => 2,
        Error::NoProgress { .. } => 1,
    }
}

fn parse_args() -> Result<Command, String> {
    let mut args = std::env::args().skip(1);
    let Some(first) = args.next() else {
        return Err(format!("error: no command provided\n\n{}", help_text()));
    };

    match first.as_str() {
        "-h" | "--help" => {
            print_help();
            std::process::exit(0);
        }
        "-V" | "--version" => {
            println!("dialrange {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        "pattern" => parse_pattern_args(args),
        "partition" => parse_partition_args(args),
        other => Err(format!("error: unknown command '{other}'\n\n{}", help_text())),
    }
}

fn parse_pattern_args(args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut options = Options::default();
    let mut bounds: Vec<String> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--anchored" => options.flags |= PatternFlags::ANCHORED,
            "--non-capturing" => options.flags |= PatternFlags::NON_CAPTURING,
            _ if arg.starts_with('-') => return Err(format!("error: unknown option '{arg}'")),
            _ => bounds.push(arg),
        }
    }

    match <[String; 2]>::try_from(bounds) {
        Ok([start, end]) => Ok(Command::Pattern { start, end, options }),
        Err(_) => Err("error: pattern expects exactly two bounds: <start> <end>".to_string()),
    }
}

fn parse_partition_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut input: Option<String> = None;
    let mut local_digits = 0;
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--anchored" => options.flags |= PatternFlags::ANCHORED,
            "--non-capturing" => options.flags |= PatternFlags::NON_CAPTURING,
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--local-digits" => {
                let value = args.next().ok_or_else(|| "error: --local-digits expects a value".to_string())?;
                local_digits = parse_local_digits(&value)?;
            }
            _ if arg.starts_with("--input=") => {
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(arg.trim_start_matches("--input=").to_string());
            }
            _ if arg.starts_with("--local-digits=") => {
                local_digits = parse_local_digits(arg.trim_start_matches("--local-digits="))?;
            }
            _ => return Err(format!("error: unknown option '{arg}'")),
        }
    }

    Ok(Command::Partition(PartitionConfig { input, local_digits, options, color }))
}

fn parse_local_digits(value: &str) -> Result<usize, String> {
    value.trim().parse().map_err(|_| format!("error: invalid local digit count '{value}'"))
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some("-") | None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|err| format!("error: failed to read '{path}': {err}")),
    }
}

/// Parse `owner,start,end[,local_digits]` lines. Blank lines and `#` comments
/// are skipped; `default_digits` applies when a line has no fourth field.
fn parse_rows(text: &str, default_digits: usize) -> Result<Vec<LabeledRange>, String> {
    let mut ranges = Vec::new();
    for (number, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l.trim())) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let (owner, start, end, digits) = match fields.as_slice() {
            [owner, start, end] => (*owner, *start, *end, default_digits),
            [owner, start, end, digits] => {
                let digits = parse_local_digits(digits).map_err(|err| format!("{err} on line {number}"))?;
                (*owner, *start, *end, digits)
            }
            _ => return Err(format!("error: line {number}: expected owner,start,end[,local_digits]")),
        };
        if owner.is_empty() {
            return Err(format!("error: line {number}: missing owner"));
        }
        let range =
            LabeledRange::from_did(owner, start, end, digits).map_err(|err| format!("error: line {number}: {err}"))?;
        ranges.push(range);
    }
    Ok(ranges)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "dialrange {version}

Decimal range to regex generation and DID range partitioning.

Usage:
  dialrange pattern [OPTIONS] <start> <end>
  dialrange partition [OPTIONS] [--input <file>]

Pattern options:
  --anchored                 Wrap the pattern in ^...$.
  --non-capturing            Use (?:...) for alternation groups.

Partition options:
  -i, --input <file>         Read ranges from <file> ('-' or omitted: stdin).
                             One range per line: owner,start,end[,local_digits]
  --local-digits <n>         Trailing digits that are significant when a line
                             has no fourth field. Default: 0 (whole number).
  --anchored                 Wrap fragment patterns in ^...$.
  --non-capturing            Use (?:...) for alternation groups.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.

General:
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}              Log filter (e.g. dialrange=debug). Default: warn.

Exit codes:
  0  Success.
  1  Partition error.
  2  Invalid arguments or input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
