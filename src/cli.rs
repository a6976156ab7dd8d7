// Command-line front end for Anydiff.
//
// Splits two inputs into elements (lines, chars or bytes), computes the
// shortest edit script between them and prints the script, its runs, or a
// JSON summary. Exit status follows diff(1): 0 same, 1 different, 2 trouble.

use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::compare::{diff_eq, equal};
use crate::edit::EditScript;
use crate::myers::diff;

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_SAME: i32 = 0;
const EXIT_DIFFERENT: i32 = 1;
const EXIT_TROUBLE: i32 = 2;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Shortest edit script between two inputs.
#[derive(Parser, Debug)]
#[command(
    name = "anydiff",
    version,
    about = "Myers shortest edit script between two files",
    arg_required_else_help = true
)]
struct Cli {
    /// Original input (`-` for stdin).
    #[arg(value_hint = ValueHint::FilePath)]
    old: PathBuf,

    /// Modified input (`-` for stdin).
    #[arg(value_hint = ValueHint::FilePath)]
    new: PathBuf,

    /// Element granularity.
    #[arg(long, short = 'm', value_enum, default_value_t = Mode::Lines)]
    mode: Mode,

    /// Compare elements case-insensitively.
    #[arg(long, short = 'i')]
    ignore_case: bool,

    /// Ignore leading and trailing whitespace when comparing lines (line mode only).
    #[arg(long, short = 'w')]
    trim: bool,

    /// Print one `<symbol> <count>` line per run of identical operations.
    #[arg(long, conflicts_with = "json_output")]
    runs: bool,

    /// Print a JSON summary instead of the script.
    #[arg(long = "json")]
    json_output: bool,

    /// Quiet mode (errors only).
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Lines,
    Chars,
    Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Script,
    Runs,
    Json,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Options {
    old: PathBuf,
    new: PathBuf,
    mode: Mode,
    ignore_case: bool,
    trim: bool,
    output: Output,
    log_filter: &'static str,
}

fn resolve_options(cli: Cli) -> Options {
    let output = if cli.json_output {
        Output::Json
    } else if cli.runs {
        Output::Runs
    } else {
        Output::Script
    };
    let log_filter = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    Options {
        old: cli.old,
        new: cli.new,
        mode: cli.mode,
        ignore_case: cli.ignore_case,
        trim: cli.trim,
        output,
        log_filter,
    }
}

/// Reject option combinations that would be silently ignored.
fn check_options(opts: &Options) -> Result<(), String> {
    if opts.trim && opts.mode != Mode::Lines {
        return Err(format!(
            "--trim applies to line mode only, not --mode {}",
            match opts.mode {
                Mode::Lines => "lines",
                Mode::Chars => "chars",
                Mode::Bytes => "bytes",
            }
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Input handling
// ---------------------------------------------------------------------------

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read(path)
    }
}

/// Comparison key for one line under the active options.
fn line_key<'a>(line: &'a str, opts: &Options) -> Cow<'a, str> {
    let line = if opts.trim { line.trim() } else { line };
    if opts.ignore_case {
        Cow::Owned(line.to_lowercase())
    } else {
        Cow::Borrowed(line)
    }
}

/// Diff two raw inputs according to `opts.mode`.
///
/// Returns the script with the element counts of both sides.
fn compare_inputs(old: &[u8], new: &[u8], opts: &Options) -> (EditScript, usize, usize) {
    match opts.mode {
        Mode::Bytes => {
            let script = if opts.ignore_case {
                diff(old, new, |a: &u8, b: &u8| a.eq_ignore_ascii_case(b))
            } else {
                diff_eq(old, new)
            };
            (script, old.len(), new.len())
        }
        Mode::Chars => {
            let old: Vec<char> = String::from_utf8_lossy(old).chars().collect();
            let new: Vec<char> = String::from_utf8_lossy(new).chars().collect();
            let script = if opts.ignore_case {
                diff(&old, &new, |a: &char, b: &char| {
                    a.to_lowercase().eq(b.to_lowercase())
                })
            } else {
                diff(&old, &new, equal)
            };
            (script, old.len(), new.len())
        }
        Mode::Lines => {
            let old_text = String::from_utf8_lossy(old);
            let new_text = String::from_utf8_lossy(new);
            let old: Vec<Cow<'_, str>> = old_text.lines().map(|l| line_key(l, opts)).collect();
            let new: Vec<Cow<'_, str>> = new_text.lines().map(|l| line_key(l, opts)).collect();
            (diff_eq(&old, &new), old.len(), new.len())
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn write_report<W: Write>(
    out: &mut W,
    script: &EditScript,
    old_len: usize,
    new_len: usize,
    output: Output,
) -> io::Result<()> {
    match output {
        Output::Script => {
            writeln!(out, "{script}")?;
            writeln!(out, "distance: {}", script.distance())
        }
        Output::Runs => {
            for run in script.runs() {
                writeln!(out, "{} {}", run.op, run.len)?;
            }
            Ok(())
        }
        Output::Json => {
            let json = serde_json::json!({
                "script": script.to_string(),
                "distance": script.distance(),
                "keeps": script.keeps(),
                "additions": script.additions(),
                "deletions": script.deletions(),
                "old_len": old_len,
                "new_len": new_len,
            });
            let text = serde_json::to_string_pretty(&json).map_err(io::Error::other)?;
            writeln!(out, "{text}")
        }
    }
}

// ---------------------------------------------------------------------------
// Diff command
// ---------------------------------------------------------------------------

fn cmd_diff(opts: &Options) -> i32 {
    if opts.old.as_os_str() == "-" && opts.new.as_os_str() == "-" {
        eprintln!("anydiff: only one input may be read from stdin");
        return EXIT_TROUBLE;
    }

    let old = match read_input(&opts.old) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("anydiff: {}: {e}", opts.old.display());
            return EXIT_TROUBLE;
        }
    };
    let new = match read_input(&opts.new) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("anydiff: {}: {e}", opts.new.display());
            return EXIT_TROUBLE;
        }
    };

    log::info!(
        "comparing {} ({} bytes) with {} ({} bytes) by {:?}",
        opts.old.display(),
        old.len(),
        opts.new.display(),
        new.len(),
        opts.mode
    );

    let (script, old_len, new_len) = compare_inputs(&old, &new, opts);
    log::info!(
        "{old_len} vs {new_len} elements, distance {}",
        script.distance()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &script, old_len, new_len, opts.output) {
        eprintln!("anydiff: write: {e}");
        return EXIT_TROUBLE;
    }

    if script.distance() == 0 {
        EXIT_SAME
    } else {
        EXIT_DIFFERENT
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap and runs the diff.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);

    if let Err(msg) = check_options(&opts) {
        eprintln!("anydiff: {msg}");
        process::exit(EXIT_TROUBLE);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(opts.log_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    process::exit(cmd_diff(&opts));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
