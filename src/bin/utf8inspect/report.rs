//! Report rendering for the `bytes` and `codepoints` subcommands.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use utf8inspect::{
    count_codepoints, split_codepoints, validate_strict, CodepointRun, DecodeError,
    DecodeErrorKind, DecodeResult,
};

/// Inputs are scanned up to this many bytes, whatever their actual length.
const MAX_SCAN_LEN: usize = 1 << 16;

/// Each byte cell in a codepoint row is this wide: `  %3u (0x%02X)`.
const BYTE_CELL_WIDTH: usize = 11;

/// Exit codes for the report commands.
pub mod exit_codes {
    /// Every input decoded cleanly.
    pub const SUCCESS: i32 = 0;
    /// At least one input was invalid UTF-8.
    pub const INVALID: i32 = 1;
    /// I/O error reading stdin.
    pub const IO_ERROR: i32 = 2;
}

/// ANSI color codes for error output.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const MESSAGE: &str = "\x1b[0;33m"; // Yellow
}

/// Color scheme that can be disabled.
struct ColorScheme {
    error: &'static str,
    message: &'static str,
    reset: &'static str,
}

impl ColorScheme {
    fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: colors::ERROR,
                message: colors::MESSAGE,
                reset: colors::RESET,
            }
        } else {
            Self {
                error: "",
                message: "",
                reset: "",
            }
        }
    }
}

/// Arguments for the `bytes` subcommand.
#[derive(Debug, Parser)]
pub struct BytesArgs {
    /// Input strings to analyze (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub inputs: Vec<String>,
}

/// Arguments for the `codepoints` subcommand.
#[derive(Debug, Parser)]
pub struct CodepointsArgs {
    /// Input strings to analyze (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub inputs: Vec<String>,

    /// List codepoints for pure-ASCII inputs too (skipped by default)
    #[arg(short, long)]
    pub all: bool,

    /// Suggest a Python quoting style for each input
    #[arg(long = "python-quotes")]
    pub python_quotes: bool,

    /// Also reject overlong encodings, surrogates, and codepoints above U+10FFFF
    #[arg(short, long)]
    pub strict: bool,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    pub no_color: bool,
}

/// One input to analyze: its bytes plus a label for report headers.
struct Input {
    bytes: Vec<u8>,
}

impl Input {
    fn display(&self) -> String {
        let end = scan_end(&self.bytes);
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }
}

/// Collect the inputs: argument strings, or all of stdin as one input.
fn gather_inputs(args: &[String]) -> io::Result<Vec<Input>> {
    if args.is_empty() {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Ok(vec![Input { bytes }])
    } else {
        Ok(args
            .iter()
            .map(|s| Input {
                bytes: s.as_bytes().to_vec(),
            })
            .collect())
    }
}

/// Bytes considered by a scan: up to the first NUL or the 64 KiB cap.
fn scan_end(bytes: &[u8]) -> usize {
    let bound = bytes.len().min(MAX_SCAN_LEN);
    bytes[..bound].iter().position(|&b| b == 0).unwrap_or(bound)
}

/// Run the `bytes` subcommand.
pub fn run_bytes(args: BytesArgs) -> Result<i32> {
    let inputs = match gather_inputs(&args.inputs) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: failed to read from stdin: {}", e);
            return Ok(exit_codes::IO_ERROR);
        }
    };

    for (i, input) in inputs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_byte_report(i + 1, input);
    }

    Ok(exit_codes::SUCCESS)
}

/// Print the per-byte table for one input.
fn print_byte_report(index: usize, input: &Input) {
    let end = scan_end(&input.bytes);
    println!("{:<4} bytes in #{:<4} {}", end, index, input.display());

    for (j, &byte) in input.bytes[..end].iter().enumerate() {
        println!(
            "byte {:>5}:  {:>3} (0x{:02X})  {}",
            j + 1,
            byte,
            byte,
            render_byte(byte)
        );
    }
}

/// Render a byte for the report: the character itself when printable ASCII.
fn render_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        (byte as char).to_string()
    } else {
        "(not ascii)".to_string()
    }
}

/// Run the `codepoints` subcommand.
pub fn run_codepoints(args: CodepointsArgs) -> Result<i32> {
    let use_color = if args.no_color || std::env::var_os("NO_COLOR").is_some() {
        false
    } else if args.color {
        true
    } else {
        atty::is(atty::Stream::Stderr)
    };
    let scheme = ColorScheme::new(use_color);

    let inputs = match gather_inputs(&args.inputs) {
        Ok(inputs) => inputs,
        Err(e) => {
            if !args.quiet {
                eprintln!(
                    "{}error{}: failed to read from stdin: {}",
                    scheme.error, scheme.reset, e
                );
            }
            return Ok(exit_codes::IO_ERROR);
        }
    };

    let mut any_invalid = false;
    for (i, input) in inputs.iter().enumerate() {
        let end = scan_end(&input.bytes);
        let bytes = &input.bytes[..end];

        if args.quiet {
            // Exit-code-only mode counts without allocating runs
            let valid = if args.strict {
                validate_strict(bytes, MAX_SCAN_LEN).is_ok()
            } else {
                count_codepoints(bytes, MAX_SCAN_LEN).is_ok()
            };
            if !valid {
                any_invalid = true;
            }
            continue;
        }

        let outcome = if args.strict {
            validate_strict(bytes, MAX_SCAN_LEN)
                .and_then(|()| split_codepoints(bytes, MAX_SCAN_LEN))
        } else {
            split_codepoints(bytes, MAX_SCAN_LEN)
        };

        if i > 0 {
            println!();
        }
        match outcome {
            Ok(result) => print_codepoint_report(i + 1, input, &result, &args),
            Err(err) => {
                // Render what decoded cleanly, then say exactly what broke.
                // The prefix split cannot fail.
                let prefix = split_codepoints(&bytes[..err.offset], MAX_SCAN_LEN)
                    .expect("valid prefix");
                print_codepoint_report(i + 1, input, &prefix, &args);
                print_decode_error(&err, bytes, &scheme);
                any_invalid = true;
            }
        }
    }

    if any_invalid {
        Ok(exit_codes::INVALID)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Print the per-codepoint table for one input.
fn print_codepoint_report(
    index: usize,
    input: &Input,
    result: &DecodeResult,
    args: &CodepointsArgs,
) {
    let quote = if args.python_quotes {
        python_quote(result.runs())
    } else {
        ""
    };
    let ascii_note = if result.is_ascii_only() {
        "(all ascii) "
    } else {
        ""
    };
    println!(
        "{:<4} utf8 codepoints in #{:<4} {}{}{}{}",
        result.count(),
        index,
        ascii_note,
        quote,
        input.display(),
        quote
    );

    // Pure-ASCII listings are noise unless explicitly requested
    if result.is_ascii_only() && !args.all {
        return;
    }

    for (k, run) in result.runs().iter().enumerate() {
        print!("utf8 {:>5}:", k + 1);
        for &byte in run.as_bytes() {
            print!("  {:>3} (0x{:02X})", byte, byte);
        }
        let padding = (result.max_width() - run.width().bytes()) * BYTE_CELL_WIDTH;
        println!(
            "{:pad$}  {}  U+{:04X} (raw 0x{:X})",
            "",
            render_run(run),
            run.scalar_value(),
            run.raw_value(),
            pad = padding
        );
    }
}

/// Render a run for the report, substituting unprintable codepoints.
fn render_run(run: &CodepointRun) -> char {
    match run.as_char() {
        Some(c) if !c.is_control() => c,
        _ => '\u{FFFD}',
    }
}

/// Pick a Python quoting style for the decoded codepoints.
///
/// Double quotes when the text holds single quotes, single quotes when it
/// holds double quotes, and triple quotes once spaces mix with either.
fn python_quote(runs: &[CodepointRun]) -> &'static str {
    let mut has_dquote = false;
    let mut has_squote = false;
    let mut has_space = false;

    for run in runs {
        match run.as_bytes()[0] {
            b'"' => has_dquote = true,
            b'\'' => has_squote = true,
            b' ' => has_space = true,
            _ => {}
        }
    }

    if has_squote && !has_dquote {
        "\""
    } else if !has_squote && has_dquote {
        "'"
    } else if has_space {
        if has_squote || has_dquote {
            "\"\"\""
        } else {
            "'"
        }
    } else {
        ""
    }
}

/// Print a formatted decode error to stderr.
fn print_decode_error(err: &DecodeError, input: &[u8], scheme: &ColorScheme) {
    let byte_info = if err.offset < input.len() {
        format!(" (byte 0x{:02X})", input[err.offset])
    } else {
        String::new()
    };

    eprintln!(
        "{}error{}: {}{}{}",
        scheme.error, scheme.reset, err, byte_info, error_hint(err.kind, scheme)
    );
}

/// Format an additional hint for certain error types.
fn error_hint(kind: DecodeErrorKind, scheme: &ColorScheme) -> String {
    let hint = match kind {
        DecodeErrorKind::InvalidLeadByte => Some("bytes 0x80-0xBF and 0xF8-0xFF cannot start a codepoint"),
        DecodeErrorKind::MalformedContinuation => Some("expected byte 0x80-0xBF"),
        DecodeErrorKind::TruncatedSequence => None,
        DecodeErrorKind::OverlongEncoding => Some("use shortest possible encoding"),
        DecodeErrorKind::SurrogateCodepoint => Some("U+D800-U+DFFF are reserved for UTF-16"),
        DecodeErrorKind::OutOfRangeCodepoint => Some("maximum is U+10FFFF"),
    };

    match hint {
        Some(h) => format!(" {}{}{}", scheme.message, h, scheme.reset),
        None => String::new(),
    }
}
