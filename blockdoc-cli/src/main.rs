// Command-line interface for blockdoc
//
// This binary converts between HTML fragments and JSON block documents, and checks the integrity
// of stored block documents.
//
// The core capabilities use the blockdoc-babel crate. This crate is only the shell around it:
// argument parsing, configuration, file IO and logging setup.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  blockdoc <input> --to <format> [--from <format>] [--output <file>]          - Convert between formats (default)
//  blockdoc convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  blockdoc verify <envelope.json>                                              - Check a block document checksum
//  blockdoc --list-formats                                                      - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  blockdoc page.html --to json --extra-pretty false

use blockdoc_babel::{Envelope, Format, FormatRegistry, JsonStyle, FORMAT_NAMES};
use blockdoc_config::{BlockdocConfig, Loader};
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "verify", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("blockdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between HTML fragments and JSON block documents")
        .long_about(
            "blockdoc converts HTML made of block-level elements into a versioned,\n\
            checksummed JSON block document, and renders block documents back to HTML.\n\n\
            Commands:\n  \
            - convert: Transform between formats (html, json)\n  \
            - verify:  Check the checksum of a JSON block document\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            blockdoc page.html --to json                       # Convert to JSON (stdout)\n  \
            blockdoc page.html --to json --extra-pretty false  # Single-line JSON\n  \
            blockdoc doc.json --to html -o page.html           # Render HTML to a file\n  \
            blockdoc verify doc.json                           # Check integrity",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a blockdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between formats.\n\n\
                    Supported formats:\n  \
                    - html: HTML fragment (.html, .htm)\n  \
                    - json: JSON block document (.json, .blocks)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    blockdoc convert page.html --to json           # HTML to JSON (stdout)\n  \
                    blockdoc convert doc.json --to html -o out.html\n  \
                    blockdoc page.html --to json                   # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_parser(PossibleValuesParser::new(FORMAT_NAMES))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: html, json\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
                        .value_parser(PossibleValuesParser::new(FORMAT_NAMES))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Check the checksum of a JSON block document")
                .long_about(
                    "Recomputes the checksum over the blocks of a JSON block document\n\
                    and compares it with the stored one.\n\n\
                    Prints 'ok <checksum>' on success. Exits with status 1 on a\n\
                    mismatch or when the file is not valid JSON.",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the JSON block document")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            let Some(to) = sub_matches.get_one::<String>("to") else {
                fail("--to is required");
            };

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => {
                    let registry = FormatRegistry::default();
                    match registry.detect(Path::new(input)) {
                        Some(detected) => detected.name().to_string(),
                        None => {
                            eprintln!("Error: Could not detect format from filename '{input}'");
                            eprintln!("Please specify --from explicitly");
                            std::process::exit(1);
                        }
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("verify", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            handle_verify_command(input);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BlockdocConfig,
) {
    let registry = FormatRegistry::new(JsonStyle::from(&config.convert.json));

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        fail(&format!("Error reading file '{input}': {e}"));
    });

    tracing::debug!(input, "converting");

    let result = registry
        .convert(&source, from, to, extra_params)
        .unwrap_or_else(|e| {
            fail(&format!("Conversion error: {e}"));
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                fail(&format!("Error writing file '{path}': {e}"));
            });
        }
        None => println!("{result}"),
    }
}

/// Handle the verify command
fn handle_verify_command(input: &str) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        fail(&format!("Error reading file '{input}': {e}"));
    });

    let envelope = Envelope::from_json(&source).unwrap_or_else(|e| {
        fail(&format!("Error reading block document '{input}': {e}"));
    });

    match envelope.verify() {
        Ok(true) => println!("ok {}", envelope.checksum),
        Ok(false) => {
            let actual = blockdoc_babel::envelope::checksum(&envelope.blocks)
                .unwrap_or_else(|e| fail(&format!("Checksum error: {e}")));
            eprintln!("checksum mismatch in '{input}'");
            eprintln!("  stored:   {}", envelope.checksum);
            eprintln!("  computed: {actual}");
            std::process::exit(1);
        }
        Err(e) => fail(&format!("Checksum error: {e}")),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in FormatRegistry::default().formats() {
        println!(
            "  {:<6} {} (.{})",
            format.name(),
            format.description(),
            format.file_extensions().join(", .")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> BlockdocConfig {
    let loader = Loader::new().with_optional_file("blockdoc.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        fail(&format!("Failed to load configuration: {err}"));
    })
}

/// Logs go to stderr so they never mix with converted output.
fn init_logging(config: &BlockdocConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
