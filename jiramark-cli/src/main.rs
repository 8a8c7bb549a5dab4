// Command-line interface for jiramark
//
// Converts Markdown into Jira wiki markup, ready to paste into an issue description or comment.
//
// Converting:
//
// Input comes from the files given on the command line, concatenated in order, or from stdin when
// no file (or "-") is given. The source format is detected from the first file's extension and can
// be overridden with --from; stdin and unknown extensions are read as markdown.
// Usage:
//  jiramark [<input>...] [--safe] [--max-length N] [-o <file>]           - Convert (default)
//  jiramark convert [<input>...] [--safe] [--max-length N] [-o <file>]   - Same as above (explicit)
//  jiramark inspect [<input>]                                             - Dump the parsed tree as JSON
//  jiramark --list-languages                                              - List {code} languages
//
// Configuration:
//
// Defaults are layered with ./jiramark.toml (if present) and --config <path>. Command-line flags win.
//
// Logging goes to stderr (RUST_LOG, default "warn"; -v for debug) so stdout carries only markup.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use jiramark_babel::formats::jira::language::SUPPORTED_LANGUAGES;
use jiramark_babel::{FormatRegistry, Node};
use jiramark_config::{JiramarkConfig, Loader, LOCAL_CONFIG_FILE};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect"];
const TARGET_FORMAT: &str = "jira";
const FALLBACK_SOURCE_FORMAT: &str = "markdown";

fn build_cli() -> Command {
    Command::new("jiramark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to Jira wiki markup")
        .long_about(
            "jiramark converts CommonMark Markdown (with tables and strikethrough) into Jira wiki markup.\n\n\
            Commands:\n  \
            - convert: Markdown to Jira markup (default, may be omitted)\n  \
            - inspect: Show the parsed document tree as JSON\n\n\
            Examples:\n  \
            jiramark README.md                       # Convert to stdout\n  \
            cat issue.md | jiramark --safe           # Read stdin, drop raw HTML\n  \
            jiramark a.md b.md -o issue.jira         # Concatenate inputs, write a file\n  \
            jiramark notes.md --max-length 30000     # Fit Jira's description limit"
        )
        .subcommand_required(false)
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List the code block languages Jira can highlight")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a jiramark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Markdown to Jira wiki markup (default command)")
                .long_about(
                    "Convert documents to Jira wiki markup.\n\n\
                    Several inputs are concatenated in the given order. Without inputs, or with '-',\n\
                    standard input is read. Output goes to stdout unless -o is given.\n\n\
                    Examples:\n  \
                    jiramark convert input.md                 # Convert (stdout)\n  \
                    jiramark convert input.md -o out.jira     # Write to a file\n  \
                    jiramark input.md --safe                  # 'convert' is optional"
                )
                .arg(input_arg().num_args(0..).action(ArgAction::Append))
                .arg(from_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("safe")
                        .long("safe")
                        .help("Replace raw HTML with <!-- raw HTML omitted -->")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max-length")
                        .long("max-length")
                        .value_name("CHARS")
                        .help("Truncate the output to this many characters (0 for no limit)")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parsed document tree as JSON")
                .arg(input_arg())
                .arg(from_arg()),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path ('-' or nothing for stdin)")
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .help("Source format (auto-detected from file extension if not specified)")
        .value_hint(ValueHint::Other)
}

/// Parses `args`, running `convert` when no command is named.
fn parse_args(cli: Command, args: &[String]) -> Result<ArgMatches, clap::Error> {
    match cli.clone().try_get_matches_from(args) {
        Ok(matches) if matches.subcommand().is_some() || matches.get_flag("list-languages") => {
            Ok(matches)
        }
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(err)
        }
        Err(err)
            if args
                .get(1)
                .is_some_and(|first| SUBCOMMANDS.contains(&first.as_str())) =>
        {
            Err(err)
        }
        _ => cli.try_get_matches_from(with_convert(args)),
    }
}

fn with_convert(args: &[String]) -> Vec<String> {
    let mut injected = vec![
        args.first().cloned().unwrap_or_else(|| "jiramark".to_string()),
        "convert".to_string(),
    ];
    injected.extend(args.iter().skip(1).cloned());
    injected
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let matches = parse_args(build_cli(), &args).unwrap_or_else(|e| e.exit());

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-languages") {
        handle_list_languages_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            apply_cli_overrides(&mut config, sub_matches);
            let inputs = input_values(sub_matches);
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&inputs, from, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let inputs = input_values(sub_matches);
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            handle_inspect_command(&inputs, from);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn input_values(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Handle the convert command
fn handle_convert_command(
    inputs: &[String],
    from: Option<&str>,
    output: Option<&str>,
    config: &JiramarkConfig,
) {
    let registry = FormatRegistry::default();
    let doc = parse_inputs(&registry, inputs, from);

    let params = jira_params_from_config(config);
    let text = registry
        .serialize_with_options(&doc, TARGET_FORMAT, &params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(inputs: &[String], from: Option<&str>) {
    let registry = FormatRegistry::default();
    let doc = parse_inputs(&registry, inputs, from);

    let json = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
        eprintln!("Error encoding document tree: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the list-languages command
fn handle_list_languages_command() {
    for language in SUPPORTED_LANGUAGES {
        println!("{language}");
    }
}

fn parse_inputs(registry: &FormatRegistry, inputs: &[String], from: Option<&str>) -> Node {
    let from = resolve_source_format(registry, inputs, from);
    if let Err(e) = registry.get(&from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_sources(inputs, io::stdin()).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    debug!(format = %from, inputs = inputs.len(), bytes = source.len(), "read source");

    registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    })
}

/// `--from` if given, else the format of the first named file, else markdown.
fn resolve_source_format(
    registry: &FormatRegistry,
    inputs: &[String],
    from: Option<&str>,
) -> String {
    if let Some(from) = from {
        return from.to_string();
    }
    inputs
        .iter()
        .find(|input| input.as_str() != "-")
        .and_then(|input| registry.detect_format_from_filename(input))
        .unwrap_or_else(|| FALLBACK_SOURCE_FORMAT.to_string())
}

/// Concatenates every input in order. No inputs, or `-`, read `stdin`.
fn read_sources(inputs: &[String], mut stdin: impl Read) -> Result<String, String> {
    let mut source = String::new();
    if inputs.is_empty() {
        stdin
            .read_to_string(&mut source)
            .map_err(|e| format!("Error reading stdin: {e}"))?;
        return Ok(source);
    }
    for input in inputs {
        if input == "-" {
            stdin
                .read_to_string(&mut source)
                .map_err(|e| format!("Error reading stdin: {e}"))?;
        } else {
            let content = fs::read_to_string(input)
                .map_err(|e| format!("Error reading file '{input}': {e}"))?;
            source.push_str(&content);
        }
    }
    Ok(source)
}

fn load_cli_config(explicit_path: Option<&str>) -> JiramarkConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_cli_overrides(config: &mut JiramarkConfig, matches: &ArgMatches) {
    if matches.get_flag("safe") {
        config.render.safe = true;
    }
    if let Some(limit) = matches.get_one::<usize>("max-length") {
        config.output.max_length = *limit;
    }
}

fn jira_params_from_config(config: &JiramarkConfig) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("safe".to_string(), config.render.safe.to_string());
    params.insert(
        "max-length".to_string(),
        config.output.max_length.to_string(),
    );
    params
}
