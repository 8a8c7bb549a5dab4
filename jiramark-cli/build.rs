use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path ('-' or nothing for stdin)")
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .help("Source format")
        .value_parser(["markdown"])
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("jiramark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to Jira wiki markup")
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
                        .help("Replace raw HTML with a placeholder")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max-length")
                        .long("max-length")
                        .value_name("CHARS")
                        .help("Truncate the output to this many characters"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parsed document tree as JSON")
                .arg(input_arg())
                .arg(from_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "jiramark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "jiramark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "jiramark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
