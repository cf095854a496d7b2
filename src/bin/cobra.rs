//! Command-line interface for cobra
//! This binary loads compound drafts from CoNLL-U sentences and integrates filled drafts back.
//!
//! Usage:
//!   cobra format `<input>`                                   - Parse and re-emit a sentence
//!   cobra load `<input>` --anchor `<id>` [--constituents N]   - Print a draft as JSON
//!   cobra apply `<input>` --draft `<file>`                     - Print the integrated sentence
//!
//! An input of `-` reads the sentence from stdin.

use std::io::Read;

use clap::{Arg, ArgAction, ArgMatches, Command};
use cobra::interchange::{load_draft, write_draft};
use cobra::{
    CompoundDraft, FormatOptions, IntegrateOptions, MissingFieldPolicy, Sentence, apply,
    format_with, parse,
};

fn main() {
    let matches = Command::new("cobra")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Integrate compound words into CoNLL-U sentences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("format")
                .about("Parse a sentence and print it back")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("load")
                .about("Print the editable draft for a compound as JSON")
                .arg(input_arg())
                .arg(
                    Arg::new("anchor")
                        .long("anchor")
                        .short('a')
                        .help("Id of the compound token (first token with --existing)")
                        .required(true),
                )
                .arg(
                    Arg::new("constituents")
                        .long("constituents")
                        .short('n')
                        .help("Number of constituents")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(
                    Arg::new("existing")
                        .long("existing")
                        .help("Re-annotate existing tokens instead of inserting a span")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Integrate a filled draft and print the sentence")
                .arg(input_arg())
                .arg(
                    Arg::new("draft")
                        .long("draft")
                        .short('d')
                        .help("Path to the draft JSON file")
                        .required(true),
                )
                .arg(
                    Arg::new("no-renumber")
                        .long("no-renumber")
                        .help("Splice the rows in without renumbering ids")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("fill-missing")
                        .long("fill-missing")
                        .help("Write `_` for empty draft fields instead of failing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("trailing-newline")
                        .long("trailing-newline")
                        .help("End the output with a newline")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("format", sub)) => handle_format_command(sub),
        Some(("load", sub)) => handle_load_command(sub),
        Some(("apply", sub)) => handle_apply_command(sub),
        _ => unreachable!("a subcommand is required"),
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to the CoNLL-U sentence, or `-` for stdin")
        .required(true)
        .index(1)
}

/// Handle the format command
fn handle_format_command(matches: &ArgMatches) -> cobra::Result<String> {
    let sentence = read_sentence(matches)?;
    Ok(format_with(
        &sentence,
        &FormatOptions {
            trailing_newline: true,
        },
    ))
}

/// Handle the load command
fn handle_load_command(matches: &ArgMatches) -> cobra::Result<String> {
    let sentence = read_sentence(matches)?;
    let anchor = string_arg(matches, "anchor");
    let count = matches.get_one::<usize>("constituents").copied().unwrap_or(3);

    let draft = if matches.get_flag("existing") {
        CompoundDraft::existing_tokens(&sentence, anchor, count)?
    } else {
        CompoundDraft::new_span(&sentence, anchor, count)?
    };
    Ok(write_draft(&draft)? + "\n")
}

/// Handle the apply command
fn handle_apply_command(matches: &ArgMatches) -> cobra::Result<String> {
    let sentence = read_sentence(matches)?;
    let draft = load_draft(string_arg(matches, "draft"))?;
    let options = IntegrateOptions {
        renumber: !matches.get_flag("no-renumber"),
        missing: if matches.get_flag("fill-missing") {
            MissingFieldPolicy::Placeholder
        } else {
            MissingFieldPolicy::Abort
        },
    };

    let out = apply(&sentence, &draft, &options)?;
    Ok(format_with(
        &out,
        &FormatOptions {
            trailing_newline: matches.get_flag("trailing-newline"),
        },
    ))
}

fn string_arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.get_one::<String>(name).map(String::as_str).unwrap_or_default()
}

fn read_sentence(matches: &ArgMatches) -> cobra::Result<Sentence> {
    let input = string_arg(matches, "input");
    let text = if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(parse(&text)?)
}
