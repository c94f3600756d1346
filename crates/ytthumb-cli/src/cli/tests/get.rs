//! Tests for the get subcommand.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_get_defaults() {
    match parse(&["ytthumb", "get", "https://youtu.be/dQw4w9WgXcQ"]) {
        CliCommand::Get {
            url,
            output_dir,
            overwrite,
            no_fallback,
        } => {
            assert_eq!(url, "https://youtu.be/dQw4w9WgXcQ");
            assert!(output_dir.is_none());
            assert!(!overwrite);
            assert!(!no_fallback);
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_output_dir() {
    match parse(&[
        "ytthumb",
        "get",
        "https://youtu.be/dQw4w9WgXcQ",
        "-o",
        "/tmp/thumbs",
    ]) {
        CliCommand::Get { output_dir, .. } => {
            assert_eq!(output_dir.as_deref(), Some(Path::new("/tmp/thumbs")));
        }
        _ => panic!("expected Get with -o"),
    }
}

#[test]
fn cli_parse_get_flags() {
    match parse(&[
        "ytthumb",
        "get",
        "https://youtu.be/dQw4w9WgXcQ",
        "--overwrite",
        "--no-fallback",
    ]) {
        CliCommand::Get {
            overwrite,
            no_fallback,
            ..
        } => {
            assert!(overwrite);
            assert!(no_fallback);
        }
        _ => panic!("expected Get with flags"),
    }
}

#[test]
fn cli_get_requires_url() {
    assert!(crate::cli::Cli::try_parse_from(["ytthumb", "get"]).is_err());
}
