//! Tests for resolve, platforms, checksum, version, completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use bzfetch_core::PlatformKey;
use clap::Parser;

#[test]
fn cli_parse_resolve() {
    match parse(&["bzfetch", "resolve"]) {
        CliCommand::Resolve { platform, json } => {
            assert!(!json);
            assert_eq!(platform.key(), PlatformKey::host());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_json_for_windows() {
    match parse(&[
        "bzfetch", "resolve", "--os", "Windows", "--arch", "x86_64", "--json",
    ]) {
        CliCommand::Resolve { platform, json } => {
            assert!(json);
            assert!(platform.key().is_windows());
        }
        _ => panic!("expected Resolve --json"),
    }
}

#[test]
fn cli_parse_platforms_and_version() {
    assert!(matches!(parse(&["bzfetch", "platforms"]), CliCommand::Platforms));
    assert!(matches!(parse(&["bzfetch", "version"]), CliCommand::Version));
}

#[test]
fn cli_parse_checksum() {
    match parse(&["bzfetch", "checksum", "/tmp/buildifier"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "/tmp/buildifier"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["bzfetch", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["bzfetch", "completions", "tcsh"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn informational_commands_skip_config() {
    assert!(!parse(&["bzfetch", "version"]).needs_config());
    assert!(!parse(&["bzfetch", "completions", "zsh"]).needs_config());
    assert!(!parse(&["bzfetch", "checksum", "/tmp/buildifier"]).needs_config());
}

#[test]
fn table_and_install_commands_read_config() {
    for args in [
        &["bzfetch", "fetch"][..],
        &["bzfetch", "build"],
        &["bzfetch", "install"],
        &["bzfetch", "resolve"],
        &["bzfetch", "platforms"],
    ] {
        assert!(parse(args).needs_config(), "{:?}", args);
    }
}

#[test]
fn cli_parse_log_file_flag_anywhere() {
    assert!(!Cli::try_parse_from(["bzfetch", "version"]).unwrap().log_file);
    assert!(Cli::try_parse_from(["bzfetch", "--log-file", "version"]).unwrap().log_file);
    assert!(Cli::try_parse_from(["bzfetch", "fetch", "--log-file"]).unwrap().log_file);
}
