//! CLI parse tests.

use super::{Cli, CliCommand};
use ckfetch_core::config::CkfetchConfig;
use clap::Parser;
use std::path::Path;

fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn parse(args: &[&str]) -> CliCommand {
    parse_cli(args).command
}

#[test]
fn cli_parse_serve() {
    match parse(&["ckfetch", "serve"]) {
        CliCommand::Serve { bind } => assert!(bind.is_none()),
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_bind() {
    match parse(&["ckfetch", "serve", "--bind", "127.0.0.1:8080"]) {
        CliCommand::Serve { bind } => assert_eq!(bind.as_deref(), Some("127.0.0.1:8080")),
        _ => panic!("expected Serve with bind"),
    }
}

#[test]
fn cli_parse_fetch_and_show() {
    assert!(matches!(parse(&["ckfetch", "fetch"]), CliCommand::Fetch));
    assert!(matches!(parse(&["ckfetch", "show"]), CliCommand::Show));
}

#[test]
fn cli_parse_checksum() {
    match parse(&["ckfetch", "checksum", "/clientdata/received.txt"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "/clientdata/received.txt"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_missing_subcommand_fails() {
    assert!(Cli::try_parse_from(["ckfetch"]).is_err());
}

#[test]
fn overrides_replace_config_values() {
    let cli = parse_cli(&[
        "ckfetch",
        "serve",
        "--remote-url",
        "http://10.0.0.5:5000/data",
        "--data-dir",
        "/tmp/clientdata",
        "--bind",
        "127.0.0.1:6000",
    ]);
    let mut cfg = CkfetchConfig::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.remote_url, "http://10.0.0.5:5000/data");
    assert_eq!(cfg.data_dir.as_deref(), Some(Path::new("/tmp/clientdata")));
    assert_eq!(cfg.bind_addr, "127.0.0.1:6000");
}

#[test]
fn no_overrides_keep_config() {
    let cli = parse_cli(&["ckfetch", "fetch"]);
    let mut cfg = CkfetchConfig::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.remote_url, CkfetchConfig::default().remote_url);
    assert!(cfg.data_dir.is_none());
    assert_eq!(cfg.bind_addr, "0.0.0.0:5001");
}

#[test]
fn show_does_not_create_data_dir() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("clientdata");
    let cfg = CkfetchConfig {
        data_dir: Some(dir.clone()),
        ..CkfetchConfig::default()
    };
    super::commands::run_show(&cfg).unwrap();
    assert!(!dir.exists());
}
