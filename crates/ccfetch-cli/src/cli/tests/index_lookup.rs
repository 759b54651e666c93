use super::super::{Cli, CliCommand};
use super::parse;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_index() {
    match parse(&["ccfetch", "index", "cluster.idx"]) {
        CliCommand::Index { file, limit } => {
            assert_eq!(file, Path::new("cluster.idx"));
            assert!(limit.is_none());
        }
        _ => panic!("expected Index"),
    }
}

#[test]
fn cli_parse_index_limit() {
    match parse(&["ccfetch", "index", "cluster.idx", "--limit", "5"]) {
        CliCommand::Index { limit, .. } => assert_eq!(limit, Some(5)),
        _ => panic!("expected Index"),
    }
}

#[test]
fn cli_parse_lookup() {
    match parse(&["ccfetch", "lookup", "cluster.idx", "3"]) {
        CliCommand::Lookup { file, row, crawl } => {
            assert_eq!(file, Path::new("cluster.idx"));
            assert_eq!(row, 3);
            assert!(crawl.is_none());
        }
        _ => panic!("expected Lookup"),
    }
}

#[test]
fn cli_parse_lookup_crawl() {
    match parse(&[
        "ccfetch",
        "lookup",
        "cluster.idx",
        "0",
        "--crawl",
        "CC-MAIN-2023-50",
    ]) {
        CliCommand::Lookup { crawl, .. } => assert_eq!(crawl.as_deref(), Some("CC-MAIN-2023-50")),
        _ => panic!("expected Lookup"),
    }
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["ccfetch", "crawl"]).is_err());
}
