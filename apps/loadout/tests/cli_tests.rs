//! Integration tests for the `loadout` commands and binary.

// Assertions here fail by unwrapping or panicking.
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use loadout::cli::{Cli, CliError, Commands, cmd_list, cmd_query, cmd_types, run};
use loadout_core::LoadOutError;
use serde_json::Value;
use std::process::{Command, Output};

/// Run the built binary with `args`, without inheriting `RUST_LOG`.
fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loadout"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

// =============================================================================
// QUERY COMMAND TESTS
// =============================================================================

#[test]
fn test_query_present_slot() {
    assert_eq!(cmd_query("analog", 0, false).unwrap(), "analog[0]: present");
    assert_eq!(cmd_query("digital", 1, false).unwrap(), "digital[1]: present");
    assert_eq!(cmd_query("solenoid", 0, false).unwrap(), "solenoid[0]: present");
}

#[test]
fn test_query_absent_slot_is_not_an_error() {
    assert_eq!(cmd_query("analog", 1, false).unwrap(), "analog[1]: absent");
    assert_eq!(cmd_query("digital", 2, false).unwrap(), "digital[2]: absent");
}

#[test]
fn test_query_raw_code_outside_enumeration() {
    let output = cmd_query("200", 0, false).unwrap();
    assert_eq!(output, "unknown[0]: absent");
}

#[test]
fn test_query_json_output() {
    let output = cmd_query("Digital", 1, true).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["module_type"], "digital");
    assert_eq!(value["module_number"], 1);
    assert_eq!(value["present"], true);
}

#[test]
fn test_query_rejects_unknown_name() {
    let result = cmd_query("relay", 0, false);
    match result {
        Err(CliError::LoadOut(LoadOutError::UnrecognizedModuleType(name))) => {
            assert_eq!(name, "relay");
        }
        other => panic!("expected parse failure, got {other:?}"),
    }
}

// =============================================================================
// LIST / TYPES COMMAND TESTS
// =============================================================================

#[test]
fn test_list_text() {
    let output = cmd_list(false).unwrap();
    assert_eq!(output, "analog[0]\ndigital[0]\ndigital[1]\nsolenoid[0]");
}

#[test]
fn test_list_json() {
    let output = cmd_list(true).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    let slots = value.as_array().unwrap();

    assert_eq!(slots.len(), 4);
    assert_eq!(slots[2]["module_type"], "digital");
    assert_eq!(slots[2]["module_number"], 1);
}

#[test]
fn test_types_text_has_every_type() {
    let output = cmd_types(false).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("TYPE"));
    assert!(lines[1].starts_with("unknown"));
    assert!(lines[3].starts_with("digital"));
    assert!(lines[3].ends_with('2'));
}

#[test]
fn test_types_json() {
    let output = cmd_types(true).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    let rows = value.as_array().unwrap();

    let total: u64 = rows
        .iter()
        .map(|row| row["slot_count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 4);
    assert_eq!(rows[0]["module_type"], "unknown");
    assert_eq!(rows[0]["raw_code"], 0);
}

// =============================================================================
// ARGUMENT PARSING TESTS
// =============================================================================

#[test]
fn test_parse_query_args() {
    let cli = Cli::try_parse_from(["loadout", "-vv", "query", "solenoid", "0", "--json"]).unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Query {
            module_type,
            module_number,
            json,
        } => {
            assert_eq!(module_type, "solenoid");
            assert_eq!(module_number, 0);
            assert!(json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_rejects_module_number_out_of_range() {
    let result = Cli::try_parse_from(["loadout", "query", "digital", "256"]);
    assert!(result.is_err());
}

#[test]
fn test_run_dispatches() {
    let cli = Cli::try_parse_from(["loadout", "query", "digital", "0"]).unwrap();
    assert_eq!(run(cli.command).unwrap(), "digital[0]: present");
}

// =============================================================================
// BINARY EXIT STATUS TESTS
// =============================================================================

#[test]
fn test_binary_absent_slot_exits_zero() {
    let output = run_binary(&["query", "analog", "1"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout.trim_end(), "analog[1]: absent");
}

#[test]
fn test_binary_present_slot_json() {
    let output = run_binary(&["query", "digital", "1", "--json"]);
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(value["present"], true);
}

#[test]
fn test_binary_unrecognized_type_exits_one() {
    let output = run_binary(&["query", "relay", "0"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("error: unrecognized module type 'relay'"));
}
