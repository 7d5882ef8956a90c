//! # CLI Module
//!
//! Command definitions and handlers for the `loadout` binary.
//!
//! Handlers return the text to print so they can be tested without
//! capturing stdout.

use clap::{ArgAction, Parser, Subcommand};
use loadout_core::{
    LoadOutError, ModuleNumber, ModuleSlot, ModuleType, backplane_inventory, get_module_presence,
    slot_count,
};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Inspect the FPGA backplane module layout.
#[derive(Debug, Parser)]
#[command(name = "loadout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect which module slots the FPGA backplane provides")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether one module slot exists
    Query {
        /// Module type name (analog, digital, solenoid, unknown) or raw code
        module_type: String,
        /// Zero-based module number
        module_number: ModuleNumber,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every present slot on the backplane
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show each module type with its raw code and slot count
    Types {
        #[arg(long)]
        json: bool,
    },
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    LoadOut(#[from] LoadOutError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// REPORTS
// =============================================================================

/// Answer to a single presence query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceReport {
    pub module_type: ModuleType,
    pub module_number: ModuleNumber,
    pub present: bool,
}

/// One row of the capacity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeReport {
    pub module_type: ModuleType,
    pub raw_code: u8,
    pub slot_count: u8,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Dispatch a parsed subcommand.
pub fn run(command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Query {
            module_type,
            module_number,
            json,
        } => cmd_query(&module_type, module_number, json),
        Commands::List { json } => cmd_list(json),
        Commands::Types { json } => cmd_types(json),
    }
}

/// Report whether `module_type[module_number]` exists.
///
/// Absence is an answer, not an error. Only an unparseable type name fails.
pub fn cmd_query(
    module_type: &str,
    module_number: ModuleNumber,
    json: bool,
) -> Result<String, CliError> {
    let module_type: ModuleType = module_type.parse()?;
    let present = get_module_presence(module_type, module_number);
    tracing::debug!(%module_type, module_number, present, "presence query");

    if json {
        let report = PresenceReport {
            module_type,
            module_number,
            present,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let status = if present { "present" } else { "absent" };
    Ok(format!(
        "{}: {}",
        ModuleSlot::new(module_type, module_number),
        status
    ))
}

/// List the backplane inventory.
pub fn cmd_list(json: bool) -> Result<String, CliError> {
    let inventory = backplane_inventory();
    tracing::info!(slots = inventory.len(), "backplane inventory");

    if json {
        return Ok(serde_json::to_string_pretty(&inventory)?);
    }

    let lines: Vec<String> = inventory.iter().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

/// Show the per-type capacity table.
pub fn cmd_types(json: bool) -> Result<String, CliError> {
    let rows: Vec<TypeReport> = ModuleType::ALL
        .into_iter()
        .map(|module_type| TypeReport {
            module_type,
            raw_code: module_type.as_raw(),
            slot_count: slot_count(module_type),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut out = format!("{:<10} {:>4} {:>5}", "TYPE", "CODE", "SLOTS");
    for row in &rows {
        out.push('\n');
        out.push_str(&format!(
            "{:<10} {:>4} {:>5}",
            row.module_type.name(),
            row.raw_code,
            row.slot_count
        ));
    }
    Ok(out)
}
