use super::CliError;
use super::helpers::{check_additional, load_config, print_list, resolve_engine, resolve_version};
use anyhow::Context;
use bca_core::engines::{self, DecodeOutcome, EngineKind};
use bca_core::model::RowSide;
use bca_core::persistence::save_to_path;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Exit code of a decode whose folder holds no input file of the engine.
const NOT_APPLICABLE_EXIT: i32 = 1;

#[derive(clap::Args)]
pub(super) struct EngineSelection {
    /// Engine name (sdtrimsp or tridyn)
    #[arg(long)]
    engine: String,

    /// Engine version label; detected from the engine folder when omitted
    #[arg(long = "version", value_name = "LABEL")]
    engine_version: Option<String>,

    /// Installation folder of the engine
    #[arg(long, default_value = ".")]
    engine_folder: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct EncodeArgs {
    #[command(flatten)]
    engine: EngineSelection,

    /// Save file to encode
    #[arg(long)]
    config: PathBuf,

    /// Folder receiving the engine input files
    #[arg(long)]
    output: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct DecodeArgs {
    #[command(flatten)]
    engine: EngineSelection,

    /// Folder holding the engine input files
    #[arg(long)]
    input: PathBuf,

    /// Save file to write
    #[arg(long)]
    output: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct InspectArgs {
    /// Save file to summarize
    #[arg(long)]
    config: PathBuf,
}

pub(super) fn run_engines_command() -> Result<i32, CliError> {
    for engine in EngineKind::ALL {
        for version in engine.versions() {
            println!(
                "{:<10} {:<12} max {} components",
                engine.name(),
                version.label(),
                version.max_components()
            );
        }
    }
    Ok(0)
}

pub(super) fn run_encode_command(args: EncodeArgs) -> Result<i32, CliError> {
    let engine = resolve_engine(&args.engine.engine)?;
    let version = resolve_version(
        engine,
        args.engine.engine_version.as_deref(),
        &args.engine.engine_folder,
    )?;
    let loaded = load_config(&args.config)?;
    info!(
        %engine,
        version = version.label(),
        config = %args.config.display(),
        "encoding save file"
    );
    print_list("Assumed default values", loaded.assumed.fields());

    let problems = check_additional(&loaded.arguments, version, &args.engine.engine_folder);
    print_list("Additional directive problems", &problems);

    fs::create_dir_all(&args.output).with_context(|| {
        format!("failed to create output directory '{}'", args.output.display())
    })?;
    let files = engines::encode(&loaded.arguments, &args.engine.engine_folder, version);
    for path in files.write_to(&args.output)? {
        println!("wrote {}", path.display());
    }
    Ok(0)
}

pub(super) fn run_decode_command(args: DecodeArgs) -> Result<i32, CliError> {
    let engine = resolve_engine(&args.engine.engine)?;
    let version = resolve_version(
        engine,
        args.engine.engine_version.as_deref(),
        &args.engine.engine_folder,
    )?;
    info!(
        %engine,
        version = version.label(),
        input = %args.input.display(),
        "decoding engine folder"
    );

    let decoded = match engines::decode(&args.input, version)? {
        DecodeOutcome::Decoded(decoded) => decoded,
        DecodeOutcome::NotApplicable => {
            eprintln!("No {} input file in '{}'", engine, args.input.display());
            return Ok(NOT_APPLICABLE_EXIT);
        }
    };
    print_list("Warnings", &decoded.warnings);
    print_list("Assumed default values", decoded.assumed.fields());

    if let Some(parent) = args.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create output directory '{}'", parent.display())
        })?;
    }
    save_to_path(&decoded.arguments, &args.output)?;
    println!("wrote {}", args.output.display());
    Ok(0)
}

pub(super) fn run_inspect_command(args: InspectArgs) -> Result<i32, CliError> {
    let loaded = load_config(&args.config)?;
    let arguments = &loaded.arguments;

    println!("title: {}", arguments.title());
    println!("engine: {}", arguments.simulation);
    println!("mode: {}", arguments.settings.mode);
    for (side, row) in arguments.rows_by_index() {
        let modified = if row.element.modified { " (modified)" } else { "" };
        match side {
            RowSide::Beam => println!(
                "row {} beam   {:<3} abundance {} energy {} angle {}{}",
                row.index, row.symbol, row.abundance, row.energy, row.angle, modified
            ),
            RowSide::Target => println!(
                "row {} target {:<3} abundance {}{}",
                row.index, row.symbol, row.abundance, modified
            ),
        }
    }
    for layer in &arguments.structure {
        println!(
            "layer {}: {} segments, {} A, abundances {:?}",
            layer.name, layer.segments, layer.thickness, layer.abundances
        );
    }
    print_list("Additional directives", &arguments.additional);
    print_list("Assumed default values", loaded.assumed.fields());
    Ok(0)
}
