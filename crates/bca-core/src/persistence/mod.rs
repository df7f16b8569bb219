//! Application save files: a [`SimulationArguments`] as pretty printed JSON.

mod reader;

use crate::domain::{BcaError, BcaResult, DefaultAssumed};
use crate::engines::single_layer;
use crate::model::{
    Extras, GeneralArguments, GeneralBeamArguments, GeneralTargetArguments, RowArguments,
    RowSide, SimulationArguments, StructureArguments,
};
use reader::{JsonObject, UNDEFINED};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;
use tracing::info;

const INDENT: &[u8] = b"    ";

/// A loaded save file with the fields that had to be defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSimulation {
    pub arguments: SimulationArguments,
    pub assumed: DefaultAssumed,
}

#[derive(Serialize)]
struct General<'a> {
    title: &'a str,
    simulation: &'a str,
}

#[derive(Serialize)]
struct SaveFile<'a> {
    general: General<'a>,
    beam_arguments: &'a GeneralBeamArguments,
    beam_rows: &'a [RowArguments],
    target_rows: &'a [RowArguments],
    target_arguments: &'a GeneralTargetArguments,
    structure: &'a [StructureArguments],
    settings: &'a GeneralArguments,
    additional: &'a [String],
    #[serde(skip_serializing_if = "no_extras")]
    optional: &'a Extras,
}

fn no_extras(extras: &&Extras) -> bool {
    extras.is_empty()
}

pub fn save(arguments: &SimulationArguments) -> BcaResult<String> {
    let file = SaveFile {
        general: General {
            title: arguments.title(),
            simulation: &arguments.simulation,
        },
        beam_arguments: &arguments.beam_args,
        beam_rows: &arguments.beam_rows,
        target_rows: &arguments.target_rows,
        target_arguments: &arguments.target_args,
        structure: &arguments.structure,
        settings: &arguments.settings,
        additional: &arguments.additional,
        optional: &arguments.optional,
    };

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    file.serialize(&mut serializer).map_err(|source| {
        BcaError::internal(
            "INTERNAL.SAVE_SERIALIZE",
            format!("failed to serialize save file: {source}"),
        )
    })?;
    let mut text = String::from_utf8(buffer).map_err(|source| {
        BcaError::internal(
            "INTERNAL.SAVE_SERIALIZE",
            format!("save file is not UTF-8: {source}"),
        )
    })?;
    text.push('\n');
    Ok(text)
}

pub fn save_to_path(arguments: &SimulationArguments, path: &Path) -> BcaResult<()> {
    let text = save(arguments)?;
    fs::write(path, text).map_err(|source| {
        BcaError::io_system(
            "IO.SAVE_WRITE",
            format!("failed to write '{}': {}", path.display(), source),
        )
    })
}

/// Rebuilds a configuration from save file text; `None` if the text is not a JSON object.
pub fn load(source: &str) -> Option<LoadedSimulation> {
    let root: Value = match serde_json::from_str(source) {
        Ok(root) => root,
        Err(error) => {
            info!(%error, "save file is not valid JSON");
            return None;
        }
    };
    if !root.is_object() {
        info!("save file does not hold a JSON object");
        return None;
    }

    let root = JsonObject::new(Some(&root));
    let mut assumed = DefaultAssumed::new();
    let general = root.object("general");
    let simulation = general.text("simulation").unwrap_or_else(|_| UNDEFINED.to_string());
    let title = general.text("title").unwrap_or_else(|_| UNDEFINED.to_string());

    let settings = reader::settings(root.object("settings"), &title, &mut assumed);
    let mut arguments = SimulationArguments::new(simulation, settings);
    arguments.beam_args = reader::beam_arguments(root.object("beam_arguments"), &mut assumed);
    arguments.target_args = reader::target_arguments(root.object("target_arguments"), &mut assumed);
    arguments.beam_rows = root
        .array("beam_rows")
        .iter()
        .filter_map(|row| reader::row(row, RowSide::Beam, &mut assumed))
        .collect();
    arguments.target_rows = root
        .array("target_rows")
        .iter()
        .filter_map(|row| reader::row(row, RowSide::Target, &mut assumed))
        .collect();
    arguments.reindex_rows();

    arguments.structure = root
        .array("structure")
        .iter()
        .map(|layer| reader::layer(layer, &mut assumed))
        .collect();
    if arguments.structure.is_empty() {
        assumed.assumed("layer_name");
        if arguments.target_rows.is_empty() {
            assumed.assumed("layer_abundance");
        }
        arguments.structure.push(single_layer(&arguments));
    }
    arguments.additional = root.texts("additional");
    arguments.optional = root.extras();

    info!(
        beam_rows = arguments.beam_rows.len(),
        target_rows = arguments.target_rows.len(),
        layers = arguments.structure.len(),
        assumed = assumed.len(),
        "loaded save file"
    );
    Some(LoadedSimulation {
        arguments,
        assumed,
    })
}

/// Reads and loads a save file; a missing or unreadable file is `None`.
pub fn load_from_path(path: &Path) -> Option<LoadedSimulation> {
    match fs::read_to_string(path) {
        Ok(source) => load(&source),
        Err(error) => {
            info!(path = %path.display(), %error, "save file could not be read");
            None
        }
    }
}
