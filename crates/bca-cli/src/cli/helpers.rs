use super::CliError;
use bca_core::domain::BcaError;
use bca_core::engines::sdtrimsp::{self, Sdtrimsp};
use bca_core::engines::tridyn::TridynVersion;
use bca_core::engines::{self, EngineCodec, EngineKind, EngineVersion};
use bca_core::model::SimulationArguments;
use bca_core::persistence::{LoadedSimulation, load_from_path};
use std::path::Path;

pub(super) fn resolve_engine(name: &str) -> Result<EngineKind, CliError> {
    EngineKind::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = EngineKind::ALL.iter().map(|kind| kind.name()).collect();
        CliError::Usage(format!(
            "Unknown engine '{}'. Expected one of: {}",
            name,
            known.join(", ")
        ))
    })
}

/// Without a label SDTrimSP is detected from its installation and TRIDYN uses its only
/// version.
pub(super) fn resolve_version(
    engine: EngineKind,
    label: Option<&str>,
    engine_folder: &Path,
) -> Result<EngineVersion, CliError> {
    match label {
        Some(label) => EngineVersion::parse(engine, label).ok_or_else(|| {
            let known: Vec<String> = engine
                .versions()
                .iter()
                .map(|version| format!("'{}'", version.label()))
                .collect();
            CliError::Core(BcaError::input_validation(
                "INPUT.ENGINE_VERSION",
                format!(
                    "{} has no version '{}'. Known versions: {}",
                    engine,
                    label,
                    known.join(", ")
                ),
            ))
        }),
        None => Ok(match engine {
            EngineKind::Sdtrimsp => {
                EngineVersion::Sdtrimsp(sdtrimsp::detect_version(engine_folder))
            }
            EngineKind::Tridyn => EngineVersion::Tridyn(TridynVersion::V2022),
        }),
    }
}

pub(super) fn load_config(path: &Path) -> Result<LoadedSimulation, CliError> {
    load_from_path(path).ok_or_else(|| {
        CliError::Core(BcaError::input_validation(
            "INPUT.SAVE_FILE",
            format!("'{}' is not a readable save file", path.display()),
        ))
    })
}

/// Validates the additional directives, with the SDTrimSP parameter table of the
/// installation when one is available.
pub(super) fn check_additional(
    arguments: &SimulationArguments,
    version: EngineVersion,
    engine_folder: &Path,
) -> Vec<String> {
    let additional = arguments.additional.join("\n");
    match version {
        EngineVersion::Sdtrimsp(version) => {
            Sdtrimsp::from_engine_folder(engine_folder).check_additional(&additional, version)
        }
        EngineVersion::Tridyn(_) => engines::check_additional(&additional, version),
    }
}

pub(super) fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{heading}:");
    for item in items {
        println!("  {item}");
    }
}
