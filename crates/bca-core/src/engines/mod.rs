//! Translation between [`SimulationArguments`] and the native input files of the supported
//! engines.

mod grouping;
mod lookup;
pub mod sdtrimsp;
pub mod tridyn;

pub use grouping::{
    GroupedRow, collapse_layer_abundances, expand_layer_abundances, group_rows, single_layer,
    target_mask,
};
pub use lookup::CodeTable;

use crate::domain::{BcaResult, DecodeResult, DefaultAssumed};
use crate::model::{CompoundRegistry, ElementLibrary, SimulationArguments};
use crate::serialization::write_text_artifact;
use sdtrimsp::{Sdtrimsp, SdtrimspVersion};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use tridyn::{Tridyn, TridynVersion};

pub const NO_LAYER_FILE: &str = "No known layer files in this directory, assuming no layer file.";
pub const MALFORMED_LAYER: &str = "Layer file has incorrect format.";
pub const SURPLUS_ABUNDANCES: &str =
    "Layer file declares more abundance entries than target species; extra entries ignored.";

/// One engine's file dialect.
pub trait EngineCodec {
    type Version: Copy;

    fn kind(&self) -> EngineKind;

    /// Renders the input files; never fails and never mutates `arguments`.
    ///
    /// `engine_folder` is the installation directory of the engine binary, which some
    /// dialects reference from inside the input file.
    fn encode(
        &self,
        arguments: &SimulationArguments,
        engine_folder: &Path,
        version: Self::Version,
    ) -> EncodedFiles;

    fn decode(&self, source_folder: &Path, version: Self::Version) -> DecodeResult<DecodeOutcome>;

    /// Validates user supplied additional directives; returns one message per problem.
    fn check_additional(&self, additional: &str, version: Self::Version) -> Vec<String>;

    fn element_library(&self, version: Self::Version) -> ElementLibrary;

    fn compound_registry(&self) -> CompoundRegistry;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Sdtrimsp,
    Tridyn,
}

impl EngineKind {
    pub const ALL: [Self; 2] = [Self::Sdtrimsp, Self::Tridyn];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sdtrimsp => "SDTrimSP",
            Self::Tridyn => "TRIDYN",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn versions(self) -> Vec<EngineVersion> {
        match self {
            Self::Sdtrimsp => SdtrimspVersion::ALL
                .into_iter()
                .map(EngineVersion::Sdtrimsp)
                .collect(),
            Self::Tridyn => TridynVersion::ALL
                .into_iter()
                .map(EngineVersion::Tridyn)
                .collect(),
        }
    }
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A supported (engine, version) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineVersion {
    Sdtrimsp(SdtrimspVersion),
    Tridyn(TridynVersion),
}

impl EngineVersion {
    pub fn parse(engine: EngineKind, label: &str) -> Option<Self> {
        engine
            .versions()
            .into_iter()
            .find(|version| version.label() == label.trim())
    }

    pub const fn engine(self) -> EngineKind {
        match self {
            Self::Sdtrimsp(_) => EngineKind::Sdtrimsp,
            Self::Tridyn(_) => EngineKind::Tridyn,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sdtrimsp(version) => version.label(),
            Self::Tridyn(version) => version.label(),
        }
    }

    pub const fn max_components(self) -> usize {
        match self {
            Self::Sdtrimsp(version) => version.max_components(),
            Self::Tridyn(version) => version.max_components(),
        }
    }
}

impl Display for EngineVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.engine().name(), self.label())
    }
}

/// Text of the files one encode call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFiles {
    pub input_name: String,
    pub input: String,
    pub layer_name: String,
    /// Present only when the target has more than one depth layer.
    pub layer: Option<String>,
}

impl EncodedFiles {
    /// Writes the files into `folder` and returns the written paths.
    pub fn write_to(&self, folder: &Path) -> BcaResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        let input_path = folder.join(&self.input_name);
        write_text_artifact(&input_path, &self.input)?;
        written.push(input_path);

        if let Some(layer) = &self.layer {
            let layer_path = folder.join(&self.layer_name);
            write_text_artifact(&layer_path, layer)?;
            written.push(layer_path);
        }
        Ok(written)
    }
}

/// Successful decode with everything the caller has to disclose to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSimulation {
    pub arguments: SimulationArguments,
    pub assumed: DefaultAssumed,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// The folder holds no input file of this engine.
    NotApplicable,
    Decoded(DecodedSimulation),
}

impl DecodeOutcome {
    pub fn decoded(self) -> Option<DecodedSimulation> {
        match self {
            Self::Decoded(decoded) => Some(decoded),
            Self::NotApplicable => None,
        }
    }
}

pub fn encode(
    arguments: &SimulationArguments,
    engine_folder: &Path,
    version: EngineVersion,
) -> EncodedFiles {
    match version {
        EngineVersion::Sdtrimsp(version) => {
            Sdtrimsp::default().encode(arguments, engine_folder, version)
        }
        EngineVersion::Tridyn(version) => Tridyn.encode(arguments, engine_folder, version),
    }
}

pub fn decode(source_folder: &Path, version: EngineVersion) -> DecodeResult<DecodeOutcome> {
    match version {
        EngineVersion::Sdtrimsp(version) => {
            Sdtrimsp::default().decode(source_folder, version)
        }
        EngineVersion::Tridyn(version) => Tridyn.decode(source_folder, version),
    }
}

pub fn check_additional(additional: &str, version: EngineVersion) -> Vec<String> {
    match version {
        EngineVersion::Sdtrimsp(version) => {
            Sdtrimsp::default().check_additional(additional, version)
        }
        EngineVersion::Tridyn(version) => Tridyn.check_additional(additional, version),
    }
}

pub fn element_library(version: EngineVersion) -> ElementLibrary {
    match version {
        EngineVersion::Sdtrimsp(version) => {
            Sdtrimsp::default().element_library(version)
        }
        EngineVersion::Tridyn(version) => Tridyn.element_library(version),
    }
}

pub fn compound_registry(engine: EngineKind) -> CompoundRegistry {
    match engine {
        EngineKind::Sdtrimsp => Sdtrimsp::default().compound_registry(),
        EngineKind::Tridyn => Tridyn.compound_registry(),
    }
}
