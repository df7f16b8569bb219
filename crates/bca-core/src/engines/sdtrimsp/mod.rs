//! SDTrimSP namelist dialect (`tri.inp` plus the optional `layer.inp` depth profile).

mod directives;
mod encode;
mod layer;
mod model;
mod parser;

pub use directives::{ParameterKind, ParameterTable};

use super::{DecodeOutcome, EncodedFiles, EngineCodec, EngineKind};
use crate::domain::{BcaError, BcaResult, DecodeResult};
use crate::model::{CompoundRegistry, ElementLibrary, SimulationArguments};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const INPUT_FILE: &str = "tri.inp";
pub const LAYER_FILE: &str = "layer.inp";

const SOURCE_FILE: &str = "src/SDTrimSP.F90";
const PARAMETER_DOC: &str = "doc/tri.inp.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdtrimspVersion {
    /// Covers 6.01 through 6.06, which share one file format.
    V6_01,
    V6_09,
}

impl SdtrimspVersion {
    pub const ALL: [Self; 2] = [Self::V6_01, Self::V6_09];

    pub const fn label(self) -> &'static str {
        match self {
            Self::V6_01 => "6.01, 6.06",
            Self::V6_09 => "6.09",
        }
    }

    pub const fn max_components(self) -> usize {
        match self {
            Self::V6_01 => 8,
            Self::V6_09 => 11,
        }
    }

    pub const fn newest() -> Self {
        Self::V6_09
    }

    /// Maps a release number such as `6.06` or `v6.09` onto the file format it uses.
    pub fn from_release(release: &str) -> Option<Self> {
        let release = release.trim().trim_start_matches(['v', 'V']);
        let (major, minor) = release.split_once('.')?;
        let major: u32 = major.trim().parse().ok()?;
        let minor: String = minor.chars().take_while(char::is_ascii_digit).collect();
        let minor: u32 = minor.parse().ok()?;
        match (major, minor) {
            (6, 0..=8) => Some(Self::V6_01),
            (6, _) => Some(Self::V6_09),
            _ => None,
        }
    }
}

impl Display for SdtrimspVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// SDTrimSP codec.
///
/// The parameter table from the installation's documentation is optional; without it
/// directive names are not checked against the list of known variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sdtrimsp {
    parameters: Option<ParameterTable>,
}

impl Sdtrimsp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `doc/tri.inp.txt` from the installation when it is present.
    pub fn from_engine_folder(engine_folder: &Path) -> Self {
        let doc = engine_folder.join(PARAMETER_DOC);
        let parameters = fs::read_to_string(&doc)
            .ok()
            .and_then(|source| ParameterTable::parse(&source));
        if parameters.is_none() {
            debug!(path = %doc.display(), "no SDTrimSP parameter table loaded");
        }
        Self { parameters }
    }

    pub fn with_parameters(parameters: ParameterTable) -> Self {
        Self {
            parameters: Some(parameters),
        }
    }

    pub fn parameters(&self) -> Option<&ParameterTable> {
        self.parameters.as_ref()
    }
}

impl EngineCodec for Sdtrimsp {
    type Version = SdtrimspVersion;

    fn kind(&self) -> EngineKind {
        EngineKind::Sdtrimsp
    }

    fn encode(
        &self,
        arguments: &SimulationArguments,
        engine_folder: &Path,
        version: SdtrimspVersion,
    ) -> EncodedFiles {
        EncodedFiles {
            input_name: INPUT_FILE.to_string(),
            input: encode::render_input(arguments, engine_folder, version),
            layer_name: LAYER_FILE.to_string(),
            layer: layer::render_layers(arguments),
        }
    }

    fn decode(&self, source_folder: &Path, version: SdtrimspVersion) -> DecodeResult<DecodeOutcome> {
        let input_path = source_folder.join(INPUT_FILE);
        if !input_path.is_file() {
            info!(folder = %source_folder.display(), "no SDTrimSP input file");
            return Ok(DecodeOutcome::NotApplicable);
        }
        let source = read_source(&input_path)?;
        let layer_path = source_folder.join(LAYER_FILE);
        let layer_source = if layer_path.is_file() {
            Some(read_source(&layer_path)?)
        } else {
            None
        };

        let decoded = parser::decode_input(
            &source,
            layer_source.as_deref(),
            &self.element_library(version),
            version,
        )?;
        Ok(DecodeOutcome::Decoded(decoded))
    }

    fn check_additional(&self, additional: &str, _version: SdtrimspVersion) -> Vec<String> {
        directives::check_additional(additional, self.parameters.as_ref())
    }

    fn element_library(&self, _version: SdtrimspVersion) -> ElementLibrary {
        ElementLibrary::sdtrimsp()
    }

    fn compound_registry(&self) -> CompoundRegistry {
        CompoundRegistry::empty()
    }
}

fn read_source(path: &Path) -> BcaResult<String> {
    fs::read_to_string(path).map_err(|source| {
        BcaError::io_system(
            "IO.ENGINE_INPUT_READ",
            format!("failed to read '{}': {}", path.display(), source),
        )
    })
}

/// Reads the release string (`avs0 = '...'`) from the installation's source tree.
///
/// Falls back to the newest supported version when the source is missing or the release
/// is not recognized.
pub fn detect_version(engine_folder: &Path) -> SdtrimspVersion {
    let source_path = engine_folder.join(SOURCE_FILE);
    let release = fs::read_to_string(&source_path)
        .ok()
        .and_then(|source| release_string(&source));

    match release.as_deref().and_then(SdtrimspVersion::from_release) {
        Some(version) => version,
        None => {
            debug!(
                path = %source_path.display(),
                release = ?release,
                "SDTrimSP release not recognized, assuming newest"
            );
            SdtrimspVersion::newest()
        }
    }
}

fn release_string(source: &str) -> Option<String> {
    source
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("avs0 ="))
        .and_then(|line| line.split('\'').nth(1))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{SdtrimspVersion, detect_version};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn release_numbers_map_to_file_formats() {
        assert_eq!(SdtrimspVersion::from_release("6.01"), Some(SdtrimspVersion::V6_01));
        assert_eq!(SdtrimspVersion::from_release("v6.06"), Some(SdtrimspVersion::V6_01));
        assert_eq!(SdtrimspVersion::from_release("6.09"), Some(SdtrimspVersion::V6_09));
        assert_eq!(SdtrimspVersion::from_release("5.07"), None);
        assert_eq!(SdtrimspVersion::from_release("latest"), None);
    }

    #[test]
    fn version_is_read_from_the_source_tree() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::create_dir(temp.path().join("src")).expect("src should be created");
        fs::write(
            temp.path().join("src").join("SDTrimSP.F90"),
            "program SDTrimSP\n  avs0 = '6.06'\nend program\n",
        )
        .expect("source should be written");

        assert_eq!(detect_version(temp.path()), SdtrimspVersion::V6_01);
    }

    #[test]
    fn missing_source_assumes_the_newest_version() {
        let temp = TempDir::new().expect("tempdir should be created");
        assert_eq!(detect_version(temp.path()), SdtrimspVersion::V6_09);
    }
}
