//! TRIDYN 2022 directive dialect (`<title>.in` plus the optional `<title>.lay` profile).
//!
//! Every line of the input is a four letter directive followed by its arguments; the
//! first line is the title.

mod directives;
mod encode;
mod layer;
mod model;
mod parser;

use super::{DecodeOutcome, EncodedFiles, EngineCodec, EngineKind, group_rows};
use crate::common::numeric::alphanumeric;
use crate::domain::{BcaError, BcaResult, DecodeResult};
use crate::model::{CompoundRegistry, ElementLibrary, SimulationArguments};
use globset::{Glob, GlobMatcher};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const INPUT_PATTERN: &str = "*.in";
pub const LAYER_PATTERN: &str = "*.lay";

const FILE_STEM_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TridynVersion {
    V2022,
}

impl TridynVersion {
    pub const ALL: [Self; 1] = [Self::V2022];

    pub const fn label(self) -> &'static str {
        match self {
            Self::V2022 => "2022",
        }
    }

    pub const fn max_components(self) -> usize {
        match self {
            Self::V2022 => 20,
        }
    }
}

impl Display for TridynVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// File stem derived from the title: spaces become `_`, other non-alphanumerics are dropped
/// and the result is padded with `_` to ten characters.
pub fn file_stem(title: &str) -> String {
    let stem = alphanumeric(&title.replace(' ', "_"));
    format!("{stem:_<FILE_STEM_WIDTH$}")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tridyn;

impl EngineCodec for Tridyn {
    type Version = TridynVersion;

    fn kind(&self) -> EngineKind {
        EngineKind::Tridyn
    }

    fn encode(
        &self,
        arguments: &SimulationArguments,
        _engine_folder: &Path,
        version: TridynVersion,
    ) -> EncodedFiles {
        let components = group_rows(&arguments.beam_rows, &arguments.target_rows, false);
        let stem = file_stem(arguments.title());
        EncodedFiles {
            input_name: format!("{stem}.in"),
            input: encode::render_input(arguments, &components, version),
            layer_name: format!("{stem}.lay"),
            layer: layer::render_layers(arguments, &components),
        }
    }

    fn decode(&self, source_folder: &Path, version: TridynVersion) -> DecodeResult<DecodeOutcome> {
        let Some(input_path) = first_match(source_folder, INPUT_PATTERN)? else {
            info!(folder = %source_folder.display(), "no TRIDYN input file");
            return Ok(DecodeOutcome::NotApplicable);
        };
        let source = read_source(&input_path)?;
        let layer_source = match first_match(source_folder, LAYER_PATTERN)? {
            Some(layer_path) => Some(read_source(&layer_path)?),
            None => None,
        };

        let decoded = parser::decode_input(
            &source,
            layer_source.as_deref(),
            &self.element_library(version),
            &self.compound_registry(),
        )?;
        Ok(DecodeOutcome::Decoded(decoded))
    }

    fn check_additional(&self, additional: &str, _version: TridynVersion) -> Vec<String> {
        directives::check_additional(additional)
    }

    fn element_library(&self, _version: TridynVersion) -> ElementLibrary {
        ElementLibrary::tridyn()
    }

    fn compound_registry(&self) -> CompoundRegistry {
        CompoundRegistry::tridyn()
    }
}

fn matcher(pattern: &str) -> BcaResult<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| {
            BcaError::internal(
                "INTERNAL.FILE_PATTERN",
                format!("invalid file pattern '{pattern}': {source}"),
            )
        })
}

/// First regular file in `folder` (sorted by name) whose name matches `pattern`.
fn first_match(folder: &Path, pattern: &str) -> BcaResult<Option<PathBuf>> {
    let matcher = matcher(pattern)?;
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(source) => {
            return Err(BcaError::io_system(
                "IO.ENGINE_INPUT_READ",
                format!("failed to list '{}': {}", folder.display(), source),
            ));
        }
    };

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| matcher.is_match(Path::new(name)))
        })
        .collect();
    candidates.sort();
    Ok(candidates.into_iter().next())
}

fn read_source(path: &Path) -> BcaResult<String> {
    fs::read_to_string(path).map_err(|source| {
        BcaError::io_system(
            "IO.ENGINE_INPUT_READ",
            format!("failed to read '{}': {}", path.display(), source),
        )
    })
}
