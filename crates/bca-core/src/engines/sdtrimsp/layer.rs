use super::encode::components;
use crate::domain::RunningIndex;
use crate::engines::{
    MALFORMED_LAYER, SURPLUS_ABUNDANCES, expand_layer_abundances, target_mask,
};
use crate::model::{SimulationArguments, StructureArguments};
use crate::parser::{parse_float, parse_int};
use crate::serialization::{format_scientific_width, normalize_text_artifact};
use tracing::warn;

const SURPLUS_TOLERANCE: f64 = 1e-9;

pub(super) fn uses_layer_file(arguments: &SimulationArguments) -> bool {
    arguments.structure.len() > 1
}

/// Renders `layer.inp`; `None` for a single-layer target.
///
/// Each data line holds the segment count, the thickness of one segment and the
/// abundances of components `2..=ncp` (the first component fills the remainder).
pub(super) fn render_layers(arguments: &SimulationArguments) -> Option<String> {
    if !uses_layer_file(arguments) {
        return None;
    }

    let components = components(arguments);
    let mask = target_mask(&components);
    let targets = mask.iter().filter(|present| **present).count();
    let columns = components.len().saturating_sub(1);

    let headings: Vec<String> = (0..columns).map(|column| format!("qu_{}", column + 2)).collect();
    let mut lines = vec![
        "number of    thick-    target composition 2...ncp    name of layer".to_string(),
        format!("layers       ness      {}", headings.join("           ")),
    ];

    for layer in arguments.structure.iter().filter(|layer| layer.segments > 0) {
        let values = if layer.abundances.len() == targets {
            expand_layer_abundances(&layer.abundances, &mask)
        } else {
            warn!(
                layer = %layer.name,
                "layer abundances do not match the target rows, writing zeros"
            );
            vec![0.0; components.len()]
        };
        let abundances: Vec<String> = values
            .iter()
            .skip(1)
            .map(|value| format_scientific_width(*value, 13, 5))
            .collect();
        let per_segment = layer.thickness / f64::from(layer.segments);
        lines.push(format!(
            "{:>6} {}  {}    {}",
            layer.segments,
            format_scientific_width(per_segment, 12, 5),
            abundances.join("  "),
            layer.name
        ));
    }

    let zeros = vec!["          0"; columns];
    lines.push(format!("     0            0    {}    end", zeros.join("    ")));
    Some(normalize_text_artifact(&lines.join("\n")))
}

/// Layers read from `layer.inp` plus the warnings collected on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct ParsedLayers {
    pub(super) layers: Vec<StructureArguments>,
    pub(super) warnings: Vec<String>,
}

impl ParsedLayers {
    fn warn_once(&mut self, message: &str) {
        if !self.warnings.iter().any(|warning| warning == message) {
            warn!("{message}");
            self.warnings.push(message.to_string());
        }
    }
}

/// Parses the data lines of `layer.inp` for a file with `ncp` components.
///
/// `target_mask` marks the components with a nonzero `qu`; only their abundances are kept.
/// Lines that cannot be read are skipped with a single collected warning.
pub(super) fn parse_layers(
    source: &str,
    ncp: usize,
    target_mask: &[bool],
    default_segments: u32,
    default_thickness: f64,
) -> ParsedLayers {
    let mut parsed = ParsedLayers::default();
    if ncp == 0 {
        return parsed;
    }
    let mut counter = RunningIndex::new();

    for line in source.lines().map(str::trim) {
        let starts_numeric = line
            .chars()
            .next()
            .is_some_and(|first| first.is_ascii_digit() || first == '.');
        if !starts_numeric {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let terminal = tokens.last().is_some_and(|last| *last == "end")
            || tokens
                .iter()
                .all(|token| token.parse::<f64>().is_ok_and(|value| value == 0.0));
        if terminal {
            continue;
        }
        if tokens.len() < ncp + 1 {
            parsed.warn_once(MALFORMED_LAYER);
            continue;
        }

        let default_name = format!("Layer{}", counter.next_index());
        let name = tokens
            .get(ncp + 1)
            .map_or(default_name, |name| (*name).to_string());

        let Ok(tail) = tokens[2..=ncp]
            .iter()
            .map(|token| token.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
        else {
            parsed.warn_once(MALFORMED_LAYER);
            continue;
        };
        let mut abundances = Vec::with_capacity(ncp);
        abundances.push(1.0 - tail.iter().sum::<f64>());
        abundances.extend(tail);

        let surplus = abundances
            .iter()
            .zip(target_mask.iter().chain(std::iter::repeat(&false)))
            .any(|(value, present)| !present && value.abs() > SURPLUS_TOLERANCE);
        if surplus {
            parsed.warn_once(SURPLUS_ABUNDANCES);
        }
        let abundances: Vec<f64> = abundances
            .into_iter()
            .zip(target_mask)
            .filter(|(_, present)| **present)
            .map(|(value, _)| value)
            .collect();

        let segments = parse_int(Some(tokens[0]))
            .ok()
            .and_then(|segments| u32::try_from(segments).ok())
            .unwrap_or(default_segments);
        let per_segment = parse_float(Some(tokens[1])).unwrap_or(default_thickness);
        parsed.layers.push(StructureArguments::new(
            name,
            segments,
            f64::from(segments) * per_segment,
            abundances,
        ));
    }
    parsed
}
