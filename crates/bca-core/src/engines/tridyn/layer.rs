use crate::domain::RunningIndex;
use crate::engines::{
    GroupedRow, MALFORMED_LAYER, SURPLUS_ABUNDANCES, expand_layer_abundances, target_mask,
};
use crate::model::{SimulationArguments, StructureArguments};
use crate::serialization::{format_scientific_width, normalize_text_artifact};
use tracing::warn;

const SURPLUS_TOLERANCE: f64 = 1e-9;

pub(super) fn uses_layer_file(arguments: &SimulationArguments) -> bool {
    arguments.structure.len() > 1
}

/// Renders the `.lay` file; `None` for a single-layer target.
///
/// Every depth segment gets one line with the abundances of all components; the first
/// line of a layer carries its name.
pub(super) fn render_layers(
    arguments: &SimulationArguments,
    components: &[GroupedRow<'_>],
) -> Option<String> {
    if !uses_layer_file(arguments) {
        return None;
    }

    let mask = target_mask(components);
    let targets = mask.iter().filter(|present| **present).count();
    let mut lines = Vec::new();
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
        let line = values
            .iter()
            .map(|value| format_scientific_width(*value, 13, 5))
            .collect::<Vec<_>>()
            .join("  ");
        let line = line.trim();

        lines.push(format!("{line}    {}", layer.name));
        for _ in 1..layer.segments {
            lines.push(line.to_string());
        }
    }
    Some(normalize_text_artifact(&lines.join("\n")))
}

/// One run of identical segment lines, with the abundances of every component.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct LayerRun {
    pub(super) name: String,
    pub(super) segments: u32,
    pub(super) abundances: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct ParsedLayers {
    pub(super) runs: Vec<LayerRun>,
    pub(super) warnings: Vec<String>,
}

impl ParsedLayers {
    fn warn_once(&mut self, message: &str) {
        if !self.warnings.iter().any(|warning| warning == message) {
            warn!("{message}");
            self.warnings.push(message.to_string());
        }
    }

    /// Sum of each component's abundance over all layers.
    pub(super) fn component_totals(&self, ncp: usize) -> Vec<f64> {
        let mut totals = vec![0.0; ncp];
        for run in &self.runs {
            for (total, value) in totals.iter_mut().zip(&run.abundances) {
                *total += value;
            }
        }
        totals
    }

    /// Converts the runs into layers holding only the abundances of target components.
    ///
    /// Segment thickness is `xmax / nqx`; abundances of components outside `target_mask`
    /// are dropped with a single warning.
    pub(super) fn into_layers(
        mut self,
        target_mask: &[bool],
        xmax: f64,
        nqx: u32,
    ) -> (Vec<StructureArguments>, Vec<String>) {
        let segment_thickness = if nqx == 0 { xmax } else { xmax / f64::from(nqx) };
        let runs = std::mem::take(&mut self.runs);
        let mut layers = Vec::with_capacity(runs.len());
        for run in runs {
            let surplus = run
                .abundances
                .iter()
                .zip(target_mask.iter().chain(std::iter::repeat(&false)))
                .any(|(value, present)| !present && value.abs() > SURPLUS_TOLERANCE);
            if surplus {
                self.warn_once(SURPLUS_ABUNDANCES);
            }
            let abundances = run
                .abundances
                .into_iter()
                .zip(target_mask)
                .filter(|(_, present)| **present)
                .map(|(value, _)| value)
                .collect();
            layers.push(StructureArguments::new(
                run.name,
                run.segments,
                f64::from(run.segments) * segment_thickness,
                abundances,
            ));
        }
        (layers, self.warnings)
    }
}

/// Reads segment lines of `ncp` abundances each.
///
/// Consecutive identical lines form one layer; a line carrying a name always starts a new
/// layer. Unreadable lines are skipped with a single collected warning.
pub(super) fn parse_layers(source: &str, ncp: usize) -> ParsedLayers {
    let mut parsed = ParsedLayers::default();
    if ncp == 0 {
        return parsed;
    }
    let mut counter = RunningIndex::new();

    for line in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < ncp {
            parsed.warn_once(MALFORMED_LAYER);
            continue;
        }
        let Ok(abundances) = tokens[..ncp]
            .iter()
            .map(|token| token.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
        else {
            parsed.warn_once(MALFORMED_LAYER);
            continue;
        };

        let name = tokens.get(ncp).map(|name| (*name).to_string());
        if name.is_none()
            && let Some(run) = parsed.runs.last_mut()
            && run.abundances == abundances
        {
            run.segments += 1;
            continue;
        }
        let name = name.unwrap_or_else(|| format!("Layer{}", counter.next_index()));
        parsed.runs.push(LayerRun {
            name,
            segments: 1,
            abundances,
        });
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::{parse_layers, render_layers};
    use crate::engines::{MALFORMED_LAYER, SURPLUS_ABUNDANCES, group_rows};
    use crate::model::{
        ElementLibrary, GeneralArguments, RowArguments, SimulationArguments, StructureArguments,
    };

    fn row(index: usize, symbol: &str) -> RowArguments {
        let element = ElementLibrary::tridyn()
            .element_from_symbol(symbol)
            .expect("element should exist");
        RowArguments::new(index, element)
    }

    fn layered() -> SimulationArguments {
        let mut arguments = SimulationArguments::new("TRIDYN", GeneralArguments::new("layers"));
        arguments.beam_rows.push(row(1, "He").with_beam(1000.0, 0.0));
        arguments.target_rows.push(row(2, "Si"));
        arguments.target_rows.push(row(3, "O"));
        arguments
            .structure
            .push(StructureArguments::new("Oxide", 2, 20.0, vec![0.4, 0.6]));
        arguments
            .structure
            .push(StructureArguments::new("Bulk", 1, 10.0, vec![1.0, 0.0]));
        arguments
    }

    fn render(arguments: &SimulationArguments) -> Option<String> {
        let components = group_rows(&arguments.beam_rows, &arguments.target_rows, false);
        render_layers(arguments, &components)
    }

    #[test]
    fn one_line_per_segment_with_the_name_on_the_first() {
        let rendered = render(&layered()).expect("layer file should be rendered");
        let expected = "\
0.00000E+00    4.00000E-01    6.00000E-01    Oxide
0.00000E+00    4.00000E-01    6.00000E-01
0.00000E+00    1.00000E+00    0.00000E+00    Bulk
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn single_layer_targets_have_no_layer_file() {
        let mut arguments = layered();
        arguments.structure.truncate(1);
        assert_eq!(render(&arguments), None);
    }

    #[test]
    fn identical_unnamed_lines_merge_into_one_layer() {
        let rendered = render(&layered()).expect("layer file should be rendered");
        let parsed = parse_layers(&rendered, 3);

        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.runs.len(), 2);
        assert_eq!(parsed.runs[0].name, "Oxide");
        assert_eq!(parsed.runs[0].segments, 2);
        assert_eq!(parsed.runs[1].name, "Bulk");

        let (layers, warnings) = parsed.into_layers(&[false, true, true], 100.0, 10);
        assert!(warnings.is_empty());
        assert_eq!(layers[0].abundances, vec![0.4, 0.6]);
        assert!((layers[0].thickness - 20.0).abs() < 1e-9);
        assert!((layers[1].thickness - 10.0).abs() < 1e-9);
    }

    #[test]
    fn unnamed_layers_are_numbered() {
        let parsed = parse_layers("0.5 0.5\n0.5 0.5\n1.0 0.0\n", 2);
        let names: Vec<&str> = parsed.runs.iter().map(|run| run.name.as_str()).collect();
        assert_eq!(names, vec!["Layer1", "Layer2"]);
        assert_eq!(parsed.component_totals(2), vec![1.5, 0.5]);
    }

    #[test]
    fn unreadable_lines_give_one_warning() {
        let parsed = parse_layers("0.5 0.5 Top\n0.5\nx y\n0.2 0.8\n", 2);
        assert_eq!(parsed.warnings, vec![MALFORMED_LAYER]);
        assert_eq!(parsed.runs.len(), 2);
    }

    #[test]
    fn abundances_outside_the_target_mask_are_dropped() {
        let parsed = parse_layers("0.2 0.8 Top\n", 2);
        let (layers, warnings) = parsed.into_layers(&[false, true], 2000.0, 200);
        assert_eq!(warnings, vec![SURPLUS_ABUNDANCES]);
        assert_eq!(layers[0].abundances, vec![0.8]);
    }
}
