use super::TridynVersion;
use super::layer::uses_layer_file;
use super::model::{
    DEFAULT_DMG0, DEFAULT_IRES, DEFAULT_IWC, DEFAULT_NH, DEFAULT_NRTHR, DEFAULT_OUTPUT_FREQUENCY,
    IADIS, IDREL, IE0, INEL, LOG_REFLECTED, LOG_SPUTTERED,
};
use crate::common::numeric::normalize_abundances;
use crate::engines::{GroupedRow, expand_layer_abundances};
use crate::model::{
    Angle, ArgValue, ArgumentLookup, KineticEnergy, Mode, PhysicalField, RowArguments,
    SimulationArguments,
};
use crate::serialization::{float_token, normalize_text_artifact};
use tracing::{debug, warn};

/// Directives written at most once; additional copies would shadow the generated values.
const GENERATED_ONCE: [&str; 13] = [
    "cdat", "geom", "atda", "comp", "thrd", "pspr", "prec", "coll", "damg", "elst", "fout",
    "outp", "edep",
];

const COMPONENT_OVERRIDES: [(PhysicalField, &str); 4] = [
    (PhysicalField::AtomicMass, "mass"),
    (PhysicalField::DisplacementEnergy, "edsp"),
    (PhysicalField::CutoffEnergy, "efin"),
    (PhysicalField::AtomicDensity, "dens"),
];

/// Keyword list that drops repeated entries while keeping first-seen order.
#[derive(Debug, Default)]
struct KeywordList(Vec<String>);

impl KeywordList {
    fn push(&mut self, keyword: &str) {
        if !self.0.iter().any(|existing| existing == keyword) {
            self.0.push(keyword.to_string());
        }
    }

    fn line(&self, directive: &str) -> Option<String> {
        (!self.0.is_empty()).then(|| format!("{directive} {}", self.0.join(" ")))
    }
}

pub(super) fn render_input(
    arguments: &SimulationArguments,
    components: &[GroupedRow<'_>],
    version: TridynVersion,
) -> String {
    let settings = &arguments.settings;
    if components.len() > version.max_components() {
        warn!(
            components = components.len(),
            max = version.max_components(),
            "TRIDYN {version} supports fewer components than configured"
        );
    }

    let mut compounds: Vec<String> = settings
        .compounds
        .iter()
        .map(|compound| compound.name_save.clone())
        .collect();
    let mut integral_outputs = KeywordList::default();
    for keyword in text_list(arguments.lookup("integral_outputs")) {
        integral_outputs.push(&keyword);
    }
    let mut projectile_outputs = KeywordList::default();
    for keyword in text_list(arguments.lookup("projectile_outputs")) {
        projectile_outputs.push(&keyword);
    }
    if arguments.lookup_bool("log_reflected").unwrap_or(false) {
        projectile_outputs.push(LOG_REFLECTED);
    }
    if arguments.lookup_bool("log_sputtered").unwrap_or(false) {
        projectile_outputs.push(LOG_SPUTTERED);
    }

    let mut additions = Vec::new();
    for directive in arguments.additional.iter().map(|line| line.trim()) {
        let mut tokens = directive.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "cmpd" => compounds.extend(tokens.map(str::to_string)),
            "outi" => tokens.for_each(|token| integral_outputs.push(token)),
            "outl" => tokens.for_each(|token| projectile_outputs.push(token)),
            keyword if GENERATED_ONCE.contains(&keyword) => {
                debug!(directive, "dropping additional directive that duplicates a generated one");
            }
            _ => additions.push(directive.to_string()),
        }
    }

    let mut lines = vec![
        title_line(arguments),
        "# obligatory control parameters".to_string(),
        format!(
            "cdat {} {} {}",
            i32::from(uses_layer_file(arguments)),
            float_token(settings.fluence),
            IDREL.code(settings.mode)
        ),
        format!(
            "geom {} {} {}",
            float_token(arguments.target_args.thickness),
            arguments.target_args.segments,
            float_token(arguments.lookup_f64("film_thickness").unwrap_or_default())
        ),
        format!(
            "atda {}",
            components
                .iter()
                .map(|component| component.primary().symbol.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        ),
    ];
    if !uses_layer_file(arguments) {
        lines.push(format!(
            "comp {}",
            join_floats(&target_fractions(arguments, components))
        ));
    }
    lines.extend(irradiation_lines(components));

    lines.push("# optional control parameters".to_string());
    lines.extend(compounds.iter().map(|compound| format!("cmpd {compound}")));
    let threads = if settings.threads > 0 {
        settings.threads
    } else {
        DEFAULT_NRTHR
    };
    lines.push(format!("thrd {threads}"));
    match settings.precision {
        Some(precision) => lines.push(format!("prec {}", float_token(precision))),
        None => {
            let histories = settings.histories.unwrap_or(1);
            let projectiles = settings.projectiles.unwrap_or(DEFAULT_NH);
            lines.push(format!("pspr {}", histories * projectiles));
        }
    }
    let no_recoils = arguments.lookup_bool("no_recoils").unwrap_or(false)
        || settings.mode == Mode::StaticNoRecoil;
    lines.push(format!(
        "coll {} {}",
        arguments.lookup_i64("collisions").unwrap_or(DEFAULT_IWC),
        if no_recoils { -1 } else { 0 }
    ));
    lines.push(format!(
        "damg {}",
        float_token(arguments.lookup_f64("vacancy_level").unwrap_or(DEFAULT_DMG0))
    ));
    lines.extend(distribution_lines(arguments, components));
    lines.extend(modification_lines(arguments, components));
    lines.push(format!(
        "elst {}",
        settings
            .inelastic_loss_model
            .map_or(INEL.default_code(), |model| INEL.code(model))
    ));
    lines.extend(max_fraction_lines(components));

    let frequency = |name: &str| {
        arguments
            .lookup_i64(name)
            .unwrap_or(DEFAULT_OUTPUT_FREQUENCY)
    };
    lines.push(format!(
        "fout {} {} {}",
        frequency("log_frequency"),
        frequency("integral_frequency"),
        frequency("output_frequency")
    ));
    if arguments.lookup_bool("profile_output").unwrap_or(false) {
        lines.push("outp".to_string());
    }
    if arguments.lookup_bool("profile_energy").unwrap_or(false) {
        lines.push("edep".to_string());
    }
    lines.extend(integral_outputs.line("outi"));
    lines.extend(projectile_outputs.line("outl"));
    lines.extend(additions);

    normalize_text_artifact(&lines.join("\n"))
}

fn title_line(arguments: &SimulationArguments) -> String {
    let settings = &arguments.settings;
    let title = settings.title.trim();
    let title = if title.is_empty() { "TRIDYN" } else { title };
    format!("{title} {}", settings.comment.trim())
        .trim_end()
        .to_string()
}

fn text_list(value: Option<ArgValue>) -> Vec<String> {
    match value {
        Some(ArgValue::List(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(ArgValue::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

fn join_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| float_token(*value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized fractions of one side; components of the other side stay at zero.
fn side_fractions(values: &[Option<f64>]) -> Vec<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let mask: Vec<bool> = values.iter().map(Option::is_some).collect();
    expand_layer_abundances(&normalize_abundances(&present), &mask)
}

/// Target composition of a single-layer run; the layer's abundances take precedence.
fn target_fractions(arguments: &SimulationArguments, components: &[GroupedRow<'_>]) -> Vec<f64> {
    let mut abundances: Vec<Option<f64>> = components
        .iter()
        .map(|component| component.target().map(|row| row.abundance))
        .collect();
    let targets = abundances.iter().flatten().count();
    if let Some(layer) = arguments.structure.first()
        && layer.abundances.len() == targets
    {
        let mut layer_values = layer.abundances.iter().copied();
        for slot in abundances.iter_mut().filter(|slot| slot.is_some()) {
            *slot = layer_values.next();
        }
    }
    side_fractions(&abundances)
}

fn irradiation_lines(components: &[GroupedRow<'_>]) -> Vec<String> {
    let beam: Vec<Option<f64>> = components
        .iter()
        .map(|component| component.beam().map(|row| row.abundance))
        .collect();
    let fractions = side_fractions(&beam);
    components
        .iter()
        .enumerate()
        .filter_map(|(position, component)| {
            let row = component.beam()?;
            Some(format!(
                "irra {} {} {} {}",
                position + 1,
                float_token(row.energy),
                float_token(row.angle),
                float_token(fractions[position])
            ))
        })
        .collect()
}

/// `irrd` and `angd` lines for beam components when a non-fixed distribution is selected.
fn distribution_lines(
    arguments: &SimulationArguments,
    components: &[GroupedRow<'_>],
) -> Vec<String> {
    let energy_mode = arguments.beam_args.kinetic_energy_mode;
    let angle_mode = arguments.beam_args.angle_mode;
    let mut lines = Vec::new();
    for (position, row) in beam_rows(components) {
        if energy_mode != KineticEnergy::Fixed {
            let ramp_end = row.lookup_f64("energy_ramp_end").unwrap_or(row.energy);
            lines.push(format!(
                "irrd {} {} {}",
                position + 1,
                IE0.code(energy_mode),
                float_token(ramp_end)
            ));
        }
        if angle_mode != Angle::Fixed {
            let parameter = |name: &str| float_token(row.lookup_f64(name).unwrap_or_default());
            lines.push(format!(
                "angd {} {} {} {} {}",
                position + 1,
                IADIS.code(angle_mode),
                parameter("angle_param1"),
                parameter("angle_param2"),
                parameter("angle_param3")
            ));
        }
    }
    lines
}

fn beam_rows<'a>(
    components: &'a [GroupedRow<'a>],
) -> impl Iterator<Item = (usize, &'a RowArguments)> + 'a {
    components
        .iter()
        .enumerate()
        .filter_map(|(position, component)| component.beam().map(|row| (position, row)))
}

/// `sbem` matrix followed by per-component overrides and the global density.
fn modification_lines(
    arguments: &SimulationArguments,
    components: &[GroupedRow<'_>],
) -> Vec<String> {
    let elements: Vec<_> = components
        .iter()
        .map(|component| &component.primary().element)
        .collect();
    let mut lines = Vec::new();

    if elements
        .iter()
        .any(|element| element.differs(PhysicalField::SurfaceBindingEnergy))
    {
        lines.push("sbem".to_string());
        let energies: Vec<f64> = elements
            .iter()
            .map(|element| {
                element
                    .value(PhysicalField::SurfaceBindingEnergy)
                    .unwrap_or_default()
            })
            .collect();
        for first in &energies {
            let row: Vec<String> = energies
                .iter()
                .map(|second| {
                    if *first != 0.0 && *second != 0.0 {
                        float_token((first + second) / 2.0)
                    } else {
                        "0.00".to_string()
                    }
                })
                .collect();
            lines.push(row.join(" "));
        }
    }

    for (field, directive) in COMPONENT_OVERRIDES {
        for (position, element) in elements.iter().enumerate() {
            if element.differs(field) {
                lines.push(format!(
                    "{directive} {} {}",
                    position + 1,
                    float_token(element.value(field).unwrap_or_default())
                ));
            }
        }
    }

    if let Some(density) = arguments.target_args.global_density {
        lines.push(format!("#gdns {}", float_token(density)));
    }
    lines
}

fn max_fraction_lines(components: &[GroupedRow<'_>]) -> Vec<String> {
    components
        .iter()
        .enumerate()
        .filter_map(|(position, component)| {
            let row = component.primary();
            (row.max_atomic_fraction != 1.0).then(|| {
                format!(
                    "exst {} {} {} 0",
                    position + 1,
                    float_token(row.max_atomic_fraction),
                    row.lookup_i64("max_atomic_fraction_action")
                        .unwrap_or(DEFAULT_IRES)
                )
            })
        })
        .collect()
}
