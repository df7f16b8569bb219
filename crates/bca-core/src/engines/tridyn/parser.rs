use super::layer::parse_layers;
use super::model::{
    DEFAULT_ALPHA, DEFAULT_DMG0, DEFAULT_DTHF, DEFAULT_E0, DEFAULT_FLCT, DEFAULT_IRES,
    DEFAULT_IWC, DEFAULT_NH, DEFAULT_NQX, DEFAULT_NRTHR, DEFAULT_OUTPUT_FREQUENCY, DEFAULT_PRCS,
    DEFAULT_QUMAX, DEFAULT_XMAX, IADIS, IDREL, IE0, INEL, LOG_REFLECTED, LOG_SPUTTERED,
    UNSET_OVERRIDE,
};
use crate::common::numeric::normalize_abundances;
use crate::domain::{BcaError, DecodeResult, DefaultAssumed, RunningIndex};
use crate::engines::{
    DecodedSimulation, EngineKind, NO_LAYER_FILE, expand_layer_abundances, single_layer,
};
use crate::model::{
    Angle, ArgValue, Compound, CompoundRegistry, Element, ElementLibrary, Extras,
    GeneralArguments, InelasticLossModel, KineticEnergy, Mode, PhysicalField, RowArguments, RowSide,
    SimulationArguments,
};
use crate::parser::{
    FieldResultExt, TokenLine, is_numeric_token, parse_count, parse_float, parse_int,
    tokenize_lines,
};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Title plus `cdat`, `geom`, `atda` and one `irra` line.
const OBLIGATORY_LINES: usize = 5;

/// Directives read only at their first occurrence.
const SINGLE_DIRECTIVES: [&str; 17] = [
    "cdat", "geom", "atda", "comp", "thrd", "pspr", "coll", "damg", "#gdns", "sbem", "elst",
    "prec", "fout", "outp", "edep", "outi", "outl",
];

#[derive(Debug, Clone, Copy)]
struct Irradiation {
    energy: f64,
    angle: f64,
    abundance: f64,
}

#[derive(Debug, Clone, Copy)]
struct MaxFraction {
    value: f64,
    action: i64,
}

/// Everything keyed by a 1-based component number.
#[derive(Debug, Default)]
struct ComponentDirectives {
    irradiation: BTreeMap<usize, Irradiation>,
    ramp_end: BTreeMap<usize, f64>,
    angle_parameters: BTreeMap<usize, [f64; 3]>,
    overrides: BTreeMap<(usize, PhysicalField), f64>,
    max_fractions: BTreeMap<usize, MaxFraction>,
}

impl ComponentDirectives {
    fn override_value(&mut self, component: usize, field: PhysicalField, value: f64) {
        self.overrides.entry((component, field)).or_insert(value);
    }
}

/// Raw directive values of one input file, before rows are built.
#[derive(Debug, Default)]
struct Directives {
    composition_profile: i64,
    fluence: f64,
    mode: Option<Mode>,
    thickness: f64,
    segments: u32,
    film_thickness: f64,
    symbols: Vec<String>,
    composition: Option<Vec<f64>>,
    threads: Option<i64>,
    projectiles: Option<i64>,
    precision: Option<f64>,
    collisions: Option<i64>,
    no_recoils: bool,
    vacancy_level: Option<f64>,
    compounds: Vec<String>,
    global_density: Option<f64>,
    inelastic_loss_model: Option<InelasticLossModel>,
    frequencies: Option<[i64; 3]>,
    profile_output: bool,
    profile_energy: bool,
    integral_outputs: Vec<String>,
    projectile_outputs: Vec<String>,
    kinetic_energy_mode: Option<KineticEnergy>,
    angle_mode: Option<Angle>,
    components: ComponentDirectives,
    additional: Vec<String>,
}

fn argument(line: &TokenLine, position: usize) -> Option<&str> {
    line.arguments().get(position).map(String::as_str)
}

/// 1-based component number of a per-component directive; `None` skips the line.
fn component_number(
    line: &TokenLine,
    field: &str,
    assumed: &mut DefaultAssumed,
) -> Option<usize> {
    let number = parse_int(argument(line, 0)).or_assumed(field, 0, assumed);
    usize::try_from(number).ok().filter(|number| *number > 0)
}

fn read_directives(lines: &[TokenLine], assumed: &mut DefaultAssumed) -> Directives {
    let mut directives = Directives::default();
    let mut seen: Vec<&str> = Vec::new();
    let mut cdat: Option<&TokenLine> = None;
    let mut geom: Option<&TokenLine> = None;
    let mut atda: Option<&TokenLine> = None;

    let mut position = 0;
    while position < lines.len() {
        let line = &lines[position];
        position += 1;
        let keyword = line.keyword();
        if SINGLE_DIRECTIVES.contains(&keyword) {
            if seen.contains(&keyword) {
                debug!(directive = %line.raw, "ignoring repeated directive");
                continue;
            }
            seen.push(keyword);
        }

        let components = &mut directives.components;
        match keyword {
            "cdat" => cdat = Some(line),
            "geom" => geom = Some(line),
            "atda" => atda = Some(line),
            "comp" => {
                directives.composition = Some(
                    line.arguments()
                        .iter()
                        .map(|raw| parse_float(Some(raw.as_str())).or_assumed("abundance", 0.0, assumed))
                        .collect(),
                );
            }
            "irra" => {
                let Some(component) = component_number(line, "beam", assumed) else {
                    continue;
                };
                let irradiation = Irradiation {
                    energy: parse_float(argument(line, 1)).or_assumed("energy", DEFAULT_E0, assumed),
                    angle: parse_float(argument(line, 2)).or_assumed("angle", DEFAULT_ALPHA, assumed),
                    abundance: parse_float(argument(line, 3)).or_assumed("abundance", 0.0, assumed),
                };
                components.irradiation.entry(component).or_insert(irradiation);
            }
            "irrd" => {
                let Some(component) = component_number(line, "kinetic_energy_mode", assumed) else {
                    continue;
                };
                if directives.kinetic_energy_mode.is_none() {
                    directives.kinetic_energy_mode =
                        Some(IE0.decode(argument(line, 1), "kinetic_energy_mode", assumed));
                }
                if let Ok(ramp_end) = parse_float(argument(line, 2)) {
                    components.ramp_end.entry(component).or_insert(ramp_end);
                }
            }
            "angd" => {
                let Some(component) = component_number(line, "angle_mode", assumed) else {
                    continue;
                };
                if directives.angle_mode.is_none() {
                    directives.angle_mode =
                        Some(IADIS.decode(argument(line, 1), "angle_mode", assumed));
                }
                let parameter = |position| parse_float(argument(line, position)).unwrap_or_default();
                components
                    .angle_parameters
                    .entry(component)
                    .or_insert([parameter(2), parameter(3), parameter(4)]);
            }
            "thrd" => {
                directives.threads =
                    Some(parse_int(argument(line, 0)).or_assumed("threads", DEFAULT_NRTHR, assumed));
            }
            "pspr" => {
                directives.projectiles =
                    Some(parse_int(argument(line, 0)).or_assumed("projectiles", DEFAULT_NH, assumed));
            }
            "prec" => {
                directives.precision =
                    Some(parse_float(argument(line, 0)).or_assumed("precision", DEFAULT_PRCS, assumed));
            }
            "coll" => {
                directives.collisions =
                    Some(parse_int(argument(line, 0)).or_assumed("collisions", DEFAULT_IWC, assumed));
                directives.no_recoils =
                    parse_float(argument(line, 1)).or_assumed("no_recoils", 0.0, assumed) < 0.0;
            }
            "damg" => {
                directives.vacancy_level = Some(
                    parse_float(argument(line, 0)).or_assumed("vacancy_level", DEFAULT_DMG0, assumed),
                );
            }
            "cmpd" => match argument(line, 0) {
                Some(name) if !directives.compounds.iter().any(|known| known == name) => {
                    directives.compounds.push(name.to_string());
                }
                Some(_) => {}
                None => assumed.assumed("compound"),
            },
            "mass" | "edsp" | "efin" | "dens" => {
                let (field, name) = match keyword {
                    "mass" => (PhysicalField::AtomicMass, "atomic_mass"),
                    "edsp" => (PhysicalField::DisplacementEnergy, "displacement_energy"),
                    "efin" => (PhysicalField::CutoffEnergy, "cutoff_energy"),
                    _ => (PhysicalField::AtomicDensity, "atomic_density"),
                };
                let Some(component) = component_number(line, name, assumed) else {
                    continue;
                };
                let value = parse_float(argument(line, 1)).unwrap_or(UNSET_OVERRIDE);
                components.override_value(component, field, value);
            }
            "#gdns" => directives.global_density = parse_float(argument(line, 0)).ok(),
            "sbem" => {
                // Matrix rows follow; component n reads the diagonal, 0.00 means unset.
                let mut row = 0;
                while let Some(next) = lines.get(position)
                    && next.tokens.first().is_some_and(|token| is_numeric_token(token))
                {
                    position += 1;
                    row += 1;
                    let value = next
                        .tokens
                        .get(row - 1)
                        .and_then(|token| token.parse::<f64>().ok())
                        .filter(|value| *value != 0.0)
                        .unwrap_or(UNSET_OVERRIDE);
                    components.override_value(row, PhysicalField::SurfaceBindingEnergy, value);
                }
            }
            "elst" => {
                directives.inelastic_loss_model =
                    Some(INEL.decode(argument(line, 0), "inelastic_loss_model", assumed));
            }
            "exst" => {
                let Some(component) = component_number(line, "max_atomic_fraction", assumed) else {
                    continue;
                };
                let max_fraction = MaxFraction {
                    value: parse_float(argument(line, 1)).or_assumed(
                        "max_atomic_fraction",
                        DEFAULT_QUMAX,
                        assumed,
                    ),
                    action: parse_int(argument(line, 2)).or_assumed(
                        "max_atomic_fraction_action",
                        DEFAULT_IRES,
                        assumed,
                    ),
                };
                components.max_fractions.entry(component).or_insert(max_fraction);
            }
            "fout" => {
                let mut frequency = |position: usize, field: &str| {
                    parse_int(argument(line, position)).or_assumed(
                        field,
                        DEFAULT_OUTPUT_FREQUENCY,
                        assumed,
                    )
                };
                directives.frequencies = Some([
                    frequency(0, "log_frequency"),
                    frequency(1, "integral_frequency"),
                    frequency(2, "output_frequency"),
                ]);
            }
            "outp" => directives.profile_output = true,
            "edep" => directives.profile_energy = true,
            "outi" => directives.integral_outputs = line.arguments().to_vec(),
            "outl" => directives.projectile_outputs = line.arguments().to_vec(),
            other if !other.is_empty() && other.chars().all(char::is_alphabetic) => {
                directives.additional.push(line.raw.clone());
            }
            _ => {}
        }
    }

    // Obligatory directives; a missing one records all of its fields.
    let cdat_argument = |position| cdat.and_then(|line| argument(line, position));
    directives.composition_profile =
        parse_int(cdat_argument(0)).or_assumed("composition_profile", 0, assumed);
    directives.fluence = parse_float(cdat_argument(1)).or_assumed("fluence", DEFAULT_FLCT, assumed);
    directives.mode = Some(IDREL.decode(cdat_argument(2), "mode", assumed));

    let geom_argument = |position| geom.and_then(|line| argument(line, position));
    directives.thickness =
        parse_float(geom_argument(0)).or_assumed("thickness", DEFAULT_XMAX, assumed);
    directives.segments = parse_count(geom_argument(1)).or_assumed("segments", DEFAULT_NQX, assumed);
    directives.film_thickness =
        parse_float(geom_argument(2)).or_assumed("film_thickness", DEFAULT_DTHF, assumed);

    match atda {
        Some(line) => directives.symbols = line.arguments().to_vec(),
        None => assumed.assumed("symbol"),
    }
    directives
}

/// Builds rows of both sides with one running index.
struct RowBuilder<'a> {
    directives: &'a Directives,
    library: &'a ElementLibrary,
    index: RunningIndex,
    warnings: Vec<String>,
}

impl RowBuilder<'_> {
    fn rows(&mut self, side: RowSide, abundances: &[f64]) -> Vec<RowArguments> {
        let mut rows = Vec::new();
        for (position, abundance) in abundances.iter().copied().enumerate() {
            if abundance == 0.0 {
                continue;
            }
            let component = position + 1;
            let element = self.element(position);
            let mut row = RowArguments::new(self.index.next_index(), element);
            let components = &self.directives.components;
            row.abundance = abundance;
            if let Some(max_fraction) = components.max_fractions.get(&component) {
                row.max_atomic_fraction = max_fraction.value;
                row.optional.insert(
                    "max_atomic_fraction_action".to_string(),
                    ArgValue::Int(max_fraction.action),
                );
            }
            if side == RowSide::Beam {
                if let Some(irradiation) = components.irradiation.get(&component) {
                    row.energy = irradiation.energy;
                    row.angle = irradiation.angle;
                }
                if let Some(ramp_end) = components.ramp_end.get(&component) {
                    row.optional
                        .insert("energy_ramp_end".to_string(), ArgValue::Float(*ramp_end));
                }
                if let Some(parameters) = components.angle_parameters.get(&component) {
                    for (name, value) in ["angle_param1", "angle_param2", "angle_param3"]
                        .into_iter()
                        .zip(parameters)
                    {
                        row.optional.insert(name.to_string(), ArgValue::Float(*value));
                    }
                }
            }
            rows.push(row);
        }
        rows
    }

    fn element(&mut self, position: usize) -> Element {
        let symbol = self
            .directives
            .symbols
            .get(position)
            .map(String::as_str)
            .unwrap_or_default();
        let Some(mut element) = self.library.element_from_symbol(symbol) else {
            let message = format!("Element \"{symbol}\" unknown, left empty");
            warn!("{message}");
            self.warnings.push(message);
            return Element::empty();
        };
        let component = position + 1;
        for ((number, field), value) in &self.directives.components.overrides {
            if *number == component && *value != UNSET_OVERRIDE {
                element.set_value(*field, Some(*value));
            }
        }
        element
    }
}

/// Fractions of the nonzero entries, normalized; zero entries stay zero.
fn normalized_nonzero(values: &[f64]) -> Vec<f64> {
    let mask: Vec<bool> = values.iter().map(|value| *value != 0.0).collect();
    let present: Vec<f64> = values.iter().copied().filter(|value| *value != 0.0).collect();
    expand_layer_abundances(&normalize_abundances(&present), &mask)
}

pub(super) fn decode_input(
    source: &str,
    layer_source: Option<&str>,
    library: &ElementLibrary,
    registry: &CompoundRegistry,
) -> DecodeResult<DecodedSimulation> {
    let lines = tokenize_lines(source);
    if lines.len() < OBLIGATORY_LINES {
        return Err(BcaError::input_validation(
            "INPUT.OBLIGATORY_LINES",
            format!(
                "Input file holds {} non-empty lines; the title and the obligatory control parameters need at least {}.",
                lines.len(),
                OBLIGATORY_LINES
            ),
        ));
    }

    let mut assumed = DefaultAssumed::new();
    let title = lines[0].raw.clone();
    let directives = read_directives(&lines[1..], &mut assumed);
    let ncp = directives.symbols.len();
    let mut warnings = Vec::new();

    let mut parsed_layers = None;
    if directives.composition_profile > 0 {
        match layer_source {
            Some(layer_source) => {
                let parsed = parse_layers(layer_source, ncp);
                if !parsed.runs.is_empty() || !parsed.warnings.is_empty() {
                    parsed_layers = Some(parsed);
                }
            }
            None => {
                warn!("{NO_LAYER_FILE}");
                warnings.push(NO_LAYER_FILE.to_string());
            }
        }
    }

    let mut composition = match (&directives.composition, &parsed_layers) {
        (Some(composition), _) => composition.clone(),
        (None, Some(parsed)) if !parsed.runs.is_empty() => {
            normalized_nonzero(&parsed.component_totals(ncp))
        }
        _ => {
            return Err(BcaError::input_validation(
                "INPUT.TARGET_COMPOSITION",
                "Abundances of target composition can not be read.",
            ));
        }
    };
    composition.resize(ncp, 0.0);
    let beam: Vec<f64> = (1..=ncp)
        .map(|component| {
            directives
                .components
                .irradiation
                .get(&component)
                .map_or(0.0, |irradiation| irradiation.abundance)
        })
        .collect();

    let mut builder = RowBuilder {
        directives: &directives,
        library,
        index: RunningIndex::new(),
        warnings: Vec::new(),
    };
    let beam_rows = builder.rows(RowSide::Beam, &beam);
    let target_rows = builder.rows(RowSide::Target, &composition);
    warnings.extend(builder.warnings);

    let mode = match directives.mode.unwrap_or(IDREL.default_variant()) {
        Mode::Static if directives.no_recoils => Mode::StaticNoRecoil,
        mode => mode,
    };
    let mut settings = GeneralArguments::new(title);
    settings.mode = mode;
    settings.fluence = directives.fluence;
    settings.threads = directives.threads.unwrap_or(DEFAULT_NRTHR);
    settings.precision = directives.precision;
    settings.projectiles = match (directives.projectiles, directives.precision) {
        (Some(projectiles), _) => Some(projectiles),
        (None, None) => Some(DEFAULT_NH),
        (None, Some(_)) => None,
    };
    settings.compounds = directives
        .compounds
        .iter()
        .map(|name| {
            registry
                .find(name)
                .cloned()
                .unwrap_or_else(|| Compound::new(Some(name.as_str()), IndexMap::new()))
        })
        .collect();
    settings.inelastic_loss_model = Some(
        directives
            .inelastic_loss_model
            .unwrap_or(INEL.default_variant()),
    );
    settings.optional = settings_extras(&directives);

    let mut arguments = SimulationArguments::new(EngineKind::Tridyn.name(), settings);
    arguments.beam_args.kinetic_energy_mode =
        directives.kinetic_energy_mode.unwrap_or(KineticEnergy::Fixed);
    arguments.beam_args.angle_mode = directives.angle_mode.unwrap_or(Angle::Fixed);
    arguments.target_args.thickness = directives.thickness;
    arguments.target_args.segments = directives.segments;
    arguments.target_args.global_density = directives.global_density;
    arguments.target_args.optional.insert(
        "film_thickness".to_string(),
        ArgValue::Float(directives.film_thickness),
    );
    arguments.beam_rows = beam_rows;
    arguments.target_rows = target_rows;

    if let Some(parsed) = parsed_layers {
        let mask: Vec<bool> = composition.iter().map(|value| *value != 0.0).collect();
        let (layers, layer_warnings) =
            parsed.into_layers(&mask, directives.thickness, directives.segments);
        warnings.extend(layer_warnings);
        arguments.structure = layers;
    }
    if arguments.structure.is_empty() {
        arguments.structure.push(single_layer(&arguments));
    }
    arguments.additional = directives.additional.clone();

    info!(
        beam_rows = arguments.beam_rows.len(),
        target_rows = arguments.target_rows.len(),
        layers = arguments.structure.len(),
        assumed = assumed.len(),
        warnings = warnings.len(),
        "decoded TRIDYN input"
    );
    Ok(DecodedSimulation {
        arguments,
        assumed,
        warnings,
    })
}

fn settings_extras(directives: &Directives) -> Extras {
    let [log_frequency, integral_frequency, output_frequency] =
        directives.frequencies.unwrap_or([DEFAULT_OUTPUT_FREQUENCY; 3]);
    let outputs = |keywords: &[String]| {
        ArgValue::List(keywords.iter().map(|keyword| ArgValue::from(keyword.as_str())).collect())
    };
    let projectile_outputs: Vec<String> = directives
        .projectile_outputs
        .iter()
        .filter(|keyword| *keyword != LOG_REFLECTED && *keyword != LOG_SPUTTERED)
        .cloned()
        .collect();
    let logs = |keyword: &str| directives.projectile_outputs.iter().any(|known| known == keyword);

    let mut extras = Extras::new();
    for (key, value) in [
        (
            "collisions",
            ArgValue::Int(directives.collisions.unwrap_or(DEFAULT_IWC)),
        ),
        ("no_recoils", ArgValue::Bool(directives.no_recoils)),
        (
            "vacancy_level",
            ArgValue::Float(directives.vacancy_level.unwrap_or(DEFAULT_DMG0)),
        ),
        ("log_frequency", ArgValue::Int(log_frequency)),
        ("integral_frequency", ArgValue::Int(integral_frequency)),
        ("output_frequency", ArgValue::Int(output_frequency)),
        ("profile_output", ArgValue::Bool(directives.profile_output)),
        ("profile_energy", ArgValue::Bool(directives.profile_energy)),
        ("integral_outputs", outputs(&directives.integral_outputs)),
        ("projectile_outputs", outputs(&projectile_outputs)),
        ("log_reflected", ArgValue::Bool(logs(LOG_REFLECTED))),
        ("log_sputtered", ArgValue::Bool(logs(LOG_SPUTTERED))),
    ] {
        extras.insert(key.to_string(), value);
    }
    extras
}

#[cfg(test)]
mod tests {
    use super::decode_input;
    use crate::engines::{MALFORMED_LAYER, NO_LAYER_FILE};
    use crate::model::{
        Angle, ArgValue, ArgumentLookup, CompoundRegistry, ElementLibrary, InelasticLossModel,
        Mode, PhysicalField,
    };

    const INPUT: &str = "\
He on SiO2 first run
# obligatory control parameters
cdat 0 2.5 0
geom 500.0 100 0.0
atda He Si O
comp 0.0 0.4 0.6
irra 1 1000.0 15.0 1.0
# optional control parameters
cmpd SiO2
cmpd CHps
thrd 4
pspr 50000
coll 1 -1
damg 0.1
sbem
0.00 0.00 0.00
0.00 5.0 0.00
0.00 0.00 0.00
mass 2 28.0
elst 1
exst 3 0.7 2 0
fout 10 20 30
outp
outl proj scat
rcsp 1
";

    fn decode(source: &str, layer: Option<&str>) -> crate::engines::DecodedSimulation {
        decode_input(
            source,
            layer,
            &ElementLibrary::tridyn(),
            &CompoundRegistry::tridyn(),
        )
        .expect("input should decode")
    }

    #[test]
    fn decodes_directives_into_settings_and_rows() {
        let decoded = decode(INPUT, None);
        let arguments = &decoded.arguments;

        assert_eq!(arguments.title(), "He on SiO2 first run");
        assert_eq!(arguments.settings.mode, Mode::StaticNoRecoil);
        assert_eq!(arguments.settings.fluence, 2.5);
        assert_eq!(arguments.settings.threads, 4);
        assert_eq!(arguments.settings.projectiles, Some(50000));
        assert_eq!(
            arguments.settings.inelastic_loss_model,
            Some(InelasticLossModel::LindhardScharff)
        );
        assert_eq!(arguments.settings.compounds.len(), 2);
        assert_eq!(arguments.settings.compounds[1].name_save, "CHps");
        assert_eq!(arguments.lookup_i64("integral_frequency"), Some(20));
        assert_eq!(arguments.lookup_bool("profile_output"), Some(true));
        assert_eq!(arguments.lookup_bool("log_reflected"), Some(true));
        assert_eq!(arguments.lookup_bool("no_recoils"), Some(true));
        assert_eq!(
            arguments.lookup("projectile_outputs"),
            Some(ArgValue::List(vec![ArgValue::from("proj")]))
        );

        assert_eq!(arguments.beam_rows.len(), 1);
        assert_eq!(arguments.beam_rows[0].symbol, "He");
        assert_eq!(arguments.beam_rows[0].energy, 1000.0);
        assert_eq!(arguments.beam_rows[0].angle, 15.0);
        assert_eq!(arguments.target_rows.len(), 2);
        assert_eq!(arguments.target_rows[0].index, 2);
        assert_eq!(arguments.target_rows[1].max_atomic_fraction, 0.7);

        let silicon = &arguments.target_rows[0].element;
        assert_eq!(silicon.value(PhysicalField::SurfaceBindingEnergy), Some(5.0));
        assert_eq!(silicon.value(PhysicalField::AtomicMass), Some(28.0));
        assert!(!arguments.beam_rows[0].element.modified);

        assert_eq!(arguments.additional, vec!["rcsp 1"]);
        assert_eq!(arguments.structure.len(), 1);
        assert_eq!(arguments.structure[0].abundances, vec![0.4, 0.6]);
        assert!(decoded.assumed.is_empty(), "{:?}", decoded.assumed);
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn short_files_are_a_hard_error() {
        let error = decode_input(
            "title\ncdat 0 1.0 1\ngeom 100.0 10 0.0\n",
            None,
            &ElementLibrary::tridyn(),
            &CompoundRegistry::tridyn(),
        )
        .expect_err("file is too short");
        assert_eq!(error.placeholder(), "INPUT.OBLIGATORY_LINES");
    }

    #[test]
    fn malformed_obligatory_values_are_assumed() {
        let decoded = decode(&INPUT.replace("cdat 0 2.5 0", "cdat 0 lots 7"), None);

        assert_eq!(decoded.arguments.settings.fluence, 1.0);
        assert_eq!(decoded.arguments.settings.mode, Mode::Dynamic);
        assert_eq!(decoded.assumed.fields(), ["fluence", "mode"]);
    }

    #[test]
    fn repeated_directives_keep_the_first_occurrence() {
        let decoded = decode(&INPUT.replace("thrd 4\n", "thrd 4\nthrd 9\n"), None);
        assert_eq!(decoded.arguments.settings.threads, 4);
        assert_eq!(decoded.arguments.additional, vec!["rcsp 1"]);
    }

    #[test]
    fn unknown_symbols_keep_an_empty_element() {
        let decoded = decode(&INPUT.replace("atda He Si O", "atda He Xx O"), None);

        assert_eq!(decoded.warnings, vec!["Element \"Xx\" unknown, left empty"]);
        assert!(decoded.arguments.target_rows[0].element.is_empty());
        assert_eq!(decoded.arguments.target_rows[1].symbol, "O");
    }

    #[test]
    fn layered_input_reads_the_layer_file() {
        let source = INPUT
            .replace("cdat 0 2.5 0", "cdat 1 2.5 0")
            .replace("comp 0.0 0.4 0.6\n", "");
        let layer = "\
0.0 0.5 0.5    Oxide
0.0 0.5 0.5
0.0 1.0 0.0    Bulk
";
        let decoded = decode(&source, Some(layer));
        let arguments = &decoded.arguments;

        assert!(decoded.warnings.is_empty());
        assert_eq!(arguments.structure.len(), 2);
        assert_eq!(arguments.structure[0].segments, 2);
        assert_eq!(arguments.structure[0].thickness, 10.0);
        assert_eq!(arguments.structure[1].abundances, vec![1.0, 0.0]);
        assert_eq!(arguments.target_rows.len(), 2);
        assert_eq!(arguments.target_rows[0].abundance, 0.75);
        assert_eq!(arguments.target_rows[1].abundance, 0.25);
    }

    #[test]
    fn layered_input_without_composition_or_layers_is_a_hard_error() {
        let source = INPUT
            .replace("cdat 0 2.5 0", "cdat 1 2.5 0")
            .replace("comp 0.0 0.4 0.6\n", "");
        let error = decode_input(
            &source,
            None,
            &ElementLibrary::tridyn(),
            &CompoundRegistry::tridyn(),
        )
        .expect_err("composition is unknown");

        assert_eq!(error.placeholder(), "INPUT.TARGET_COMPOSITION");
        assert_eq!(error.to_string(), "Abundances of target composition can not be read.");
    }

    #[test]
    fn missing_layer_file_falls_back_to_one_layer() {
        let source = INPUT.replace("cdat 0 2.5 0", "cdat 1 2.5 0");
        let decoded = decode(&source, None);

        assert_eq!(decoded.warnings, vec![NO_LAYER_FILE]);
        assert_eq!(decoded.arguments.structure.len(), 1);
        assert_eq!(decoded.arguments.structure[0].abundances, vec![0.4, 0.6]);
    }

    #[test]
    fn malformed_layer_lines_warn_once() {
        let source = INPUT.replace("cdat 0 2.5 0", "cdat 1 2.5 0");
        let decoded = decode(&source, Some("0.0 0.5 0.5 Top\n0.0 0.5\n0.0 x 1.0\n0.0 1.0 0.0\n"));

        assert_eq!(decoded.warnings, vec![MALFORMED_LAYER]);
        assert_eq!(decoded.arguments.structure.len(), 2);
    }

    #[test]
    fn distribution_directives_set_beam_modes() {
        let source = INPUT.replace("rcsp 1\n", "irrd 1 1 2000.0\nangd 1 2 10.0 1.5 0.0\n");
        let decoded = decode(&source, None);
        let arguments = &decoded.arguments;

        assert_eq!(
            arguments.beam_args.kinetic_energy_mode,
            crate::model::KineticEnergy::LinearRamp
        );
        assert_eq!(arguments.beam_args.angle_mode, Angle::Cos2d);
        assert_eq!(arguments.beam_rows[0].lookup_f64("energy_ramp_end"), Some(2000.0));
        assert_eq!(arguments.beam_rows[0].lookup_f64("angle_param2"), Some(1.5));
        assert!(arguments.additional.is_empty());
    }
}
