use super::SdtrimspVersion;
use super::layer::parse_layers;
use super::model::{
    CASE_ALPHA, CASE_E0, DEFAULT_ALPHA0, DEFAULT_E0, DEFAULT_FLC, DEFAULT_IDOUT, DEFAULT_NH,
    DEFAULT_NQX, DEFAULT_NR_PPROJ, DEFAULT_NUMBER_CALC, DEFAULT_QUMAX, DEFAULT_TTARGET, IDREL,
    IINTEGRAL, IPOT, UNSET_OVERRIDE, inel0, isbv,
};
use crate::domain::{BcaError, DecodeResult, DefaultAssumed, RunningIndex};
use crate::engines::{CodeTable, DecodedSimulation, EngineKind, NO_LAYER_FILE, single_layer};
use crate::model::{
    Angle, ArgValue, Element, ElementLibrary, GeneralArguments, InelasticLossModel,
    KineticEnergy, PhysicalField, RowArguments, RowSide, SimulationArguments,
};
use crate::parser::{
    FieldResultExt, KeyValueTable, parse_count, parse_float, parse_fortran_bool, parse_int,
    split_list,
};
use tracing::{info, warn};

const DISCARDED_KEYS: [&str; 4] = ["text", "tableinp", "ioutput_part(2)", "ioutput_part(5)"];

/// Per-component lists of `tri.inp`, aligned by position.
struct ComponentLists {
    symbols: Vec<String>,
    max_atomic_fractions: Vec<f64>,
    energies: Vec<f64>,
    angles: Vec<f64>,
    loss_models: Vec<InelasticLossModel>,
    overrides: Vec<(PhysicalField, Vec<f64>)>,
    default_loss_model: InelasticLossModel,
}

/// Accumulates rows of both sides with one running index.
struct RowBuilder<'a> {
    lists: &'a ComponentLists,
    library: &'a ElementLibrary,
    index: RunningIndex,
    assumed: DefaultAssumed,
    warnings: Vec<String>,
}

impl RowBuilder<'_> {
    /// Creates one row for every component with a nonzero abundance on `side`.
    fn rows(&mut self, side: RowSide, abundances: &[f64]) -> Vec<RowArguments> {
        let mut rows = Vec::new();
        for (position, abundance) in abundances.iter().copied().enumerate() {
            if abundance == 0.0 {
                continue;
            }
            let mut row_assumed = DefaultAssumed::new();
            let element = self.element(position);
            let mut row = RowArguments::new(self.index.next_index(), element);
            row.abundance = abundance;
            row.max_atomic_fraction = self
                .lists
                .max_atomic_fractions
                .get(position)
                .copied()
                .unwrap_or_else(|| {
                    row_assumed.assumed("max_atomic_fraction");
                    DEFAULT_QUMAX
                });
            row.inelastic_loss_model = Some(
                self.lists
                    .loss_models
                    .get(position)
                    .copied()
                    .unwrap_or_else(|| {
                        row_assumed.assumed("inelastic_loss_model");
                        self.lists.default_loss_model
                    }),
            );
            if side == RowSide::Beam {
                row.energy = self.lists.energies.get(position).copied().unwrap_or_else(|| {
                    row_assumed.assumed("energy");
                    DEFAULT_E0
                });
                row.angle = self.lists.angles.get(position).copied().unwrap_or_else(|| {
                    row_assumed.assumed("angle");
                    DEFAULT_ALPHA0
                });
            }
            self.assumed.merge(row_assumed);
            rows.push(row);
        }
        rows
    }

    fn element(&mut self, position: usize) -> Element {
        let symbol = self
            .lists
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
        for (field, values) in &self.lists.overrides {
            if let Some(value) = values.get(position).copied()
                && value != UNSET_OVERRIDE
            {
                element.set_value(*field, Some(value));
            }
        }
        element
    }
}

pub(super) fn decode_input(
    source: &str,
    layer_source: Option<&str>,
    library: &ElementLibrary,
    version: SdtrimspVersion,
) -> DecodeResult<DecodedSimulation> {
    let mut assumed = DefaultAssumed::new();
    let mut lines = source.lines();
    let title = match lines.next() {
        Some(line) => line.trim().to_string(),
        None => {
            assumed.assumed("title");
            EngineKind::Sdtrimsp.name().to_string()
        }
    };

    let mut table = KeyValueTable::parse(lines);
    table.discard_where(|key| DISCARDED_KEYS.contains(&key));
    let global_density = table
        .take("!globaldensity")
        .and_then(|raw| parse_global_density(&raw));
    table.discard_where(|key| key.starts_with('!'));

    let mut settings = GeneralArguments::new(title);
    settings.mode = IDREL.decode(table.take("idrel").as_deref(), "mode", &mut assumed);
    settings.fluence =
        parse_float(table.take("flc").as_deref()).or_assumed("fluence", DEFAULT_FLC, &mut assumed);
    let histories =
        parse_int(table.take("nh").as_deref()).or_assumed("histories", DEFAULT_NH, &mut assumed);
    settings.histories = Some(histories);
    let idout = parse_int(table.take("idout").as_deref()).or_assumed(
        "histories_between_outputs",
        DEFAULT_IDOUT,
        &mut assumed,
    );
    settings.projectiles = Some(parse_int(table.take("nr_pproj").as_deref()).or_assumed(
        "projectiles",
        DEFAULT_NR_PPROJ,
        &mut assumed,
    ));
    settings.interaction_potential = Some(IPOT.decode(
        table.take("ipot").as_deref(),
        "interaction_potential",
        &mut assumed,
    ));
    settings.integration_method = Some(IINTEGRAL.decode(
        table.take("iintegral").as_deref(),
        "integration_method",
        &mut assumed,
    ));
    settings.surface_binding_model = Some(isbv(version).decode(
        table.take("isbv").as_deref(),
        "surface_binding_model",
        &mut assumed,
    ));

    let mut logical = |key: &str, field: &str| {
        parse_fortran_bool(table.take(key).as_deref()).or_assumed(field, false, &mut assumed)
    };
    let log_reflected = logical("lparticle_p", "log_reflected");
    let log_sputtered = logical("lparticle_r", "log_sputtered");
    let log_matrix = logical("lmatrices", "log_matrix");
    for (key, value) in [
        ("histories_between_outputs", ArgValue::Int(idout)),
        ("log_reflected", ArgValue::Bool(log_reflected)),
        ("log_sputtered", ArgValue::Bool(log_sputtered)),
        ("log_matrix", ArgValue::Bool(log_matrix)),
    ] {
        settings.optional.insert(key.to_string(), value);
    }

    let mut arguments = SimulationArguments::new(EngineKind::Sdtrimsp.name(), settings);
    let beam_args = &mut arguments.beam_args;
    beam_args.kinetic_energy_mode =
        CASE_E0.decode(table.take("case_e0").as_deref(), "kinetic_energy_mode", &mut assumed);
    beam_args.angle_mode =
        CASE_ALPHA.decode(table.take("case_alpha").as_deref(), "angle_mode", &mut assumed);
    let sweeping = beam_args.kinetic_energy_mode == KineticEnergy::Sweep
        || beam_args.angle_mode == Angle::Sweep;
    let number_calc = parse_int(table.take("number_calc").as_deref());
    let number_calc = if sweeping {
        number_calc.or_assumed("sweep", DEFAULT_NUMBER_CALC, &mut assumed)
    } else {
        number_calc.unwrap_or(DEFAULT_NUMBER_CALC)
    };
    beam_args
        .optional
        .insert("sweep".to_string(), ArgValue::Int(number_calc));

    let iq0 = parse_int(table.take("iq0").as_deref()).or_assumed(
        "composition_profile",
        0,
        &mut assumed,
    );
    let target_args = &mut arguments.target_args;
    target_args.segments =
        parse_count(table.take("nqx").as_deref()).or_assumed("segments", DEFAULT_NQX, &mut assumed);
    target_args.thickness = parse_float(table.take("ttarget").as_deref()).or_assumed(
        "thickness",
        DEFAULT_TTARGET,
        &mut assumed,
    );
    target_args.global_density = global_density;

    let symbols = match table.take("symbol") {
        Some(raw) => split_list(&raw),
        None => {
            assumed.assumed("symbol");
            Vec::new()
        }
    };
    let loss_table = inel0(version);
    let loss_models = code_list(table.take("inel0"), loss_table, "inelastic_loss_model", &mut assumed);
    let qubeam = float_list(table.take("qubeam"), "abundance", 0.0, &mut assumed);
    let qu = float_list(table.take("qu"), "abundance", 0.0, &mut assumed);
    let max_atomic_fractions =
        float_list(table.take("qumax"), "max_atomic_fraction", DEFAULT_QUMAX, &mut assumed);
    let energies = float_list(table.take("e0"), "energy", DEFAULT_E0, &mut assumed);
    let angles = float_list(table.take("alpha0"), "angle", DEFAULT_ALPHA0, &mut assumed);
    let ncp = parse_int(table.take("ncp").as_deref()).unwrap_or(-1);
    let overrides = [
        (PhysicalField::SurfaceBindingEnergy, "e_surfb"),
        (PhysicalField::DisplacementEnergy, "e_displ"),
        (PhysicalField::AtomicDensity, "dns0"),
        (PhysicalField::AtomicMass, "a_mass"),
    ]
    .into_iter()
    .map(|(field, key)| (field, override_list(table.take(key))))
    .collect();

    let consistent = usize::try_from(ncp).is_ok_and(|ncp| ncp == symbols.len())
        && symbols.len() == qubeam.len()
        && qubeam.len() == qu.len();
    if !consistent {
        return Err(BcaError::input_validation(
            "INPUT.LIST_LENGTH",
            format!(
                "Length of lists \"symbol({})\", \"qubeam({})\", \"qu({})\" and \"ncp={}\" are different.",
                symbols.len(),
                qubeam.len(),
                qu.len(),
                ncp
            ),
        ));
    }

    let lists = ComponentLists {
        symbols,
        max_atomic_fractions,
        energies,
        angles,
        loss_models,
        overrides,
        default_loss_model: loss_table.default_variant(),
    };
    let mut builder = RowBuilder {
        lists: &lists,
        library,
        index: RunningIndex::new(),
        assumed: DefaultAssumed::new(),
        warnings: Vec::new(),
    };
    arguments.beam_rows = builder.rows(RowSide::Beam, &qubeam);
    arguments.target_rows = builder.rows(RowSide::Target, &qu);
    assumed.merge(builder.assumed);
    let mut warnings = builder.warnings;

    if iq0 < 0 {
        match layer_source {
            Some(layer_source) => {
                let mask: Vec<bool> = qu.iter().map(|abundance| *abundance != 0.0).collect();
                let parsed = parse_layers(
                    layer_source,
                    lists.symbols.len(),
                    &mask,
                    arguments.target_args.segments,
                    arguments.target_args.thickness,
                );
                warnings.extend(parsed.warnings);
                arguments.structure = parsed.layers;
            }
            None => {
                warn!("{NO_LAYER_FILE}");
                warnings.push(NO_LAYER_FILE.to_string());
            }
        }
    }
    if arguments.structure.is_empty() {
        arguments.structure.push(single_layer(&arguments));
    }

    arguments.additional = table.remaining_lines();
    info!(
        beam_rows = arguments.beam_rows.len(),
        target_rows = arguments.target_rows.len(),
        layers = arguments.structure.len(),
        assumed = assumed.len(),
        warnings = warnings.len(),
        "decoded SDTrimSP input"
    );
    Ok(DecodedSimulation {
        arguments,
        assumed,
        warnings,
    })
}

/// `True, <density>` enables the global density; anything else leaves it off.
fn parse_global_density(raw: &str) -> Option<f64> {
    let (flag, density) = raw.split_once(',')?;
    if !flag.trim().eq_ignore_ascii_case("true") {
        return None;
    }
    density.trim().parse().ok()
}

fn float_list(
    raw: Option<String>,
    field: &str,
    default: f64,
    assumed: &mut DefaultAssumed,
) -> Vec<f64> {
    let Some(raw) = raw else {
        assumed.assumed(field);
        return Vec::new();
    };
    split_list(&raw)
        .iter()
        .map(|item| parse_float(Some(item.as_str())).or_assumed(field, default, assumed))
        .collect()
}

fn code_list<E: Copy + PartialEq>(
    raw: Option<String>,
    table: CodeTable<E>,
    field: &str,
    assumed: &mut DefaultAssumed,
) -> Vec<E> {
    let Some(raw) = raw else {
        assumed.assumed(field);
        return Vec::new();
    };
    split_list(&raw)
        .iter()
        .map(|item| table.decode(Some(item.as_str()), field, assumed))
        .collect()
}

/// Element overrides; unreadable entries count as not overridden.
fn override_list(raw: Option<String>) -> Vec<f64> {
    raw.map(|raw| {
        split_list(&raw)
            .iter()
            .map(|item| parse_float(Some(item.as_str())).unwrap_or(UNSET_OVERRIDE))
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::decode_input;
    use crate::engines::NO_LAYER_FILE;
    use crate::engines::sdtrimsp::SdtrimspVersion;
    use crate::model::{
        ElementLibrary, InelasticLossModel, KineticEnergy, Mode, PhysicalField,
        SurfaceBindingModel,
    };

    const INPUT: &str = "\
Ar on W
&TRI_INP
text = \"--- elements ---\"
    ncp = 2
    symbol = \"W\", \"Ar\"
    !globaldensity = True, 0.063
    inel0 = 3, 1
    e_surfb = 9.5, -1.0

text = \"--- general ---\"
    idrel = 0
    flc = 2.0
    nh = 5000
    idout = 50
    nr_pproj = 10
    ipot = 3
    iintegral = 2
    isbv = 5

text = \"--- beam ---\"
    qubeam = 0.0, 1.0
    case_e0 = 5
    e0 = 0.0, 250.0
    case_alpha = 0
    alpha0 = 0.0, 60.0
    number_calc = 12

text = \"--- target ---\"
    qu = 1.0, 0.0
    qumax = 1.0, 1.0
    ttarget = 500.0
    nqx = 50
    iq0 = 0

text = \"--- output options ---\"
    lparticle_p = .true.
    ioutput_part(2) = 50000
    lparticle_r = .false.
    lmatrices = .false.

text = \"--- extra ---\"
    tableinp = \"/opt/sdtrimsp/tables\"
    ienergy_distr = .true.
/
";

    fn decode(source: &str, layer: Option<&str>) -> super::DecodedSimulation {
        decode_input(source, layer, &ElementLibrary::sdtrimsp(), SdtrimspVersion::V6_01)
            .expect("input should decode")
    }

    #[test]
    fn decodes_settings_rows_and_extras() {
        let decoded = decode(INPUT, None);
        let arguments = &decoded.arguments;

        assert_eq!(arguments.title(), "Ar on W");
        assert_eq!(arguments.settings.mode, Mode::Dynamic);
        assert_eq!(arguments.settings.histories, Some(5000));
        assert_eq!(
            arguments.settings.surface_binding_model,
            Some(SurfaceBindingModel::SolidGas)
        );
        assert_eq!(arguments.beam_args.kinetic_energy_mode, KineticEnergy::Sweep);
        assert_eq!(arguments.target_args.global_density, Some(0.063));
        assert_eq!(arguments.target_args.segments, 50);

        assert_eq!(arguments.beam_rows.len(), 1);
        assert_eq!(arguments.beam_rows[0].symbol, "Ar");
        assert_eq!(arguments.beam_rows[0].index, 1);
        assert_eq!(arguments.beam_rows[0].energy, 250.0);
        assert_eq!(
            arguments.beam_rows[0].inelastic_loss_model,
            Some(InelasticLossModel::LindhardScharff)
        );
        assert_eq!(arguments.target_rows[0].symbol, "W");
        assert_eq!(arguments.target_rows[0].index, 2);
        assert!(arguments.target_rows[0].element.modified);
        assert_eq!(
            arguments.target_rows[0]
                .element
                .value(PhysicalField::SurfaceBindingEnergy),
            Some(9.5)
        );
        assert!(!arguments.beam_rows[0].element.modified);

        assert_eq!(arguments.additional, vec!["ienergy_distr = .true."]);
        assert_eq!(arguments.structure.len(), 1);
        assert_eq!(arguments.structure[0].abundances, vec![1.0]);
        assert!(decoded.assumed.is_empty(), "{:?}", decoded.assumed);
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn missing_or_malformed_fluence_is_assumed() {
        let decoded = decode(INPUT, None);
        assert_eq!(decoded.arguments.settings.fluence, 2.0);
        assert!(!decoded.assumed.contains("fluence"));

        let decoded = decode(&INPUT.replace("    flc = 2.0\n", ""), None);
        assert_eq!(decoded.arguments.settings.fluence, 1.0);
        assert_eq!(decoded.assumed.fields(), ["fluence"]);

        let decoded = decode(&INPUT.replace("flc = 2.0", "flc = many"), None);
        assert_eq!(decoded.arguments.settings.fluence, 1.0);
        assert_eq!(decoded.assumed.fields(), ["fluence"]);
    }

    #[test]
    fn unknown_codes_fall_back_to_defaults() {
        let source = INPUT.replace("ipot = 3", "ipot = 42").replace("case_alpha = 0", "case_alpha = 9");
        let decoded = decode(&source, None);

        assert!(decoded.assumed.contains("interaction_potential"));
        assert!(decoded.assumed.contains("angle_mode"));
    }

    #[test]
    fn unknown_symbols_keep_an_empty_element() {
        let source = INPUT.replace("\"W\", \"Ar\"", "\"Xx\", \"Ar\"");
        let decoded = decode(&source, None);

        assert_eq!(decoded.warnings, vec!["Element \"Xx\" unknown, left empty"]);
        assert!(decoded.arguments.target_rows[0].element.is_empty());
        assert_eq!(decoded.arguments.target_rows[0].symbol, "");
        assert_eq!(decoded.arguments.beam_rows[0].symbol, "Ar");
    }

    #[test]
    fn mismatched_lists_are_a_hard_error() {
        let source = INPUT.replace("qu = 1.0, 0.0", "qu = 1.0");
        let error = decode_input(&source, None, &ElementLibrary::sdtrimsp(), SdtrimspVersion::V6_01)
            .expect_err("lists should not match");

        assert_eq!(error.placeholder(), "INPUT.LIST_LENGTH");
        assert_eq!(
            error.to_string(),
            "Length of lists \"symbol(2)\", \"qubeam(2)\", \"qu(1)\" and \"ncp=2\" are different."
        );
    }

    #[test]
    fn layered_input_without_layer_file_synthesizes_one_layer() {
        let source = INPUT.replace("iq0 = 0", "iq0 = -1");
        let decoded = decode(&source, None);

        assert_eq!(decoded.warnings, vec![NO_LAYER_FILE]);
        assert_eq!(decoded.arguments.structure.len(), 1);
        assert_eq!(decoded.arguments.structure[0].name, "Layer");
        assert_eq!(decoded.arguments.structure[0].thickness, 500.0);
    }

    #[test]
    fn layered_input_reads_the_layer_file() {
        let source = INPUT.replace("iq0 = 0", "iq0 = -1");
        let layer = "\
number of    thick-    target composition 2...ncp    name of layer
layers       ness      qu_2
    10  5.00000E+00    0.00000E+00    Top
    40  1.00000E+01    0.00000E+00    Bulk
     0            0              0    end
";
        let decoded = decode(&source, Some(layer));

        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.arguments.structure.len(), 2);
        assert_eq!(decoded.arguments.structure[1].name, "Bulk");
        assert_eq!(decoded.arguments.structure[1].thickness, 400.0);
        assert_eq!(decoded.arguments.structure[1].abundances, vec![1.0]);
    }
}
