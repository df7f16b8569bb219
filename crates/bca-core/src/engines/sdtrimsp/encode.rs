use super::SdtrimspVersion;
use super::layer::uses_layer_file;
use super::model::{
    CASE_ALPHA, CASE_E0, DEFAULT_GROUP_ELEMENTS, DEFAULT_IDOUT, DEFAULT_NH, DEFAULT_NR_PPROJ,
    DEFAULT_NUMBER_CALC, IDREL, IINTEGRAL, IPOT, inel0, isbv,
};
use crate::common::numeric::normalize_abundances;
use crate::engines::{GroupedRow, expand_layer_abundances, group_rows};
use crate::model::{Angle, ArgumentLookup, KineticEnergy, PhysicalField, SimulationArguments};
use crate::parser::fortran_bool;
use crate::serialization::{float_token, normalize_text_artifact};
use std::path::Path;
use tracing::{debug, warn};

const OVERRIDES: [(PhysicalField, &str); 4] = [
    (PhysicalField::SurfaceBindingEnergy, "e_surfb"),
    (PhysicalField::DisplacementEnergy, "e_displ"),
    (PhysicalField::AtomicDensity, "dns0"),
    (PhysicalField::AtomicMass, "a_mass"),
];

/// One `text = "--- name ---"` block of the namelist.
struct Section {
    name: &'static str,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, key: &str, value: impl ToString) {
        self.entries.push((key.to_string(), value.to_string()));
    }
}

pub(super) fn render_input(
    arguments: &SimulationArguments,
    engine_folder: &Path,
    version: SdtrimspVersion,
) -> String {
    let settings = &arguments.settings;
    let components = components(arguments);
    let ncp = components.len();
    if ncp > version.max_components() {
        warn!(
            components = ncp,
            max = version.max_components(),
            "SDTrimSP {version} supports fewer components than configured"
        );
    }

    let nh = settings.histories.unwrap_or(DEFAULT_NH);
    let nr_pproj = settings.projectiles.unwrap_or(DEFAULT_NR_PPROJ);

    let mut sections = vec![
        elements_section(arguments, &components, version),
        Section::new("general"),
        beam_section(arguments, &components),
        target_section(arguments, &components),
        Section::new("output options"),
        Section::new("extra"),
    ];

    let general = &mut sections[1];
    general.push("idrel", IDREL.code(settings.mode));
    general.push("flc", float_token(settings.fluence));
    general.push("nh", nh);
    general.push(
        "idout",
        arguments
            .lookup_i64("histories_between_outputs")
            .unwrap_or(DEFAULT_IDOUT),
    );
    general.push("nr_pproj", nr_pproj);
    general.push(
        "ipot",
        settings
            .interaction_potential
            .map_or(IPOT.default_code(), |potential| IPOT.code(potential)),
    );
    general.push(
        "iintegral",
        settings
            .integration_method
            .map_or(IINTEGRAL.default_code(), |method| IINTEGRAL.code(method)),
    );
    let isbv_table = isbv(version);
    general.push(
        "isbv",
        settings
            .surface_binding_model
            .map_or(isbv_table.default_code(), |model| isbv_table.code(model)),
    );

    let output = &mut sections[4];
    let log_reflected = arguments.lookup_bool("log_reflected").unwrap_or(false);
    output.push("lparticle_p", fortran_bool(log_reflected));
    if log_reflected {
        output.push("ioutput_part(2)", nh * nr_pproj);
    }
    let log_sputtered = arguments.lookup_bool("log_sputtered").unwrap_or(false);
    output.push("lparticle_r", fortran_bool(log_sputtered));
    if log_sputtered {
        output.push("ioutput_part(5)", nh * nr_pproj * 100);
    }
    output.push(
        "lmatrices",
        fortran_bool(arguments.lookup_bool("log_matrix").unwrap_or(false)),
    );

    sections[5].push(
        "tableinp",
        format!("\"{}\"", engine_folder.join("tables").display()),
    );

    render(title_line(arguments), &sections, &arguments.additional)
}

/// Engine components in file order; species present on both sides share one by default.
pub(super) fn components(arguments: &SimulationArguments) -> Vec<GroupedRow<'_>> {
    let group_elements = arguments
        .settings
        .group_elements
        .unwrap_or(DEFAULT_GROUP_ELEMENTS);
    group_rows(&arguments.beam_rows, &arguments.target_rows, group_elements)
}

fn title_line(arguments: &SimulationArguments) -> &str {
    let title = arguments.title().trim();
    if title.is_empty() { "SDTrimSP" } else { title }
}

fn elements_section(
    arguments: &SimulationArguments,
    components: &[GroupedRow<'_>],
    version: SdtrimspVersion,
) -> Section {
    let mut section = Section::new("elements");
    section.push("ncp", components.len());
    section.push(
        "symbol",
        join(components.iter().map(|component| {
            format!("\"{}\"", component.primary().symbol)
        })),
    );
    section.push(
        "!globaldensity",
        match arguments.target_args.global_density {
            Some(density) => format!("True, {}", float_token(density)),
            None => "False, 0.0".to_string(),
        },
    );

    let table = inel0(version);
    let codes = match arguments.settings.inelastic_loss_model {
        Some(model) => vec![table.code(model); components.len()],
        None => components
            .iter()
            .map(|component| {
                component
                    .primary()
                    .inelastic_loss_model
                    .map_or(table.default_code(), |model| table.code(model))
            })
            .collect(),
    };
    section.push("inel0", join(codes));

    for (field, key) in OVERRIDES {
        let changed = components
            .iter()
            .any(|component| component.primary().element.differs(field));
        if changed {
            section.push(
                key,
                join(components.iter().map(|component| {
                    float_token(component.primary().element.value(field).unwrap_or_default())
                })),
            );
        }
    }
    section
}

fn beam_section(arguments: &SimulationArguments, components: &[GroupedRow<'_>]) -> Section {
    let mut section = Section::new("beam");
    let abundances: Vec<Option<f64>> = components
        .iter()
        .map(|component| component.beam().map(|row| row.abundance))
        .collect();
    section.push("qubeam", join(side_fractions(&abundances).into_iter().map(float_token)));

    let case_e0 = CASE_E0.code(arguments.beam_args.kinetic_energy_mode);
    section.push("case_e0", case_e0);
    section.push(
        "e0",
        join(components.iter().map(|component| {
            float_token(component.beam().map_or(0.0, |row| row.energy))
        })),
    );
    let case_alpha = CASE_ALPHA.code(arguments.beam_args.angle_mode);
    section.push("case_alpha", case_alpha);
    section.push(
        "alpha0",
        join(components.iter().map(|component| {
            float_token(component.beam().map_or(0.0, |row| row.angle))
        })),
    );

    if case_e0 == CASE_E0.code(KineticEnergy::Sweep) || case_alpha == CASE_ALPHA.code(Angle::Sweep)
    {
        section.push(
            "number_calc",
            arguments.lookup_i64("sweep").unwrap_or(DEFAULT_NUMBER_CALC),
        );
    }
    section
}

fn target_section(arguments: &SimulationArguments, components: &[GroupedRow<'_>]) -> Section {
    let mut section = Section::new("target");
    let mut abundances: Vec<Option<f64>> = components
        .iter()
        .map(|component| component.target().map(|row| row.abundance))
        .collect();

    // A single layer carries the target composition.
    let targets = abundances.iter().flatten().count();
    if !uses_layer_file(arguments)
        && let Some(layer) = arguments.structure.first()
        && layer.abundances.len() == targets
    {
        let mut layer_values = layer.abundances.iter().copied();
        for slot in abundances.iter_mut().filter(|slot| slot.is_some()) {
            *slot = layer_values.next();
        }
    }
    section.push("qu", join(side_fractions(&abundances).into_iter().map(float_token)));
    section.push(
        "qumax",
        join(
            components
                .iter()
                .map(|component| float_token(component.primary().max_atomic_fraction)),
        ),
    );
    section.push("ttarget", float_token(arguments.target_args.thickness));
    section.push("nqx", arguments.target_args.segments);
    section.push("iq0", if uses_layer_file(arguments) { -1 } else { 0 });
    section
}

/// Normalizes the present entries and leaves absent components at zero.
fn side_fractions(values: &[Option<f64>]) -> Vec<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let mask: Vec<bool> = values.iter().map(Option::is_some).collect();
    expand_layer_abundances(&normalize_abundances(&present), &mask)
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render(title: &str, sections: &[Section], additional: &[String]) -> String {
    let mut lines = vec![title.to_string(), "&TRI_INP".to_string()];
    for (position, section) in sections.iter().enumerate() {
        if position > 0 {
            lines.push(String::new());
        }
        lines.push(format!("text = \"--- {} ---\"", section.name));
        lines.extend(
            section
                .entries
                .iter()
                .map(|(key, value)| format!("    {key} = {value}")),
        );
    }

    for directive in additional.iter().map(|line| line.trim()) {
        if directive.is_empty() {
            continue;
        }
        let key = directive
            .split_once('=')
            .map(|(key, _)| key.trim())
            .unwrap_or_default();
        let generated = sections
            .iter()
            .flat_map(|section| &section.entries)
            .any(|(generated, _)| generated == key);
        if generated {
            debug!(directive, "dropping additional directive that duplicates a generated key");
            continue;
        }
        lines.push(format!("    {directive}"));
    }
    lines.push("/".to_string());
    normalize_text_artifact(&lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::render_input;
    use crate::engines::sdtrimsp::SdtrimspVersion;
    use crate::model::{
        ArgValue, ElementLibrary, GeneralArguments, KineticEnergy, PhysicalField, RowArguments,
        SimulationArguments, StructureArguments,
    };
    use std::path::Path;

    fn row(index: usize, symbol: &str) -> RowArguments {
        let element = ElementLibrary::sdtrimsp()
            .element_from_symbol(symbol)
            .expect("element should exist");
        RowArguments::new(index, element)
    }

    fn argon_on_tungsten() -> SimulationArguments {
        let mut arguments = SimulationArguments::new("SDTrimSP", GeneralArguments::new("Ar on W"));
        arguments.beam_rows.push(row(1, "Ar").with_beam(250.0, 60.0));
        arguments.target_rows.push(row(2, "W"));
        arguments
            .structure
            .push(StructureArguments::new("Layer", 200, 2000.0, vec![1.0]));
        arguments.target_args.thickness = 2000.0;
        arguments.target_args.segments = 200;
        arguments
    }

    fn line<'a>(input: &'a str, key: &str) -> &'a str {
        input
            .lines()
            .find(|line| line.trim_start().starts_with(&format!("{key} =")))
            .unwrap_or_else(|| panic!("line for {key} should exist"))
            .trim()
    }

    #[test]
    fn renders_the_namelist_layout() {
        let input = render_input(&argon_on_tungsten(), Path::new("/opt/sdtrimsp"), SdtrimspVersion::V6_01);
        let expected = "\
Ar on W
&TRI_INP
text = \"--- elements ---\"
    ncp = 2
    symbol = \"W\", \"Ar\"
    !globaldensity = False, 0.0
    inel0 = 3, 3

text = \"--- general ---\"
    idrel = 1
    flc = 1.0
    nh = 1000
    idout = 10
    nr_pproj = 100
    ipot = 1
    iintegral = 2
    isbv = 1

text = \"--- beam ---\"
    qubeam = 0.0, 1.0
    case_e0 = 0
    e0 = 0.0, 250.0
    case_alpha = 0
    alpha0 = 0.0, 60.0

text = \"--- target ---\"
    qu = 1.0, 0.0
    qumax = 1.0, 1.0
    ttarget = 2000.0
    nqx = 200
    iq0 = 0

text = \"--- output options ---\"
    lparticle_p = .false.
    lparticle_r = .false.
    lmatrices = .false.

text = \"--- extra ---\"
    tableinp = \"/opt/sdtrimsp/tables\"
/
";
        assert_eq!(input, expected);
    }

    #[test]
    fn grouped_species_share_one_component() {
        let mut arguments = argon_on_tungsten();
        arguments.beam_rows.push(row(3, "W").with_beam(100.0, 0.0));
        arguments.beam_rows[0].abundance = 0.75;
        arguments.beam_rows[1].abundance = 0.25;

        let input = render_input(&arguments, Path::new("/opt"), SdtrimspVersion::V6_01);

        assert_eq!(line(&input, "symbol"), "symbol = \"W\", \"Ar\"");
        assert_eq!(line(&input, "qubeam"), "qubeam = 0.25, 0.75");
        assert_eq!(line(&input, "e0"), "e0 = 100.0, 250.0");
    }

    #[test]
    fn only_modified_fields_are_overridden() {
        let mut arguments = argon_on_tungsten();
        arguments.target_rows[0]
            .element
            .set_value(PhysicalField::SurfaceBindingEnergy, Some(9.5));

        let input = render_input(&arguments, Path::new("/opt"), SdtrimspVersion::V6_01);

        assert!(line(&input, "e_surfb").starts_with("e_surfb = 9.5, "));
        assert!(!input.contains("e_displ"));
        assert!(!input.contains("dns0"));
    }

    #[test]
    fn sweep_output_and_additional_directives() {
        let mut arguments = argon_on_tungsten();
        arguments.beam_args.kinetic_energy_mode = KineticEnergy::Sweep;
        arguments
            .beam_args
            .optional
            .insert("sweep".to_string(), ArgValue::Int(12));
        arguments
            .settings
            .optional
            .insert("log_sputtered".to_string(), ArgValue::Bool(true));
        arguments.additional = vec![
            "nh = 5".to_string(),
            "ienergy_distr = .true.".to_string(),
        ];

        let input = render_input(&arguments, Path::new("/opt"), SdtrimspVersion::V6_09);

        assert_eq!(line(&input, "case_e0"), "case_e0 = 5");
        assert_eq!(line(&input, "number_calc"), "number_calc = 12");
        assert_eq!(line(&input, "ioutput_part(5)"), "ioutput_part(5) = 10000000");
        assert_eq!(line(&input, "isbv"), "isbv = 8");
        assert_eq!(line(&input, "inel0"), "inel0 = 7, 7");
        assert_eq!(line(&input, "nh"), "nh = 1000");
        assert!(input.ends_with("    ienergy_distr = .true.\n/\n"));
    }

    #[test]
    fn multiple_layers_switch_to_the_layer_file() {
        let mut arguments = argon_on_tungsten();
        arguments
            .structure
            .push(StructureArguments::new("Bulk", 100, 1000.0, vec![1.0]));

        let input = render_input(&arguments, Path::new("/opt"), SdtrimspVersion::V6_01);

        assert_eq!(line(&input, "iq0"), "iq0 = -1");
    }
}
