use bca_core::engines::sdtrimsp::SdtrimspVersion;
use bca_core::engines::tridyn::TridynVersion;
use bca_core::engines::{
    DecodeOutcome, DecodedSimulation, EngineVersion, GroupedRow, MALFORMED_LAYER, decode, encode,
    group_rows,
};
use bca_core::model::{
    ElementLibrary, GeneralArguments, Mode, PhysicalField, RowArguments, SimulationArguments,
    StructureArguments,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SDTRIMSP: EngineVersion = EngineVersion::Sdtrimsp(SdtrimspVersion::V6_09);
const TRIDYN: EngineVersion = EngineVersion::Tridyn(TridynVersion::V2022);

fn row(library: &ElementLibrary, index: usize, symbol: &str) -> RowArguments {
    let element = library
        .element_from_symbol(symbol)
        .expect("element should exist");
    RowArguments::new(index, element)
}

fn mixed_beam(library: ElementLibrary, engine: &str) -> SimulationArguments {
    let mut arguments = SimulationArguments::new(engine, GeneralArguments::new("mixed beam"));
    arguments.settings.mode = Mode::Dynamic;
    arguments.settings.fluence = 3.5;
    for (index, (symbol, abundance)) in [("He", 0.333), ("Ne", 0.333), ("Ar", 0.334)]
        .into_iter()
        .enumerate()
    {
        arguments.beam_rows.push(
            row(&library, index + 1, symbol)
                .with_abundance(abundance)
                .with_beam(1000.0, 0.0),
        );
    }
    arguments.target_rows.push(row(&library, 4, "Si"));
    arguments
        .structure
        .push(StructureArguments::new("Layer", 10, 100.0, vec![1.0]));
    arguments
}

fn layered(library: ElementLibrary, engine: &str) -> SimulationArguments {
    let mut arguments = SimulationArguments::new(engine, GeneralArguments::new("layered"));
    arguments
        .beam_rows
        .push(row(&library, 1, "Ar").with_beam(2000.0, 45.0));
    arguments
        .target_rows
        .push(row(&library, 2, "Si").with_abundance(0.5));
    arguments
        .target_rows
        .push(row(&library, 3, "O").with_abundance(0.3));
    arguments
        .target_rows
        .push(row(&library, 4, "C").with_abundance(0.2));
    arguments
        .structure
        .push(StructureArguments::new("Oxide", 10, 100.0, vec![0.4, 0.6, 0.0]));
    arguments
        .structure
        .push(StructureArguments::new("Bulk", 10, 100.0, vec![0.8, 0.0, 0.2]));
    arguments
}

fn write_and_decode(arguments: &SimulationArguments, version: EngineVersion) -> DecodedSimulation {
    let temp = TempDir::new().expect("tempdir should be created");
    encode(arguments, Path::new("/opt/engine"), version)
        .write_to(temp.path())
        .expect("files should be written");
    decode(temp.path(), version)
        .expect("decode should succeed")
        .decoded()
        .expect("input file should be found")
}

fn line<'a>(input: &'a str, prefix: &str) -> &'a str {
    input
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("line starting with {prefix} should exist"))
}

#[test]
fn beam_abundances_are_written_unchanged_when_they_sum_to_one() {
    let arguments = mixed_beam(ElementLibrary::sdtrimsp(), "SDTrimSP");
    let files = encode(&arguments, Path::new("/opt/engine"), SDTRIMSP);

    assert!(line(&files.input, "qubeam =").ends_with("0.333, 0.333, 0.334"));
}

#[test]
fn sdtrimsp_files_decode_back_into_the_configuration() {
    let arguments = mixed_beam(ElementLibrary::sdtrimsp(), "SDTrimSP");
    let decoded = write_and_decode(&arguments, SDTRIMSP);
    let restored = &decoded.arguments;

    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    assert_eq!(restored.title(), "mixed beam");
    assert_eq!(restored.settings.mode, Mode::Dynamic);
    assert_eq!(restored.settings.fluence, 3.5);
    let beam: Vec<(&str, f64)> = restored
        .beam_rows
        .iter()
        .map(|row| (row.symbol.as_str(), row.abundance))
        .collect();
    assert_eq!(beam, vec![("He", 0.333), ("Ne", 0.333), ("Ar", 0.334)]);
    assert_eq!(restored.target_rows[0].symbol, "Si");
    assert!(restored.has_contiguous_indices());
}

#[test]
fn tridyn_files_decode_back_into_the_configuration() {
    let arguments = mixed_beam(ElementLibrary::tridyn(), "TRIDYN");
    let decoded = write_and_decode(&arguments, TRIDYN);
    let restored = &decoded.arguments;

    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    assert_eq!(restored.title(), "mixed beam");
    assert_eq!(restored.settings.mode, Mode::Dynamic);
    assert_eq!(restored.settings.fluence, 3.5);
    assert_eq!(restored.beam_rows.len(), 3);
    assert_eq!(restored.beam_rows[2].abundance, 0.334);
    assert_eq!(restored.target_rows[0].symbol, "Si");
    assert!(restored.has_contiguous_indices());
}

#[test]
fn missing_fluence_is_assumed() {
    let temp = TempDir::new().expect("tempdir should be created");
    let files = encode(
        &mixed_beam(ElementLibrary::sdtrimsp(), "SDTrimSP"),
        Path::new("/opt/engine"),
        SDTRIMSP,
    );
    let input: Vec<&str> = files
        .input
        .lines()
        .filter(|line| !line.trim_start().starts_with("flc ="))
        .collect();
    fs::write(temp.path().join("tri.inp"), input.join("\n")).expect("input should be written");

    let decoded = decode(temp.path(), SDTRIMSP)
        .expect("decode should succeed")
        .decoded()
        .expect("input file should be found");

    assert_eq!(decoded.arguments.settings.fluence, 1.0);
    assert!(decoded.assumed.contains("fluence"));
}

#[test]
fn a_short_layer_line_keeps_the_other_layer() {
    let temp = TempDir::new().expect("tempdir should be created");
    let files = encode(
        &layered(ElementLibrary::sdtrimsp(), "SDTrimSP"),
        Path::new("/opt/engine"),
        SDTRIMSP,
    );
    files.write_to(temp.path()).expect("files should be written");
    let layer = files.layer.expect("two layers need a layer file");
    let corrupted: Vec<String> = layer
        .lines()
        .map(|line| {
            if line.trim_end().ends_with("Bulk") {
                "    10  1.00000E+01  8.00000E-01".to_string()
            } else {
                line.to_string()
            }
        })
        .collect();
    fs::write(temp.path().join(&files.layer_name), corrupted.join("\n"))
        .expect("layer file should be written");

    let decoded = decode(temp.path(), SDTRIMSP)
        .expect("a malformed layer line is not a hard error")
        .decoded()
        .expect("input file should be found");

    assert_eq!(decoded.warnings, vec![MALFORMED_LAYER]);
    assert_eq!(decoded.arguments.structure.len(), 1);
    assert_eq!(decoded.arguments.structure[0].name, "Oxide");
}

#[test]
fn tridyn_layers_survive_the_round_trip() {
    let decoded = write_and_decode(&layered(ElementLibrary::tridyn(), "TRIDYN"), TRIDYN);
    let names: Vec<&str> = decoded
        .arguments
        .structure
        .iter()
        .map(|layer| layer.name.as_str())
        .collect();

    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    assert_eq!(names, vec!["Oxide", "Bulk"]);
    assert_eq!(decoded.arguments.structure[0].abundances, vec![0.4, 0.6, 0.0]);
    assert_eq!(decoded.arguments.structure[1].segments, 10);
}

#[test]
fn grouping_pairs_equal_symbols_and_appends_unmatched_beam_rows() {
    let library = ElementLibrary::sdtrimsp();
    let beam = vec![row(&library, 1, "H"), row(&library, 2, "Ar")];
    let target = vec![row(&library, 3, "H"), row(&library, 4, "W")];

    let grouped = group_rows(&beam, &target, true);

    assert_eq!(grouped.len(), 3);
    assert!(matches!(grouped[0], GroupedRow::Both { .. }));
    assert_eq!(grouped[0].primary().symbol, "H");
    assert!(matches!(grouped[1], GroupedRow::Target(row) if row.symbol == "W"));
    assert!(matches!(grouped[2], GroupedRow::Beam(row) if row.symbol == "Ar"));
}

#[test]
fn unknown_symbols_leave_an_empty_element_and_a_warning() {
    let temp = TempDir::new().expect("tempdir should be created");
    let files = encode(
        &mixed_beam(ElementLibrary::tridyn(), "TRIDYN"),
        Path::new("/opt/engine"),
        TRIDYN,
    );
    let input = files.input.replace("atda He Ne Ar Si", "atda He Xx Ar Si");
    fs::write(temp.path().join(&files.input_name), input).expect("input should be written");

    let decoded = decode(temp.path(), TRIDYN)
        .expect("decode should succeed")
        .decoded()
        .expect("input file should be found");

    assert_eq!(decoded.warnings, vec!["Element \"Xx\" unknown, left empty"]);
    assert!(decoded.arguments.beam_rows[1].element.is_empty());
    assert_eq!(decoded.arguments.beam_rows[2].symbol, "Ar");
    assert_eq!(decoded.arguments.target_rows[0].symbol, "Si");
}

#[test]
fn modified_elements_survive_both_engines() {
    for (library, engine, version) in [
        (ElementLibrary::sdtrimsp(), "SDTrimSP", SDTRIMSP),
        (ElementLibrary::tridyn(), "TRIDYN", TRIDYN),
    ] {
        let mut arguments = mixed_beam(library, engine);
        arguments.target_rows[0]
            .element
            .set_value(PhysicalField::DisplacementEnergy, Some(21.5));

        let decoded = write_and_decode(&arguments, version);
        let silicon = &decoded.arguments.target_rows[0].element;

        assert!(silicon.modified, "{engine}");
        assert_eq!(silicon.value(PhysicalField::DisplacementEnergy), Some(21.5));
        assert!(!decoded.arguments.beam_rows[0].element.modified, "{engine}");
    }
}

#[test]
fn folders_of_the_other_engine_are_not_applicable() {
    let temp = TempDir::new().expect("tempdir should be created");
    encode(
        &mixed_beam(ElementLibrary::tridyn(), "TRIDYN"),
        Path::new("/opt/engine"),
        TRIDYN,
    )
    .write_to(temp.path())
    .expect("files should be written");

    let outcome = decode(temp.path(), SDTRIMSP).expect("decode should succeed");
    assert_eq!(outcome, DecodeOutcome::NotApplicable);
}
