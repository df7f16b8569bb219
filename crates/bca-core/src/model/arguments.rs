use crate::domain::RunningIndex;
use crate::model::{ArgValue, ArgumentLookup, Compound, Element, Extras};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Declares a selection enum whose variants serialize by their upper-case name.
macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|variant| variant.as_str() == name)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

named_enum!(
    /// Whether the target composition evolves during the run.
    Mode {
        Static => "STATIC",
        Dynamic => "DYNAMIC",
        StaticNoRecoil => "STATIC_NO_RECOIL",
    }
);

named_enum!(
    KineticEnergy {
        Fixed => "FIXED",
        File => "FILE",
        Sweep => "SWEEP",
        MaxwellianVelocityDistribution => "MAXWELLIAN_VELOCITY_DISTRIBUTION",
        MaxwellianEnergyDistribution => "MAXWELLIAN_ENERGY_DISTRIBUTION",
        FileEnergyAngle => "FILE_ENERGY_ANGLE",
        LinearRamp => "LINEAR_RAMP",
    }
);

named_enum!(
    Angle {
        Fixed => "FIXED",
        File => "FILE",
        Sweep => "SWEEP",
        RandomDistribution => "RANDOM_DISTRIBUTION",
        CosDistribution1 => "COS_DISTRIBUTION_1",
        CosDistribution2 => "COS_DISTRIBUTION_2",
        FileEnergyAngle => "FILE_ENERGY_ANGLE",
        Gaussian2d => "GAUSSIAN_2D",
        Cos2d => "COS_2D",
        Parabolic1d => "PARABOLIC_1D",
    }
);

named_enum!(
    InelasticLossModel {
        LindhardScharff => "LINDHARD_SCHARFF",
        OenRobinson => "OEN_ROBINSON",
        LindhardScharffAndOenRobinson => "LINDHARD_SCHARFF_AND_OEN_ROBINSON",
        Hydrogen => "HYDROGEN",
        Helium => "HELIUM",
        Ziegler => "ZIEGLER",
        LindhardScharffAndZiegler => "LINDHARD_SCHARFF_AND_ZIEGLER",
    }
);

named_enum!(
    InteractionPotential {
        Krc => "KRC",
        Moliere => "MOLIERE",
        Zbl => "ZBL",
        NakagawaYamamura => "NAKAGAWA_YAMAMURA",
        SiSi => "SI_SI",
        Power => "POWER",
    }
);

named_enum!(
    IntegrationMethod {
        Magic => "MAGIC",
        GaussMehler => "GAUSS_MEHLER",
        GaussLegendre => "GAUSS_LEGENDRE",
    }
);

named_enum!(
    SurfaceBindingModel {
        ElementSpecific => "ELEMENT_SPECIFIC",
        Average => "AVERAGE",
        ElementPairs => "ELEMENT_PAIRS",
        SolidSolid => "SOLID_SOLID",
        SolidGas => "SOLID_GAS",
        File => "FILE",
        Electronegativity => "ELECTRONEGATIVITY",
        Compounds => "COMPOUNDS",
        Table => "TABLE",
    }
);

/// Side of the configuration a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowSide {
    Beam,
    Target,
}

impl RowSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beam => "beam",
            Self::Target => "target",
        }
    }
}

/// One beam or target species.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowArguments {
    pub index: usize,
    pub symbol: String,
    pub element: Element,
    pub abundance: f64,
    pub max_atomic_fraction: f64,
    pub energy: f64,
    pub angle: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inelastic_loss_model: Option<InelasticLossModel>,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub optional: Extras,
}

impl RowArguments {
    pub fn new(index: usize, element: Element) -> Self {
        Self {
            index,
            symbol: element.symbol.clone(),
            element,
            abundance: 1.0,
            max_atomic_fraction: 1.0,
            energy: 0.0,
            angle: 0.0,
            inelastic_loss_model: None,
            optional: Extras::new(),
        }
    }

    pub fn with_abundance(mut self, abundance: f64) -> Self {
        self.abundance = abundance;
        self
    }

    pub fn with_beam(mut self, energy: f64, angle: f64) -> Self {
        self.energy = energy;
        self.angle = angle;
        self
    }
}

impl ArgumentLookup for RowArguments {
    fn lookup(&self, name: &str) -> Option<ArgValue> {
        match name {
            "index" => Some(self.index.into()),
            "symbol" => Some(self.symbol.as_str().into()),
            "abundance" => Some(self.abundance.into()),
            "max_atomic_fraction" => Some(self.max_atomic_fraction.into()),
            "energy" => Some(self.energy.into()),
            "angle" => Some(self.angle.into()),
            "inelastic_loss_model" => self
                .inelastic_loss_model
                .map(|model| model.as_str().into()),
            _ => self.optional.get(name).cloned(),
        }
    }
}

/// One depth layer of the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureArguments {
    pub name: String,
    pub segments: u32,
    pub thickness: f64,
    /// One entry per target row with nonzero presence.
    pub abundances: Vec<f64>,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub optional: Extras,
}

impl StructureArguments {
    pub fn new(name: impl Into<String>, segments: u32, thickness: f64, abundances: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            segments,
            thickness,
            abundances,
            optional: Extras::new(),
        }
    }
}

impl ArgumentLookup for StructureArguments {
    fn lookup(&self, name: &str) -> Option<ArgValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "segments" => Some(i64::from(self.segments).into()),
            "thickness" => Some(self.thickness.into()),
            _ => self.optional.get(name).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralBeamArguments {
    pub kinetic_energy_mode: KineticEnergy,
    pub angle_mode: Angle,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub optional: Extras,
}

impl Default for GeneralBeamArguments {
    fn default() -> Self {
        Self {
            kinetic_energy_mode: KineticEnergy::Fixed,
            angle_mode: Angle::Fixed,
            optional: Extras::new(),
        }
    }
}

impl ArgumentLookup for GeneralBeamArguments {
    fn lookup(&self, name: &str) -> Option<ArgValue> {
        match name {
            "kinetic_energy_mode" => Some(self.kinetic_energy_mode.as_str().into()),
            "angle_mode" => Some(self.angle_mode.as_str().into()),
            _ => self.optional.get(name).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralTargetArguments {
    pub thickness: f64,
    pub segments: u32,
    /// Atomic density applied to the whole target; `None` uses per-element densities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_density: Option<f64>,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub optional: Extras,
}

impl Default for GeneralTargetArguments {
    fn default() -> Self {
        Self {
            thickness: 100.0,
            segments: 10,
            global_density: None,
            optional: Extras::new(),
        }
    }
}

impl ArgumentLookup for GeneralTargetArguments {
    fn lookup(&self, name: &str) -> Option<ArgValue> {
        match name {
            "thickness" => Some(self.thickness.into()),
            "segments" => Some(i64::from(self.segments).into()),
            "global_density" => self.global_density.map(ArgValue::from),
            _ => self.optional.get(name).cloned(),
        }
    }
}

/// Simulation-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralArguments {
    pub title: String,
    pub comment: String,
    pub mode: Mode,
    pub fluence: f64,
    pub threads: i64,
    pub compounds: Vec<Compound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histories: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projectiles: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_elements: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_potential: Option<InteractionPotential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_method: Option<IntegrationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_binding_model: Option<SurfaceBindingModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inelastic_loss_model: Option<InelasticLossModel>,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub optional: Extras,
}

impl GeneralArguments {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            comment: String::new(),
            mode: Mode::Static,
            fluence: 1.0,
            threads: 0,
            compounds: Vec::new(),
            histories: None,
            projectiles: None,
            precision: None,
            group_elements: None,
            interaction_potential: None,
            integration_method: None,
            surface_binding_model: None,
            inelastic_loss_model: None,
            optional: Extras::new(),
        }
    }
}

impl ArgumentLookup for GeneralArguments {
    fn lookup(&self, name: &str) -> Option<ArgValue> {
        match name {
            "title" => Some(self.title.as_str().into()),
            "comment" => Some(self.comment.as_str().into()),
            "mode" => Some(self.mode.as_str().into()),
            "fluence" => Some(self.fluence.into()),
            "threads" => Some(self.threads.into()),
            "histories" => self.histories.map(ArgValue::from),
            "projectiles" => self.projectiles.map(ArgValue::from),
            "precision" => self.precision.map(ArgValue::from),
            "group_elements" => self.group_elements.map(ArgValue::from),
            "interaction_potential" => self
                .interaction_potential
                .map(|value| value.as_str().into()),
            "integration_method" => self.integration_method.map(|value| value.as_str().into()),
            "surface_binding_model" => self
                .surface_binding_model
                .map(|value| value.as_str().into()),
            "inelastic_loss_model" => self
                .inelastic_loss_model
                .map(|value| value.as_str().into()),
            _ => self.optional.get(name).cloned(),
        }
    }
}

/// Complete configuration of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationArguments {
    /// Engine display name the configuration was made for.
    pub simulation: String,
    pub beam_args: GeneralBeamArguments,
    pub beam_rows: Vec<RowArguments>,
    pub target_args: GeneralTargetArguments,
    pub target_rows: Vec<RowArguments>,
    pub structure: Vec<StructureArguments>,
    pub settings: GeneralArguments,
    /// Raw directives passed through to the engine file.
    pub additional: Vec<String>,
    pub optional: Extras,
}

impl SimulationArguments {
    pub fn new(simulation: impl Into<String>, settings: GeneralArguments) -> Self {
        Self {
            simulation: simulation.into(),
            beam_args: GeneralBeamArguments::default(),
            beam_rows: Vec::new(),
            target_args: GeneralTargetArguments::default(),
            target_rows: Vec::new(),
            structure: Vec::new(),
            settings,
            additional: Vec::new(),
            optional: Extras::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.settings.title
    }

    /// Beam and target rows tagged with their side, ordered by index.
    pub fn rows_by_index(&self) -> Vec<(RowSide, &RowArguments)> {
        let mut rows: Vec<(RowSide, &RowArguments)> = self
            .beam_rows
            .iter()
            .map(|row| (RowSide::Beam, row))
            .chain(self.target_rows.iter().map(|row| (RowSide::Target, row)))
            .collect();
        rows.sort_by_key(|(_, row)| row.index);
        rows
    }

    /// Renumbers all rows `1..=N` keeping their relative index order.
    pub fn reindex_rows(&mut self) {
        let mut order: Vec<(usize, RowSide, usize)> = self
            .beam_rows
            .iter()
            .enumerate()
            .map(|(position, row)| (row.index, RowSide::Beam, position))
            .chain(
                self.target_rows
                    .iter()
                    .enumerate()
                    .map(|(position, row)| (row.index, RowSide::Target, position)),
            )
            .collect();
        order.sort_by_key(|(index, _, _)| *index);

        let mut running = RunningIndex::new();
        for (_, side, position) in order {
            let row = match side {
                RowSide::Beam => &mut self.beam_rows[position],
                RowSide::Target => &mut self.target_rows[position],
            };
            row.index = running.next_index();
        }
        self.beam_rows.sort_by_key(|row| row.index);
        self.target_rows.sort_by_key(|row| row.index);
    }

    /// True if row indices across both sides are exactly `1..=N`.
    pub fn has_contiguous_indices(&self) -> bool {
        let mut indices: Vec<usize> = self
            .beam_rows
            .iter()
            .chain(&self.target_rows)
            .map(|row| row.index)
            .collect();
        indices.sort_unstable();
        indices
            .iter()
            .enumerate()
            .all(|(position, index)| *index == position + 1)
    }

    /// Elements of all rows, beam rows first.
    pub fn elements(&self) -> Vec<Element> {
        self.beam_rows
            .iter()
            .chain(&self.target_rows)
            .map(|row| row.element.clone())
            .collect()
    }
}

impl ArgumentLookup for SimulationArguments {
    fn lookup(&self, name: &str) -> Option<ArgValue> {
        match name {
            "simulation" => return Some(self.simulation.as_str().into()),
            "title" => return Some(self.settings.title.as_str().into()),
            _ => {}
        }

        self.beam_args
            .lookup(name)
            .or_else(|| self.beam_rows.iter().find_map(|row| row.lookup(name)))
            .or_else(|| self.target_args.lookup(name))
            .or_else(|| self.target_rows.iter().find_map(|row| row.lookup(name)))
            .or_else(|| self.structure.iter().find_map(|layer| layer.lookup(name)))
            .or_else(|| self.settings.lookup(name))
            .or_else(|| self.optional.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Angle, GeneralArguments, InelasticLossModel, KineticEnergy, Mode, RowArguments,
        SimulationArguments, StructureArguments,
    };
    use crate::model::{ArgValue, ArgumentLookup, Element};

    fn row(index: usize, symbol: &str) -> RowArguments {
        let mut element = Element::empty();
        element.symbol = symbol.to_string();
        RowArguments::new(index, element)
    }

    #[test]
    fn enum_names_round_trip() {
        for variant in Angle::ALL {
            assert_eq!(Angle::from_name(variant.as_str()), Some(*variant));
        }
        assert_eq!(Angle::Gaussian2d.as_str(), "GAUSSIAN_2D");
        assert_eq!(
            InelasticLossModel::from_name("LINDHARD_SCHARFF_AND_OEN_ROBINSON"),
            Some(InelasticLossModel::LindhardScharffAndOenRobinson)
        );
        assert_eq!(KineticEnergy::from_name("fixed"), None);
        assert_eq!(Mode::StaticNoRecoil.to_string(), "STATIC_NO_RECOIL");
    }

    #[test]
    fn enums_serialize_as_names() {
        let rendered = serde_json::to_string(&Angle::CosDistribution1).expect("enum serializes");
        assert_eq!(rendered, "\"COS_DISTRIBUTION_1\"");
    }

    #[test]
    fn chained_lookup_searches_named_fields_then_nested_structs_then_extras() {
        let mut settings = GeneralArguments::new("Ar on W");
        settings.histories = Some(5000);
        settings
            .optional
            .insert("log_frequency".to_string(), ArgValue::Int(50));
        let mut arguments = SimulationArguments::new("TRIDYN", settings);
        arguments.beam_rows.push(row(1, "Ar").with_beam(250.0, 60.0));
        arguments
            .beam_args
            .optional
            .insert("sweep".to_string(), ArgValue::Int(12));
        arguments
            .optional
            .insert("custom".to_string(), ArgValue::from("kept"));

        assert_eq!(arguments.lookup_text("title").as_deref(), Some("Ar on W"));
        assert_eq!(arguments.lookup_i64("sweep"), Some(12));
        assert_eq!(arguments.lookup_f64("energy"), Some(250.0));
        assert_eq!(arguments.lookup_i64("histories"), Some(5000));
        assert_eq!(arguments.lookup_i64("log_frequency"), Some(50));
        assert_eq!(arguments.lookup_text("custom").as_deref(), Some("kept"));
        assert_eq!(arguments.lookup("precision"), None);
    }

    #[test]
    fn reindexing_produces_contiguous_indices_in_original_order() {
        let mut arguments = SimulationArguments::new("SDTrimSP", GeneralArguments::new("t"));
        arguments.beam_rows.push(row(7, "Ar"));
        arguments.target_rows.push(row(3, "W"));
        arguments.target_rows.push(row(999, "O"));
        assert!(!arguments.has_contiguous_indices());

        arguments.reindex_rows();

        assert!(arguments.has_contiguous_indices());
        assert_eq!(arguments.target_rows[0].symbol, "W");
        assert_eq!(arguments.target_rows[0].index, 1);
        assert_eq!(arguments.beam_rows[0].index, 2);
        assert_eq!(arguments.target_rows[1].index, 3);
    }

    #[test]
    fn structure_and_rows_skip_empty_extras_when_serialized() {
        let layer = StructureArguments::new("Layer", 10, 100.0, vec![1.0]);
        let json = serde_json::to_value(&layer).expect("layer serializes");
        assert!(json.get("optional").is_none());

        let json = serde_json::to_value(row(1, "H")).expect("row serializes");
        assert!(json.get("optional").is_none());
        assert!(json.get("inelastic_loss_model").is_none());
    }
}
