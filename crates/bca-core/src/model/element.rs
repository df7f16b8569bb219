use crate::common::ElementRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// Physical parameter of an element that a user may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhysicalField {
    AtomicMass,
    AtomicDensity,
    MassDensity,
    SurfaceBindingEnergy,
    DisplacementEnergy,
    CutoffEnergy,
    DissociationHeat,
    MeltEnthalpy,
    VaporizationEnergy,
    FormationEnthalpy,
}

impl PhysicalField {
    pub const ALL: [Self; 10] = [
        Self::AtomicMass,
        Self::AtomicDensity,
        Self::MassDensity,
        Self::SurfaceBindingEnergy,
        Self::DisplacementEnergy,
        Self::CutoffEnergy,
        Self::DissociationHeat,
        Self::MeltEnthalpy,
        Self::VaporizationEnergy,
        Self::FormationEnthalpy,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AtomicMass => "atomic_mass",
            Self::AtomicDensity => "atomic_density",
            Self::MassDensity => "mass_density",
            Self::SurfaceBindingEnergy => "surface_binding_energy",
            Self::DisplacementEnergy => "displacement_energy",
            Self::CutoffEnergy => "cutoff_energy",
            Self::DissociationHeat => "dissociation_heat",
            Self::MeltEnthalpy => "melt_enthalpy",
            Self::VaporizationEnergy => "vaporization_energy",
            Self::FormationEnthalpy => "formation_enthalpy",
        }
    }
}

/// Physical parameters of an element. Used both for the current values and for the
/// immutable baseline captured when the element was taken from a library.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementBaseline {
    pub atomic_mass: f64,
    pub atomic_density: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_binding_energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displacement_energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dissociation_heat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub melt_enthalpy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaporization_energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_enthalpy: Option<f64>,
}

impl ElementBaseline {
    pub fn value(&self, field: PhysicalField) -> Option<f64> {
        match field {
            PhysicalField::AtomicMass => Some(self.atomic_mass),
            PhysicalField::AtomicDensity => Some(self.atomic_density),
            PhysicalField::MassDensity => self.mass_density,
            PhysicalField::SurfaceBindingEnergy => self.surface_binding_energy,
            PhysicalField::DisplacementEnergy => self.displacement_energy,
            PhysicalField::CutoffEnergy => self.cutoff_energy,
            PhysicalField::DissociationHeat => self.dissociation_heat,
            PhysicalField::MeltEnthalpy => self.melt_enthalpy,
            PhysicalField::VaporizationEnergy => self.vaporization_energy,
            PhysicalField::FormationEnthalpy => self.formation_enthalpy,
        }
    }

    /// Mass and atomic density are mandatory; `None` resets them to zero.
    pub fn set_value(&mut self, field: PhysicalField, value: Option<f64>) {
        match field {
            PhysicalField::AtomicMass => self.atomic_mass = value.unwrap_or_default(),
            PhysicalField::AtomicDensity => self.atomic_density = value.unwrap_or_default(),
            PhysicalField::MassDensity => self.mass_density = value,
            PhysicalField::SurfaceBindingEnergy => self.surface_binding_energy = value,
            PhysicalField::DisplacementEnergy => self.displacement_energy = value,
            PhysicalField::CutoffEnergy => self.cutoff_energy = value,
            PhysicalField::DissociationHeat => self.dissociation_heat = value,
            PhysicalField::MeltEnthalpy => self.melt_enthalpy = value,
            PhysicalField::VaporizationEnergy => self.vaporization_energy = value,
            PhysicalField::FormationEnthalpy => self.formation_enthalpy = value,
        }
    }
}

/// Fields of an element that differ from its baseline, with their current values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementDelta {
    changes: Vec<(PhysicalField, Option<f64>)>,
}

impl ElementDelta {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn contains(&self, field: PhysicalField) -> bool {
        self.changes.iter().any(|(changed, _)| *changed == field)
    }

    pub fn get(&self, field: PhysicalField) -> Option<Option<f64>> {
        self.changes
            .iter()
            .find(|(changed, _)| *changed == field)
            .map(|(_, value)| *value)
    }

    pub fn changes(&self) -> &[(PhysicalField, Option<f64>)] {
        &self.changes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub symbol: String,
    pub name: IndexMap<String, String>,
    pub atomic_nr: u32,
    pub period: u32,
    pub group: u32,
    pub periodic_table_symbol: String,
    #[serde(flatten)]
    pub properties: ElementBaseline,
    pub modified: bool,
    pub original: ElementBaseline,
}

impl Element {
    /// Placeholder for a symbol no library knows about.
    pub fn empty() -> Self {
        let mut name = IndexMap::new();
        name.insert("en".to_string(), String::new());
        Self {
            symbol: String::new(),
            name,
            atomic_nr: 0,
            period: 0,
            group: 0,
            periodic_table_symbol: String::new(),
            properties: ElementBaseline::default(),
            modified: false,
            original: ElementBaseline::default(),
        }
    }

    pub(crate) fn from_record(record: &ElementRecord) -> Self {
        let mut name = IndexMap::new();
        name.insert("en".to_string(), record.name_en.to_string());
        name.insert("de".to_string(), record.name_de.to_string());
        let properties = ElementBaseline {
            atomic_mass: record.atomic_mass,
            atomic_density: record.atomic_density,
            surface_binding_energy: Some(record.surface_binding_energy),
            displacement_energy: Some(record.displacement_energy),
            ..ElementBaseline::default()
        };
        Self {
            symbol: record.symbol.to_string(),
            name,
            atomic_nr: record.atomic_nr,
            period: record.period,
            group: record.group,
            periodic_table_symbol: record.symbol.to_string(),
            original: properties.clone(),
            properties,
            modified: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }

    pub fn value(&self, field: PhysicalField) -> Option<f64> {
        self.properties.value(field)
    }

    pub fn original_value(&self, field: PhysicalField) -> Option<f64> {
        self.original.value(field)
    }

    pub fn differs(&self, field: PhysicalField) -> bool {
        self.value(field) != self.original_value(field)
    }

    /// Overrides one physical field and updates the `modified` flag.
    pub fn set_value(&mut self, field: PhysicalField, value: Option<f64>) {
        self.properties.set_value(field, value);
        self.refresh_modified();
    }

    pub fn modified_delta(&self) -> ElementDelta {
        ElementDelta {
            changes: PhysicalField::ALL
                .into_iter()
                .filter(|field| self.differs(*field))
                .map(|field| (field, self.value(field)))
                .collect(),
        }
    }

    pub fn refresh_modified(&mut self) {
        self.modified = !self.modified_delta().is_empty();
    }

    /// Restores every physical field to the baseline.
    pub fn reset(&mut self) {
        self.properties = self.original.clone();
        self.modified = false;
    }

    pub fn english_name(&self) -> &str {
        self.name.get("en").map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, PhysicalField};
    use crate::common::ElementRecord;

    fn argon() -> Element {
        Element::from_record(&ElementRecord::new(
            "Ar", "argon", "Argon", 18, 3, 18, 39.948, 0.0208, 0.0, 5.0,
        ))
    }

    #[test]
    fn library_elements_start_unmodified() {
        let element = argon();
        assert!(!element.modified);
        assert!(element.modified_delta().is_empty());
        assert_eq!(element.periodic_table_symbol, "Ar");
        assert_eq!(element.english_name(), "argon");
    }

    #[test]
    fn overriding_a_field_marks_the_element_and_reports_the_delta() {
        let mut element = argon();
        element.set_value(PhysicalField::SurfaceBindingEnergy, Some(1.5));

        assert!(element.modified);
        let delta = element.modified_delta();
        assert!(delta.contains(PhysicalField::SurfaceBindingEnergy));
        assert!(!delta.contains(PhysicalField::AtomicMass));
        assert_eq!(delta.get(PhysicalField::SurfaceBindingEnergy), Some(Some(1.5)));
        assert_eq!(
            element.original_value(PhysicalField::SurfaceBindingEnergy),
            Some(0.0)
        );
    }

    #[test]
    fn writing_back_the_original_value_clears_the_flag() {
        let mut element = argon();
        element.set_value(PhysicalField::AtomicMass, Some(40.0));
        element.set_value(PhysicalField::AtomicMass, Some(39.948));
        assert!(!element.modified);

        element.set_value(PhysicalField::DisplacementEnergy, Some(9.0));
        element.reset();
        assert!(!element.modified);
        assert_eq!(element.value(PhysicalField::DisplacementEnergy), Some(5.0));
    }

    #[test]
    fn empty_element_is_valid_and_blank() {
        let element = Element::empty();
        assert!(element.is_empty());
        assert_eq!(element.english_name(), "");
        assert_eq!(element.value(PhysicalField::AtomicMass), Some(0.0));
        assert_eq!(element.value(PhysicalField::SurfaceBindingEnergy), None);
    }

    #[test]
    fn element_serializes_flat_with_original_snapshot() {
        let json = serde_json::to_value(argon()).expect("element should serialize");
        assert_eq!(json["symbol"], "Ar");
        assert_eq!(json["atomic_mass"], 39.948);
        assert_eq!(json["name"]["de"], "Argon");
        assert_eq!(json["original"]["displacement_energy"], 5.0);
        assert!(json.get("mass_density").is_none());
    }
}
