use crate::domain::DefaultAssumed;
use crate::model::{
    Angle, ArgValue, Compound, Element, ElementBaseline, Extras, GeneralArguments,
    GeneralBeamArguments, GeneralTargetArguments, InelasticLossModel, IntegrationMethod,
    InteractionPotential, KineticEnergy, Mode, PhysicalField, RowArguments, RowSide,
    StructureArguments, SurfaceBindingModel,
};
use crate::parser::{FieldError, FieldResult, FieldResultExt};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

pub(super) const UNDEFINED: &str = "undefined";
pub(super) const DEFAULT_THICKNESS: f64 = 2000.0;
pub(super) const DEFAULT_SEGMENTS: u32 = 200;
const DEFAULT_ROW_INDEX: usize = 999;

/// Typed access to the members of one JSON object.
#[derive(Debug, Clone, Copy)]
pub(super) struct JsonObject<'a> {
    members: Option<&'a Map<String, Value>>,
}

fn malformed(value: &Value, expected: &'static str) -> FieldError {
    FieldError::Malformed {
        raw: value.to_string(),
        expected,
    }
}

impl<'a> JsonObject<'a> {
    pub(super) fn new(value: Option<&'a Value>) -> Self {
        Self {
            members: value.and_then(Value::as_object),
        }
    }

    pub(super) fn get(&self, key: &str) -> Option<&'a Value> {
        self.members.and_then(|members| members.get(key))
    }

    pub(super) fn object(&self, key: &str) -> JsonObject<'a> {
        JsonObject::new(self.get(key))
    }

    pub(super) fn array(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(super) fn text(&self, key: &str) -> FieldResult<String> {
        match self.get(key) {
            None | Some(Value::Null) => Err(FieldError::Missing),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(other) => Err(malformed(other, "string")),
        }
    }

    pub(super) fn float(&self, key: &str) -> FieldResult<f64> {
        match self.get(key) {
            None | Some(Value::Null) => Err(FieldError::Missing),
            Some(value) => value.as_f64().ok_or_else(|| malformed(value, "float")),
        }
    }

    pub(super) fn int(&self, key: &str) -> FieldResult<i64> {
        match self.get(key) {
            None | Some(Value::Null) => Err(FieldError::Missing),
            Some(value) => value.as_i64().ok_or_else(|| malformed(value, "integer")),
        }
    }

    pub(super) fn count(&self, key: &str) -> FieldResult<u32> {
        let value = self.int(key)?;
        u32::try_from(value).map_err(|_| FieldError::Malformed {
            raw: value.to_string(),
            expected: "non-negative integer",
        })
    }

    pub(super) fn flag(&self, key: &str) -> FieldResult<bool> {
        match self.get(key) {
            None | Some(Value::Null) => Err(FieldError::Missing),
            Some(value) => value.as_bool().ok_or_else(|| malformed(value, "boolean")),
        }
    }

    /// Enum stored by its upper-case name.
    pub(super) fn named<E>(
        &self,
        key: &str,
        from_name: fn(&str) -> Option<E>,
    ) -> FieldResult<E> {
        let name = self.text(key)?;
        from_name(&name).ok_or(FieldError::Malformed {
            raw: name,
            expected: "known name",
        })
    }

    pub(super) fn floats(&self, key: &str) -> FieldResult<Vec<f64>> {
        let Some(value) = self.get(key) else {
            return Err(FieldError::Missing);
        };
        let items = value.as_array().ok_or_else(|| malformed(value, "list"))?;
        items
            .iter()
            .map(|item| item.as_f64().ok_or_else(|| malformed(item, "float")))
            .collect()
    }

    pub(super) fn texts(&self, key: &str) -> Vec<String> {
        self.array(key)
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    }

    /// The `optional` bag; members without a loose representation are dropped.
    pub(super) fn extras(&self) -> Extras {
        let mut extras = Extras::new();
        if let Some(members) = self.get("optional").and_then(Value::as_object) {
            for (key, value) in members {
                match ArgValue::from_json(value) {
                    Some(value) => {
                        extras.insert(key.clone(), value);
                    }
                    None => debug!(key, "dropping optional value without representation"),
                }
            }
        }
        extras
    }
}

/// Optional value: absent is `None`, malformed is `None` plus an assumed record.
fn optional<T>(result: FieldResult<T>, field: &str, assumed: &mut DefaultAssumed) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(FieldError::Missing) => None,
        Err(error) => {
            debug!(field, %error, "ignoring malformed optional value");
            assumed.assumed(field);
            None
        }
    }
}

pub(super) fn beam_arguments(
    object: JsonObject<'_>,
    assumed: &mut DefaultAssumed,
) -> GeneralBeamArguments {
    GeneralBeamArguments {
        kinetic_energy_mode: object
            .named("kinetic_energy_mode", KineticEnergy::from_name)
            .or_assumed("kinetic_energy_mode", KineticEnergy::Fixed, assumed),
        angle_mode: object
            .named("angle_mode", Angle::from_name)
            .or_assumed("angle_mode", Angle::Fixed, assumed),
        optional: object.extras(),
    }
}

pub(super) fn target_arguments(
    object: JsonObject<'_>,
    assumed: &mut DefaultAssumed,
) -> GeneralTargetArguments {
    GeneralTargetArguments {
        thickness: object
            .float("thickness")
            .or_assumed("thickness", DEFAULT_THICKNESS, assumed),
        segments: object
            .count("segments")
            .or_assumed("segments", DEFAULT_SEGMENTS, assumed),
        global_density: optional(object.float("global_density"), "global_density", assumed),
        optional: object.extras(),
    }
}

fn baseline(object: JsonObject<'_>, assumed: &mut DefaultAssumed) -> ElementBaseline {
    let mut baseline = ElementBaseline {
        atomic_mass: object
            .float("atomic_mass")
            .or_assumed("atomic_mass", 0.0, assumed),
        atomic_density: object
            .float("atomic_density")
            .or_assumed("atomic_density", 0.0, assumed),
        ..ElementBaseline::default()
    };
    for field in PhysicalField::ALL {
        if matches!(field, PhysicalField::AtomicMass | PhysicalField::AtomicDensity) {
            continue;
        }
        let value = optional(object.float(field.as_str()), field.as_str(), assumed);
        baseline.set_value(field, value);
    }
    baseline
}

/// Element with its baseline; without an `original` member the current values are the
/// baseline.
fn element(object: JsonObject<'_>, symbol: String, assumed: &mut DefaultAssumed) -> Element {
    let properties = baseline(object, assumed);
    let original = match object.get("original") {
        Some(original) => baseline(JsonObject::new(Some(original)), assumed),
        None => properties.clone(),
    };
    let name: IndexMap<String, String> = object
        .get("name")
        .and_then(Value::as_object)
        .map(|names| {
            names
                .iter()
                .filter_map(|(language, name)| Some((language.clone(), name.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default();
    let number = |key: &str| object.count(key).unwrap_or_default();

    let mut element = Element {
        periodic_table_symbol: object
            .text("periodic_table_symbol")
            .unwrap_or_else(|_| symbol.clone()),
        symbol,
        name,
        atomic_nr: number("atomic_nr"),
        period: number("period"),
        group: number("group"),
        properties,
        modified: false,
        original,
    };
    element.refresh_modified();
    element
}

/// `None` when the row has no string symbol or no element object with a symbol.
pub(super) fn row(
    value: &Value,
    side: RowSide,
    assumed: &mut DefaultAssumed,
) -> Option<RowArguments> {
    let object = JsonObject::new(Some(value));
    let element_object = object.object("element");
    let (Ok(symbol), Ok(element_symbol)) = (object.text("symbol"), element_object.text("symbol"))
    else {
        assumed.assumed(format!("{} row not convertible", side.as_str()));
        return None;
    };

    let index = object
        .count("index")
        .map(|index| index as usize)
        .or_assumed("index", DEFAULT_ROW_INDEX, assumed);
    let mut row = RowArguments::new(index, element(element_object, element_symbol, assumed));
    row.symbol = symbol;
    row.abundance = object.float("abundance").or_assumed("abundance", 1.0, assumed);
    row.max_atomic_fraction = object
        .float("max_atomic_fraction")
        .or_assumed("max_atomic_fraction", 1.0, assumed);
    row.energy = object.float("energy").or_assumed("energy", 0.0, assumed);
    row.angle = object.float("angle").or_assumed("angle", 0.0, assumed);
    row.inelastic_loss_model = optional(
        object.named("inelastic_loss_model", InelasticLossModel::from_name),
        "inelastic_loss_model",
        assumed,
    );
    row.optional = object.extras();
    Some(row)
}

pub(super) fn layer(value: &Value, assumed: &mut DefaultAssumed) -> StructureArguments {
    let object = JsonObject::new(Some(value));
    let mut layer = StructureArguments::new(
        object.text("name").or_assumed("layer_name", "Layer".to_string(), assumed),
        object
            .count("segments")
            .or_assumed("layer_segments", DEFAULT_SEGMENTS, assumed),
        object
            .float("thickness")
            .or_assumed("layer_thickness", DEFAULT_THICKNESS, assumed),
        object
            .floats("abundances")
            .or_assumed("layer_abundance", Vec::new(), assumed),
    );
    layer.optional = object.extras();
    layer
}

fn compound(value: &Value) -> Option<Compound> {
    let object = JsonObject::new(Some(value));
    let elements: IndexMap<String, u32> = object
        .get("elements")
        .and_then(Value::as_object)?
        .iter()
        .filter_map(|(symbol, count)| {
            let count = u32::try_from(count.as_u64()?).ok()?;
            Some((symbol.clone(), count))
        })
        .collect();
    let name = object.text("name").ok();
    let mut compound = Compound::new(name.as_deref(), elements);
    if let Ok(name_save) = object.text("name_save") {
        compound.name_save = name_save;
    }
    Some(compound)
}

/// Reads a promoted setting from the settings object, then from its `optional` bag.
fn promoted<'a>(object: JsonObject<'a>, key: &str) -> JsonObject<'a> {
    if object.get(key).is_some() {
        object
    } else {
        object.object("optional")
    }
}

pub(super) fn settings(
    object: JsonObject<'_>,
    general_title: &str,
    assumed: &mut DefaultAssumed,
) -> GeneralArguments {
    let mut settings = GeneralArguments::new(
        object
            .text("title")
            .unwrap_or_else(|_| general_title.to_string()),
    );
    settings.comment = object.text("comment").unwrap_or_default();
    settings.mode = object
        .named("mode", Mode::from_name)
        .or_assumed("mode", Mode::Static, assumed);
    settings.fluence = object.float("fluence").or_assumed("fluence", 1.0, assumed);
    settings.threads = object.int("threads").or_assumed("threads", 0, assumed);
    settings.compounds = object.array("compounds").iter().filter_map(compound).collect();

    settings.histories = optional(
        promoted(object, "histories").int("histories"),
        "histories",
        assumed,
    );
    settings.projectiles = optional(
        promoted(object, "projectiles").int("projectiles"),
        "projectiles",
        assumed,
    );
    settings.precision = optional(
        promoted(object, "precision").float("precision"),
        "precision",
        assumed,
    );
    settings.group_elements = optional(
        promoted(object, "group_elements").flag("group_elements"),
        "group_elements",
        assumed,
    );
    settings.interaction_potential = optional(
        promoted(object, "interaction_potential")
            .named("interaction_potential", InteractionPotential::from_name),
        "interaction_potential",
        assumed,
    );
    settings.integration_method = optional(
        promoted(object, "integration_method")
            .named("integration_method", IntegrationMethod::from_name),
        "integration_method",
        assumed,
    );
    settings.surface_binding_model = optional(
        promoted(object, "surface_binding_model")
            .named("surface_binding_model", SurfaceBindingModel::from_name),
        "surface_binding_model",
        assumed,
    );
    settings.inelastic_loss_model = optional(
        promoted(object, "inelastic_loss_model")
            .named("inelastic_loss_model", InelasticLossModel::from_name),
        "inelastic_loss_model",
        assumed,
    );

    let mut extras = object.extras();
    for key in PROMOTED_SETTINGS {
        extras.shift_remove(key);
    }
    settings.optional = extras;
    settings
}

const PROMOTED_SETTINGS: [&str; 8] = [
    "histories",
    "projectiles",
    "precision",
    "group_elements",
    "interaction_potential",
    "integration_method",
    "surface_binding_model",
    "inelastic_loss_model",
];
