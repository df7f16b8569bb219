use crate::common::CompoundRecord;
use crate::model::Element;
use indexmap::IndexMap;
use serde::Serialize;

/// A chemical compound with its stoichiometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compound {
    /// Display name, may carry `<sub>` markup.
    pub name: String,
    pub elements: IndexMap<String, u32>,
    /// Plain-text name used in engine files.
    pub name_save: String,
}

impl Compound {
    /// Builds a compound; without an explicit name one is generated from the stoichiometry.
    pub fn new(name: Option<&str>, elements: IndexMap<String, u32>) -> Self {
        let (generated_display, generated_save) = generated_names(&elements);
        let (name, name_save) = match name {
            Some(name) => (name.to_string(), name.to_string()),
            None => (generated_display, generated_save),
        };
        Self {
            name,
            elements,
            name_save,
        }
    }

    pub(crate) fn from_record(record: &CompoundRecord) -> Self {
        let elements = record
            .elements
            .iter()
            .map(|(symbol, count)| ((*symbol).to_string(), *count))
            .collect();
        Self::new(record.name, elements)
    }

    /// True if every element of the compound is among `elements`.
    pub fn matches(&self, elements: &[Element]) -> bool {
        self.elements
            .keys()
            .all(|symbol| elements.iter().any(|element| &element.symbol == symbol))
    }
}

fn generated_names(elements: &IndexMap<String, u32>) -> (String, String) {
    let mut display = String::new();
    let mut save = String::new();
    for (symbol, count) in elements {
        display.push_str(symbol);
        save.push_str(symbol);
        if *count > 1 {
            display.push_str(&format!("<sub>{count}</sub>"));
            save.push_str(&count.to_string());
        }
    }
    if display.is_empty() {
        return ("???".to_string(), "???".to_string());
    }
    (display, save)
}

#[cfg(test)]
mod tests {
    use super::Compound;
    use crate::model::ElementLibrary;
    use indexmap::IndexMap;

    fn stoichiometry(pairs: &[(&str, u32)]) -> IndexMap<String, u32> {
        pairs
            .iter()
            .map(|(symbol, count)| ((*symbol).to_string(), *count))
            .collect()
    }

    #[test]
    fn generated_names_keep_element_order() {
        let compound = Compound::new(None, stoichiometry(&[("Al", 2), ("O", 3)]));
        assert_eq!(compound.name, "Al<sub>2</sub>O<sub>3</sub>");
        assert_eq!(compound.name_save, "Al2O3");

        let boride = Compound::new(None, stoichiometry(&[("Fe", 1), ("B", 1)]));
        assert_eq!(boride.name_save, "FeB");
    }

    #[test]
    fn explicit_names_are_used_verbatim() {
        let compound = Compound::new(Some("CHps"), stoichiometry(&[("C", 8), ("H", 8)]));
        assert_eq!(compound.name, "CHps");
        assert_eq!(compound.name_save, "CHps");
    }

    #[test]
    fn empty_compound_gets_placeholder_name() {
        let compound = Compound::new(None, IndexMap::new());
        assert_eq!(compound.name, "???");
    }

    #[test]
    fn compound_matches_when_all_elements_are_present() {
        let library = ElementLibrary::tridyn();
        let elements = ["Si", "O", "W"]
            .iter()
            .filter_map(|symbol| library.element_from_symbol(symbol))
            .collect::<Vec<_>>();

        let silica = Compound::new(None, stoichiometry(&[("Si", 1), ("O", 2)]));
        let alumina = Compound::new(None, stoichiometry(&[("Al", 2), ("O", 3)]));
        assert!(silica.matches(&elements));
        assert!(!alumina.matches(&elements));
    }
}
