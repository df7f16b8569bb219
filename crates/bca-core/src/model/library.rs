use crate::common::{ElementRecord, SDTRIMSP_ELEMENTS, TRIDYN_COMPOUNDS, TRIDYN_ELEMENTS};
use crate::model::{Compound, Element, PhysicalField};

/// Elements an engine knows about, with their documented physical defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementLibrary {
    elements: Vec<Element>,
}

impl ElementLibrary {
    fn from_records(records: &[ElementRecord]) -> Self {
        Self {
            elements: records.iter().map(Element::from_record).collect(),
        }
    }

    pub fn sdtrimsp() -> Self {
        Self::from_records(SDTRIMSP_ELEMENTS)
    }

    pub fn tridyn() -> Self {
        Self::from_records(TRIDYN_ELEMENTS)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns a fresh copy so that callers never alias library entries.
    pub fn element_from_symbol(&self, symbol: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|element| element.symbol == symbol)
            .cloned()
    }

    pub fn element_from_atomic_number(&self, atomic_nr: u32) -> Option<Element> {
        self.elements
            .iter()
            .find(|element| element.atomic_nr == atomic_nr)
            .cloned()
    }

    pub fn isotopes(&self, atomic_nr: u32) -> Vec<Element> {
        self.elements
            .iter()
            .filter(|element| element.atomic_nr == atomic_nr)
            .cloned()
            .collect()
    }

    /// Elements whose symbol, atomic number or any localized name equals `text`.
    pub fn elements_matching(&self, text: &str) -> Vec<Element> {
        let needle = text.trim();
        if needle.is_empty() {
            return Vec::new();
        }
        let atomic_nr = needle
            .parse::<u32>()
            .ok()
            .or_else(|| self.atomic_number_for_symbol(needle));
        self.elements
            .iter()
            .filter(|element| {
                Some(element.atomic_nr) == atomic_nr
                    || element
                        .name
                        .values()
                        .any(|name| name.eq_ignore_ascii_case(needle))
            })
            .cloned()
            .collect()
    }

    fn atomic_number_for_symbol(&self, symbol: &str) -> Option<u32> {
        self.elements
            .iter()
            .find(|element| element.symbol.eq_ignore_ascii_case(symbol))
            .map(|element| element.atomic_nr)
    }

    /// True if `field` of `element` equals the library value for the same symbol.
    pub fn is_default(&self, element: &Element, field: PhysicalField) -> bool {
        self.elements
            .iter()
            .find(|known| known.symbol == element.symbol)
            .is_some_and(|known| known.value(field) == element.value(field))
    }
}

/// Known compounds offered for surface-binding pre-fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundRegistry {
    compounds: Vec<Compound>,
}

impl CompoundRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tridyn() -> Self {
        Self {
            compounds: TRIDYN_COMPOUNDS.iter().map(Compound::from_record).collect(),
        }
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    pub fn find(&self, name_save: &str) -> Option<&Compound> {
        self.compounds
            .iter()
            .find(|compound| compound.name_save == name_save)
    }

    pub fn compounds_matching(&self, elements: &[Element]) -> Vec<Compound> {
        self.compounds
            .iter()
            .filter(|compound| compound.matches(elements))
            .cloned()
            .collect()
    }
}
