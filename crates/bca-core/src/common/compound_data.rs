/// A compound as listed in an engine's shipped compound table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CompoundRecord {
    pub name: Option<&'static str>,
    pub elements: &'static [(&'static str, u32)],
}

pub(crate) static TRIDYN_COMPOUNDS: &[CompoundRecord] = &[
    CompoundRecord { name: Some("CHps"), elements: &[("C", 8), ("H", 8)] },
    CompoundRecord { name: None, elements: &[("Fe", 1), ("B", 1)] },
    CompoundRecord { name: None, elements: &[("Mg", 1), ("B", 2)] },
    CompoundRecord { name: None, elements: &[("Ti", 1), ("B", 2)] },
    CompoundRecord { name: None, elements: &[("Al", 4), ("C", 3)] },
    CompoundRecord { name: None, elements: &[("Si", 1), ("C", 1)] },
    CompoundRecord { name: None, elements: &[("Ta", 1), ("C", 1)] },
    CompoundRecord { name: None, elements: &[("Ti", 1), ("C", 1)] },
    CompoundRecord { name: None, elements: &[("W", 1), ("C", 1)] },
    CompoundRecord { name: None, elements: &[("Al", 2), ("O", 3)] },
    CompoundRecord { name: None, elements: &[("As", 2), ("O", 3)] },
    CompoundRecord { name: None, elements: &[("B", 2), ("O", 3)] },
    CompoundRecord { name: None, elements: &[("Co", 1), ("O", 1)] },
    CompoundRecord { name: None, elements: &[("Cr", 2), ("O", 3)] },
    CompoundRecord { name: None, elements: &[("Cs", 2), ("O", 1)] },
    CompoundRecord { name: None, elements: &[("Cu", 2), ("O", 1)] },
    CompoundRecord { name: None, elements: &[("Fe", 2), ("O", 3)] },
    CompoundRecord { name: None, elements: &[("Ga", 2), ("O", 3)] },
    CompoundRecord { name: None, elements: &[("Ge", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("Mg", 1), ("O", 1)] },
    CompoundRecord { name: None, elements: &[("Mn", 3), ("O", 4)] },
    CompoundRecord { name: None, elements: &[("P", 2), ("O", 5)] },
    CompoundRecord { name: None, elements: &[("Ru", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("Se", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("Si", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("Sn", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("Ta", 2), ("O", 5)] },
    CompoundRecord { name: None, elements: &[("Ti", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("U", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("W", 1), ("O", 3)] },
    CompoundRecord { name: None, elements: &[("Zn", 1), ("O", 1)] },
    CompoundRecord { name: None, elements: &[("Zr", 1), ("O", 2)] },
    CompoundRecord { name: None, elements: &[("Al", 1), ("N", 1)] },
    CompoundRecord { name: Some("cBN"), elements: &[("B", 1), ("N", 1)] },
    CompoundRecord { name: Some("hBN"), elements: &[("B", 1), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Cr", 1), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Cu", 3), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Ga", 1), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Hf", 1), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Mo", 1), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Si", 3), ("N", 4)] },
    CompoundRecord { name: None, elements: &[("Ti", 1), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("W", 2), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Zr", 1), ("N", 1)] },
    CompoundRecord { name: None, elements: &[("Mo", 1), ("S", 2)] },
    CompoundRecord { name: None, elements: &[("Co", 1), ("Si", 2)] },
    CompoundRecord { name: None, elements: &[("Fe", 1), ("Si", 2)] },
    CompoundRecord { name: None, elements: &[("Fe", 1), ("Si", 1)] },
    CompoundRecord { name: None, elements: &[("Mg", 1), ("Si", 2)] },
    CompoundRecord { name: None, elements: &[("Pt", 1), ("Si", 1)] },
    CompoundRecord { name: None, elements: &[("Ti", 1), ("Si", 2)] },
    CompoundRecord { name: None, elements: &[("W", 1), ("Si", 2)] },
    CompoundRecord { name: None, elements: &[("Al", 1), ("As", 1)] },
    CompoundRecord { name: None, elements: &[("Ga", 1), ("As", 1)] },
    CompoundRecord { name: None, elements: &[("In", 1), ("As", 1)] },
    CompoundRecord { name: None, elements: &[("Ga", 1), ("Sb", 1)] },
];
