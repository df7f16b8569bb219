/// One row of a static element table as shipped with an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ElementRecord {
    pub symbol: &'static str,
    pub name_en: &'static str,
    pub name_de: &'static str,
    pub atomic_nr: u32,
    pub period: u32,
    pub group: u32,
    pub atomic_mass: f64,
    pub atomic_density: f64,
    pub surface_binding_energy: f64,
    pub displacement_energy: f64,
}

impl ElementRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        symbol: &'static str,
        name_en: &'static str,
        name_de: &'static str,
        atomic_nr: u32,
        period: u32,
        group: u32,
        atomic_mass: f64,
        atomic_density: f64,
        surface_binding_energy: f64,
        displacement_energy: f64,
    ) -> Self {
        Self {
            symbol,
            name_en,
            name_de,
            atomic_nr,
            period,
            group,
            atomic_mass,
            atomic_density,
            surface_binding_energy,
            displacement_energy,
        }
    }
}
