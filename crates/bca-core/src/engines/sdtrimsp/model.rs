use super::SdtrimspVersion;
use crate::engines::CodeTable;
use crate::model::{
    Angle, InelasticLossModel, IntegrationMethod, InteractionPotential, KineticEnergy, Mode,
    SurfaceBindingModel,
};

pub(super) const DEFAULT_CASE_E0: i64 = 0;
pub(super) const DEFAULT_CASE_ALPHA: i64 = 0;
pub(super) const DEFAULT_NUMBER_CALC: i64 = 18;
pub(super) const DEFAULT_TTARGET: f64 = 2000.0;
pub(super) const DEFAULT_NQX: u32 = 200;
pub(super) const DEFAULT_NH: i64 = 1000;
pub(super) const DEFAULT_IDOUT: i64 = 10;
pub(super) const DEFAULT_NR_PPROJ: i64 = 100;
pub(super) const DEFAULT_FLC: f64 = 1.0;
pub(super) const DEFAULT_E0: f64 = 500.0;
pub(super) const DEFAULT_ALPHA0: f64 = 0.0;
pub(super) const DEFAULT_QUMAX: f64 = 1.0;
pub(super) const DEFAULT_GROUP_ELEMENTS: bool = true;

/// Marker for "not overridden" in the per-component override lists.
pub(super) const UNSET_OVERRIDE: f64 = -1.0;

fn idrel_code(mode: Mode) -> Option<i64> {
    match mode {
        Mode::Static => Some(1),
        Mode::Dynamic => Some(0),
        Mode::StaticNoRecoil => Some(-1),
    }
}

fn ipot_code(potential: InteractionPotential) -> Option<i64> {
    match potential {
        InteractionPotential::Krc => Some(1),
        InteractionPotential::Moliere => Some(2),
        InteractionPotential::Zbl => Some(3),
        InteractionPotential::NakagawaYamamura => Some(4),
        InteractionPotential::SiSi => Some(5),
        InteractionPotential::Power => Some(6),
    }
}

fn iintegral_code(method: IntegrationMethod) -> Option<i64> {
    match method {
        IntegrationMethod::Magic => Some(0),
        IntegrationMethod::GaussMehler => Some(1),
        IntegrationMethod::GaussLegendre => Some(2),
    }
}

fn case_e0_code(mode: KineticEnergy) -> Option<i64> {
    match mode {
        KineticEnergy::Fixed => Some(0),
        KineticEnergy::File => Some(1),
        KineticEnergy::MaxwellianVelocityDistribution => Some(2),
        KineticEnergy::MaxwellianEnergyDistribution => Some(3),
        KineticEnergy::Sweep => Some(5),
        KineticEnergy::FileEnergyAngle => Some(6),
        KineticEnergy::LinearRamp => None,
    }
}

fn case_alpha_code(mode: Angle) -> Option<i64> {
    match mode {
        Angle::Fixed => Some(0),
        Angle::RandomDistribution => Some(1),
        Angle::CosDistribution1 => Some(2),
        Angle::CosDistribution2 => Some(3),
        Angle::File => Some(4),
        Angle::Sweep => Some(5),
        Angle::FileEnergyAngle => Some(6),
        Angle::Gaussian2d | Angle::Cos2d | Angle::Parabolic1d => None,
    }
}

fn inel0_code_v601(model: InelasticLossModel) -> Option<i64> {
    match model {
        InelasticLossModel::LindhardScharff => Some(1),
        InelasticLossModel::OenRobinson => Some(2),
        InelasticLossModel::LindhardScharffAndOenRobinson => Some(3),
        InelasticLossModel::Hydrogen => Some(4),
        InelasticLossModel::Helium => Some(5),
        InelasticLossModel::Ziegler => Some(6),
        InelasticLossModel::LindhardScharffAndZiegler => None,
    }
}

fn inel0_code_v609(model: InelasticLossModel) -> Option<i64> {
    match model {
        InelasticLossModel::LindhardScharffAndZiegler => Some(7),
        other => inel0_code_v601(other),
    }
}

fn isbv_code_v601(model: SurfaceBindingModel) -> Option<i64> {
    match model {
        SurfaceBindingModel::ElementSpecific => Some(1),
        SurfaceBindingModel::Average => Some(2),
        SurfaceBindingModel::ElementPairs => Some(3),
        SurfaceBindingModel::SolidSolid => Some(4),
        SurfaceBindingModel::SolidGas => Some(5),
        SurfaceBindingModel::File => Some(6),
        SurfaceBindingModel::Electronegativity => Some(7),
        SurfaceBindingModel::Compounds | SurfaceBindingModel::Table => None,
    }
}

fn isbv_code_v609(model: SurfaceBindingModel) -> Option<i64> {
    match model {
        SurfaceBindingModel::ElementSpecific => Some(1),
        SurfaceBindingModel::Average => Some(2),
        SurfaceBindingModel::ElementPairs => Some(3),
        SurfaceBindingModel::Compounds => Some(5),
        SurfaceBindingModel::File => Some(6),
        SurfaceBindingModel::Electronegativity => Some(7),
        SurfaceBindingModel::Table => Some(8),
        SurfaceBindingModel::SolidSolid | SurfaceBindingModel::SolidGas => None,
    }
}

pub(super) const IDREL: CodeTable<Mode> = CodeTable::new(Mode::ALL, idrel_code, Mode::Static, 1);

pub(super) const IPOT: CodeTable<InteractionPotential> = CodeTable::new(
    InteractionPotential::ALL,
    ipot_code,
    InteractionPotential::Krc,
    1,
);

pub(super) const IINTEGRAL: CodeTable<IntegrationMethod> = CodeTable::new(
    IntegrationMethod::ALL,
    iintegral_code,
    IntegrationMethod::GaussLegendre,
    2,
);

pub(super) const CASE_E0: CodeTable<KineticEnergy> = CodeTable::new(
    KineticEnergy::ALL,
    case_e0_code,
    KineticEnergy::Fixed,
    DEFAULT_CASE_E0,
);

pub(super) const CASE_ALPHA: CodeTable<Angle> =
    CodeTable::new(Angle::ALL, case_alpha_code, Angle::Fixed, DEFAULT_CASE_ALPHA);

pub(super) const fn inel0(version: SdtrimspVersion) -> CodeTable<InelasticLossModel> {
    match version {
        SdtrimspVersion::V6_01 => CodeTable::new(
            InelasticLossModel::ALL,
            inel0_code_v601,
            InelasticLossModel::LindhardScharffAndOenRobinson,
            3,
        ),
        SdtrimspVersion::V6_09 => CodeTable::new(
            InelasticLossModel::ALL,
            inel0_code_v609,
            InelasticLossModel::LindhardScharffAndZiegler,
            7,
        ),
    }
}

pub(super) const fn isbv(version: SdtrimspVersion) -> CodeTable<SurfaceBindingModel> {
    match version {
        SdtrimspVersion::V6_01 => CodeTable::new(
            SurfaceBindingModel::ALL,
            isbv_code_v601,
            SurfaceBindingModel::ElementSpecific,
            1,
        ),
        SdtrimspVersion::V6_09 => CodeTable::new(
            SurfaceBindingModel::ALL,
            isbv_code_v609,
            SurfaceBindingModel::Table,
            8,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{CASE_ALPHA, CASE_E0, IDREL, inel0, isbv};
    use crate::engines::sdtrimsp::SdtrimspVersion;
    use crate::model::{Angle, InelasticLossModel, KineticEnergy, Mode, SurfaceBindingModel};

    #[test]
    fn surface_binding_codes_changed_in_6_09() {
        let old = isbv(SdtrimspVersion::V6_01);
        let new = isbv(SdtrimspVersion::V6_09);

        assert_eq!(old.code(SurfaceBindingModel::SolidGas), 5);
        assert_eq!(new.variant(5), Some(SurfaceBindingModel::Compounds));
        assert_eq!(new.code(SurfaceBindingModel::SolidSolid), 8);
        assert_eq!(old.code(SurfaceBindingModel::Table), 1);
    }

    #[test]
    fn version_defaults_decode_to_a_variant() {
        for version in SdtrimspVersion::ALL {
            let table = inel0(version);
            assert_eq!(
                table.variant(table.default_code()),
                Some(table.default_variant())
            );
            let table = isbv(version);
            assert_eq!(
                table.variant(table.default_code()),
                Some(table.default_variant())
            );
        }
        assert_eq!(
            inel0(SdtrimspVersion::V6_01).code(InelasticLossModel::LindhardScharffAndZiegler),
            3
        );
    }

    #[test]
    fn unsupported_beam_modes_fall_back_to_fixed() {
        assert_eq!(CASE_E0.code(KineticEnergy::LinearRamp), 0);
        assert_eq!(CASE_ALPHA.code(Angle::Gaussian2d), 0);
        assert_eq!(CASE_ALPHA.variant(4), Some(Angle::File));
        assert_eq!(IDREL.variant(-1), Some(Mode::StaticNoRecoil));
    }
}
