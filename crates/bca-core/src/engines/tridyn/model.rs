use crate::engines::CodeTable;
use crate::model::{Angle, InelasticLossModel, KineticEnergy, Mode};

pub(super) const DEFAULT_NH: i64 = 1_000_000;
pub(super) const DEFAULT_FLCT: f64 = 1.0;
pub(super) const DEFAULT_NRTHR: i64 = 1;
pub(super) const DEFAULT_IWC: i64 = 1;
pub(super) const DEFAULT_DMG0: f64 = 0.0;
pub(super) const DEFAULT_IRES: i64 = 3;
pub(super) const DEFAULT_OUTPUT_FREQUENCY: i64 = 100;
pub(super) const DEFAULT_E0: f64 = 500.0;
pub(super) const DEFAULT_ALPHA: f64 = 0.0;
pub(super) const DEFAULT_QUMAX: f64 = 1.0;
pub(super) const DEFAULT_XMAX: f64 = 2000.0;
pub(super) const DEFAULT_NQX: u32 = 200;
pub(super) const DEFAULT_DTHF: f64 = 0.0;
pub(super) const DEFAULT_PRCS: f64 = 1e-4;

/// Marker for "not overridden" in `mass`, `edsp`, `efin`, `dens` and the `sbem` diagonal.
pub(super) const UNSET_OVERRIDE: f64 = -1.0;

/// `outl` keywords that are controlled by the reflected/sputtered logging switches.
pub(super) const LOG_REFLECTED: &str = "scat";
pub(super) const LOG_SPUTTERED: &str = "sput";

fn idrel_code(mode: Mode) -> Option<i64> {
    match mode {
        Mode::Static | Mode::StaticNoRecoil => Some(0),
        Mode::Dynamic => Some(1),
    }
}

fn ie0_code(mode: KineticEnergy) -> Option<i64> {
    match mode {
        KineticEnergy::File => Some(-1),
        KineticEnergy::Fixed => Some(0),
        KineticEnergy::LinearRamp => Some(1),
        KineticEnergy::Sweep
        | KineticEnergy::MaxwellianVelocityDistribution
        | KineticEnergy::MaxwellianEnergyDistribution
        | KineticEnergy::FileEnergyAngle => None,
    }
}

fn iadis_code(mode: Angle) -> Option<i64> {
    match mode {
        Angle::Fixed => Some(0),
        Angle::Gaussian2d => Some(1),
        Angle::Cos2d => Some(2),
        Angle::Parabolic1d => Some(3),
        Angle::File
        | Angle::Sweep
        | Angle::RandomDistribution
        | Angle::CosDistribution1
        | Angle::CosDistribution2
        | Angle::FileEnergyAngle => None,
    }
}

fn inel_code(model: InelasticLossModel) -> Option<i64> {
    match model {
        InelasticLossModel::LindhardScharff => Some(1),
        InelasticLossModel::OenRobinson => Some(2),
        InelasticLossModel::LindhardScharffAndOenRobinson => Some(3),
        InelasticLossModel::Hydrogen
        | InelasticLossModel::Helium
        | InelasticLossModel::Ziegler
        | InelasticLossModel::LindhardScharffAndZiegler => None,
    }
}

/// Code 0 decodes as [`Mode::Static`]; the recoil switch of `coll` tells the two static
/// modes apart.
pub(super) const IDREL: CodeTable<Mode> = CodeTable::new(Mode::ALL, idrel_code, Mode::Dynamic, 1);

pub(super) const IE0: CodeTable<KineticEnergy> =
    CodeTable::new(KineticEnergy::ALL, ie0_code, KineticEnergy::Fixed, 0);

pub(super) const IADIS: CodeTable<Angle> = CodeTable::new(Angle::ALL, iadis_code, Angle::Fixed, 0);

pub(super) const INEL: CodeTable<InelasticLossModel> = CodeTable::new(
    InelasticLossModel::ALL,
    inel_code,
    InelasticLossModel::LindhardScharffAndOenRobinson,
    3,
);

#[cfg(test)]
mod tests {
    use super::{IADIS, IDREL, IE0, INEL};
    use crate::domain::DefaultAssumed;
    use crate::model::{Angle, InelasticLossModel, KineticEnergy, Mode};

    #[test]
    fn both_static_modes_share_code_zero() {
        assert_eq!(IDREL.code(Mode::Static), 0);
        assert_eq!(IDREL.code(Mode::StaticNoRecoil), 0);
        assert_eq!(IDREL.code(Mode::Dynamic), 1);
        assert_eq!(IDREL.variant(0), Some(Mode::Static));
    }

    #[test]
    fn beam_distribution_codes() {
        assert_eq!(IE0.code(KineticEnergy::File), -1);
        assert_eq!(IE0.code(KineticEnergy::LinearRamp), 1);
        assert_eq!(IE0.code(KineticEnergy::Sweep), 0);
        assert_eq!(IADIS.variant(3), Some(Angle::Parabolic1d));
        assert!(!IADIS.supports(Angle::RandomDistribution));
    }

    #[test]
    fn unsupported_loss_models_fall_back_to_the_combined_model() {
        assert_eq!(INEL.code(InelasticLossModel::Ziegler), 3);

        let mut assumed = DefaultAssumed::new();
        let decoded = INEL.decode(Some("6"), "inelastic_loss_model", &mut assumed);
        assert_eq!(decoded, InelasticLossModel::LindhardScharffAndOenRobinson);
        assert_eq!(assumed.fields(), ["inelastic_loss_model"]);
    }
}
