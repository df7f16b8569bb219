mod arguments;
mod compound;
mod element;
mod library;
mod value;

pub use arguments::{
    Angle, GeneralArguments, GeneralBeamArguments, GeneralTargetArguments, InelasticLossModel,
    IntegrationMethod, InteractionPotential, KineticEnergy, Mode, RowArguments, RowSide,
    SimulationArguments, StructureArguments, SurfaceBindingModel,
};
pub use compound::Compound;
pub use element::{Element, ElementBaseline, ElementDelta, PhysicalField};
pub use library::{CompoundRegistry, ElementLibrary};
pub use value::{ArgValue, ArgumentLookup, Extras};
