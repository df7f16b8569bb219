mod compound_data;
mod element_data;
mod element_tables;
pub mod numeric;

pub(crate) use compound_data::{CompoundRecord, TRIDYN_COMPOUNDS};
pub(crate) use element_data::ElementRecord;
pub(crate) use element_tables::{SDTRIMSP_ELEMENTS, TRIDYN_ELEMENTS};
