//! Configuration model and file codecs for binary-collision-approximation ion simulations.
//!
//! A [`model::SimulationArguments`] is the engine independent configuration. The
//! [`engines`] module translates it to and from the input files of SDTrimSP and TRIDYN,
//! and [`persistence`] stores it as JSON.

pub mod common;
pub mod domain;
pub mod engines;
pub mod model;
pub mod parser;
pub mod persistence;
pub mod serialization;
