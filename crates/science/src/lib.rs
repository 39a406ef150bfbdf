//! # tutorlab Science
//!
//! The deterministic engines behind the tutor's calculation tools:
//!
//! - [`arithmetic`]: n-ary operations over numeric operand lists
//! - [`constants`]: the CODATA physical constants catalog
//! - [`laws`]: the multi-directional physics formula resolver
//!
//! Everything here is synchronous and pure. Failures are typed per engine
//! and convert into [`tutorlab_core::Failure`] for the tool layer.

pub mod arithmetic;
pub mod constants;
pub mod laws;

pub use arithmetic::{ArithmeticError, Computation, Operation};
pub use constants::{Category, ConstantError, Lookup, PhysicalConstant};
pub use laws::{FormulaError, LawDefinition, LawInfo, Resolution, Solution};
