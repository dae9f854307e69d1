//! Small object-oriented programming samples.
//!
//! The crate contains two record shapes used in an introductory course:
//! [`Car`], a plain bag of public fields, and [`Student`], a record whose fields are
//! only reachable through accessor methods. Both are exercised by short driver
//! programs ([`Lesson`]s) that print field values, and the [`Runner`] executes those
//! lessons by name.
//!
//! The two shapes deliberately use different styles: `Car` shows attributes mutated
//! directly by the caller, `Student` shows encapsulation, named constructors and
//! overloading by arity.

pub mod car;
pub mod lesson;
mod runner;
pub mod student;

pub use car::Car;
pub use lesson::Lesson;
/// Just a convenient re-export of the lesson runner.
///
/// See [`Runner`] for the high-level API and examples.
pub use runner::Runner;
pub use student::{Marks, Student};
