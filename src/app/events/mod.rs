//! Events des Spline-Kerns.
//!
//! `AppIntent` beschreibt, was der Host will; `AppCommand` ist die
//! ausführbare Mutation, die der Controller an die Handler gibt.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
