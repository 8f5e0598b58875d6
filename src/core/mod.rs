//! Core-Domänentypen: Kontrollpunkte, Kurvenmodell, Picking, Arc-Length-Walker.

pub mod arc_length;
pub mod control_point;
/// Kurvenmodell mit Auswertung und Mutation
///
/// - CurveModel: geordnete Kontrollpunkte + Modus + Pick-Zustand
/// - evaluate: Abtastung in einem der vier Modi
pub mod curve;
pub mod mode;
pub mod pick;
pub mod ray;

pub use arc_length::{ArcLengthWalker, WalkStep};
pub use control_point::ControlPoint;
pub use curve::CurveModel;
pub use mode::InterpolationMode;
pub use pick::{Axis, GrabbedHandle, PickState, TangentHandle};
pub use ray::Ray;
