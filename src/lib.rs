//! Interaktiver Spline-Kern.
//! Kurvenauswertung, Picking und Arc-Length-Abspielen als Library exportiert
//! für Hosts (Fenster/Renderer) und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, PlaybackState};
pub use core::{
    ArcLengthWalker, Axis, ControlPoint, CurveModel, GrabbedHandle, InterpolationMode, PickState,
    Ray, TangentHandle, WalkStep,
};
pub use shared::{RenderScene, SplineOptions};
