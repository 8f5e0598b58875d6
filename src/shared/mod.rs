//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie, Optionen und die Render-Szene, die zwischen `app`
//! und einem externen Renderer geteilt werden.

pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use options::SplineOptions;
pub use render_scene::RenderScene;
