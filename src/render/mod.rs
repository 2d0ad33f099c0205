pub mod palette;
mod primitives;
mod recording_surface;
mod surface;

pub use primitives::{Color, DashPattern, Font};
pub use recording_surface::{DrawCommand, RecordingSurface};
pub use surface::DrawingSurface;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
