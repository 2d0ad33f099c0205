use crate::core::{PixelPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, DashPattern, Font};

/// Immediate-mode 2D drawing capability injected into every render call.
///
/// Renderers borrow the surface for one call and never retain it. Path
/// methods receive the full vertex list; `fill_path` closes the path
/// implicitly. Stroke state such as the dash pattern applies to a single
/// `stroke_path` call only.
pub trait DrawingSurface {
    /// Pixel size of the underlying canvas.
    fn size(&self) -> Viewport;

    fn clear(&mut self, width: f64, height: f64) -> ChartResult<()>;

    fn stroke_path(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        width: f64,
        dash: &DashPattern,
    ) -> ChartResult<()>;

    fn fill_path(&mut self, points: &[PixelPoint], color: Color) -> ChartResult<()>;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color)
    -> ChartResult<()>;

    /// Fills the annulus segment between `inner_radius` and `outer_radius`
    /// from `start_angle` to `end_angle` (radians, clockwise on screen).
    /// An `inner_radius` of zero fills a pie slice or a full disc.
    fn fill_arc_segment(
        &mut self,
        center: PixelPoint,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    ) -> ChartResult<()>;

    /// Draws `text` with its baseline-left corner at `(x, y)`, modulating the
    /// color's opacity by `alpha`.
    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &Font,
        color: Color,
        alpha: f64,
    ) -> ChartResult<()>;
}
