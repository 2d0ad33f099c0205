use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::core::{PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DashPattern, DrawingSurface, Font};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub strokes: usize,
    pub fills: usize,
    pub texts: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Draws either into an owned offscreen image (`CairoSurface::new`) or into an
/// external Cairo context such as a GTK `DrawingArea` callback
/// (`CairoSurface::for_context`).
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    viewport: Viewport,
    stats: CairoSurfaceStats,
}

impl CairoSurface {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(ChartError::InvalidViewport {
                    width: f64::from(width),
                    height: f64::from(height),
                });
            }
        };

        let image = ImageSurface::create(Format::ARgb32, w, h)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
            viewport: Viewport::new(width, height),
            stats: CairoSurfaceStats::default(),
        })
    }

    #[must_use]
    pub fn for_context(context: Context, viewport: Viewport) -> Self {
        Self {
            context,
            image: None,
            viewport,
            stats: CairoSurfaceStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }

    /// Writes the offscreen image as PNG. Fails for context-backed surfaces.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let image = self.image.as_ref().ok_or_else(|| {
            ChartError::Backend("surface draws into an external context".to_owned())
        })?;
        let mut file = File::create(path.as_ref())
            .map_err(|err| ChartError::Backend(format!("failed to create png file: {err}")))?;
        image
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn trace_path(&self, points: &[PixelPoint]) {
        if let Some((first, rest)) = points.split_first() {
            self.context.move_to(first.x, first.y);
            for point in rest {
                self.context.line_to(point.x, point.y);
            }
        }
    }
}

impl DrawingSurface for CairoSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        context.set_operator(Operator::Clear);
        context.rectangle(0.0, 0.0, width, height);
        let filled = context.fill();
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        self.stats = CairoSurfaceStats::default();
        filled.map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn stroke_path(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        width: f64,
        dash: &DashPattern,
    ) -> ChartResult<()> {
        apply_color(&self.context, color, 1.0);
        self.context.set_line_width(width);
        self.context.set_dash(dash.segments(), 0.0);
        self.context.new_path();
        self.trace_path(points);
        let stroked = self.context.stroke();
        // Dash state lives on the context; never let it reach the next stroke.
        self.context.set_dash(&[], 0.0);
        stroked.map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn fill_path(&mut self, points: &[PixelPoint], color: Color) -> ChartResult<()> {
        apply_color(&self.context, color, 1.0);
        self.context.new_path();
        self.trace_path(points);
        self.context.close_path();
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> ChartResult<()> {
        apply_color(&self.context, color, 1.0);
        self.context.new_path();
        self.context.rectangle(x, y, width, height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn fill_arc_segment(
        &mut self,
        center: PixelPoint,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    ) -> ChartResult<()> {
        let context = &self.context;
        apply_color(context, color, 1.0);
        context.new_path();
        context.arc(center.x, center.y, outer_radius, start_angle, end_angle);
        if inner_radius > 0.0 {
            context.arc_negative(center.x, center.y, inner_radius, end_angle, start_angle);
        } else {
            context.line_to(center.x, center.y);
        }
        context.close_path();
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill arc segment", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &Font,
        color: Color,
        alpha: f64,
    ) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let mut description = FontDescription::new();
        description.set_family(&font.family);
        description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&description));
        layout.set_text(text);

        // Pango positions the layout by its top edge; callers pass a baseline.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(&self.context, color, alpha);
        self.context.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color, alpha: f64) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha * alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
