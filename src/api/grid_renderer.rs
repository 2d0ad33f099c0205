use crate::core::{
    DEFAULT_GRID_LINES, GridLine, PlotGeometry, cell_grid_lines, horizontal_grid_lines,
    vertical_grid_lines,
};
use crate::error::ChartResult;
use crate::render::{DashPattern, DrawingSurface, palette};

/// Stroke width of reference lines.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Which reference lines a chart draws behind (or over) its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// Horizontal lines across the value axis.
    Horizontal { lines: usize },
    /// Vertical lines across a horizontal value axis.
    Vertical { lines: usize },
    /// Cell boundaries of a `rows x cols` matrix.
    Cells { rows: usize, cols: usize },
}

impl GridLayout {
    pub const DEFAULT_HORIZONTAL: Self = Self::Horizontal {
        lines: DEFAULT_GRID_LINES,
    };
    pub const DEFAULT_VERTICAL: Self = Self::Vertical {
        lines: DEFAULT_GRID_LINES,
    };

    #[must_use]
    pub fn lines(self, plot: PlotGeometry) -> Vec<GridLine> {
        match self {
            Self::Horizontal { lines } => horizontal_grid_lines(plot, lines),
            Self::Vertical { lines } => vertical_grid_lines(plot, lines),
            Self::Cells { rows, cols } => cell_grid_lines(plot, rows, cols),
        }
    }
}

/// Strokes precomputed reference lines.
pub fn draw_grid_lines<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    lines: &[GridLine],
) -> ChartResult<()> {
    let solid = DashPattern::solid();
    for line in lines {
        surface.stroke_path(&[line.from, line.to], palette::GRID_LINE, GRID_LINE_WIDTH, &solid)?;
    }
    Ok(())
}

/// Draws the reference grid for `plot` in one call.
pub fn render_grid<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    plot: PlotGeometry,
    layout: GridLayout,
) -> ChartResult<()> {
    draw_grid_lines(surface, &layout.lines(plot))
}
