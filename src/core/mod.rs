pub mod area_series;
pub mod bar_series;
pub mod doughnut;
pub mod grid;
pub mod grouped_bar_series;
pub mod heatmap;
pub mod line_series;
pub mod scale;
pub mod scatter;
pub mod treemap;
pub mod types;
mod validation;

pub use area_series::{AreaGeometry, project_area_geometry};
pub use bar_series::{BAR_WIDTH_RATIO, BarGeometry, BarOrientation, project_bars};
pub use doughnut::{DoughnutGeometry, Wedge, project_doughnut};
pub use grid::{
    DEFAULT_GRID_LINES, GridLine, cell_grid_lines, horizontal_grid_lines, vertical_grid_lines,
};
pub use grouped_bar_series::{GroupedBarGeometry, project_grouped_bars, validate_multi_series};
pub use heatmap::{
    HEATMAP_ALPHA_LOW, HEATMAP_ALPHA_RANGE, HeatmapCell, HeatmapGeometry, project_heatmap,
    validate_matrix,
};
pub use line_series::{LineGeometry, project_line_geometry, project_polyline};
pub use scale::{
    AxisRange, VALUE_HEADROOM, series_extent, series_max, to_pixel_value_x, to_pixel_x,
    to_pixel_x_centered, to_pixel_y, to_pixel_y_centered,
};
pub use scatter::{SCATTER_MARKER_RADIUS, ScatterMarker, project_scatter};
pub use treemap::{TreemapCell, project_treemap};
pub use types::{BandBound, PixelPoint, PixelRect, PlotGeometry, ScatterPoint, Viewport};
