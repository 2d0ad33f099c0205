mod area_series_renderer;
mod bar_series_renderer;
mod board;
mod chart_data;
mod chart_kind;
mod chart_options;
mod grid_renderer;
mod handle;
mod heatmap_renderer;
mod json_contract;
mod line_series_renderer;
mod orchestrator;
mod proportional_renderer;
mod render_pass;
mod scatter_renderer;

pub use area_series_renderer::render_area;
pub use bar_series_renderer::{render_bar, render_grouped_bar};
pub use board::ChartBoard;
pub use chart_data::ChartData;
pub use chart_kind::ChartKind;
pub use chart_options::{ChartDefaults, ChartOptions, ResolvedChartOptions};
pub use grid_renderer::{GRID_LINE_WIDTH, GridLayout, draw_grid_lines, render_grid};
pub use handle::ChartHandle;
pub use heatmap_renderer::{HEATMAP_LABEL_ALPHA, HEATMAP_LABEL_FONT_PX, render_heatmap};
pub use json_contract::{CHART_REQUEST_JSON_SCHEMA_V1, ChartRequest, ChartRequestJsonContractV1};
pub use line_series_renderer::render_line;
pub use orchestrator::draw;
pub use proportional_renderer::{TREEMAP_LABEL_FONT_PX, render_doughnut, render_treemap};
pub use scatter_renderer::render_scatter;
