use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, PlotGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DashPattern, palette};

use super::ChartKind;

/// Partial per-call chart configuration.
///
/// Every field is optional; unset fields resolve to the chart kind's defaults
/// through [`ChartOptions::resolve`]. The type is serializable so a host can
/// keep chart setup in JSON with omitted fields meaning "use the default".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_surface_first: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<DashPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_orientation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<Vec<Color>>,
    /// Per-cell labels for treemaps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_value_min(mut self, value_min: f64) -> Self {
        self.value_min = Some(value_min);
        self
    }

    #[must_use]
    pub fn with_value_max(mut self, value_max: f64) -> Self {
        self.value_max = Some(value_max);
        self
    }

    #[must_use]
    pub fn with_value_range(self, value_min: f64, value_max: f64) -> Self {
        self.with_value_min(value_min).with_value_max(value_max)
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_band_fill_color(mut self, color: Color) -> Self {
        self.band_fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = Some(show_grid);
        self
    }

    #[must_use]
    pub fn with_clear_surface_first(mut self, clear: bool) -> Self {
        self.clear_surface_first = Some(clear);
        self
    }

    /// Draws on top of the current surface contents without clearing or
    /// drawing a grid, e.g. the second line of an actual-vs-target pair.
    #[must_use]
    pub fn overlay(self) -> Self {
        self.with_clear_surface_first(false).with_grid(false)
    }

    #[must_use]
    pub fn with_dash_pattern(mut self, dash: DashPattern) -> Self {
        self.dash_pattern = Some(dash);
        self
    }

    #[must_use]
    pub fn with_horizontal_orientation(mut self, horizontal: bool) -> Self {
        self.horizontal_orientation = Some(horizontal);
        self
    }

    #[must_use]
    pub fn with_color_palette(mut self, palette: impl Into<Vec<Color>>) -> Self {
        self.color_palette = Some(palette.into());
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Resolves every field against `kind`'s defaults.
    ///
    /// Unset width/height fall back to the surface size.
    pub fn resolve(&self, kind: ChartKind, surface: Viewport) -> ChartResult<ResolvedChartOptions> {
        let defaults = ChartDefaults::for_kind(kind);

        let fill_color = self.fill_color.unwrap_or(defaults.fill_color);
        let color_palette = match &self.color_palette {
            Some(colors) => colors.clone(),
            None if defaults.palette.is_empty() => vec![fill_color],
            None => defaults.palette.to_vec(),
        };

        let resolved = ResolvedChartOptions {
            kind,
            width: self.width.unwrap_or_else(|| f64::from(surface.width)),
            height: self.height.unwrap_or_else(|| f64::from(surface.height)),
            padding: self.padding.unwrap_or(defaults.padding),
            value_min: self.value_min.unwrap_or(defaults.value_min),
            value_max: self.value_max.or(defaults.value_max),
            stroke_color: self.stroke_color.unwrap_or(defaults.stroke_color),
            stroke_width: self.stroke_width.unwrap_or(defaults.stroke_width),
            fill_color,
            band_fill_color: self.band_fill_color.unwrap_or(defaults.band_fill_color),
            show_grid: self.show_grid.unwrap_or(defaults.show_grid),
            clear_surface_first: self.clear_surface_first.unwrap_or(true),
            dash_pattern: self.dash_pattern.clone().unwrap_or_default(),
            horizontal_orientation: self.horizontal_orientation.unwrap_or(false),
            color_palette,
            labels: self.labels.clone().unwrap_or_default(),
        };
        resolved.validate()?;
        Ok(resolved)
    }
}

/// Kind-specific default policy, kept in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDefaults {
    pub padding: f64,
    pub value_min: f64,
    pub value_max: Option<f64>,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill_color: Color,
    pub band_fill_color: Color,
    pub show_grid: bool,
    /// Empty means "one color: the resolved fill color".
    pub palette: &'static [Color],
}

const BASE_DEFAULTS: ChartDefaults = ChartDefaults {
    padding: 28.0,
    value_min: 0.0,
    value_max: None,
    stroke_color: palette::PRIMARY_PURPLE,
    stroke_width: 2.0,
    fill_color: palette::PRIMARY_PURPLE,
    band_fill_color: palette::BAND_FILL,
    show_grid: true,
    palette: &[],
};

impl ChartDefaults {
    #[must_use]
    pub const fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => BASE_DEFAULTS,
            ChartKind::Area => ChartDefaults {
                stroke_width: 1.5,
                fill_color: palette::AREA_FILL,
                ..BASE_DEFAULTS
            },
            ChartKind::Sparkline => ChartDefaults {
                padding: 8.0,
                fill_color: palette::SPARKLINE_FILL,
                show_grid: false,
                ..BASE_DEFAULTS
            },
            ChartKind::Bar => ChartDefaults {
                fill_color: palette::LAVENDER,
                ..BASE_DEFAULTS
            },
            ChartKind::GroupedBar => ChartDefaults {
                palette: &palette::GROUPED_BAR_PALETTE,
                ..BASE_DEFAULTS
            },
            ChartKind::Doughnut => ChartDefaults {
                padding: 0.0,
                show_grid: false,
                palette: &palette::CATEGORY_PALETTE,
                ..BASE_DEFAULTS
            },
            ChartKind::Scatter => ChartDefaults {
                padding: 8.0,
                show_grid: false,
                ..BASE_DEFAULTS
            },
            ChartKind::Heatmap => ChartDefaults {
                value_max: Some(100.0),
                ..BASE_DEFAULTS
            },
            ChartKind::Treemap => ChartDefaults {
                padding: 16.0,
                show_grid: false,
                ..BASE_DEFAULTS
            },
        }
    }
}

/// Fully resolved configuration for one draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedChartOptions {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub value_min: f64,
    /// `None` derives the maximum from the data with the 1.2 headroom rule.
    pub value_max: Option<f64>,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill_color: Color,
    pub band_fill_color: Color,
    pub show_grid: bool,
    pub clear_surface_first: bool,
    pub dash_pattern: DashPattern,
    pub horizontal_orientation: bool,
    pub color_palette: Vec<Color>,
    pub labels: Vec<String>,
}

impl ResolvedChartOptions {
    fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.value_min.is_finite() || self.value_max.is_some_and(|max| !max.is_finite()) {
            return Err(ChartError::InvalidData(
                "value range bounds must be finite".to_owned(),
            ));
        }
        if let Some(max) = self.value_max {
            AxisRange::new(self.value_min, max)?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if self.color_palette.is_empty() {
            return Err(ChartError::InvalidData(
                "color palette must not be empty".to_owned(),
            ));
        }
        for color in [self.stroke_color, self.fill_color, self.band_fill_color]
            .iter()
            .chain(&self.color_palette)
        {
            color.validate()?;
        }
        self.dash_pattern.validate()
    }

    /// Plot area for this call. Fails when the padding leaves no inner area.
    pub fn plot_geometry(&self) -> ChartResult<PlotGeometry> {
        PlotGeometry::new(self.width, self.height, self.padding)
    }

    /// Value range for `values`: the configured minimum and either the
    /// configured maximum or `max(values) * 1.2`.
    pub fn value_range(&self, values: &[f64]) -> ChartResult<AxisRange> {
        AxisRange::derive(self.kind.name(), values, Some(self.value_min), self.value_max)
    }

    /// Palette color for item `index`, cycling through the palette.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> Color {
        self.color_palette[index % self.color_palette.len()]
    }

    /// Configured label for item `index`, or `Client <index + 1>`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Client {}", index + 1))
    }
}
