use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

use super::{ChartData, ChartKind, ChartOptions, draw};

/// A chart definition owned by the caller.
///
/// Holds kind, data and options only; the surface is supplied per draw, so a
/// handle can be redrawn onto any backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    kind: ChartKind,
    data: ChartData,
    options: ChartOptions,
}

impl ChartHandle {
    /// Creates a handle, rejecting data whose shape `kind` cannot draw.
    pub fn create(kind: ChartKind, data: ChartData, options: ChartOptions) -> ChartResult<Self> {
        kind.check_shape(&data)?;
        Ok(Self {
            kind,
            data,
            options,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Replaces the data. The previous data is kept when the shape is wrong.
    pub fn update_data(&mut self, data: ChartData) -> ChartResult<()> {
        self.kind.check_shape(&data)?;
        self.data = data;
        Ok(())
    }

    pub fn update_options(&mut self, options: ChartOptions) {
        self.options = options;
    }

    pub fn resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        self.options.width = Some(width);
        self.options.height = Some(height);
        Ok(())
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        draw(self.kind, surface, &self.data, &self.options)
    }
}
