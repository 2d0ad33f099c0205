use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DashPattern, DrawingSurface, Font};

/// One drawing call captured by `RecordingSurface`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    StrokePath {
        points: Vec<PixelPoint>,
        color: Color,
        width: f64,
        dash: DashPattern,
    },
    FillPath {
        points: Vec<PixelPoint>,
        color: Color,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    FillArcSegment {
        center: PixelPoint,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    },
    DrawText {
        text: String,
        x: f64,
        y: f64,
        font: Font,
        color: Color,
        alpha: f64,
    },
}

/// Headless surface that records every call.
///
/// `clear` discards previously recorded commands, so the log always describes
/// what is visible on the surface. Every command is validated on arrival, so
/// non-finite geometry surfaces as an error instead of being recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rectangles recorded by `fill_rect`, as `(x, y, width, height, color)`.
    #[must_use]
    pub fn filled_rects(&self) -> Vec<(f64, f64, f64, f64, Color)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => Some((*x, *y, *width, *height, *color)),
                _ => None,
            })
            .collect()
    }

    /// Paths recorded by `stroke_path`.
    #[must_use]
    pub fn stroked_paths(&self) -> Vec<&[PixelPoint]> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::StrokePath { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Texts recorded by `draw_text`.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.commands).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize draw commands: {e}"))
        })
    }

    fn record(&mut self, command: DrawCommand) -> ChartResult<()> {
        validate_command(&command)?;
        self.commands.push(command);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, width: f64, height: f64) -> ChartResult<()> {
        ensure_finite(&[width, height], "clear extent")?;
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn stroke_path(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        width: f64,
        dash: &DashPattern,
    ) -> ChartResult<()> {
        self.record(DrawCommand::StrokePath {
            points: points.to_vec(),
            color,
            width,
            dash: dash.clone(),
        })
    }

    fn fill_path(&mut self, points: &[PixelPoint], color: Color) -> ChartResult<()> {
        self.record(DrawCommand::FillPath {
            points: points.to_vec(),
            color,
        })
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> ChartResult<()> {
        self.record(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        })
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
        self.record(DrawCommand::FillArcSegment {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            color,
        })
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
        self.record(DrawCommand::DrawText {
            text: text.to_owned(),
            x,
            y,
            font: font.clone(),
            color,
            alpha,
        })
    }
}

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_points(points: &[PixelPoint], what: &str) -> ChartResult<()> {
    if points.is_empty() {
        return Err(ChartError::InvalidData(format!("{what} must not be empty")));
    }
    if points.iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

fn validate_command(command: &DrawCommand) -> ChartResult<()> {
    match command {
        DrawCommand::Clear { width, height } => ensure_finite(&[*width, *height], "clear extent"),
        DrawCommand::StrokePath {
            points,
            color,
            width,
            dash,
        } => {
            ensure_points(points, "stroke path")?;
            if !width.is_finite() || *width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "stroke width must be finite and > 0".to_owned(),
                ));
            }
            dash.validate()?;
            color.validate()
        }
        DrawCommand::FillPath { points, color } => {
            ensure_points(points, "fill path")?;
            color.validate()
        }
        DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            ensure_finite(&[*x, *y, *width, *height], "rectangle")?;
            color.validate()
        }
        DrawCommand::FillArcSegment {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            color,
        } => {
            ensure_finite(
                &[
                    center.x,
                    center.y,
                    *inner_radius,
                    *outer_radius,
                    *start_angle,
                    *end_angle,
                ],
                "arc segment",
            )?;
            if *inner_radius < 0.0 || inner_radius > outer_radius {
                return Err(ChartError::InvalidData(
                    "arc radii must satisfy 0 <= inner <= outer".to_owned(),
                ));
            }
            color.validate()
        }
        DrawCommand::DrawText {
            text,
            x,
            y,
            font,
            color,
            alpha,
        } => {
            if text.is_empty() {
                return Err(ChartError::InvalidData(
                    "text must not be empty".to_owned(),
                ));
            }
            ensure_finite(&[*x, *y], "text position")?;
            if !alpha.is_finite() || !(0.0..=1.0).contains(alpha) {
                return Err(ChartError::InvalidData(
                    "text alpha must be finite and in [0, 1]".to_owned(),
                ));
            }
            font.validate()?;
            color.validate()
        }
    }
}
