//! Immutable dashboard colors.

use super::Color;

/// `#6b5b95`, default stroke for lines, areas and scatter markers.
pub const PRIMARY_PURPLE: Color = Color::rgb8(107, 91, 149);
/// `#88a1ff`, secondary series color.
pub const ALT_BLUE: Color = Color::rgb8(136, 161, 255);
/// `#b492f0`, default bar fill.
pub const LAVENDER: Color = Color::rgb8(180, 146, 240);
/// `#eceaf6`, reference grid lines.
pub const GRID_LINE: Color = Color::rgb8(236, 234, 246);
/// `#4b4f74`, in-plot label text.
pub const LABEL_SLATE: Color = Color::rgb8(75, 79, 116);

pub const BAND_FILL: Color = Color::rgba8(140, 120, 210, 0.18);
pub const AREA_FILL: Color = Color::rgba8(180, 146, 240, 0.35);
pub const SPARKLINE_FILL: Color = Color::rgba8(107, 91, 149, 0.3);

/// Default palette for grouped bars.
pub const GROUPED_BAR_PALETTE: [Color; 2] = [PRIMARY_PURPLE, ALT_BLUE];
/// Default palette for doughnut wedges.
pub const CATEGORY_PALETTE: [Color; 5] = [
    PRIMARY_PURPLE,
    ALT_BLUE,
    LAVENDER,
    Color::rgb8(140, 120, 210),
    LABEL_SLATE,
];
