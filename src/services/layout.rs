//! Static chart layouts.
//!
//! Hand-tuned label coordinates for the two chart topologies, in PDF
//! point space (origin bottom-left, A4 page). These tables are literal
//! constants; the same house always gets the same anchor point.

use crate::models::ChartStyle;

/// Left edge of the chart square, in points.
pub const CHART_X0: f64 = 220.0;
/// Bottom edge of the chart square, in points.
pub const CHART_Y0: f64 = 420.0;
/// Side length of the chart square, in points.
pub const CHART_SIZE: f64 = 260.0;

const BOX_W: f64 = CHART_SIZE / 3.0;
const BOX_H: f64 = CHART_SIZE / 4.0;

/// Label anchor points per house (index 0 = house 1) for the North
/// Indian diamond layout.
const NORTH_CENTERS: [(f64, f64); 12] = [
    (CHART_X0 + CHART_SIZE / 2.0, CHART_Y0 + 8.0),
    (CHART_X0 + CHART_SIZE - 20.0, CHART_Y0 + CHART_SIZE / 4.0 + 8.0),
    (CHART_X0 + CHART_SIZE - 30.0, CHART_Y0 + 3.0 * CHART_SIZE / 4.0 - 12.0),
    (CHART_X0 + CHART_SIZE / 2.0, CHART_Y0 + CHART_SIZE - 8.0),
    (CHART_X0 + 12.0, CHART_Y0 + 3.0 * CHART_SIZE / 4.0 - 12.0),
    (CHART_X0 + 12.0, CHART_Y0 + CHART_SIZE / 4.0 + 8.0),
    (CHART_X0 + CHART_SIZE / 2.0, CHART_Y0 + CHART_SIZE / 2.0),
    (CHART_X0 + CHART_SIZE / 4.0 - 8.0, CHART_Y0 + CHART_SIZE / 2.0),
    (CHART_X0 + 3.0 * CHART_SIZE / 4.0 + 10.0, CHART_Y0 + CHART_SIZE / 2.0),
    (CHART_X0 + CHART_SIZE / 4.0 - 8.0, CHART_Y0 + 3.0 * CHART_SIZE / 4.0 - 8.0),
    (CHART_X0 + 3.0 * CHART_SIZE / 4.0 + 10.0, CHART_Y0 + 3.0 * CHART_SIZE / 4.0 - 8.0),
    (CHART_X0 + CHART_SIZE / 4.0 - 8.0, CHART_Y0 + CHART_SIZE / 4.0 + 8.0),
];

/// Label anchor points per house for the South Indian grid layout.
const SOUTH_CENTERS: [(f64, f64); 12] = [
    (CHART_X0 + BOX_W, CHART_Y0 + 5.0),
    (CHART_X0 + 2.0 * BOX_W, CHART_Y0 + 5.0),
    (CHART_X0 + 2.0 * BOX_W, CHART_Y0 + BOX_H + 5.0),
    (CHART_X0 + 2.0 * BOX_W, CHART_Y0 + 2.0 * BOX_H + 5.0),
    (CHART_X0 + 2.0 * BOX_W, CHART_Y0 + 3.0 * BOX_H + 5.0),
    (CHART_X0 + BOX_W, CHART_Y0 + 3.0 * BOX_H + 5.0),
    (CHART_X0 + 5.0, CHART_Y0 + 3.0 * BOX_H + 5.0),
    (CHART_X0 + 5.0, CHART_Y0 + 2.0 * BOX_H + 5.0),
    (CHART_X0 + 5.0, CHART_Y0 + BOX_H + 5.0),
    (CHART_X0 + 5.0, CHART_Y0 + 5.0),
    (CHART_X0 + BOX_W, CHART_Y0 + BOX_H + 5.0),
    (CHART_X0 + 2.0 * BOX_W, CHART_Y0 + BOX_H + 5.0),
];

/// Label anchor point for a house (1..=12) in the given style.
pub fn house_center(style: ChartStyle, house: u8) -> (f64, f64) {
    debug_assert!((1..=12).contains(&house));
    let idx = usize::from(house - 1) % 12;
    match style {
        ChartStyle::North => NORTH_CENTERS[idx],
        ChartStyle::South => SOUTH_CENTERS[idx],
    }
}

/// Horizontal offset from the anchor at which labels start.
pub fn label_x_offset(style: ChartStyle) -> f64 {
    match style {
        ChartStyle::North => -20.0,
        ChartStyle::South => -15.0,
    }
}

/// Vertical offset of the i-th stacked label below its anchor.
pub fn label_y_offset(stack_index: usize) -> f64 {
    -6.0 - 12.0 * stack_index as f64
}

/// Inner grid line segments for the style, as ((x1, y1), (x2, y2)).
/// The outer square is drawn separately.
pub fn grid_segments(style: ChartStyle) -> Vec<((f64, f64), (f64, f64))> {
    let (x0, y0, size) = (CHART_X0, CHART_Y0, CHART_SIZE);
    match style {
        // Diamond connecting the four edge midpoints.
        ChartStyle::North => vec![
            ((x0, y0 + size / 2.0), (x0 + size / 2.0, y0 + size)),
            ((x0 + size / 2.0, y0 + size), (x0 + size, y0 + size / 2.0)),
            ((x0 + size, y0 + size / 2.0), (x0 + size / 2.0, y0)),
            ((x0 + size / 2.0, y0), (x0, y0 + size / 2.0)),
        ],
        // 3x4 grid: two vertical and three horizontal inner lines.
        ChartStyle::South => {
            let mut segments = Vec::with_capacity(5);
            for i in 1..3 {
                let x = x0 + f64::from(i) * BOX_W;
                segments.push(((x, y0), (x, y0 + size)));
            }
            for j in 1..4 {
                let y = y0 + f64::from(j) * BOX_H;
                segments.push(((x0, y), (x0 + size, y)));
            }
            segments
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_are_deterministic() {
        for style in [ChartStyle::North, ChartStyle::South] {
            for house in 1..=12 {
                assert_eq!(house_center(style, house), house_center(style, house));
            }
        }
    }

    #[test]
    fn test_anchors_inside_chart_frame() {
        for style in [ChartStyle::North, ChartStyle::South] {
            for house in 1..=12 {
                let (x, y) = house_center(style, house);
                assert!(
                    (CHART_X0..=CHART_X0 + CHART_SIZE).contains(&x),
                    "{:?} house {} x {}",
                    style,
                    house,
                    x
                );
                assert!(
                    (CHART_Y0..=CHART_Y0 + CHART_SIZE).contains(&y),
                    "{:?} house {} y {}",
                    style,
                    house,
                    y
                );
            }
        }
    }

    #[test]
    fn test_north_house_one_at_bottom_center() {
        let (x, y) = house_center(ChartStyle::North, 1);
        assert_eq!(x, CHART_X0 + CHART_SIZE / 2.0);
        assert_eq!(y, CHART_Y0 + 8.0);
    }

    #[test]
    fn test_stack_offsets_descend() {
        assert_eq!(label_y_offset(0), -6.0);
        assert_eq!(label_y_offset(1), -18.0);
        assert!(label_y_offset(2) < label_y_offset(1));
    }

    #[test]
    fn test_grid_segment_counts() {
        assert_eq!(grid_segments(ChartStyle::North).len(), 4);
        assert_eq!(grid_segments(ChartStyle::South).len(), 5);
    }
}
