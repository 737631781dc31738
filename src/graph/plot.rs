//! ASCII line plot with a labeled left axis.
//!
//! Layout follows the familiar `asciigraph` look:
//!
//! ```text
//!  3.00 ┼╮
//!  2.00 ┤│
//!  1.00 ┤╰
//! ```
//!
//! The vertical range is scaled so `max - min` spans `height` rows. Each
//! column after the axis is one step between consecutive samples. Non-finite
//! samples leave a gap.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]

/// Rendering knobs for [`plot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    /// Target number of row steps between min and max.
    pub height: usize,
    /// Columns reserved left of the first sample for the label and axis.
    pub offset: usize,
    /// Base number of decimals in axis labels.
    pub precision: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            height: 10,
            offset: 3,
            precision: 2,
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn with_height(height: usize) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }
}

const AXIS: &str = "┤";
const AXIS_ORIGIN: &str = "┼";
const FLAT: &str = "─";
const DOWN_FROM: &str = "╮";
const DOWN_TO: &str = "╰";
const UP_FROM: &str = "╯";
const UP_TO: &str = "╭";
const VERTICAL: &str = "│";
const GAP_AFTER: &str = "╴";
const GAP_BEFORE: &str = "╶";
const BLANK: &str = " ";

/// Render `series` as a multi-line plot.
///
/// Returns an empty string when the series has no finite values. The result
/// has no trailing newline and no trailing spaces on any line.
#[must_use]
pub fn plot(series: &[f64], options: &PlotOptions) -> String {
    let Some((minimum, maximum)) = finite_bounds(series) else {
        return String::new();
    };

    let height = options.height.max(1);
    let offset = if options.offset == 0 { 3 } else { options.offset };
    let interval = (maximum - minimum).abs();
    let ratio = if interval == 0.0 {
        1.0
    } else {
        height as f64 / interval
    };
    let min_scaled = (minimum * ratio).round();
    let max_scaled = (maximum * ratio).round();
    let rows = (max_scaled - min_scaled).abs() as usize;
    let width = series.len() + offset;

    let mut grid: Vec<Vec<String>> = vec![vec![BLANK.to_string(); width]; rows + 1];

    let precision = label_precision(minimum, maximum, options.precision);
    let label_width = format!("{maximum:.precision$}")
        .len()
        .max(format!("{minimum:.precision$}").len())
        + 1;

    for (row, cells) in grid.iter_mut().enumerate() {
        let magnitude = if rows > 0 {
            maximum - (row as f64 * interval / rows as f64)
        } else {
            maximum
        };
        let label = format!("{magnitude:>label_width$.precision$}");
        let at = offset.saturating_sub(label.len());
        cells[at] = label;
        cells[offset - 1] = AXIS.to_string();
    }

    let level = |value: f64| ((value * ratio).round() - min_scaled) as usize;
    let mut put = |y: usize, x: usize, glyph: &str| grid[rows - y][x] = glyph.to_string();

    if let Some(&first) = series.first()
        && first.is_finite()
    {
        put(level(first), offset - 1, AXIS_ORIGIN);
    }

    for (x, pair) in series.windows(2).enumerate() {
        let (d0, d1) = (pair[0], pair[1]);
        let col = x + offset;
        match (d0.is_finite(), d1.is_finite()) {
            (false, false) => {}
            (true, false) => put(level(d0), col, GAP_AFTER),
            (false, true) => put(level(d1), col, GAP_BEFORE),
            (true, true) => {
                let (y0, y1) = (level(d0), level(d1));
                if y0 == y1 {
                    put(y0, col, FLAT);
                    continue;
                }
                if y0 > y1 {
                    put(y1, col, DOWN_TO);
                    put(y0, col, DOWN_FROM);
                } else {
                    put(y1, col, UP_TO);
                    put(y0, col, UP_FROM);
                }
                for y in y0.min(y1) + 1..y0.max(y1) {
                    put(y, col, VERTICAL);
                }
            }
        }
    }

    let mut out = String::new();
    for (i, cells) in grid.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let last = cells.iter().rposition(|c| c != BLANK).unwrap_or(0);
        for cell in &cells[..=last] {
            out.push_str(cell);
        }
    }
    out
}

fn finite_bounds(series: &[f64]) -> Option<(f64, f64)> {
    series
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Decimals shown in axis labels.
///
/// Small magnitudes gain one decimal per leading fractional zero; anything
/// above 100 is shown without decimals.
fn label_precision(minimum: f64, maximum: f64, base: usize) -> usize {
    let log_max = if minimum == 0.0 && maximum == 0.0 {
        -1.0
    } else {
        minimum.abs().max(maximum.abs()).log10()
    };

    if log_max < 0.0 {
        if log_max % 1.0 == 0.0 {
            base + (log_max.abs() - 1.0) as usize
        } else {
            base + log_max.abs() as usize
        }
    } else if log_max > 2.0 {
        0
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(series: &[f64], height: usize) -> String {
        plot(series, &PlotOptions::with_height(height))
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert_eq!(render(&[], 10), "");
        assert_eq!(render(&[f64::NAN], 10), "");
    }

    #[test]
    fn single_point_is_origin_on_axis() {
        assert_eq!(render(&[1.0], 10), " 1.00 ┼");
    }

    #[test]
    fn repeated_values_draw_flat_line() {
        assert_eq!(render(&[1.0, 1.0], 10), " 1.00 ┼─");
        assert_eq!(render(&[1.0, 1.0, 1.0, 1.0], 10), " 1.00 ┼───");
    }

    #[test]
    fn flat_series_labels_actual_value() {
        assert_eq!(render(&[1.4, 1.4], 10), " 1.40 ┼─");
    }

    #[test]
    fn rising_step() {
        assert_eq!(render(&[1.0, 2.0], 1), " 2.00 ┤╭\n 1.00 ┼╯");
    }

    #[test]
    fn falling_step_with_vertical_run() {
        assert_eq!(
            render(&[3.0, 1.0], 2),
            " 3.00 ┼╮\n 2.00 ┤│\n 1.00 ┤╰"
        );
    }

    #[test]
    fn zero_uses_default_precision() {
        assert_eq!(render(&[0.0], 10), " 0.00 ┼");
    }

    #[test]
    fn small_values_gain_precision() {
        assert_eq!(render(&[0.05], 10), " 0.050 ┼");
    }

    #[test]
    fn large_values_drop_decimals() {
        assert_eq!(render(&[1000.0], 10), " 1000 ┼");
    }

    #[test]
    fn height_controls_row_count() {
        let out = render(&[1.0, 2.0, 3.0, 4.0], 10);
        assert_eq!(out.lines().count(), 11);
        assert!(out.lines().next().unwrap().starts_with(" 4.00 ┤"));
        assert!(out.lines().last().unwrap().starts_with(" 1.00 ┼"));
    }

    #[test]
    fn negative_range_widens_labels() {
        let out = render(&[-5.0, 5.0], 10);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("  5.00 ┤"), "{out}");
        assert!(lines[10].starts_with(" -5.00 ┼"), "{out}");
    }

    #[test]
    fn gaps_around_non_finite_samples() {
        let out = render(&[1.0, f64::NAN, 1.0], 10);
        assert_eq!(out, " 1.00 ┼╴╶");
    }

    #[test]
    fn lines_have_no_trailing_spaces() {
        let out = render(&[5.0, 1.0, 9.0, 2.0, 7.0], 10);
        for line in out.lines() {
            assert_eq!(line, line.trim_end());
        }
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn every_row_carries_an_axis_glyph() {
        let out = render(&[5.0, 1.0, 9.0, 2.0, 7.0], 10);
        for line in out.lines() {
            assert!(line.contains('┤') || line.contains('┼'), "{line}");
        }
    }

    #[test]
    fn label_precision_rules() {
        assert_eq!(label_precision(0.0, 0.0, 2), 2);
        assert_eq!(label_precision(1.0, 50.0, 2), 2);
        assert_eq!(label_precision(1.0, 500.0, 2), 0);
        assert_eq!(label_precision(0.001, 0.002, 2), 4);
    }
}
