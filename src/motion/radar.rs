use std::f64::consts::TAU;

/// One full revolution of the radar sweep. Both the cell delays and the
/// generated sweep keyframes read this value.
pub const SWEEP_PERIOD_SECS: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarGrid {
    pub rows: u32,
    pub cols: u32,
}

impl RadarGrid {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    fn cell_count(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    fn center(&self) -> (f64, f64) {
        (
            (self.rows.saturating_sub(1)) as f64 / 2.0,
            (self.cols.saturating_sub(1)) as f64 / 2.0,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarCell {
    pub row: u32,
    pub col: u32,
    pub angle_fraction: f64,
    pub delay_secs: f64,
    pub highlighted: bool,
}

impl RadarCell {
    /// Negative animation-delay so the pulse is already mid-cycle when the
    /// page paints and lines up with the running sweep.
    pub fn css_delay_secs(&self, period: f64) -> f64 {
        -(period - self.delay_secs)
    }
}

/// Clockwise angle of a cell around the grid centre as a fraction of a turn,
/// 0 at twelve o'clock. `None` for the centre itself.
pub fn angle_fraction(grid: RadarGrid, row: u32, col: u32) -> Option<f64> {
    let (center_row, center_col) = grid.center();
    let dx = col as f64 - center_col;
    let dy = row as f64 - center_row;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    // Rows grow downwards, so "up" is -dy.
    let fraction = dx.atan2(-dy).rem_euclid(TAU) / TAU;
    Some(if fraction >= 1.0 { 0.0 } else { fraction })
}

pub fn sweep_delay(angle_fraction: f64, period: f64) -> f64 {
    let delay = angle_fraction * period;
    if delay >= period {
        0.0
    } else {
        delay
    }
}

/// Lays out every non-centre cell with its pulse delay. Cells listed in
/// `priority` are highlighted.
pub fn layout(grid: RadarGrid, priority: &[(u32, u32)], period: f64) -> Vec<RadarCell> {
    let mut cells = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let Some(angle_fraction) = angle_fraction(grid, row, col) else {
                continue;
            };
            cells.push(RadarCell {
                row,
                col,
                angle_fraction,
                delay_secs: sweep_delay(angle_fraction, period),
                highlighted: priority.contains(&(row, col)),
            });
        }
    }
    cells
}

/// Sweep keyframes and pulse animation, stamped with the shared period.
pub fn sweep_css(period: f64) -> String {
    format!(
        r#"
.radar-sweep {{
    animation: radar-rotate {period}s linear infinite;
}}
.radar-sweep.paused, .radar-cell.paused {{
    animation-play-state: paused;
}}
.radar-cell.highlighted {{
    animation: radar-pulse {period}s linear infinite;
}}
@keyframes radar-rotate {{
    from {{ transform: rotate(0deg); }}
    to {{ transform: rotate(360deg); }}
}}
@keyframes radar-pulse {{
    0% {{ background: rgba(126, 178, 255, 0.9); box-shadow: 0 0 12px rgba(126, 178, 255, 0.8); }}
    20% {{ background: rgba(126, 178, 255, 0.35); box-shadow: none; }}
    100% {{ background: rgba(126, 178, 255, 0.1); }}
}}
"#,
        period = period
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_directions() {
        let grid = RadarGrid::new(5, 5);
        assert_eq!(angle_fraction(grid, 0, 2), Some(0.0));
        assert!((angle_fraction(grid, 2, 4).unwrap() - 0.25).abs() < 1e-12);
        assert!((angle_fraction(grid, 4, 2).unwrap() - 0.5).abs() < 1e-12);
        assert!((angle_fraction(grid, 2, 0).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn center_is_excluded() {
        let grid = RadarGrid::new(7, 7);
        assert_eq!(angle_fraction(grid, 3, 3), None);
        let cells = layout(grid, &[], SWEEP_PERIOD_SECS);
        assert_eq!(cells.len(), 48);
        assert!(!cells.iter().any(|c| c.row == 3 && c.col == 3));
    }

    #[test]
    fn delays_fall_within_one_period() {
        for (rows, cols) in [(3, 3), (4, 6), (7, 7), (9, 5), (1, 8)] {
            for period in [0.5, 2.0, SWEEP_PERIOD_SECS, 11.0] {
                for cell in layout(RadarGrid::new(rows, cols), &[], period) {
                    assert!(cell.delay_secs >= 0.0 && cell.delay_secs < period);
                    let css = cell.css_delay_secs(period);
                    assert!(css <= 0.0 && css >= -period);
                }
            }
        }
    }

    #[test]
    fn equal_angles_share_a_delay() {
        let grid = RadarGrid::new(7, 7);
        let cells = layout(grid, &[], SWEEP_PERIOD_SECS);
        let find = |r, c| cells.iter().find(|cell| cell.row == r && cell.col == c).unwrap();
        // Both on the north-east diagonal
        assert_eq!(find(2, 4).delay_secs, find(0, 6).delay_secs);
        assert_eq!(find(1, 3).delay_secs, find(0, 3).delay_secs);
    }

    #[test]
    fn priority_cells_are_highlighted() {
        let priority = [(0, 0), (6, 5)];
        let cells = layout(RadarGrid::new(7, 7), &priority, SWEEP_PERIOD_SECS);
        let highlighted: Vec<_> = cells.iter().filter(|c| c.highlighted).map(|c| (c.row, c.col)).collect();
        assert_eq!(highlighted, vec![(0, 0), (6, 5)]);
    }

    #[test]
    fn cell_count_does_not_overflow_for_huge_grids() {
        assert_eq!(RadarGrid::new(7, 7).cell_count(), 49);
        assert!(RadarGrid::new(65_536, 65_536).cell_count() >= u32::MAX as usize);
        assert_eq!(RadarGrid::new(0, 9).cell_count(), 0);
    }

    #[test]
    fn css_uses_shared_period() {
        let css = sweep_css(SWEEP_PERIOD_SECS);
        assert!(css.contains("radar-rotate 4s"));
        assert!(css.contains("radar-pulse 4s"));
    }
}
