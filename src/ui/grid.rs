//! Grid layout metrics

use cosmic::cosmic_theme;

/// Metrics for calculating responsive grid layouts
pub struct GridMetrics {
    pub cols: usize,
    pub item_width: usize,
    pub column_spacing: u16,
}

impl GridMetrics {
    pub fn new(width: usize, min_width: usize, column_spacing: u16) -> Self {
        let width_m1 = width.saturating_sub(min_width);
        let cols_m1 = width_m1 / (min_width + column_spacing as usize);
        let cols = cols_m1 + 1;
        let item_width = width
            .saturating_sub(cols_m1 * column_spacing as usize)
            .checked_div(cols)
            .unwrap_or(0);
        Self {
            cols,
            item_width,
            column_spacing,
        }
    }

    /// Metrics for the application tile grid
    pub fn tiles(spacing: &cosmic_theme::Spacing, width: usize) -> Self {
        Self::new(width, 280 + 2 * spacing.space_s as usize, spacing.space_xxs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_width_yields_single_column() {
        let metrics = GridMetrics::new(300, 280, 8);
        assert_eq!(metrics.cols, 1);
        assert_eq!(metrics.item_width, 300);
    }

    #[test]
    fn items_fill_available_width() {
        let metrics = GridMetrics::new(1200, 280, 8);
        assert!(metrics.cols > 1);
        let used = metrics.cols * metrics.item_width
            + (metrics.cols - 1) * metrics.column_spacing as usize;
        assert!(used <= 1200);
    }

    #[test]
    fn zero_width_does_not_panic() {
        let metrics = GridMetrics::new(0, 280, 8);
        assert_eq!(metrics.cols, 1);
        assert_eq!(metrics.item_width, 0);
    }
}
