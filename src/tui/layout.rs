use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical form layout
pub struct AppLayout {
    pub pincode_area: Rect,
    pub filter_area: Rect,
    pub message_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the form layout, top to bottom:
    /// - Pincode input: 3 rows (bordered)
    /// - Filter input: 3 rows (bordered)
    /// - Message line: loader / error text, 1 row
    /// - Results list: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Pincode input
                Constraint::Length(3), // Filter input
                Constraint::Length(1), // Message line
                Constraint::Min(3),    // Results (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            pincode_area: chunks[0],
            filter_area: chunks[1],
            message_area: chunks[2],
            results_area: chunks[3],
            status_area: chunks[4],
        }
    }
}
