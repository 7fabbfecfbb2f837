use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::Focus;
use super::layout::AppLayout;
use crate::models::PostOfficeRecord;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

const FOCUSED_BORDER: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ERROR_RED: Color = Color::Rgb(239, 68, 68);

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub pincode_input: &'a str,
    pub filter_input: &'a str,
    pub focus: Focus,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub visible: &'a [&'a PostOfficeRecord],
    pub total: usize,
    pub scroll: usize,
    pub spinner_frame: usize,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(
        frame,
        layout.pincode_area,
        " Pincode ",
        state.pincode_input,
        state.focus == Focus::Pincode,
    );
    render_input(
        frame,
        layout.filter_area,
        " Filter by name ",
        state.filter_input,
        state.focus == Focus::Filter,
    );
    render_message(frame, layout.message_area, state);
    render_results(frame, layout.results_area, state);
    render_status_bar(frame, layout.status_area, state);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_color = if focused { FOCUSED_BORDER } else { MUTED };

    // Cursor marker on the focused input
    let line = if focused {
        Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(BRIGHT)),
            Span::styled("█", Style::default().fg(FOCUSED_BORDER)),
        ])
    } else {
        Line::from(Span::raw(value.to_string()))
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}

/// One line below the inputs: the loader while a lookup is in flight,
/// otherwise the error text if any
fn render_message(frame: &mut Frame, area: Rect, state: &RenderState) {
    let line = if state.loading {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        Line::from(Span::styled(
            format!(" {} Looking up pincode...", spinner),
            Style::default().fg(FOCUSED_BORDER),
        ))
    } else if let Some(error) = state.error {
        Line::from(Span::styled(format!(" {}", error), Style::default().fg(ERROR_RED)))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" Post Offices ");

    // The list is only populated when no lookup is in flight and the
    // filtered view is non-empty
    if state.loading || state.visible.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let items: Vec<ListItem> = state
        .visible
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let style = if idx == state.scroll {
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(record_text(record)).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Labeled card for a single record
fn record_text(record: &PostOfficeRecord) -> Text<'static> {
    Text::from(vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(MUTED)),
            Span::raw(record.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Branch Type: ", Style::default().fg(MUTED)),
            Span::raw(record.branch_type.clone()),
            Span::styled("  Delivery Status: ", Style::default().fg(MUTED)),
            Span::raw(record.delivery_status.clone()),
        ]),
        Line::from(vec![
            Span::styled("  District: ", Style::default().fg(MUTED)),
            Span::raw(record.district.clone()),
            Span::styled("  Division: ", Style::default().fg(MUTED)),
            Span::raw(record.division.clone()),
        ]),
        Line::from(""),
    ])
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut parts = vec![];

    if state.total > 0 {
        if state.visible.len() < state.total {
            parts.push(format!("{}/{} post offices", state.visible.len(), state.total));
        } else {
            parts.push(format!("{} post offices", state.total));
        }
    } else {
        parts.push("No results yet".to_string());
    }

    parts.push("Tab: switch input".to_string());
    parts.push("Enter: lookup".to_string());
    parts.push("Esc: clear".to_string());
    parts.push("Ctrl+C: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(Color::Rgb(24, 24, 27)));

    frame.render_widget(paragraph, area);
}
