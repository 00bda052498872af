//! Rows of generated buttons laid out on the node grid.

use crate::config::GridConfig;
use crate::forest::{Forest, Node};
use crate::pages::hierarchy::HierarchyCursor;
use crate::ui::formatters::fit_width;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one button line.
const LINE_HEIGHT: u16 = 3;

/// One screen line of buttons: `(row index, nodes)`.
pub type ButtonLine<'a> = (usize, Vec<(usize, &'a Node)>);

/// Split every forest row into screen lines no wider than the grid.
///
/// A row whose widths overflow the grid continues on the next line. Nodes
/// keep their position within the row alongside the reference. Zero-width
/// nodes count as one unit so they stay visible.
pub fn wrap_rows<'a>(forest: &'a Forest, grid: &GridConfig) -> Vec<ButtonLine<'a>> {
    let total = u32::from(grid.total_width.max(1));
    let mut lines = Vec::new();

    for (row_idx, row) in forest.rows().iter().enumerate() {
        let mut line = Vec::new();
        let mut used = 0u32;
        for (pos, node) in row.iter().enumerate() {
            let w = effective_width(node);
            if used + w > total && !line.is_empty() {
                lines.push((row_idx, std::mem::take(&mut line)));
                used = 0;
            }
            line.push((pos, node));
            used += w;
        }
        if !line.is_empty() {
            lines.push((row_idx, line));
        }
    }

    lines
}

fn effective_width(node: &Node) -> u32 {
    u32::from(node.width.max(1))
}

/// Draw the forest inside `area`, scrolled so the cursor stays visible.
#[allow(clippy::too_many_arguments)]
pub fn draw_forest(
    f: &mut Frame<'_>,
    area: Rect,
    forest: &Forest,
    grid: &GridConfig,
    cursor: Option<HierarchyCursor>,
    caption: impl Fn(&Node) -> String,
    fill: impl Fn(&Node) -> usize,
    colors: &ThemeColors,
) {
    let lines = wrap_rows(forest, grid);
    if lines.is_empty() {
        let para = Paragraph::new("Nothing generated yet")
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    }

    let visible = (area.height / LINE_HEIGHT).max(1) as usize;
    let cursor_line = cursor
        .and_then(|c| {
            lines.iter().position(|(row, nodes)| {
                *row == c.row && nodes.iter().any(|(pos, _)| *pos == c.col)
            })
        })
        .unwrap_or(0);
    let start = (cursor_line + 1).saturating_sub(visible);

    let total = u32::from(grid.total_width.max(1));
    for (i, (row_idx, nodes)) in lines.iter().skip(start).take(visible).enumerate() {
        let line_area = Rect {
            x: area.x,
            y: area.y + i as u16 * LINE_HEIGHT,
            width: area.width,
            height: LINE_HEIGHT.min(area.height.saturating_sub(i as u16 * LINE_HEIGHT)),
        };

        let used: u32 = nodes.iter().map(|(_, n)| effective_width(n)).sum();
        let mut constraints: Vec<Constraint> = nodes
            .iter()
            .map(|(_, n)| Constraint::Ratio(effective_width(n), total.max(used)))
            .collect();
        if used < total {
            constraints.push(Constraint::Ratio(total - used, total));
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(line_area);

        for ((pos, node), cell) in nodes.iter().zip(cells.iter()) {
            let selected = cursor.is_some_and(|c| c.row == *row_idx && c.col == *pos);
            draw_button(f, *cell, &caption(node), fill(node), selected, colors);
        }
    }
}

/// Draw a single button.
pub fn draw_button(
    f: &mut Frame<'_>,
    area: Rect,
    caption: &str,
    fill: usize,
    selected: bool,
    colors: &ThemeColors,
) {
    let (bg, fg) = colors.button(fill);
    let border = if selected {
        Style::default().fg(colors.cursor_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(bg)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let mut style = Style::default().fg(fg).bg(bg);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    let para = Paragraph::new(fit_width(caption, inner_width))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(para, area);
}
