//! Chart rendering.

use crate::chart::{
    grid_range, quantize, series_bounds, ChartData, ChartKind, ChartSpec, ColorPalette, Series,
};
use crate::config::{HeatmapLayoutConfig, PlotLayoutConfig};
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use ndarray::Array2;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Options for point charts beyond the data itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesView {
    /// Fixed x-range instead of the data bounds.
    pub x_bounds: Option<[f64; 2]>,
    /// Point to mark with a cursor.
    pub highlight: Option<(f64, f64)>,
}

/// Draw any chart spec.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    spec: &ChartSpec,
    palette: ColorPalette,
    plot: &PlotLayoutConfig,
    heatmap: &HeatmapLayoutConfig,
    colors: &ThemeColors,
) {
    match (&spec.data, spec.kind) {
        (ChartData::Series(series), kind) => draw_series(
            f,
            area,
            &spec.title,
            series,
            kind,
            SeriesView::default(),
            palette,
            plot,
            colors,
        ),
        (ChartData::Grid(grid), ChartKind::Contour { levels }) => {
            draw_grid(f, area, &spec.title, grid, Some(levels), None, palette, heatmap, colors)
        },
        (ChartData::Grid(grid), _) => {
            draw_grid(f, area, &spec.title, grid, None, None, palette, heatmap, colors)
        },
    }
}

fn titled_block<'a>(title: String, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(title)
        .title_style(Style::default().fg(colors.heading))
}

fn draw_empty(f: &mut Frame<'_>, area: Rect, title: &str, colors: &ThemeColors) {
    let para = Paragraph::new("No valid data to display")
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center)
        .block(titled_block(format!(" {} ", title), colors));
    f.render_widget(para, area);
}

/// Draw point series as a scatter or line chart.
#[allow(clippy::too_many_arguments)]
pub fn draw_series(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    series: &[Series],
    kind: ChartKind,
    view: SeriesView,
    palette: ColorPalette,
    plot: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let Some((data_x, [y_min, y_max])) = series_bounds(series, plot.y_axis_padding_factor) else {
        draw_empty(f, area, title, colors);
        return;
    };
    let [x_min, x_max] = view.x_bounds.unwrap_or(data_x);

    let graph_type = match kind {
        ChartKind::Line => GraphType::Line,
        _ => GraphType::Scatter,
    };
    let marker = match kind {
        ChartKind::Line => Marker::Braille,
        _ => Marker::Dot,
    };

    let cursor = view.highlight.map(|p| [p]);
    let n = series.len().max(2) - 1;
    let mut datasets: Vec<Dataset<'_>> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(palette.color(0.2 + 0.6 * i as f64 / n as f64)))
                .data(&s.points)
        })
        .collect();

    if let Some(point) = &cursor {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.cursor_bg).add_modifier(Modifier::BOLD))
                .data(point),
        );
    }

    let x_axis = Axis::default()
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(titled_block(format!(" {} ", title), colors))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Draw a grid as a dense heatmap, or as bands when `levels` is set.
#[allow(clippy::too_many_arguments)]
pub fn draw_grid(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    data: &Array2<f64>,
    levels: Option<usize>,
    units: Option<&str>,
    palette: ColorPalette,
    cfg: &HeatmapLayoutConfig,
    colors: &ThemeColors,
) {
    let (rows, cols) = data.dim();
    let Some((min_val, max_val)) = grid_range(data).filter(|_| rows > 0 && cols > 0) else {
        draw_empty(f, area, title, colors);
        return;
    };
    let range = max_val - min_val;

    let block = titled_block(format!(" {} | {} ", title, palette.name()), colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let left_margin = cfg.left_margin.min(inner.width / 2);
    let heatmap_area = Rect {
        x: inner.x + left_margin,
        y: inner.y + 1,
        width: inner.width.saturating_sub(left_margin),
        height: inner.height.saturating_sub(2),
    };

    let shade = |t: f64| match levels {
        Some(l) => palette.color(quantize(t, l)),
        None => palette.color(t),
    };

    // Colorbar with min/max labels on the first line.
    let colorbar_width = cfg
        .colorbar_width
        .min((inner.width as usize).saturating_sub(20))
        .max(1);
    let colorbar_start = heatmap_area.x
        + ((heatmap_area.width as usize).saturating_sub(colorbar_width)) as u16 / 2;
    let right = inner.x + inner.width;

    for i in 0..colorbar_width {
        let x = colorbar_start + i as u16;
        if x < right {
            if let Some(cell) = f.buffer_mut().cell_mut((x, inner.y)) {
                cell.set_char('█').set_fg(shade(i as f64 / colorbar_width as f64));
            }
        }
    }

    let min_label = format_axis_label(min_val);
    let mut max_label = format_axis_label(max_val);
    if let Some(u) = units {
        max_label = format!("{} [{}]", max_label, u);
    }
    let min_x = colorbar_start.saturating_sub(min_label.len() as u16 + 1);
    put_str(f, min_x, inner.y, &min_label, right, colors.label);
    put_str(f, colorbar_start + colorbar_width as u16 + 1, inner.y, &max_label, right, colors.label);

    let pixel_width = cfg.pixel_width.max(1);
    let max_h = heatmap_area.height as usize;
    let max_w = heatmap_area.width as usize / pixel_width;
    if max_h == 0 || max_w == 0 {
        return;
    }

    let disp_rows = rows.min(max_h);
    let disp_cols = cols.min(max_w);
    let row_step = rows as f64 / disp_rows as f64;
    let col_step = cols as f64 / disp_cols as f64;
    let offset_x = (((max_w - disp_cols) * pixel_width) / 2) as u16;

    for y in 0..disp_rows {
        let row_idx = ((y as f64 * row_step).floor() as usize).min(rows - 1);
        for px in 0..disp_cols {
            let col_idx = ((px as f64 * col_step).floor() as usize).min(cols - 1);
            let val = data[[row_idx, col_idx]];
            for i in 0..pixel_width {
                let screen_x = heatmap_area.x + offset_x + (px * pixel_width + i) as u16;
                let screen_y = heatmap_area.y + y as u16;
                if screen_x >= heatmap_area.x + heatmap_area.width {
                    break;
                }
                if let Some(cell) = f.buffer_mut().cell_mut((screen_x, screen_y)) {
                    if val.is_finite() {
                        cell.set_char('█').set_fg(shade((val - min_val) / range));
                    } else {
                        cell.set_char('·').set_fg(colors.muted);
                    }
                }
            }
        }
    }

    // Row indices on the left, column indices below.
    for y_pos in [0, disp_rows / 2, disp_rows - 1] {
        let data_row = ((y_pos as f64 * row_step).floor() as usize).min(rows - 1);
        let label: String = data_row.to_string().chars().take(7).collect();
        let start = heatmap_area.x + offset_x;
        let x = start.saturating_sub(label.len() as u16 + 1).max(inner.x);
        put_str(f, x, heatmap_area.y + y_pos as u16, &label, start, colors.label);
    }

    let x_label_y = heatmap_area.y + disp_rows as u16;
    if x_label_y < inner.y + inner.height {
        for x_pos in [0, disp_cols / 2, disp_cols - 1] {
            let data_col = ((x_pos as f64 * col_step).floor() as usize).min(cols - 1);
            let x = heatmap_area.x + offset_x + (x_pos * pixel_width) as u16;
            put_str(f, x, x_label_y, &data_col.to_string(), right, colors.label);
        }
    }
}

fn put_str(f: &mut Frame<'_>, x: u16, y: u16, text: &str, limit: u16, fg: ratatui::style::Color) {
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as u16;
        if cx >= limit {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((cx, y)) {
            cell.set_char(ch).set_fg(fg);
        }
    }
}
