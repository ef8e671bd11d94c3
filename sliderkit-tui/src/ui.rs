//! Drawing — bordered slider canvas plus a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use sliderkit_core::{Bounds, DisplayList, Shape};

use crate::app::AppState;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: slider area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_slider(f, chunks[0], app);
    draw_status_bar(f, chunks[1], app);
}

fn draw_slider(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(" Slider ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Record where the widget landed so mouse events can be translated, and
    // re-derive the logical bounds from the current cell area.
    app.widget_area = inner;
    app.resize(inner.width, inner.height);

    let bounds = app.bounds;
    let list = app.slider.render(bounds);
    if list.is_empty() {
        return;
    }

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, bounds.width])
        .y_bounds([0.0, bounds.height])
        .paint(|ctx| paint_display_list(ctx, &list, bounds));
    f.render_widget(canvas, inner);
}

/// Rasterize the widget's display list. Widget space is y-down; the canvas
/// is y-up, so every y is flipped.
fn paint_display_list(ctx: &mut Context, list: &DisplayList, bounds: Bounds) {
    let flip = |y: f64| bounds.height - y;

    for shape in list {
        match shape {
            Shape::Line { from, to, tint, .. } => {
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: flip(from.y),
                    x2: to.x,
                    y2: flip(to.y),
                    color: theme::tint_color(*tint),
                });
            }
            Shape::Circle {
                center,
                radius,
                stroke,
                fill,
                ..
            } => {
                // No filled-circle primitive; approximate the interior with
                // concentric rings under the outline.
                let mut r = radius - 2.0;
                while r > 0.0 {
                    ctx.draw(&Circle {
                        x: center.x,
                        y: flip(center.y),
                        radius: r,
                        color: theme::tint_color(*fill),
                    });
                    r -= 2.0;
                }
                ctx.draw(&Circle {
                    x: center.x,
                    y: flip(center.y),
                    radius: *radius,
                    color: theme::tint_color(*stroke),
                });
            }
            Shape::Label { text, center, tint } => {
                let style = ratatui::style::Style::default().fg(theme::tint_color(*tint));
                ctx.print(center.x, flip(center.y), Line::styled(text.clone(), style));
            }
        }
    }
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let state = app.slider.state();
    let mut spans: Vec<Span> = vec![
        Span::styled(" drag the thumb  [h/l]nudge [c]enter [q]uit", theme::muted()),
        Span::raw(" | "),
        Span::styled(
            format!("{:.1} ({})", app.slider.display_value(), state.label()),
            theme::value_style(state),
        ),
    ];

    if let Some(msg) = &app.status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), theme::muted()));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}
