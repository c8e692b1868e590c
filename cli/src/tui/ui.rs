use callboard_core::{DashboardSnapshot, Distribution, Trend, VolumePoint};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
        Padding, Paragraph,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    success: Color,
    danger: Color,
    warning: Color,
    accent: Color,
    average: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    success: Color::Green,
    danger: Color::Red,
    warning: Color::Yellow,
    accent: Color::LightCyan,
    average: Color::Magenta,
};

const SENTIMENT_COLORS: [Color; 3] = [Color::Green, Color::Yellow, Color::Red];
const INTEREST_COLORS: [Color; 2] = [Color::LightGreen, Color::Gray];
const AWARENESS_COLORS: [Color; 2] = [Color::LightBlue, Color::LightMagenta];

pub fn draw(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Header / selector
            Constraint::Length(6),  // Stat cards
            Constraint::Min(10),    // Volume + status
            Constraint::Length(10), // Doughnuts
            Constraint::Length(9),  // Scheme level + summary
            Constraint::Length(1),  // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, main_layout[0]);
    draw_stat_cards(frame, &app.snapshot, main_layout[1]);

    let analytics = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[2]);
    draw_volume_chart(frame, &app.snapshot.daily_volume, analytics[0]);
    draw_bar_chart(
        frame,
        " Call Status Distribution ",
        &app.snapshot.call_status,
        THEME.primary,
        analytics[1],
    );

    let insights = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(main_layout[3]);
    let panels = [
        (" Sentiment Analysis ", &app.snapshot.sentiment, &SENTIMENT_COLORS[..]),
        (" Interest in Loan ", &app.snapshot.interest, &INTEREST_COLORS[..]),
        (" Scheme Awareness ", &app.snapshot.awareness, &AWARENESS_COLORS[..]),
    ];
    for (area, (title, dist, colors)) in insights.iter().zip(panels) {
        draw_proportions(frame, title, dist, colors, *area);
    }

    let scheme = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[4]);
    draw_bar_chart(
        frame,
        " User Scheme Level ",
        &app.snapshot.scheme_level,
        THEME.average,
        scheme[0],
    );
    draw_campaign_summary(frame, &app.snapshot, scheme[1]);

    let help = Line::from(vec![
        Span::styled("DAY: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("ALL DAYS: ", Style::default().fg(THEME.muted)),
        Span::styled("a", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        main_layout[5],
    );
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}

fn empty_panel(frame: &mut Frame, title: &str, area: Rect) {
    let empty = Paragraph::new("No data for this period")
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center)
        .block(panel(title).padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(empty, area);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(36), Constraint::Length(40)])
        .split(area);

    let title = vec![
        Line::from(vec![
            Span::styled(
                "PM-SVANidhi",
                Style::default()
                    .fg(THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Voice Agent Analytics",
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Tranche 1 - Call Summary Dashboard",
            Style::default().fg(THEME.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(title), header_layout[0]);

    let options = app.options();
    let position = options
        .iter()
        .position(|o| *o == app.selection)
        .unwrap_or(0);
    let nav = vec![
        Line::from(vec![
            Span::styled(" < ", Style::default().fg(THEME.text)),
            Span::styled(
                format!(" {} ", app.selection),
                Style::default()
                    .fg(Color::Black)
                    .bg(THEME.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" > ", Style::default().fg(THEME.text)),
            Span::styled(
                format!("{}/{}", position + 1, options.len()),
                Style::default().fg(THEME.muted),
            ),
        ]),
        Line::from(Span::styled(
            app.snapshot.date_label.clone(),
            Style::default().fg(THEME.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(nav).alignment(Alignment::Right),
        header_layout[1],
    );
}

fn draw_stat_cards(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let kpis = &snapshot.kpis;
    let trends = &snapshot.trends;
    let specs = [
        StatCard {
            label: "Total Calls",
            value: kpis.total_calls.to_string(),
            subtitle: "All call attempts",
            trend: trends.total_calls,
            color: THEME.primary,
        },
        StatCard {
            label: "Completed Calls",
            value: kpis.completed_calls.to_string(),
            subtitle: "Successfully connected",
            trend: trends.completed_calls,
            color: THEME.success,
        },
        StatCard {
            label: "Conversion Rate",
            value: kpis.conversion_rate_display(),
            subtitle: "Interest shown",
            trend: trends.conversion_rate,
            color: THEME.accent,
        },
        StatCard {
            label: "Avg Interactions",
            value: kpis.average_interactions_display(),
            subtitle: "Per completed call",
            trend: trends.average_interactions,
            color: THEME.warning,
        },
    ];
    for (card, area) in specs.into_iter().zip(cards.iter()) {
        stat_card(frame, card, *area);
    }
}

struct StatCard {
    label: &'static str,
    value: String,
    subtitle: &'static str,
    trend: Option<Trend>,
    color: Color,
}

fn stat_card(frame: &mut Frame, card: StatCard, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            card.label.to_uppercase(),
            Style::default().fg(THEME.muted),
        )),
        Line::from(Span::styled(
            card.value,
            Style::default().fg(card.color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.subtitle, Style::default().fg(THEME.muted))),
    ];
    if let Some(badge) = trend_badge(card.trend) {
        lines.push(badge);
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(card, area);
}

fn trend_badge(trend: Option<Trend>) -> Option<Line<'static>> {
    let trend = trend?;
    let (arrow, color) = if trend.is_positive {
        ("↑", THEME.success)
    } else {
        ("↓", THEME.danger)
    };
    Some(Line::from(vec![
        Span::styled(
            format!("{} {}%", arrow, trend.percent),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" vs last period", Style::default().fg(THEME.muted)),
    ]))
}

// Axis labels drop any time-of-day suffix from the raw call date.
fn short_date(date: &str) -> String {
    date.split(' ').next().unwrap_or(date).to_string()
}

fn draw_volume_chart(frame: &mut Frame, volume: &[VolumePoint], area: Rect) {
    let title = " Daily Call Volume Trend ";
    if volume.is_empty() {
        empty_panel(frame, title, area);
        return;
    }

    let calls: Vec<(f64, f64)> = volume
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.calls as f64))
        .collect();
    let averages: Vec<(f64, f64)> = volume
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.moving_average))
        .collect();

    let max_y = volume.iter().map(|p| p.calls as f64).fold(1.0_f64, f64::max);
    let max_x = (volume.len().saturating_sub(1)).max(1) as f64;
    let first = short_date(&volume[0].date);
    let last = short_date(&volume[volume.len() - 1].date);

    let datasets = vec![
        Dataset::default()
            .name("Call Volume")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(THEME.primary))
            .data(&calls),
        Dataset::default()
            .name("Moving Avg")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(THEME.average))
            .data(&averages),
    ];

    let chart = Chart::new(datasets)
        .block(panel(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, max_x])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, max_y * 1.1])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", max_y / 2.0)),
                    Span::raw(format!("{:.0}", max_y)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn draw_bar_chart(frame: &mut Frame, title: &str, dist: &Distribution, color: Color, area: Rect) {
    if dist.is_empty() {
        empty_panel(frame, title, area);
        return;
    }

    let bar_items: Vec<Bar> = dist
        .iter()
        .map(|(label, count)| {
            Bar::default()
                .label(label)
                .value(count as u64)
                .style(Style::default().fg(color))
                .text_value(count.to_string())
        })
        .collect();

    // Fit the bars to the panel, leaving room for borders and gaps.
    let inner_width = area.width.saturating_sub(2);
    let slots = bar_items.len() as u16;
    let bar_width = (inner_width / slots.max(1)).saturating_sub(1).clamp(3, 14);

    let chart = BarChart::default()
        .block(panel(title))
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items));

    frame.render_widget(chart, area);
}

/// Text rendition of a doughnut: one legend row per slice with a share bar.
fn proportion_lines(
    dist: &Distribution,
    colors: &[Color],
    bar_span: usize,
) -> Vec<Line<'static>> {
    let total = dist.total();
    let label_width = dist.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    dist.iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let color = colors
                .get(i % colors.len().max(1))
                .copied()
                .unwrap_or(THEME.primary);
            let share = if total == 0 { 0.0 } else { count as f64 / total as f64 };
            let filled = (share * bar_span as f64).round() as usize;
            let padding = " ".repeat(label_width - label.width());
            Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(
                    format!("{}{} ", label, padding),
                    Style::default().fg(THEME.text),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled("░".repeat(bar_span - filled), Style::default().fg(THEME.muted)),
                Span::styled(
                    format!(" {} ({:.1}%)", count, share * 100.0),
                    Style::default().fg(THEME.muted),
                ),
            ])
        })
        .collect()
}

fn draw_proportions(
    frame: &mut Frame,
    title: &str,
    dist: &Distribution,
    colors: &[Color],
    area: Rect,
) {
    if dist.is_empty() {
        empty_panel(frame, title, area);
        return;
    }

    let label_width = dist.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    // borders, padding, bullet, label, counts
    let reserved = 2 + 2 + 2 + label_width + 1 + 14;
    let bar_span = (area.width as usize).saturating_sub(reserved).max(4);

    let mut lines = proportion_lines(dist, colors, bar_span);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} responses", dist.total()),
        Style::default().fg(THEME.muted),
    )));

    let panel = Paragraph::new(lines).block(panel(title).padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(panel, area);
}

fn draw_campaign_summary(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let row = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<26}", label), Style::default().fg(THEME.text)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        row(
            "Target Audience Reached",
            snapshot.kpis.total_calls.to_string(),
            THEME.primary,
        ),
        Line::from(""),
        row(
            "Qualified Leads",
            snapshot.kpis.completed_calls.to_string(),
            THEME.success,
        ),
        Line::from(""),
        row(
            "Positive Sentiment Rate",
            format!("{:.1}%", snapshot.positive_sentiment_rate),
            THEME.accent,
        ),
    ];

    let summary = Paragraph::new(lines)
        .block(panel(" Campaign Summary ").padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(summary, area);
}
