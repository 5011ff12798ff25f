// Dashboard page: stat cards, engagement trend, category split, activity feed

use super::App;
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, List, ListItem, Paragraph},
    Frame,
};
use xea_dashboard::format::{format_number, format_percent, format_relative, title_case};
use xea_dashboard::{DashboardStats, DataSource};

const CATEGORY_COLORS: [Color; 3] = [Color::LightRed, Color::LightBlue, Color::Yellow];

pub fn render<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let theme = app.theme;

    let Some(stats) = &app.stats else {
        let loading = Paragraph::new("Loading dashboard... (r to retry)")
            .style(Style::default().fg(theme.muted()))
            .block(theme.block("Dashboard"));
        f.render_widget(loading, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat cards
            Constraint::Min(10),   // Charts
            Constraint::Length(6), // Recent activity
        ])
        .split(area);

    render_cards(f, rows[0], app, stats);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_trend(f, charts[0], app, stats);
    render_categories(f, charts[1], app, stats);
    render_activity(f, rows[2], app);
}

fn render_cards<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>, stats: &DashboardStats) {
    let theme = app.theme;

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let values = [
        ("Total Influencers", format_number(stats.total_influencers)),
        ("Average Engagement", format_percent(stats.average_engagement)),
        ("Active Countries", stats.active_countries.to_string()),
    ];

    for ((title, value), card) in values.into_iter().zip(cards.iter()) {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let widget = Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(theme.block(title));
        f.render_widget(widget, *card);
    }
}

fn render_trend<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>, stats: &DashboardStats) {
    let theme = app.theme;
    let trend = &stats.engagement_trends;

    let points: Vec<(f64, f64)> = trend
        .points()
        .enumerate()
        .map(|(i, (_, value))| (i as f64, value))
        .collect();

    if points.is_empty() {
        let empty = Paragraph::new("No trend data yet")
            .style(Style::default().fg(theme.muted()))
            .block(theme.block("Engagement Trends"));
        f.render_widget(empty, area);
        return;
    }

    let max = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let upper = if max > 0.0 { max * 1.1 } else { 1.0 };

    let x_labels: Vec<Span> = trend
        .points()
        .map(|(label, _)| Span::styled(label.to_string(), Style::default().fg(theme.muted())))
        .collect();
    let y_labels = vec![
        Span::styled("0", Style::default().fg(theme.muted())),
        Span::styled(format!("{:.1}", upper / 2.0), Style::default().fg(theme.muted())),
        Span::styled(format!("{:.1}", upper), Style::default().fg(theme.muted())),
    ];

    let dataset = Dataset::default()
        .name("Engagement Rate")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(theme.block("Engagement Trends"))
        .x_axis(
            Axis::default()
                .bounds([0.0, (points.len().max(2) - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(Axis::default().bounds([0.0, upper]).labels(y_labels));

    f.render_widget(chart, area);
}

fn render_categories<S: DataSource>(
    f: &mut Frame,
    area: Rect,
    app: &App<S>,
    stats: &DashboardStats,
) {
    let theme = app.theme;

    let bars: Vec<Bar> = stats
        .category_distribution
        .iter()
        .enumerate()
        .map(|(i, (name, count))| {
            let color = CATEGORY_COLORS[i % CATEGORY_COLORS.len()];
            Bar::default()
                .value(*count)
                .label(Line::from(title_case(name)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(theme.block("Influencer Categories"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(3)
        .label_style(Style::default().fg(theme.text()));

    f.render_widget(chart, area);
}

fn render_activity<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let theme = app.theme;
    let now = Utc::now();

    let items: Vec<ListItem> = if app.activity.is_empty() {
        vec![ListItem::new(Span::styled(
            "No recent activity",
            Style::default().fg(theme.muted()),
        ))]
    } else {
        app.activity
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.title.clone(),
                        Style::default().fg(theme.text()).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  @{} - {}", entry.username, title_case(&entry.country)),
                        Style::default().fg(theme.muted()),
                    ),
                    Span::styled(
                        format!("  {}", format_relative(now, entry.at)),
                        Style::default().fg(theme.accent()),
                    ),
                ]))
            })
            .collect()
    };

    f.render_widget(List::new(items).block(theme.block("Recent Activity")), area);
}
