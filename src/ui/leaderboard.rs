// Leaderboard page: category tabs over a ranked table

use super::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Tabs},
    Frame,
};
use xea_dashboard::format::{format_number, format_percent, title_case, truncate};
use xea_dashboard::{CategoryFilter, DataSource};

pub fn render<S: DataSource>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs + sort
            Constraint::Min(0),    // Ranked rows
        ])
        .split(area);

    render_tabs(f, chunks[0], app);
    render_table(f, chunks[1], app);
}

fn render_tabs<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let theme = app.theme;

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(area);

    let titles: Vec<Line> = CategoryFilter::TABS
        .iter()
        .map(|tab| Line::from(tab.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(theme.block("Leaderboard"))
        .select(app.leaderboard.tab_index())
        .style(Style::default().fg(theme.muted()))
        .highlight_style(
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");
    f.render_widget(tabs, halves[0]);

    let current = Span::styled(
        format!("Sort by {}", app.leaderboard.query.sort_by.label()),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    );

    let sort = Paragraph::new(Line::from(current)).block(theme.block("s: cycle"));
    f.render_widget(sort, halves[1]);
}

fn render_table<S: DataSource>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let theme = app.theme;

    let Some(rows) = &app.leaderboard.rows else {
        let loading = Paragraph::new("Loading leaderboard...")
            .style(Style::default().fg(theme.muted()))
            .block(theme.block(app.leaderboard.query.category.label()));
        f.render_widget(loading, area);
        return;
    };

    if rows.is_empty() {
        let empty = Paragraph::new("No influencers in this category yet")
            .style(Style::default().fg(theme.muted()))
            .block(theme.block(app.leaderboard.query.category.label()));
        f.render_widget(empty, area);
        return;
    }

    let header_cells = ["#", "Account", "Name • Country", "Followers", "Engagement", "Posts"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(theme.muted()))
        .height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(idx, account)| {
            let mut handle = vec![Span::styled(
                account.handle(),
                Style::default().fg(theme.text()).add_modifier(Modifier::BOLD),
            )];
            if account.verified {
                handle.push(Span::styled(" ✓", Style::default().fg(theme.accent())));
            }

            Row::new(vec![
                Cell::from(format!("#{}", idx + 1)).style(
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(Line::from(handle)),
                Cell::from(truncate(
                    &format!("{} • {}", account.name, title_case(&account.country)),
                    34,
                ))
                .style(Style::default().fg(theme.muted())),
                Cell::from(format_number(account.followers_count)),
                Cell::from(format_percent(account.engagement_score)),
                Cell::from(format_number(account.annual_posts)),
            ])
            .height(1)
        })
        .collect();

    let title = format!(
        "{} - {} ranked",
        app.leaderboard.query.category.label(),
        rows.len()
    );

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(5),
            Constraint::Length(22),
            Constraint::Length(36),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(theme.block(&title))
    .highlight_style(theme.highlight())
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.leaderboard.state);
}
