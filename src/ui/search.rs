// Search page: query input, four filters, paged results

use super::{App, SearchField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use xea_dashboard::format::{format_number, format_percent, format_score, title_case, truncate};
use xea_dashboard::DataSource;

pub fn render<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query
            Constraint::Length(3), // Filters
            Constraint::Min(0),    // Results
        ])
        .split(area);

    render_field(f, chunks[0], app, SearchField::Query);

    let filters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(chunks[1]);

    let filter_fields = [
        SearchField::Country,
        SearchField::Category,
        SearchField::MinFollowers,
        SearchField::MinEngagement,
    ];
    for (field, cell) in filter_fields.into_iter().zip(filters.iter()) {
        render_field(f, *cell, app, field);
    }

    render_results(f, chunks[2], app);
}

fn render_field<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>, field: SearchField) {
    let theme = app.theme;
    let focused = app.search.focus == field;
    let value = app.search.value(field);

    let content = if field.is_select() {
        Line::from(vec![
            Span::styled("‹ ", Style::default().fg(theme.muted())),
            Span::styled(title_case(value), Style::default().fg(theme.text())),
            Span::styled(" ›", Style::default().fg(theme.muted())),
        ])
    } else if value.is_empty() {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(theme.muted())
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(theme.text()))];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent())));
        }
        Line::from(spans)
    };

    let title = if field == SearchField::Query {
        format!(" 🔍 {} ", field.label())
    } else {
        format!(" {} ", field.label())
    };

    let border = if focused { theme.accent() } else { theme.muted() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(theme.text())));

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_results<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let theme = app.theme;

    let Some((request, response)) = &app.search.results else {
        let hint = Paragraph::new("Enter a search query to find influencers...")
            .style(Style::default().fg(theme.muted()))
            .block(theme.block("Search Results"));
        f.render_widget(hint, area);
        return;
    };

    if response.accounts.is_empty() {
        let none = Paragraph::new(format!(
            "No accounts found for '{}'. Try broader terms or fewer filters.",
            request.topic
        ))
        .style(Style::default().fg(theme.muted()))
        .block(theme.block("Search Results"));
        f.render_widget(none, area);
        return;
    }

    let header_cells = [
        "Account", "Location", "Category", "Followers", "Engagement", "Intensity", "AI Rank",
    ]
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

    let rows = response.accounts.iter().map(|account| {
        let handle = if account.verified {
            format!("{} ✓", account.handle())
        } else {
            account.handle()
        };

        Row::new(vec![
            Cell::from(truncate(&handle, 20)).style(Style::default().fg(theme.text())),
            Cell::from(truncate(
                &format!("{} ({})", account.location, title_case(&account.country)),
                28,
            )),
            Cell::from(account.category.label()),
            Cell::from(format_number(account.followers_count)),
            Cell::from(format_percent(account.engagement_score)),
            Cell::from(format_score(account.intensity_score)),
            Cell::from(format_score(account.rank)),
        ])
        .height(1)
    });

    let pages = response
        .total_count
        .div_ceil(request.limit.max(1) as u64)
        .max(1);
    let title = format!(
        "Search Results - {} found - page {}/{} - by {}",
        response.total_count,
        request.page,
        pages,
        request.sort_by.label()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(30),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(theme.block(&title));

    f.render_widget(table, area);
}
