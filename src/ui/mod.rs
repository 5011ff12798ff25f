// Terminal dashboard: Dashboard, Leaderboard and Search pages
//
// Single-threaded. Every fetch is driven to completion on the app's
// current-thread runtime from inside the key press that asked for it.

mod dashboard;
mod leaderboard;
mod search;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, TableState},
    Frame, Terminal,
};
use std::io;
use tokio::runtime::Runtime;
use tracing::{info, warn};
use xea_dashboard::{
    Account, CategoryFilter, DashboardStats, DataSource, LeaderboardQuery, RecentActivity,
    SearchForm, SearchRequest, SearchResponse, SortKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Leaderboard,
    Search,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Leaderboard, Page::Search];

    pub fn next(&self) -> Self {
        match self {
            Page::Dashboard => Page::Leaderboard,
            Page::Leaderboard => Page::Search,
            Page::Search => Page::Dashboard,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Dashboard => Page::Search,
            Page::Leaderboard => Page::Dashboard,
            Page::Search => Page::Leaderboard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Leaderboard => "Leaderboard",
            Page::Search => "Search",
        }
    }
}

// ============================================================================
// THEME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "☾ Dark",
            Theme::Light => "☀ Light",
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            Theme::Dark => Color::LightBlue,
            Theme::Light => Color::Blue,
        }
    }

    pub fn text(&self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn muted(&self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Theme::Dark => Color::Reset,
            Theme::Light => Color::White,
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(match self {
                Theme::Dark => Color::DarkGray,
                Theme::Light => Color::Gray,
            })
            .add_modifier(Modifier::BOLD)
    }

    pub fn block(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.muted()))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(self.text()).add_modifier(Modifier::BOLD),
            ))
    }
}

// ============================================================================
// PAGE STATE
// ============================================================================

/// Sort choices offered on the leaderboard, in cycling order
pub const LEADERBOARD_SORTS: [SortKey; 4] = [
    SortKey::EngagementScore,
    SortKey::FollowersCount,
    SortKey::AnnualPosts,
    SortKey::AiRank,
];

pub struct LeaderboardView {
    pub query: LeaderboardQuery,
    pub rows: Option<Vec<Account>>,
    pub state: TableState,
}

impl LeaderboardView {
    fn new() -> Self {
        Self {
            query: LeaderboardQuery {
                sort_by: LEADERBOARD_SORTS[0],
                ..LeaderboardQuery::default()
            },
            rows: None,
            state: TableState::default(),
        }
    }

    pub fn tab_index(&self) -> usize {
        CategoryFilter::TABS
            .iter()
            .position(|tab| *tab == self.query.category)
            .unwrap_or(0)
    }

    fn row_count(&self) -> usize {
        self.rows.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Query,
    Country,
    Category,
    MinFollowers,
    MinEngagement,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::Query,
        SearchField::Country,
        SearchField::Category,
        SearchField::MinFollowers,
        SearchField::MinEngagement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Query => "Search",
            SearchField::Country => "Country",
            SearchField::Category => "Category",
            SearchField::MinFollowers => "Min. Followers",
            SearchField::MinEngagement => "Min. Engagement",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchField::Query => "Search by username, name, or topic...",
            SearchField::MinFollowers => "e.g., 1000",
            SearchField::MinEngagement => "e.g., 2.5",
            SearchField::Country | SearchField::Category => "",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, SearchField::Country | SearchField::Category)
    }

    fn offset(&self, delta: isize) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0) as isize;
        let len = Self::ALL.len() as isize;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

pub struct SearchView {
    pub form: SearchForm,
    pub focus: SearchField,
    /// Select options, "all" first
    pub countries: Vec<String>,
    pub categories: Vec<String>,
    pub results: Option<(SearchRequest, SearchResponse)>,
}

impl SearchView {
    fn new() -> Self {
        Self {
            form: SearchForm::default(),
            focus: SearchField::Query,
            countries: vec![xea_dashboard::filter::ALL.to_string()],
            categories: vec![xea_dashboard::filter::ALL.to_string()],
            results: None,
        }
    }

    pub fn value(&self, field: SearchField) -> &str {
        match field {
            SearchField::Query => &self.form.query,
            SearchField::Country => &self.form.country,
            SearchField::Category => &self.form.category,
            SearchField::MinFollowers => &self.form.min_followers,
            SearchField::MinEngagement => &self.form.min_engagement,
        }
    }

    fn text_mut(&mut self, field: SearchField) -> Option<&mut String> {
        match field {
            SearchField::Query => Some(&mut self.form.query),
            SearchField::MinFollowers => Some(&mut self.form.min_followers),
            SearchField::MinEngagement => Some(&mut self.form.min_engagement),
            SearchField::Country | SearchField::Category => None,
        }
    }

    fn cycle_option(&mut self, delta: isize) {
        let (options, value) = match self.focus {
            SearchField::Country => (&self.countries, &mut self.form.country),
            SearchField::Category => (&self.categories, &mut self.form.category),
            _ => return,
        };
        if options.is_empty() {
            return;
        }
        let idx = options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(value))
            .unwrap_or(0) as isize;
        let next = (idx + delta).rem_euclid(options.len() as isize) as usize;
        *value = options[next].clone();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

// ============================================================================
// APP
// ============================================================================

pub struct App<S> {
    source: S,
    runtime: Runtime,
    pub current_page: Page,
    pub theme: Theme,
    pub stats: Option<DashboardStats>,
    pub activity: Vec<RecentActivity>,
    pub leaderboard: LeaderboardView,
    pub search: SearchView,
    pub status: Option<Status>,
}

impl<S: DataSource> App<S> {
    pub fn new(source: S, runtime: Runtime) -> Self {
        Self {
            source,
            runtime,
            current_page: Page::Dashboard,
            theme: Theme::default(),
            stats: None,
            activity: Vec::new(),
            leaderboard: LeaderboardView::new(),
            search: SearchView::new(),
            status: None,
        }
    }

    pub fn source_label(&self) -> String {
        self.source.describe()
    }

    fn set_error(&mut self, context: &str, err: impl std::fmt::Display) {
        warn!(error = %err, "{}", context);
        self.status = Some(Status {
            text: format!("{}: {}", context, err),
            is_error: true,
        });
    }

    fn set_notice(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_error: false,
        });
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// Load whatever the current page needs and has not fetched yet
    pub fn ensure_loaded(&mut self) {
        match self.current_page {
            Page::Dashboard if self.stats.is_none() => self.refresh_dashboard(),
            Page::Leaderboard if self.leaderboard.rows.is_none() => self.refresh_leaderboard(),
            Page::Search if self.search.countries.len() <= 1 => self.load_taxonomy(),
            _ => {}
        }
    }

    pub fn refresh(&mut self) {
        match self.current_page {
            Page::Dashboard => self.refresh_dashboard(),
            Page::Leaderboard => self.refresh_leaderboard(),
            Page::Search => {
                self.load_taxonomy();
                if self.search.results.is_some() {
                    self.submit_search();
                }
            }
        }
    }

    pub fn refresh_dashboard(&mut self) {
        match self.runtime.block_on(self.source.dashboard_stats()) {
            Ok(stats) => {
                info!(total = stats.total_influencers, "dashboard stats loaded");
                self.stats = Some(stats);
                self.activity = self.source.recent_activity();
                self.status = None;
            }
            Err(e) => self.set_error("Failed to load dashboard", e),
        }
    }

    pub fn refresh_leaderboard(&mut self) {
        let query = self.leaderboard.query;
        match self.runtime.block_on(self.source.leaderboard(&query)) {
            Ok(rows) => {
                info!(category = %query.category, sort_by = %query.sort_by, rows = rows.len(), "leaderboard loaded");
                self.leaderboard.state.select(if rows.is_empty() { None } else { Some(0) });
                self.leaderboard.rows = Some(rows);
                self.status = None;
            }
            Err(e) => {
                self.leaderboard.rows = Some(Vec::new());
                self.leaderboard.state.select(None);
                self.set_error("Failed to load leaderboard", e);
            }
        }
    }

    pub fn load_taxonomy(&mut self) {
        let all = xea_dashboard::filter::ALL.to_string();

        match self.runtime.block_on(self.source.countries()) {
            Ok(countries) => {
                self.search.countries = std::iter::once(all.clone()).chain(countries).collect();
            }
            Err(e) => self.set_error("Failed to load countries", e),
        }
        match self.runtime.block_on(self.source.categories()) {
            Ok(categories) => {
                self.search.categories = std::iter::once(all).chain(categories).collect();
            }
            Err(e) => self.set_error("Failed to load categories", e),
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
        self.ensure_loaded();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
        self.ensure_loaded();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // ------------------------------------------------------------------------
    // Leaderboard
    // ------------------------------------------------------------------------

    pub fn select_tab(&mut self, delta: isize) {
        let tabs = CategoryFilter::TABS;
        let idx = self.leaderboard.tab_index() as isize;
        let next = (idx + delta).rem_euclid(tabs.len() as isize) as usize;
        self.leaderboard.query.category = tabs[next];
        self.refresh_leaderboard();
    }

    pub fn cycle_sort(&mut self) {
        let idx = LEADERBOARD_SORTS
            .iter()
            .position(|key| *key == self.leaderboard.query.sort_by)
            .unwrap_or(0);
        self.leaderboard.query.sort_by = LEADERBOARD_SORTS[(idx + 1) % LEADERBOARD_SORTS.len()];
        self.refresh_leaderboard();
    }

    pub fn next_row(&mut self) {
        let len = self.leaderboard.row_count();
        if len == 0 {
            return;
        }
        let i = match self.leaderboard.state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.leaderboard.state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.leaderboard.row_count();
        if len == 0 {
            return;
        }
        let i = match self.leaderboard.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.leaderboard.state.select(Some(i));
    }

    // ------------------------------------------------------------------------
    // Search form
    // ------------------------------------------------------------------------

    pub fn focus_field(&mut self, delta: isize) {
        self.search.focus = self.search.focus.offset(delta);
    }

    pub fn input_char(&mut self, c: char) {
        let focus = self.search.focus;
        if let Some(text) = self.search.text_mut(focus) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.search.focus;
        if let Some(text) = self.search.text_mut(focus) {
            text.pop();
        }
    }

    pub fn cycle_option(&mut self, delta: isize) {
        self.search.cycle_option(delta);
    }

    /// Compose the request from the form and run it, starting at page 1
    pub fn submit_search(&mut self) {
        if let Err(e) = self.run_search() {
            self.set_error("Search failed", e);
        }
    }

    /// Move through result pages of the last submitted search
    pub fn change_result_page(&mut self, delta: i64) {
        let Some((request, response)) = &self.search.results else {
            return;
        };

        let pages = response.total_count.div_ceil(request.limit.max(1) as u64).max(1);
        let target = (request.page as i64 + delta).clamp(1, pages as i64) as u32;
        if target == request.page {
            return;
        }

        let mut request = request.clone();
        request.page = target;
        match self.runtime.block_on(self.source.search(&request)) {
            Ok(response) => {
                self.search.form.page = target;
                self.search.results = Some((request, response));
            }
            Err(e) => self.set_error("Search failed", e),
        }
    }

    fn run_search(&mut self) -> xea_dashboard::error::Result<()> {
        self.search.form.page = 1;
        let request = self.search.form.to_request()?;
        let response = self.runtime.block_on(self.source.search(&request))?;

        info!(topic = %request.topic, total = response.total_count, "search complete");
        self.set_notice(format!("{} accounts found", response.total_count));
        self.search.results = Some((request, response));
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Keys
    // ------------------------------------------------------------------------

    /// Apply one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab => self.next_page(),
            KeyCode::BackTab => self.previous_page(),
            KeyCode::F(5) => self.refresh(),
            _ if self.current_page == Page::Search => self.handle_search_key(key),
            KeyCode::Char('q') => return true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.refresh(),
            _ if self.current_page == Page::Leaderboard => self.handle_leaderboard_key(key),
            _ => {}
        }
        false
    }

    fn handle_leaderboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select_tab(-1),
            KeyCode::Right | KeyCode::Char('l') => self.select_tab(1),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Down | KeyCode::Char('j') => self.next_row(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_row(),
            _ => {}
        }
    }

    /// On the Search page printable keys go into the focused field
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Down => self.focus_field(1),
            KeyCode::Up => self.focus_field(-1),
            KeyCode::Left => self.cycle_option(-1),
            KeyCode::Right => self.cycle_option(1),
            KeyCode::PageDown => self.change_result_page(1),
            KeyCode::PageUp => self.change_result_page(-1),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_char(c)
            }
            _ => {}
        }
    }
}

// ============================================================================
// TERMINAL LOOP
// ============================================================================

pub fn run_ui<S: DataSource>(app: &mut App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.ensure_loaded();
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend, S: DataSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

pub fn ui<S: DataSource>(f: &mut Frame, app: &mut App<S>) {
    let background = Block::default().style(Style::default().bg(app.theme.background()));
    f.render_widget(background, f.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(0),    // Page content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_navbar(f, chunks[0], app);

    match app.current_page {
        Page::Dashboard => dashboard::render(f, chunks[1], app),
        Page::Leaderboard => leaderboard::render(f, chunks[1], app),
        Page::Search => search::render(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_navbar<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let theme = app.theme;

    let mut spans = vec![
        Span::styled(
            " X-EA Awards ",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (i, page) in Page::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.muted())));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text())
        };
        spans.push(Span::styled(page.title(), style));
    }

    spans.push(Span::styled("  |  ", Style::default().fg(theme.muted())));
    spans.push(Span::styled(theme.label(), Style::default().fg(theme.text())));
    spans.push(Span::styled("  |  ", Style::default().fg(theme.muted())));
    spans.push(Span::styled(app.source_label(), Style::default().fg(theme.muted())));

    let navbar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent())),
    );

    f.render_widget(navbar, area);
}

fn render_status_bar<S: DataSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let theme = app.theme;
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(theme.text()));

    let mut spans = Vec::new();

    if let Some(status) = &app.status {
        let color = if status.is_error { Color::Red } else { Color::Green };
        spans.push(Span::styled(format!(" {} ", status.text), Style::default().fg(color)));
        spans.push(text(" | "));
    }

    spans.push(key(" Tab"));
    spans.push(text(" Page | "));
    match app.current_page {
        Page::Dashboard => {
            spans.push(key("r"));
            spans.push(text(" Refresh | "));
            spans.push(key("t"));
            spans.push(text(" Theme | "));
        }
        Page::Leaderboard => {
            spans.push(key("←/→"));
            spans.push(text(" Category | "));
            spans.push(key("s"));
            spans.push(text(" Sort | "));
            spans.push(key("↑/↓"));
            spans.push(text(" Nav | "));
        }
        Page::Search => {
            spans.push(key("↑/↓"));
            spans.push(text(" Field | "));
            spans.push(key("←/→"));
            spans.push(text(" Option | "));
            spans.push(key("Enter"));
            spans.push(text(" Search | "));
            spans.push(key("PgUp/PgDn"));
            spans.push(text(" Results | "));
            spans.push(key("F5"));
            spans.push(text(" Refresh | "));
        }
    }
    spans.push(Span::styled(
        if app.current_page == Page::Search { "Esc" } else { "q" },
        Style::default().fg(Color::Red),
    ));
    spans.push(text(" Quit"));

    let status_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted())),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use xea_dashboard::{ApiError, Category, SampleData};

    /// Backend that is up but answers every call with HTTP 503
    struct Unavailable;

    impl Unavailable {
        fn error(path: &str) -> ApiError {
            ApiError::Status {
                status: 503,
                url: format!("http://stub{}", path),
            }
        }
    }

    impl DataSource for Unavailable {
        fn describe(&self) -> String {
            "api http://stub".to_string()
        }

        async fn search(&self, _request: &SearchRequest) -> Result<SearchResponse, ApiError> {
            Err(Self::error("/search"))
        }

        async fn leaderboard(&self, _query: &LeaderboardQuery) -> Result<Vec<Account>, ApiError> {
            Err(Self::error("/leaderboard/all"))
        }

        async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
            Err(Self::error("/dashboard/stats"))
        }

        async fn countries(&self) -> Result<Vec<String>, ApiError> {
            Err(Self::error("/countries"))
        }

        async fn categories(&self) -> Result<Vec<String>, ApiError> {
            Err(Self::error("/categories"))
        }
    }

    fn runtime() -> Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    fn app() -> App<SampleData> {
        App::new(SampleData::new(), runtime())
    }

    fn press<S: DataSource>(app: &mut App<S>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text<S: DataSource>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn error_text<S: DataSource>(app: &App<S>) -> String {
        let status = app.status.as_ref().expect("status set");
        assert!(status.is_error);
        status.text.clone()
    }

    fn render<S: DataSource>(app: &mut App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_page_cycle() {
        let mut app = app();
        assert_eq!(app.current_page, Page::Dashboard);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, Page::Leaderboard);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, Page::Search);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_page, Page::Leaderboard);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));

        app.current_page = Page::Search;
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.search.form.query, "q");
    }

    #[test]
    fn test_ctrl_c_quits_from_search() {
        let mut app = app();
        app.current_page = Page::Search;
        type_text(&mut app, "tech");

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c));
        assert_eq!(app.search.form.query, "tech");
    }

    #[test]
    fn test_modified_keys_not_typed() {
        let mut app = app();
        app.current_page = Page::Search;
        type_text(&mut app, "ke");

        assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)));
        assert_eq!(app.search.form.query, "ke");

        app.handle_key(KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT));
        assert_eq!(app.search.form.query, "keN");
    }

    #[test]
    fn test_f5_refreshes_search_page() {
        let mut app = app();
        app.current_page = Page::Search;
        type_text(&mut app, "tanzania");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.results.as_ref().unwrap().1.total_count, 3);

        // r goes into the field, F5 reloads
        app.search.countries = vec![xea_dashboard::filter::ALL.to_string()];
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.search.form.query, "tanzaniar");
        assert_eq!(app.search.countries.len(), 1);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.search.countries.len(), 6);
        assert_eq!(app.search.results.as_ref().unwrap().0.topic, "tanzania");
        assert_eq!(app.status.as_ref().map(|s| s.is_error), Some(false));
    }

    #[test]
    fn test_fetch_failures_shown_in_status_bar() {
        let mut app = App::new(Unavailable, runtime());

        app.ensure_loaded();
        assert!(app.stats.is_none());
        let text = error_text(&app);
        assert!(text.contains("Failed to load dashboard"));
        assert!(text.contains("HTTP 503"));

        let screen = render(&mut app);
        assert!(screen.contains("Loading dashboard"));
        assert!(screen.contains("Failed to load dashboard"));

        assert!(!press(&mut app, KeyCode::Tab));
        assert_eq!(app.current_page, Page::Leaderboard);
        assert_eq!(app.leaderboard.rows, Some(vec![]));
        assert_eq!(app.leaderboard.state.selected(), None);
        assert!(error_text(&app).contains("Failed to load leaderboard"));

        assert!(!press(&mut app, KeyCode::Down));
        assert!(!press(&mut app, KeyCode::Char('s')));
        assert_eq!(app.leaderboard.query.sort_by, SortKey::FollowersCount);
        assert_eq!(app.leaderboard.rows, Some(vec![]));
        assert!(render(&mut app).contains("No influencers in this category yet"));

        assert!(!press(&mut app, KeyCode::Tab));
        assert_eq!(app.search.countries.len(), 1);
        assert!(error_text(&app).contains("Failed to load categories"));

        type_text(&mut app, "tech");
        press(&mut app, KeyCode::Enter);
        assert!(app.search.results.is_none());
        assert!(error_text(&app).contains("Search failed"));

        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_theme_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Light);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn test_dashboard_loads_on_demand() {
        let mut app = app();
        assert!(app.stats.is_none());
        app.ensure_loaded();

        let stats = app.stats.as_ref().unwrap();
        assert_eq!(stats.total_influencers, 1234);
        assert_eq!(app.activity.len(), 3);

        let screen = render(&mut app);
        assert!(screen.contains("X-EA Awards"));
        assert!(screen.contains("Total Influencers"));
        assert!(screen.contains("1.2K"));
        assert!(screen.contains("4.8%"));
        assert!(screen.contains("Recent Activity"));
    }

    #[test]
    fn test_leaderboard_tabs_and_sort() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.leaderboard.query.sort_by, SortKey::EngagementScore);
        assert_eq!(app.leaderboard.rows.as_ref().unwrap().len(), 10);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.leaderboard.query.category, CategoryFilter::Only(Category::Nano));
        let rows = app.leaderboard.rows.as_ref().unwrap();
        assert!(rows.iter().all(|a| a.category == Category::Nano));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.leaderboard.query.sort_by, SortKey::FollowersCount);
        assert_eq!(app.leaderboard.rows.as_ref().unwrap()[0].username, "gitegalens");

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.leaderboard.query.category, CategoryFilter::Only(Category::Macro));

        let screen = render(&mut app);
        assert!(screen.contains("@mombasavibes"));
        assert!(screen.contains("1.2M"));
    }

    #[test]
    fn test_leaderboard_row_selection_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.leaderboard.state.selected(), Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.leaderboard.state.selected(), Some(9));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.leaderboard.state.selected(), Some(0));
    }

    #[test]
    fn test_search_form_flow() {
        let mut app = app();
        app.current_page = Page::Search;
        app.ensure_loaded();
        assert_eq!(app.search.countries.len(), 6);

        type_text(&mut app, "tanzania");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.search.focus, SearchField::Country);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.search.form.country, "tanzania");

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.search.focus, SearchField::MinFollowers);
        type_text(&mut app, "20000");

        press(&mut app, KeyCode::Enter);
        let (request, response) = app.search.results.as_ref().unwrap();
        assert_eq!(request.min_followers, Some(20_000));
        assert_eq!(response.total_count, 2);
        assert_eq!(app.status.as_ref().map(|s| s.is_error), Some(false));

        let screen = render(&mut app);
        assert!(screen.contains("Search Results"));
        assert!(screen.contains("@arushaoutdoors"));
    }

    #[test]
    fn test_search_validation_error_shown() {
        let mut app = app();
        app.current_page = Page::Search;
        press(&mut app, KeyCode::Enter);

        let status = app.status.clone().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("enter a search term"));
        assert!(app.search.results.is_none());

        type_text(&mut app, "kenya");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.search.focus, SearchField::MinEngagement);
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert!(app.status.as_ref().unwrap().text.contains("must be a number"));
    }

    #[test]
    fn test_search_paging() {
        let mut app = app();
        app.current_page = Page::Search;
        type_text(&mut app, "a");
        app.search.form.limit = 3;
        press(&mut app, KeyCode::Enter);

        let total = app.search.results.as_ref().unwrap().1.total_count;
        assert!(total > 3);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.search.results.as_ref().unwrap().0.page, 2);
        press(&mut app, KeyCode::PageUp);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.search.results.as_ref().unwrap().0.page, 1);
    }
}
