use anyhow::{Context, Result};
use chronicle_config::Config;
use chronicle_engine::{
    Block as DocBlock, CatalogEntry, ContentLibrary, InlineToken, TimelineStore, parse_blocks,
    paths, tokenize,
};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

/// Which of an article's two documents is on screen.
#[derive(Clone, Copy, PartialEq, Eq)]
enum DocKind {
    Interpretation,
    Original,
}

impl DocKind {
    fn label(self) -> &'static str {
        match self {
            DocKind::Interpretation => "interpretation",
            DocKind::Original => "original",
        }
    }

    fn toggled(self) -> Self {
        match self {
            DocKind::Interpretation => DocKind::Original,
            DocKind::Original => DocKind::Interpretation,
        }
    }
}

struct App {
    store: TimelineStore,
    media_base: Option<String>,
    list_state: ListState,
    doc_kind: DocKind,
    content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(library: ContentLibrary, media_base: Option<String>) -> Result<Self> {
        let store = TimelineStore::new(library);
        store.catalog().context("failed to load timeline")?;

        let mut app = Self {
            store,
            media_base,
            list_state: ListState::default(),
            doc_kind: DocKind::Interpretation,
            content: Vec::new(),
            scroll: 0,
        };

        if app.entry_count() > 0 {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }
        Ok(app)
    }

    fn entry_count(&self) -> usize {
        self.store.catalog().map(|c| c.len()).unwrap_or(0)
    }

    fn selected_entry(&self) -> Option<&CatalogEntry> {
        let index = self.list_state.selected()?;
        self.store.catalog().ok()?.entries().get(index)
    }

    fn next_entry(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_entry(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn toggle_doc_kind(&mut self) {
        self.doc_kind = self.doc_kind.toggled();
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(8);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(8);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(index) = self.list_state.selected() else {
            self.content = Vec::new();
            return;
        };

        let catalog = match self.store.catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                self.content = vec![Line::from(format!("Error loading timeline: {e}"))];
                return;
            }
        };
        let Some(entry) = catalog.entries().get(index) else {
            self.content = Vec::new();
            return;
        };

        let document = match self.doc_kind {
            DocKind::Interpretation => self.store.library().read_interpretation(&entry.rel_path),
            DocKind::Original => self.store.library().read_original(&entry.rel_path),
        };

        self.content = match document {
            Ok(Some(text)) => {
                let mut lines = render_document(&parse_blocks(&text));
                if let Some(base) = &self.media_base {
                    let narration = paths::media_url(base, &paths::audio_path(entry));
                    lines.insert(
                        0,
                        Line::from(Span::styled(
                            format!("♪ {narration}"),
                            Style::default().fg(Color::DarkGray),
                        )),
                    );
                    lines.insert(1, Line::default());
                }
                lines
            }
            Ok(None) => vec![Line::from(Span::styled(
                "No content available for this document.",
                Style::default().fg(Color::DarkGray),
            ))],
            Err(e) => vec![Line::from(format!("Error reading document: {e}"))],
        };
    }
}

/// Maps parsed blocks onto styled terminal lines.
fn render_document(blocks: &[DocBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            DocBlock::Heading { level, text } => {
                let prefix = "#".repeat(*level as usize);
                let mut spans = vec![Span::styled(
                    format!("{prefix} "),
                    Style::default().fg(Color::Cyan),
                )];
                spans.extend(inline_spans(
                    &tokenize(text),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::from(spans));
                lines.push(Line::default());
            }
            DocBlock::Paragraph { text } => {
                for part in text.lines() {
                    lines.push(Line::from(inline_spans(&tokenize(part), Style::default())));
                }
                lines.push(Line::default());
            }
            DocBlock::BulletList { items } => {
                for item in items {
                    let mut spans = vec![Span::raw("  • ")];
                    spans.extend(inline_spans(&tokenize(item), Style::default()));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::default());
            }
            DocBlock::NumberedList { items } => {
                for (n, item) in items.iter().enumerate() {
                    let mut spans = vec![Span::raw(format!("  {}. ", n + 1))];
                    spans.extend(inline_spans(&tokenize(item), Style::default()));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::default());
            }
            DocBlock::Quote { lines: quote_lines } => {
                for quote_line in quote_lines {
                    let mut spans = vec![Span::styled("▌ ", Style::default().fg(Color::DarkGray))];
                    spans.extend(inline_spans(
                        &tokenize(quote_line),
                        Style::default().fg(Color::Gray),
                    ));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::default());
            }
            DocBlock::CodeFence { lang, code } => {
                let marker = Style::default().fg(Color::DarkGray);
                lines.push(Line::from(Span::styled(format!("```{lang}"), marker)));
                for code_line in code.lines() {
                    lines.push(Line::from(Span::styled(
                        code_line.to_string(),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                lines.push(Line::from(Span::styled("```".to_string(), marker)));
                lines.push(Line::default());
            }
        }
    }

    lines
}

/// Maps inline tokens onto styled spans, carrying the enclosing style into
/// recursive token sequences.
fn inline_spans(tokens: &[InlineToken], base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for token in tokens {
        match token {
            InlineToken::Text(value) => spans.push(Span::styled(value.clone(), base)),
            InlineToken::Code(value) => {
                spans.push(Span::styled(value.clone(), base.fg(Color::Yellow)));
            }
            InlineToken::Strong(children) => {
                spans.extend(inline_spans(children, base.add_modifier(Modifier::BOLD)));
            }
            InlineToken::Link { text, href } => {
                spans.extend(inline_spans(text, base.add_modifier(Modifier::UNDERLINED)));
                spans.push(Span::styled(
                    format!(" ({href})"),
                    base.fg(Color::DarkGray),
                ));
            }
        }
    }
    spans
}

fn main() -> Result<()> {
    // Determine the library path from CLI args or the config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let library_path;
    let from_config;

    if args.len() == 2 {
        library_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                library_path = config.library_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No library path provided and no config file found");
                eprintln!("Usage: {} <library-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <library-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [library-path]", args[0]);
        process::exit(1);
    }

    let library = match ContentLibrary::open(&library_path) {
        Ok(library) => library,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Library path '{}'{} is invalid: {e}",
                library_path.display(),
                source
            );
            process::exit(1);
        }
    };

    // Media links are optional and only ever come from the config file.
    let media_base = Config::load().ok().flatten().and_then(|c| c.media_base);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(library, media_base);
    let res = match app {
        Ok(mut app) => run_app(&mut terminal, &mut app),
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
        process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                KeyCode::Tab | KeyCode::Char('o') => app.toggle_doc_kind(),
                KeyCode::PageDown | KeyCode::Char('d') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('u') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)].as_ref())
        .split(outer[0]);

    // Catalog pane
    let entries: Vec<ListItem> = match app.store.catalog() {
        Ok(catalog) => catalog
            .entries()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.date.clone(), Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::raw(entry.title.clone()),
                ]))
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    let catalog_list = List::new(entries)
        .block(Block::default().borders(Borders::ALL).title("Timeline"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(catalog_list, panes[0], &mut app.list_state);

    // Article pane
    let title = match app.selected_entry() {
        Some(entry) => format!("{} · {}", entry.title, app.doc_kind.label()),
        None => "Article".to_string(),
    };

    let article = Paragraph::new(app.content.clone())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(article, panes[1]);

    // Help + neighbour hint
    let mut help = vec![Span::raw(
        "q: Quit | ↑/k ↓/j: Navigate | o: Toggle original | u/d: Scroll",
    )];
    if let (Ok(catalog), Some(entry)) = (app.store.catalog(), app.selected_entry()) {
        let (prev, next) = catalog.prev_next(&entry.id);
        if let Some(prev) = prev {
            help.push(Span::styled(
                format!(" | ← {}", prev.title),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(next) = next {
            help.push(Span::styled(
                format!(" | → {}", next.title),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(help)), outer[1]);
}
