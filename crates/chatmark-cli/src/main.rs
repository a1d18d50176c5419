mod render;

use anyhow::{Context, Result};
use chatmark_config::{Config, ConfigError};
use chatmark_engine::{
    RenderCache,
    chat::{LogLevel, Message, MessageView, Role, Session, visible_messages},
    io, parse_message_content,
    render::render_html,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Tui,
    Html,
    Json,
}

struct App {
    title: String,
    session: Session,
    level: LogLevel,
    cache: RenderCache,
    sidebar_open: bool,
    scroll: u16,
    content: Vec<Line<'static>>,
}

impl App {
    fn new(session: Session, config: &Config) -> Self {
        let mut app = Self {
            title: config.title.clone(),
            session,
            level: config.log_level,
            cache: RenderCache::new(),
            sidebar_open: config.sidebar_open,
            scroll: 0,
            content: Vec::new(),
        };
        app.rebuild_content();
        app
    }

    fn rebuild_content(&mut self) {
        self.cache
            .retain(self.session.messages.iter().map(|m| m.id.as_str()));

        let mut lines = Vec::new();
        for message in visible_messages(&self.session.messages, self.level) {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            let view = MessageView::build(message, self.level, &mut self.cache);
            lines.extend(render::message_lines(&view));
        }
        self.content = lines;
    }

    fn cycle_log_level(&mut self) {
        self.level = self.level.next();
        log::debug!("log level now {}", self.level.label());
        self.rebuild_content();
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn count(&self, role: Role) -> usize {
        self.session
            .messages
            .iter()
            .filter(|m| m.role == role)
            .count()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let mut output = Output::Tui;
    let mut transcript_arg = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--html" => output = Output::Html,
            "--json" => output = Output::Json,
            flag if flag.starts_with("--") => usage_and_exit(&args[0]),
            path if transcript_arg.is_none() => transcript_arg = Some(PathBuf::from(path)),
            _ => usage_and_exit(&args[0]),
        }
    }

    let config = match load_or_init_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let from_config = transcript_arg.is_none();
    let Some(transcript_path) = transcript_arg.or_else(|| config.transcript_path.clone()) else {
        eprintln!("Error: No transcript provided and none set in the config file");
        eprintln!("Usage: {} [--html|--json] <transcript>", args[0]);
        eprintln!("Or set transcript_path in {}", config_path.display());
        process::exit(1);
    };

    let session = match io::load_session(&transcript_path) {
        Ok(session) => session,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Transcript '{}'{} could not be loaded: {e}",
                transcript_path.display(),
                source
            );
            process::exit(1);
        }
    };
    log::info!(
        "Loaded {} messages from {}",
        session.messages.len(),
        transcript_path.display()
    );

    match output {
        Output::Html => print_html(&session.messages),
        Output::Json => print_json(&session.messages)?,
        Output::Tui => run_tui(session, &config, &transcript_path)?,
    }

    Ok(())
}

/// Loads the config, writing the defaults out on first run.
fn load_or_init_config(config_path: &Path) -> Result<Config, ConfigError> {
    if let Some(config) = Config::load_from_path(config_path)? {
        return Ok(config);
    }

    let config = Config::default();
    match config.save_to_path(config_path) {
        Ok(()) => log::info!("Wrote default config to {}", config_path.display()),
        Err(e) => log::warn!(
            "Could not write default config to {}: {e:#}",
            config_path.display()
        ),
    }
    Ok(config)
}

fn usage_and_exit(program: &str) -> ! {
    eprintln!("Usage: {program} [--html|--json] [transcript]");
    process::exit(1);
}

fn assistant_messages(messages: &[Message]) -> impl Iterator<Item = &Message> {
    messages
        .iter()
        .filter(|m| m.role == Role::Assistant && !m.content.is_empty())
}

fn print_html(messages: &[Message]) {
    for message in assistant_messages(messages) {
        println!("{}", render_html(&parse_message_content(message.content.as_str())));
    }
}

fn print_json(messages: &[Message]) -> Result<()> {
    let parsed: Vec<_> = assistant_messages(messages)
        .map(|m| {
            serde_json::json!({
                "id": m.id,
                "blocks": parse_message_content(m.content.as_str()),
            })
        })
        .collect();
    let json = serde_json::to_string_pretty(&parsed).context("Failed to serialize blocks")?;
    println!("{json}");
    Ok(())
}

fn run_tui(session: Session, config: &Config, transcript_path: &Path) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, config);
    log::debug!("viewing {}", transcript_path.display());

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => app.scroll = u16::MAX,
                KeyCode::Char('l') => app.cycle_log_level(),
                KeyCode::Char('s') => app.sidebar_open = !app.sidebar_open,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let main_area = if app.sidebar_open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(rows[0]);
        f.render_widget(session_panel(app), columns[1]);
        columns[0]
    } else {
        rows[0]
    };

    // Clamp so G lands on the last screenful.
    let visible = main_area.height.saturating_sub(2);
    let total = u16::try_from(app.content.len()).unwrap_or(u16::MAX);
    app.scroll = app.scroll.min(total.saturating_sub(visible));

    let content_text = if app.content.is_empty() {
        vec![Line::styled(
            "No messages to show",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        app.content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.as_str()),
        )
        .scroll((app.scroll, 0));
    f.render_widget(content, main_area);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("g/G: Top/Bottom | "),
        Span::raw(format!("l: Log level ({}) | ", app.level.label())),
        Span::raw("s: Session"),
    ]);
    f.render_widget(Paragraph::new(help_text), rows[1]);
}

fn session_panel(app: &App) -> Paragraph<'static> {
    Paragraph::new(session_lines(app))
        .block(Block::default().borders(Borders::ALL).title("Session"))
}

fn session_lines(app: &App) -> Vec<Line<'static>> {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let session = &app.session;

    let mut lines = vec![
        Line::styled(app.title.clone(), label),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::raw(session.status.clone()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Messages: ", label),
            Span::raw(session.messages.len().to_string()),
        ]),
        Line::raw(format!("  you: {}", app.count(Role::User))),
        Line::raw(format!("  assistant: {}", app.count(Role::Assistant))),
        Line::raw(format!("  tool: {}", app.count(Role::Tool))),
        Line::default(),
        Line::from(vec![
            Span::styled("Log level: ", label),
            Span::raw(app.level.label()),
        ]),
        Line::default(),
        Line::styled("Tools", label),
    ];

    if session.tools.is_empty() {
        lines.push(Line::styled("  No tools registered.", dim));
    }
    for tool in &session.tools {
        let mut spans = vec![Span::raw(format!("  {}", tool.name))];
        if !tool.description.is_empty() {
            spans.push(Span::styled(format!(" - {}", tool.description), dim));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::styled("History", label));
    if session.history.is_empty() {
        lines.push(Line::styled("  No saved chats yet.", dim));
    }
    for entry in &session.history {
        let mut spans = vec![Span::raw(format!("  {}", entry.display_title()))];
        if let Some(when) = entry.last_active() {
            spans.push(Span::styled(format!(" ({when})"), dim));
        }
        lines.push(Line::from(spans));
    }

    lines
}
