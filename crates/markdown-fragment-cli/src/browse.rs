use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_fragment_engine::{MarkdownFile, Pipeline, RenderOptions, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Html,
    Source,
}

struct App {
    notes_path: PathBuf,
    pipeline: Pipeline,
    files: Vec<MarkdownFile>,
    file_list_state: ListState,
    view: View,
    source: String,
    html: String,
    status: Option<String>,
}

impl App {
    fn new(notes_path: PathBuf, options: RenderOptions) -> Result<Self> {
        let files = io::list_markdown_files(&notes_path)?;

        let mut app = Self {
            notes_path,
            pipeline: Pipeline::new(options),
            files,
            file_list_state: ListState::default(),
            view: View::Html,
            source: String::new(),
            html: String::new(),
            status: None,
        };

        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn selected_file(&self) -> Option<&MarkdownFile> {
        self.file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self.selected_file() else {
            return;
        };

        match io::read_file(file.relative_path(), &self.notes_path) {
            Ok(source) => {
                self.html = self.pipeline.run(&source);
                self.source = source;
                self.status = None;
            }
            Err(e) => {
                self.source.clear();
                self.html.clear();
                self.status = Some(format!("Error reading file: {e}"));
            }
        }
    }

    /// Rescans the directory and re-renders the selected file from disk.
    fn reload(&mut self) -> Result<()> {
        let selected = self.selected_file().cloned();
        self.files = io::list_markdown_files(&self.notes_path)?;

        let index = selected
            .and_then(|file| self.files.iter().position(|f| *f == file))
            .or(if self.files.is_empty() { None } else { Some(0) });
        self.file_list_state.select(index);

        if index.is_some() {
            self.update_content_for_selection();
        } else {
            self.source.clear();
            self.html.clear();
        }
        log::debug!("reloaded {} files", self.files.len());
        Ok(())
    }

    fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Html => View::Source,
            View::Source => View::Html,
        };
    }

    fn content_lines(&self) -> Vec<String> {
        if let Some(status) = &self.status {
            return vec![status.clone()];
        }
        let text = match self.view {
            View::Html => &self.html,
            View::Source => &self.source,
        };
        text.lines().map(str::to_string).collect()
    }
}

pub fn run(notes_path: PathBuf, options: RenderOptions) -> Result<()> {
    let mut app = App::new(notes_path, options)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Char('r') => {
                    if let Err(e) = app.reload() {
                        app.status = Some(format!("Reload failed: {e}"));
                    }
                }
                KeyCode::Tab => app.toggle_view(),
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

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(file.relative_path().as_str().to_string())))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    let lines = app.content_lines();
    let content_text: Vec<Line> = if lines.is_empty() {
        vec![Line::from("Select a file to view its content")]
    } else {
        lines.into_iter().map(Line::from).collect()
    };

    let title = match (app.selected_file(), app.view) {
        (Some(file), View::Html) => format!("{} (html)", file.html_file_name()),
        (Some(file), View::Source) => format!("{} (source)", file.display_name()),
        (None, _) => "Content".to_string(),
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("r: Re-render | "),
        Span::raw("Tab: HTML/Source"),
    ]);

    f.render_widget(Paragraph::new(help), rows[1]);
}
