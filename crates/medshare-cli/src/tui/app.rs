use std::collections::BTreeSet;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::view;
use medshare_core::catalog::Catalog;
use medshare_core::config::Config;
use medshare_core::matcher::{self, Match, SearchOutcome};

pub struct PickerState<'a> {
    pub catalog: &'a Catalog,
    pub query: String,
    pub outcome: SearchOutcome,
    pub selected: usize,
    pub multi: bool,
    /// Catalog indices chosen so far in multi mode.
    pub chosen: BTreeSet<usize>,
}

pub enum PickerStep {
    Continue,
    Cancel,
    Done(Vec<String>),
}

impl<'a> PickerState<'a> {
    pub fn new(catalog: &'a Catalog, multi: bool) -> Self {
        Self {
            catalog,
            query: String::new(),
            outcome: SearchOutcome::Cleared,
            selected: 0,
            multi,
            chosen: BTreeSet::new(),
        }
    }

    pub fn highlighted(&self) -> Option<&Match> {
        self.outcome.matches().get(self.selected)
    }

    fn refresh(&mut self) {
        self.outcome = matcher::search(&self.query, self.catalog.names());
        self.selected = 0;
    }

    fn chosen_names(&self) -> Vec<String> {
        self.chosen
            .iter()
            .map(|&i| self.catalog.names()[i].clone())
            .collect()
    }

    pub fn handle_key(&mut self, code: KeyCode) -> PickerStep {
        match code {
            KeyCode::Esc => return PickerStep::Cancel,
            KeyCode::Enter => {
                if self.multi {
                    if self.chosen.is_empty()
                        && let Some(m) = self.highlighted()
                    {
                        return PickerStep::Done(vec![m.name.clone()]);
                    }
                    return PickerStep::Done(self.chosen_names());
                }
                return match self.highlighted() {
                    Some(m) => PickerStep::Done(vec![m.name.clone()]),
                    None => PickerStep::Cancel,
                };
            }
            KeyCode::Tab if self.multi => {
                if let Some(index) = self.highlighted().map(|m| m.index)
                    && !self.chosen.remove(&index)
                {
                    self.chosen.insert(index);
                }
            }
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected + 1 < self.outcome.matches().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refresh();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refresh();
            }
            _ => {}
        }
        PickerStep::Continue
    }
}

/// Run the search dropdown on stderr. Returns the chosen medicine names,
/// empty if the user cancelled.
pub fn run_picker(
    catalog: &Catalog,
    config: &Config,
    multi: bool,
) -> color_eyre::Result<Vec<String>> {
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, cursor::Hide)?;
    terminal::enable_raw_mode()?;

    let result = event_loop(catalog, config, multi);

    terminal::disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen, cursor::Show)?;

    result
}

fn event_loop(catalog: &Catalog, config: &Config, multi: bool) -> color_eyre::Result<Vec<String>> {
    let backend = CrosstermBackend::new(io::stderr());
    let mut terminal = Terminal::new(backend)?;
    let mut state = PickerState::new(catalog, multi);

    loop {
        terminal.draw(|f| view::render_picker(f, &state, &config.placeholder))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
        {
            if kind != KeyEventKind::Press {
                continue;
            }
            match state.handle_key(code) {
                PickerStep::Continue => {}
                PickerStep::Cancel => return Ok(Vec::new()),
                PickerStep::Done(names) => return Ok(names),
            }
        }
    }
}
