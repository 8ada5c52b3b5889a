//! Application driver: terminal lifecycle, the three screens, and the
//! event loop. The submission request runs on a worker thread and reports
//! back over a channel, so the form keeps rendering while it is in flight.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use waitlist_types::{FlagStore, Outcome, Session, SessionError, SubmitWaitlist, View};

use crate::{FormScreen, Theme};

/// How long to wait for input before redrawing (keeps the in-flight label live).
const TICK: Duration = Duration::from_millis(100);

/// Error type for the TUI driver.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The session failed to persist its state.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// The waitlist TUI application.
#[derive(Debug, Clone)]
pub struct WaitlistTui {
    title: String,
    theme: Theme,
}

impl Default for WaitlistTui {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistTui {
    /// Create the application with default title and theme.
    pub fn new() -> Self {
        Self {
            title: "Join WHERE Early Access – Quick Survey".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the signup flow until the user quits.
    ///
    /// Returns the session so callers can inspect the final state.
    pub fn run<F, T>(&self, mut session: Session<F>, submitter: T) -> Result<Session<F>, TuiError>
    where
        F: FlagStore,
        T: SubmitWaitlist + Send + Sync + 'static,
    {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal, &mut session, Arc::new(submitter));
        restore_terminal(&mut terminal)?;
        result.map(|()| session)
    }

    fn event_loop<F, T>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut Session<F>,
        submitter: Arc<T>,
    ) -> Result<(), TuiError>
    where
        F: FlagStore,
        T: SubmitWaitlist + Send + Sync + 'static,
    {
        let mut form = FormScreen::new();
        let (tx, rx): (Sender<Outcome>, Receiver<Outcome>) = mpsc::channel();

        loop {
            terminal.draw(|frame| self.draw(frame, session, &mut form))?;

            if session.is_submitting()
                && let Ok(outcome) = rx.try_recv()
            {
                session.finish_submit(outcome)?;
                continue;
            }

            if !event::poll(TICK)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Esc {
                return Ok(());
            }

            match session.view() {
                View::Landing => {
                    if key.code == KeyCode::Enter {
                        session.join_waitlist();
                    }
                }
                View::Success => {
                    if key.code == KeyCode::Enter {
                        session.back_to_home();
                    }
                }
                View::Form => {
                    if let Some(payload) = form.handle_key(key, session) {
                        let tx = tx.clone();
                        let submitter = Arc::clone(&submitter);
                        thread::spawn(move || {
                            // The receiver only goes away when the loop exits.
                            let _ = tx.send(submitter.submit(&payload));
                        });
                    }
                }
            }
        }
    }

    fn draw<F: FlagStore>(&self, frame: &mut Frame, session: &Session<F>, form: &mut FormScreen) {
        match session.view() {
            View::Landing => self.draw_landing(frame),
            View::Form => self.draw_form(frame, session, form),
            View::Success => self.draw_success(frame),
        }
    }

    fn draw_landing(&self, frame: &mut Frame) {
        let theme = &self.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let headline = Paragraph::new("Meet People Who Get You")
            .style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[1]);

        let blurb = Paragraph::new(
            "WHERE uses AI to connect you with people who share your interests — \
             and chooses the best place and time for your first meetup.",
        )
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(blurb, chunks[2]);

        let button = Paragraph::new("[ Join the Waitlist ]")
            .style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        frame.render_widget(button, chunks[3]);

        let help = Paragraph::new("Enter: Join the Waitlist  Esc: Quit")
            .style(Style::default().fg(theme.border));
        frame.render_widget(help, chunks[5]);
    }

    fn draw_form<F: FlagStore>(&self, frame: &mut Frame, session: &Session<F>, form: &mut FormScreen) {
        let theme = &self.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(10),   // Fields
                Constraint::Length(1), // Notice
                Constraint::Length(3), // Submit button
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let title = Paragraph::new(self.title.as_str())
            .style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(title, chunks[0]);

        form.draw(frame, chunks[1], session, theme);

        if let Some(notice) = session.notice() {
            let line = Paragraph::new(format!("⚠ {notice}"))
                .style(Style::default().fg(theme.error))
                .alignment(Alignment::Center);
            frame.render_widget(line, chunks[2]);
        }

        let label = if session.is_submitting() {
            "Submitting..."
        } else if form.submit_focused() {
            "[ Submit ]"
        } else {
            "Submit"
        };
        let submit_style = if form.submit_focused() {
            Style::default()
                .fg(theme.text)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(label)
            .style(submit_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if form.submit_focused() {
                        theme.primary
                    } else {
                        theme.border
                    })),
            );
        frame.render_widget(button, chunks[3]);

        let help = "Tab: Next  ↑/↓: Navigate  Space/Enter: Select  F10/Ctrl+Enter: Submit  Esc: Quit";
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(theme.border)),
            chunks[4],
        );
    }

    fn draw_success(&self, frame: &mut Frame) {
        let theme = &self.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let headline = Paragraph::new("SUCCESS! 🎉🚀")
            .style(
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[1]);

        let body = Paragraph::new(
            "Welcome to the WHERE Beta Squad!\n\
             You've joined the waitlist. Get ready for AI-powered meetups!",
        )
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[2]);

        let button = Paragraph::new("[ Back to Home ]")
            .style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.success)),
            );
        frame.render_widget(button, chunks[3]);

        let help = Paragraph::new("Enter: Back to Home  Esc: Quit")
            .style(Style::default().fg(theme.border));
        frame.render_widget(help, chunks[5]);
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), TuiError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods() {
        let app = WaitlistTui::new().with_title("Test");
        let _app = app.with_theme(Theme::default());
    }

    #[test]
    fn error_display() {
        let err = TuiError::Io(io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
