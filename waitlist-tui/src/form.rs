//! Form screen state and rendering: one bordered block per field, inline
//! errors, and a submit button, with keyboard navigation and scrolling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use waitlist_types::{
    FREQUENCIES, Field, FlagStore, InputKind, MEETUP_PLACES, Payload, Session,
};

use crate::Theme;

/// Extra vertical space between fields.
const FIELD_SPACING: u16 = 1;

/// Per-field UI state.
#[derive(Debug, Clone)]
enum Widget {
    /// Free text input; `cursor` is a byte offset into the draft value.
    Text { cursor: usize },
    /// Checkbox or radio list; `highlight` is the keyboard-highlighted row.
    Options { highlight: usize },
}

/// State of the signup form screen.
///
/// Holds only presentation state (focus, cursors, scroll); the draft and the
/// error map live in the [`Session`]. All key handling goes through
/// [`FormScreen::handle_key`], which returns a [`Payload`] when a valid
/// submission should be dispatched.
#[derive(Debug, Clone)]
pub struct FormScreen {
    widgets: Vec<Widget>,
    focus: usize,
    submit_focused: bool,
    scroll_offset: u16,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    /// Create a form with focus on the first field.
    pub fn new() -> Self {
        let widgets = Field::ALL
            .iter()
            .map(|field| match field {
                Field::MeetupPlaces | Field::Frequency => Widget::Options { highlight: 0 },
                _ => Widget::Text { cursor: 0 },
            })
            .collect();
        Self {
            widgets,
            focus: 0,
            submit_focused: false,
            scroll_offset: 0,
        }
    }

    /// The currently focused field, or `None` when the submit button has focus.
    pub fn focused_field(&self) -> Option<Field> {
        (!self.submit_focused).then(|| Field::ALL[self.focus])
    }

    /// Whether the submit button has focus.
    pub fn submit_focused(&self) -> bool {
        self.submit_focused
    }

    fn is_option_field(&self) -> bool {
        !self.submit_focused && matches!(self.widgets[self.focus], Widget::Options { .. })
    }

    fn next_field(&mut self) {
        if self.submit_focused {
            return;
        }
        if self.focus + 1 < self.widgets.len() {
            self.focus += 1;
        } else {
            self.submit_focused = true;
        }
    }

    fn prev_field(&mut self) {
        if self.submit_focused {
            self.submit_focused = false;
            self.focus = self.widgets.len() - 1;
        } else if self.focus > 0 {
            self.focus -= 1;
        }
    }

    fn option_count(field: Field) -> usize {
        match field {
            Field::MeetupPlaces => MEETUP_PLACES.len(),
            Field::Frequency => FREQUENCIES.len(),
            _ => 0,
        }
    }

    fn option_move(&mut self, down: bool) {
        let field = Field::ALL[self.focus];
        let count = Self::option_count(field);
        if count == 0 {
            return;
        }
        if let Widget::Options { highlight } = &mut self.widgets[self.focus] {
            *highlight = if down {
                (*highlight + 1) % count
            } else {
                (*highlight + count - 1) % count
            };
        }
    }

    /// Toggle the highlighted checkbox or select the highlighted radio option.
    fn select_option<F: FlagStore>(&mut self, session: &mut Session<F>) {
        let Widget::Options { highlight } = self.widgets[self.focus] else {
            return;
        };
        match Field::ALL[self.focus] {
            Field::MeetupPlaces => {
                let place = MEETUP_PLACES[highlight];
                let checked = !session.draft().has_place(place);
                session.update(Field::MeetupPlaces, place, InputKind::Checkbox { checked });
            }
            Field::Frequency => {
                session.update(Field::Frequency, FREQUENCIES[highlight], InputKind::Radio);
            }
            _ => {}
        }
    }

    fn insert_char<F: FlagStore>(&mut self, c: char, session: &mut Session<F>) {
        let field = Field::ALL[self.focus];
        let Widget::Text { cursor } = &mut self.widgets[self.focus] else {
            return;
        };
        let mut value = session.draft().text(field).to_string();
        value.insert(*cursor, c);
        *cursor += c.len_utf8();
        session.update(field, &value, InputKind::Text);
    }

    fn backspace<F: FlagStore>(&mut self, session: &mut Session<F>) {
        let field = Field::ALL[self.focus];
        let Widget::Text { cursor } = &mut self.widgets[self.focus] else {
            return;
        };
        let mut value = session.draft().text(field).to_string();
        if let Some((idx, _)) = value[..*cursor].char_indices().next_back() {
            value.remove(idx);
            *cursor = idx;
            session.update(field, &value, InputKind::Text);
        }
    }

    fn cursor_left<F: FlagStore>(&mut self, session: &Session<F>) {
        let field = Field::ALL[self.focus];
        if let Widget::Text { cursor } = &mut self.widgets[self.focus]
            && let Some((idx, _)) = session.draft().text(field)[..*cursor]
                .char_indices()
                .next_back()
        {
            *cursor = idx;
        }
    }

    fn cursor_right<F: FlagStore>(&mut self, session: &Session<F>) {
        let field = Field::ALL[self.focus];
        if let Widget::Text { cursor } = &mut self.widgets[self.focus] {
            let value = session.draft().text(field);
            if let Some(c) = value[*cursor..].chars().next() {
                *cursor += c.len_utf8();
            }
        }
    }

    /// Ask the session to validate and enter the submitting state.
    ///
    /// On validation errors, focus jumps to the first failing field.
    fn try_submit<F: FlagStore>(&mut self, session: &mut Session<F>) -> Option<Payload> {
        let payload = session.begin_submit();
        if payload.is_none()
            && let Some(first) = session.errors().first()
            && let Some(idx) = Field::ALL.iter().position(|f| *f == first)
        {
            self.focus = idx;
            self.submit_focused = false;
        }
        payload
    }

    /// Handle one key press. Returns the payload to dispatch when the user
    /// triggered a submission of a valid draft.
    pub fn handle_key<F: FlagStore>(
        &mut self,
        key: KeyEvent,
        session: &mut Session<F>,
    ) -> Option<Payload> {
        match key.code {
            // Ctrl+Enter or F10 submits from anywhere in the form. Many
            // terminals cannot report Ctrl+Enter as a distinct key, so F10
            // covers those.
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.try_submit(session);
            }
            KeyCode::F(10) => return self.try_submit(session),
            KeyCode::Enter => {
                if self.submit_focused {
                    return self.try_submit(session);
                } else if self.is_option_field() {
                    self.select_option(session);
                } else {
                    self.next_field();
                }
            }
            KeyCode::BackTab => self.prev_field(),
            KeyCode::Tab => self.next_field(),
            KeyCode::Up => {
                if self.is_option_field() {
                    self.option_move(false);
                } else {
                    self.prev_field();
                }
            }
            KeyCode::Down => {
                if self.is_option_field() {
                    self.option_move(true);
                } else {
                    self.next_field();
                }
            }
            KeyCode::Char(' ') if self.is_option_field() => self.select_option(session),
            KeyCode::Char(c) if !self.submit_focused => self.insert_char(c, session),
            KeyCode::Backspace if !self.submit_focused => self.backspace(session),
            KeyCode::Left if !self.submit_focused => self.cursor_left(session),
            KeyCode::Right if !self.submit_focused => self.cursor_right(session),
            KeyCode::Home if !self.submit_focused => {
                if let Widget::Text { cursor } = &mut self.widgets[self.focus] {
                    *cursor = 0;
                }
            }
            KeyCode::End if !self.submit_focused => {
                let field = Field::ALL[self.focus];
                let len = session.draft().text(field).len();
                if let Widget::Text { cursor } = &mut self.widgets[self.focus] {
                    *cursor = len;
                }
            }
            _ => {}
        }
        None
    }

    fn field_height(field: Field) -> u16 {
        match field {
            Field::MeetupPlaces => 2 + MEETUP_PLACES.len() as u16,
            Field::Frequency => 2 + FREQUENCIES.len() as u16,
            // The free-text prompts get an extra content row.
            Field::Interests | Field::Reason => 4,
            _ => 3,
        }
    }

    fn field_y(&self, target: usize) -> u16 {
        Field::ALL[..target]
            .iter()
            .map(|f| Self::field_height(*f) + FIELD_SPACING)
            .sum()
    }

    /// Keep the focused field inside the viewport.
    fn adjust_scroll(&mut self, viewport: u16) {
        let target = if self.submit_focused {
            self.widgets.len() - 1
        } else {
            self.focus
        };
        let top = self.field_y(target);
        let bottom = top + Self::field_height(Field::ALL[target]);
        if top < self.scroll_offset {
            self.scroll_offset = top;
        }
        if bottom > self.scroll_offset + viewport {
            self.scroll_offset = bottom.saturating_sub(viewport);
        }
    }

    /// Render the form fields into `area`.
    pub fn draw<F: FlagStore>(&mut self, frame: &mut Frame, area: Rect, session: &Session<F>, theme: &Theme) {
        self.adjust_scroll(area.height);

        for (idx, field) in Field::ALL.iter().enumerate() {
            let top = self.field_y(idx);
            let height = Self::field_height(*field);
            if top >= self.scroll_offset + area.height {
                break;
            }
            // Skip fields clipped at either edge; partial blocks render badly.
            let y = top.saturating_sub(self.scroll_offset);
            if top < self.scroll_offset || y + height > area.height {
                continue;
            }
            let field_area = Rect {
                x: area.x,
                y: area.y + y,
                width: area.width,
                height,
            };
            let focused = !self.submit_focused && idx == self.focus;
            self.draw_field(frame, field_area, *field, idx, focused, session, theme);
        }
    }

    fn draw_field<F: FlagStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: Field,
        idx: usize,
        focused: bool,
        session: &Session<F>,
        theme: &Theme,
    ) {
        let error = session.errors().get(field);
        let border_color = if error.is_some() {
            theme.error
        } else if focused {
            theme.primary
        } else {
            theme.border
        };

        // Only name and email carry the marker; the validator enforces more.
        let marker = if field.marked_required() { " *" } else { "" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {}{marker} ", field.label()))
            .title_style(Style::default().fg(if focused { theme.highlight } else { theme.text }));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.widgets[idx] {
            Widget::Text { cursor } => {
                let value = session.draft().text(field);
                let cursor = (*cursor).min(value.len());
                if value.is_empty() {
                    let hint = Paragraph::new(placeholder(field))
                        .style(Style::default().fg(theme.placeholder));
                    frame.render_widget(hint, inner);
                } else {
                    let text = Paragraph::new(value).style(Style::default().fg(theme.text));
                    frame.render_widget(text, inner);
                }
                if focused {
                    let cursor_x = inner.x + value[..cursor].chars().count() as u16;
                    if cursor_x < inner.x + inner.width {
                        frame.set_cursor_position((cursor_x, inner.y));
                    }
                }
            }
            Widget::Options { highlight } => {
                let items: Vec<ListItem> = match field {
                    Field::MeetupPlaces => MEETUP_PLACES
                        .iter()
                        .enumerate()
                        .map(|(i, place)| {
                            let checked = session.draft().has_place(place);
                            let item_marker = if checked { "[✓]" } else { "[ ]" };
                            let style = option_style(checked, focused && i == *highlight, theme);
                            ListItem::new(format!("{item_marker} {place}")).style(style)
                        })
                        .collect(),
                    Field::Frequency => FREQUENCIES
                        .iter()
                        .enumerate()
                        .map(|(i, freq)| {
                            let selected = session.draft().frequency == *freq;
                            let item_marker = if selected { "(●)" } else { "( )" };
                            let style = option_style(selected, focused && i == *highlight, theme);
                            ListItem::new(format!("{item_marker} {freq}")).style(style)
                        })
                        .collect(),
                    _ => Vec::new(),
                };
                frame.render_widget(List::new(items), inner);
            }
        }

        if let Some(error) = error {
            let line = Line::styled(format!("⚠ {error}"), Style::default().fg(theme.error));
            let error_area = Rect {
                x: area.x + 1,
                y: area.y + area.height - 1,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            frame.render_widget(Paragraph::new(line), error_area);
        }
    }
}

fn option_style(active: bool, highlighted: bool, theme: &Theme) -> Style {
    if highlighted {
        Style::default()
            .fg(theme.text)
            .bg(theme.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else if active {
        Style::default().fg(theme.highlight)
    } else {
        Style::default().fg(theme.text)
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your full name",
        Field::Email => "(We'll send you early access and updates)",
        Field::Profession => "(Helps us match you better with people who get you)",
        Field::Interests => "(Let us know what you love so we can match you better)",
        Field::Reason => "(Short answer – helps us make the experience better for you)",
        Field::MeetupPlaces | Field::Frequency => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waitlist_types::InMemoryFlag;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form_session() -> Session<InMemoryFlag> {
        let mut session = Session::new(InMemoryFlag::new()).unwrap();
        session.join_waitlist();
        session
    }

    #[test]
    fn tab_walks_fields_then_submit_button() {
        let mut form = FormScreen::new();
        let mut session = form_session();

        assert_eq!(form.focused_field(), Some(Field::Name));
        for _ in 0..Field::ALL.len() {
            form.handle_key(key(KeyCode::Tab), &mut session);
        }
        assert!(form.submit_focused());
        assert_eq!(form.focused_field(), None);

        form.handle_key(key(KeyCode::BackTab), &mut session);
        assert_eq!(form.focused_field(), Some(Field::Reason));
    }

    #[test]
    fn typing_edits_the_draft() {
        let mut form = FormScreen::new();
        let mut session = form_session();

        for c in "Ana".chars() {
            form.handle_key(key(KeyCode::Char(c)), &mut session);
        }
        assert_eq!(session.draft().name, "Ana");

        form.handle_key(key(KeyCode::Backspace), &mut session);
        assert_eq!(session.draft().name, "An");
    }

    #[test]
    fn space_toggles_checkbox_twice_back_to_prior_state() {
        let mut form = FormScreen::new();
        let mut session = form_session();

        // Move to the meetup places field.
        for _ in 0..3 {
            form.handle_key(key(KeyCode::Tab), &mut session);
        }
        assert_eq!(form.focused_field(), Some(Field::MeetupPlaces));

        form.handle_key(key(KeyCode::Char(' ')), &mut session);
        assert!(session.draft().has_place(MEETUP_PLACES[0]));
        form.handle_key(key(KeyCode::Char(' ')), &mut session);
        assert!(session.draft().meetup_places.is_empty());
    }

    #[test]
    fn radio_selection_replaces_previous_choice() {
        let mut form = FormScreen::new();
        let mut session = form_session();

        for _ in 0..4 {
            form.handle_key(key(KeyCode::Tab), &mut session);
        }
        assert_eq!(form.focused_field(), Some(Field::Frequency));

        form.handle_key(key(KeyCode::Enter), &mut session);
        assert_eq!(session.draft().frequency, FREQUENCIES[0]);

        form.handle_key(key(KeyCode::Down), &mut session);
        form.handle_key(key(KeyCode::Enter), &mut session);
        assert_eq!(session.draft().frequency, FREQUENCIES[1]);
    }

    #[test]
    fn submitting_invalid_draft_focuses_first_error() {
        let mut form = FormScreen::new();
        let mut session = form_session();

        for _ in 0..Field::ALL.len() {
            form.handle_key(key(KeyCode::Tab), &mut session);
        }
        assert!(form.submit_focused());

        let payload = form.handle_key(key(KeyCode::Enter), &mut session);
        assert!(payload.is_none());
        assert!(!session.errors().is_empty());
        assert_eq!(form.focused_field(), Some(Field::Name));
    }

    #[test]
    fn submitting_valid_draft_yields_payload_once() {
        let mut form = FormScreen::new();
        let mut session = form_session();
        session.update(Field::Name, "Ana", InputKind::Text);
        session.update(Field::Email, "ana@x.com", InputKind::Text);
        session.update(Field::Profession, "Designer", InputKind::Text);
        session.update(
            Field::MeetupPlaces,
            MEETUP_PLACES[0],
            InputKind::Checkbox { checked: true },
        );
        session.update(Field::Frequency, FREQUENCIES[0], InputKind::Radio);
        session.update(Field::Interests, "art", InputKind::Text);
        session.update(Field::Reason, "curious", InputKind::Text);

        let submit = KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL);
        let payload = form.handle_key(submit, &mut session);
        assert!(payload.is_some());
        assert!(session.is_submitting());

        // The in-flight guard blocks a second submission.
        assert!(form.handle_key(submit, &mut session).is_none());
    }

    #[test]
    fn f10_submits_valid_draft() {
        let mut form = FormScreen::new();
        let mut session = form_session();
        session.update(Field::Name, "Ana", InputKind::Text);
        session.update(Field::Email, "ana@x.com", InputKind::Text);
        session.update(Field::Profession, "Designer", InputKind::Text);
        session.update(
            Field::MeetupPlaces,
            MEETUP_PLACES[0],
            InputKind::Checkbox { checked: true },
        );
        session.update(Field::Frequency, FREQUENCIES[0], InputKind::Radio);
        session.update(Field::Interests, "art", InputKind::Text);
        session.update(Field::Reason, "curious", InputKind::Text);

        let payload = form.handle_key(key(KeyCode::F(10)), &mut session);
        assert!(payload.is_some());
        assert!(session.is_submitting());
    }
}
