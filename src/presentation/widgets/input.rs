//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text input field widget.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    uppercase: bool,
    max_len: Option<usize>,
    accept: fn(char) -> bool,
    placeholder: String,
    label: String,
    accent: Color,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            uppercase: false,
            max_len: None,
            accept: |c| !c.is_control(),
            placeholder: String::new(),
            label: label.into(),
            accent: Color::Cyan,
        }
    }

    /// Upper-cases typed characters.
    #[must_use]
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Limits the value to `max` characters.
    #[must_use]
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Drops typed characters rejected by `accept`.
    #[must_use]
    pub fn accept(mut self, accept: fn(char) -> bool) -> Self {
        self.accept = accept;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets border colour while focused.
    #[must_use]
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns value length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns whether the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Sets value, applying the same rules as typing.
    pub fn set_value(&mut self, value: &str) {
        self.clear();
        for c in value.chars() {
            self.input_char(c);
        }
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        if !(self.accept)(c) {
            return;
        }
        let remaining = self
            .max_len
            .map_or(usize::MAX, |max| max.saturating_sub(self.len()));
        if remaining == 0 {
            return;
        }

        let text: String = if self.uppercase {
            c.to_uppercase().take(remaining).collect()
        } else {
            c.to_string()
        };
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, &text);
        self.cursor += text.chars().count();
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Applies an editing key. Returns whether the key was consumed.
    pub fn handle_edit_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        use crossterm::event::{KeyCode, KeyModifiers};

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_char(c);
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let (display, text_style) = if self.value.is_empty() {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else {
            (self.value.as_str(), Style::default().fg(Color::White))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        block.render(area, buf);
        Paragraph::new(display).style(text_style).render(inner, buf);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let offset = u16::try_from(self.cursor).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(offset);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Test");
        assert!(input.is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_uppercase_and_max_len() {
        let mut input = TextInput::new("VIN").uppercase().max_len(3);
        input.set_value("abcd");
        assert_eq!(input.value(), "ABC");
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_accept_filter() {
        let mut input = TextInput::new("VIN").accept(|c| !c.is_whitespace());
        input.set_value("a b");
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_cursor_editing() {
        let mut input = TextInput::new("URL");
        input.set_value("ac");
        input.move_left();
        input.input_char('b');
        assert_eq!(input.value(), "abc");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_control_chars_not_consumed_as_text() {
        let mut input = TextInput::new("URL");
        let consumed = input.handle_edit_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(!consumed);
        assert!(input.is_empty());

        assert!(input.handle_edit_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(input.value(), "x");
    }
}
