//! Quick-add form component.
//!
//! Collects a title, a due date and a category, validates the three fields
//! as a unit on submission and hands a validated [`TaskDraft`] upward as an
//! action. Failing fields keep their input and show their message right
//! beneath the field; a successful submit resets the whole form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::{CATEGORY_UNSET, FIELD_CATEGORY, FIELD_DUE_DATE, FIELD_DUE_DATE_HINT, FIELD_TITLE};
use crate::task::TaskDraft;
use crate::ui::core::{
    actions::{Action, PaneFocus},
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::validation::{validate_draft, ValidationReport};

/// Fields of the form in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    DueDate,
    Category,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::DueDate,
            FormField::DueDate => FormField::Category,
            FormField::Category => FormField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::DueDate => FormField::Title,
            FormField::Category => FormField::DueDate,
        }
    }
}

/// Single-line input buffer with a char-aware cursor
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn value(&self) -> &str {
        &self.value
    }

    fn byte_pos(&self) -> usize {
        self.value.chars().take(self.cursor).map(char::len_utf8).sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos();
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_pos();
            let prev_char_len = self
                .value
                .chars()
                .nth(self.cursor - 1)
                .map(char::len_utf8)
                .unwrap_or(1);
            self.value.remove(byte_pos - prev_char_len);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let byte_pos = self.byte_pos();
            self.value.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

pub struct TaskFormComponent {
    pub categories: Vec<String>,
    pub focused_field: FormField,
    pub title: InputBuffer,
    pub due_date: InputBuffer,
    /// Index into `categories`; `None` until the user picks one
    pub selected_category: Option<usize>,
    pub errors: ValidationReport,
    show_date_hint: bool,
    has_focus: bool,
}

impl TaskFormComponent {
    pub fn new(categories: Vec<String>, show_date_hint: bool) -> Self {
        Self {
            categories,
            focused_field: FormField::Title,
            title: InputBuffer::default(),
            due_date: InputBuffer::default(),
            selected_category: None,
            errors: ValidationReport::default(),
            show_date_hint,
            has_focus: false,
        }
    }

    /// Current field values as a draft payload
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.value().to_string(),
            due_date: self.due_date.value().to_string(),
            category: self
                .selected_category
                .and_then(|index| self.categories.get(index))
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Clear every field, error and the focus position
    pub fn reset(&mut self) {
        self.title.clear();
        self.due_date.clear();
        self.selected_category = None;
        self.errors = ValidationReport::default();
        self.focused_field = FormField::Title;
    }

    /// Validate all fields atomically; emit the draft only when all pass.
    fn submit(&mut self) -> Action {
        let draft = self.draft();
        let report = validate_draft(&draft, &self.categories);

        if report.is_valid() {
            self.reset();
            Action::SubmitDraft(draft)
        } else {
            self.errors = report;
            Action::None
        }
    }

    fn edit_buffer(buffer: &mut InputBuffer, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) => buffer.insert(c),
            KeyCode::Backspace => buffer.backspace(),
            KeyCode::Delete => buffer.delete(),
            KeyCode::Left => buffer.move_left(),
            KeyCode::Right => buffer.move_right(),
            _ => {}
        }
        Action::None
    }

    fn cycle_category(&mut self, key: KeyEvent) -> Action {
        if self.categories.is_empty() {
            return Action::None;
        }

        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                self.selected_category = Some(match self.selected_category {
                    None => 0,
                    Some(index) => (index + 1) % self.categories.len(),
                });
            }
            KeyCode::Left => {
                self.selected_category = Some(match self.selected_category {
                    None | Some(0) => self.categories.len() - 1,
                    Some(index) => index - 1,
                });
            }
            _ => {}
        }
        Action::None
    }

    fn input_display(&self, buffer: &InputBuffer, field: FormField) -> String {
        if self.has_focus && self.focused_field == field {
            format!("{}█", buffer.value())
        } else {
            buffer.value().to_string()
        }
    }

    fn field_block(&self, title: &str, field: FormField) -> Block<'static> {
        let active = self.has_focus && self.focused_field == field;
        let border_style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::White))
    }

    fn render_error(&self, f: &mut Frame, rect: Rect, error: Option<&crate::validation::FieldError>) {
        if let Some(error) = error {
            let paragraph = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
            f.render_widget(paragraph, rect);
        }
    }
}

impl Component for TaskFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::FocusPane(PaneFocus::Table),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = self.focused_field.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = self.focused_field.previous();
                Action::None
            }
            _ => match self.focused_field {
                FormField::Title => Self::edit_buffer(&mut self.title, key),
                FormField::DueDate => Self::edit_buffer(&mut self.due_date, key),
                FormField::Category => self.cycle_category(key),
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let outer_style = if self.has_focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(outer_style)
            .title(" New Task ")
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let rows = LayoutManager::form_layout(inner);

        let title_paragraph = Paragraph::new(self.input_display(&self.title, FormField::Title))
            .block(self.field_block(FIELD_TITLE, FormField::Title))
            .style(Style::default().fg(Color::White));
        f.render_widget(title_paragraph, rows[0]);
        self.render_error(f, rows[1], self.errors.title.as_ref());

        let due_title = if self.show_date_hint { FIELD_DUE_DATE_HINT } else { FIELD_DUE_DATE };
        let due_paragraph = Paragraph::new(self.input_display(&self.due_date, FormField::DueDate))
            .block(self.field_block(due_title, FormField::DueDate))
            .style(Style::default().fg(Color::White));
        f.render_widget(due_paragraph, rows[2]);
        self.render_error(f, rows[3], self.errors.due_date.as_ref());

        let (category_text, category_style) = match self.selected_category.and_then(|i| self.categories.get(i)) {
            Some(category) => (category.clone(), Style::default().fg(Color::White)),
            None => (CATEGORY_UNSET.to_string(), Style::default().fg(Color::DarkGray)),
        };
        let category_paragraph = Paragraph::new(category_text)
            .block(self.field_block(FIELD_CATEGORY, FormField::Category))
            .style(category_style);
        f.render_widget(category_paragraph, rows[4]);
        self.render_error(f, rows[5], self.errors.category.as_ref());
    }

    fn on_focus(&mut self) {
        self.has_focus = true;
    }

    fn on_blur(&mut self) {
        self.has_focus = false;
    }
}
