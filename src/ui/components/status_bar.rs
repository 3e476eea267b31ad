//! Status bar component

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::core::{
    actions::{Action, PaneFocus},
    Component,
};

/// One-line bar with the task count, key hints for the focused pane and the
/// outcome of the last mutation.
pub struct StatusBarComponent {
    task_count: usize,
    focus: PaneFocus,
    message: Option<String>,
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {
            task_count: 0,
            focus: PaneFocus::default(),
            message: None,
        }
    }

    pub fn update_data(&mut self, task_count: usize, focus: PaneFocus) {
        self.task_count = task_count;
        self.focus = focus;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            PaneFocus::Form => "Tab/↓: next field • Enter: add task • Esc: task list",
            PaneFocus::Table => "j/k: move • d: delete • Tab: new task • q: quit",
        }
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let status_text = match &self.message {
            Some(message) => format!("{} tasks • {}", self.task_count, message),
            None => format!("{} tasks • {}", self.task_count, self.hints()),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, rect);
    }
}
