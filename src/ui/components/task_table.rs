//! Task table component.
//!
//! Renders the current task collection as a four-column table (title, due
//! date, category, delete hint) in insertion order, or the empty-state text
//! when there is nothing to show. The component never mutates its input:
//! the delete key only emits a deletion request for the selected row's id.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::constants::EMPTY_TASKS_MESSAGE;
use crate::task::Task;
use crate::ui::core::{
    actions::{Action, PaneFocus},
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::date;

pub struct TaskTableComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub table_state: TableState,
    human_dates: bool,
    has_focus: bool,
}

impl TaskTableComponent {
    pub fn new(human_dates: bool) -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            human_dates,
            has_focus: false,
        }
    }

    /// Replace the displayed collection with a fresh snapshot.
    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.update_table_state();
    }

    fn update_table_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn due_display(&self, task: &Task) -> String {
        if self.human_dates {
            date::format_human_date(&task.due_date)
        } else {
            task.due_date.clone()
        }
    }

    fn task_rows(&self) -> Vec<Row<'_>> {
        self.tasks
            .iter()
            .map(|task| {
                Row::new(vec![
                    Cell::from(task.title.clone()),
                    Cell::from(self.due_display(task)),
                    Cell::from(task.category.clone()),
                    Cell::from("d: delete").style(Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect()
    }

    fn pane_block(&self) -> Block<'static> {
        let border_style = if self.has_focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Tasks ")
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    }
}

impl Component for TaskTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(task) = self.tasks.get(self.selected_index) {
                    Action::DeleteTask(task.id)
                } else {
                    Action::None
                }
            }
            KeyCode::Tab | KeyCode::Char('a') => Action::FocusPane(PaneFocus::Form),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_table_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_table_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_TASKS_MESSAGE).block(self.pane_block());
            f.render_widget(empty, rect);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Title"),
            Cell::from("Due Date"),
            Cell::from("Category"),
            Cell::from(""),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let table = Table::new(self.task_rows(), LayoutManager::table_widths())
            .header(header)
            .block(self.pane_block())
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut table_state = self.table_state.clone();
        f.render_stateful_widget(table, rect, &mut table_state);
        self.table_state = table_state;
    }

    fn on_focus(&mut self) {
        self.has_focus = true;
    }

    fn on_blur(&mut self) {
        self.has_focus = false;
    }
}
