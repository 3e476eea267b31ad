//! Application root component.
//!
//! Owns the task collection and wires the form and the table together:
//! validated drafts coming up from the form are appended to the store, and
//! deletion requests coming up from the table remove by id. Components only
//! ever see read-only snapshots of the collection.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use crate::config::Config;
use crate::constants::{STATUS_TASK_CREATED, STATUS_TASK_DELETED, STATUS_TASK_NOT_FOUND};
use crate::logger::Logger;
use crate::task::TaskStore;
use crate::ui::components::{StatusBarComponent, TaskFormComponent, TaskTableComponent};
use crate::ui::core::{
    actions::{Action, PaneFocus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;

pub struct AppComponent {
    // Component composition
    form: TaskFormComponent,
    table: TaskTableComponent,
    status_bar: StatusBarComponent,

    // Application state
    store: TaskStore,
    focus: PaneFocus,

    // Services
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        let mut form = TaskFormComponent::new(config.categories.clone(), config.ui.date_hint);
        form.on_focus();

        let mut app = Self {
            form,
            table: TaskTableComponent::new(config.ui.human_dates),
            status_bar: StatusBarComponent::new(),
            store: TaskStore::new(),
            focus: PaneFocus::Form,
            logger: Logger::new(),
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> PaneFocus {
        self.focus
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Push a fresh snapshot of the store into the display components
    fn sync_component_data(&mut self) {
        self.table.update_data(self.store.tasks().to_vec());
        self.status_bar.update_data(self.store.len(), self.focus);
    }

    pub fn handle_event(&mut self, event: EventType) {
        if let EventType::Key(key) = event {
            let action = self.route_key(key);
            self.process_action(action);
        }
    }

    /// Handle global shortcuts, then forward the key to the focused pane
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.focus {
            PaneFocus::Form => self.form.handle_key_events(key),
            PaneFocus::Table => match key.code {
                // 'q' only quits from the table so the form can type it
                KeyCode::Char('q') => Action::Quit,
                _ => self.table.handle_key_events(key),
            },
        }
    }

    fn process_action(&mut self, action: Action) {
        // Let the table consume its own navigation actions first
        let action = match self.focus {
            PaneFocus::Table => self.table.update(action),
            PaneFocus::Form => action,
        };

        match action {
            Action::SubmitDraft(draft) => {
                let id = self.store.add(draft);
                self.logger.log(format!("task {id} created"));
                self.status_bar.set_message(STATUS_TASK_CREATED);
                self.sync_component_data();
            }
            Action::DeleteTask(id) => {
                if self.store.remove(id) {
                    self.logger.log(format!("task {id} deleted"));
                    self.status_bar.set_message(STATUS_TASK_DELETED);
                } else {
                    self.logger.log(format!("delete ignored, no task {id}"));
                    self.status_bar.set_message(STATUS_TASK_NOT_FOUND);
                }
                self.sync_component_data();
            }
            Action::FocusPane(pane) => self.set_focus(pane),
            Action::Quit => self.should_quit = true,
            Action::NextTask | Action::PreviousTask | Action::None => {}
        }
    }

    fn set_focus(&mut self, pane: PaneFocus) {
        if self.focus == pane {
            return;
        }

        match self.focus {
            PaneFocus::Form => self.form.on_blur(),
            PaneFocus::Table => self.table.on_blur(),
        }
        self.focus = pane;
        match self.focus {
            PaneFocus::Form => self.form.on_focus(),
            PaneFocus::Table => self.table.on_focus(),
        }

        self.status_bar.update_data(self.store.len(), self.focus);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let action = self.route_key(key);
        self.process_action(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        self.form.render(f, areas[0]);
        self.table.render(f, areas[1]);
        self.status_bar.render(f, areas[2]);
    }
}
