use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};
use termtrack::task::Task;
use termtrack::ui::components::task_table::TaskTableComponent;
use termtrack::ui::core::{
    actions::{Action, PaneFocus},
    Component,
};

fn task(id: i64, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        due_date: "2024-01-01".to_string(),
        category: "Work".to_string(),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

fn render(table: &mut TaskTableComponent) -> Vec<String> {
    let backend = TestBackend::new(70, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();
    buffer_lines(&terminal)
}

#[test]
fn test_empty_collection_renders_only_the_empty_message() {
    let mut table = TaskTableComponent::new(false);
    table.update_data(Vec::new());

    let lines = render(&mut table);
    let text = lines.join("\n");
    assert!(text.contains("No tasks yet."));
    // no table structure at all
    assert!(!text.contains("Due Date"));
    assert!(!text.contains("Category"));
}

#[test]
fn test_rows_render_in_insertion_order() {
    let mut table = TaskTableComponent::new(false);
    table.update_data(vec![task(1, "Pay rent"), task(2, "Call plumber")]);

    let lines = render(&mut table);
    let first = lines.iter().position(|l| l.contains("Pay rent")).unwrap();
    let second = lines.iter().position(|l| l.contains("Call plumber")).unwrap();
    assert!(first < second);

    let text = lines.join("\n");
    assert!(text.contains("Due Date"));
    assert!(text.contains("2024-01-01"));
    assert!(text.contains("Work"));
}

#[test]
fn test_delete_key_requests_deletion_of_the_selected_row() {
    let mut table = TaskTableComponent::new(false);
    table.update_data(vec![task(1, "Pay rent"), task(2, "Call plumber")]);

    assert_eq!(table.handle_key_events(key(KeyCode::Char('d'))), Action::DeleteTask(1));
    // the component itself never mutates its input
    assert_eq!(table.tasks.len(), 2);
}

#[test]
fn test_delete_on_empty_collection_does_nothing() {
    let mut table = TaskTableComponent::new(false);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('d'))), Action::None);
}

#[test]
fn test_shrinking_collection_drops_exactly_the_deleted_row() {
    let mut table = TaskTableComponent::new(false);
    table.update_data(vec![task(1, "Pay rent"), task(2, "Call plumber")]);

    // the owner removes id 1 and re-renders with the remainder
    table.update_data(vec![task(2, "Call plumber")]);

    let lines = render(&mut table);
    let text = lines.join("\n");
    assert!(!text.contains("Pay rent"));
    assert!(text.contains("Call plumber"));
    assert_eq!(table.get_selected_task().unwrap().id, 2);
}

#[test]
fn test_selection_navigation_wraps() {
    let mut table = TaskTableComponent::new(false);
    table.update_data(vec![task(1, "Pay rent"), task(2, "Call plumber"), task(3, "Water plants")]);

    assert_eq!(table.get_selected_task().unwrap().id, 1);

    table.update(Action::NextTask);
    assert_eq!(table.get_selected_task().unwrap().id, 2);

    table.update(Action::NextTask);
    table.update(Action::NextTask);
    assert_eq!(table.get_selected_task().unwrap().id, 1); // wrapped

    table.update(Action::PreviousTask);
    assert_eq!(table.get_selected_task().unwrap().id, 3); // wrapped backwards
}

#[test]
fn test_navigation_keys_map_to_actions() {
    let mut table = TaskTableComponent::new(false);
    table.update_data(vec![task(1, "Pay rent")]);

    assert_eq!(table.handle_key_events(key(KeyCode::Down)), Action::NextTask);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('j'))), Action::NextTask);
    assert_eq!(table.handle_key_events(key(KeyCode::Up)), Action::PreviousTask);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('k'))), Action::PreviousTask);
    assert_eq!(
        table.handle_key_events(key(KeyCode::Tab)),
        Action::FocusPane(PaneFocus::Form)
    );
}

#[test]
fn test_selection_clamps_when_collection_shrinks_at_the_end() {
    let mut table = TaskTableComponent::new(false);
    table.update_data(vec![task(1, "Pay rent"), task(2, "Call plumber"), task(3, "Water plants")]);

    table.update(Action::NextTask);
    table.update(Action::NextTask);
    assert_eq!(table.get_selected_task().unwrap().id, 3);

    // last row deleted; selection falls back to the new last row
    table.update_data(vec![task(1, "Pay rent"), task(2, "Call plumber")]);
    assert_eq!(table.get_selected_task().unwrap().id, 2);
}

#[test]
fn test_human_dates_rendering() {
    use termtrack::utils::date;

    let mut table = TaskTableComponent::new(true);
    table.update_data(vec![Task {
        id: 1,
        title: "Pay rent".to_string(),
        due_date: date::format_today(),
        category: "Work".to_string(),
    }]);

    let text = render(&mut table).join("\n");
    assert!(text.contains("today"));
}
