use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};
use termtrack::task::TaskDraft;
use termtrack::ui::components::task_form::{FormField, TaskFormComponent};
use termtrack::ui::core::{
    actions::{Action, PaneFocus},
    Component,
};
use termtrack::validation::FieldError;

fn categories() -> Vec<String> {
    vec!["Work".to_string(), "Personal".to_string()]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn type_text(form: &mut TaskFormComponent, text: &str) {
    for c in text.chars() {
        form.handle_key_events(key(KeyCode::Char(c)));
    }
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut lines = Vec::new();
    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

#[test]
fn test_valid_submission_emits_draft_exactly_once_and_clears_fields() {
    let mut form = TaskFormComponent::new(categories(), true);

    type_text(&mut form, "Buy milk");
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "2024-06-01");
    form.handle_key_events(key(KeyCode::Tab));
    form.handle_key_events(key(KeyCode::Right)); // pick "Work"

    let action = form.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::SubmitDraft(TaskDraft {
            title: "Buy milk".to_string(),
            due_date: "2024-06-01".to_string(),
            category: "Work".to_string(),
        })
    );

    // form fully reset afterwards
    assert_eq!(form.title.value(), "");
    assert_eq!(form.due_date.value(), "");
    assert_eq!(form.selected_category, None);
    assert!(form.errors.is_valid());
    assert_eq!(form.focused_field, FormField::Title);

    // an immediate second submit must not emit another draft
    assert_eq!(form.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_invalid_submission_shows_all_errors_and_keeps_input() {
    let mut form = TaskFormComponent::new(categories(), true);

    type_text(&mut form, "ab");
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "2024-13-40");

    let action = form.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::None);

    assert_eq!(form.errors.title, Some(FieldError::TitleTooShort));
    assert_eq!(form.errors.due_date, Some(FieldError::InvalidDate));
    assert_eq!(form.errors.category, Some(FieldError::CategoryRequired));

    // failed submission leaves the input untouched
    assert_eq!(form.title.value(), "ab");
    assert_eq!(form.due_date.value(), "2024-13-40");
}

#[test]
fn test_errors_clear_once_fields_are_fixed() {
    let mut form = TaskFormComponent::new(categories(), true);

    form.handle_key_events(key(KeyCode::Enter));
    assert!(!form.errors.is_valid());

    type_text(&mut form, "Buy milk");
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "2024-06-01");
    form.handle_key_events(key(KeyCode::Tab));
    form.handle_key_events(key(KeyCode::Char(' ')));

    let action = form.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::SubmitDraft(_)));
    assert!(form.errors.is_valid());
}

#[test]
fn test_category_cycling() {
    let mut form = TaskFormComponent::new(categories(), true);
    form.focused_field = FormField::Category;

    assert_eq!(form.selected_category, None);
    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.selected_category, Some(0));
    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.selected_category, Some(1));
    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.selected_category, Some(0)); // wraps

    form.handle_key_events(key(KeyCode::Left));
    assert_eq!(form.selected_category, Some(1)); // wraps backwards
}

#[test]
fn test_field_focus_cycles_both_ways() {
    let mut form = TaskFormComponent::new(categories(), true);
    assert_eq!(form.focused_field, FormField::Title);

    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!(form.focused_field, FormField::DueDate);
    form.handle_key_events(key(KeyCode::Down));
    assert_eq!(form.focused_field, FormField::Category);
    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!(form.focused_field, FormField::Title);

    form.handle_key_events(key(KeyCode::BackTab));
    assert_eq!(form.focused_field, FormField::Category);
    form.handle_key_events(key(KeyCode::Up));
    assert_eq!(form.focused_field, FormField::DueDate);
}

#[test]
fn test_text_editing_is_char_aware() {
    let mut form = TaskFormComponent::new(categories(), true);

    type_text(&mut form, "héllo");
    assert_eq!(form.title.value(), "héllo");

    form.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(form.title.value(), "héll");

    form.handle_key_events(key(KeyCode::Left));
    form.handle_key_events(key(KeyCode::Left));
    form.handle_key_events(key(KeyCode::Delete));
    assert_eq!(form.title.value(), "hél");
}

#[test]
fn test_q_types_into_the_form() {
    let mut form = TaskFormComponent::new(categories(), true);
    let action = form.handle_key_events(key(KeyCode::Char('q')));
    assert_eq!(action, Action::None);
    assert_eq!(form.title.value(), "q");
}

#[test]
fn test_escape_requests_table_focus() {
    let mut form = TaskFormComponent::new(categories(), true);
    let action = form.handle_key_events(key(KeyCode::Esc));
    assert_eq!(action, Action::FocusPane(PaneFocus::Table));
}

#[test]
fn test_render_shows_field_errors_inline() {
    let mut form = TaskFormComponent::new(categories(), true);
    form.handle_key_events(key(KeyCode::Enter)); // empty form, everything fails

    let backend = TestBackend::new(70, 16);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| form.render(f, f.area())).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Title should be at least 3 characters."));
    assert!(text.contains("Invalid date. The format should be YYYY-MM-DD."));
    assert!(text.contains("Category is required."));
}

#[test]
fn test_render_without_errors_has_no_messages() {
    let mut form = TaskFormComponent::new(categories(), true);

    let backend = TestBackend::new(70, 16);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| form.render(f, f.area())).unwrap();

    let text = buffer_text(&terminal);
    assert!(!text.contains("characters."));
    assert!(!text.contains("required."));
    assert!(text.contains("New Task"));
}
