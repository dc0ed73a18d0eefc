use async_trait::async_trait;
use checklist_core::{ChecklistError, ChecklistResult};
use checklist_domain::{Task, TaskList};
use checklist_persistence::TaskRepository;
use checklist_tui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn load(&self) -> ChecklistResult<Vec<Task>>;
        async fn save(&self, tasks: &[Task]) -> ChecklistResult<()>;
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn disk_full() -> ChecklistError {
    ChecklistError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
}

#[tokio::test]
async fn test_write_failure_propagates_from_key_handler() {
    let mut repo = MockRepo::new();
    repo.expect_save().times(1).returning(|_| Err(disk_full()));

    let mut app = App::new(TaskList::new(), Arc::new(repo));
    app.input.set("Buy milk".to_string());

    let result = app.handle_key_event(key(KeyCode::Enter)).await;
    assert!(matches!(result, Err(ChecklistError::Io(_))));
}

#[tokio::test]
async fn test_each_gesture_saves_whole_list_once() {
    let mut repo = MockRepo::new();
    let mut seq = mockall::Sequence::new();
    repo.expect_save()
        .withf(|tasks| tasks.len() == 1 && !tasks[0].done)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    repo.expect_save()
        .withf(|tasks| tasks.len() == 1 && tasks[0].done)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    repo.expect_save()
        .withf(|tasks| tasks.is_empty())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let mut app = App::new(TaskList::new(), Arc::new(repo));
    app.input.set("Buy milk".to_string());
    app.handle_key_event(key(KeyCode::Enter)).await.unwrap();

    app.focus = Focus::Tasks;
    app.handle_key_event(key(KeyCode::Char(' '))).await.unwrap();
    app.handle_key_event(key(KeyCode::Char('j'))).await.unwrap();
    app.handle_key_event(key(KeyCode::Char('d'))).await.unwrap();
}

#[tokio::test]
async fn test_blank_submit_never_saves() {
    let mut repo = MockRepo::new();
    repo.expect_save().times(0);

    let mut app = App::new(TaskList::new(), Arc::new(repo));
    app.input.set("   ".to_string());
    app.handle_key_event(key(KeyCode::Enter)).await.unwrap();
    assert!(app.tasks.is_empty());
}

#[tokio::test]
async fn test_load_error_is_returned() {
    let mut repo = MockRepo::new();
    repo.expect_load()
        .returning(|| Err(ChecklistError::Serialization("bad json".to_string())));

    let result = App::load(Arc::new(repo)).await;
    assert!(matches!(result, Err(ChecklistError::Serialization(_))));
}
