use checklist_domain::{Task, TaskList};
use checklist_persistence::{JsonFileStore, TaskRepository};
use checklist_tui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn setup() -> (TempDir, PathBuf, App) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let app = App::new(TaskList::new(), Arc::new(JsonFileStore::new(&path)));
    (dir, path, app)
}

fn read_file(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

async fn reload(path: &Path) -> TaskList {
    TaskList::from_tasks(JsonFileStore::new(path).load().await.unwrap())
}

async fn add(app: &mut App, title: &str) {
    app.focus = Focus::Input;
    for c in title.chars() {
        app.handle_key_event(key(KeyCode::Char(c))).await.unwrap();
    }
    app.handle_key_event(key(KeyCode::Enter)).await.unwrap();
}

async fn on_row(app: &mut App, row: usize, code: KeyCode) {
    app.focus = Focus::Tasks;
    app.selection.set(Some(row));
    app.handle_key_event(key(code)).await.unwrap();
}

#[tokio::test]
async fn test_buy_milk_scenario() {
    let (_dir, path, mut app) = setup();

    add(&mut app, "Buy milk").await;
    assert_eq!(
        read_file(&path),
        json!([{ "title": "Buy milk", "done": false, "desc": "" }])
    );

    on_row(&mut app, 0, KeyCode::Char(' ')).await;
    assert_eq!(
        read_file(&path),
        json!([{ "title": "Buy milk", "done": true, "desc": "" }])
    );

    on_row(&mut app, 0, KeyCode::Enter).await;
    for c in "2% please".chars() {
        app.handle_key_event(key(KeyCode::Char(c))).await.unwrap();
    }
    // Typing into an open editor does not persist.
    assert_eq!(read_file(&path)[0]["desc"], "");
    app.handle_key_event(key(KeyCode::Esc)).await.unwrap();
    assert_eq!(
        read_file(&path),
        json!([{ "title": "Buy milk", "done": true, "desc": "2% please" }])
    );

    on_row(&mut app, 0, KeyCode::Char('d')).await;
    assert_eq!(read_file(&path), json!([]));
}

#[tokio::test]
async fn test_replay_matches_reloaded_file() {
    let (_dir, path, mut app) = setup();

    add(&mut app, "a").await;
    add(&mut app, "b").await;
    add(&mut app, "c").await;
    on_row(&mut app, 1, KeyCode::Char('x')).await;
    add(&mut app, "b").await;
    on_row(&mut app, 0, KeyCode::Delete).await;
    on_row(&mut app, 2, KeyCode::Char(' ')).await;
    add(&mut app, "  d  ").await;

    let reloaded = reload(&path).await;
    assert_eq!(app.tasks, reloaded);

    let titles: Vec<_> = reloaded.iter().map(|(_, t)| t.title.clone()).collect();
    assert_eq!(titles, vec!["b", "c", "b", "d"]);
    let done: Vec<_> = reloaded.iter().map(|(_, t)| t.done).collect();
    assert_eq!(done, vec![true, false, true, false]);
}

#[tokio::test]
async fn test_blank_titles_do_not_change_count() {
    let (_dir, path, mut app) = setup();
    add(&mut app, "keep").await;

    for blank in ["", " ", "\t  "] {
        app.input.clear();
        add(&mut app, blank).await;
        assert_eq!(app.tasks.len(), 1);
    }
    assert_eq!(reload(&path).await.len(), 1);
}

#[tokio::test]
async fn test_double_toggle_restores_file() {
    let (_dir, path, mut app) = setup();
    add(&mut app, "Stretch").await;
    let before = std::fs::read(&path).unwrap();

    on_row(&mut app, 0, KeyCode::Char(' ')).await;
    on_row(&mut app, 0, KeyCode::Char(' ')).await;

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn test_delete_shifts_and_stale_id_is_harmless() {
    let (_dir, path, mut app) = setup();
    for title in ["a", "b", "c", "d"] {
        add(&mut app, title).await;
    }

    let stale = app.tasks.id_at(1).unwrap();
    app.delete_task(stale).await.unwrap();
    assert_eq!(app.tasks.len(), 3);
    assert_eq!(app.tasks.get(1).unwrap().title, "c");
    assert_eq!(app.tasks.get(2).unwrap().title, "d");

    app.delete_task(stale).await.unwrap();
    assert_eq!(app.tasks.len(), 3);
    assert_eq!(reload(&path).await, app.tasks);
}

#[tokio::test]
async fn test_open_editor_is_the_only_divergence() {
    let (_dir, path, mut app) = setup();
    add(&mut app, "Buy milk").await;

    on_row(&mut app, 0, KeyCode::Enter).await;
    app.handle_key_event(key(KeyCode::Char('!'))).await.unwrap();
    assert_eq!(reload(&path).await, app.tasks);

    // Re-opening shows the committed text, not a stale copy.
    app.handle_key_event(key(KeyCode::Esc)).await.unwrap();
    on_row(&mut app, 0, KeyCode::Enter).await;
    assert_eq!(app.editor.as_ref().unwrap().buffer.as_str(), "!");
}

#[tokio::test]
async fn test_load_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let mut second = Task::new("Read");
    second.done = true;
    JsonFileStore::new(&path)
        .save(&[Task::new("Walk dog"), second])
        .await
        .unwrap();

    let app = App::load(Arc::new(JsonFileStore::new(&path))).await.unwrap();
    assert_eq!(app.tasks.len(), 2);
    assert!(!app.tasks.get(0).unwrap().done);
    assert!(app.tasks.get(1).unwrap().done);
    assert_eq!(app.selection.get(), Some(0));
}

#[tokio::test]
async fn test_load_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let app = App::load(Arc::new(JsonFileStore::new(dir.path().join("tasks.json"))))
        .await
        .unwrap();
    assert!(app.tasks.is_empty());
    assert!(app.selection.get().is_none());
}

#[tokio::test]
async fn test_load_malformed_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "[{\"title\": ").unwrap();

    assert!(App::load(Arc::new(JsonFileStore::new(&path))).await.is_err());
}
