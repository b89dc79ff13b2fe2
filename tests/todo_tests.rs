//! To-do controller tests
mod common;

use common::{fixed_time, get_test_todo};
use pomotodo::storage::TODO_KEY;
use pomotodo::{FileStore, KeyValueStore, NoView, ScriptedDialogs, TaskFilter, TodoHandler};

#[test]
fn test_add_persists_and_renders() {
    let (mut handler, temp_dir) = get_test_todo(ScriptedDialogs::approving());

    let id = handler.add("  Buy milk ", fixed_time()).unwrap().unwrap();

    assert_eq!(handler.list().find(id).unwrap().text, "Buy milk");
    assert_eq!(handler.view().list_frames.last().unwrap(), &vec!["Buy milk".to_string()]);

    let stored = FileStore::new(temp_dir.path()).get(TODO_KEY).unwrap().unwrap();
    assert!(stored.trim_start().starts_with('['));
    assert!(stored.contains("\"text\": \"Buy milk\""));
    assert!(stored.contains("\"completed\": false"));
    assert!(stored.contains("\"createdAt\""));
}

#[test]
fn test_add_ids_follow_the_given_clock() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    let base = fixed_time().timestamp_millis();

    let a = handler.add("A", fixed_time()).unwrap().unwrap();
    let b = handler.add("B", fixed_time()).unwrap().unwrap();
    let c = handler
        .add("C", fixed_time() + chrono::Duration::seconds(1))
        .unwrap()
        .unwrap();

    assert_eq!(a, base);
    assert_eq!(b, base + 1);
    assert_eq!(c, base + 1000);
    assert_eq!(handler.list().find(b).unwrap().created_at, fixed_time());
}

#[test]
fn test_add_blank_text_is_rejected() {
    let (mut handler, temp_dir) = get_test_todo(ScriptedDialogs::approving());
    let renders_before = handler.view().list_frames.len();

    assert_eq!(handler.add("", fixed_time()).unwrap(), None);
    assert_eq!(handler.add("   ", fixed_time()).unwrap(), None);

    assert!(handler.list().is_empty());
    assert_eq!(
        handler.dialogs().alerts,
        vec!["Please enter a task!".to_string(), "Please enter a task!".to_string()]
    );
    assert_eq!(handler.view().list_frames.len(), renders_before);
    assert!(FileStore::new(temp_dir.path()).get(TODO_KEY).unwrap().is_none());
}

#[test]
fn test_filter_scenario() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    handler.add("A", fixed_time()).unwrap();
    let b = handler.add("B", fixed_time()).unwrap().unwrap();
    handler.add("C", fixed_time()).unwrap();
    handler.toggle(b).unwrap();

    handler.set_filter(TaskFilter::Active);
    assert_eq!(handler.view().list_frames.last().unwrap(), &vec!["A", "C"]);

    handler.set_filter(TaskFilter::Completed);
    assert_eq!(handler.view().list_frames.last().unwrap(), &vec!["B"]);

    handler.set_filter(TaskFilter::All);
    assert_eq!(handler.view().list_frames.last().unwrap(), &vec!["A", "B", "C"]);
    assert_eq!(handler.list().len(), 3);
}

#[test]
fn test_toggle_is_idempotent_in_pairs() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    let id = handler.add("A", fixed_time()).unwrap().unwrap();

    assert!(handler.toggle(id).unwrap());
    assert!(handler.toggle(id).unwrap());
    assert!(!handler.list().find(id).unwrap().completed);

    assert!(!handler.toggle(id + 1000).unwrap());
}

#[test]
fn test_delete_requires_confirmation() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::declining());
    let id = handler.add("A", fixed_time()).unwrap().unwrap();

    assert!(!handler.delete(id).unwrap());
    assert_eq!(handler.list().len(), 1);
    assert_eq!(
        handler.dialogs().confirmations,
        vec!["Are you sure you want to delete this task?".to_string()]
    );
}

#[test]
fn test_delete_removes_task() {
    let (mut handler, temp_dir) = get_test_todo(ScriptedDialogs::approving());
    let a = handler.add("A", fixed_time()).unwrap().unwrap();
    handler.add("B", fixed_time()).unwrap();

    assert!(handler.delete(a).unwrap());
    assert!(handler.list().find(a).is_none());

    let reloaded = TodoHandler::new(
        FileStore::new(temp_dir.path()),
        ScriptedDialogs::approving(),
        NoView,
    )
    .unwrap();
    assert_eq!(reloaded.list().len(), 1);
    assert_eq!(reloaded.list().tasks()[0].text, "B");
}

#[test]
fn test_delete_unknown_id_asks_nothing() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    assert!(!handler.delete(7).unwrap());
    assert!(handler.dialogs().confirmations.is_empty());
}

#[test]
fn test_edit_session() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    let a = handler.add("A", fixed_time()).unwrap().unwrap();
    let b = handler.add("B", fixed_time()).unwrap().unwrap();

    assert!(handler.start_edit(a));
    assert!(handler.start_edit(b));
    assert_eq!(handler.list().editing(), Some(b));

    assert!(!handler.save_edit(b, "  ").unwrap());
    assert_eq!(handler.dialogs().alerts, vec!["Task cannot be empty!".to_string()]);
    assert_eq!(handler.list().editing(), Some(b));

    assert!(handler.save_edit(b, "B2").unwrap());
    assert_eq!(handler.list().find(b).unwrap().text, "B2");
    assert_eq!(handler.list().editing(), None);

    handler.start_edit(a);
    handler.cancel_edit();
    assert_eq!(handler.list().editing(), None);
    assert_eq!(handler.list().find(a).unwrap().text, "A");
}

#[test]
fn test_clear_all_on_empty_list() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());

    assert_eq!(handler.clear_all().unwrap(), 0);
    assert!(handler.dialogs().confirmations.is_empty());
    assert_eq!(handler.dialogs().alerts, vec!["No tasks to clear!".to_string()]);
}

#[test]
fn test_clear_completed_without_completed_tasks() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    handler.add("A", fixed_time()).unwrap();

    assert_eq!(handler.clear_completed().unwrap(), 0);
    assert!(handler.dialogs().confirmations.is_empty());
    assert_eq!(
        handler.dialogs().alerts,
        vec!["No completed tasks to clear!".to_string()]
    );
    assert_eq!(handler.list().len(), 1);
}

#[test]
fn test_clear_completed_and_all() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    let a = handler.add("A", fixed_time()).unwrap().unwrap();
    handler.add("B", fixed_time()).unwrap();
    handler.toggle(a).unwrap();

    assert_eq!(handler.clear_completed().unwrap(), 1);
    assert_eq!(handler.stats().total, 1);
    assert_eq!(handler.stats().active, 1);

    assert_eq!(handler.clear_all().unwrap(), 1);
    assert!(handler.list().is_empty());
    assert_eq!(handler.dialogs().confirmations.len(), 2);
}

#[test]
fn test_clear_all_declined_keeps_tasks() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::declining());
    handler.add("A", fixed_time()).unwrap();

    assert_eq!(handler.clear_all().unwrap(), 0);
    assert_eq!(handler.list().len(), 1);
}

#[test]
fn test_stats() {
    let (mut handler, _temp_dir) = get_test_todo(ScriptedDialogs::approving());
    let a = handler.add("A", fixed_time()).unwrap().unwrap();
    handler.add("B", fixed_time()).unwrap();
    handler.add("C", fixed_time()).unwrap();
    handler.toggle(a).unwrap();

    let stats = handler.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.completed, 1);
}
