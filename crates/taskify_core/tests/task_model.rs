use taskify_core::{BoardList, DragLocation, DragOutcome, Task, TaskIdSource};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new(42, "hello");

    assert_eq!(task.id, 42);
    assert_eq!(task.text, "hello");
    assert!(!task.done);
}

#[test]
fn id_source_yields_unique_increasing_ids() {
    let mut source = TaskIdSource::new();
    let ids: Vec<_> = (0..8).map(|_| source.next_id()).collect();

    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "ids must increase: {pair:?}");
    }
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(1_700_000_000_000, "ship the release");
    task.done = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 1_700_000_000_000_i64);
    assert_eq!(json["text"], "ship the release");
    assert_eq!(json["done"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn board_list_serializes_as_snake_case() {
    assert_eq!(
        serde_json::to_value(BoardList::Active).unwrap(),
        serde_json::json!("active")
    );
    assert_eq!(
        serde_json::to_value(BoardList::Completed).unwrap(),
        serde_json::json!("completed")
    );
}

#[test]
fn cancelled_outcome_serializes_with_null_destination() {
    let outcome = DragOutcome::cancelled(DragLocation::new(BoardList::Active, 3));

    let json = serde_json::to_value(outcome).unwrap();
    assert_eq!(json["source"]["list"], "active");
    assert_eq!(json["source"]["index"], 3);
    assert_eq!(json["destination"], serde_json::Value::Null);

    let decoded: DragOutcome = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, outcome);
}

#[test]
fn board_list_labels_match_wire_names() {
    assert_eq!(BoardList::Active.label(), "active");
    assert_eq!(BoardList::Completed.label(), "completed");
}
