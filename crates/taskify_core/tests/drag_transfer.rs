use taskify_core::{resolve_drop, BoardList, DragLocation, DragOutcome, Task, TransferError};

fn tasks(ids: &[i64]) -> Vec<Task> {
    ids.iter()
        .map(|id| Task::new(*id, format!("task {id}")))
        .collect()
}

fn ids(list: &[Task]) -> Vec<i64> {
    list.iter().map(|task| task.id).collect()
}

fn drop_between(
    source_list: BoardList,
    source_index: usize,
    dest_list: BoardList,
    dest_index: usize,
) -> DragOutcome {
    DragOutcome::dropped(
        DragLocation::new(source_list, source_index),
        DragLocation::new(dest_list, dest_index),
    )
}

#[test]
fn same_list_reorder_accounts_for_removal_shift() {
    // Moving index 0 to index 2 in [a,b,c,d] yields [b,c,a,d]: the
    // destination index applies to the already-shortened list.
    let active = tasks(&[1, 2, 3, 4]);
    let outcome = drop_between(BoardList::Active, 0, BoardList::Active, 2);

    let (next_active, next_completed) = resolve_drop(&active, &[], &outcome).unwrap();

    assert_eq!(ids(&next_active), vec![2, 3, 1, 4]);
    assert!(next_completed.is_empty());
}

#[test]
fn same_list_move_to_front() {
    let completed = tasks(&[1, 2, 3]);
    let outcome = drop_between(BoardList::Completed, 2, BoardList::Completed, 0);

    let (next_active, next_completed) = resolve_drop(&[], &completed, &outcome).unwrap();

    assert!(next_active.is_empty());
    assert_eq!(ids(&next_completed), vec![3, 1, 2]);
}

#[test]
fn same_list_move_to_last_position() {
    // After removal a 3-item list holds 2 tasks, so index 2 is the end.
    let active = tasks(&[1, 2, 3]);
    let outcome = drop_between(BoardList::Active, 0, BoardList::Active, 2);

    let (next_active, _) = resolve_drop(&active, &[], &outcome).unwrap();

    assert_eq!(ids(&next_active), vec![2, 3, 1]);
}

#[test]
fn cross_list_transfer_moves_one_task_without_touching_done() {
    let active = tasks(&[1, 2]);
    let completed = Vec::new();
    let outcome = drop_between(BoardList::Active, 0, BoardList::Completed, 0);

    let (next_active, next_completed) = resolve_drop(&active, &completed, &outcome).unwrap();

    assert_eq!(ids(&next_active), vec![2]);
    assert_eq!(ids(&next_completed), vec![1]);
    assert!(!next_completed[0].done, "a move must not imply completion");
    assert_eq!(next_completed[0].text, "task 1");
}

#[test]
fn cross_list_transfer_back_keeps_done_flag() {
    let mut completed = tasks(&[7]);
    completed[0].done = true;
    let outcome = drop_between(BoardList::Completed, 0, BoardList::Active, 0);

    let (next_active, next_completed) = resolve_drop(&[], &completed, &outcome).unwrap();

    assert!(next_completed.is_empty());
    assert!(next_active[0].done, "a move must not clear completion");
}

#[test]
fn transfer_preserves_total_task_count() {
    let active = tasks(&[1, 2, 3]);
    let completed = tasks(&[4, 5]);
    let gestures = [
        drop_between(BoardList::Active, 1, BoardList::Completed, 2),
        drop_between(BoardList::Completed, 0, BoardList::Active, 3),
        drop_between(BoardList::Active, 2, BoardList::Active, 0),
        DragOutcome::cancelled(DragLocation::new(BoardList::Active, 1)),
    ];

    for outcome in &gestures {
        let (next_active, next_completed) = resolve_drop(&active, &completed, outcome).unwrap();
        assert_eq!(
            next_active.len() + next_completed.len(),
            active.len() + completed.len(),
            "gesture {outcome:?} changed the total count"
        );
    }
}

#[test]
fn cancelled_gesture_returns_both_lists_unchanged() {
    let active = tasks(&[1, 2]);
    let completed = tasks(&[3]);
    let outcome = DragOutcome::cancelled(DragLocation::new(BoardList::Completed, 0));

    let (next_active, next_completed) = resolve_drop(&active, &completed, &outcome).unwrap();

    assert_eq!(next_active, active);
    assert_eq!(next_completed, completed);
}

#[test]
fn cross_list_drop_at_end_is_in_range() {
    let active = tasks(&[1]);
    let completed = tasks(&[2, 3]);
    let outcome = drop_between(BoardList::Active, 0, BoardList::Completed, 2);

    let (next_active, next_completed) = resolve_drop(&active, &completed, &outcome).unwrap();

    assert!(next_active.is_empty());
    assert_eq!(ids(&next_completed), vec![2, 3, 1]);
}

#[test]
fn source_index_out_of_range_is_rejected() {
    let active = tasks(&[1, 2]);
    let outcome = drop_between(BoardList::Active, 2, BoardList::Completed, 0);

    let err = resolve_drop(&active, &[], &outcome).unwrap_err();

    assert_eq!(
        err,
        TransferError::SourceIndexOutOfRange {
            list: BoardList::Active,
            index: 2,
            len: 2,
        }
    );
}

#[test]
fn destination_index_out_of_range_is_rejected() {
    let active = tasks(&[1]);
    let completed = tasks(&[2]);
    let outcome = drop_between(BoardList::Active, 0, BoardList::Completed, 2);

    let err = resolve_drop(&active, &completed, &outcome).unwrap_err();

    assert_eq!(
        err,
        TransferError::DestinationIndexOutOfRange {
            list: BoardList::Completed,
            index: 2,
            len: 1,
        }
    );
}

#[test]
fn same_list_destination_bound_uses_shortened_length() {
    // A 3-item list shrinks to 2 once the source is removed, so index 3
    // no longer exists even though it equals the pre-gesture length.
    let active = tasks(&[1, 2, 3]);
    let outcome = drop_between(BoardList::Active, 0, BoardList::Active, 3);

    let err = resolve_drop(&active, &[], &outcome).unwrap_err();

    assert_eq!(
        err,
        TransferError::DestinationIndexOutOfRange {
            list: BoardList::Active,
            index: 3,
            len: 2,
        }
    );
}

#[test]
fn transfer_error_messages_name_the_list() {
    let err = TransferError::SourceIndexOutOfRange {
        list: BoardList::Completed,
        index: 9,
        len: 1,
    };
    let message = err.to_string();
    assert!(message.contains("completed"));
    assert!(message.contains('9'));
}
