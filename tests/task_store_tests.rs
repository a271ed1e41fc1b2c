//! TaskStore operation tests
mod common;

use common::{at, date, new_task, store_with, time};
use std::collections::HashSet;
use study_planner::{NewTask, PlannerError, Priority, TaskFilter, TaskStore, is_overdue};

// タスク追加テスト
// 必須項目がすべて揃っていれば未完了のタスクが作成されることを確認
#[test]
fn test_add_task_with_required_fields() {
    let mut store = TaskStore::new();
    let task = store
        .add_task(
            NewTask::new("Essay draft", "English", Priority::High, date(2025, 5, 2))
                .with_time(time(18, 0))
                .with_notes("At least 1500 words"),
        )
        .unwrap();

    assert!(!task.completed);
    assert_eq!(task.title, "Essay draft");
    assert_eq!(task.subject, "English");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.due_time, Some(time(18, 0)));
    assert_eq!(task.notes.as_deref(), Some("At least 1500 words"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(task.id), Some(&task));
}

// ID一意性テスト
// 連続して追加したタスクのIDがすべて異なることを確認
#[test]
fn test_add_task_ids_are_unique() {
    let mut store = TaskStore::new();
    let mut ids = HashSet::new();
    for i in 0..50 {
        let task = store
            .add_task(new_task(&format!("Task {}", i), date(2025, 5, 1)))
            .unwrap();
        assert!(ids.insert(task.id), "duplicate id {}", task.id);
    }
}

// 必須項目欠落テスト
// title/subject/priority/due_date のいずれかが欠けると ValidationError になり、
// コレクションが変更されないことを確認
#[test]
fn test_add_task_missing_required_field_is_rejected() {
    let complete = new_task("Lab report", date(2025, 5, 1));
    let cases = [
        NewTask {
            title: "   ".to_string(),
            ..complete.clone()
        },
        NewTask {
            subject: String::new(),
            ..complete.clone()
        },
        NewTask {
            priority: None,
            ..complete.clone()
        },
        NewTask {
            due_date: None,
            ..complete.clone()
        },
    ];

    let mut store = store_with(&[("Existing", date(2025, 4, 1))]);
    let before = store.tasks().to_vec();
    for case in cases {
        let err = store.add_task(case).unwrap_err();
        assert!(matches!(err, PlannerError::Validation { .. }), "{err}");
    }
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn test_add_task_reports_missing_field_name() {
    let mut store = TaskStore::new();
    let err = store
        .add_task(NewTask {
            priority: None,
            ..new_task("Lab report", date(2025, 5, 1))
        })
        .unwrap_err();
    assert!(err.to_string().contains("priority"));
}

// 完了トグルテスト
// 2回トグルすると元の状態に戻ることを確認
#[test]
fn test_toggle_complete_round_trip() {
    let mut store = store_with(&[("Flashcards", date(2025, 5, 1))]);
    let id = store.tasks()[0].id;

    assert!(store.toggle_complete(id).unwrap().completed);
    assert!(store.get(id).unwrap().completed);
    assert!(!store.toggle_complete(id).unwrap().completed);
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn test_toggle_complete_unknown_id() {
    let mut store = store_with(&[("Flashcards", date(2025, 5, 1))]);
    let err = store.toggle_complete(-1).unwrap_err();
    assert!(matches!(err, PlannerError::NotFound(-1)));
}

// 削除テスト
// 存在しないIDの削除は NotFoundError になり、コレクションは変わらないことを確認
#[test]
fn test_delete_task() {
    let mut store = store_with(&[("A", date(2025, 5, 1)), ("B", date(2025, 5, 2))]);
    let id = store.tasks()[0].id;

    store.delete_task(id).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get(id).is_none());

    let before = store.tasks().to_vec();
    let err = store.delete_task(id).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.tasks(), before.as_slice());
}

// フィルタテスト
// pending と completed は互いに素で、その和が all と一致することを確認
#[test]
fn test_filters_partition_collection() {
    let mut store = store_with(&[
        ("A", date(2025, 5, 3)),
        ("B", date(2025, 5, 1)),
        ("C", date(2025, 5, 2)),
        ("D", date(2025, 5, 1)),
    ]);
    let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
    store.toggle_complete(ids[1]).unwrap();
    store.toggle_complete(ids[2]).unwrap();

    let ids_of = |filter| -> HashSet<i64> {
        store.list_tasks(filter).iter().map(|t| t.id).collect()
    };
    let all = ids_of(TaskFilter::All);
    let pending = ids_of(TaskFilter::Pending);
    let completed = ids_of(TaskFilter::Completed);

    assert!(pending.is_disjoint(&completed));
    assert_eq!(&pending | &completed, all);
    assert_eq!(all.len(), 4);
    assert_eq!(completed, HashSet::from([ids[1], ids[2]]));
}

// 並び順テスト
// 期日の昇順で、同じ期日は追加順が保たれることを確認
#[test]
fn test_list_tasks_sorted_by_due_date_stable() {
    let store = store_with(&[
        ("Late", date(2025, 6, 1)),
        ("Same-1", date(2025, 5, 10)),
        ("Early", date(2025, 5, 1)),
        ("Same-2", date(2025, 5, 10)),
        ("Same-3", date(2025, 5, 10)),
    ]);

    let titles: Vec<&str> = store
        .list_tasks(TaskFilter::All)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, ["Early", "Same-1", "Same-2", "Same-3", "Late"]);

    let tasks = store.list_tasks(TaskFilter::All);
    assert!(tasks.windows(2).all(|w| w[0].due_date <= w[1].due_date));

    // Listing does not reorder the collection itself
    assert_eq!(store.tasks()[0].title, "Late");
}

// 統計テスト
#[test]
fn test_compute_stats() {
    let mut store = TaskStore::new();
    let stats = store.compute_stats();
    assert_eq!((stats.total, stats.completed, stats.progress_percent), (0, 0, 0));

    for title in ["A", "B", "C"] {
        store.add_task(new_task(title, date(2025, 5, 1))).unwrap();
    }
    let id = store.tasks()[1].id;
    store.toggle_complete(id).unwrap();

    let stats = store.compute_stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.progress_percent, 33);
    assert_eq!(stats.pending(), 2);
}

// 期限切れ判定テスト
// 期日の開始時刻が現在より前で、未完了なら期限切れになることを確認
#[test]
fn test_is_overdue() {
    let mut store = store_with(&[
        ("Past", date(2025, 5, 1)),
        ("Today", date(2025, 5, 2)),
        ("Tomorrow", date(2025, 5, 3)),
    ]);
    let now = at(2025, 5, 2, 12, 0);

    let past = store.tasks()[0].clone();
    let today = store.tasks()[1].clone();
    let tomorrow = store.tasks()[2].clone();
    assert!(is_overdue(&past, now));
    assert!(is_overdue(&today, now));
    assert!(!is_overdue(&tomorrow, now));

    // Exactly at the start of the due date is not yet overdue
    assert!(!is_overdue(&today, at(2025, 5, 2, 0, 0)));
    assert!(is_overdue(&today, at(2025, 5, 2, 0, 1)));

    let completed = store.toggle_complete(past.id).unwrap();
    assert!(!is_overdue(&completed, now));

    let overdue: Vec<i64> = store.overdue_tasks(now).iter().map(|t| t.id).collect();
    assert_eq!(overdue, [today.id]);
}
