//! Task repository tests against `PostgreSQL`.

use std::collections::BTreeSet;

use crate::postgres::helpers::{PgContext, new_board, pg_context, unique_email};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::board::{domain::BoardId, ports::BoardRepository};
use taskboard::identity::domain::UserEmail;
use taskboard::task::{
    domain::{Task, TaskContent, TaskEdit, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

fn seeded_board(context: &PgContext) -> (BoardId, UserEmail) {
    let creator = unique_email("alice");
    let board = new_board(&creator, "Sprint");
    context
        .rt
        .block_on(context.boards.store(&board))
        .expect("store board");
    (board.id(), creator)
}

fn stored_task(context: &PgContext, board_id: BoardId, author: &UserEmail, title: &str) -> Task {
    let task = Task::new(
        board_id,
        author.clone(),
        TaskContent::new(title, "details", "2024-08-01"),
        [author.clone()],
        &DefaultClock,
    );
    context
        .rt
        .block_on(context.tasks.store(&task))
        .expect("store task");
    task
}

#[rstest]
fn tasks_list_and_count_per_board(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let (board_id, creator) = seeded_board(&context);
    let first = stored_task(&context, board_id, &creator, "Plan");
    let second = stored_task(&context, board_id, &creator, "Build");

    let listed = context
        .rt
        .block_on(context.tasks.list_for_board(board_id))
        .expect("list");
    let ids: BTreeSet<TaskId> = listed.iter().map(Task::id).collect();
    assert_eq!(ids, BTreeSet::from([first.id(), second.id()]));
    let count = context
        .rt
        .block_on(context.tasks.count_for_board(board_id))
        .expect("count");
    assert_eq!(count, 2);

    let found = context
        .rt
        .block_on(context.tasks.find(board_id, first.id()))
        .expect("find")
        .expect("task exists");
    assert_eq!(found.content(), first.content());
    assert!(found.is_assigned(&creator));
    assert!(!found.is_completed());
}

#[rstest]
fn edits_and_completion_persist(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let (board_id, creator) = seeded_board(&context);
    let task = stored_task(&context, board_id, &creator, "Plan");

    let edit = TaskEdit::new(
        TaskContent::new("Plan v2", "more", "2024-09-01"),
        TaskStatus::Complete,
        &DefaultClock,
    );
    context
        .rt
        .block_on(context.tasks.apply_edit(board_id, task.id(), &edit))
        .expect("apply edit");
    let edited = context
        .rt
        .block_on(context.tasks.find(board_id, task.id()))
        .expect("find")
        .expect("task exists");
    assert_eq!(edited.content().title(), "Plan v2");
    assert!(edited.is_completed());

    let reopen = TaskEdit::new(
        TaskContent::new("Plan v2", "more", "2024-09-01"),
        TaskStatus::Incomplete,
        &DefaultClock,
    );
    context
        .rt
        .block_on(context.tasks.apply_edit(board_id, task.id(), &reopen))
        .expect("reopen");
    context
        .rt
        .block_on(context.tasks.mark_completed(board_id, task.id(), chrono::Utc::now()))
        .expect("mark completed");
    let completed = context
        .rt
        .block_on(context.tasks.find(board_id, task.id()))
        .expect("find")
        .expect("task exists");
    assert!(completed.completed_at().is_some());
}

#[rstest]
fn assignee_array_behaves_as_a_set(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let (board_id, creator) = seeded_board(&context);
    let task = stored_task(&context, board_id, &creator, "Plan");
    let bob = unique_email("bob");

    for _ in 0..2 {
        context
            .rt
            .block_on(context.tasks.add_assignee(board_id, task.id(), &bob))
            .expect("add assignee");
    }
    context
        .rt
        .block_on(context.tasks.remove_assignee(board_id, task.id(), &creator))
        .expect("remove assignee");

    let found = context
        .rt
        .block_on(context.tasks.find(board_id, task.id()))
        .expect("find")
        .expect("task exists");
    assert_eq!(found.assignees().len(), 1);
    assert!(found.is_assigned(&bob));
}

#[rstest]
fn missing_tasks_report_not_found_except_on_delete(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let (board_id, creator) = seeded_board(&context);
    let missing = TaskId::new();

    let result = context
        .rt
        .block_on(context.tasks.add_assignee(board_id, missing, &creator));
    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound { task_id, .. }) if task_id == missing
    ));
    context
        .rt
        .block_on(context.tasks.delete(board_id, missing))
        .expect("deleting a missing task succeeds");
}
