//! Multi-user flows: a creator, a member, and an outsider sharing a board.

use crate::in_memory::helpers::{Workspace, email, workspace};
use rstest::rstest;
use taskboard::error::FailureKind;
use taskboard::task::{
    domain::TaskStatus,
    services::{EditTaskRequest, NewTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sprint_board_round_trip(workspace: Workspace) {
    let alice = email("alice@example.com");
    let bob = email("bob@example.com");
    let eve = email("eve@example.com");
    let board_id = workspace.board(&alice, "Sprint").await;

    workspace
        .membership
        .add_member(board_id, &alice, "bob@example.com")
        .await
        .expect("alice adds bob");

    let task = workspace
        .tasks
        .add_task(
            board_id,
            &bob,
            NewTaskRequest::new("Write tests", "cover the flows", "2024-08-01"),
        )
        .await
        .expect("bob adds a task");
    assert_eq!(task.created_by(), &bob);
    assert!(task.is_unassigned());

    let member_assign = workspace
        .tasks
        .assign_user(board_id, task.id(), &bob, "bob@example.com")
        .await
        .expect_err("members cannot assign");
    assert_eq!(member_assign.kind(), FailureKind::Forbidden);

    workspace
        .tasks
        .assign_user(board_id, task.id(), &alice, "bob@example.com")
        .await
        .expect("alice assigns bob");

    let outsider_assign = workspace
        .tasks
        .assign_user(board_id, task.id(), &alice, "eve@example.com")
        .await
        .expect_err("outsiders cannot be assigned");
    assert_eq!(outsider_assign.kind(), FailureKind::InvalidArgument);

    let completed = workspace
        .tasks
        .complete_task(board_id, task.id(), &bob)
        .await
        .expect("bob completes the task");
    assert_eq!(completed.status(), TaskStatus::Complete);

    let outsider_view = workspace
        .tasks
        .get_task(board_id, task.id(), &eve)
        .await
        .expect_err("eve is not on the board");
    assert_eq!(outsider_view.kind(), FailureKind::Forbidden);

    let overview = workspace
        .directory
        .board_overview(board_id, &bob)
        .await
        .expect("bob views the board");
    assert_eq!(overview.counts.completed, 1);
    assert_eq!(overview.counts.active, 0);
    let stored = overview.tasks.first().expect("one task");
    assert!(stored.is_assigned(&bob));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_a_member_clears_their_assignments(workspace: Workspace) {
    let alice = email("alice@example.com");
    let bob = email("bob@example.com");
    let board_id = workspace.board(&alice, "Sprint").await;
    workspace
        .membership
        .add_member(board_id, &alice, "bob@example.com")
        .await
        .expect("add bob");

    let mut assigned = Vec::new();
    for title in ["Design", "Build"] {
        let request = NewTaskRequest::new(title, "", "").with_assignees([
            "bob@example.com".to_owned(),
            "alice@example.com".to_owned(),
        ]);
        let task = workspace
            .tasks
            .add_task(board_id, &alice, request)
            .await
            .expect("add assigned task");
        assigned.push(task.id());
    }
    let untouched = workspace
        .tasks
        .add_task(board_id, &alice, NewTaskRequest::new("Ship", "", ""))
        .await
        .expect("add unassigned task");

    let removal = workspace
        .membership
        .remove_member(board_id, &alice, "bob@example.com")
        .await
        .expect("remove bob");

    assert!(removal.is_complete());
    assert_eq!(removal.unassigned.len(), assigned.len());
    assert!(!removal.unassigned.contains(&untouched.id()));

    for task_id in assigned {
        let view = workspace
            .tasks
            .get_task(board_id, task_id, &alice)
            .await
            .expect("task still exists");
        assert!(!view.task.is_assigned(&bob));
        assert!(view.task.is_assigned(&alice));
    }
    let err = workspace
        .directory
        .get_board(board_id, &bob)
        .await
        .expect_err("bob lost access");
    assert_eq!(err.kind(), FailureKind::Forbidden);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_a_completed_task_clears_completion(workspace: Workspace) {
    let alice = email("alice@example.com");
    let board_id = workspace.board(&alice, "Sprint").await;
    let task = workspace
        .tasks
        .add_task(board_id, &alice, NewTaskRequest::new("Plan", "", ""))
        .await
        .expect("add task");
    workspace
        .tasks
        .complete_task(board_id, task.id(), &alice)
        .await
        .expect("complete");

    let reopened = workspace
        .tasks
        .edit_task(
            board_id,
            task.id(),
            &alice,
            EditTaskRequest::new("Plan", "again", "2024-09-01", "active"),
        )
        .await
        .expect("reopen");

    assert_eq!(reopened.status(), TaskStatus::Incomplete);
    assert!(reopened.completed_at().is_none());
    let stored = workspace
        .tasks
        .get_task(board_id, task.id(), &alice)
        .await
        .expect("reload");
    assert_eq!(stored.task, reopened);
}
