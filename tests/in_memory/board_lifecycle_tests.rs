//! Board lifecycle tests: listing, settings, and guarded deletion.

use crate::in_memory::helpers::{Workspace, email, workspace};
use rstest::rstest;
use taskboard::board::{domain::BoardDetails, services::CreateBoardRequest};
use taskboard::error::FailureKind;
use taskboard::task::services::NewTaskRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_lists_created_and_joined_boards(workspace: Workspace) {
    let alice = email("alice@example.com");
    let bob = email("bob@example.com");
    let own = workspace.board(&alice, "Roadmap").await;
    let shared = workspace.board(&bob, "Release").await;
    workspace
        .membership
        .add_member(shared, &bob, "alice@example.com")
        .await
        .expect("add alice to bob's board");

    let listings = workspace
        .directory
        .list_boards_for(&alice)
        .await
        .expect("list boards");

    assert_eq!(listings.len(), 2);
    let created = listings
        .iter()
        .find(|listing| listing.board.id() == own)
        .expect("own board listed");
    assert!(created.is_creator());
    let joined = listings
        .iter()
        .find(|listing| listing.board.id() == shared)
        .expect("shared board listed");
    assert!(!joined.is_creator());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn settings_update_keeps_members_and_tasks(workspace: Workspace) {
    let alice = email("alice@example.com");
    let board_id = workspace.board(&alice, "Sprint").await;
    workspace
        .membership
        .add_member(board_id, &alice, "bob@example.com")
        .await
        .expect("add bob");
    workspace
        .tasks
        .add_task(board_id, &alice, NewTaskRequest::new("Plan", "", ""))
        .await
        .expect("add task");

    workspace
        .directory
        .update_board(
            board_id,
            &alice,
            BoardDetails::new("Sprint 2", "second iteration"),
        )
        .await
        .expect("update board");

    let overview = workspace
        .directory
        .board_overview(board_id, &alice)
        .await
        .expect("overview");
    assert_eq!(overview.board.name(), "Sprint 2");
    assert_eq!(overview.board.description(), "second iteration");
    assert_eq!(overview.board.members().len(), 1);
    assert_eq!(overview.counts.total, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_waits_for_members_and_tasks_to_leave(workspace: Workspace) {
    let alice = email("alice@example.com");
    let board_id = workspace.board(&alice, "Sprint").await;
    workspace
        .membership
        .add_member(board_id, &alice, "bob@example.com")
        .await
        .expect("add bob");
    let task = workspace
        .tasks
        .add_task(board_id, &alice, NewTaskRequest::new("Plan", "", ""))
        .await
        .expect("add task");

    let with_members = workspace
        .directory
        .delete_board(board_id, &alice)
        .await
        .expect_err("members block deletion");
    assert_eq!(with_members.kind(), FailureKind::InvalidState);

    workspace
        .membership
        .remove_member(board_id, &alice, "bob@example.com")
        .await
        .expect("remove bob");
    let with_tasks = workspace
        .directory
        .delete_board(board_id, &alice)
        .await
        .expect_err("tasks block deletion");
    assert_eq!(with_tasks.kind(), FailureKind::InvalidState);

    workspace
        .tasks
        .delete_task(board_id, task.id(), &alice)
        .await
        .expect("delete task");
    let settings = workspace
        .directory
        .board_settings(board_id, &alice)
        .await
        .expect("settings");
    assert!(settings.can_delete);

    workspace
        .directory
        .delete_board(board_id, &alice)
        .await
        .expect("empty board deletes");
    let gone = workspace
        .directory
        .get_board(board_id, &alice)
        .await
        .expect_err("deleted board is gone");
    assert_eq!(gone.kind(), FailureKind::NotFound);
    assert!(
        workspace
            .directory
            .list_boards_for(&alice)
            .await
            .expect("list boards")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn boards_are_isolated_between_creators(workspace: Workspace) {
    let alice = email("alice@example.com");
    let eve = email("eve@example.com");
    let board_id = workspace
        .directory
        .create_board(&alice, CreateBoardRequest::new("Private", "alice only"))
        .await
        .expect("create board")
        .id();

    let err = workspace
        .directory
        .board_overview(board_id, &eve)
        .await
        .expect_err("outsider cannot view");
    assert_eq!(err.kind(), FailureKind::Forbidden);
    assert!(
        workspace
            .directory
            .list_boards_for(&eve)
            .await
            .expect("list boards")
            .is_empty()
    );
}
