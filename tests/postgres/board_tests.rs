//! Board repository tests against `PostgreSQL`.

use crate::postgres::helpers::{PgContext, new_board, pg_context, unique_email};
use rstest::rstest;
use taskboard::board::{
    domain::{BoardDetails, BoardId},
    ports::{BoardRepository, BoardRepositoryError},
};

#[rstest]
fn stored_board_round_trips(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let creator = unique_email("alice");
    let board = new_board(&creator, "Sprint");

    context.rt.block_on(context.boards.store(&board)).expect("store");
    let found = context
        .rt
        .block_on(context.boards.find_by_id(board.id()))
        .expect("find")
        .expect("board exists");

    assert_eq!(found.id(), board.id());
    assert_eq!(found.name(), "Sprint");
    assert_eq!(found.creator(), &creator);
    assert!(found.members().is_empty());

    let duplicate = context.rt.block_on(context.boards.store(&board));
    assert!(matches!(
        duplicate,
        Err(BoardRepositoryError::DuplicateBoard(id)) if id == board.id()
    ));
}

#[rstest]
fn member_array_behaves_as_a_set(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let creator = unique_email("alice");
    let member = unique_email("bob");
    let board = new_board(&creator, "Sprint");
    context.rt.block_on(context.boards.store(&board)).expect("store");

    for _ in 0..2 {
        context
            .rt
            .block_on(context.boards.add_member(board.id(), &member))
            .expect("add member");
    }
    context
        .rt
        .block_on(context.boards.add_member(board.id(), &creator))
        .expect("creator add is a no-op");

    let found = context
        .rt
        .block_on(context.boards.find_by_id(board.id()))
        .expect("find")
        .expect("board exists");
    assert_eq!(found.members().len(), 1);
    assert!(found.members().contains(&member));

    let joined = context
        .rt
        .block_on(context.boards.find_by_member(&member))
        .expect("find by member");
    assert_eq!(joined.len(), 1);

    context
        .rt
        .block_on(context.boards.remove_member(board.id(), &member))
        .expect("remove member");
    assert!(
        context
            .rt
            .block_on(context.boards.find_by_member(&member))
            .expect("find by member")
            .is_empty()
    );
}

#[rstest]
fn details_update_and_delete(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let creator = unique_email("alice");
    let board = new_board(&creator, "Sprint");
    context.rt.block_on(context.boards.store(&board)).expect("store");

    context
        .rt
        .block_on(
            context
                .boards
                .update_details(board.id(), &BoardDetails::new("Sprint 2", "renamed")),
        )
        .expect("update details");
    let created = context
        .rt
        .block_on(context.boards.find_by_creator(&creator))
        .expect("find by creator");
    let renamed = created.first().expect("one board");
    assert_eq!(renamed.name(), "Sprint 2");
    assert_eq!(renamed.description(), "renamed");

    context
        .rt
        .block_on(context.boards.delete(board.id()))
        .expect("delete");
    assert!(
        context
            .rt
            .block_on(context.boards.find_by_id(board.id()))
            .expect("find")
            .is_none()
    );
}

#[rstest]
fn writes_to_missing_boards_report_not_found(pg_context: Option<PgContext>) {
    let Some(context) = pg_context else {
        return;
    };
    let missing = BoardId::new();
    let member = unique_email("bob");

    let result = context
        .rt
        .block_on(context.boards.add_member(missing, &member));
    assert!(matches!(result, Err(BoardRepositoryError::NotFound(id)) if id == missing));
    let deleted = context.rt.block_on(context.boards.delete(missing));
    assert!(matches!(deleted, Err(BoardRepositoryError::NotFound(id)) if id == missing));
}
