//! Given steps for board collaboration BDD scenarios.

use super::world::{BoardWorld, email, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::services::CreateBoardRequest;
use taskboard::task::services::NewTaskRequest;

#[given(r#""{creator}" owns a board named "{name}""#)]
fn owns_board(world: &mut BoardWorld, creator: String, name: String) -> Result<(), eyre::Report> {
    let owner = email(&creator)?;
    let board = run_async(
        world
            .directory
            .create_board(&owner, CreateBoardRequest::new(name, "")),
    )
    .wrap_err("create scenario board")?;
    world.board = Some((board.id(), owner));
    Ok(())
}

#[given(r#""{member}" is a member of the board"#)]
fn is_member(world: &mut BoardWorld, member: String) -> Result<(), eyre::Report> {
    let (board_id, creator) = world.board()?;
    run_async(world.membership.add_member(board_id, &creator, &member))
        .wrap_err("add scenario member")?;
    Ok(())
}

#[given(r#""{author}" has added a task titled "{title}""#)]
fn has_added_task(
    world: &mut BoardWorld,
    author: String,
    title: String,
) -> Result<(), eyre::Report> {
    let (board_id, _) = world.board()?;
    let requester = email(&author)?;
    let task = run_async(world.tasks.add_task(
        board_id,
        &requester,
        NewTaskRequest::new(title, "", ""),
    ))
    .wrap_err("add scenario task")?;
    world.task_id = Some(task.id());
    Ok(())
}

#[given(r#""{assignee}" is assigned to the task"#)]
fn is_assigned(world: &mut BoardWorld, assignee: String) -> Result<(), eyre::Report> {
    let (board_id, creator) = world.board()?;
    let task_id = world.task_id()?;
    run_async(
        world
            .tasks
            .assign_user(board_id, task_id, &creator, &assignee),
    )
    .wrap_err("assign scenario task")?;
    Ok(())
}
