//! When steps for board collaboration BDD scenarios.

use super::world::{BoardWorld, email, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::NewTaskRequest;

#[when(r#""{author}" adds a task titled "{title}""#)]
fn adds_task(world: &mut BoardWorld, author: String, title: String) -> Result<(), eyre::Report> {
    let (board_id, _) = world.board()?;
    let requester = email(&author)?;
    let result = run_async(world.tasks.add_task(
        board_id,
        &requester,
        NewTaskRequest::new(title, "", ""),
    ));
    match result {
        Ok(task) => {
            world.task_id = Some(task.id());
            world.last_outcome = Some(Ok(()));
        }
        Err(err) => world.last_outcome = Some(Err(err.kind())),
    }
    Ok(())
}

#[when(r#""{requester}" completes the task"#)]
fn completes_task(world: &mut BoardWorld, requester: String) -> Result<(), eyre::Report> {
    let (board_id, _) = world.board()?;
    let task_id = world.task_id()?;
    let user = email(&requester)?;
    let result = run_async(world.tasks.complete_task(board_id, task_id, &user));
    world.last_outcome = Some(result.map(|_| ()).map_err(|err| err.kind()));
    Ok(())
}

#[when(r#""{requester}" assigns "{assignee}" to the task"#)]
fn assigns_task(
    world: &mut BoardWorld,
    requester: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let (board_id, _) = world.board()?;
    let task_id = world.task_id()?;
    let user = email(&requester)?;
    let result = run_async(world.tasks.assign_user(board_id, task_id, &user, &assignee));
    world.last_outcome = Some(result.map_err(|err| err.kind()));
    Ok(())
}

#[when(r#""{requester}" removes "{member}" from the board"#)]
fn removes_member(
    world: &mut BoardWorld,
    requester: String,
    member: String,
) -> Result<(), eyre::Report> {
    let (board_id, _) = world.board()?;
    let user = email(&requester)?;
    let result = run_async(world.membership.remove_member(board_id, &user, &member));
    world.last_outcome = Some(result.map(|_| ()).map_err(|err| err.kind()));
    Ok(())
}

#[when(r#""{requester}" deletes the board"#)]
fn deletes_board(world: &mut BoardWorld, requester: String) -> Result<(), eyre::Report> {
    let (board_id, _) = world.board()?;
    let user = email(&requester)?;
    let result = run_async(world.directory.delete_board(board_id, &user));
    world.last_outcome = Some(result.map_err(|err| err.kind()));
    Ok(())
}
