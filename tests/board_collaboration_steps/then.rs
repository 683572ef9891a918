//! Then steps for board collaboration BDD scenarios.

use super::world::{BoardWorld, email, run_async};
use rstest_bdd_macros::then;
use taskboard::error::FailureKind;

#[then("the board shows {completed:usize} completed task out of {total:usize}")]
fn board_counts(world: &BoardWorld, completed: usize, total: usize) -> Result<(), eyre::Report> {
    let (board_id, creator) = world.board()?;
    let overview = run_async(world.directory.board_overview(board_id, &creator))
        .map_err(|err| eyre::eyre!("board overview failed: {err}"))?;
    if overview.counts.completed != completed || overview.counts.total != total {
        return Err(eyre::eyre!(
            "expected {completed}/{total} completed, found {}/{}",
            overview.counts.completed,
            overview.counts.total
        ));
    }
    Ok(())
}

#[then(r#"the last action is refused as "{kind}""#)]
fn last_action_refused(world: &BoardWorld, kind: String) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(Err(actual)) if actual.as_str() == kind => Ok(()),
        Some(Err(actual)) => Err(eyre::eyre!("expected '{kind}' refusal, got '{actual}'")),
        Some(Ok(())) => Err(eyre::eyre!("expected '{kind}' refusal, action succeeded")),
        None => Err(eyre::eyre!("no action recorded in scenario world")),
    }
}

#[then(r#""{assignee}" is not assigned to the task"#)]
fn not_assigned(world: &BoardWorld, assignee: String) -> Result<(), eyre::Report> {
    let (board_id, creator) = world.board()?;
    let task_id = world.task_id()?;
    let user = email(&assignee)?;
    let view = run_async(world.tasks.get_task(board_id, task_id, &creator))
        .map_err(|err| eyre::eyre!("get task failed: {err}"))?;
    if view.task.is_assigned(&user) {
        return Err(eyre::eyre!("{assignee} is still assigned"));
    }
    Ok(())
}

#[then(r#""{viewer}" cannot view the board"#)]
fn cannot_view(world: &BoardWorld, viewer: String) -> Result<(), eyre::Report> {
    let (board_id, _) = world.board()?;
    let user = email(&viewer)?;
    match run_async(world.directory.get_board(board_id, &user)) {
        Err(err) if err.kind() == FailureKind::Forbidden => Ok(()),
        Err(err) => Err(eyre::eyre!("expected forbidden, got {err}")),
        Ok(_) => Err(eyre::eyre!("{viewer} can still view the board")),
    }
}
