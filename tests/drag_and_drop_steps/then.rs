//! Then steps for drag-and-drop scenarios.

use super::world::{DragWorld, run_async};
use kanban::board::{domain::TaskStatus, services::DropOutcome};
use rstest_bdd_macros::then;

fn parse_column(column: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(column).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

#[then(r#"the task is in column "{column}""#)]
fn task_in_column(world: &DragWorld, column: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&column)?;
    let id = world.task()?.id().clone();
    let stored = run_async(world.board.store().find(&id))?
        .ok_or_else(|| eyre::eyre!("task missing from store"))?;
    eyre::ensure!(
        stored.status() == expected,
        "expected column {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then("the task progress is {progress:u8} percent")]
fn task_progress_is(world: &DragWorld, progress: u8) -> Result<(), eyre::Report> {
    let actual = world.task()?.progress().value();
    eyre::ensure!(actual == progress, "expected {progress}%, found {actual}%");
    Ok(())
}

#[then("the drop had no target")]
fn drop_had_no_target(world: &DragWorld) -> Result<(), eyre::Report> {
    match &world.last_outcome {
        Some(DropOutcome::NoDropTarget) => Ok(()),
        other => Err(eyre::eyre!("expected no drop target, got {other:?}")),
    }
}

#[then(r#"the detail view shows the task in column "{column}""#)]
fn detail_view_shows(world: &DragWorld, column: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&column)?;
    let shown = run_async(world.board.selected_task())?
        .ok_or_else(|| eyre::eyre!("detail view is closed"))?;
    eyre::ensure!(shown.status() == expected);
    eyre::ensure!(shown.id() == world.task()?.id());
    Ok(())
}
