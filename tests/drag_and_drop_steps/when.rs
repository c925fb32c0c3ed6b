//! When steps for drag-and-drop scenarios.

use super::world::{DragWorld, run_async};
use kanban::board::services::DragEnd;
use rstest_bdd_macros::when;

#[when(r#"the task is dropped on "{zone}""#)]
fn task_dropped_on(world: &mut DragWorld, zone: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let outcome = run_async(world.board.drag_end(DragEnd::over_zone(id, &zone)))?;
    if let Some(moved) = outcome.moved() {
        world.task = Some(moved.clone());
    }
    world.last_outcome = Some(outcome);
    Ok(())
}
