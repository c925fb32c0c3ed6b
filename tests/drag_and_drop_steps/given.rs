//! Given steps for drag-and-drop scenarios.

use super::world::{DragWorld, run_async};
use eyre::WrapErr;
use kanban::board::domain::{NewTask, Progress, TaskStatus};
use rstest_bdd_macros::given;

#[given(r#"a task "{title}" in column "{column}" at {progress:u8} percent"#)]
fn task_in_column(
    world: &mut DragWorld,
    title: String,
    column: String,
    progress: u8,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let mut task = run_async(world.board.add_task(NewTask::new(title).in_column(status)))
        .wrap_err("add scenario task")?;
    task.set_progress(Progress::new(progress)?);
    let saved = run_async(world.board.save_task(task))
        .wrap_err("set scenario task progress")?
        .ok_or_else(|| eyre::eyre!("scenario task vanished"))?;
    world.task = Some(saved);
    Ok(())
}

#[given("the task is open in the detail view")]
fn task_open_in_detail_view(world: &mut DragWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    run_async(world.board.open_details(&id))
        .wrap_err("open detail view")?
        .ok_or_else(|| eyre::eyre!("detail view did not open"))?;
    Ok(())
}
