//! Unit tests for the analytics aggregator.

use super::{BurndownSeries, ProjectAnalytics, StatusDistribution, average_progress, completed_count};
use crate::board::domain::{NewTask, Progress, Task, TaskStatus};
use chrono::NaiveDate;
use eyre::{bail, ensure};
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| eyre::eyre!("invalid date"))
}

fn task(status: TaskStatus, progress: u8) -> eyre::Result<Task> {
    let mut task = Task::create(NewTask::new(format!("{status} at {progress}")).in_column(status))?;
    task.set_progress(Progress::new(progress)?);
    Ok(task)
}

fn scheduled(status: TaskStatus, start: NaiveDate, due: NaiveDate) -> eyre::Result<Task> {
    Ok(Task::create(
        NewTask::new("scheduled")
            .in_column(status)
            .scheduled(Some(start), Some(due)),
    )?)
}

#[rstest]
#[case(&[], 0)]
#[case(&[0, 50, 100], 50)]
#[case(&[0, 1], 1)]
#[case(&[0, 0, 1], 0)]
#[case(&[33, 34], 34)]
#[case(&[100], 100)]
fn average_progress_rounds_half_up(#[case] values: &[u8], #[case] expected: u8) -> eyre::Result<()> {
    let tasks = values
        .iter()
        .map(|&value| task(TaskStatus::InProgress, value))
        .collect::<eyre::Result<Vec<_>>>()?;
    ensure!(average_progress(&tasks) == expected);
    Ok(())
}

#[rstest]
fn completed_counts_done_or_full_progress() -> eyre::Result<()> {
    let tasks = vec![
        task(TaskStatus::Done, 100)?,
        task(TaskStatus::InProgress, 100)?,
        task(TaskStatus::InProgress, 99)?,
        task(TaskStatus::Todo, 0)?,
    ];
    ensure!(completed_count(&tasks) == 2);
    Ok(())
}

#[rstest]
fn distribution_counts_per_column_and_hides_empty_ones() -> eyre::Result<()> {
    let tasks = vec![
        task(TaskStatus::Todo, 0)?,
        task(TaskStatus::Todo, 0)?,
        task(TaskStatus::Done, 100)?,
    ];
    let distribution = StatusDistribution::from_tasks(&tasks);
    ensure!(distribution.count(TaskStatus::Todo) == 2);
    ensure!(distribution.count(TaskStatus::InProgress) == 0);
    ensure!(distribution.count(TaskStatus::Done) == 1);
    ensure!(distribution.all().len() == 3);
    let visible: Vec<TaskStatus> = distribution.visible().map(|entry| entry.status).collect();
    ensure!(visible == [TaskStatus::Todo, TaskStatus::Done]);
    Ok(())
}

#[rstest]
fn burndown_is_absent_without_scheduled_tasks() -> eyre::Result<()> {
    let mut half = task(TaskStatus::Todo, 0)?;
    let (mut edit, _) = half.clone().into_edit();
    edit.start_date = Some(date(2024, 1, 1)?);
    half.apply_edit(edit)?;
    ensure!(BurndownSeries::from_tasks(&[half]).is_none());
    ensure!(BurndownSeries::from_tasks(&[]).is_none());
    Ok(())
}

#[rstest]
fn single_done_task_burns_down_to_zero() -> eyre::Result<()> {
    let tasks = vec![scheduled(TaskStatus::Done, date(2024, 1, 1)?, date(2024, 1, 5)?)?];
    let Some(series) = BurndownSeries::from_tasks(&tasks) else {
        bail!("expected a burndown");
    };
    ensure!(series.total() == 1);
    ensure!(series.points().len() == 5);
    let ideals: Vec<f64> = series.points().iter().map(|point| point.ideal).collect();
    ensure!(ideals == [1.0, 0.75, 0.5, 0.25, 0.0]);
    let actuals: Vec<u32> = series.points().iter().map(|point| point.actual).collect();
    ensure!(actuals == [1, 1, 1, 1, 0]);
    Ok(())
}

#[rstest]
fn done_tasks_burn_on_their_due_date() -> eyre::Result<()> {
    let tasks = vec![
        scheduled(TaskStatus::Done, date(2024, 1, 1)?, date(2024, 1, 2)?)?,
        scheduled(TaskStatus::InProgress, date(2024, 1, 2)?, date(2024, 1, 4)?)?,
    ];
    let Some(series) = BurndownSeries::from_tasks(&tasks) else {
        bail!("expected a burndown");
    };
    let actuals: Vec<u32> = series.points().iter().map(|point| point.actual).collect();
    ensure!(actuals == [2, 1, 1, 1]);
    let Some(first) = series.points().first() else {
        bail!("expected points");
    };
    ensure!(first.date == date(2024, 1, 1)?);
    ensure!(series.point_on(date(2024, 1, 4)?).map(|point| point.ideal) == Some(0.0));
    Ok(())
}

#[rstest]
fn one_day_range_has_a_single_zero_ideal_point() -> eyre::Result<()> {
    let day = date(2024, 2, 29)?;
    let tasks = vec![scheduled(TaskStatus::Todo, day, day)?];
    let Some(series) = BurndownSeries::from_tasks(&tasks) else {
        bail!("expected a burndown");
    };
    ensure!(series.points().len() == 1);
    ensure!(series.points().iter().all(|point| point.ideal == 0.0 && point.actual == 1));
    Ok(())
}

#[rstest]
fn unscheduled_tasks_are_left_out_of_the_burndown() -> eyre::Result<()> {
    let tasks = vec![
        scheduled(TaskStatus::Todo, date(2024, 1, 1)?, date(2024, 1, 3)?)?,
        task(TaskStatus::Done, 100)?,
    ];
    let Some(series) = BurndownSeries::from_tasks(&tasks) else {
        bail!("expected a burndown");
    };
    ensure!(series.total() == 1);
    ensure!(series.points().iter().all(|point| point.actual == 1));
    Ok(())
}

#[rstest]
fn project_analytics_bundles_every_summary() -> eyre::Result<()> {
    let tasks = vec![
        task(TaskStatus::Todo, 0)?,
        task(TaskStatus::InProgress, 50)?,
        task(TaskStatus::Done, 100)?,
    ];
    let analytics = ProjectAnalytics::from_tasks(&tasks);
    ensure!(analytics.total_tasks == 3);
    ensure!(analytics.completed_tasks == 1);
    ensure!(analytics.average_progress == 50);
    ensure!(analytics.distribution.count(TaskStatus::InProgress) == 1);
    ensure!(analytics.burndown.is_none());
    Ok(())
}
