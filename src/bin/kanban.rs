//! Command-line client for a kanban backend.
//!
//! ```text
//! kanban login --email admin@kanban.com --password admin123
//! kanban add --title "Write docs" --status IN_PROGRESS
//! kanban move <task-id> DONE
//! kanban board
//! ```
//!
//! The session is kept in the configured session directory and expires
//! after the configured number of days.

#![expect(
    clippy::print_stdout,
    reason = "the CLI reports results on standard output"
)]

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use kanban::{
    account::{
        adapters::{file::FileSessionStore, rest::RestAccountClient},
        domain::{RegisterRequest, Role, UserId, UserUpdate},
        services::SessionManager,
    },
    analytics::ProjectAnalytics,
    board::{
        adapters::rest::RestTaskRepository,
        domain::{NewTask, Progress, Task, TaskId, TaskStatus},
        services::{Board, DragEnd, DropOutcome},
    },
    client::BackendClient,
    config::KanbanConfig,
    schedule::{Timeline, month_agenda},
    telemetry,
};
use mockable::DefaultClock;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "kanban", version, about = "Kanban board client")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, default_value = "kanban.toml")]
    config: Utf8PathBuf,

    /// Backend base URL, overriding the configuration.
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must match `--password` when given.
        #[arg(long)]
        confirm: Option<String>,
        #[arg(long, default_value_t = Role::Developer)]
        role: Role,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Update the signed-in user's profile.
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// List registered users.
    Users,
    /// Print the board, one column at a time.
    Board,
    /// Add a task.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = TaskStatus::Todo)]
        status: TaskStatus,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Drop a task on a column. Unknown zones leave the task in place.
    Move { id: String, zone: String },
    /// Show a task.
    Show { id: String },
    /// Edit a task's fields and save it.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        progress: Option<u8>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        due: Option<NaiveDate>,
        /// User id to add to the assignees; repeatable.
        #[arg(long)]
        assign: Vec<String>,
        /// User id to remove from the assignees; repeatable.
        #[arg(long)]
        unassign: Vec<String>,
    },
    /// Delete a task.
    Delete { id: String },
    /// Print completion, distribution, and burndown as JSON.
    Analytics,
    /// Print tasks assigned to the signed-in user.
    Mine,
    /// Print tasks due in a month, by day.
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Print the timeline of scheduled tasks as JSON.
    Timeline,
}

type Sessions = SessionManager<FileSessionStore, DefaultClock>;

struct App {
    board: Board<RestTaskRepository>,
    accounts: RestAccountClient,
    sessions: Sessions,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = KanbanConfig::load(&cli.config)?.with_env_overrides();
    if let Some(url) = cli.backend {
        config.backend.base_url = url;
    }
    telemetry::init(&config.log.filter);

    let client = BackendClient::new(config.backend.base_url.clone());
    let app = App {
        board: Board::new(Arc::new(RestTaskRepository::new(client.clone()))),
        accounts: RestAccountClient::new(client),
        sessions: SessionManager::with_ttl_days(
            Arc::new(FileSessionStore::new(config.session.dir.clone())),
            Arc::new(DefaultClock),
            config.session.ttl_days,
        ),
    };
    run(&app, cli.cmd).await
}

async fn run(app: &App, cmd: Cmd) -> anyhow::Result<()> {
    match cmd {
        Cmd::Login { email, password } => {
            let grant = app.accounts.login(&email, &password).await?;
            let session = app.sessions.begin(grant)?;
            println!("signed in as {}", session.user().name);
        }
        Cmd::Register {
            name,
            email,
            password,
            confirm,
            role,
        } => {
            let mut request = RegisterRequest::new(name, email, password).with_role(role);
            if let Some(confirm) = confirm {
                request = request.with_confirmation(confirm);
            }
            let grant = app.accounts.register(request).await?;
            let session = app.sessions.begin(grant)?;
            println!("registered {}", session.user().name);
        }
        Cmd::Logout => {
            app.sessions.logout()?;
            println!("signed out");
        }
        Cmd::Whoami => match app.sessions.current_user()? {
            Some(user) => print_json(&user)?,
            None => println!("not signed in"),
        },
        Cmd::Profile {
            name,
            email,
            role,
            color,
            password,
        } => {
            let Some(user) = app.sessions.current_user()? else {
                bail!("not signed in");
            };
            let update = UserUpdate {
                name,
                email,
                role,
                avatar: None,
                color,
                password,
            };
            let updated = app.accounts.update_user(&user.id, &update).await?;
            app.sessions.refresh_user(updated.clone())?;
            print_json(&updated)?;
        }
        Cmd::Users => print_json(&app.accounts.list_users().await?)?,
        Cmd::Board => print_board(&app.board).await?,
        Cmd::Add {
            title,
            description,
            status,
            start,
            due,
        } => {
            let input = NewTask::new(title)
                .with_description(description)
                .in_column(status)
                .scheduled(start, due);
            let task = app.board.add_task(input).await?;
            println!("added {}", task.id());
        }
        Cmd::Move { id, zone } => {
            let outcome = app
                .board
                .drag_end(DragEnd::over_zone(TaskId::new(id), &zone))
                .await?;
            match outcome {
                DropOutcome::Moved(task) => {
                    println!("{} is now {} ({})", task.id(), task.status().title(), task.progress());
                }
                DropOutcome::NoDropTarget => println!("no drop target; nothing changed"),
                DropOutcome::TaskNotFound => println!("no such task; nothing changed"),
            }
        }
        Cmd::Show { id } => match app.board.open_details(&TaskId::new(id)).await? {
            Some(task) => print_json(&task)?,
            None => println!("no such task"),
        },
        Cmd::Edit {
            id,
            title,
            description,
            status,
            progress,
            start,
            due,
            assign,
            unassign,
        } => {
            let id = TaskId::new(id);
            let Some(current) = app.board.open_details(&id).await? else {
                bail!("no task {id}");
            };
            let mut fields = current.fields();
            if let Some(title) = title {
                fields.title = title.try_into()?;
            }
            if let Some(description) = description {
                fields.description = description;
            }
            if let Some(status) = status {
                fields.status = status;
            }
            if let Some(progress) = progress {
                fields.progress = Progress::new(progress)?;
            }
            fields.start_date = start.or(fields.start_date);
            fields.due_date = due.or(fields.due_date);
            fields.assigned_to.extend(assign.into_iter().map(UserId::new));
            for user in unassign {
                fields.assigned_to.remove(&UserId::new(user));
            }
            let edited = Task::from_fields(id, fields)?;
            app.board.save_task(edited).await?;
            if let Some(task) = app.board.selected_task().await? {
                print_json(&task)?;
            }
            app.board.close_details();
        }
        Cmd::Delete { id } => {
            if app.board.delete_task(&TaskId::new(id)).await? {
                println!("deleted");
            } else {
                println!("no such task");
            }
        }
        Cmd::Analytics => print_json(&app.board.analytics().await?)?,
        Cmd::Mine => {
            let Some(user) = app.sessions.current_user()? else {
                bail!("not signed in");
            };
            for task in app.board.tasks_for(&user.id).await? {
                println!("{}\t{}\t{}", task.id(), task.status().title(), task.title());
            }
        }
        Cmd::Calendar { year, month } => {
            let today = Utc::now().date_naive();
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            let tasks = app.board.tasks().await?;
            for day in month_agenda(&tasks, year, month) {
                if day.tasks.is_empty() {
                    continue;
                }
                let titles: Vec<String> = day.tasks.iter().map(|task| task.title().to_string()).collect();
                println!("{}\t{}", day.date, titles.join(", "));
            }
        }
        Cmd::Timeline => {
            let tasks = app.board.tasks().await?;
            match Timeline::from_tasks(&tasks) {
                Some(timeline) => print_json(&timeline)?,
                None => println!("no scheduled tasks"),
            }
        }
    }
    Ok(())
}

async fn print_board(board: &Board<RestTaskRepository>) -> anyhow::Result<()> {
    for column in board.columns().await? {
        println!("== {} ({})", column.column.title, column.tasks.len());
        for task in &column.tasks {
            println!("  {}\t{}\t{}", task.id(), task.progress(), task.title());
        }
    }
    let ProjectAnalytics {
        total_tasks,
        completed_tasks,
        average_progress,
        ..
    } = board.analytics().await?;
    println!("{completed_tasks}/{total_tasks} complete, average progress {average_progress}%");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
