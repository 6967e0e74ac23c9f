//! Study planner commands.

use clap::Subcommand;

use studybody_core::{Config, SessionStore, StudyTask, Subject};

use super::common;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Add a study task
    Add {
        /// Topic or unit, e.g. "redox reactions"
        topic: String,
        /// Subject (chemistry/biology/pharmacy/math/english/other)
        #[arg(long, default_value = "other")]
        subject: String,
        /// Planned minutes (default from config)
        #[arg(long)]
        minutes: Option<u32>,
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List tasks
    List {
        /// Only tasks for this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task as completed
    Done {
        /// Task id
        id: String,
    },
    /// Mark a task as not completed
    Undo {
        /// Task id
        id: String,
    },
    /// Remove a task
    Remove {
        /// Task id
        id: String,
    },
    /// Daily progress summary
    Progress {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let mut session = store.load()?;

    match action {
        PlanAction::Add {
            topic,
            subject,
            minutes,
            date,
        } => {
            let subject = subject.parse::<Subject>()?;
            let minutes = match minutes {
                Some(m) => m,
                None => Config::load()?.planner.default_planned_minutes,
            };
            let date = common::parse_date(date.as_deref())?;

            let task = session.planner.add(subject, &topic, minutes, date)?;
            store.save(&session)?;
            println!("Task added: {}", task.id);
            print_task(&task);
        }
        PlanAction::List { date, json } => {
            let tasks: Vec<&StudyTask> = match date {
                Some(d) => {
                    let date = common::parse_date(Some(&d))?;
                    session.planner.tasks_on(date)
                }
                None => session.planner.tasks().iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks planned yet.");
            } else {
                for task in tasks {
                    print_task(task);
                }
            }
        }
        PlanAction::Done { id } => {
            session.planner.set_done(&id, true)?;
            store.save(&session)?;
            println!("Task completed: {id}");
        }
        PlanAction::Undo { id } => {
            session.planner.set_done(&id, false)?;
            store.save(&session)?;
            println!("Task reopened: {id}");
        }
        PlanAction::Remove { id } => {
            let task = session.planner.remove(&id)?;
            store.save(&session)?;
            println!("Task removed: {} ({})", task.id, task.topic);
        }
        PlanAction::Progress { date } => {
            let date = common::parse_date(date.as_deref())?;
            let progress = session.planner.progress_on(date);
            println!(
                "{}: {} / {} min completed ({}%)",
                progress.date,
                progress.completed_minutes,
                progress.planned_minutes,
                progress.percent
            );
        }
    }
    Ok(())
}

fn print_task(task: &StudyTask) {
    let mark = if task.done { "x" } else { " " };
    println!(
        "  [{mark}] {}  {}  {} ({} min)  {}",
        task.id, task.date, task.topic, task.planned_minutes, task.subject
    );
}
