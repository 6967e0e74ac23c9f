//! Session-scoped study planner.
//!
//! The planner is an explicit value owned by the surrounding session --
//! state is passed in, never held in globals -- and the rhythm engine only
//! ever sees derived numbers such as completed minutes for a day.

mod task;

pub use task::{StudyTask, Subject};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// In-memory study task list with per-date progress queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planner {
    tasks: Vec<StudyTask>,
}

/// Completion summary for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub completed_minutes: u32,
    pub planned_minutes: u32,
    /// Completed share of planned minutes, 0-100. Zero when nothing is
    /// planned for the day.
    pub percent: u32,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task for `date`.
    ///
    /// The topic is trimmed; blank topics and zero-minute plans are
    /// rejected.
    pub fn add(
        &mut self,
        subject: Subject,
        topic: &str,
        planned_minutes: u32,
        date: NaiveDate,
    ) -> Result<StudyTask, ValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        if planned_minutes == 0 {
            return Err(ValidationError::InvalidMinutes {
                minutes: planned_minutes,
            });
        }

        let task = StudyTask {
            id: uuid::Uuid::new_v4().to_string(),
            subject,
            topic: topic.to_string(),
            planned_minutes,
            done: false,
            date,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn tasks(&self) -> &[StudyTask] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&StudyTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Mark a task as completed or not.
    pub fn set_done(&mut self, id: &str, done: bool) -> Result<(), ValidationError> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = done;
                Ok(())
            }
            None => Err(ValidationError::TaskNotFound(id.to_string())),
        }
    }

    /// Remove a task, returning it.
    pub fn remove(&mut self, id: &str) -> Result<StudyTask, ValidationError> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => Ok(self.tasks.remove(idx)),
            None => Err(ValidationError::TaskNotFound(id.to_string())),
        }
    }

    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&StudyTask> {
        self.tasks.iter().filter(|t| t.date == date).collect()
    }

    /// Total minutes planned for a day.
    pub fn planned_minutes_on(&self, date: NaiveDate) -> u32 {
        self.tasks
            .iter()
            .filter(|t| t.date == date)
            .map(|t| t.planned_minutes)
            .sum()
    }

    /// Minutes of completed tasks for a day.
    pub fn completed_minutes_on(&self, date: NaiveDate) -> u32 {
        self.tasks
            .iter()
            .filter(|t| t.date == date && t.done)
            .map(|t| t.planned_minutes)
            .sum()
    }

    /// Distinct subjects planned for a day, in first-seen order.
    pub fn subjects_on(&self, date: NaiveDate) -> Vec<Subject> {
        let mut subjects = Vec::new();
        for task in self.tasks.iter().filter(|t| t.date == date) {
            if !subjects.contains(&task.subject) {
                subjects.push(task.subject);
            }
        }
        subjects
    }

    /// Completion summary for a day.
    pub fn progress_on(&self, date: NaiveDate) -> DailyProgress {
        let planned = self.planned_minutes_on(date);
        let completed = self.completed_minutes_on(date);
        let percent = if planned == 0 {
            0
        } else {
            completed * 100 / planned
        };
        DailyProgress {
            date,
            completed_minutes: completed,
            planned_minutes: planned,
            percent,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_add_trims_topic() {
        let mut planner = Planner::new();
        let task = planner
            .add(Subject::Chemistry, "  redox reactions  ", 40, day(7))
            .unwrap();
        assert_eq!(task.topic, "redox reactions");
        assert!(!task.done);
        assert_eq!(planner.len(), 1);
    }

    #[test]
    fn test_add_rejects_blank_topic() {
        let mut planner = Planner::new();
        assert_eq!(
            planner.add(Subject::Math, "   ", 40, day(7)),
            Err(ValidationError::EmptyTopic)
        );
        assert!(planner.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_minutes() {
        let mut planner = Planner::new();
        assert_eq!(
            planner.add(Subject::Math, "limits", 0, day(7)),
            Err(ValidationError::InvalidMinutes { minutes: 0 })
        );
    }

    #[test]
    fn test_set_done_and_progress() {
        let mut planner = Planner::new();
        let a = planner.add(Subject::Chemistry, "acids", 60, day(7)).unwrap();
        planner.add(Subject::Biology, "cells", 30, day(7)).unwrap();
        planner.add(Subject::Math, "limits", 45, day(8)).unwrap();

        planner.set_done(&a.id, true).unwrap();

        let progress = planner.progress_on(day(7));
        assert_eq!(progress.completed_minutes, 60);
        assert_eq!(progress.planned_minutes, 90);
        assert_eq!(progress.percent, 66); // truncated

        assert_eq!(planner.completed_minutes_on(day(8)), 0);
    }

    #[test]
    fn test_progress_empty_day_is_zero() {
        let planner = Planner::new();
        let progress = planner.progress_on(day(1));
        assert_eq!(progress.percent, 0);
        assert_eq!(progress.planned_minutes, 0);
    }

    #[test]
    fn test_remove_unknown_task() {
        let mut planner = Planner::new();
        assert!(matches!(
            planner.remove("nope"),
            Err(ValidationError::TaskNotFound(_))
        ));
    }

    #[test]
    fn test_subjects_on_dedups_in_order() {
        let mut planner = Planner::new();
        planner.add(Subject::Biology, "cells", 30, day(7)).unwrap();
        planner.add(Subject::Chemistry, "acids", 30, day(7)).unwrap();
        planner.add(Subject::Biology, "genes", 30, day(7)).unwrap();

        assert_eq!(
            planner.subjects_on(day(7)),
            vec![Subject::Biology, Subject::Chemistry]
        );
    }
}
