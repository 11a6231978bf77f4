use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Deferred work the controller asks to be run later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    /// One shuffle step, repeated on a fixed period.
    Shuffle,
    /// Sequence validation, run once after each accepted click.
    Validate,
}

/// Timer backend that delivers [`Task`]s back to the controller.
pub trait Scheduler {
    /// Runs `task` every `period_ms` until cancelled.
    fn repeat(&mut self, task: Task, period_ms: u32);

    /// Runs `task` once after `delay_ms`.
    fn once(&mut self, task: Task, delay_ms: u32);

    /// Drops every pending run of `task`.
    fn cancel(&mut self, task: Task);

    fn cancel_all(&mut self) {
        self.cancel(Task::Shuffle);
        self.cancel(Task::Validate);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Entry {
    task: Task,
    due_at: u64,
    period: Option<u32>,
    seq: u64,
}

/// Scheduler on a fake clock that only moves through [`ManualScheduler::advance`] and
/// [`ManualScheduler::step`].
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: u64,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending(&self, task: Task) -> usize {
        self.entries.iter().filter(|entry| entry.task == task).count()
    }

    /// Moves the clock forward by `ms`, returning every task that became due in firing order.
    ///
    /// Repeating tasks due several times inside the window fire once per period.
    pub fn advance(&mut self, ms: u32) -> Vec<Task> {
        let target = self.now + u64::from(ms);
        let mut fired = Vec::new();

        while let Some(index) = self.next_due(target) {
            fired.push(self.fire(index));
        }

        self.now = target;
        fired
    }

    /// Jumps straight to the next due task and fires it, or returns `None` when nothing is scheduled.
    pub fn step(&mut self) -> Option<Task> {
        let index = self.next_due(u64::MAX)?;
        Some(self.fire(index))
    }

    fn fire(&mut self, index: usize) -> Task {
        let entry = self.entries[index];
        self.now = self.now.max(entry.due_at);

        match entry.period {
            Some(period) => {
                let seq = self.bump_seq();
                let next = &mut self.entries[index];
                next.due_at += u64::from(period);
                next.seq = seq;
            }
            None => {
                self.entries.remove(index);
            }
        }

        entry.task
    }

    fn next_due(&self, target: u64) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_at <= target)
            .min_by_key(|(_, entry)| (entry.due_at, entry.seq))
            .map(|(index, _)| index)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push(&mut self, task: Task, delay: u32, period: Option<u32>) {
        let seq = self.bump_seq();
        self.entries.push(Entry {
            task,
            due_at: self.now + u64::from(delay),
            period,
            seq,
        });
    }
}

impl Scheduler for ManualScheduler {
    fn repeat(&mut self, task: Task, period_ms: u32) {
        let period_ms = period_ms.max(1);
        self.push(task, period_ms, Some(period_ms));
    }

    fn once(&mut self, task: Task, delay_ms: u32) {
        self.push(task, delay_ms, None);
    }

    fn cancel(&mut self, task: Task) {
        self.entries.retain(|entry| entry.task != task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeating_task_fires_every_period() {
        let mut scheduler = ManualScheduler::new();
        scheduler.repeat(Task::Shuffle, 2000);

        assert!(scheduler.advance(1999).is_empty());
        assert_eq!(scheduler.advance(1), [Task::Shuffle]);
        assert_eq!(scheduler.advance(6000), [Task::Shuffle; 3]);
        assert_eq!(scheduler.now(), 8000);
    }

    #[test]
    fn one_shot_fires_once() {
        let mut scheduler = ManualScheduler::new();
        scheduler.once(Task::Validate, 100);

        assert_eq!(scheduler.advance(500), [Task::Validate]);
        assert!(scheduler.advance(500).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn tasks_fire_in_time_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.repeat(Task::Shuffle, 200);
        scheduler.once(Task::Validate, 100);
        scheduler.once(Task::Validate, 300);

        assert_eq!(
            scheduler.advance(400),
            [
                Task::Validate,
                Task::Shuffle,
                Task::Validate,
                Task::Shuffle
            ]
        );
    }

    #[test]
    fn cancel_drops_pending_runs() {
        let mut scheduler = ManualScheduler::new();
        scheduler.repeat(Task::Shuffle, 10);
        scheduler.once(Task::Validate, 5);
        scheduler.once(Task::Validate, 6);
        assert_eq!(scheduler.pending(Task::Validate), 2);

        scheduler.cancel(Task::Validate);
        assert_eq!(scheduler.advance(10), [Task::Shuffle]);

        scheduler.cancel_all();
        assert!(scheduler.is_idle());
        assert!(scheduler.advance(100).is_empty());
    }

    #[test]
    fn step_jumps_to_next_task() {
        let mut scheduler = ManualScheduler::new();
        assert_eq!(scheduler.step(), None);

        scheduler.once(Task::Validate, 250);
        assert_eq!(scheduler.step(), Some(Task::Validate));
        assert_eq!(scheduler.now(), 250);
    }
}
