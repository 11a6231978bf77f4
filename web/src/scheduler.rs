use gloo::timers::callback::{Interval, Timeout};
use recallo_core::{Scheduler, Task};
use yew::html::Scope;

use crate::app::{GameView, Msg};

/// Browser timers delivering tasks to the game component as [`Msg::Run`].
///
/// Dropping a gloo timer clears it, so cancelling is just forgetting the handle.
pub(crate) struct TimerScheduler {
    link: Scope<GameView>,
    intervals: Vec<(Task, Interval)>,
    timeouts: Vec<(Task, Timeout)>,
}

impl TimerScheduler {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self {
            link,
            intervals: Vec::new(),
            timeouts: Vec::new(),
        }
    }
}

impl Scheduler for TimerScheduler {
    fn repeat(&mut self, task: Task, period_ms: u32) {
        log::trace!("every {}ms: {:?}", period_ms, task);
        let link = self.link.clone();
        let interval = Interval::new(period_ms, move || link.send_message(Msg::Run(task)));
        self.intervals.push((task, interval));
    }

    fn once(&mut self, task: Task, delay_ms: u32) {
        log::trace!("in {}ms: {:?}", delay_ms, task);
        let link = self.link.clone();
        let timeout = Timeout::new(delay_ms, move || link.send_message(Msg::Run(task)));
        self.timeouts.push((task, timeout));
    }

    fn cancel(&mut self, task: Task) {
        self.intervals.retain(|(pending, _)| *pending != task);
        self.timeouts.retain(|(pending, _)| *pending != task);
    }
}
