use chrono::NaiveDate;
use services::{PlanTotals, TaskCompletion};
use study_core::model::{DateKey, DayEntry, ProgressMap, TaskState};
use study_core::{Locale, Schedule};

use crate::vm::labels::{format_hours, format_percent, format_summary, labels};
use crate::vm::time_fmt::format_day_heading;

#[derive(Clone, Debug, PartialEq)]
pub struct TaskRowVm {
    pub index: usize,
    pub name: String,
    pub hours: f64,
    pub hours_label: String,
    pub state: TaskState,
    pub control_label: &'static str,
}

impl TaskRowVm {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    #[must_use]
    pub fn control_class(&self) -> &'static str {
        if self.is_completed() {
            "task-control completed"
        } else {
            "task-control"
        }
    }

    fn set_state(&mut self, state: TaskState, locale: Locale) {
        let labels = labels(locale);
        self.state = state;
        self.control_label = if state.is_completed() {
            labels.completed
        } else {
            labels.pending
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayCardVm {
    pub date: DateKey,
    pub heading: String,
    pub is_today: bool,
    pub percent: f64,
    pub percent_label: String,
    pub tasks: Vec<TaskRowVm>,
}

impl DayCardVm {
    /// Inline style sizing the progress bar to the completion ratio.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_today {
            "day-card today"
        } else {
            "day-card"
        }
    }
}

/// Declarative description of the whole dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub locale: Locale,
    pub title: &'static str,
    pub today_label: &'static str,
    pub empty_label: &'static str,
    pub summary_label: String,
    pub cards: Vec<DayCardVm>,
    totals: PlanTotals,
}

impl DashboardVm {
    #[must_use]
    pub fn totals(&self) -> &PlanTotals {
        &self.totals
    }

    #[must_use]
    pub fn card(&self, date: DateKey) -> Option<&DayCardVm> {
        self.cards.iter().find(|card| card.date == date)
    }

    /// Reflect a completion on the single affected card without rebuilding
    /// the rest of the view.
    pub fn apply_completion(&mut self, completion: &TaskCompletion) {
        let locale = self.locale;
        let Some(card) = self.cards.iter_mut().find(|card| card.date == completion.date) else {
            return;
        };
        card.percent = completion.percent;
        card.percent_label = format_percent(completion.percent, locale);

        let Some(row) = card.tasks.get_mut(completion.index) else {
            return;
        };
        if row.is_completed() {
            return;
        }
        row.set_state(TaskState::Completed, locale);
        self.totals.completed_tasks += 1;
        self.totals.completed_hours += row.hours;
        self.summary_label = summary_for(&self.totals, locale);
    }
}

fn summary_for(totals: &PlanTotals, locale: Locale) -> String {
    format_summary(
        totals.completed_tasks,
        totals.tasks,
        totals.completed_hours,
        totals.planned_hours,
        locale,
    )
}

#[must_use]
pub fn map_day_card(
    day: &DayEntry,
    progress: &ProgressMap,
    today: NaiveDate,
    locale: Locale,
) -> DayCardVm {
    let key = day.key();
    let percent = progress.percent(&key);
    let tasks = day
        .tasks()
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let mut row = TaskRowVm {
                index,
                name: task.name().to_string(),
                hours: task.hours(),
                hours_label: format_hours(task.hours(), locale),
                state: TaskState::Pending,
                control_label: labels(locale).pending,
            };
            row.set_state(progress.task_state(&key, index), locale);
            row
        })
        .collect();

    DayCardVm {
        date: key,
        heading: format_day_heading(day.date(), locale),
        is_today: day.date() == today,
        percent,
        percent_label: format_percent(percent, locale),
        tasks,
    }
}

/// Build the dashboard description from the plan and the progress map.
///
/// Days without stored flags render as all pending.
#[must_use]
pub fn render_dashboard(
    schedule: &Schedule,
    progress: &ProgressMap,
    today: NaiveDate,
    locale: Locale,
) -> DashboardVm {
    let labels = labels(locale);
    let totals = PlanTotals::of(schedule.days(), progress);
    DashboardVm {
        locale,
        title: labels.title,
        today_label: labels.today,
        empty_label: labels.empty,
        summary_label: summary_for(&totals, locale),
        cards: schedule
            .days()
            .iter()
            .map(|day| map_day_card(day, progress, today, locale))
            .collect(),
        totals,
    }
}
