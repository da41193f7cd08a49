//! Built-in study plan used when no plan is configured.

use crate::error::Error;
use crate::model::{DateKey, Phase, Task};

type PhaseRow = (&'static str, &'static str, &'static str, &'static [(&'static str, f64)]);

const DEFAULT_PLAN: &[PhaseRow] = &[
    (
        "Phase 1",
        "2025-09-13",
        "2025-09-30",
        &[
            ("Machine Learning Specialization", 2.0),
            ("AWS Solutions Architect Associate", 2.0),
            ("Terraform (IaC)", 1.0),
            ("Révisions/exercices", 1.0),
        ],
    ),
    (
        "Phase 2",
        "2025-10-01",
        "2025-10-25",
        &[
            ("AWS Machine Learning Specialty", 3.0),
            ("AWS ML Engineer Associate", 2.0),
            ("Laboratoire/Pratique", 1.0),
        ],
    ),
    (
        "Phase 3",
        "2025-10-26",
        "2025-11-15",
        &[
            ("Fiches Stanford ML/AI", 2.0),
            ("Révisions/mocks AWS", 2.0),
            ("Révisions Machine Learning", 1.0),
            ("Terraform (IaC)", 1.0),
        ],
    ),
];

/// The default three-phase certification plan.
///
/// # Errors
///
/// Returns `Error` if a built-in row fails date or task validation.
pub fn default_plan() -> Result<Vec<Phase>, Error> {
    DEFAULT_PLAN
        .iter()
        .map(|(name, start, end, tasks)| -> Result<Phase, Error> {
            let start: DateKey = start.parse()?;
            let end: DateKey = end.parse()?;
            let tasks = tasks
                .iter()
                .map(|(task, hours)| Task::new(*task, *hours))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Phase::new(*name, start.date(), end.date(), tasks))
        })
        .collect()
}
