use study_core::Locale;

/// Fixed strings shown on the dashboard, per locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub pending: &'static str,
    pub completed: &'static str,
    pub today: &'static str,
    pub empty: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    tasks_word: &'static str,
}

const FR: Labels = Labels {
    title: "Tableau de bord d'études",
    pending: "Valider",
    completed: "✔ Terminé",
    today: "Aujourd'hui",
    empty: "Aucun jour planifié.",
    loading: "Chargement…",
    error: "Une erreur est survenue. Veuillez réessayer.",
    tasks_word: "tâches",
};

const EN: Labels = Labels {
    title: "Study dashboard",
    pending: "Complete",
    completed: "✔ Done",
    today: "Today",
    empty: "No planned days.",
    loading: "Loading...",
    error: "Something went wrong. Please try again.",
    tasks_word: "tasks",
};

#[must_use]
pub fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::Fr => FR,
        Locale::En => EN,
    }
}

/// `2 h`, `1.5 h` / `1,5 h`.
#[must_use]
pub fn format_hours(hours: f64, locale: Locale) -> String {
    let number = if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        let raw = format!("{hours:.2}");
        let trimmed = raw.trim_end_matches('0').trim_end_matches('.').to_string();
        match locale {
            Locale::Fr => trimmed.replace('.', ","),
            Locale::En => trimmed,
        }
    };
    format!("{number} h")
}

/// Rounded percentage for display, e.g. `33 %` / `33%`.
#[must_use]
pub fn format_percent(percent: f64, locale: Locale) -> String {
    match locale {
        Locale::Fr => format!("{percent:.0} %"),
        Locale::En => format!("{percent:.0}%"),
    }
}

#[must_use]
pub fn format_summary(
    completed_tasks: usize,
    total_tasks: usize,
    completed_hours: f64,
    planned_hours: f64,
    locale: Locale,
) -> String {
    let words = labels(locale).tasks_word;
    format!(
        "{completed_tasks} / {total_tasks} {words} · {} / {}",
        format_hours(completed_hours, locale).trim_end_matches(" h"),
        format_hours(planned_hours, locale)
    )
}
