use std::sync::Arc;

use chrono::NaiveDate;
use services::DashboardService;
use study_core::Locale;

pub trait UiApp: Send + Sync {
    fn dashboard(&self) -> Arc<DashboardService>;
    fn locale(&self) -> Locale;
    fn today(&self) -> NaiveDate;
}

#[derive(Clone)]
pub struct AppContext {
    locale: Locale,
    dashboard: Arc<DashboardService>,
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            locale: app.locale(),
            dashboard: app.dashboard(),
            app: Arc::clone(app),
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Asks the app each time, so a window left open past midnight moves
    /// the marker on its next render.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.app.today()
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
