use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, DashboardService};
use study_core::Locale;
use study_core::model::{DateKey, MarkOutcome};
use ui::text::render_text;
use ui::vm::{format_percent, render_dashboard};
use ui::{App, UiApp, build_app_context};

mod cli;
mod logging;
mod settings;
mod sqlite_url;

use cli::{Cli, Command};
use settings::DashboardConfig;
use sqlite_url::{normalize_sqlite_url, prepare_sqlite_file};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

struct DesktopApp {
    services: AppServices,
    locale: Locale,
}

impl UiApp for DesktopApp {
    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn today(&self) -> NaiveDate {
        self.services.clock().today()
    }
}

fn launch_desktop(services: AppServices, locale: Locale) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services, locale });
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Study Dashboard")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn print_status(services: &AppServices, locale: Locale) {
    let snapshot = services.dashboard().snapshot().await;
    let vm = render_dashboard(
        &snapshot.schedule,
        &snapshot.progress,
        services.clock().today(),
        locale,
    );
    print!("{}", render_text(&vm));
}

async fn complete(
    services: &AppServices,
    locale: Locale,
    date: DateKey,
    task: usize,
) -> Result<(), BoxError> {
    let completion = services.dashboard().complete_task(date, task).await?;
    let percent = format_percent(completion.percent, locale);
    match completion.outcome {
        MarkOutcome::Completed if completion.persisted => {
            println!("{date} #{task}: completed, day at {percent}");
        }
        MarkOutcome::Completed => {
            return Err(format!("{date} #{task}: completed but could not be saved").into());
        }
        MarkOutcome::AlreadyCompleted => {
            println!("{date} #{task}: already completed, day at {percent}");
        }
    }
    Ok(())
}

fn run() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_url = db;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    logging::init(&config.log_level)?;

    let phases = config.plan()?;
    let db_url = normalize_sqlite_url(&config.db_url);
    tracing::info!(db_url = %db_url, locale = %config.locale, phases = phases.len(), "starting");

    // Open + migrate SQLite up front; the desktop launch below runs outside
    // this runtime's `block_on`.
    let runtime = tokio::runtime::Runtime::new()?;
    let services = runtime.block_on(async {
        prepare_sqlite_file(&db_url)?;
        let services = AppServices::new_sqlite(&db_url, Clock::default_clock(), &phases).await?;
        Ok::<_, BoxError>(services)
    })?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_desktop(services, config.locale);
            Ok(())
        }
        Command::Status => {
            runtime.block_on(print_status(&services, config.locale));
            Ok(())
        }
        Command::Complete { date, task } => {
            runtime.block_on(complete(&services, config.locale, date, task))
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
