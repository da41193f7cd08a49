use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, Clock, DashboardService};
use storage::repository::{InMemoryRepository, Storage};
use study_core::Locale;
use study_core::model::{DateKey, Phase, Task};
use study_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{BoardContent, DashboardBoard, DashboardView, use_dashboard_board};
use crate::vm::DashboardVm;

#[derive(Clone)]
struct TestApp {
    dashboard: Arc<DashboardService>,
    locale: Locale,
    today: NaiveDate,
}

impl UiApp for TestApp {
    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Receives the board's completion handler once it is mounted.
#[derive(Clone, Default)]
pub struct CompletionSlot(Rc<RefCell<Option<Callback<(DateKey, usize)>>>>);

impl CompletionSlot {
    pub fn handler(&self) -> Callback<(DateKey, usize)> {
        self.0.borrow().expect("completion handler registered")
    }
}

impl PartialEq for CompletionSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Dashboard,
    Board(DashboardVm),
    CapturedBoard(DashboardVm, CompletionSlot),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Board(vm) => rsx! { DashboardBoard { initial: vm } },
        ViewKind::CapturedBoard(vm, slot) => rsx! { CapturingBoard { initial: vm, slot } },
    }
}

#[component]
fn CapturingBoard(initial: DashboardVm, slot: CompletionSlot) -> Element {
    let handle = use_dashboard_board(&initial);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *slot.0.borrow_mut() = Some(handle.complete);
    }
    rsx! { BoardContent { handle } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    pub dashboard: Arc<DashboardService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Invoke a UI callback as if from inside the mounted tree.
    pub fn call<T: 'static>(&self, callback: Callback<T>, args: T) {
        self.dom.in_runtime(|| callback.call(args));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Two days (2025-09-13 and 2025-09-14) of tasks A (2h) and B (1h).
pub fn scenario_plan() -> Vec<Phase> {
    vec![Phase::new(
        "Phase 1",
        NaiveDate::from_ymd_opt(2025, 9, 13).unwrap(),
        NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(),
        vec![Task::new("A", 2.0).unwrap(), Task::new("B", 1.0).unwrap()],
    )]
}

pub async fn setup_services(plan: &[Phase]) -> (InMemoryRepository, Arc<DashboardService>) {
    let repo = InMemoryRepository::new();
    let storage = Storage::from_repository(repo.clone());
    let services = AppServices::with_storage(&storage, Clock::fixed(fixed_now()), plan).await;
    (repo, services.dashboard())
}

pub async fn setup_view_harness(view: ViewKind, locale: Locale, plan: &[Phase]) -> ViewHarness {
    let (repo, dashboard) = setup_services(plan).await;
    setup_view_harness_with_dashboard(view, locale, repo, dashboard)
}

pub fn setup_view_harness_with_dashboard(
    view: ViewKind,
    locale: Locale,
    repo: InMemoryRepository,
    dashboard: Arc<DashboardService>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        dashboard: Arc::clone(&dashboard),
        locale,
        today: Clock::fixed(fixed_now()).today(),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        repo,
        dashboard,
    }
}
