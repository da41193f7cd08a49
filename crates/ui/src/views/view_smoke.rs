use study_core::Locale;
use study_core::model::DateKey;

use super::test_harness::{
    CompletionSlot, ViewKind, scenario_plan, setup_services, setup_view_harness,
    setup_view_harness_with_dashboard,
};
use crate::vm::render_dashboard;

fn key(raw: &str) -> DateKey {
    raw.parse().unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_cards() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Locale::Fr, &scenario_plan()).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("samedi 13 septembre 2025"), "missing first day in {html}");
    assert!(html.contains("dimanche 14 septembre 2025"), "missing second day in {html}");
    assert!(html.contains("Valider"), "missing pending control in {html}");
    assert!(html.contains("2 h"), "missing hours in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn board_smoke_renders_stored_completion() {
    let (repo, dashboard) = setup_services(&scenario_plan()).await;
    dashboard.complete_task(key("2025-09-13"), 0).await.unwrap();

    let snapshot = dashboard.snapshot().await;
    let today = snapshot.schedule.days()[0].date();
    let vm = render_dashboard(&snapshot.schedule, &snapshot.progress, today, Locale::Fr);
    let mut harness =
        setup_view_harness_with_dashboard(ViewKind::Board(vm), Locale::Fr, repo, dashboard);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("✔ Terminé"), "missing completed control in {html}");
    assert!(html.contains("width: 50%;"), "missing half bar in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
    assert!(html.contains("day-card today"), "missing today marker in {html}");
    assert!(html.contains("day-badge"), "missing today badge in {html}");
    assert!(html.contains("1 / 4 tâches"), "missing summary in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn board_smoke_renders_english_labels() {
    let (repo, dashboard) = setup_services(&scenario_plan()).await;
    let snapshot = dashboard.snapshot().await;
    let today = snapshot.schedule.days()[1].date();
    let vm = render_dashboard(&snapshot.schedule, &snapshot.progress, today, Locale::En);
    let mut harness =
        setup_view_harness_with_dashboard(ViewKind::Board(vm), Locale::En, repo, dashboard);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Study dashboard"), "missing title in {html}");
    assert!(html.contains("Saturday, September 13, 2025"), "missing heading in {html}");
    assert!(html.contains("Complete"), "missing control label in {html}");
    assert!(!html.contains("✔ Done"), "unexpected completed control in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_plan_renders_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Locale::En, &[]).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No planned days."), "missing empty state in {html}");
    assert_eq!(harness.repo.write_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn completing_a_task_updates_the_card_and_persists() {
    let (repo, dashboard) = setup_services(&scenario_plan()).await;
    assert_eq!(repo.write_count(), 1);

    let snapshot = dashboard.snapshot().await;
    let today = snapshot.schedule.days()[0].date();
    let vm = render_dashboard(&snapshot.schedule, &snapshot.progress, today, Locale::Fr);
    let slot = CompletionSlot::default();
    let mut harness = setup_view_harness_with_dashboard(
        ViewKind::CapturedBoard(vm, slot.clone()),
        Locale::Fr,
        repo,
        dashboard,
    );
    harness.rebuild();
    let before = harness.render();
    assert!(!before.contains("✔ Terminé"), "unexpected completed control in {before}");
    assert!(!before.contains("width: 50%;"), "unexpected half bar in {before}");

    harness.call(slot.handler(), (key("2025-09-13"), 0));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("✔ Terminé"), "missing completed control in {html}");
    assert!(html.contains("width: 50%;"), "missing half bar in {html}");
    assert!(html.contains("1 / 4 tâches"), "missing summary in {html}");
    assert_eq!(harness.repo.write_count(), 2);

    harness.call(slot.handler(), (key("2025-09-13"), 0));
    harness.drive_async().await;
    assert_eq!(harness.repo.write_count(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn today_marker_follows_the_app_clock() {
    let (repo, dashboard) = setup_services(&scenario_plan()).await;
    let snapshot = dashboard.snapshot().await;
    let stale_today = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let vm = render_dashboard(&snapshot.schedule, &snapshot.progress, stale_today, Locale::Fr);
    assert!(vm.cards.iter().all(|card| !card.is_today));

    let mut harness =
        setup_view_harness_with_dashboard(ViewKind::Board(vm), Locale::Fr, repo, dashboard);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("day-card today"), "missing today marker in {html}");
    assert_eq!(html.matches("day-badge").count(), 1, "expected one badge in {html}");
}
