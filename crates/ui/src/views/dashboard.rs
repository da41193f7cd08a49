use dioxus::prelude::*;
use study_core::model::DateKey;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, DayCardVm, TaskRowVm, labels, render_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let locale = ctx.locale();

    // A snapshot cannot fail: the service already turned storage errors
    // into an empty map.
    let resource = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let snapshot = ctx.dashboard().snapshot().await;
            render_dashboard(&snapshot.schedule, &snapshot.progress, ctx.today(), locale)
        }
    });

    let state = view_state_from_resource(&resource);
    let labels = labels(locale);

    rsx! {
        div { id: "dashboard", class: "page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "{labels.loading}" }
                },
                ViewState::Ready(vm) => rsx! {
                    DashboardBoard { initial: vm }
                },
            }
        }
    }
}

/// Live board state and the handler that completes one task of one day.
#[derive(Clone, Copy, PartialEq)]
pub struct BoardHandle {
    pub board: Signal<DashboardVm>,
    pub error: Signal<Option<ViewError>>,
    pub complete: Callback<(DateKey, usize)>,
}

/// Completion runs through the service, then patches the affected card.
pub fn use_dashboard_board(initial: &DashboardVm) -> BoardHandle {
    let ctx = use_context::<AppContext>();
    let board = use_signal(|| initial.clone());
    let error = use_signal(|| None::<ViewError>);

    let dashboard = ctx.dashboard();
    let complete = use_callback(move |(date, index): (DateKey, usize)| {
        let mut board = board;
        let mut error = error;
        let dashboard = dashboard.clone();
        spawn(async move {
            match dashboard.complete_task(date, index).await {
                Ok(completion) => {
                    board.write().apply_completion(&completion);
                    error.set(None);
                }
                Err(err) => {
                    tracing::warn!(%date, index, error = %err, "completion rejected");
                    error.set(Some(ViewError::Unknown));
                }
            }
        });
    });

    BoardHandle {
        board,
        error,
        complete,
    }
}

/// Applies a `DashboardVm` and wires the completion controls.
#[component]
pub fn DashboardBoard(initial: DashboardVm) -> Element {
    let handle = use_dashboard_board(&initial);
    rsx! {
        BoardContent { handle }
    }
}

#[component]
pub fn BoardContent(handle: BoardHandle) -> Element {
    let ctx = use_context::<AppContext>();
    let locale = ctx.locale();
    let today = ctx.today();

    let vm = handle.board.read().clone();
    let error = *handle.error.read();
    let today_label = vm.today_label;
    let has_cards = !vm.cards.is_empty();
    let cards: Vec<DayCardVm> = vm
        .cards
        .into_iter()
        .map(|mut card| {
            card.is_today = card.date.date() == today;
            card
        })
        .collect();

    rsx! {
        header { class: "dashboard-header",
            h1 { "{vm.title}" }
            p { class: "dashboard-summary", "{vm.summary_label}" }
        }
        if let Some(err) = error {
            p { class: "error", "{err.message(locale)}" }
        }
        if !has_cards {
            p { class: "empty", "{vm.empty_label}" }
        }
        for card in cards {
            DayCard {
                key: "{card.date}",
                card: card.clone(),
                today_label,
                on_complete: handle.complete,
            }
        }
    }
}

#[component]
fn DayCard(
    card: DayCardVm,
    today_label: &'static str,
    on_complete: EventHandler<(DateKey, usize)>,
) -> Element {
    let date = card.date;

    rsx! {
        div { class: card.class(),
            div { class: "day-header",
                div { class: "day-title", "{card.heading}" }
                if card.is_today {
                    span { class: "day-badge", "{today_label}" }
                }
                div { class: "progress", title: "{card.percent_label}",
                    div { class: "progress-bar", style: card.bar_style() }
                }
            }
            div { class: "tasks",
                for row in card.tasks.iter() {
                    TaskRow {
                        key: "{row.index}",
                        row: row.clone(),
                        on_activate: move |index: usize| on_complete.call((date, index)),
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(row: TaskRowVm, on_activate: EventHandler<usize>) -> Element {
    let index = row.index;
    let completed = row.is_completed();

    rsx! {
        div { class: "task",
            span { class: "task-name", "{row.name}" }
            span { class: "task-hours", "{row.hours_label}" }
            button {
                class: row.control_class(),
                r#type: "button",
                disabled: completed,
                onclick: move |_| {
                    if !completed {
                        on_activate.call(index);
                    }
                },
                "{row.control_label}"
            }
        }
    }
}
