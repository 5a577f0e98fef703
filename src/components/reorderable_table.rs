//! Reorderable Table Component
//!
//! Generic admin table with drag-and-drop ordering. One instance per screen,
//! parameterized by entity type (which selects the REST endpoint) and columns.
//! Uses leptos-dragdrop for gestures and reorder-core for the list state.

use gloo_timers::future::TimeoutFuture;
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{ListQuery, NoticeLevel, OrderCollaborator, OrderedItem, ReorderController, ReorderError};

use crate::api::{ApiClient, RestCollaborator};
use crate::components::NoticeBanner;
use crate::config::AdminConfig;
use crate::models::AdminEntity;
use crate::store::{
    store_clear_saving, store_is_saving, store_is_saving_untracked, store_mark_saving, use_admin_store,
};

use leptos_dragdrop::*;

/// How long a warning toast stays up
const WARNING_TOAST_MS: u32 = 5_000;

/// One table column: header text and how to render a cell
pub struct Column<T> {
    pub header: &'static str,
    pub class: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

#[component]
pub fn ReorderableTable<T: AdminEntity>(columns: &'static [Column<T>]) -> impl IntoView {
    let config = expect_context::<AdminConfig>();
    let store = use_admin_store();

    let collaborator = StoredValue::new_local(RestCollaborator::<T>::new(ApiClient::new(&config.api_base_url)));
    let controller = RwSignal::new(ReorderController::<T>::new(config.controller_options()));
    let (active_only, set_active_only) = signal(false);

    // Fetch rows for the current query. Skipped while a save started by an
    // earlier mount of this screen is still in flight; rows fetched before a
    // reorder or query change are dropped by the controller.
    let reload = move || {
        if store_is_saving_untracked(&store, T::KIND) {
            log::debug!("{} reload deferred until the save completes", T::KIND.label());
            return;
        }
        let Some((query, token)) = controller.try_with_untracked(|c| (c.query().clone(), c.refresh_token())) else {
            return;
        };
        let api = collaborator.get_value();
        spawn_local(async move {
            let result = api.list(&query).await;
            controller.try_update(|c| match result {
                Ok(rows) => {
                    if let Err(e) = c.apply_refresh(token, rows) {
                        log::warn!("{} refresh skipped: {}", T::KIND.label(), e);
                    }
                }
                Err(e) => c.report_load_error(&e),
            });
        });
    };

    // Load on mount, and again whenever a save of this screen completes
    let saving = Memo::new(move |_| store_is_saving(&store, T::KIND));
    Effect::new(move |_| {
        if !saving.get() {
            reload();
        }
    });

    let on_gesture = Callback::new(move |gesture: DragGesture| match gesture {
        DragGesture::Begin(index) => {
            if store_is_saving_untracked(&store, T::KIND) {
                log::info!("drag refused: {} order is still being saved", T::KIND.label());
                return;
            }
            controller.update(|c| {
                if let Err(e) = c.begin_drag(index) {
                    log::info!("drag refused: {}", e);
                }
            })
        }
        DragGesture::Over(index) => controller.update(|c| c.drag_over(index)),
        DragGesture::Leave => controller.update(|c| c.drag_leave()),
        DragGesture::Drop(index) => {
            let Some(pending) = controller.try_update(|c| c.drop(index)).flatten() else {
                return;
            };
            let api = collaborator.get_value();
            store_mark_saving(&store, T::KIND);
            spawn_local(async move {
                let outcome = pending.resolve(&api).await;
                // The screen may have been closed while saving
                controller.try_update(|c| c.settle(outcome));
                store_clear_saving(&store, T::KIND);
            });
        }
        DragGesture::End => controller.update(|c| c.drag_end()),
    });

    let dnd = use_dnd(on_gesture);

    let notice = Memo::new(move |_| controller.with(|c| c.notice().cloned()));

    // Warnings fade out, errors stay until dismissed or reloaded
    Effect::new(move |_| {
        let Some(shown) = notice.get().filter(|n| n.level == NoticeLevel::Warning) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(WARNING_TOAST_MS).await;
            controller.try_update(|c| {
                if c.notice() == Some(&shown) {
                    c.dismiss_notice();
                }
            });
        });
    });

    let on_filter_change = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        let query = if checked {
            ListQuery::all().with_filter("is_active", "true")
        } else {
            ListQuery::all()
        };
        let applied = controller
            .try_update(|c| c.set_query(query))
            .map(|r| r.is_ok())
            .unwrap_or(false);
        if applied {
            set_active_only.set(checked);
            reload();
        }
    };

    // Why dragging is unavailable, if it is (busy is shown by the table class)
    let reorder_hint = move || {
        controller.with(|c| match c.can_reorder() {
            Err(ReorderError::Busy) | Ok(()) => None,
            Err(e) => Some(e.to_string()),
        })
    };
    let is_busy = move || saving.get() || controller.with(|c| c.is_busy());
    let rows = move || controller.with(|c| c.items().iter().cloned().enumerate().collect::<Vec<_>>());
    let is_empty = move || controller.with(|c| c.items().is_empty() && c.state().is_settled());

    let header_cells = columns
        .iter()
        .map(|column| view! { <th class=column.class>{column.header}</th> })
        .collect_view();

    view! {
        <section class=move || if is_busy() { "reorder-table saving" } else { "reorder-table" }>
            <header class="reorder-table-header">
                <h2>{T::KIND.label()}</h2>
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || active_only.get()
                        on:change=on_filter_change
                    />
                    "Active only"
                </label>
                <button class="refresh-btn" disabled=is_busy on:click=move |_| reload()>
                    "Refresh"
                </button>
            </header>

            <NoticeBanner
                notice=Signal::from(notice)
                on_dismiss=Callback::new(move |_: ()| controller.update(|c| c.dismiss_notice()))
            />

            {move || reorder_hint().map(|hint| view! { <p class="reorder-hint">{hint}</p> })}

            <table class="admin-table">
                <thead>
                    <tr>
                        <th class="drag-handle"></th>
                        <th class="row-rank">"#"</th>
                        {header_cells}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|(index, item)| {
                            // Index is part of the key: row handlers capture it
                            (*index, item.id(), item.title().to_string(), item.is_active())
                        }
                        children=move |(index, item)| {
                            let on_mousedown = make_on_mousedown(dnd, index);
                            let on_mouseenter = make_on_row_mouseenter(dnd, index);
                            let on_mouseleave = make_on_mouseleave(dnd);

                            // Visual state comes from the controller's session
                            let row_class = move || controller.with(|c| {
                                let session = c.session();
                                let mut class = String::from("reorder-row");
                                if session.dragged_index == Some(index) { class.push_str(" dragging"); }
                                if session.drag_over_index == Some(index) {
                                    match session.dragged_index {
                                        Some(from) if from < index => class.push_str(" drop-after"),
                                        _ => class.push_str(" drop-before"),
                                    }
                                }
                                class
                            });
                            let inactive = !item.is_active();
                            let cells = columns
                                .iter()
                                .map(|column| {
                                    let text = (column.cell)(&item);
                                    view! { <td class=column.class>{text}</td> }
                                })
                                .collect_view();

                            view! {
                                <tr
                                    class=row_class
                                    class:inactive=inactive
                                    on:mousedown=on_mousedown
                                    on:mouseenter=on_mouseenter
                                    on:mouseleave=on_mouseleave
                                >
                                    <td class="drag-handle" title="Drag to reorder">"⠿"</td>
                                    <td class="row-rank">{index + 1}</td>
                                    {cells}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || is_empty().then(|| view! { <p class="empty-table">"Nothing here yet"</p> })}
        </section>
    }
}
