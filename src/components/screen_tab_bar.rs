//! Screen Tab Bar Component
//!
//! Switches between the reorderable admin screens.

use leptos::prelude::*;

use crate::models::EntityKind;
use crate::store::{store_is_saving, use_admin_store, AdminStateStoreFields};

#[component]
pub fn ScreenTabBar() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <nav class="screen-tab-bar">
            {EntityKind::ALL
                .into_iter()
                .map(|kind| {
                    let is_active = move || store.active_screen().get() == kind;
                    let is_saving = move || store_is_saving(&store, kind);
                    let tab_class = move || {
                        let mut c = String::from("screen-tab");
                        if is_active() { c.push_str(" active"); }
                        if is_saving() { c.push_str(" saving"); }
                        c
                    };
                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| store.active_screen().set(kind)
                        >
                            {kind.label()}
                            {move || is_saving().then(|| view! { <span class="saving-dot" title="Saving order"></span> })}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
