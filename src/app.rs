//! Codelance Admin App
//!
//! Tab bar plus the reorderable table of the active screen.

use leptos::prelude::*;
use leptos_dragdrop::provide_dnd_context;
use reactive_stores::Store;

use crate::components::{ActiveScreen, ScreenTabBar};
use crate::config::AdminConfig;
use crate::store::AdminState;

#[component]
pub fn App() -> impl IntoView {
    let config = AdminConfig::load();
    log::info!(
        "admin starting, api={} confirm={:?}",
        config.api_base_url,
        config.confirm_policy
    );

    // Provide config and store to all children
    provide_context(config);
    provide_context(Store::new(AdminState::new()));
    // One pair of document listeners for every table
    provide_dnd_context();

    view! {
        <div class="admin-layout">
            <header class="admin-header">
                <h1>"Codelance Admin"</h1>
                <ScreenTabBar />
            </header>

            <main class="admin-content">
                <ActiveScreen />
            </main>
        </div>
    }
}
