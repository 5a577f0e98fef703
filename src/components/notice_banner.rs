//! Notice Banner Component
//!
//! Warnings render as a dismissible toast; errors as a sticky banner with a
//! reload action, since the list may no longer match the server.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use reorder_core::{Notice, NoticeLevel};

#[component]
pub fn NoticeBanner(
    notice: Signal<Option<Notice>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let (class, is_error) = match notice.level {
                NoticeLevel::Warning => ("notice notice-warning", false),
                NoticeLevel::Error => ("notice notice-error", true),
            };
            view! {
                <div class=class role="alert">
                    <span class="notice-message">{notice.message}</span>
                    {is_error.then(|| view! {
                        <button
                            class="notice-reload"
                            on:click=move |_| {
                                let _ = window().location().reload();
                            }
                        >
                            "Reload"
                        </button>
                    })}
                    <button class="notice-close" on:click=move |_| on_dismiss.run(())>"×"</button>
                </div>
            }
        })
    }
}
