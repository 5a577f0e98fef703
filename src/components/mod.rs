//! UI Components
//!
//! Leptos components of the admin shell.

mod screen_tab_bar;
mod notice_banner;
mod reorderable_table;
mod screens;

pub use screen_tab_bar::ScreenTabBar;
pub use notice_banner::NoticeBanner;
pub use reorderable_table::{Column, ReorderableTable};
pub use screens::ActiveScreen;
