//! Admin Screens
//!
//! Column layouts per entity kind. All reorder behaviour lives in
//! `ReorderableTable`; a screen is only its columns.

use leptos::prelude::*;

use crate::components::{Column, ReorderableTable};
use crate::models::{EntityKind, ProcessStep, Project, ProjectCategory, Review};
use crate::store::{use_admin_store, AdminStateStoreFields};

fn active_label(is_active: bool) -> String {
    if is_active { "Active" } else { "Hidden" }.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("—").to_string()
}

const PROJECT_COLUMNS: &[Column<Project>] = &[
    Column { header: "Title", class: "col-title", cell: |p| p.title.clone() },
    Column { header: "Category", class: "col-category", cell: |p| or_dash(p.category.as_deref()) },
    Column { header: "Slug", class: "col-slug", cell: |p| or_dash(p.slug.as_deref()) },
    Column { header: "Status", class: "col-status", cell: |p| active_label(p.is_active) },
];

const CATEGORY_COLUMNS: &[Column<ProjectCategory>] = &[
    Column { header: "Name", class: "col-title", cell: |c| c.name.clone() },
    Column {
        header: "Projects",
        class: "col-count",
        cell: |c| c.project_count.map(|n| n.to_string()).unwrap_or_else(|| "—".to_string()),
    },
    Column { header: "Status", class: "col-status", cell: |c| active_label(c.is_active) },
];

const STEP_COLUMNS: &[Column<ProcessStep>] = &[
    Column { header: "Step", class: "col-title", cell: |s| s.title.clone() },
    Column { header: "Description", class: "col-description", cell: |s| or_dash(s.description.as_deref()) },
    Column { header: "Status", class: "col-status", cell: |s| active_label(s.is_active) },
];

const REVIEW_COLUMNS: &[Column<Review>] = &[
    Column { header: "Author", class: "col-title", cell: |r| r.author.clone() },
    Column { header: "Company", class: "col-company", cell: |r| or_dash(r.company.as_deref()) },
    Column {
        header: "Rating",
        class: "col-rating",
        cell: |r| r.rating.map(|n| "★".repeat(n.min(5) as usize)).unwrap_or_else(|| "—".to_string()),
    },
    Column { header: "Status", class: "col-status", cell: |r| active_label(r.is_active) },
];

/// The table for the selected tab
#[component]
pub fn ActiveScreen() -> impl IntoView {
    let store = use_admin_store();

    move || match store.active_screen().get() {
        EntityKind::Projects => view! { <ReorderableTable columns=PROJECT_COLUMNS /> }.into_any(),
        EntityKind::ProjectCategories => view! { <ReorderableTable columns=CATEGORY_COLUMNS /> }.into_any(),
        EntityKind::ProcessSteps => view! { <ReorderableTable columns=STEP_COLUMNS /> }.into_any(),
        EntityKind::Reviews => view! { <ReorderableTable columns=REVIEW_COLUMNS /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    #[test]
    fn test_review_cells() {
        let review = Review {
            id: EntityId::Int(1),
            author: "Ana".to_string(),
            company: None,
            rating: Some(4),
            is_active: false,
            order: 0,
        };
        let cells: Vec<String> = REVIEW_COLUMNS.iter().map(|c| (c.cell)(&review)).collect();
        assert_eq!(cells, vec!["Ana", "—", "★★★★", "Hidden"]);
    }

    #[test]
    fn test_every_screen_has_a_title_column() {
        assert_eq!(PROJECT_COLUMNS[0].class, "col-title");
        assert_eq!(CATEGORY_COLUMNS[0].class, "col-title");
        assert_eq!(STEP_COLUMNS[0].class, "col-title");
        assert_eq!(REVIEW_COLUMNS[0].class, "col-title");
    }
}
