//! The home/dashboard page.

use axum::extract::State;
use axum::response::Html;
use wildpreserve_db::repositories::{AnimalRepo, ClassRepo, OrderRepo, PreserveStatusRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// Aggregate record counts shown on the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct HomeCounts {
    pub animal_count: i64,
    pub preserve_status_count: i64,
    pub preserve_status_current_count: i64,
    pub class_count: i64,
    pub order_count: i64,
}

/// GET /wildlife
///
/// The five counts are independent, so they are fetched concurrently and
/// joined; the first failing query aborts the page.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let (
        animal_count,
        preserve_status_count,
        preserve_status_current_count,
        class_count,
        order_count,
    ) = tokio::try_join!(
        AnimalRepo::count(&state.pool),
        PreserveStatusRepo::count(&state.pool),
        PreserveStatusRepo::count_in_preserve(&state.pool),
        ClassRepo::count(&state.pool),
        OrderRepo::count(&state.pool),
    )?;

    let counts = HomeCounts {
        animal_count,
        preserve_status_count,
        preserve_status_current_count,
        class_count,
        order_count,
    };
    Ok(Html(views::home::index_page(&counts)))
}
