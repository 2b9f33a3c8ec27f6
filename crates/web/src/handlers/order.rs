//! Handlers for the Order entity pages.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use wildpreserve_core::error::CoreError;
use wildpreserve_core::types::DbId;
use wildpreserve_db::repositories::{AnimalRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{FormData, OrderForm};
use crate::state::AppState;
use crate::views;

/// GET /wildlife/orders
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let orders = OrderRepo::list(&state.pool).await?;
    Ok(Html(views::order::list_page(&orders)))
}

/// GET /wildlife/order/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let (order, animals) = tokio::try_join!(
        OrderRepo::find_by_id(&state.pool, id),
        AnimalRepo::list_by_order(&state.pool, id),
    )?;
    let order = order.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Order",
        id,
    }))?;
    Ok(Html(views::order::detail_page(&order, &animals)))
}

/// GET /wildlife/order/create
pub async fn create_get() -> Html<String> {
    Html(views::order::form_page(
        "Create Order",
        &OrderForm::default(),
        &[],
    ))
}

/// POST /wildlife/order/create
///
/// Deduplicates by name: if an order with the submitted name already
/// exists, redirect to it instead of inserting a duplicate.
pub async fn create_post(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = OrderForm::from_form(&FormData::new(pairs));
    match form.validate_create() {
        Ok(input) => {
            if let Some(existing) = OrderRepo::find_by_name(&state.pool, &input.name).await? {
                return Ok(Redirect::to(&existing.url()).into_response());
            }
            let order = OrderRepo::create(&state.pool, &input).await?;
            Ok(Redirect::to(&order.url()).into_response())
        }
        Err(errors) => {
            Ok(Html(views::order::form_page("Create Order", &form, &errors)).into_response())
        }
    }
}

/// GET /wildlife/order/{id}/delete
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (order, animals) = tokio::try_join!(
        OrderRepo::find_by_id(&state.pool, id),
        AnimalRepo::list_by_order(&state.pool, id),
    )?;
    let Some(order) = order else {
        return Ok(Redirect::to("/wildlife/orders").into_response());
    };
    Ok(Html(views::order::delete_page(&order, &animals)).into_response())
}

/// POST /wildlife/order/{id}/delete
///
/// Re-checks dependents before deleting; an order with animals renders
/// the confirmation page again instead of deleting.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (order, animals) = tokio::try_join!(
        OrderRepo::find_by_id(&state.pool, id),
        AnimalRepo::list_by_order(&state.pool, id),
    )?;
    let Some(order) = order else {
        return Ok(Redirect::to("/wildlife/orders").into_response());
    };
    if !animals.is_empty() {
        return Ok(Html(views::order::delete_page(&order, &animals)).into_response());
    }
    OrderRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/wildlife/orders").into_response())
}

/// GET /wildlife/order/{id}/update
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Html(views::order::form_page(
        "Update Order",
        &OrderForm::from_record(&order),
        &[],
    )))
}

/// POST /wildlife/order/{id}/update
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = OrderForm::from_form(&FormData::new(pairs));
    match form.validate_update() {
        Ok(input) => {
            let order = OrderRepo::update(&state.pool, id, &input).await?.ok_or(
                AppError::Core(CoreError::NotFound {
                    entity: "Order",
                    id,
                }),
            )?;
            Ok(Redirect::to(&order.url()).into_response())
        }
        Err(errors) => {
            Ok(Html(views::order::form_page("Update Order", &form, &errors)).into_response())
        }
    }
}
