//! Handlers for the Animal entity pages.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use wildpreserve_core::error::CoreError;
use wildpreserve_core::types::DbId;
use wildpreserve_db::repositories::{AnimalRepo, ClassRepo, OrderRepo, PreserveStatusRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{AnimalForm, FormData};
use crate::state::AppState;
use crate::views;

/// GET /wildlife/animals
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let animals = AnimalRepo::list(&state.pool).await?;
    Ok(Html(views::animal::list_page(&animals)))
}

/// GET /wildlife/animal/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let (detail, statuses) = tokio::try_join!(
        AnimalRepo::find_with_refs(&state.pool, id),
        PreserveStatusRepo::list_by_animal(&state.pool, id),
    )?;
    let detail = detail.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Animal",
        id,
    }))?;
    Ok(Html(views::animal::detail_page(&detail, &statuses)))
}

/// GET /wildlife/animal/create
pub async fn create_get(State(state): State<AppState>) -> AppResult<Html<String>> {
    let (classes, orders) = tokio::try_join!(
        ClassRepo::list(&state.pool),
        OrderRepo::list(&state.pool),
    )?;
    Ok(Html(views::animal::form_page(
        "Create Animal",
        &classes,
        &orders,
        &AnimalForm::default(),
        &[],
    )))
}

/// POST /wildlife/animal/create
///
/// A failed validation re-fetches the selection lists and re-renders the
/// form with the submitted values and per-field messages; previously
/// chosen orders stay checked.
pub async fn create_post(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = AnimalForm::from_form(&FormData::new(pairs));
    match form.validate() {
        Ok(input) => {
            let animal = AnimalRepo::create(&state.pool, &input).await?;
            Ok(Redirect::to(&animal.url()).into_response())
        }
        Err(errors) => {
            let (classes, orders) = tokio::try_join!(
                ClassRepo::list(&state.pool),
                OrderRepo::list(&state.pool),
            )?;
            Ok(Html(views::animal::form_page(
                "Create Animal",
                &classes,
                &orders,
                &form,
                &errors,
            ))
            .into_response())
        }
    }
}

/// GET /wildlife/animal/{id}/delete
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (animal, statuses) = tokio::try_join!(
        AnimalRepo::find_by_id(&state.pool, id),
        PreserveStatusRepo::list_by_animal(&state.pool, id),
    )?;
    let Some(animal) = animal else {
        return Ok(Redirect::to("/wildlife/animals").into_response());
    };
    Ok(Html(views::animal::delete_page(&animal, &statuses)).into_response())
}

/// POST /wildlife/animal/{id}/delete
///
/// Re-checks dependents before deleting; an animal with preserve statuses
/// renders the confirmation page again instead of deleting.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (animal, statuses) = tokio::try_join!(
        AnimalRepo::find_by_id(&state.pool, id),
        PreserveStatusRepo::list_by_animal(&state.pool, id),
    )?;
    let Some(animal) = animal else {
        return Ok(Redirect::to("/wildlife/animals").into_response());
    };
    if !statuses.is_empty() {
        return Ok(Html(views::animal::delete_page(&animal, &statuses)).into_response());
    }
    AnimalRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/wildlife/animals").into_response())
}

/// GET /wildlife/animal/{id}/update
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let (detail, classes, orders) = tokio::try_join!(
        AnimalRepo::find_with_refs(&state.pool, id),
        ClassRepo::list(&state.pool),
        OrderRepo::list(&state.pool),
    )?;
    let detail = detail.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Animal",
        id,
    }))?;
    Ok(Html(views::animal::form_page(
        "Update Animal",
        &classes,
        &orders,
        &AnimalForm::from_detail(&detail),
        &[],
    )))
}

/// POST /wildlife/animal/{id}/update
///
/// The path id pins the record identity; a successful submission
/// overwrites the existing row and replaces its order references.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = AnimalForm::from_form(&FormData::new(pairs));
    match form.validate() {
        Ok(input) => {
            let animal = AnimalRepo::update(&state.pool, id, &input).await?.ok_or(
                AppError::Core(CoreError::NotFound {
                    entity: "Animal",
                    id,
                }),
            )?;
            Ok(Redirect::to(&animal.url()).into_response())
        }
        Err(errors) => {
            let (classes, orders) = tokio::try_join!(
                ClassRepo::list(&state.pool),
                OrderRepo::list(&state.pool),
            )?;
            Ok(Html(views::animal::form_page(
                "Update Animal",
                &classes,
                &orders,
                &form,
                &errors,
            ))
            .into_response())
        }
    }
}
