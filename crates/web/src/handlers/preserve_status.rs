//! Handlers for the PreserveStatus entity pages.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use wildpreserve_core::error::CoreError;
use wildpreserve_core::types::DbId;
use wildpreserve_db::repositories::{AnimalRepo, PreserveStatusRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{FormData, PreserveStatusForm};
use crate::state::AppState;
use crate::views;

/// GET /wildlife/preservestatuses
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let statuses = PreserveStatusRepo::list_with_animal(&state.pool).await?;
    Ok(Html(views::preserve_status::list_page(&statuses)))
}

/// GET /wildlife/preservestatus/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let status = PreserveStatusRepo::find_with_animal(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PreserveStatus",
            id,
        }))?;
    Ok(Html(views::preserve_status::detail_page(&status)))
}

/// GET /wildlife/preservestatus/create
pub async fn create_get(State(state): State<AppState>) -> AppResult<Html<String>> {
    let animals = AnimalRepo::list_names(&state.pool).await?;
    Ok(Html(views::preserve_status::form_page(
        "Create Preserve Status",
        &animals,
        &PreserveStatusForm::default(),
        &[],
    )))
}

/// POST /wildlife/preservestatus/create
pub async fn create_post(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = PreserveStatusForm::from_form(&FormData::new(pairs));
    match form.validate() {
        Ok(input) => {
            let status = PreserveStatusRepo::create(&state.pool, &input).await?;
            Ok(Redirect::to(&status.url()).into_response())
        }
        Err(errors) => {
            let animals = AnimalRepo::list_names(&state.pool).await?;
            Ok(Html(views::preserve_status::form_page(
                "Create Preserve Status",
                &animals,
                &form,
                &errors,
            ))
            .into_response())
        }
    }
}

/// GET /wildlife/preservestatus/{id}/delete
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let Some(status) = PreserveStatusRepo::find_by_id(&state.pool, id).await? else {
        return Ok(Redirect::to("/wildlife/preservestatuses").into_response());
    };
    Ok(Html(views::preserve_status::delete_page(&status)).into_response())
}

/// POST /wildlife/preservestatus/{id}/delete
///
/// Unconditional: preserve statuses have no dependent records, so there
/// is no guard here.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    PreserveStatusRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/wildlife/preservestatuses").into_response())
}

/// GET /wildlife/preservestatus/{id}/update
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let (status, animals) = tokio::try_join!(
        PreserveStatusRepo::find_by_id(&state.pool, id),
        AnimalRepo::list_names(&state.pool),
    )?;
    let status = status.ok_or(AppError::Core(CoreError::NotFound {
        entity: "PreserveStatus",
        id,
    }))?;
    Ok(Html(views::preserve_status::form_page(
        "Update Preserve Status",
        &animals,
        &PreserveStatusForm::from_record(&status),
        &[],
    )))
}

/// POST /wildlife/preservestatus/{id}/update
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = PreserveStatusForm::from_form(&FormData::new(pairs));
    match form.validate() {
        Ok(input) => {
            let status = PreserveStatusRepo::update(&state.pool, id, &input).await?.ok_or(
                AppError::Core(CoreError::NotFound {
                    entity: "PreserveStatus",
                    id,
                }),
            )?;
            Ok(Redirect::to(&status.url()).into_response())
        }
        Err(errors) => {
            let animals = AnimalRepo::list_names(&state.pool).await?;
            Ok(Html(views::preserve_status::form_page(
                "Update Preserve Status",
                &animals,
                &form,
                &errors,
            ))
            .into_response())
        }
    }
}
