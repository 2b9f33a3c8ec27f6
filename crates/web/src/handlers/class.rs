//! Handlers for the Class entity pages.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use wildpreserve_core::error::CoreError;
use wildpreserve_core::types::DbId;
use wildpreserve_db::repositories::{AnimalRepo, ClassRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{ClassForm, FormData};
use crate::state::AppState;
use crate::views;

/// GET /wildlife/classes
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let classes = ClassRepo::list(&state.pool).await?;
    Ok(Html(views::class::list_page(&classes)))
}

/// GET /wildlife/class/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let (class, animals) = tokio::try_join!(
        ClassRepo::find_by_id(&state.pool, id),
        AnimalRepo::list_by_class(&state.pool, id),
    )?;
    let class = class.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Class",
        id,
    }))?;
    Ok(Html(views::class::detail_page(&class, &animals)))
}

/// GET /wildlife/class/create
pub async fn create_get() -> Html<String> {
    Html(views::class::form_page(
        "Create Class",
        &ClassForm::default(),
        &[],
    ))
}

/// POST /wildlife/class/create
pub async fn create_post(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = ClassForm::from_form(&FormData::new(pairs));
    match form.validate_create() {
        Ok(input) => {
            let class = ClassRepo::create(&state.pool, &input).await?;
            Ok(Redirect::to(&class.url()).into_response())
        }
        Err(errors) => {
            Ok(Html(views::class::form_page("Create Class", &form, &errors)).into_response())
        }
    }
}

/// GET /wildlife/class/{id}/delete
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (class, animals) = tokio::try_join!(
        ClassRepo::find_by_id(&state.pool, id),
        AnimalRepo::list_by_class(&state.pool, id),
    )?;
    let Some(class) = class else {
        return Ok(Redirect::to("/wildlife/classes").into_response());
    };
    Ok(Html(views::class::delete_page(&class, &animals)).into_response())
}

/// POST /wildlife/class/{id}/delete
///
/// Re-checks dependents before deleting; a class with animals renders the
/// confirmation page again instead of deleting.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (class, animals) = tokio::try_join!(
        ClassRepo::find_by_id(&state.pool, id),
        AnimalRepo::list_by_class(&state.pool, id),
    )?;
    let Some(class) = class else {
        return Ok(Redirect::to("/wildlife/classes").into_response());
    };
    if !animals.is_empty() {
        return Ok(Html(views::class::delete_page(&class, &animals)).into_response());
    }
    ClassRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/wildlife/classes").into_response())
}

/// GET /wildlife/class/{id}/update
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let class = ClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        }))?;
    Ok(Html(views::class::form_page(
        "Update Class",
        &ClassForm::from_record(&class),
        &[],
    )))
}

/// POST /wildlife/class/{id}/update
///
/// The path id pins the record identity; a successful submission
/// overwrites the existing row.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = ClassForm::from_form(&FormData::new(pairs));
    match form.validate_update() {
        Ok(input) => {
            let class = ClassRepo::update(&state.pool, id, &input).await?.ok_or(
                AppError::Core(CoreError::NotFound {
                    entity: "Class",
                    id,
                }),
            )?;
            Ok(Redirect::to(&class.url()).into_response())
        }
        Err(errors) => {
            Ok(Html(views::class::form_page("Update Class", &form, &errors)).into_response())
        }
    }
}
