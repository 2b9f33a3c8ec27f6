//! Page-level integration tests for the Animal entity.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_animal_redirects_to_detail(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let order_id = common::create_order(&pool, "Carnivora").await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        "/wildlife/animal/create",
        &[
            ("name", "Meerkat".to_string()),
            ("binomial", "Suricata suricatta".to_string()),
            ("description", "A small mongoose.".to_string()),
            ("animalclass", class_id.to_string()),
            ("order", order_id.to_string()),
            ("img", "img1.png".to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = common::location(&response);
    assert!(location.starts_with("/wildlife/animal/"));

    let body = common::body_string(common::get(common::build_test_app(pool), &location).await).await;
    assert!(body.contains("Meerkat (Suricata suricatta)"));
    assert!(body.contains("Mammalia"));
    assert!(body.contains("Carnivora"));
    assert!(body.contains("A small mongoose."));
    assert!(body.contains("src=\"img1.png\""));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_animal_reports_every_missing_field(pool: PgPool) {
    let response = common::post_form(
        common::build_test_app(pool.clone()),
        "/wildlife/animal/create",
        &[("img", "img1.png")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Name must not be empty."));
    assert!(body.contains("Binomial must not be empty."));
    assert!(body.contains("Description must not be empty."));
    assert!(body.contains("Class must not be empty"));

    // Nothing was stored.
    let body = common::body_string(
        common::get(common::build_test_app(pool), "/wildlife/animals").await,
    )
    .await;
    assert!(body.contains("There are no animals."));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_animal_rejects_malformed_class_reference(pool: PgPool) {
    let response = common::post_form(
        common::build_test_app(pool),
        "/wildlife/animal/create",
        &[
            ("name", "Meerkat"),
            ("binomial", "Suricata suricatta"),
            ("description", "A small mongoose."),
            ("animalclass", "not-an-id"),
            ("img", "img1.png"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Invalid class reference."));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_failed_create_keeps_chosen_orders_checked(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let order_id = common::create_order(&pool, "Carnivora").await;

    // Name is missing, so the form re-renders with the prior selections.
    let response = common::post_form(
        common::build_test_app(pool),
        "/wildlife/animal/create",
        &[
            ("binomial", "Suricata suricatta".to_string()),
            ("description", "A small mongoose.".to_string()),
            ("animalclass", class_id.to_string()),
            ("order", order_id.to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains(&format!("<option value=\"{class_id}\" selected>Mammalia</option>")));
    assert!(body.contains(&format!("value=\"{order_id}\" checked> Carnivora")));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_markup_in_submissions_is_escaped(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        "/wildlife/animal/create",
        &[
            ("name", "<script>alert(1)</script>".to_string()),
            ("binomial", "Suricata suricatta".to_string()),
            ("description", "A small mongoose.".to_string()),
            ("animalclass", class_id.to_string()),
            ("img", "img1.png".to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = common::location(&response);
    let body = common::body_string(common::get(common::build_test_app(pool), &location).await).await;
    assert!(!body.contains("<script>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_animal_replaces_order_memberships(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let carnivora = common::create_order(&pool, "Carnivora").await;
    let primates = common::create_order(&pool, "Primates").await;
    let id = common::create_animal(&pool, "Meerkat", class_id, &[carnivora]).await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        &format!("/wildlife/animal/{id}/update"),
        &[
            ("name", "Mona monkey".to_string()),
            ("binomial", "Cercopithecus mona".to_string()),
            ("description", "An Old World monkey.".to_string()),
            ("animalclass", class_id.to_string()),
            ("order", primates.to_string()),
            ("img", "img2.png".to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), format!("/wildlife/animal/{id}"));

    let body = common::body_string(
        common::get(common::build_test_app(pool), &format!("/wildlife/animal/{id}")).await,
    )
    .await;
    assert!(body.contains("Mona monkey (Cercopithecus mona)"));
    assert!(body.contains("Primates"));
    assert!(!body.contains("Carnivora"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_form_is_prefilled(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let order_id = common::create_order(&pool, "Carnivora").await;
    let id = common::create_animal(&pool, "Meerkat", class_id, &[order_id]).await;

    let response = common::get(
        common::build_test_app(pool),
        &format!("/wildlife/animal/{id}/update"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("value=\"Meerkat\""));
    assert!(body.contains(&format!("<option value=\"{class_id}\" selected>Mammalia</option>")));
    assert!(body.contains(&format!("value=\"{order_id}\" checked> Carnivora")));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_animal_returns_404(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;

    let response = common::post_form(
        common::build_test_app(pool),
        "/wildlife/animal/999999/update",
        &[
            ("name", "Meerkat".to_string()),
            ("binomial", "Suricata suricatta".to_string()),
            ("description", "A small mongoose.".to_string()),
            ("animalclass", class_id.to_string()),
            ("img", "img1.png".to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_of_unknown_animal_returns_404(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/wildlife/animal/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_animal_without_statuses(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let id = common::create_animal(&pool, "Meerkat", class_id, &[]).await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        &format!("/wildlife/animal/{id}/delete"),
        &Vec::<(String, String)>::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/wildlife/animals");

    let detail = common::get(common::build_test_app(pool), &format!("/wildlife/animal/{id}")).await;
    assert_eq!(detail.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_animal_with_statuses_is_blocked(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let id = common::create_animal(&pool, "Meerkat", class_id, &[]).await;
    common::create_preserve_status(&pool, id, "Dobby").await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        &format!("/wildlife/animal/{id}/delete"),
        &Vec::<(String, String)>::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Delete the following preserve statuses"));
    assert!(body.contains("Dobby"));

    let detail = common::get(common::build_test_app(pool), &format!("/wildlife/animal/{id}")).await;
    assert_eq!(detail.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_animal_list_shows_binomial_and_class(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    common::create_animal(&pool, "Meerkat", class_id, &[]).await;

    let body = common::body_string(
        common::get(common::build_test_app(pool), "/wildlife/animals").await,
    )
    .await;
    assert!(body.contains(">Meerkat</a> (Meerkat binomial) &mdash; Mammalia"));
}
