//! Page-level integration tests for the Order entity.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_redirects_to_detail(pool: PgPool) {
    let response = common::post_form(
        common::build_test_app(pool.clone()),
        "/wildlife/order/create",
        &[("name", "Primates")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = common::location(&response);
    assert!(location.starts_with("/wildlife/order/"));

    let body = common::body_string(common::get(common::build_test_app(pool), &location).await).await;
    assert!(body.contains("Order: Primates"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_deduplicates_by_name(pool: PgPool) {
    let first = common::post_form(
        common::build_test_app(pool.clone()),
        "/wildlife/order/create",
        &[("name", "Primates")],
    )
    .await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    let first_location = common::location(&first);

    // The same name again redirects to the existing record.
    let second = common::post_form(
        common::build_test_app(pool.clone()),
        "/wildlife/order/create",
        &[("name", "Primates")],
    )
    .await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&second), first_location);

    let body = common::body_string(
        common::get(common::build_test_app(pool), "/wildlife/orders").await,
    )
    .await;
    assert_eq!(body.matches(">Primates</a>").count(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_rejects_empty_name(pool: PgPool) {
    let response = common::post_form(
        common::build_test_app(pool.clone()),
        "/wildlife/order/create",
        &[("name", "")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Order name required"));

    let body = common::body_string(
        common::get(common::build_test_app(pool), "/wildlife/orders").await,
    )
    .await;
    assert!(body.contains("There are no orders."));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_order_preserves_identity(pool: PgPool) {
    let id = common::create_order(&pool, "Primates").await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        &format!("/wildlife/order/{id}/update"),
        &[("name", "Carnivora")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), format!("/wildlife/order/{id}"));

    let body = common::body_string(
        common::get(common::build_test_app(pool), &format!("/wildlife/order/{id}")).await,
    )
    .await;
    assert!(body.contains("Order: Carnivora"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_order_rejects_empty_name(pool: PgPool) {
    let id = common::create_order(&pool, "Primates").await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        &format!("/wildlife/order/{id}/update"),
        &[("name", "")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Order name must not be empty."));

    let body = common::body_string(
        common::get(common::build_test_app(pool), &format!("/wildlife/order/{id}")).await,
    )
    .await;
    assert!(body.contains("Order: Primates"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_of_unknown_order_returns_404(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/wildlife/order/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_order_without_animals(pool: PgPool) {
    let id = common::create_order(&pool, "Primates").await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        &format!("/wildlife/order/{id}/delete"),
        &Vec::<(String, String)>::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/wildlife/orders");

    let detail = common::get(common::build_test_app(pool), &format!("/wildlife/order/{id}")).await;
    assert_eq!(detail.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_order_with_animals_is_blocked(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let order_id = common::create_order(&pool, "Carnivora").await;
    common::create_animal(&pool, "Meerkat", class_id, &[order_id]).await;

    let response = common::post_form(
        common::build_test_app(pool.clone()),
        &format!("/wildlife/order/{order_id}/delete"),
        &Vec::<(String, String)>::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Delete the following animals"));

    let detail = common::get(
        common::build_test_app(pool),
        &format!("/wildlife/order/{order_id}"),
    )
    .await;
    assert_eq!(detail.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_order_detail_lists_member_animals(pool: PgPool) {
    let class_id = common::create_class(&pool, "Mammalia").await;
    let order_id = common::create_order(&pool, "Primates").await;
    common::create_animal(&pool, "Mona monkey", class_id, &[order_id]).await;
    common::create_animal(&pool, "Meerkat", class_id, &[]).await;

    let body = common::body_string(
        common::get(
            common::build_test_app(pool),
            &format!("/wildlife/order/{order_id}"),
        )
        .await,
    )
    .await;
    assert!(body.contains("Mona monkey"));
    assert!(!body.contains("Meerkat"));
}
