//! Request-construction fidelity: each endpoint method must hit exactly
//! the URL, method, and body encoding its descriptor declares.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use serde_json::json;
use thriftwear_core::{
    CreateCategory, CreateOrder, CreateOrderAddress, PutUserAddress, SignInForm, UpdateCategory,
};
use thriftwear_client::{ApiClient, ApiConfig};
use thriftwear_integration_tests::client_for;
use uuid::Uuid;

#[tokio::test]
async fn sign_in_posts_form_urlencoded_credentials() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/sign-in")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_includes("username=buyer%40example.com")
            .body_includes("password=hunter2");
        then.status(200).json_body(json!({
            "id": "6f2d3f29-6a21-4a8c-9d31-95a0f1a1c6a5",
            "name": "Buyer",
            "email": "buyer@example.com",
            "phone_number": null,
            "access_token": "tok_abc",
            "token_type": "bearer",
        }));
    });

    let client = client_for(&server);
    let user = client
        .sign_in(SignInForm {
            username: "buyer@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.access_token, "tok_abc");
    mock.assert();
}

#[tokio::test]
async fn get_detail_user_substitutes_the_path_parameter() {
    let server = MockServer::start_async().await;
    let id: Uuid = "0be9c70c-bf2e-4a4c-a963-ba1fa95bb169".parse().unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/user/0be9c70c-bf2e-4a4c-a963-ba1fa95bb169");
        then.status(200).json_body(json!({
            "id": id,
            "name": "Buyer",
            "email": "buyer@example.com",
            "phone_number": null,
            "address_name": null,
            "address": null,
            "city": null,
            "balance": 0,
        }));
    });

    let client = client_for(&server);
    let user = client.get_detail_user(id).await.unwrap();

    assert_eq!(user.id, id);
    mock.assert();
}

#[tokio::test]
async fn forgot_password_sends_email_as_query_parameter() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/forgot-password")
            .query_param("email", "buyer@example.com");
        then.status(200).json_body(json!({"message": "Email sent"}));
    });

    let client = client_for(&server);
    let response = client.forgot_password("buyer@example.com").await.unwrap();

    assert_eq!(response.message, "Email sent");
    mock.assert();
}

#[tokio::test]
async fn order_history_pagination_appears_exactly_once() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/user/order")
            .query_param("page", "2")
            .query_param("page_size", "10");
        then.status(200).json_body(json!({
            "data": [],
            "pagination": {"page": 2, "page_size": 10, "total_item": 0, "total_page": 0},
        }));
    });

    let client = client_for(&server);
    let orders = client.get_orders_user(Some(2), Some(10)).await.unwrap();

    assert!(orders.data.is_empty());
    assert_eq!(orders.pagination.page, 2);
    mock.assert();
}

#[tokio::test]
async fn category_crud_targets_the_declared_urls() {
    let server = MockServer::start_async().await;
    let id: Uuid = "9b85a3a3-2f54-4f9f-8f06-6f6d58fbd5a3".parse().unwrap();

    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/categories")
            .json_body(json!({"title": "Outerwear", "type": "Clothing"}));
        then.status(201).json_body(json!({"message": "Category added"}));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/v1/categories")
            .query_param("id", id.to_string())
            .json_body(json!({"title": "Outerwear", "type": "Apparel"}));
        then.status(200).json_body(json!({"message": "Category updated"}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/v1/categories")
            .query_param("id", id.to_string());
        then.status(200).json_body(json!({"message": "Category deleted"}));
    });

    let client = client_for(&server);
    client
        .create_category(&CreateCategory {
            title: "Outerwear".to_string(),
            kind: "Clothing".to_string(),
        })
        .await
        .unwrap();
    client
        .update_category(
            id,
            &UpdateCategory {
                title: "Outerwear".to_string(),
                kind: "Apparel".to_string(),
            },
        )
        .await
        .unwrap();
    client.delete_category(id).await.unwrap();

    create.assert();
    update.assert();
    delete.assert();
}

#[tokio::test]
async fn create_order_sends_the_checkout_payload_as_json() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/order").json_body(json!({
            "shipping_method": "Next Day",
            "shipping_address": {
                "address_name": "Home",
                "phone_number": "+6281234567",
                "address": "Jl. Kenangan 1",
                "city": "Bandung",
            },
            "send_email": true,
        }));
        then.status(201).json_body(json!({"message": "Order created"}));
    });

    let client = client_for(&server);
    let response = client
        .create_order(&CreateOrder {
            shipping_method: "Next Day".to_string(),
            shipping_address: CreateOrderAddress {
                address_name: "Home".to_string(),
                phone_number: "+6281234567".to_string(),
                address: "Jl. Kenangan 1".to_string(),
                city: "Bandung".to_string(),
            },
            send_email: true,
        })
        .await
        .unwrap();

    assert_eq!(response.message, "Order created");
    mock.assert();
}

#[tokio::test]
async fn update_shipping_address_posts_json_body() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/user/shipping_address")
            .header("content-type", "application/json")
            .json_body(json!({
                "address_name": "Office",
                "phone_number": "+6280000000",
                "address": "Jl. Merdeka 10",
                "city": "Jakarta",
            }));
        then.status(200).json_body(json!({"message": "Address updated"}));
    });

    let client = client_for(&server);
    client
        .update_user_shipping_address(&PutUserAddress {
            address_name: "Office".to_string(),
            phone_number: "+6280000000".to_string(),
            address: "Jl. Merdeka 10".to_string(),
            city: "Jakarta".to_string(),
        })
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn order_status_updates_target_the_declared_urls() {
    let server = MockServer::start_async().await;
    let id: Uuid = "4c78c5a8-01a5-4a3e-933f-0a0a2e1f7b6d".parse().unwrap();

    let confirm = server.mock(|when, then| {
        when.method(PUT)
            .path("/v1/order/4c78c5a8-01a5-4a3e-933f-0a0a2e1f7b6d");
        then.status(200)
            .json_body(json!({"message": "Order status updated"}));
    });
    let admin_update = server.mock(|when, then| {
        when.method(PUT)
            .path("/v1/orders/4c78c5a8-01a5-4a3e-933f-0a0a2e1f7b6d")
            .query_param("order_status", "shipped");
        then.status(200).json_body(json!({"message": "Order updated"}));
    });

    let client = client_for(&server);
    let confirmed = client.update_order_status(id).await.unwrap();
    assert_eq!(confirmed.message, "Order status updated");
    let updated = client.update_orders(id, "shipped").await.unwrap();
    assert_eq!(updated.message, "Order updated");

    confirm.assert();
    admin_update.assert();
}

#[tokio::test]
async fn base_url_path_prefix_reaches_the_prefixed_route() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/role");
        then.status(200).json_body(json!({"message": "user"}));
    });

    let config = ApiConfig::new(format!("{}/api/", server.base_url()).parse().unwrap());
    let client = ApiClient::new(config).unwrap();
    let role = client.get_role().await.unwrap();

    assert_eq!(role.message, "user");
    mock.assert();
}

#[tokio::test]
async fn get_user_sends_no_body() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/user");
        then.status(200).json_body(json!({
            "id": "6f2d3f29-6a21-4a8c-9d31-95a0f1a1c6a5",
            "name": "Buyer",
            "email": "buyer@example.com",
            "phone_number": "+6281234567",
            "address_name": "Home",
            "address": "Jl. Kenangan 1",
            "city": "Bandung",
            "balance": 250_000,
        }));
    });

    let client = client_for(&server);
    let user = client.get_user().await.unwrap();

    assert_eq!(user.balance, 250_000);
    mock.assert();
}
