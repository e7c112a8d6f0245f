//! 库存与订单接口集成测试

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use coffee_errors::ProblemDetails;
use coffee_maker::api::{self, dto::InventoryResponse, dto::OrderResponse};
use coffee_maker::application::CoffeeMakerHandler;
use coffee_maker::domain::{Inventory, InventoryService, Order};
use coffee_maker::infrastructure::InMemoryInventoryService;
use tower::ServiceExt;

fn app(service: Arc<InMemoryInventoryService>) -> Router {
    api::routes(Arc::new(CoffeeMakerHandler::new(service)))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn put_inventory(coffee: u32, milk: u32, sugar: u32, chocolate: u32) -> Request<Body> {
    let body = serde_json::json!({
        "coffee": coffee,
        "milk": milk,
        "sugar": sugar,
        "chocolate": chocolate,
    });

    Request::builder()
        .method("PUT")
        .uri("/api/v1//inventory")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_update_then_get_adds_delta_field_by_field() {
    let service = Arc::new(InMemoryInventoryService::new(Inventory::new(10, 4, 0, 9)));
    let app = app(service);

    let deltas = [(5, 0, 1, 0), (0, 0, 0, 0), (3, 7, 2, 100)];
    let mut expected = InventoryResponse {
        coffee: 10,
        milk: 4,
        sugar: 0,
        chocolate: 9,
    };

    for (coffee, milk, sugar, chocolate) in deltas {
        let response = send(&app, put_inventory(coffee, milk, sugar, chocolate)).await;
        assert_eq!(response.status(), StatusCode::OK);

        expected.coffee += coffee;
        expected.milk += milk;
        expected.sugar += sugar;
        expected.chocolate += chocolate;

        let updated: InventoryResponse = body_json(response).await;
        assert_eq!(updated, expected);

        let response = send(&app, get("/api/v1//inventory")).await;
        let current: InventoryResponse = body_json(response).await;
        assert_eq!(current, expected);
    }
}

#[tokio::test]
async fn test_repeated_update_accumulates_again() {
    let service = Arc::new(InMemoryInventoryService::new(Inventory::new(10, 0, 0, 0)));
    let app = app(service.clone());

    send(&app, put_inventory(5, 0, 0, 0)).await;
    send(&app, put_inventory(5, 0, 0, 0)).await;

    assert_eq!(service.get_inventory().await.unwrap().coffee, 20);
}

#[tokio::test]
async fn test_every_valid_id_returns_its_order() {
    let recipes = ["Latte", "Mocha", "Espresso", "Hot Chocolate"];
    let orders: Vec<_> = recipes
        .iter()
        .map(|recipe| Order::new(*recipe, 100, 10))
        .collect();
    let service = Arc::new(InMemoryInventoryService::with_orders(
        Inventory::default(),
        orders.clone(),
    ));
    let app = app(service);

    for (index, order) in orders.iter().enumerate() {
        let response = send(&app, get(&format!("/api/v1//orders/{}", index + 1))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: OrderResponse = body_json(response).await;
        assert_eq!(body, OrderResponse::from(order.clone()));
    }
}

#[tokio::test]
async fn test_out_of_range_ids_are_not_found() {
    let service = Arc::new(InMemoryInventoryService::with_orders(
        Inventory::default(),
        vec![
            Order::new("Latte", 100, 0),
            Order::new("Mocha", 100, 0),
            Order::new("Espresso", 100, 0),
        ],
    ));
    let app = app(service);

    for id in [0_i32, -1, 4, 50, i32::MAX] {
        let response = send(&app, get(&format!("/api/v1//orders/{}", id))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let problem: ProblemDetails = body_json(response).await;
        assert_eq!(
            problem.detail,
            format!("Could not find order: {}, number of orders 3", id)
        );
    }
}

#[tokio::test]
async fn test_orders_added_later_become_visible() {
    let service = Arc::new(InMemoryInventoryService::default());
    let app = app(service.clone());

    let response = send(&app, get("/api/v1//orders/1")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    service
        .add_order(Order::new("Latte", 100, 0))
        .await
        .unwrap();

    let response = send(&app, get("/api/v1//orders/1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let order: OrderResponse = body_json(response).await;
    assert_eq!(order.recipe, "Latte");
}

#[tokio::test]
async fn test_negative_delta_is_rejected_without_mutation() {
    let service = Arc::new(InMemoryInventoryService::new(Inventory::new(10, 10, 10, 10)));
    let app = app(service.clone());

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1//inventory")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"coffee": -5, "milk": 1, "sugar": 1, "chocolate": 1}"#,
        ))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let problem: ProblemDetails = body_json(response).await;
    assert_eq!(problem.errors[0].field, "coffee");
    assert_eq!(
        service.get_inventory().await.unwrap(),
        Inventory::new(10, 10, 10, 10)
    );
}
