use std::net::SocketAddr;

use axum::Router;
use configs::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::AppState;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    models::db::ensure_schema(&db).await?;

    let app: Router = routes::build_router(AppState::from_db(db), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"status": "OK", "message": "API Running"}));
    Ok(())
}

#[tokio::test]
async fn e2e_category_and_product_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/api/categories", app.base_url))
        .json(&json!({"name": "Tablet", "description": "A slate computing device"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let category = res.json::<serde_json::Value>().await?;
    let cat_id = category["id"].as_i64().expect("category id");

    let res = c.post(format!("{}/api/products", app.base_url))
        .json(&json!({"name": "Slate 10", "price": 3500000, "stock": 3, "category_id": cat_id}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let product = res.json::<serde_json::Value>().await?;
    let product_id = product["id"].as_i64().expect("product id");

    let res = c.put(format!("{}/api/products/{}", app.base_url, product_id))
        .json(&json!({
            "id": 12345,
            "name": "Slate 10",
            "price": 3200000,
            "stock": 2,
            "category_id": cat_id
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["id"], json!(product_id));
    assert_eq!(updated["price"], json!(3200000));

    let res = c.delete(format!("{}/api/products/{}", app.base_url, product_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"message": "Product deleted successfully"}));

    let res = c.delete(format!("{}/api/categories/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.json::<serde_json::Value>().await?["error"].is_string());
    Ok(())
}
