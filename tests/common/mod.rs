use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode as AxumStatusCode};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use medicod_site::config::Config;
use medicod_site::forms::parser;
use medicod_site::forms::schema::RawValues;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit form-urlencoded data to a form variant, return (body, status).
    pub async fn submit_form(&self, variant: &str, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/forms/{variant}")))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit JSON data to a form variant, return (body, status).
    pub async fn submit_json(&self, variant: &str, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/forms/{variant}")))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn waitlist_count(&self) -> i64 {
        medicod_site::db::waitlist::count(&self.pool)
            .await
            .expect("count waitlist failed")
    }

    pub async fn contact_count(&self) -> i64 {
        medicod_site::db::contact::count(&self.pool)
            .await
            .expect("count contact_submissions failed")
    }
}

/// Spawn a test app with a fresh temporary database and default settings.
pub async fn spawn_app() -> TestApp {
    // Store-only tests never hit the relay; point it somewhere unroutable.
    spawn_app_with("http://127.0.0.1:1/unused", 100).await
}

/// Spawn a test app with an explicit relay URL and submission rate limit.
pub async fn spawn_app_with(relay_url: &str, submission_rate_limit: u32) -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!(
        "medicod_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        relay_url: relay_url.to_string(),
        max_body_size: 65_536,
        submission_rate_limit,
        submission_rate_window_secs: 60,
        log_level: "warn".to_string(),
    };

    let app = medicod_site::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}

/// A throwaway in-process stand-in for the hosted form relay. Captures
/// every multipart POST it receives and answers with a fixed status.
pub struct MockRelay {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RawValues>>>,
}

impl MockRelay {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn requests(&self) -> Vec<RawValues> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn spawn_relay(status: u16) -> MockRelay {
    let requests: Arc<Mutex<Vec<RawValues>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = requests.clone();

    let app = axum::Router::new().route(
        "/",
        axum::routing::post(move |headers: HeaderMap, body: Bytes| {
            let captured = captured.clone();
            async move {
                let fields = parser::parse_multipart(&headers, body)
                    .await
                    .unwrap_or_default();
                captured.lock().unwrap().push(fields);
                AxumStatusCode::from_u16(status).unwrap_or(AxumStatusCode::OK)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock relay");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock relay failed");
    });

    MockRelay { addr, requests }
}
