//! End-to-end tests driving the full application over HTTP.
//!
//! Each test serves `router::app` on an ephemeral local port backed by its own
//! in-memory database and talks to it with `reqwest`.

use reqwest::{Client, Response, StatusCode};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tokio::net::TcpListener;

use crate::server::{router, state::AppState};


/// Running application under test.
///
/// Holds the test context so the in-memory database outlives the spawned server.
struct TestApp {
    context: TestContext,
    base_url: String,
    client: Client,
}

impl TestApp {
    /// Serves the application on a database with empty trivia tables.
    async fn spawn() -> Self {
        Self::serve(TestBuilder::new().with_trivia_tables().build().await.unwrap()).await
    }

    /// Serves the application on a migrated database holding the seeded categories.
    async fn spawn_migrated() -> Self {
        Self::serve(TestBuilder::new().with_migrations().build().await.unwrap()).await
    }

    async fn serve(context: TestContext) -> Self {
        let db = context.db.clone().unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router::app(AppState::new(db)))
                .await
                .unwrap();
        });

        Self {
            context,
            base_url: format!("http://{}", address),
            client: Client::new(),
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn post(&self, path: &str, body: Value) -> Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }
}

/// Reads the response status and JSON body.
async fn read(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.json::<Value>().await.unwrap();

    (status, body)
}

/// Asserts the uniform error body.
fn assert_error(body: &Value, message: &str) {
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!(message));
}
