#![allow(dead_code)]

use notekeeper_api::config::ServerConfig;
use notekeeper_api::router::build_app_router;
use notekeeper_api::state::AppState;
use notekeeper_client::api::NotesApi;
use notekeeper_client::config::ClientConfig;
use tokio::net::TcpListener;

/// A server bound to an ephemeral local port.
pub struct TestServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve the real router over a fresh in-memory database.
pub async fn spawn_server() -> TestServer {
    let pool = notekeeper_db::create_pool("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    notekeeper_db::schema::sync_schema(&pool)
        .await
        .expect("schema sync should succeed");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");

    let config = ServerConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    };
    let app = build_app_router(AppState::new(pool, config));

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    TestServer {
        base_url: format!("http://{addr}/api/v1"),
        handle,
    }
}

/// Client pointed at `server`.
pub fn client_for(server: &TestServer) -> NotesApi {
    NotesApi::new(&ClientConfig {
        api_url: server.base_url.clone(),
        timeout_secs: 5,
    })
    .expect("client should build")
}
