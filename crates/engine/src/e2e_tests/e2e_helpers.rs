//! E2E test helpers for constructing the full application stack.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use nrdbot_domain::{ColorTable, ResponseMessages, ShorthandTable};

use crate::app::App;
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::netrunnerdb::NetrunnerDbClient;
use crate::test_fixtures::*;
use crate::use_cases::LookupTables;

/// Query the fake database answers with 503.
pub const OUTAGE_QUERY: &str = "outage";

/// In-process stand-in for NetrunnerDB.
///
/// Search pages are chosen by the `q` parameter. Candidate links are served
/// relative so disambiguation re-fetches stay on this server.
pub struct FakeNrdb {
    pub base_url: String,
    detail_requests: Arc<AtomicUsize>,
}

impl FakeNrdb {
    pub async fn start() -> Self {
        let detail_requests = Arc::new(AtomicUsize::new(0));
        let router = Router::new()
            .route("/find/", get(find))
            .route("/en/card/{code}", get(card))
            .with_state(detail_requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            detail_requests,
        }
    }

    pub fn detail_requests(&self) -> usize {
        self.detail_requests.load(Ordering::SeqCst)
    }

    /// Build an App against this server, the way `main` wires it.
    pub fn app(&self, max_hits: usize) -> App {
        let config = EngineConfig {
            post_token: "post-secret".to_string(),
            get_token: "get-secret".to_string(),
            max_hits,
            nrdb_base_url: self.base_url.clone(),
            ..Default::default()
        };
        let tables = LookupTables {
            shorthands: ShorthandTable::builtin().unwrap(),
            colours: ColorTable::builtin().unwrap(),
            messages: ResponseMessages::default(),
        };
        let source = NetrunnerDbClient::new(&config.nrdb_base_url).unwrap();
        App::new(Arc::new(source), tables, &config)
    }
}

fn relative_links(page: &str) -> String {
    page.replace(r#"href="https://netrunnerdb.com/"#, r#"href="/"#)
}

async fn find(Query(params): Query<HashMap<String, String>>) -> Response {
    let query = params.get("q").map(String::as_str).unwrap_or_default();
    match query {
        "sure gamble" => SURE_GAMBLE_PAGE.into_response(),
        "sure" => relative_links(SURE_SEARCH_PAGE).into_response(),
        "cy" => relative_links(FIVE_RESULTS_PAGE).into_response(),
        OUTAGE_QUERY => (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response(),
        _ => NO_RESULTS_PAGE.into_response(),
    }
}

async fn card(State(hits): State<Arc<AtomicUsize>>, Path(code): Path<String>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match code.as_str() {
        "01050" => SURE_GAMBLE_PAGE.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
