//! Lookup scenarios through the real HTTP client.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use nrdbot_domain::{OutboundMessage, ResponseMessages};
use tower::ServiceExt;

use super::{FakeNrdb, OUTAGE_QUERY};
use crate::api::http::routes;
use crate::infrastructure::ports::FetchError;
use crate::test_fixtures::SURE_GAMBLE_URL;
use crate::use_cases::LookupError;

fn assert_sure_gamble(msg: &OutboundMessage) {
    assert_eq!(msg.text, format!("<{}|*Sure Gamble*>", SURE_GAMBLE_URL));
    assert_eq!(msg.attachments.len(), 1);

    let attachment = &msg.attachments[0];
    let pretext = attachment.pretext.as_deref().unwrap();
    assert!(pretext.starts_with("*Event*"));
    assert_eq!(pretext, "*Event* - :_shaper:•\n5:_credit:");
    assert_eq!(
        attachment.text.as_deref(),
        Some("Gain 9:_credit:.\n_\"Fortune favors the bold.\"_")
    );
    assert_eq!(attachment.color.as_deref(), Some("#32CD32"));
}

#[tokio::test]
async fn test_single_detail_panel_is_formatted_card() {
    let nrdb = FakeNrdb::start().await;
    let app = nrdb.app(200);

    let msg = app.use_cases.lookup.execute("Sure Gamble").await.unwrap();

    assert_sure_gamble(&msg);
    assert_eq!(nrdb.detail_requests(), 0);
}

#[tokio::test]
async fn test_shorthand_resolves_to_same_card() {
    let nrdb = FakeNrdb::start().await;
    let app = nrdb.app(200);

    let msg = app.use_cases.lookup.execute("SG").await.unwrap();

    assert_sure_gamble(&msg);
}

#[tokio::test]
async fn test_forceful_query_refetches_prefix_match_once() {
    let nrdb = FakeNrdb::start().await;
    let app = nrdb.app(200);

    let forced = app.use_cases.lookup.execute("!Sure").await.unwrap();
    let direct = app.use_cases.lookup.execute("Sure Gamble").await.unwrap();

    assert_sure_gamble(&forced);
    assert_eq!(forced, direct);
    assert_eq!(nrdb.detail_requests(), 1);
}

#[tokio::test]
async fn test_plain_query_lists_relative_candidates() {
    let nrdb = FakeNrdb::start().await;
    let app = nrdb.app(200);

    let msg = app.use_cases.lookup.execute("Sure").await.unwrap();

    assert_eq!(msg.text, "3 cards matched your search:");
    assert_eq!(
        msg.attachments[0].text.as_deref(),
        Some("• </en/card/08024|Unsure Thing>\n• </en/card/01050|Sure Gamble>\n• </en/card/09999|Surely Not>")
    );
    assert_eq!(nrdb.detail_requests(), 0);
}

#[tokio::test]
async fn test_candidates_over_max_hits_are_counted_only() {
    let nrdb = FakeNrdb::start().await;
    let app = nrdb.app(3);

    let msg = app.use_cases.lookup.execute("cy").await.unwrap();

    assert_eq!(
        msg,
        OutboundMessage::plain(format!("5{}", ResponseMessages::default().too_many))
    );
}

#[tokio::test]
async fn test_remote_outage_is_transport_failure() {
    let nrdb = FakeNrdb::start().await;
    let app = nrdb.app(200);

    let result = app.use_cases.lookup.execute(OUTAGE_QUERY).await;

    assert_eq!(result, Err(LookupError::Transport(FetchError::Status(503))));
}

#[tokio::test]
async fn test_unknown_card_is_no_results() {
    let nrdb = FakeNrdb::start().await;
    let app = nrdb.app(200);

    let msg = app.use_cases.lookup.execute("zzzz").await.unwrap();

    assert_eq!(msg, OutboundMessage::plain(ResponseMessages::default().no_results));
}

#[tokio::test]
async fn test_webhook_round_trip() {
    let nrdb = FakeNrdb::start().await;
    let router = routes().with_state(Arc::new(nrdb.app(200)));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("token=post-secret&text=nrdb+%21sure&trigger_word=nrdb"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let msg: OutboundMessage = serde_json::from_slice(&bytes).unwrap();
    assert_sure_gamble(&msg);
}
