//! # Quote Pipeline Tests
//!
//! End-to-end tests from offerings on the wire to a published quote
//! snapshot.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use fiatsend_core::application::services::{
    AggregationConfig, BestReturnStrategy, ExchangeForm, QuoteAggregationEngine, QuoteOutcome,
    QuoteSession, compute_quotes,
};
use fiatsend_core::domain::entities::RawOffering;
use fiatsend_core::domain::errors::DomainError;
use fiatsend_core::domain::value_objects::{Amount, CurrencyCode, CurrencyPair};
use fiatsend_core::infrastructure::offerings::{
    FetchError, HttpOfferingRepository, InMemoryOfferingRepository,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn record(id: &str, from: &str, rate: &str, payin: &str, payout: &str) -> serde_json::Value {
    json!({
        "metadata": { "id": id, "from": from },
        "data": {
            "payoutUnitsPerPayinUnit": rate,
            "payin": { "currencyCode": payin },
            "payout": { "currencyCode": payout }
        }
    })
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn http_session(server: &MockServer) -> QuoteSession {
    let repo = HttpOfferingRepository::new(server.uri(), 2000).unwrap();
    let engine = QuoteAggregationEngine::new(
        Arc::new(repo),
        Arc::new(BestReturnStrategy::new()),
        AggregationConfig::with_timeout(2000),
    )
    .unwrap();
    QuoteSession::new(engine)
}

// ============================================================================
// HTTP end to end
// ============================================================================

#[tokio::test]
async fn http_offerings_rank_to_best_return() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/offerings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                record("vertex", "did:dht:vertex", "1.1", "GHS", "USDC"),
                record("aqua", "did:dht:aqua", "1.2", "GHS", "USDC"),
                record("broken", "did:dht:broken", "zero", "GHS", "USDC"),
                record("euro", "did:dht:euro", "1.3", "EUR", "USDC")
            ]
        })))
        .mount(&server)
        .await;

    let session = http_session(&server);
    let mut form = ExchangeForm::default();
    form.set_amount("50");
    assert_eq!(form.action_label(), "Review Exchange");

    let status = session.request_form(&form).await.unwrap();
    let snapshot = status.published().unwrap();

    let quotes = snapshot.outcome.quotes();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].quote.provider(), "did:dht:aqua");
    assert_eq!(quotes[0].quote.received_amount(), dec("60.00"));
    assert!(quotes[0].is_best_return);
    assert!(!quotes[1].is_best_return);

    let json = serde_json::to_value(snapshot.as_ref()).unwrap();
    assert_eq!(json["outcome"]["status"], "ready");
    assert_eq!(json["outcome"]["quotes"][0]["fee"], "0.18");
    assert_eq!(json["pair"]["from"], "GHS");
}

#[tokio::test]
async fn http_null_rate_drops_only_that_offering() {
    let server = MockServer::start().await;
    let mut broken = record("broken", "did:dht:broken", "0", "GHS", "USDC");
    broken["data"]["payoutUnitsPerPayinUnit"] = serde_json::Value::Null;
    Mock::given(method("GET"))
        .and(path("/offerings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [record("aqua", "did:dht:aqua", "1.2", "GHS", "USDC"), broken]
        })))
        .mount(&server)
        .await;

    let session = http_session(&server);
    let engine = session.engine();
    let pair = CurrencyPair::default();
    let amount: Amount = "50".parse().unwrap();

    let offerings = engine.fetch(pair).await.unwrap();
    assert_eq!(offerings.len(), 2);

    let result = engine.evaluate(pair, amount, &offerings);
    assert_eq!(result.ranked_quotes.len(), 1);
    assert_eq!(result.dropped.len(), 1);
    assert_eq!(result.dropped[0].offering_id.as_str(), "broken");
    assert!(matches!(result.dropped[0].reason, DomainError::InvalidRate(_)));

    let status = session.request(pair, amount).await;
    let outcome = &status.published().unwrap().outcome;
    assert!(outcome.is_ready());
    assert_eq!(outcome.quotes().len(), 1);
    assert_eq!(outcome.quotes()[0].quote.received_amount(), dec("60.00"));
}

#[tokio::test]
async fn http_only_unsupported_currencies_is_no_offerings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [record("euro", "did:dht:euro", "1.3", "EUR", "USDC")]
        })))
        .mount(&server)
        .await;

    let session = http_session(&server);
    let status = session.request(CurrencyPair::default(), Amount::ZERO).await;
    let outcome = status.published().map(|s| s.outcome.clone());
    assert_eq!(outcome, Some(QuoteOutcome::NoOfferings));
}

#[tokio::test]
async fn http_not_found_is_failed_not_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let session = http_session(&server);
    let status = session.request(CurrencyPair::default(), Amount::ZERO).await;
    let snapshot = status.published().unwrap();

    assert_eq!(
        snapshot.outcome,
        QuoteOutcome::Failed {
            error: FetchError::no_offerings_found(CurrencyPair::default())
        }
    );
}

#[tokio::test]
async fn http_empty_list_is_no_offerings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let session = http_session(&server);
    let status = session.request(CurrencyPair::default(), Amount::ZERO).await;
    let outcome = status.published().map(|s| s.outcome.clone());
    assert_eq!(outcome, Some(QuoteOutcome::NoOfferings));
}

// ============================================================================
// Form actions feeding the session
// ============================================================================

#[tokio::test]
async fn swapped_pair_queries_reverse_offerings() {
    let repo = InMemoryOfferingRepository::from_offerings([
        RawOffering::new("fwd", "Aqua", CurrencyCode::Ghs, CurrencyCode::Usdc, "0.08"),
        RawOffering::new("rev", "Aqua", CurrencyCode::Usdc, CurrencyCode::Ghs, "12.5"),
    ]);
    let session = QuoteSession::new(QuoteAggregationEngine::with_defaults(Arc::new(repo)));

    let mut form = ExchangeForm::default();
    form.set_amount("2");
    form.swap();

    let status = session.request_form(&form).await.unwrap();
    let snapshot = status.published().unwrap();

    let best = &snapshot.outcome.best_quote().unwrap().quote;
    assert_eq!(best.offering_id().as_str(), "rev");
    assert_eq!(best.received_display(), "25.00 GHS");

    form.reset();
    assert_eq!(form.pair(), CurrencyPair::default());
    assert_eq!(form.action_label(), "Exchange");
}

// ============================================================================
// Properties
// ============================================================================

fn arb_rate() -> impl Strategy<Value = String> {
    (1i64..100_000i64, 0u32..5u32).prop_map(|(m, s)| Decimal::new(m, s).to_string())
}

proptest! {
    #[test]
    fn compute_quotes_invariants(
        rates in prop::collection::vec(arb_rate(), 0..10),
        cents in 0i64..10_000_000i64,
    ) {
        let amount = Amount::from_decimal(Decimal::new(cents, 2)).unwrap();
        let offerings: Vec<RawOffering> = rates
            .iter()
            .enumerate()
            .map(|(i, r)| {
                RawOffering::new(format!("o-{i}"), "P", CurrencyCode::Ghs, CurrencyCode::Usdc, r.clone())
            })
            .collect();

        let ranked = compute_quotes(CurrencyPair::default(), amount, &offerings);
        prop_assert_eq!(ranked.len(), offerings.len());
        prop_assert_eq!(ranked.iter().filter(|r| r.is_best_return).count(), usize::from(!ranked.is_empty()));

        for (i, r) in ranked.iter().enumerate() {
            prop_assert_eq!(r.rank, i + 1);
            prop_assert!(r.quote.fee() >= Decimal::ZERO);
            prop_assert!(r.quote.fee() <= r.quote.received_amount());
        }
        for w in ranked.windows(2) {
            prop_assert!(w[0].quote.received_amount() >= w[1].quote.received_amount());
        }

        // Same input, same output.
        prop_assert_eq!(ranked, compute_quotes(CurrencyPair::default(), amount, &offerings));
    }
}
