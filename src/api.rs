use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use crate::models::TransactionId;
use crate::store::TransactionStore;
use crate::wire::{StatusBody, SumBody, TransactionBody, TransactionWire};

pub fn app(store: Arc<TransactionStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/transactionservice/transaction/:transaction_id",
            put(put_transaction).get(get_transaction),
        )
        .route("/transactionservice/types/:type", get(get_ids_of_type))
        .route("/transactionservice/sum/:transaction_id", get(get_sum))
        .with_state(store)
}

async fn health() -> impl IntoResponse {
    Json(StatusBody::ok())
}

/// PUT a transaction body under a path id. A missing or unreadable body
/// stores nothing; the call still answers ok, matching the store's no-op
/// contract for undefined entries.
async fn put_transaction(
    State(store): State<Arc<TransactionStore>>,
    Path(transaction_id): Path<TransactionId>,
    body: Option<Json<TransactionBody>>,
) -> impl IntoResponse {
    match body {
        Some(Json(body)) => store.upsert(transaction_id, body.into_entry(transaction_id)),
        None => tracing::debug!(transaction_id, "no transaction body, nothing stored"),
    }
    Json(StatusBody::ok())
}

async fn get_transaction(
    State(store): State<Arc<TransactionStore>>,
    Path(transaction_id): Path<TransactionId>,
) -> impl IntoResponse {
    let entry = store.get(transaction_id);
    Json(TransactionWire::from_entry(entry.as_ref()))
}

async fn get_ids_of_type(
    State(store): State<Arc<TransactionStore>>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    let mut ids: Vec<TransactionId> = store.ids_of_type(&kind).into_iter().collect();
    ids.sort_unstable();
    Json(ids)
}

async fn get_sum(
    State(store): State<Arc<TransactionStore>>,
    Path(transaction_id): Path<TransactionId>,
) -> impl IntoResponse {
    match store.sum_linked_to(transaction_id) {
        Ok(sum) => Json(SumBody { sum }).into_response(),
        Err(e) => {
            tracing::warn!(transaction_id, error = %e, "sum aggregation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(StatusBody::error())).into_response()
        }
    }
}
