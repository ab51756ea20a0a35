use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use zookeepr::{Animal, Criteria, NewAnimal};

/// List animals, optionally filtered by query parameters
///
/// Recognized parameters are `personalityTraits` (repeatable, also as
/// `personalityTraits[]`), `diet`, `species` and `name`. Anything else,
/// including a query string that fails to decode, is ignored.
pub async fn list_animals(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ServerResult<Json<Vec<Animal>>> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring undecodable query string");
            Vec::new()
        }
    };
    let criteria = Criteria::from_pairs(pairs);
    let animals = state.store.filter(&criteria)?;

    metrics::counter!("zookeepr_animal_queries_total").increment(1);
    tracing::debug!(?criteria, hits = animals.len(), "animal query");

    Ok(Json(animals))
}

/// Get one animal by id
pub async fn get_animal(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<Animal>> {
    let found = state.store.find_by_id(&id)?;
    let result = if found.is_some() { "hit" } else { "miss" };
    metrics::counter!("zookeepr_animal_lookups_total", "result" => result).increment(1);

    found.map(Json).ok_or(ServerError::NotFound)
}

/// Validate a posted animal, assign its id and persist it
pub async fn create_animal(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<Json<Animal>> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejecting unreadable animal body");
            return Err(ServerError::invalid_animal());
        }
    };

    let candidate = NewAnimal::from_value(&body).ok_or_else(ServerError::invalid_animal)?;

    // Append rewrites the whole document on disk
    let store = state.store.clone();
    let animal = tokio::task::spawn_blocking(move || store.append(candidate)).await??;

    metrics::counter!("zookeepr_animals_created_total").increment(1);
    Ok(Json(animal))
}
