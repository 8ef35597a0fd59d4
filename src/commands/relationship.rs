//! User relationship records.

use crate::models::expression::{
    MemoryPoint, PersonCard, PersonDetail, RelationshipReport, RelationshipUpdate,
};
use crate::models::{ActionResult, ApiResponse, PersonList};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::relationship;
use crate::services::request::{QueryParams, RequestBody};
use serde_json::{json, Value};

/// Default page size of the person list.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub async fn list(client: &ApiClient, page: u32, page_size: u32) -> ApiResponse<PersonList> {
    let params = QueryParams::new()
        .with("page", page.max(1))
        .with("page_size", page_size);
    client.get(relationship::LIST, &params).await
}

pub async fn person(client: &ApiClient, person_id: &str) -> ApiResponse<PersonDetail> {
    client
        .get(&relationship::person(person_id), &QueryParams::new())
        .await
}

pub async fn report(client: &ApiClient, person_id: &str) -> ApiResponse<RelationshipReport> {
    client
        .get(&relationship::report(person_id), &QueryParams::new())
        .await
}

/// Free-form aggregate statistics.
pub async fn stats(client: &ApiClient) -> ApiResponse<Value> {
    client.get(relationship::STATS, &QueryParams::new()).await
}

/// Look a person up by name.
pub async fn search(client: &ApiClient, query: &str) -> ApiResponse<PersonCard> {
    let params = QueryParams::new().with("query", query);
    client.get(relationship::SEARCH, &params).await
}

/// Set the relationship score (0.0 to 1.0) and description.
pub async fn update(
    client: &ApiClient,
    person_id: &str,
    update: &RelationshipUpdate,
) -> ApiResponse<ActionResult> {
    client
        .put_json(&relationship::person(person_id), update)
        .await
}

pub async fn update_impression(
    client: &ApiClient,
    person_id: &str,
    impression: Option<&str>,
    short_impression: Option<&str>,
) -> ApiResponse<ActionResult> {
    client
        .put(
            &relationship::impression(person_id),
            RequestBody::Json(json!({
                "impression": impression,
                "short_impression": short_impression,
            })),
        )
        .await
}

/// Replace the memory points of a person.
pub async fn update_points(
    client: &ApiClient,
    person_id: &str,
    points: &[MemoryPoint],
) -> ApiResponse<ActionResult> {
    client
        .put_json(&relationship::points(person_id), points)
        .await
}

/// Drop cached relationship data for one person, or for everyone.
pub async fn clear_cache(client: &ApiClient, person_id: Option<&str>) -> ApiResponse<ActionResult> {
    client
        .post(
            relationship::CACHE_CLEAR,
            RequestBody::Json(json!({ "person_id": person_id })),
        )
        .await
}
