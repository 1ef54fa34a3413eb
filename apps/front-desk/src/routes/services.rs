//! # Service Routes
//!
//! The price list: flat or grouped by category, add, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mint_core::validation::{validate_duration_min, validate_name, validate_price_cents};
use mint_core::{Money, NewService, Service, ServiceCategory};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ServiceQuery {
    #[serde(default)]
    pub grouped: bool,
}

#[derive(Debug, Serialize)]
pub struct ServiceGroup {
    pub category: ServiceCategory,
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServiceListing {
    Flat(Vec<Service>),
    Grouped(Vec<ServiceGroup>),
}

/// Price as typed into the form: `"65.00"` or `65`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(serde_json::Number),
    Text(String),
}

impl PriceInput {
    fn to_money(&self) -> Result<Money, mint_core::ValidationError> {
        match self {
            PriceInput::Number(n) => Money::parse(&n.to_string()),
            PriceInput::Text(s) => Money::parse(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    pub price: PriceInput,
    pub duration_min: i64,
    pub category: String,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ServiceQuery>,
) -> Json<ServiceListing> {
    let services = state.store.services();

    if query.grouped {
        let groups = services
            .by_category()
            .await
            .into_iter()
            .map(|(category, services)| ServiceGroup { category, services })
            .collect();
        Json(ServiceListing::Grouped(groups))
    } else {
        Json(ServiceListing::Flat(services.list().await))
    }
}

/// Adds a service to the end of the price list.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ServiceInput>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    validate_name("name", &input.name)?;
    let price = input.price.to_money()?;
    validate_price_cents(price.cents())?;
    validate_duration_min(input.duration_min)?;
    let category: ServiceCategory = input.category.parse()?;

    let service = state
        .store
        .services()
        .add(NewService {
            name: input.name.trim().to_string(),
            price_cents: price.cents(),
            duration_min: input.duration_min,
            category,
        })
        .await;

    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.services().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
