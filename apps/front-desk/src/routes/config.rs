use axum::extract::State;
use axum::Json;
use mint_core::invoice::SalonInfo;
use mint_core::preferences::ColorTheme;
use mint_core::ServiceCategory;
use serde::Serialize;

use crate::state::AppState;

/// What the UI needs for page headers and pickers.
#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub salon: SalonInfo,
    pub tax_rate_bps: u32,
    pub tax_percentage: f64,
    pub categories: Vec<ServiceCategory>,
    pub themes: Vec<ColorTheme>,
}

pub async fn show(State(state): State<AppState>) -> Json<ConfigView> {
    let rate = state.config.tax_rate();
    Json(ConfigView {
        salon: state.config.salon_info(),
        tax_rate_bps: rate.bps(),
        tax_percentage: rate.percentage(),
        categories: ServiceCategory::ALL.to_vec(),
        themes: ColorTheme::ALL.to_vec(),
    })
}
