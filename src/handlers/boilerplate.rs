use axum::{
    extract::{Query, State},
    Json,
};

use super::{category::LocaleParams, feed::company_information};
use crate::{
    error::Result,
    navigation::{boilerplate, Boilerplate},
    state::AppState,
};

// GET /api/boilerplate?locale=  (null when there is nothing to show)
pub async fn get_boilerplate_handler(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<Option<Boilerplate>>> {
    let locale = state.locale_or_default(params.locale.as_deref());
    let newsroom = state.content.newsroom().await?;
    let company = company_information(state.content.as_ref(), &locale).await?;

    Ok(Json(boilerplate(&newsroom, &company)))
}
