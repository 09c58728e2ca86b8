use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::Result,
    feed::{categories::CategoriesView, ResolvedCategories},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

// GET /api/categories?locale=
pub async fn list_categories_handler(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<CategoriesView>> {
    let locale = state.locale_or_default(params.locale.as_deref());
    let catalog = state.content.categories().await?;

    let resolved = ResolvedCategories::resolve(&catalog, &locale);
    tracing::debug!(
        locale = %locale,
        featured = resolved.featured.len(),
        news = resolved.news.is_some(),
        press_releases = resolved.press_releases.is_some(),
        "categories resolved"
    );

    Ok(Json(resolved.translated(&locale)))
}
