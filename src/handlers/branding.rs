use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::{branding, error::Result, state::AppState};

// GET /branding.css
pub async fn branding_css_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let theme = state.content.theme_settings().await?;
    let css = branding::render_css(&branding::css_variables(&theme), state.config.brand_font.as_deref());

    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
