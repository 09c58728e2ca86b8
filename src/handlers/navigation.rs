use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::feed::company_information;
use crate::{
    error::Result,
    feed::ResolvedCategories,
    navigation::{
        hub_filters, language_options, main_site_link, social_links, FilterItem, FooterContent, LanguageOption,
        MainSiteLink, SectionSlugs, SocialLink,
    },
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct NavigationParams {
    pub locale: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NavigationView {
    pub locale: String,
    pub hub_filters: Vec<FilterItem>,
    pub languages: Vec<LanguageOption>,
    pub main_site: Option<MainSiteLink>,
    pub footer: FooterContent,
    pub social_links: Vec<SocialLink>,
}

// GET /api/navigation?locale=&path=
pub async fn navigation_handler(
    State(state): State<AppState>,
    Query(params): Query<NavigationParams>,
) -> Result<Json<NavigationView>> {
    let locale = state.locale_or_default(params.locale.as_deref());
    let path = params.path.clone().unwrap_or_else(|| format!("/{locale}"));
    let default_locale = state.config.default_locale.as_str();

    let catalog = state.content.categories().await?;
    let resolved = ResolvedCategories::resolve(&catalog, &locale);
    let news = resolved.news.as_ref().and_then(|c| c.translation(&locale));
    let press_releases = resolved.press_releases.as_ref().and_then(|c| c.translation(&locale));
    let slugs = SectionSlugs {
        news: news.map(|t| t.slug.as_str()),
        press_releases: press_releases.map(|t| t.slug.as_str()),
    };

    let languages = state.content.languages().await?;
    let theme = state.content.theme_settings().await?;
    let company = company_information(state.content.as_ref(), &locale).await?;

    Ok(Json(NavigationView {
        hub_filters: hub_filters(&locale, default_locale, &path, &slugs),
        languages: language_options(&languages, &locale),
        main_site: main_site_link(&theme),
        footer: state.footer.for_locale(&locale, default_locale),
        social_links: social_links(&company),
        locale,
    }))
}
