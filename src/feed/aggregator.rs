use uuid::Uuid;

use super::{
    categories::{ResolvedCategories, SectionKind},
    pagination::{FeedSection, SectionFilter},
};
use crate::{
    content::{ContentError, ContentSource, StoriesPage, StoriesQuery},
    models::{category::TranslatedCategory, story::Story},
};

/// Stories shown per category section before "load more".
pub const SECTION_PAGE_SIZE: u32 = 4;
// Two, so the caller can tell whether filtering makes sense at all.
const MAIN_STORY_PROBE: u32 = 2;

#[derive(Debug, Clone)]
pub struct FeedRequest {
    pub locale: String,
    pub category_id: Option<i64>,
    pub page_size: u32,
}

#[derive(Debug)]
pub struct HomeFeed {
    pub categories: ResolvedCategories,
    pub main_story: Option<Story>,
    /// Stories every section leaves out (the main story).
    pub excluded: Vec<Uuid>,
    /// Whether category filter chips are offered.
    pub show_filters: bool,
    pub stories: FeedSection,
    pub news: Option<CategorySection>,
    pub press_releases: Option<CategorySection>,
}

#[derive(Debug)]
pub struct CategorySection {
    pub kind: SectionKind,
    pub category: TranslatedCategory,
    pub feed: FeedSection,
}

pub async fn build_home_feed(source: &dyn ContentSource, request: &FeedRequest) -> Result<HomeFeed, ContentError> {
    let locale = request.locale.as_str();
    let page_size = request.page_size.max(1);

    let catalog = source.categories().await?;
    let categories = ResolvedCategories::resolve(&catalog, locale);
    let has_featured = !categories.featured.is_empty();

    // Main story: pinned or most recent
    let probe_size = if has_featured { MAIN_STORY_PROBE } else { 1 };
    let probe = source
        .stories(&StoriesQuery::new(probe_size).locale(locale))
        .await?;
    let probed = probe.stories.len();
    let main_story = probe.stories.into_iter().next();
    let excluded: Vec<Uuid> = main_story.iter().map(|s| s.uuid).collect();

    let news = fetch_section(source, &categories, SectionKind::News, locale, &excluded).await?;
    let press_releases =
        fetch_section(source, &categories, SectionKind::PressReleases, locale, &excluded).await?;

    let list_filter = SectionFilter {
        locale: Some(locale.to_string()),
        category_id: request.category_id,
        excluded: Vec::new(),
    };

    let stories = if has_featured {
        match &main_story {
            Some(main) => {
                // one slot is taken by the main story
                let rest_limit = page_size - 1;
                let rest = if rest_limit == 0 {
                    StoriesPage::default()
                } else {
                    source
                        .stories(
                            &StoriesQuery::new(rest_limit)
                                .locale(locale)
                                .category(request.category_id)
                                .excluding(&excluded),
                        )
                        .await?
                };
                let filter = SectionFilter {
                    excluded: excluded.clone(),
                    ..list_filter
                };
                FeedSection::with_lead(main.clone(), rest.stories, rest.total, page_size, filter)
            }
            None => FeedSection::new(Vec::new(), 0, page_size, list_filter),
        }
    } else {
        let page = source
            .stories(
                &StoriesQuery::new(page_size)
                    .locale(locale)
                    .category(request.category_id),
            )
            .await?;
        FeedSection::new(page.stories, page.total, page_size, list_filter)
    };

    let show_filters = has_featured && probed >= MAIN_STORY_PROBE as usize;

    tracing::debug!(
        locale,
        featured = categories.featured.len(),
        main_story = ?main_story.as_ref().map(|s| s.uuid),
        news = news.as_ref().map_or(0, |s| s.feed.stories().len()),
        press_releases = press_releases.as_ref().map_or(0, |s| s.feed.stories().len()),
        "home feed assembled"
    );

    Ok(HomeFeed {
        categories,
        main_story,
        excluded,
        show_filters,
        stories,
        news,
        press_releases,
    })
}

/// First page of a news / press releases section. `None` when the category
/// does not exist for this locale or has nothing to show.
async fn fetch_section(
    source: &dyn ContentSource,
    categories: &ResolvedCategories,
    kind: SectionKind,
    locale: &str,
    excluded: &[Uuid],
) -> Result<Option<CategorySection>, ContentError> {
    let Some(category) = categories.section(kind).filter(|c| c.is_active_in(locale)) else {
        return Ok(None);
    };
    let Some(translated) = category.translated(locale) else {
        return Ok(None);
    };

    let page = source
        .stories(
            &StoriesQuery::new(SECTION_PAGE_SIZE)
                .locale(locale)
                .category(Some(category.id))
                .excluding(excluded),
        )
        .await?;

    if page.stories.is_empty() {
        return Ok(None);
    }

    let filter = SectionFilter {
        locale: Some(locale.to_string()),
        category_id: Some(category.id),
        excluded: excluded.to_vec(),
    };

    Ok(Some(CategorySection {
        kind,
        category: translated,
        feed: FeedSection::new(page.stories, page.total, SECTION_PAGE_SIZE, filter),
    }))
}
