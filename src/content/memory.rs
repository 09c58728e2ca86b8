// In-process content source used by the tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{ContentError, ContentSource, StoriesPage, StoriesQuery};
use crate::models::{
    category::Category,
    newsroom::{CompanyInformation, LanguageSettings, Newsroom, ThemeSettings},
    story::{fixtures::HOME_NEWSROOM, Story},
};

pub struct InMemoryContentSource {
    pub categories: Vec<Category>,
    /// Most recent first, like the API sorts them.
    pub stories: Vec<Story>,
    // story uuid -> category ids
    pub story_categories: Vec<(uuid::Uuid, Vec<i64>)>,
    pub newsroom: Newsroom,
    pub languages: Vec<LanguageSettings>,
    pub theme: ThemeSettings,
    pub story_requests: AtomicUsize,
    pub recorded: Mutex<Vec<StoriesQuery>>,
    pub fail_stories: AtomicBool,
    /// When set, story requests wait for a notification before answering.
    pub gate: Option<Arc<Notify>>,
}

impl InMemoryContentSource {
    pub fn new() -> Self {
        InMemoryContentSource {
            categories: Vec::new(),
            stories: Vec::new(),
            story_categories: Vec::new(),
            newsroom: Newsroom {
                uuid: HOME_NEWSROOM,
                name: "acme".to_string(),
                display_name: "Acme".to_string(),
                newsroom_logo: None,
                is_subscription_form_enabled: false,
                custom_privacy_policy_link: None,
                custom_data_request_link: None,
            },
            languages: Vec::new(),
            theme: ThemeSettings::default(),
            story_requests: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
            fail_stories: AtomicBool::new(false),
            gate: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_story(mut self, story: Story, categories: &[i64]) -> Self {
        self.story_categories.push((story.uuid, categories.to_vec()));
        self.stories.push(story);
        self
    }

    pub fn with_language(mut self, code: &str, title: &str, is_default: bool) -> Self {
        self.languages.push(LanguageSettings {
            code: code.to_string(),
            title: title.to_string(),
            is_default,
            public_stories_count: 1,
            company_information: CompanyInformation::default(),
        });
        self
    }

    pub fn requests(&self) -> usize {
        self.story_requests.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> Vec<StoriesQuery> {
        self.recorded.lock().map(|q| q.clone()).unwrap_or_default()
    }

    fn in_categories(&self, story: &Story, wanted: &[i64]) -> bool {
        wanted.is_empty()
            || self
                .story_categories
                .iter()
                .find(|(uuid, _)| *uuid == story.uuid)
                .is_some_and(|(_, ids)| ids.iter().any(|id| wanted.contains(id)))
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn categories(&self) -> Result<Vec<Category>, ContentError> {
        Ok(self.categories.clone())
    }

    async fn stories(&self, query: &StoriesQuery) -> Result<StoriesPage, ContentError> {
        self.story_requests.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(query.clone());
        }

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_stories.load(Ordering::SeqCst) {
            return Err(ContentError::Unavailable("stories offline".to_string()));
        }

        let excluded = query.excluded_uuids();
        let matched: Vec<&Story> = self
            .stories
            .iter()
            .filter(|s| match &query.locale {
                Some(locale) => s.locale_code() == Some(locale.as_str()),
                None => true,
            })
            .filter(|s| self.in_categories(s, &query.category_ids))
            .filter(|s| !excluded.contains(&s.uuid))
            .collect();

        let offset = query.offset.unwrap_or(0) as usize;
        Ok(StoriesPage {
            total: matched.len() as u64,
            stories: matched
                .into_iter()
                .skip(offset)
                .take(query.limit as usize)
                .cloned()
                .collect(),
        })
    }

    async fn newsroom(&self) -> Result<Newsroom, ContentError> {
        Ok(self.newsroom.clone())
    }

    async fn languages(&self) -> Result<Vec<LanguageSettings>, ContentError> {
        Ok(self.languages.clone())
    }

    async fn theme_settings(&self) -> Result<ThemeSettings, ContentError> {
        Ok(self.theme.clone())
    }
}
