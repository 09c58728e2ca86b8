//! "Load more" state for one feed section.
//!
//! A section starts from the page rendered with the feed and grows one page at
//! a time. At most one fetch per section is outstanding: triggers that arrive
//! while a fetch is in flight, or after the section is exhausted, are ignored.

use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard},
};

use serde::Serialize;
use uuid::Uuid;

use crate::{
    content::{ContentError, ContentSource, StoriesPage, StoriesQuery},
    models::story::Story,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Done,
}

// Filters every page of a section is fetched with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionFilter {
    pub locale: Option<String>,
    pub category_id: Option<i64>,
    pub excluded: Vec<Uuid>,
}

#[derive(Debug)]
pub struct FeedSection {
    stories: Vec<Story>,
    seen: HashSet<Uuid>,
    offset: u32,
    total: u64,
    page_size: u32,
    filter: SectionFilter,
    state: LoadState,
    // stories shown ahead of the remote listing, not counted by its offset or total
    lead: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stories appended by this load.
    Loaded(usize),
    /// Another load is in flight.
    Busy,
    /// Nothing left to load.
    Exhausted,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectionSnapshot<T> {
    pub items: Vec<T>,
    pub next_offset: u32,
    pub total: u64,
    pub page_size: u32,
    pub done: bool,
}

impl FeedSection {
    pub fn new(initial: Vec<Story>, total: u64, page_size: u32, filter: SectionFilter) -> Self {
        let mut section = FeedSection {
            stories: Vec::with_capacity(initial.len()),
            seen: HashSet::new(),
            offset: u32::try_from(initial.len()).unwrap_or(u32::MAX),
            total,
            page_size: page_size.max(1),
            filter,
            state: LoadState::Idle,
            lead: 0,
        };
        section.append(initial);
        section.settle_initial();
        section
    }

    /// A section whose first story was fetched separately (and is excluded by
    /// `filter`); `rest` and `rest_total` describe the remote listing after it.
    pub fn with_lead(lead: Story, rest: Vec<Story>, rest_total: u64, page_size: u32, filter: SectionFilter) -> Self {
        let mut section = FeedSection::new(Vec::new(), 0, page_size, filter);
        section.lead = section.append(vec![lead]);
        section.offset = u32::try_from(rest.len()).unwrap_or(u32::MAX);
        section.total = rest_total + section.lead as u64;
        section.append(rest);
        section.state = LoadState::Idle;
        section.settle_initial();
        section
    }

    fn settle_initial(&mut self) {
        if self.stories.len() as u64 >= self.total {
            self.state = LoadState::Done;
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == LoadState::Done
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Idle -> Loading. Returns the query for the next page, or `None` when a
    /// load is already running or the section is exhausted.
    pub fn begin_load(&mut self) -> Option<StoriesQuery> {
        if self.state != LoadState::Idle {
            return None;
        }
        self.state = LoadState::Loading;

        Some(StoriesQuery {
            offset: Some(self.offset),
            limit: self.page_size,
            category_ids: self.filter.category_id.into_iter().collect(),
            locale: self.filter.locale.clone(),
            tags: Vec::new(),
            filter: crate::content::StoryFilter::excluding(&self.filter.excluded),
        })
    }

    /// Loading -> Idle | Done. A failed fetch leaves the loaded stories and
    /// offset untouched and hands the error back.
    pub fn finish_load(&mut self, result: Result<StoriesPage, ContentError>) -> Result<usize, ContentError> {
        if self.state != LoadState::Loading {
            tracing::warn!(state = ?self.state, "page arrived for a section that was not loading");
            return Ok(0);
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                self.state = LoadState::Idle;
                return Err(e);
            }
        };

        let fetched = page.stories.len();
        let appended = self.append(page.stories);
        self.offset = self
            .offset
            .saturating_add(u32::try_from(fetched).unwrap_or(u32::MAX));
        self.total = page.total + self.lead as u64;

        let short_page = fetched < self.page_size as usize;
        self.state = if short_page || self.stories.len() as u64 >= self.total {
            LoadState::Done
        } else {
            LoadState::Idle
        };

        Ok(appended)
    }

    /// Fetches the next page for a section owned by the caller.
    pub async fn load_more(&mut self, source: &dyn ContentSource) -> Result<LoadOutcome, ContentError> {
        let Some(query) = self.begin_load() else {
            return Ok(self.blocked_outcome());
        };
        let result = source.stories(&query).await;
        self.finish_load(result).map(LoadOutcome::Loaded)
    }

    /// Like [`FeedSection::load_more`] for a section shared between event
    /// handlers. The lock is never held across the fetch.
    pub async fn load_more_shared(
        section: &Mutex<FeedSection>,
        source: &dyn ContentSource,
    ) -> Result<LoadOutcome, ContentError> {
        let query = {
            let mut guard = lock_section(section);
            match guard.begin_load() {
                Some(query) => query,
                None => return Ok(guard.blocked_outcome()),
            }
        };

        let result = source.stories(&query).await;

        lock_section(section).finish_load(result).map(LoadOutcome::Loaded)
    }

    pub fn snapshot<T, F>(&self, render: F) -> SectionSnapshot<T>
    where
        F: Fn(&Story) -> T,
    {
        SectionSnapshot {
            items: self.stories.iter().map(render).collect(),
            next_offset: self.offset,
            total: self.total,
            page_size: self.page_size,
            done: self.is_done(),
        }
    }

    fn blocked_outcome(&self) -> LoadOutcome {
        match self.state {
            LoadState::Done => LoadOutcome::Exhausted,
            _ => LoadOutcome::Busy,
        }
    }

    fn append(&mut self, stories: Vec<Story>) -> usize {
        let before = self.stories.len();
        for story in stories {
            if self.seen.insert(story.uuid) {
                self.stories.push(story);
            }
        }
        self.stories.len() - before
    }
}

// A panic elsewhere must not leave the section stuck in `Loading`
fn lock_section(section: &Mutex<FeedSection>) -> MutexGuard<'_, FeedSection> {
    section.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("feed section lock was poisoned, recovering");
        poisoned.into_inner()
    })
}
