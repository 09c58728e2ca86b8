use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::image_framing::{self, CropSpec, Framing, ImageDimensions};

// A story as listed by the content API. Read-only on our side.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Story {
    pub uuid: Uuid,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub slug: String,
    #[serde(default)]
    pub culture: Option<StoryCulture>,
    pub published_at: Option<DateTime<Utc>>,
    pub newsroom: StoryNewsroom,
    #[serde(default)]
    pub thumbnail_image: Option<UploadedImage>,
    #[serde(default)]
    pub links: StoryLinks,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StoryCulture {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StoryNewsroom {
    pub uuid: Uuid,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct StoryLinks {
    pub newsroom_view: Option<String>,
}

// An image stored on the CDN
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UploadedImage {
    pub uuid: String,
    #[serde(default)]
    pub filename: Option<String>,
    pub original_width: u32,
    pub original_height: u32,
    #[serde(default)]
    pub effects: Vec<String>,
}

impl Story {
    #[cfg(test)]
    pub fn locale_code(&self) -> Option<&str> {
        self.culture.as_ref().map(|c| c.code.as_str())
    }
}

// What the front end renders for one story tile
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoryCard {
    pub uuid: Uuid,
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub published_at: Option<DateTime<Utc>>,
    pub image: CardImage,
    /// Set when the story lives in another newsroom and must link out.
    pub external: Option<ExternalStory>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExternalStory {
    pub newsroom_url: String,
    pub story_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardImage {
    Framed {
        url: String,
        crop: Option<CropSpec>,
    },
    Fallback {
        logo_url: Option<String>,
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Hero,
    Regular,
}

/// Everything a card needs from the surrounding page.
#[derive(Debug, Clone)]
pub struct CardContext<'a> {
    pub cdn_base_url: &'a str,
    pub newsroom_uuid: Uuid,
    pub fallback_logo: Option<&'a UploadedImage>,
    pub fallback_text: &'a str,
    pub aspect_ratio: Option<f64>,
}

impl StoryCard {
    pub fn build(story: &Story, size: CardSize, ctx: &CardContext<'_>) -> Self {
        let image = match &story.thumbnail_image {
            Some(thumbnail) => {
                let framing = image_framing::compute_crop(
                    ImageDimensions::from(thumbnail),
                    ctx.aspect_ratio,
                    size == CardSize::Hero,
                );
                CardImage::Framed {
                    url: image_framing::cdn_url(ctx.cdn_base_url, thumbnail, framing),
                    crop: match framing {
                        Framing::ScaleCrop(crop) => Some(crop),
                        Framing::Original => None,
                    },
                }
            }
            None => CardImage::Fallback {
                logo_url: ctx
                    .fallback_logo
                    .map(|logo| image_framing::cdn_url(ctx.cdn_base_url, logo, Framing::Original)),
                text: ctx.fallback_text.to_string(),
            },
        };

        let external = (story.newsroom.uuid != ctx.newsroom_uuid).then(|| ExternalStory {
            newsroom_url: story.newsroom.url.clone(),
            story_url: story.links.newsroom_view.clone(),
        });

        StoryCard {
            uuid: story.uuid,
            title: story.title.clone(),
            subtitle: story.subtitle.clone(),
            slug: story.slug.clone(),
            published_at: story.published_at,
            image,
            external,
        }
    }
}
