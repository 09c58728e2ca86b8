use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub is_featured: bool,
    // locale code -> translation; the API sends `null` for untranslated locales
    #[serde(default, deserialize_with = "present_translations")]
    pub i18n: BTreeMap<String, CategoryTranslation>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CategoryTranslation {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub public_stories_number: u32,
}

// Translation as handed to the front end for headings and links
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranslatedCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub locale: String,
}

impl Category {
    pub fn translation(&self, locale: &str) -> Option<&CategoryTranslation> {
        self.i18n.get(locale)
    }

    /// A category is only shown for a locale that has public stories in it.
    pub fn is_active_in(&self, locale: &str) -> bool {
        self.translation(locale)
            .is_some_and(|t| t.public_stories_number > 0)
    }

    pub fn translated(&self, locale: &str) -> Option<TranslatedCategory> {
        self.translation(locale).map(|t| TranslatedCategory {
            id: self.id,
            name: t.name.clone(),
            slug: t.slug.clone(),
            locale: locale.to_string(),
        })
    }
}

fn present_translations<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, CategoryTranslation>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<CategoryTranslation>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(locale, translation)| translation.map(|t| (locale, t)))
        .collect())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_translations_are_dropped() {
        let json = serde_json::json!({
            "id": 7,
            "is_featured": true,
            "i18n": {
                "en": { "name": "News", "slug": "news", "public_stories_number": 3 },
                "fr": null
            }
        });

        let category: Category = serde_json::from_value(json).unwrap();
        assert_eq!(category.i18n.len(), 1);
        assert!(category.is_active_in("en"));
        assert!(!category.is_active_in("fr"));
    }

    #[test]
    fn zero_public_stories_is_inactive() {
        let category = fixtures::category(1, false, &[("nl", "Nieuws", 0)]);
        assert!(!category.is_active_in("nl"));
        assert_eq!(category.translated("nl").map(|t| t.slug), Some("nieuws".to_string()));
    }
}
