use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::story::UploadedImage;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Newsroom {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub newsroom_logo: Option<UploadedImage>,
    #[serde(default)]
    pub is_subscription_form_enabled: bool,
    #[serde(default)]
    pub custom_privacy_policy_link: Option<String>,
    #[serde(default)]
    pub custom_data_request_link: Option<String>,
}

impl Newsroom {
    pub fn brand_name<'a>(&'a self, company: &'a CompanyInformation) -> &'a str {
        if let Some(name) = non_blank(&company.name) {
            name
        } else if !self.display_name.trim().is_empty() {
            &self.display_name
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LanguageSettings {
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub public_stories_count: u32,
    #[serde(default)]
    pub company_information: CompanyInformation,
}

// The API sends `null` for anything left blank
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CompanyInformation {
    pub name: Option<String>,
    pub about: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub pinterest: Option<String>,
    pub tiktok: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
}

/// Trims and drops empty values.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// Theme settings; anything the API leaves out keeps the default
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ThemeSettings {
    pub accent_color: String,
    pub header_background_color: String,
    pub header_link_color: String,
    pub font: String,
    pub main_site_url: Option<String>,
    pub main_site_label: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        ThemeSettings {
            accent_color: "#3B82F6".to_string(),
            header_background_color: "#FFFFFF".to_string(),
            header_link_color: "#4B5563".to_string(),
            font: "Inter".to_string(),
            main_site_url: None,
            main_site_label: None,
        }
    }
}
