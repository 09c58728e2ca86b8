use reqwest::Url;
use serde::Serialize;

use crate::models::newsroom::{non_blank, CompanyInformation, Newsroom};

// "About us / contacts / subscribe" block shown above the footer
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Boilerplate {
    pub company_name: String,
    pub about: Option<String>,
    pub contacts: Option<Contacts>,
    pub subscribe: Option<SubscribeForm>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Contacts {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<Website>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Website {
    pub url: String,
    pub hostname: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubscribeForm {
    pub newsroom_uuid: uuid::Uuid,
    pub privacy_policy_link: Option<String>,
    pub data_request_link: Option<String>,
}

pub fn has_about_information(company: &CompanyInformation) -> bool {
    non_blank(&company.about).is_some()
}

pub fn has_contact_information(company: &CompanyInformation) -> bool {
    [&company.address, &company.phone, &company.email, &company.website]
        .into_iter()
        .any(|field| non_blank(field).is_some())
}

/// `None` when the company has neither an about text nor any contact details.
pub fn boilerplate(newsroom: &Newsroom, company: &CompanyInformation) -> Option<Boilerplate> {
    let has_about = has_about_information(company);
    let has_contacts = has_contact_information(company);
    if !has_about && !has_contacts {
        return None;
    }

    let owned = |field: &Option<String>| non_blank(field).map(str::to_string);

    Some(Boilerplate {
        company_name: newsroom.brand_name(company).to_string(),
        about: owned(&company.about),
        contacts: has_contacts.then(|| Contacts {
            address: owned(&company.address),
            phone: owned(&company.phone),
            email: owned(&company.email),
            website: non_blank(&company.website).map(|url| Website {
                url: url.to_string(),
                hostname: website_hostname(url),
            }),
        }),
        subscribe: newsroom.is_subscription_form_enabled.then(|| SubscribeForm {
            newsroom_uuid: newsroom.uuid,
            privacy_policy_link: owned(&newsroom.custom_privacy_policy_link),
            data_request_link: owned(&newsroom.custom_data_request_link),
        }),
    })
}

/// "https://www.example.com/about" -> "example.com". Falls back to the raw
/// value with the scheme stripped when it does not parse.
pub fn website_hostname(website: &str) -> String {
    let with_scheme = if website.contains("://") {
        website.to_string()
    } else {
        format!("https://{website}")
    };

    match Url::parse(&with_scheme).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(host) => host.trim_start_matches("www.").to_string(),
        None => website
            .split("://")
            .last()
            .unwrap_or(website)
            .trim_start_matches("www.")
            .trim_end_matches('/')
            .to_string(),
    }
}

/// Keeps `url` only when it is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.to_string())
}
