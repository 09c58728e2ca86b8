use axum::{routing::get, Router};

use crate::{
    handlers::{boilerplate, branding, category, feed, health_handler, navigation, stories},
    state::AppState,
};

pub fn create_routes(state: AppState) -> Router {
    // Public read-only API consumed by the theme front end
    let api_routes = Router::new()
        .route("/api/stories", get(stories::list_stories_handler))
        .route("/api/feed", get(feed::home_feed_handler))
        .route("/api/categories", get(category::list_categories_handler))
        .route("/api/navigation", get(navigation::navigation_handler))
        .route("/api/boilerplate", get(boilerplate::get_boilerplate_handler));

    Router::new()
        .merge(api_routes)
        .route("/branding.css", get(branding::branding_css_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{atomic::Ordering, Arc};

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::test_config,
        content::{memory::InMemoryContentSource, SharedContent},
        models::{
            category::fixtures::category,
            newsroom::CompanyInformation,
            story::fixtures::story,
        },
        navigation::FooterLinks,
    };

    fn newsroom() -> InMemoryContentSource {
        let source = InMemoryContentSource::new()
            .with_category(category(1, true, &[("en", "Energy", 2)]))
            .with_category(category(2, false, &[("en", "News", 3)]))
            .with_language("en", "English", true);

        (1..=5).fold(source, |source, n| {
            let cats: Vec<i64> = if n <= 3 { vec![2] } else { vec![1] };
            source.with_story(story(n, "en"), &cats)
        })
    }

    fn app(source: Arc<InMemoryContentSource>) -> Router {
        let content: SharedContent = source;
        create_routes(AppState::new(content, test_config(), FooterLinks::default()))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(router, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = get(app(Arc::new(newsroom())), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn stories_default_limit_and_total() {
        let source = Arc::new(newsroom());
        let (status, body) = get_json(app(source.clone()), "/api/stories?locale=en&offset=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
        assert_eq!(body["data"].as_array().unwrap().len(), 4);

        let recorded = source.recorded();
        assert_eq!(recorded[0].limit, 20);
        assert_eq!(recorded[0].offset, Some(1));
    }

    #[tokio::test]
    async fn malformed_query_is_ignored() {
        let source = Arc::new(newsroom());
        let (status, body) = get_json(app(source.clone()), "/api/stories?query=%7Bnot-json&limit=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert!(source.recorded()[0].filter.is_none());
    }

    #[tokio::test]
    async fn query_excludes_stories() {
        let excluded = story(1, "en").uuid;
        let uri = format!("/api/stories?query=%7B%22uuid%22%3A%7B%22%24nin%22%3A%5B%22{excluded}%22%5D%7D%7D");
        let (status, body) = get_json(app(Arc::new(newsroom())), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 4);
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["uuid"] != excluded.to_string()));
    }

    #[tokio::test]
    async fn feed_view() {
        let (status, body) = get_json(app(Arc::new(newsroom())), "/api/feed?page_size=3").await;
        assert_eq!(status, StatusCode::OK);

        let main = story(1, "en").uuid.to_string();
        assert_eq!(body["locale"], "en");
        assert_eq!(body["main_story"]["uuid"], main);
        assert_eq!(body["excluded"], serde_json::json!([main]));
        assert_eq!(body["filter_categories"][0]["name"], "Energy");

        let items = body["stories"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["uuid"], main);
        assert_eq!(body["stories"]["total"], 5);
        assert_eq!(body["stories"]["next_offset"], 2);
        assert_eq!(body["stories"]["done"], false);

        assert_eq!(body["news"]["anchor_id"], "heading-news");
        assert_eq!(body["news"]["feed"]["items"].as_array().unwrap().len(), 2);
        assert!(body.get("press_releases").is_none());
    }

    #[tokio::test]
    async fn upstream_failure_is_a_bad_gateway() {
        let source = newsroom();
        source.fail_stories.store(true, Ordering::SeqCst);

        let (status, body) = get_json(app(Arc::new(source)), "/api/feed").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn categories_for_locale() {
        let (_, body) = get_json(app(Arc::new(newsroom())), "/api/categories?locale=en").await;
        assert_eq!(body["news"]["slug"], "news");
        assert!(body["press_releases"].is_null());
        assert_eq!(body["featured"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn navigation_on_category_page() {
        let (status, body) =
            get_json(app(Arc::new(newsroom())), "/api/navigation?locale=en&path=/en/category/energy").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hub_filters"][0]["href"], "/en/category/news");
        assert_eq!(body["hub_filters"][1]["href"], "#heading-press-releases");
        assert_eq!(body["languages"][0]["href"], "/en");
        assert!(body["main_site"].is_null());
    }

    #[tokio::test]
    async fn boilerplate_is_null_without_company_details() {
        let (status, body) = get_json(app(Arc::new(newsroom())), "/api/boilerplate").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());

        let mut source = newsroom();
        source.languages[0].company_information = CompanyInformation {
            email: Some("press@acme.test".to_string()),
            ..Default::default()
        };
        let (_, body) = get_json(app(Arc::new(source)), "/api/boilerplate?locale=en").await;
        assert_eq!(body["company_name"], "Acme");
        assert_eq!(body["contacts"]["email"], "press@acme.test");
    }

    #[tokio::test]
    async fn branding_css() {
        let response = app(Arc::new(newsroom()))
            .oneshot(Request::builder().uri("/branding.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
        let css = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let css = String::from_utf8(css.to_vec()).unwrap();
        assert!(css.contains("'Etelka Medium', sans-serif"));
    }
}
