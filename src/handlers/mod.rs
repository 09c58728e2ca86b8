pub mod boilerplate;
pub mod branding;
pub mod category;
pub mod feed;
pub mod navigation;
pub mod stories;

pub async fn health_handler() -> &'static str {
    "ok"
}
