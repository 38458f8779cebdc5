use contracts::domain::a001_artwork::{Catalog, JsonCatalog};
use gloo_net::http::Request;

/// Атрибут контейнера сетки с адресом статического JSON каталога
pub const CATALOG_URL_ATTR: &str = "data-catalog-url";

/// Загрузить каталог работ из статического JSON
pub async fn fetch_catalog(url: &str) -> Result<Catalog, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    Catalog::from_source(&JsonCatalog::from_json(body)).map_err(|e| e.to_string())
}
