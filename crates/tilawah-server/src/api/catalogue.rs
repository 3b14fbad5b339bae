//! Error catalogue endpoint

use axum::Json;
use serde::Serialize;

use tilawah_core::catalogue;
use tilawah_core::VerseKey;

/// One verse of the catalogue.
#[derive(Debug, Serialize)]
pub struct CatalogueVerse {
    pub key: VerseKey,
    pub label: &'static str,
    pub text: &'static str,
    pub obvious: &'static [&'static str],
    pub subtle: &'static [&'static str],
}

/// GET /api/catalogue
///
/// Every verse segment with its selectable error phrases, in canonical order.
pub async fn get_catalogue() -> Json<Vec<CatalogueVerse>> {
    Json(
        catalogue::entries()
            .iter()
            .map(|e| CatalogueVerse {
                key: e.key,
                label: e.label,
                text: e.text,
                obvious: e.obvious,
                subtle: e.subtle,
            })
            .collect(),
    )
}
