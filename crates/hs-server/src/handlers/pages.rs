//! Pages API endpoint.
//!
//! Composes and renders an owner's sections and returns a JSON response
//! with the header and body fragments, split per the composition rule.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use chrono::Utc;
use hs_sections::{OwnerKind, OwnerRef};
use hs_site::{RenderedPage, compose_sections, render_page};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for GET /api/pages.
#[derive(Deserialize, Default)]
pub(crate) struct PageQuery {
    /// Whether the caller has a legacy hardcoded template for this owner.
    #[serde(default)]
    legacy: bool,
}

/// Response for GET /api/pages/{`owner_type`}/{`owner_id`}.
#[derive(Serialize)]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// False when the owner has no sections; the caller then falls back to
    /// its legacy template (when it declared one via `?legacy=true`).
    #[serde(rename = "useSections")]
    use_sections: bool,
    /// Header fragments, in order.
    header: Vec<String>,
    /// Body fragments, in order.
    body: Vec<String>,
}

/// Page metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    /// Owner entity type.
    owner_type: String,
    /// Owner entity id.
    owner_id: i64,
    /// Number of active sections composed.
    section_count: usize,
    /// Render timestamp (ISO 8601).
    generated_at: String,
    /// Present only when the owner has no sections and the caller declared
    /// a legacy template.
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy_fallback: Option<bool>,
}

/// Handle GET /api/pages/{`owner_type`}/{`owner_id`}.
pub(crate) async fn get_page(
    Path((owner_type, owner_id)): Path<(String, i64)>,
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    let kind = OwnerKind::parse(&owner_type)
        .ok_or_else(|| ServerError::UnknownOwnerType(owner_type.clone()))?;
    let owner = OwnerRef::new(kind, owner_id);

    let sections = state.store.list_sections(owner).await?;
    let section_count = sections.len();
    let composed = compose_sections(sections);
    let page = render_page(&composed, &state.ctx);

    let etag = compute_etag(&state.version, &page);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let legacy_fallback = (!page.use_sections && query.legacy).then_some(true);
    let response = PageResponse {
        meta: PageMeta {
            owner_type: kind.as_str().to_owned(),
            owner_id,
            section_count,
            generated_at: Utc::now().to_rfc3339(),
            legacy_fallback,
        },
        use_sections: page.use_sections,
        header: page.header,
        body: page.body,
    };

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and rendered fragments.
///
/// Uses MD5 truncated to 64 bits (16 hex chars), enough for cache
/// invalidation with negligible collision probability. The timestamp in
/// `meta` is deliberately excluded so unchanged content stays cacheable.
fn compute_etag(version: &str, page: &RenderedPage) -> String {
    let mut hasher = Md5::new();
    hasher.update(version.as_bytes());
    for fragment in &page.header {
        hasher.update([0u8]);
        hasher.update(fragment.as_bytes());
    }
    // Partition marker: a fragment moving between header and body must
    // change the tag.
    hasher.update([1u8]);
    for fragment in &page.body {
        hasher.update([0u8]);
        hasher.update(fragment.as_bytes());
    }
    format!("\"{}\"", &hex::encode(hasher.finalize())[..16])
}
