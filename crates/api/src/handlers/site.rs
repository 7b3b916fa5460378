//! Handlers for public site metadata and the string table.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use folio_core::i18n::{self, Language};
use serde::Serialize;

use crate::config::StorageMode;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SiteInfo {
    pub analytics_id: Option<String>,
    pub languages: Vec<Language>,
    pub default_language: Language,
    pub storage_mode: StorageMode,
}

#[derive(Debug, Serialize)]
pub struct TranslationTable {
    pub language: Language,
    pub texts: BTreeMap<&'static str, &'static str>,
}

/// GET /api/v1/site
pub async fn info(State(state): State<AppState>) -> Json<DataResponse<SiteInfo>> {
    Json(DataResponse {
        data: SiteInfo {
            analytics_id: state.config.analytics_id.clone(),
            languages: Language::ALL.to_vec(),
            default_language: Language::default(),
            storage_mode: state.config.storage_mode,
        },
    })
}

/// GET /api/v1/i18n/{lang}
pub async fn translations(
    Path(lang): Path<String>,
) -> AppResult<Json<DataResponse<TranslationTable>>> {
    let language: Language = lang
        .parse()
        .map_err(|e: i18n::UnknownLanguage| AppError::BadRequest(e.to_string()))?;

    Ok(Json(DataResponse {
        data: TranslationTable {
            language,
            texts: i18n::table(language),
        },
    }))
}
