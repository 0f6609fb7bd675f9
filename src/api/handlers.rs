use crate::application::catalog::Catalog;
use crate::domain::{ItemId, ItemKind, MemberId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{
    error::ApiError,
    types::{
        BorrowItemRequest, BorrowedItemsResponse, CreateItemRequest, CreateMemberRequest,
        ItemResponse, MemberResponse, MessageResponse, ReturnItemRequest,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// カタログ自体は排他制御を持たないため、カタログ単位の Mutex で
/// 1操作ずつ直列化する。ロック中に await しないこと。
pub struct AppState {
    catalog: Mutex<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }

    /// カタログのロックを取得する
    ///
    /// どの操作も途中で panic しても不変条件を壊さないため、poison は無視する。
    pub fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /items - 資料を登録
///
/// IDの重複は検証しない（重複時は先に登録された資料が検索される）。
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), RequestError> {
    let invalid_size = matches!(
        req.kind,
        ItemKind::EBook { filesize_mb, .. } if !filesize_mb.is_finite() || filesize_mb < 0.0
    );
    if invalid_size {
        return Err(RequestError::BadRequest(
            "filesize_mb must be a non-negative number".to_string(),
        ));
    }

    let item = req.to_item();
    let response = ItemResponse::from(&item);
    state.catalog().add_item(item);

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /members - 会員を登録
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMemberRequest>,
) -> (StatusCode, Json<MemberResponse>) {
    let member = req.to_member();
    let response = MemberResponse::from(&member);
    state.catalog().add_member(member);

    (StatusCode::CREATED, Json(response))
}

/// POST /loans - 資料を貸し出す
///
/// 会員・資料のどちらかが存在しなければ404、貸出中なら422。
pub async fn borrow_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BorrowItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = req.to_command();

    let event = state.catalog().borrow_item(&cmd.member_id, &cmd.item_id)?;

    Ok(Json(MessageResponse {
        message: event.message(),
    }))
}

/// POST /returns - 資料を返却する
///
/// 会員が存在しなければ404、会員の貸出リストに資料がなければ422。
pub async fn return_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReturnItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = req.to_command();

    let event = state.catalog().return_item(&cmd.member_id, &cmd.item_id)?;

    Ok(Json(MessageResponse {
        message: event.message(),
    }))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /items - 資料一覧（登録順）
pub async fn list_items(State(state): State<Arc<AppState>>) -> Json<Vec<ItemResponse>> {
    let catalog = state.catalog();
    Json(catalog.items().iter().map(ItemResponse::from).collect())
}

/// GET /items/:id - 資料をIDで取得
pub async fn get_item_by_id(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, RequestError> {
    let item_id = ItemId::new(item_id);

    state
        .catalog()
        .find_item_by_id(&item_id)
        .map(|item| Json(ItemResponse::from(item)))
        .ok_or_else(|| RequestError::NotFound(format!("Item {} not found", item_id)))
}

/// GET /members/:id - 会員をIDで取得
pub async fn get_member_by_id(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<Json<MemberResponse>, RequestError> {
    let member_id = MemberId::new(member_id);

    state
        .catalog()
        .find_member_by_id(&member_id)
        .map(|member| Json(MemberResponse::from(member)))
        .ok_or_else(|| RequestError::NotFound(format!("Member {} not found", member_id)))
}

/// GET /members/:id/items - 会員の貸出中資料の詳細（貸出順）
pub async fn list_borrowed_items(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<Json<BorrowedItemsResponse>, RequestError> {
    let member_id = MemberId::new(member_id);

    let details = state
        .catalog()
        .borrowed_item_details(&member_id)
        .ok_or_else(|| RequestError::NotFound(format!("Member {} not found", member_id)))?;

    Ok(Json(BorrowedItemsResponse {
        member_id: member_id.value().to_string(),
        details,
    }))
}

/// GET /summary - 全資料の詳細（登録順、改行区切りのテキスト）
pub async fn library_summary(State(state): State<Arc<AppState>>) -> String {
    state.catalog().library_summary()
}

// ============================================================================
// Error types
// ============================================================================

/// リソース検索・リクエスト検証のエラー型
///
/// アプリケーション層を経由しない 404 / 400 を表す。
#[derive(Debug)]
pub enum RequestError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            RequestError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            RequestError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
