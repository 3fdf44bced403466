//! API handlers
//!
//! Each handler is a thin adapter between the HTTP contract and the
//! core: decode the request, take the appropriate lock, delegate, shape
//! the JSON. Response field names are camelCase throughout because that
//! is what the frontend table renderer reads.

use crate::core::{paginate, Outcome, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::io::AsyncReader;
use crate::server::AppState;
use crate::types::{Card, LedgerError, RejectedRow};
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body returned by a successful upload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    message: &'static str,
    /// The full accumulated rejection list, not just this batch
    bad_transactions: Vec<RejectedRow>,
}

/// Query parameters shared by the paginated endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<usize>,
    limit: Option<usize>,
}

impl PageParams {
    /// Requested page; zero and absent both mean the first page
    fn page(&self) -> usize {
        self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE)
    }

    /// Requested page size; zero and absent both mean the default
    fn limit(&self) -> usize {
        self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT)
    }
}

/// Card as presented by the query surface
///
/// Account names are joined into one display string, the shape the
/// frontend expects in its `accountName` column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    account_name: String,
    card_number: String,
    balance: Decimal,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        CardView {
            account_name: card.account_names.join(", "),
            card_number: card.card_number.clone(),
            balance: card.balance,
        }
    }
}

/// POST /upload - ingest a multipart CSV of transactions
pub async fn upload(State(state): State<AppState>, multipart: Multipart) -> Response {
    match ingest_upload(&state, multipart).await {
        Ok(bad_transactions) => (
            StatusCode::CREATED,
            Json(UploadResponse {
                message: "CSV data successfully uploaded and processed.",
                bad_transactions,
            }),
        )
            .into_response(),
        Err(e) => {
            eprintln!("Error processing CSV file: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing CSV file.",
            )
                .into_response()
        }
    }
}

/// Drive the upload: locate the file part, stream its rows through the
/// processor under the write lock, and return the rejection list.
///
/// The write guard is held for the whole batch, so the response is only
/// produced once every row's effect is applied and a concurrent reset
/// cannot interleave.
async fn ingest_upload(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<Vec<RejectedRow>, LedgerError> {
    let mut data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| LedgerError::Upload {
            message: e.to_string(),
        })?
    {
        if field.name() == Some("file") {
            data = Some(field.bytes().await.map_err(|e| LedgerError::Upload {
                message: e.to_string(),
            })?);
            break;
        }
    }
    let data = data.ok_or(LedgerError::MissingUploadFile)?;

    let mut reader = AsyncReader::new(&data[..]);
    let mut processor = state.processor().write().await;

    while let Some(result) = reader.read_row().await {
        // A stream that stops decoding is fatal to the request; rows
        // already applied stay applied
        let row = result?;
        if let Outcome::Rejected(reason) = processor.process(row) {
            eprintln!("Bad transaction ({})", reason);
        }
    }

    Ok(processor.ledger().rejected().to_vec())
}

/// GET /cards - paginated card balances in first-seen order
pub async fn cards(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let processor = state.processor().read().await;

    let views: Vec<CardView> = processor
        .ledger()
        .cards()
        .into_iter()
        .map(CardView::from)
        .collect();

    Json(paginate(&views, params.page(), params.limit()))
}

/// GET /collections - paginated accounts tied to negative-balance cards
pub async fn collections(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let processor = state.processor().read().await;

    let entries = processor.ledger().negative_balance_accounts();

    Json(paginate(&entries, params.page(), params.limit()))
}

/// GET /bad-transactions - paginated rejected rows in insertion order
pub async fn bad_transactions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let processor = state.processor().read().await;

    let rejected = processor.ledger().rejected();

    Json(paginate(rejected, params.page(), params.limit()))
}

/// POST /reset - clear all ledger state
pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    let mut processor = state.processor().write().await;
    processor.reset();
    println!("System reset successfully.");

    (StatusCode::OK, "System reset successfully.")
}
