//! # Billing Routes
//!
//! The invoice draft and its export.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/billing/export                                              │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Take the lines out of the draft (one lock, released)      │    │
//! │  │  2. Resolve bill-to: walk-in, client, or "Guest"               │    │
//! │  │  3. Invoice::build with the configured tax rate                │    │
//! │  │  4. Exporter writes the document (blocking pool)               │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │         ┌──────────┴──────────┐                                        │
//! │         ▼                     ▼                                        │
//! │  200 { invoice, file }   500 EXPORT_ERROR, lines put back              │
//! │  draft left empty                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use mint_core::invoice::{
    BillTo, BillToDetails, Invoice, InvoiceDraft, InvoiceLine, InvoiceTotals, PaymentMethod,
};
use mint_core::validation::validate_id;
use mint_core::CoreError;
use mint_store::{SalonStore, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::export::{ExportError, ExportedInvoice};
use crate::state::AppState;

/// Draft contents, options and totals as the billing page shows them.
#[derive(Debug, Serialize)]
pub struct BillingView {
    pub lines: Vec<InvoiceLine>,
    pub bill_to: BillTo,
    /// Name printed under BILL TO.
    pub bill_to_name: String,
    pub include_tax: bool,
    pub payment_method: PaymentMethod,
    pub totals: InvoiceTotals,
}

#[derive(Debug, Deserialize)]
pub struct AddItem {
    pub service_id: String,
}

/// Option changes. Omitted fields keep their value.
#[derive(Debug, Default, Deserialize)]
pub struct BillingOptions {
    pub bill_to: Option<BillTo>,
    pub include_tax: Option<bool>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub invoice: Invoice,
    pub display_number: String,
    pub file: ExportedInvoice,
}

/// Resolves who the invoice is made out to.
///
/// A client id with no matching record prints as "Guest".
pub async fn resolve_bill_to(store: &SalonStore, bill_to: &BillTo) -> BillToDetails {
    match bill_to {
        BillTo::WalkIn => BillToDetails::walk_in(),
        BillTo::Client { id } => match store.clients().get(id).await {
            Some(client) => BillToDetails {
                client_id: Some(client.id),
                name: client.name,
                email: Some(client.email).filter(|e| !e.is_empty()),
            },
            None => BillToDetails::guest(id.clone()),
        },
    }
}

async fn view(state: &AppState, draft: InvoiceDraft) -> BillingView {
    let bill_to_name = resolve_bill_to(&state.store, &draft.bill_to).await.name;
    let totals = draft.totals(state.config.tax_rate());

    BillingView {
        lines: draft.lines,
        bill_to: draft.bill_to,
        bill_to_name,
        include_tax: draft.include_tax,
        payment_method: draft.payment_method,
        totals,
    }
}

pub async fn show(State(state): State<AppState>) -> Json<BillingView> {
    let draft = state.billing.snapshot();
    Json(view(&state, draft).await)
}

/// Adds one line for a service on the price list.
pub async fn add_item(
    State(state): State<AppState>,
    Json(item): Json<AddItem>,
) -> ApiResult<(StatusCode, Json<BillingView>)> {
    validate_id("service_id", &item.service_id)?;

    let service = state
        .store
        .services()
        .get(&item.service_id)
        .await
        .ok_or_else(|| StoreError::missing_reference("Service", &item.service_id))?;

    let draft = state.billing.with_draft_mut(|d| {
        let line_id = d.add_service(&service)?.line_id;
        debug!(line_id, service = %service.name, "Added invoice line");
        Ok::<_, ApiError>(d.clone())
    })?;

    Ok((StatusCode::CREATED, Json(view(&state, draft).await)))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path(line_id): Path<u64>,
) -> ApiResult<Json<BillingView>> {
    let draft = state.billing.with_draft_mut(|d| {
        d.remove_line(line_id)?;
        Ok::<_, ApiError>(d.clone())
    })?;

    Ok(Json(view(&state, draft).await))
}

/// Changes bill-to, tax toggle or payment method.
///
/// Billing a client requires the client to exist at the time of selection.
pub async fn set_options(
    State(state): State<AppState>,
    Json(options): Json<BillingOptions>,
) -> ApiResult<Json<BillingView>> {
    if let Some(BillTo::Client { id }) = &options.bill_to {
        validate_id("bill_to.id", id)?;
        if state.store.clients().get(id).await.is_none() {
            return Err(StoreError::missing_reference("Client", id).into());
        }
    }

    let draft = state.billing.with_draft_mut(|d| {
        if let Some(bill_to) = options.bill_to {
            d.bill_to = bill_to;
        }
        if let Some(include_tax) = options.include_tax {
            d.include_tax = include_tax;
        }
        if let Some(payment_method) = options.payment_method {
            d.payment_method = payment_method;
        }
        d.clone()
    });

    Ok(Json(view(&state, draft).await))
}

/// Empties the draft and resets its options.
pub async fn clear(State(state): State<AppState>) -> Json<BillingView> {
    let draft = state.billing.with_draft_mut(|d| {
        d.clear();
        d.clone()
    });
    Json(view(&state, draft).await)
}

/// Builds the invoice from the draft and saves it.
///
/// The lines leave the draft before the document is written, so two exports
/// racing on one draft bill each line once. The loser gets `EmptyInvoice`.
/// On failure the lines go back.
///
/// A successful export clears the draft: its lines are gone and, when nothing
/// was added meanwhile, its options reset. The browser billing page kept the
/// cart after printing. Clients that want the same lines again must re-add them.
pub async fn export(State(state): State<AppState>) -> ApiResult<Json<ExportResult>> {
    let draft = state.billing.take_lines();
    if draft.is_empty() {
        return Err(CoreError::EmptyInvoice.into());
    }

    match write_invoice(&state, &draft).await {
        Ok(result) => {
            state.billing.with_draft_mut(|d| {
                if d.is_empty() {
                    d.clear();
                }
            });
            info!(
                number = %result.display_number,
                total = %result.invoice.total,
                file = %result.file.file_name,
                "Invoice issued"
            );
            Ok(Json(result))
        }
        Err(err) => {
            state.billing.restore_lines(draft.lines);
            Err(err)
        }
    }
}

async fn write_invoice(state: &AppState, draft: &InvoiceDraft) -> ApiResult<ExportResult> {
    let bill_to = resolve_bill_to(&state.store, &draft.bill_to).await;
    let invoice = Invoice::build(draft, Utc::now(), bill_to, state.config.tax_rate())?;

    let exporter = state.exporter.clone();
    let salon = state.config.salon_info();
    let to_export = invoice.clone();
    let file = tokio::task::spawn_blocking(move || exporter.export(&to_export, &salon))
        .await
        .map_err(|e| ExportError::Task(e.to_string()))??;

    Ok(ExportResult {
        display_number: invoice.display_number(),
        invoice,
        file,
    })
}
