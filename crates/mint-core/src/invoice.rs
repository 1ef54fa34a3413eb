//! # Invoice Module
//!
//! The billing draft the front desk builds up, and the finished invoice it
//! turns into.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   InvoiceDraft (cart)                                                   │
//! │   ├── add_service()   one line per click, duplicates allowed           │
//! │   ├── remove_line()   by line id                                       │
//! │   ├── bill_to / include_tax / payment_method                           │
//! │   └── totals()        live subtotal / tax / total                      │
//! │          │                                                              │
//! │          ▼  Invoice::build(draft, now, bill-to details, rate)           │
//! │                                                                         │
//! │   Invoice (immutable, status Paid)                                      │
//! │          │                                                              │
//! │          ▼  InvoiceRenderer::render()                                   │
//! │                                                                         │
//! │   80-column document ──► MintSalon-Invoice-<millis>.txt                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Service, ServiceCategory, TaxRate};
use crate::validation::validate_invoice_size;
use crate::{MAX_INVOICE_LINES, SALON_BRAND};

/// Name printed when the invoice is for a walk-in customer.
pub const WALK_IN_NAME: &str = "Walk-in Customer";

/// Name printed when the billed client can no longer be found.
pub const GUEST_NAME: &str = "Guest";

/// Width of the rendered invoice document (A4 in a monospaced font).
pub const INVOICE_WIDTH: usize = 80;

// =============================================================================
// Options
// =============================================================================

/// Who the invoice is made out to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillTo {
    #[default]
    WalkIn,
    Client { id: String },
}

/// How the client paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    Cash,
    #[default]
    Card,
    #[serde(rename = "UPI")]
    Upi,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
            PaymentMethod::Upi => write!(f, "UPI"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InvoiceStatus {
    #[default]
    Paid,
    Pending,
}

// =============================================================================
// Draft
// =============================================================================

/// One service line on the draft.
///
/// Name, category and price are copied from the service when the line is
/// added, so deleting the service afterwards does not change the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceLine {
    /// Identifies this line within its draft. Never reused.
    pub line_id: u64,
    pub service_id: String,
    pub service_name: String,
    pub category: ServiceCategory,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

impl InvoiceLine {
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// Subtotal, tax and total for a set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    /// Rate that was applied; zero when tax is switched off.
    pub tax_rate_bps: u32,
}

impl InvoiceTotals {
    /// Computes totals over `lines`. Tax is rounded once, on the subtotal.
    pub fn compute<'a>(
        lines: impl IntoIterator<Item = &'a InvoiceLine>,
        include_tax: bool,
        rate: TaxRate,
    ) -> Self {
        let subtotal: Money = lines.into_iter().map(InvoiceLine::line_total).sum();
        let rate = if include_tax { rate } else { TaxRate::zero() };
        let tax = subtotal.calculate_tax(rate);

        InvoiceTotals {
            subtotal,
            tax,
            total: subtotal + tax,
            tax_rate_bps: rate.bps(),
        }
    }
}

/// The in-progress invoice.
///
/// ## Example
/// ```rust
/// use mint_core::invoice::InvoiceDraft;
/// use mint_core::types::{Service, ServiceCategory, TaxRate};
///
/// let haircut = Service {
///     id: "s1".into(),
///     name: "Women's Haircut".into(),
///     duration_min: 60,
///     price_cents: 6500,
///     category: ServiceCategory::Hair,
/// };
///
/// let mut draft = InvoiceDraft::new();
/// draft.add_service(&haircut).unwrap();
/// assert_eq!(draft.totals(TaxRate::default()).total.to_string(), "$70.20");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceDraft {
    pub lines: Vec<InvoiceLine>,
    pub bill_to: BillTo,
    pub include_tax: bool,
    pub payment_method: PaymentMethod,
    #[serde(skip)]
    #[ts(skip)]
    next_line_id: u64,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceDraft {
    /// An empty draft: walk-in, tax on, paid by card.
    pub fn new() -> Self {
        InvoiceDraft {
            lines: Vec::new(),
            bill_to: BillTo::WalkIn,
            include_tax: true,
            payment_method: PaymentMethod::Card,
            next_line_id: 1,
        }
    }

    /// Adds one line for `service`. The same service may be added repeatedly.
    pub fn add_service(&mut self, service: &Service) -> CoreResult<&InvoiceLine> {
        validate_invoice_size(self.lines.len()).map_err(|_| CoreError::InvoiceTooLarge {
            max: MAX_INVOICE_LINES,
        })?;

        let line_id = self.next_line_id;
        self.next_line_id += 1;

        self.lines.push(InvoiceLine {
            line_id,
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            category: service.category,
            unit_price_cents: service.price_cents,
            quantity: 1,
        });

        // just pushed
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Removes the line with `line_id`.
    pub fn remove_line(&mut self, line_id: u64) -> CoreResult<InvoiceLine> {
        let index = self
            .lines
            .iter()
            .position(|line| line.line_id == line_id)
            .ok_or(CoreError::LineNotFound(line_id))?;

        Ok(self.lines.remove(index))
    }

    /// Empties the draft and resets bill-to, tax and payment to defaults.
    ///
    /// Line ids keep counting so a stale id from before the clear can never
    /// match a new line.
    pub fn clear(&mut self) {
        let next_line_id = self.next_line_id;
        *self = InvoiceDraft::new();
        self.next_line_id = next_line_id;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn totals(&self, rate: TaxRate) -> InvoiceTotals {
        InvoiceTotals::compute(&self.lines, self.include_tax, rate)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// Bill-to details resolved by the caller from the draft's [`BillTo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillToDetails {
    pub client_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
}

impl BillToDetails {
    pub fn walk_in() -> Self {
        BillToDetails {
            client_id: None,
            name: WALK_IN_NAME.to_string(),
            email: None,
        }
    }

    /// A client id whose record is gone prints as "Guest".
    pub fn guest(client_id: impl Into<String>) -> Self {
        BillToDetails {
            client_id: Some(client_id.into()),
            name: GUEST_NAME.to_string(),
            email: None,
        }
    }
}

/// A finished invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    /// Unix milliseconds at issue time.
    pub number: i64,
    pub bill_to: BillToDetails,
    pub items: Vec<InvoiceLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub tax_rate_bps: u32,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "String")]
    pub issued_at: DateTime<Utc>,
    pub status: InvoiceStatus,
    pub payment_method: PaymentMethod,
}

impl Invoice {
    /// Freezes `draft` into an invoice issued at `now`.
    pub fn build(
        draft: &InvoiceDraft,
        now: DateTime<Utc>,
        bill_to: BillToDetails,
        rate: TaxRate,
    ) -> CoreResult<Self> {
        if draft.is_empty() {
            return Err(CoreError::EmptyInvoice);
        }

        let totals = draft.totals(rate);

        Ok(Invoice {
            number: now.timestamp_millis(),
            bill_to,
            items: draft.lines.clone(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            tax_rate_bps: totals.tax_rate_bps,
            date: now.date_naive(),
            issued_at: now,
            status: InvoiceStatus::Paid,
            payment_method: draft.payment_method,
        })
    }

    /// Short number printed on the document, e.g. `INV-523200`.
    pub fn display_number(&self) -> String {
        let secs = self.number.div_euclid(1000);
        format!("INV-{:06}", secs.rem_euclid(1_000_000))
    }

    /// File name without extension, e.g. `MintSalon-Invoice-1717000000000`.
    pub fn file_stem(&self) -> String {
        format!("{}-Invoice-{}", SALON_BRAND, self.number)
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Salon details printed in the invoice header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalonInfo {
    pub name: String,
    pub address: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Default for SalonInfo {
    fn default() -> Self {
        SalonInfo {
            name: SALON_BRAND.to_string(),
            address: vec![
                "123 Styling Ave".to_string(),
                "New York, NY 10001".to_string(),
            ],
            phone: None,
            email: None,
        }
    }
}

/// Renders an [`Invoice`] as a fixed-width text document.
pub struct InvoiceRenderer<'a> {
    invoice: &'a Invoice,
    salon: &'a SalonInfo,
}

impl<'a> InvoiceRenderer<'a> {
    pub fn new(invoice: &'a Invoice, salon: &'a SalonInfo) -> Self {
        Self { invoice, salon }
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(INVOICE_WIDTH);
        let invoice = self.invoice;

        // Header
        b.line_lr(&self.salon.name, "INVOICE");
        let mut left = self.salon.address.iter().map(String::as_str);
        b.line_lr(left.next().unwrap_or(""), &format!("#{}", invoice.display_number()));
        b.line_lr(left.next().unwrap_or(""), &invoice.date.format("%Y-%m-%d").to_string());
        for rest in left {
            b.line(rest);
        }
        if let Some(phone) = &self.salon.phone {
            b.line(&format!("Tel: {}", phone));
        }
        if let Some(email) = &self.salon.email {
            b.line(email);
        }
        b.sep('=');
        b.blank();

        // Bill to
        b.line("BILL TO");
        b.line(&invoice.bill_to.name);
        if let Some(email) = &invoice.bill_to.email {
            if !email.is_empty() {
                b.line(email);
            }
        }
        b.blank();

        // Items
        b.line_lr("DESCRIPTION", "AMOUNT");
        b.sep('-');
        for item in &invoice.items {
            let description = if item.quantity > 1 {
                format!("{} x{}", item.service_name, item.quantity)
            } else {
                item.service_name.clone()
            };
            b.line_lr(&description, &item.line_total().to_string());
            b.line(&format!("  {}", item.category));
        }
        b.sep('-');

        // Totals
        b.line_lr("Subtotal", &invoice.subtotal.to_string());
        if invoice.tax_rate_bps > 0 {
            let rate = TaxRate::from_bps(invoice.tax_rate_bps);
            b.line_lr(&format!("Tax ({}%)", rate.percentage()), &invoice.tax.to_string());
        }
        b.sep('=');
        b.line_lr("Total Due", &invoice.total.to_string());
        b.blank();
        b.center("Thank you for your business!");
        b.center(&format!("Payment Method: {}", invoice.payment_method));

        b.finish()
    }
}

/// Minimal fixed-width line builder.
struct TextBuilder {
    out: String,
    width: usize,
}

impl TextBuilder {
    fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text.trim_end());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn sep(&mut self, ch: char) {
        let rule: String = std::iter::repeat(ch).take(self.width).collect();
        self.line(&rule);
    }

    /// Left text and right text on one line, right-aligned to the width.
    fn line_lr(&mut self, left: &str, right: &str) {
        let used = left.chars().count() + right.chars().count();
        if used + 1 > self.width {
            self.line(left);
            let pad = self.width.saturating_sub(right.chars().count());
            self.line(&format!("{}{}", " ".repeat(pad), right));
        } else {
            let pad = self.width - used;
            self.line(&format!("{}{}{}", left, " ".repeat(pad), right));
        }
    }

    fn center(&mut self, text: &str) {
        let pad = self.width.saturating_sub(text.chars().count()) / 2;
        self.line(&format!("{}{}", " ".repeat(pad), text));
    }

    fn finish(self) -> String {
        self.out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
