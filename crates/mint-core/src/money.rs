//! # Money Module
//!
//! Provides the `Money` type for handling prices and invoice totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    105 * 0.08 = 8.4000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10500 cents * 800 bps / 10000 = 840 cents                            │
//! │    Rounding happens exactly once, half-up, at the cent                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mint_core::money::Money;
//!
//! let price = Money::parse("65").unwrap();
//! assert_eq!(price.cents(), 6500);
//!
//! let total = price + Money::from_cents(4000);
//! assert_eq!(total.to_string(), "$105.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// Service.price_cents ──► InvoiceLine.unit_price ──► InvoiceLine.line_total
///                                                        │
///                  Invoice.subtotal ◄────────────────────┘
///                        │
///                        ├──► tax (8%, optional) ──► Invoice.total
///                        └──► "$105.00" on the printed invoice
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"65"`, `"65.5"` or `"-12.99"`.
    ///
    /// At most two fractional digits are accepted; anything finer is a
    /// format error rather than a silent rounding.
    ///
    /// ```rust
    /// use mint_core::money::Money;
    ///
    /// assert_eq!(Money::parse("120.00").unwrap().cents(), 12000);
    /// assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
    /// assert!(Money::parse("1.999").is_err());
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let raw = raw.trim().trim_start_matches('$');
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(invalid("must be a number"));
        }
        if !major.chars().all(|c| c.is_ascii_digit()) || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a number"));
        }
        if minor.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| invalid("amount too large"))?
        };
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("must be a number"))? * 10,
            _ => minor.parse().map_err(|_| invalid("must be a number"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half-up to the cent.
    ///
    /// Halves round away from zero, so refunds mirror charges exactly.
    ///
    /// ```rust
    /// use mint_core::money::Money;
    /// use mint_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(10500); // $105.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
    /// assert_eq!(tax.cents(), 840); // $8.40
    ///
    /// // $6.25 at 0.08% = 0.5 cents → rounds up to 1 cent
    /// assert_eq!(Money::from_cents(625).calculate_tax(TaxRate::from_bps(8)).cents(), 1);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so a large subtotal times 10000 bps cannot overflow
        let scaled = self.0.abs() as i128 * rate.bps() as i128;
        let rounded = (scaled + 5000) / 10000;
        let tax = if self.0 < 0 { -rounded } else { rounded };
        Money::from_cents(tax as i64)
    }

    /// Multiplies by a line quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Fixed-point display, e.g. `$65.00` or `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(6500).to_string(), "$65.00");
        assert_eq!(Money::from_cents(840).to_string(), "$8.40");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("65").unwrap().cents(), 6500);
        assert_eq!(Money::parse("$65.00").unwrap().cents(), 6500);
        assert_eq!(Money::parse(" 40.5 ").unwrap().cents(), 4050);
        assert_eq!(Money::parse(".99").unwrap().cents(), 99);
        assert_eq!(Money::parse("-12.99").unwrap().cents(), -1299);

        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("1,50").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_eight_percent_invoice_tax() {
        let subtotal: Money = [Money::from_cents(6500), Money::from_cents(4000)]
            .into_iter()
            .sum();
        assert_eq!(subtotal.cents(), 10500);

        let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
        assert_eq!(tax.cents(), 840);
        assert_eq!((subtotal + tax).cents(), 11340);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // $6.25 × 8% = 50 cents exactly
        assert_eq!(Money::from_cents(625).calculate_tax(TaxRate::from_bps(800)).cents(), 50);
        // $1.19 × 8% = 9.52 cents → 10
        assert_eq!(Money::from_cents(119).calculate_tax(TaxRate::from_bps(800)).cents(), 10);
        // $1.31 × 8% = 10.48 cents → 10
        assert_eq!(Money::from_cents(131).calculate_tax(TaxRate::from_bps(800)).cents(), 10);
        // 50 cents × 1% = 0.5 cents → 1
        assert_eq!(Money::from_cents(50).calculate_tax(TaxRate::from_bps(100)).cents(), 1);
    }

    #[test]
    fn test_tax_on_refund_is_symmetric() {
        let rate = TaxRate::from_bps(100);
        assert_eq!(Money::from_cents(-50).calculate_tax(rate).cents(), -1);
    }

    #[test]
    fn test_zero_rate() {
        assert!(Money::from_cents(10500).calculate_tax(TaxRate::zero()).is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(2).cents(), 2000);
    }
}
