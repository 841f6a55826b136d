//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! display formatting and input parsing used across the app.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Centavos                                     │
//! │    R$ 10,50 is stored as 1050                                       │
//! │    Arithmetic is exact; only display converts to reais              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Formatting Convention
//! Brazilian currency display: two decimals, comma as the decimal
//! separator, period as the thousands separator.
//!
//! ```rust
//! use bentin_core::money::Money;
//!
//! assert_eq!(Money::from_centavos(1234567).format(), "R$ 12.345,67");
//! assert_eq!(Money::parse("R$ 12.345,67"), Money::from_centavos(1234567));
//! ```
//!
//! ## Parsing Policy
//! Decimal digits past the second are TRUNCATED, not rounded:
//! `"10,509"` parses to 1050 centavos. Unparsable input yields
//! `Money::zero()` so a half-typed field never aborts the form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for capital withdrawals
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use bentin_core::money::Money;
    ///
    /// let price = Money::from_centavos(1050); // R$ 10,50
    /// assert_eq!(price.centavos(), 1050);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-reais portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bentin_core::money::Money;
    ///
    /// let unit_price = Money::from_centavos(2990); // R$ 29,90
    /// assert_eq!(unit_price.multiply_quantity(3).centavos(), 8970);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the value in the Brazilian display convention.
    ///
    /// Two decimals, comma decimal separator, period thousands separator,
    /// `R$` prefix. Negative values carry a leading minus.
    ///
    /// ## Example
    /// ```rust
    /// use bentin_core::money::Money;
    ///
    /// assert_eq!(Money::from_centavos(1050).format(), "R$ 10,50");
    /// assert_eq!(Money::from_centavos(1234567).format(), "R$ 12.345,67");
    /// assert_eq!(Money::from_centavos(-550).format(), "-R$ 5,50");
    /// ```
    pub fn format(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let reais = self.reais().abs();
        let grouped = group_thousands(reais);
        format!("{}R$ {},{:02}", sign, grouped, self.centavos_part())
    }

    /// Parses a display string into a Money value.
    ///
    /// Accepts the forms operators actually type: `"R$ 10,50"`, `"10,50"`,
    /// `"1.234,56"`, `"15"`. Whitespace and the `R$` prefix are ignored.
    ///
    /// ## Truncation Policy
    /// Decimal digits past the second are dropped, not rounded:
    /// `"10,509"` → 1050 centavos. This is the one policy applied
    /// everywhere; see DESIGN.md.
    ///
    /// ## Unparsable Input
    /// Returns `Money::zero()`. Input masking in the UI treats a
    /// half-typed value as "nothing yet" rather than an error.
    ///
    /// ## Example
    /// ```rust
    /// use bentin_core::money::Money;
    ///
    /// assert_eq!(Money::parse("R$ 10,50"), Money::from_centavos(1050));
    /// assert_eq!(Money::parse("10,509"), Money::from_centavos(1050));
    /// assert_eq!(Money::parse("abc"), Money::zero());
    /// ```
    pub fn parse(input: &str) -> Money {
        let mut s = input.trim();

        let negative = s.starts_with('-');
        if negative {
            s = s[1..].trim_start();
        }

        // Strip the currency prefix if present
        if let Some(rest) = s.strip_prefix("R$") {
            s = rest.trim_start();
        }

        // Remove thousands separators; spaces inside the number are noise
        let cleaned: String = s.chars().filter(|c| *c != '.' && *c != ' ').collect();
        if cleaned.is_empty() {
            return Money::zero();
        }

        let mut parts = cleaned.splitn(2, ',');
        let int_part = parts.next().unwrap_or("");
        let frac_part = parts.next();

        // A second comma means garbage input
        if frac_part.map(|f| f.contains(',')).unwrap_or(false) {
            return Money::zero();
        }

        let reais: i64 = if int_part.is_empty() {
            0
        } else if int_part.chars().all(|c| c.is_ascii_digit()) {
            match int_part.parse() {
                Ok(v) => v,
                Err(_) => return Money::zero(),
            }
        } else {
            return Money::zero();
        };

        let centavos: i64 = match frac_part {
            None => 0,
            Some(f) => {
                if !f.chars().all(|c| c.is_ascii_digit()) {
                    return Money::zero();
                }
                // Truncate to two digits; pad a single digit ("10,5" = 10,50)
                let truncated: String = f.chars().take(2).collect();
                match truncated.len() {
                    0 => 0,
                    1 => truncated.parse::<i64>().unwrap_or(0) * 10,
                    _ => truncated.parse().unwrap_or(0),
                }
            }
        };

        // A value too large for i64 centavos is garbage, not a wrap-around
        let total = match reais.checked_mul(100).and_then(|r| r.checked_add(centavos)) {
            Some(total) => total,
            None => return Money::zero(),
        };
        Money(if negative { -total } else { total })
    }
}

/// Groups a non-negative integer with period thousands separators.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display delegates to [`Money::format`], so logs and UI agree.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
