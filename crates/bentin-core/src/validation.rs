//! # Validation Module
//!
//! Input validation for operator-supplied drafts and patches.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: UI form masks (out of scope here)                         │
//! │  └── Immediate feedback while typing                                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  └── Runs before the store touches any state                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Entity invariants (quantity >= 0, price > 0)              │
//! │  └── Hold by construction once layer 2 passed                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bentin_core::validation::{validate_price_centavos, validate_quantity};
//!
//! assert!(validate_price_centavos(7990).is_ok());
//! assert!(validate_quantity(0).is_ok()); // zero on hand is legal
//! ```

use crate::error::ValidationError;
use crate::types::{ProductDraft, ProductPatch, SaleDraft};
use crate::{MAX_LINE_QUANTITY, MAX_SALE_LINES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product category.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 60 characters
pub fn validate_category(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.len() > 60 {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: 60,
        });
    }

    Ok(())
}

/// Validates a selling price in centavos.
///
/// ## Rules
/// - Must be strictly positive; a product is never given away
pub fn validate_price_centavos(centavos: i64) -> ValidationResult<()> {
    if centavos <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an acquisition cost in centavos.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (donated/promo stock)
pub fn validate_cost_centavos(centavos: i64) -> ValidationResult<()> {
    if centavos < 0 {
        return Err(ValidationError::OutOfRange {
            field: "cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an on-hand quantity.
///
/// ## Rules
/// - Must be non-negative; zero on hand is a legal state
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a sale line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_line_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validators
// =============================================================================

/// Validates a complete product draft before an entity is minted.
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_product_name(&draft.name)?;
    validate_category(&draft.category)?;
    validate_price_centavos(draft.price_centavos)?;
    validate_cost_centavos(draft.cost_centavos)?;
    validate_quantity(draft.quantity)?;
    Ok(())
}

/// Validates the supplied fields of a product patch.
///
/// Absent fields are fine; present fields must satisfy the same rules as
/// a draft.
pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_product_name(name)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    if let Some(price) = patch.price_centavos {
        validate_price_centavos(price)?;
    }
    if let Some(cost) = patch.cost_centavos {
        validate_cost_centavos(cost)?;
    }
    if let Some(quantity) = patch.quantity {
        validate_quantity(quantity)?;
    }
    Ok(())
}

/// Validates the shape of a sale draft.
///
/// Stock availability is checked by the store against live quantities;
/// this only rejects structurally bad drafts.
pub fn validate_sale_draft(draft: &SaleDraft) -> ValidationResult<()> {
    if draft.lines.is_empty() {
        return Err(ValidationError::EmptySale);
    }

    if draft.lines.len() > MAX_SALE_LINES {
        return Err(ValidationError::OutOfRange {
            field: "sale lines".to_string(),
            min: 1,
            max: MAX_SALE_LINES as i64,
        });
    }

    for line in &draft.lines {
        validate_line_quantity(line.quantity)?;
    }

    if draft.discount_centavos < 0 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount against the computed subtotal.
pub fn validate_discount(discount_centavos: i64, subtotal_centavos: i64) -> ValidationResult<()> {
    if discount_centavos > subtotal_centavos {
        return Err(ValidationError::DiscountTooLarge {
            discount_centavos,
            subtotal_centavos,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SaleLineDraft;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Conjunto Verão".to_string(),
            category: "Conjuntos".to_string(),
            cost_centavos: 2000,
            price_centavos: 4990,
            quantity: 10,
            image_url: None,
            size: Some("6 anos".to_string()),
            color: Some("azul".to_string()),
            fabric: None,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Vestido Festa").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_must_be_positive() {
        assert!(validate_price_centavos(1).is_ok());
        assert!(validate_price_centavos(0).is_err());
        assert!(validate_price_centavos(-100).is_err());
    }

    #[test]
    fn test_validate_quantity_allows_zero() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(10).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_line_quantity() {
        assert!(validate_line_quantity(1).is_ok());
        assert!(validate_line_quantity(999).is_ok());
        assert!(validate_line_quantity(0).is_err());
        assert!(validate_line_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_product_draft() {
        assert!(validate_product_draft(&draft()).is_ok());

        let mut bad = draft();
        bad.price_centavos = 0;
        assert!(validate_product_draft(&bad).is_err());
    }

    #[test]
    fn test_validate_product_patch_only_checks_present_fields() {
        let patch = ProductPatch {
            price_centavos: Some(5990),
            ..ProductPatch::default()
        };
        assert!(validate_product_patch(&patch).is_ok());

        let bad = ProductPatch {
            price_centavos: Some(0),
            ..ProductPatch::default()
        };
        assert!(validate_product_patch(&bad).is_err());
    }

    #[test]
    fn test_validate_sale_draft() {
        let sale = SaleDraft {
            lines: vec![SaleLineDraft {
                product_id: "p1".to_string(),
                quantity: 2,
            }],
            discount_centavos: 0,
        };
        assert!(validate_sale_draft(&sale).is_ok());

        let empty = SaleDraft {
            lines: vec![],
            discount_centavos: 0,
        };
        assert_eq!(validate_sale_draft(&empty), Err(ValidationError::EmptySale));
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(500, 8500).is_ok());
        assert!(validate_discount(8500, 8500).is_ok());
        assert!(validate_discount(9000, 8500).is_err());
    }
}
