//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  bazaar-core errors (this file)                                 │
//! │  ├── CoreError        - Catalog / cart / checkout failures      │
//! │  └── ValidationError  - Record field validation failures        │
//! │                                                                 │
//! │  CLI errors (apps/cli)                                          │
//! │  └── anyhow::Error    - Whatever the shell hits at the edges    │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → user-facing message        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field, raw value)
//! 3. Errors are enum variants, never String
//! 4. No core error is fatal to the process; every variant maps to a
//!    user-facing message the shell can print and move on from

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These are recoverable, user-visible outcomes. The shell catches them,
/// prints the message, and returns to the menu.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found by exact name in the catalog.
    ///
    /// ## When This Occurs
    /// - `add_to_cart` with a name that matches no catalog record
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The cart is empty, so there is nothing to view or check out.
    ///
    /// This is a distinct state, not an empty listing: viewing or
    /// checking out an empty cart performs no mutation at all.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Record field validation errors.
///
/// These occur while parsing one source row into a [`Product`]. A failed
/// row rejects that single record with a reported error; it never aborts
/// the rest of the load.
///
/// [`Product`]: crate::types::Product
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field could not be parsed.
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// The row does not have enough comma-delimited fields.
    #[error("row has {found} fields, expected at least {expected}")]
    MalformedRow { found: usize, expected: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
