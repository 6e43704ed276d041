//! Fluent, immutable construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Compound selectors: type, id, class, attribute, pseudo-class,
//!     and pseudo-element fragments in fixed grammar order
//!   - Write-time cardinality and ordering validation with typed errors
//!   - Combination of two selectors with a combinator token
//!     ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Value-semantics chaining: every write returns a new builder, so
//!     a shared prefix can be reused for several derived selectors
//!
//! - **Box geometry** ([§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model))
//!   - `Rect` value type with derived area
//!
//! - **JSON round-trip helpers**
//!   - Compact and pretty serialization plus deserialization for any
//!     serde-enabled value, including builder state
//!
//! # Not Implemented
//!
//! - Parsing of arbitrary CSS selector text
//! - Selector matching against a DOM tree
//! - Validation of fragment value syntax (attribute operators,
//!   pseudo-class arguments) or of combinator token legality

/// Box geometry per [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model).
pub mod geometry;
/// JSON round-trip helpers over `serde_json`.
pub mod json;
/// Selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use geometry::Rect;
pub use json::{from_json, to_json, to_json_pretty};
pub use selector::{BuilderError, Category, SelectorBuilder};
