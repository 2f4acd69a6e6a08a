//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_PRAGMA_CONSISTENCY: &str = "pragma.consistency";

// Codes: pragma.consistency
pub const CODE_INCOMPATIBLE_IMPORT: &str = "incompatible_import";
pub const CODE_UNSATISFIABLE_PRAGMA: &str = "unsatisfiable_pragma";
