//! Domain logic for the Radd canned-replies service.
//!
//! Pure types and functions only: the bilingual field model, locale and
//! text-direction handling, the error taxonomy, role constants, and the
//! ownership/role authorization gate. No I/O lives in this crate.

pub mod authz;
pub mod bilingual;
pub mod error;
pub mod locale;
pub mod roles;
pub mod types;
