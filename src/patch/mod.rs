//! JSON patching that keeps comments and formatting intact
//!
//! - `pointer`: JSON pointer tokenizing
//! - `operation`: patch operations as they appear in a preset
//! - `document`: the comment-preserving document the operations apply to

pub mod document;
pub mod operation;
pub mod pointer;

pub use document::TolerantDocument;
pub use operation::PatchOperation;
