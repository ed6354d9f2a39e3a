//! Template copying
//!
//! - `operation`: operations to be performed for template entries
//! - `processor`: maps template entries to operations, rendering file contents

pub mod operation;
pub mod processor;
