//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list rows from props alone; state
//! reads and dispatches stay in the pages that own them.

pub mod person_row;
pub mod profile_card;
pub mod site_header;
