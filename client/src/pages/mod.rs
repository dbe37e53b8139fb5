//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (store reads, mount-time
//! fetches) and delegates rendering details to `components`.

pub mod home;
