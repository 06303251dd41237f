//! Shared test utilities for the portal-kit workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`package`]: [`TestPackage`](package::TestPackage), a temporary
//!   directory holding a `package.json`

pub mod package;
