//! Complete interactive programs built from the effect catalogs.
//!
//! These are library functions returning
//! [`Program`](crate::program::Program) values; callers supply an
//! environment (live or scripted) and interpret. Both flows loop by
//! re-invoking their own constructor from inside a continuation; the
//! trampoline keeps that safe for arbitrarily long sessions.

pub mod game;
pub mod menu;
