//! Client-side state model for the studio booking service.
//!
//! Everything a front end needs to drive the product: who is signed in
//! ([`auth::AuthSessionStore`]), where the user is allowed to go
//! ([`guard::RouteGuard`], [`navigator::Navigator`]), what the service holds
//! ([`directory::SessionDirectory`]) and whether the viewer is on a session's
//! roster ([`roster::RosterMembershipController`]). Views in [`views`] tie
//! these together through a shared [`context::AppContext`].

pub mod account;
pub mod affordance;
pub mod auth;
pub mod config;
pub mod context;
pub mod directory;
pub mod error;
pub mod guard;
pub mod http;
pub mod navigator;
pub mod notifier;
pub mod roster;
pub mod storage;
pub mod views;
