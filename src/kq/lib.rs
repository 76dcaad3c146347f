//! # kq Architecture
//!
//! kq is a fuzzy convenience layer over kubectl: short positional commands
//! are resolved against live cluster state and dispatched to kubectl. The
//! library is UI-agnostic; the `kq` binary is just one client of it.
//!
//! ## The layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI layer (main.rs, args.rs, router.rs — the binary)        │
//! │  - Parses the token vector, routes to a handler              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API layer (api.rs)                                          │
//! │  - Thin facade over commands, generic over the gateway       │
//! │  - Returns structured Result types                           │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                               │
//! │  - Fuzzy resolution and disambiguation policy                │
//! │  - Returns CmdResult values, no I/O assumptions              │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Gateway layer (gateway/)                                    │
//! │  - Abstract ClusterGateway trait                             │
//! │  - KubectlGateway (production), StaticGateway (testing)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: every outcome is a value
//!
//! Resolution produces a [`fuzzy::ResolutionVerdict`]; commands turn it into
//! a [`commands::CmdResult`] of messages, listings and an optional dispatch
//! action. From `api.rs` inward, code never writes to stdout/stderr, never
//! calls `std::process::exit`, and never assumes a terminal. "No match" and
//! "ambiguous" are values, not early exits.
//!
//! ## State
//!
//! There is none. Every invocation re-fetches cluster state through the
//! gateway, and nothing is cached or written back.
//!
//! ## Module overview
//!
//! - [`api`]: The API facade used by the binary
//! - [`commands`]: One module per operation
//! - [`fuzzy`]: Canonicalization, matching and the verdict policy
//! - [`gateway`]: kubectl boundary and its test double
//! - [`model`]: Pod and deployment records
//! - [`render`]: Tagged spans and highlight rendering
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod fuzzy;
pub mod gateway;
pub mod model;
pub mod render;
