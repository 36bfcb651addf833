//! Business-health scorecard library.
//!
//! Consultants and client businesses file monthly scorecards; the
//! deterministic engine in [`scorecards::scoring`] turns those inputs into
//! a 0-100 composite score, a red/amber/green status, and a trend against
//! the previous period. The surrounding modules provide the service
//! facade, storage and alerting seams, portfolio rollups, and the HTTP
//! router that the API binary mounts.

pub mod config;
pub mod error;
pub mod scorecards;
pub mod telemetry;
