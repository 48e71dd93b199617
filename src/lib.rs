//! Purpose: Blocking client library for the Pastebiner paste-hosting API.
//! Exports: `api` (client, options, parsed values, errors).
//! Role: Thin request/response mapping layer over the service's HTTP API.
//! Invariants: The service signals failure through exact plain-text
//! sentinels on 200 responses; classification reproduces that verbatim.
//! Invariants: No state is persisted outside process memory.
pub mod api;
pub mod core;
