// Core modules implementing error modeling, sentinel classification,
// the syntax catalog, and XML decoding.
pub mod error;
pub mod sentinel;
pub mod syntax;
pub mod xml;
