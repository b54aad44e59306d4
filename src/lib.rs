//! Public library API for generating C++ accessor and header-guard boilerplate.

/// Declaration parsing, type classification, accessor and guard generation.
pub mod cpp;
