/// Accessor generation command shared by `getter`, `setter`, and `accessors`.
pub mod accessors;
/// Declaration inspection command.
pub mod decls;
/// Header include-guard command.
pub mod guard;
/// Shared CLI parsing and output helpers.
pub mod util;
