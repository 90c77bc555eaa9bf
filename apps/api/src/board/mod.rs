// Board core: turns provider output into a stable, user-editable job board.
// Everything here is synchronous and free of I/O.

pub mod alias;
pub mod normalizer;
pub mod reconciler;
pub mod store;
