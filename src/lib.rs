// Reusable library API — visible to both CLI and WASM builds
pub mod errors;
pub mod grid;
pub mod log;
pub mod matrix;
pub mod placement;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use matrix::{Cell, Clue, Matrix};
pub use placement::{generate, layout, Layout};
