pub mod nav;

pub use nav::{Navigator, Selection, alphabetical};
