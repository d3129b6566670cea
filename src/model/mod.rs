pub mod element;
pub mod table;

pub use element::ElementRecord;
pub use table::{ElementTable, ELEMENT_COUNT};
