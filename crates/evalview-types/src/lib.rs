pub mod document;
pub mod record;
pub mod status;

pub use document::*;
pub use record::*;
pub use status::*;
