pub mod envelope;
pub mod record;
pub mod target;

pub use envelope::{ListingResponse, ListingResult};
pub use record::{ImageKind, ImageRecord};
pub use target::Target;
