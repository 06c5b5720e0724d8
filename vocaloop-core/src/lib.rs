pub mod backend;
pub mod errors;
pub mod models;
pub mod quiz;
pub mod selector;
pub mod session;
pub mod stats;

pub use backend::*;
pub use errors::*;
pub use models::*;
pub use quiz::*;
pub use selector::*;
pub use session::*;
pub use stats::*;
