pub mod models;
pub mod errors;
pub mod i18n;
pub mod links;
pub mod letter;

pub use models::*;
pub use errors::*;
pub use i18n::*;
pub use links::*;
pub use letter::*;
