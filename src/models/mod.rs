pub mod error;
pub mod lookup;
pub mod weather;
