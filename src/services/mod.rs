pub mod lookup;
pub mod wttr_api;
