pub mod clients;
pub mod events;
pub mod sync;
