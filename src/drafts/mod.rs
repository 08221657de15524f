//! Draft autosave: the bounded store and the debounce timer that drives it

pub mod debounce;
pub mod store;

pub use debounce::Debouncer;
pub use store::DraftStore;
