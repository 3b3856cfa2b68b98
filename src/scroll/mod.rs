pub mod pin;
pub mod scrub;
pub mod trigger;
