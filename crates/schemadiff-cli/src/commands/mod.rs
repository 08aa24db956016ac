pub mod compare;
pub mod kinds;
