/// CSS-style timing curves.
pub mod ease;
