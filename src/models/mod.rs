pub mod film;
pub mod movie;
