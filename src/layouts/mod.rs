pub mod default;
pub mod guard;
pub mod no_navbar;
pub mod shell;
