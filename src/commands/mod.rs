pub mod crud;
pub mod join;
pub mod list;
pub mod shell_alias;
