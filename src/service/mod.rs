//! UserService: one statement per persistence operation.

mod crud;
pub use crud::UserService;
