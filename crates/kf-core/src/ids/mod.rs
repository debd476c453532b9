//! ID type wrappers for type safety.

pub mod id_macro;
pub mod login_id;

pub use login_id::LoginId;
