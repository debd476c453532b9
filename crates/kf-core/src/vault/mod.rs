//! Vault domain models.
//!
//! Login records are produced and owned by the external sync engine; this
//! layer treats them as immutable input.

pub mod hostname;
pub mod login_record;

pub use hostname::normalize_hostname;
pub use login_record::LoginRecord;
