use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of a stored login, assigned by the sync engine's login storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoginId(String);

impl_id!(LoginId);
