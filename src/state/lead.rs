//! Lead payload delivered to the form-processing endpoint

use serde::{Deserialize, Serialize};

/// Contact details captured from the signup form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
}
