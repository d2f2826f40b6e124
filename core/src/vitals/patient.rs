use serde::{Deserialize, Serialize};

/// Static patient details shown alongside the vitals. The engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientContext {
    pub name: String,
    pub id: String,
    pub age: u32,
    pub status: String,
}

impl Default for PatientContext {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            id: "P-2024-001".into(),
            age: 45,
            status: "Stable".into(),
        }
    }
}
