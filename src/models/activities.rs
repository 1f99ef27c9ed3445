use serde::{Deserialize, Serialize};

/// One extracurricular activity as shown on the sign-up page.
///
/// `max_participants` is descriptive only; signup never checks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
