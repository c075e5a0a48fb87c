use serde::{Deserialize, Serialize};

/// A single artist record as stored in the external collection.
///
/// Field spellings follow the store's documents (`_id`, `yearsActive`), so
/// a record round-trips through the wire format unchanged. The collection
/// itself is externally owned; instances of this type only ever exist as
/// transient query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(rename = "yearsActive")]
    pub years_active: u32,
}

impl Artist {
    pub fn new(id: &str, name: &str, age: u32, years_active: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            age,
            years_active,
        }
    }
}
