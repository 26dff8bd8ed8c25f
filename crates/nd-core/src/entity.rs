use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::provider::NameProvider;

/// A thing that has a display name.
///
/// The name is stored verbatim: empty and non-ASCII names are as valid as
/// any other, and nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEntity {
    name: String,
}

impl NamedEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NameProvider for NamedEntity {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Display for NamedEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_name_returns_constructor_input() {
        for name in ["chinese", "", "中文", "名前 with spaces\tand tabs", "🦀"] {
            let entity = NamedEntity::new(name);
            assert_eq!(entity.get_name(), name);
            assert_eq!(entity.to_string(), name);
        }
    }

    #[test]
    fn entity_round_trips_through_serde() {
        let entity = NamedEntity::new("chinese");
        let json = serde_json::to_string(&entity).unwrap();
        assert_eq!(json, r#"{"name":"chinese"}"#);
        let back: NamedEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entity);
    }
}
