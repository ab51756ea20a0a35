use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names as they appear on the wire and in the durable document.
pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_SPECIES: &str = "species";
pub const FIELD_DIET: &str = "diet";
pub const FIELD_TRAITS: &str = "personalityTraits";

/// One stored animal record.
///
/// Fields beyond the five known ones are kept in `extra` and written back
/// unchanged, so a document edited by hand survives a round trip through
/// the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub diet: String,
    #[serde(rename = "personalityTraits")]
    pub personality_traits: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Animal {
    /// True when every trait in `traits` appears in this record's traits.
    pub fn has_traits<S: AsRef<str>>(&self, traits: &[S]) -> bool {
        traits
            .iter()
            .all(|t| self.personality_traits.iter().any(|own| own == t.as_ref()))
    }
}

/// A candidate record that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
    pub extra: Map<String, Value>,
}

impl NewAnimal {
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        diet: impl Into<String>,
        personality_traits: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            diet: diet.into(),
            personality_traits,
            extra: Map::new(),
        }
    }

    /// Build a candidate from a request body.
    ///
    /// Returns `None` unless the body satisfies
    /// [`validate_animal`](crate::validate_animal). Trait elements that are
    /// not strings are coerced to their JSON text. A caller-supplied `id` is
    /// discarded; the store assigns one on append.
    pub fn from_value(body: &Value) -> Option<Self> {
        if !crate::validate_animal(body) {
            return None;
        }
        let obj = body.as_object()?;

        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_owned);
        let personality_traits = obj
            .get(FIELD_TRAITS)
            .and_then(Value::as_array)?
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        let extra = obj
            .iter()
            .filter(|(k, _)| {
                !matches!(
                    k.as_str(),
                    FIELD_ID | FIELD_NAME | FIELD_SPECIES | FIELD_DIET | FIELD_TRAITS
                )
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Some(Self {
            name: text(FIELD_NAME)?,
            species: text(FIELD_SPECIES)?,
            diet: text(FIELD_DIET)?,
            personality_traits,
            extra,
        })
    }

    pub(crate) fn with_id(self, id: String) -> Animal {
        Animal {
            id,
            name: self.name,
            species: self.species,
            diet: self.diet,
            personality_traits: self.personality_traits,
            extra: self.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_traits_in_camel_case() {
        let animal = NewAnimal::new("Rex", "dog", "omnivore", vec!["loyal".into()])
            .with_id("0".into());
        let value = serde_json::to_value(&animal).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "0",
                "name": "Rex",
                "species": "dog",
                "diet": "omnivore",
                "personalityTraits": ["loyal"]
            })
        );
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let raw = json!({
            "id": "3",
            "name": "Erica",
            "species": "gorilla",
            "diet": "omnivore",
            "personalityTraits": ["quirky"],
            "habitat": "forest"
        });
        let animal: Animal = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(animal.extra.get("habitat"), Some(&json!("forest")));
        assert_eq!(serde_json::to_value(&animal).unwrap(), raw);
    }

    #[test]
    fn from_value_drops_supplied_id_and_coerces_traits() {
        let body = json!({
            "id": "99",
            "name": "Owl",
            "species": "owl",
            "diet": "carnivore",
            "personalityTraits": ["wise", 7, true],
            "nocturnal": true
        });
        let candidate = NewAnimal::from_value(&body).unwrap();
        assert_eq!(candidate.personality_traits, vec!["wise", "7", "true"]);
        assert!(!candidate.extra.contains_key("id"));
        assert_eq!(candidate.extra.get("nocturnal"), Some(&json!(true)));
    }

    #[test]
    fn from_value_rejects_invalid_body() {
        let body = json!({"name": "Owl", "species": "owl", "diet": "carnivore"});
        assert!(NewAnimal::from_value(&body).is_none());
    }

    #[test]
    fn has_traits_requires_every_trait() {
        let animal = NewAnimal::new("Lion", "lion", "carnivore", vec!["fierce".into(), "proud".into()])
            .with_id("0".into());
        assert!(animal.has_traits(&["fierce"]));
        assert!(animal.has_traits(&["proud", "fierce"]));
        assert!(!animal.has_traits(&["fierce", "shy"]));
        assert!(animal.has_traits::<&str>(&[]));
    }
}
