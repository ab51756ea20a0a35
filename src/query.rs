//! Attribute filtering and id lookup over an animal collection.
//!
//! Filtering is a pure boolean predicate: each recognized criterion narrows
//! the result and all of them must hold (logical AND). Input order is kept,
//! the input is never mutated, and there is no ranking or pagination.
//!
//! Criteria are built from untyped caller input, so construction never
//! fails: unknown keys are dropped and empty values are dropped.

use crate::animal::{Animal, FIELD_DIET, FIELD_NAME, FIELD_SPECIES, FIELD_TRAITS};

/// Bracketed alias accepted for repeated trait parameters.
const FIELD_TRAITS_BRACKETED: &str = "personalityTraits[]";

/// Field-value constraints for [`filter_by_query`].
///
/// Each trait is a separate constraint. `diet`, `species` and `name` take a
/// single value; supplying one of them more than once matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub personality_traits: Vec<String>,
    pub diet: Vec<String>,
    pub species: Vec<String>,
    pub name: Vec<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trait(mut self, value: impl Into<String>) -> Self {
        self.push(FIELD_TRAITS, value.into());
        self
    }

    pub fn with_diet(mut self, value: impl Into<String>) -> Self {
        self.push(FIELD_DIET, value.into());
        self
    }

    pub fn with_species(mut self, value: impl Into<String>) -> Self {
        self.push(FIELD_SPECIES, value.into());
        self
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.push(FIELD_NAME, value.into());
        self
    }

    /// Build criteria from raw query-string pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            criteria.push(key.as_ref(), value.into());
        }
        criteria
    }

    /// True when no recognized criterion is present.
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_empty()
            && self.species.is_empty()
            && self.name.is_empty()
    }

    /// Whether `animal` satisfies every criterion.
    pub fn matches(&self, animal: &Animal) -> bool {
        animal.has_traits(self.personality_traits.as_slice())
            && scalar_matches(&self.diet, &animal.diet)
            && scalar_matches(&self.species, &animal.species)
            && scalar_matches(&self.name, &animal.name)
    }

    fn push(&mut self, key: &str, value: String) {
        if value.is_empty() {
            return;
        }
        let slot = match key {
            FIELD_TRAITS | FIELD_TRAITS_BRACKETED => &mut self.personality_traits,
            FIELD_DIET => &mut self.diet,
            FIELD_SPECIES => &mut self.species,
            FIELD_NAME => &mut self.name,
            _ => return,
        };
        slot.push(value);
    }
}

/// An absent criterion passes, a single value must equal `field`, and a
/// repeated one never does.
fn scalar_matches(values: &[String], field: &str) -> bool {
    match values {
        [] => true,
        [only] => only == field,
        _ => false,
    }
}

/// Records in `animals` that satisfy all of `criteria`, in input order.
pub fn filter_by_query(criteria: &Criteria, animals: &[Animal]) -> Vec<Animal> {
    if criteria.is_empty() {
        return animals.to_vec();
    }
    animals
        .iter()
        .filter(|animal| criteria.matches(animal))
        .cloned()
        .collect()
}

/// First record whose id equals `id` exactly.
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|animal| animal.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::NewAnimal;

    fn animal(id: &str, name: &str, species: &str, diet: &str, traits: &[&str]) -> Animal {
        NewAnimal::new(
            name,
            species,
            diet,
            traits.iter().map(|t| t.to_string()).collect(),
        )
        .with_id(id.to_string())
    }

    fn zoo() -> Vec<Animal> {
        vec![
            animal("0", "Leo", "lion", "carnivore", &["brave", "proud"]),
            animal("1", "Dusty", "dog", "omnivore", &["loyal", "brave"]),
            animal("2", "Hoot", "owl", "carnivore", &["wise"]),
            animal("3", "Rex", "dog", "omnivore", &["loyal"]),
        ]
    }

    fn ids(animals: &[Animal]) -> Vec<&str> {
        animals.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let animals = zoo();
        assert_eq!(filter_by_query(&Criteria::new(), &animals), animals);
    }

    #[test]
    fn single_trait_filters_exact_token() {
        let animals = zoo();
        let hits = filter_by_query(&Criteria::new().with_trait("brave"), &animals);
        assert_eq!(ids(&hits), ["0", "1"]);

        let hits = filter_by_query(&Criteria::new().with_trait("Brave"), &animals);
        assert!(hits.is_empty());
    }

    #[test]
    fn multiple_traits_require_all() {
        let animals = zoo();
        let criteria = Criteria::new().with_trait("brave").with_trait("loyal");
        assert_eq!(ids(&filter_by_query(&criteria, &animals)), ["1"]);
    }

    #[test]
    fn fields_combine_with_and() {
        let animals = zoo();
        let criteria = Criteria::new().with_species("dog").with_trait("loyal");
        assert_eq!(ids(&filter_by_query(&criteria, &animals)), ["1", "3"]);

        let criteria = criteria.with_name("Rex");
        assert_eq!(ids(&filter_by_query(&criteria, &animals)), ["3"]);

        let criteria = Criteria::new().with_diet("carnivore").with_species("dog");
        assert!(filter_by_query(&criteria, &animals).is_empty());
    }

    #[test]
    fn diet_match_is_case_sensitive() {
        let animals = zoo();
        assert_eq!(
            ids(&filter_by_query(&Criteria::new().with_diet("carnivore"), &animals)),
            ["0", "2"]
        );
        assert!(filter_by_query(&Criteria::new().with_diet("Carnivore"), &animals).is_empty());
    }

    #[test]
    fn result_satisfies_predicates_and_keeps_order() {
        let animals = zoo();
        let criteria = Criteria::new().with_diet("omnivore");
        let hits = filter_by_query(&criteria, &animals);
        assert!(hits.iter().all(|a| criteria.matches(a)));
        let excluded = animals.iter().filter(|a| !hits.contains(a));
        assert!(excluded.into_iter().all(|a| !criteria.matches(a)));
        assert_eq!(ids(&hits), ["1", "3"]);
    }

    #[test]
    fn from_pairs_ignores_unknown_and_empty_keys() {
        let criteria = Criteria::from_pairs([
            ("color", "red"),
            ("diet", ""),
            ("personalityTraits", "brave"),
            ("personalityTraits[]", "loyal"),
        ]);
        assert_eq!(criteria.personality_traits, ["brave", "loyal"]);
        assert!(criteria.diet.is_empty());

        let unknown_only = Criteria::from_pairs([("sort", "name"), ("page", "2")]);
        assert!(unknown_only.is_empty());
    }

    #[test]
    fn repeated_scalar_key_matches_nothing() {
        let animals = zoo();
        let conflicting = Criteria::from_pairs([("diet", "carnivore"), ("diet", "omnivore")]);
        assert!(filter_by_query(&conflicting, &animals).is_empty());

        let duplicated = Criteria::from_pairs([("diet", "carnivore"), ("diet", "carnivore")]);
        assert!(filter_by_query(&duplicated, &animals).is_empty());

        let species_twice = Criteria::new().with_species("dog").with_species("dog");
        assert!(filter_by_query(&species_twice, &animals).is_empty());
    }

    #[test]
    fn repeated_trait_key_still_accumulates() {
        let animals = zoo();
        let criteria = Criteria::from_pairs([
            ("personalityTraits", "loyal"),
            ("personalityTraits", "loyal"),
        ]);
        assert_eq!(ids(&filter_by_query(&criteria, &animals)), ["1", "3"]);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let mut animals = zoo();
        assert_eq!(find_by_id("2", &animals).map(|a| a.name.as_str()), Some("Hoot"));
        assert!(find_by_id("9", &animals).is_none());
        assert!(find_by_id("2", &[]).is_none());

        animals.push(animal("2", "Shadow", "owl", "carnivore", &[]));
        assert_eq!(find_by_id("2", &animals).map(|a| a.name.as_str()), Some("Hoot"));
    }
}
