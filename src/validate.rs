//! Shape checks for candidate records arriving from callers.
//!
//! Only the four caller-supplied fields are checked. `id` is assigned by the
//! store and trait element types are not inspected.

use serde_json::Value;

use crate::animal::{FIELD_DIET, FIELD_NAME, FIELD_SPECIES, FIELD_TRAITS};

/// Returns true when `candidate` can be stored as an animal.
///
/// `name`, `species` and `diet` must be non-empty strings and
/// `personalityTraits` must be an array (possibly empty).
pub fn validate_animal(candidate: &Value) -> bool {
    let Some(obj) = candidate.as_object() else {
        return false;
    };

    let non_empty_str = |key: &str| matches!(obj.get(key), Some(Value::String(s)) if !s.is_empty());

    non_empty_str(FIELD_NAME)
        && non_empty_str(FIELD_SPECIES)
        && non_empty_str(FIELD_DIET)
        && obj.get(FIELD_TRAITS).is_some_and(Value::is_array)
}
