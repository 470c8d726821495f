use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of the subject being shown. Owned by the embedding page; the
/// widget never validates or normalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// The editable inputs of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::Name, ProfileField::Email, ProfileField::Bio];

    /// Key of the field in the user record (and the form input's `name`).
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Bio => "bio",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProfileField::Name),
            "email" => Ok(ProfileField::Email),
            "bio" => Ok(ProfileField::Bio),
            other => Err(format!("Unknown profile field: {}", other)),
        }
    }
}

/// A user record as returned by the users service.
///
/// The service owns the schema, so the record is kept as the JSON object it
/// arrived as. Fields the form does not know about (an `id`, timestamps, ...)
/// ride along untouched and are sent back on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord {
    fields: Map<String, Value>,
}

impl UserRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record holding the three profile fields.
    pub fn with_profile(
        name: impl Into<String>,
        email: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        let mut record = Self::new();
        record.set(ProfileField::Name, name);
        record.set(ProfileField::Email, email);
        record.set(ProfileField::Bio, bio);
        record
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Text shown in the input for `field`; missing and falsy values
    /// (`null`, `false`, `0`, `""`) read as "".
    pub fn text(&self, field: ProfileField) -> String {
        match self.fields.get(field.key()) {
            Some(value) if !is_truthy(value) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// Overwrites one field, leaving every other key as it was.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.fields
            .insert(field.key().to_string(), Value::String(value.into()));
    }

    /// Display name, or `None` when the record carries no usable name.
    pub fn display_name(&self) -> Option<String> {
        match self.fields.get(ProfileField::Name.key()) {
            Some(value) if is_truthy(value) => Some(self.text(ProfileField::Name)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let body = json!({"id": 7, "name": "Ada", "email": "ada@example.com", "bio": "", "role": "admin"});
        let record: UserRecord = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(record.text(ProfileField::Name), "Ada");
        assert_eq!(serde_json::to_value(&record).unwrap(), body);
    }

    #[test]
    fn test_missing_and_falsy_fields_read_as_empty() {
        let record: UserRecord = serde_json::from_value(json!({"email": null})).unwrap();

        assert_eq!(record.text(ProfileField::Email), "");
        assert_eq!(record.text(ProfileField::Bio), "");

        let record: UserRecord =
            serde_json::from_value(json!({"name": 0, "email": false, "bio": ""})).unwrap();
        for field in ProfileField::ALL {
            assert_eq!(record.text(field), "");
        }
        assert_eq!(record.display_name(), None);
    }

    #[test]
    fn test_truthy_non_string_values_render_as_json() {
        let record: UserRecord =
            serde_json::from_value(json!({"name": 7, "email": true})).unwrap();

        assert_eq!(record.text(ProfileField::Name), "7");
        assert_eq!(record.text(ProfileField::Email), "true");
        assert_eq!(record.display_name().as_deref(), Some("7"));
    }

    #[test]
    fn test_display_name_treats_falsy_values_as_absent() {
        for value in [json!(null), json!(""), json!(false), json!(0)] {
            let record: UserRecord = serde_json::from_value(json!({ "name": value })).unwrap();
            assert_eq!(record.display_name(), None);
        }

        let record = UserRecord::with_profile("Grace", "g@example.com", "");
        assert_eq!(record.display_name().as_deref(), Some("Grace"));
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("bio".parse::<ProfileField>(), Ok(ProfileField::Bio));
        assert!("avatar".parse::<ProfileField>().is_err());
    }

    #[test]
    fn test_numeric_user_id() {
        assert_eq!(UserId::from(42u64).as_str(), "42");
    }
}
