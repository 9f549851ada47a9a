use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A company record as stored in the dataset.
///
/// Only `id`, `name`, and `industry` are interpreted. Every other field in the
/// source object lands in `details` and is serialized back unchanged.
/// Serialization always writes `id`, `name`, and `industry` first; the extra
/// fields follow in their source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Company {
    /// Builds a record with no extra fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            industry: industry.into(),
            details: Map::new(),
        }
    }

    /// Adds an extra field, replacing any previous value under the same key.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    /// Returns the search projection of this record.
    #[must_use]
    pub fn summary(&self) -> CompanySummary {
        CompanySummary::from(self)
    }
}

/// Search result projection: `id`, `name`, and `industry` only.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub industry: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.clone(),
            name: company.name.clone(),
            industry: company.industry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extra_fields_survive_a_parse_and_serialize() {
        let source = json!({
            "id": "7",
            "name": "Initech",
            "industry": "Software",
            "location": "Austin, TX",
            "employees": 1200,
            "founded_year": 1993,
            "description": null
        });

        let company: Company = serde_json::from_value(source.clone()).expect("record should parse");
        assert_eq!(company.id, "7");
        assert_eq!(company.detail("employees"), Some(&json!(1200)));
        assert_eq!(company.detail("description"), Some(&Value::Null));

        let back = serde_json::to_value(&company).expect("record should serialize");
        assert_eq!(back, source);
    }

    #[test]
    fn serialized_keys_lead_with_core_fields_then_source_order() {
        let source = r#"{
            "industry": "Software",
            "founded_year": 1993,
            "id": "7",
            "location": "Austin, TX",
            "name": "Initech",
            "employees": 1200
        }"#;

        let company: Company = serde_json::from_str(source).expect("record should parse");
        let value = serde_json::to_value(&company).expect("record should serialize");
        let object = value.as_object().expect("record should be an object");

        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["id", "name", "industry", "founded_year", "location", "employees"]
        );
    }

    #[test]
    fn summary_serializes_exactly_three_fields() {
        let company = Company::new("1", "Acme Corp", "Manufacturing")
            .with_detail("location", "Springfield");
        let value = serde_json::to_value(company.summary()).expect("summary should serialize");
        let object = value.as_object().expect("summary should be an object");

        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "name", "industry"]);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let source = json!({ "id": "1", "name": "Nameless Industry" });
        assert!(serde_json::from_value::<Company>(source).is_err());
    }
}
