use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

/// Caller-supplied description of the business. Every field is optional and
/// unvalidated; values are kept as raw JSON so numeric form fields work too.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub business_name: Option<Value>,
    #[serde(default)]
    pub industry: Option<Value>,
    #[serde(default)]
    pub years_in_operation: Option<Value>,
    #[serde(default)]
    pub annual_revenue: Option<Value>,
    #[serde(default)]
    pub team_size: Option<Value>,
    #[serde(default)]
    pub target_market: Option<Value>,
    #[serde(default)]
    pub current_challenges: Option<Value>,
    #[serde(default)]
    pub growth_goals: Option<Value>,
    #[serde(default)]
    pub marketing_channels: Option<Value>,
    #[serde(default)]
    pub customer_feedback: Option<Value>,
}

impl BusinessProfile {
    /// Number of fields the caller actually supplied.
    pub fn provided_fields(&self) -> usize {
        [
            &self.business_name,
            &self.industry,
            &self.years_in_operation,
            &self.annual_revenue,
            &self.team_size,
            &self.target_market,
            &self.current_challenges,
            &self.growth_goals,
            &self.marketing_channels,
            &self.customer_feedback,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}

/// Renders one profile field for prompt interpolation. Missing values become
/// the literal `undefined`.
pub fn render_field(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => "undefined".to_string(),
        Some(v) => render_value(v),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Whole-valued floats print without a fraction (`12.0` as `12`), the way a
/// form client would show them.
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Whether a section's text came from the model or is the canned fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Generated,
    Fallback,
}

/// A finished, normalized section.
#[derive(Debug, Clone)]
pub struct SectionResult {
    pub key: &'static str,
    pub title: &'static str,
    pub source: ContentSource,
    pub text: String,
}

/// All twelve sections of one analysis. Serializes as `{ key: text, ... }` in
/// section order; `source` stays internal.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    sections: Vec<SectionResult>,
}

impl AnalysisResult {
    pub fn new(sections: Vec<SectionResult>) -> Self {
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&SectionResult> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn sections(&self) -> &[SectionResult] {
        &self.sections
    }

    pub fn fallback_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.source == ContentSource::Fallback)
            .count()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(section.key, &section.text)?;
        }
        map.end()
    }
}
