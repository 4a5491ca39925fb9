//! The fixed table of twelve analysis sections.
//!
//! Order matters: it is the order prompts are dispatched in and the order keys
//! appear in the response object.

/// Identifies which prompt template a section uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptType {
    CurrentPerformance,
    Swot,
    GrowthOpportunities,
    Risk,
    Operational,
    Financial,
    Marketing,
    Competitive,
    Customer,
    Technology,
    Team,
    Expansion,
}

impl PromptType {
    #[cfg(test)]
    pub const ALL: [PromptType; 12] = [
        PromptType::CurrentPerformance,
        PromptType::Swot,
        PromptType::GrowthOpportunities,
        PromptType::Risk,
        PromptType::Operational,
        PromptType::Financial,
        PromptType::Marketing,
        PromptType::Competitive,
        PromptType::Customer,
        PromptType::Technology,
        PromptType::Team,
        PromptType::Expansion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PromptType::CurrentPerformance => "currentPerformance",
            PromptType::Swot => "swot",
            PromptType::GrowthOpportunities => "growthOpportunities",
            PromptType::Risk => "risk",
            PromptType::Operational => "operational",
            PromptType::Financial => "financial",
            PromptType::Marketing => "marketing",
            PromptType::Competitive => "competitive",
            PromptType::Customer => "customer",
            PromptType::Technology => "technology",
            PromptType::Team => "team",
            PromptType::Expansion => "expansion",
        }
    }

    /// Exact, case-sensitive lookup by identifier.
    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == id)
    }
}

/// One row of the section table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Key used in the response `analysis` object.
    pub key: &'static str,
    /// Human-readable title used in the system prompt, logs and fallback text.
    pub title: &'static str,
    pub prompt_type: PromptType,
}

const fn section(key: &'static str, title: &'static str, prompt_type: PromptType) -> SectionSpec {
    SectionSpec {
        key,
        title,
        prompt_type,
    }
}

pub static SECTIONS: [SectionSpec; 12] = [
    section(
        "executiveSummary",
        "Current Performance Analysis",
        PromptType::CurrentPerformance,
    ),
    section("swotAnalysis", "SWOT Analysis", PromptType::Swot),
    section(
        "growthStrategy",
        "Growth Opportunities",
        PromptType::GrowthOpportunities,
    ),
    section("riskAssessment", "Risk Assessment", PromptType::Risk),
    section(
        "implementationTimeline",
        "Operational Efficiency",
        PromptType::Operational,
    ),
    section(
        "financialRecommendations",
        "Financial Health",
        PromptType::Financial,
    ),
    section("marketingPlan", "Marketing Strategy", PromptType::Marketing),
    section(
        "marketAnalysis",
        "Competitive Analysis",
        PromptType::Competitive,
    ),
    section("customerAnalysis", "Customer Analysis", PromptType::Customer),
    section(
        "technologyAssessment",
        "Technology Assessment",
        PromptType::Technology,
    ),
    section("teamOptimization", "Team Optimization", PromptType::Team),
    section(
        "expansionStrategy",
        "Expansion Strategy",
        PromptType::Expansion,
    ),
];

/// Looks up a section by its response key.
#[cfg(test)]
pub fn find_section(key: &str) -> Option<&'static SectionSpec> {
    SECTIONS.iter().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_twelve_unique_keys_and_prompt_types() {
        let keys: HashSet<_> = SECTIONS.iter().map(|s| s.key).collect();
        let types: HashSet<_> = SECTIONS.iter().map(|s| s.prompt_type).collect();
        assert_eq!(keys.len(), 12);
        assert_eq!(types.len(), 12, "each section uses its own template");
    }

    #[test]
    fn test_section_order_is_fixed() {
        assert_eq!(SECTIONS[0].key, "executiveSummary");
        assert_eq!(SECTIONS[1].key, "swotAnalysis");
        assert_eq!(SECTIONS[4].title, "Operational Efficiency");
        assert_eq!(SECTIONS[11].key, "expansionStrategy");
    }

    #[test]
    fn test_prompt_type_ids_round_trip() {
        for prompt_type in PromptType::ALL {
            assert_eq!(PromptType::from_id(prompt_type.as_str()), Some(prompt_type));
        }
        assert_eq!(PromptType::from_id("SWOT"), None);
        assert_eq!(PromptType::from_id(""), None);
    }

    #[test]
    fn test_find_section() {
        let swot = find_section("swotAnalysis").unwrap();
        assert_eq!(swot.title, "SWOT Analysis");
        assert_eq!(swot.prompt_type, PromptType::Swot);
        assert!(find_section("unknown").is_none());
    }
}
