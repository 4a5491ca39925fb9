//! Prompt Builder — turns a business profile into one section's instruction.
//!
//! Every prompt is the shared business-info block followed by a section
//! template: a heading, a numbered list of sub-topics and a `Format:` line.

use crate::analysis::models::{render_field, BusinessProfile};
use crate::analysis::sections::PromptType;

const CURRENT_PERFORMANCE: &str = "\
Generate a CURRENT PERFORMANCE ANALYSIS focusing on:
1. Current operational metrics and KPIs
2. Revenue performance and trends
3. Market position and customer base
4. Operational strengths and weaknesses
5. Key performance indicators
Format: Use bullet points, be specific and data-driven.";

const SWOT: &str = "\
Generate a COMPREHENSIVE SWOT ANALYSIS with:
1. STRENGTHS - Internal positive factors
2. WEAKNESSES - Internal areas for improvement
3. OPPORTUNITIES - External positive factors
4. THREATS - External challenges
Format: Clear sections with bullet points under each category.";

const GROWTH_OPPORTUNITIES: &str = "\
Generate GROWTH OPPORTUNITIES ANALYSIS focusing on:
1. Market expansion opportunities
2. Product/service diversification
3. New customer segments
4. Geographic expansion potential
5. Strategic partnerships
Format: Prioritized list with implementation feasibility.";

const RISK: &str = "\
Generate RISK ASSESSMENT focusing on:
1. Market risks
2. Operational risks
3. Financial risks
4. Competitive risks
5. Regulatory risks
6. Mitigation strategies for each risk
Format: Risk matrix with probability and impact assessment.";

const OPERATIONAL: &str = "\
Generate OPERATIONAL EFFICIENCY ANALYSIS focusing on:
1. Process optimization opportunities
2. Cost reduction strategies
3. Productivity improvements
4. Automation potential
5. Supply chain optimization
Format: Actionable recommendations with expected ROI.";

const FINANCIAL: &str = "\
Generate FINANCIAL HEALTH ANALYSIS focusing on:
1. Revenue analysis and projections
2. Cost structure optimization
3. Profitability metrics
4. Cash flow management
5. Investment recommendations
6. Financial KPIs to track
Format: Financial metrics with specific targets.";

const MARKETING: &str = "\
Generate MARKETING STRATEGY ANALYSIS focusing on:
1. Target audience segmentation
2. Channel optimization
3. Campaign recommendations
4. Budget allocation
5. ROI measurement
6. Digital marketing strategy
Format: Specific actionable marketing plan.";

const COMPETITIVE: &str = "\
Generate COMPETITIVE ANALYSIS focusing on:
1. Main competitors analysis
2. Competitive positioning
3. Market share analysis
4. Competitive advantages
5. Pricing strategy recommendations
Format: Comparative analysis with recommendations.";

const CUSTOMER: &str = "\
Generate CUSTOMER ANALYSIS focusing on:
1. Customer segmentation
2. Customer journey mapping
3. Retention strategies
4. Customer lifetime value
5. Feedback implementation
6. Customer service improvements
Format: Customer-centric recommendations.";

const TECHNOLOGY: &str = "\
Generate TECHNOLOGY ASSESSMENT focusing on:
1. Current tech stack evaluation
2. Technology gaps
3. Digital transformation opportunities
4. Software recommendations
5. Automation opportunities
6. IT infrastructure improvements
Format: Technology roadmap with priorities.";

const TEAM: &str = "\
Generate TEAM OPTIMIZATION ANALYSIS focusing on:
1. Organizational structure
2. Skill gap analysis
3. Training recommendations
4. Performance management
5. Talent acquisition strategy
6. Employee engagement
Format: HR and organizational recommendations.";

const EXPANSION: &str = "\
Generate EXPANSION STRATEGY focusing on:
1. Market entry strategies
2. Scaling operations
3. Resource planning
4. Timeline for expansion
5. Risk assessment for expansion
6. Success metrics for expansion
Format: Phase-wise expansion plan.";

/// Section-specific part of the prompt.
pub fn section_template(prompt_type: PromptType) -> &'static str {
    match prompt_type {
        PromptType::CurrentPerformance => CURRENT_PERFORMANCE,
        PromptType::Swot => SWOT,
        PromptType::GrowthOpportunities => GROWTH_OPPORTUNITIES,
        PromptType::Risk => RISK,
        PromptType::Operational => OPERATIONAL,
        PromptType::Financial => FINANCIAL,
        PromptType::Marketing => MARKETING,
        PromptType::Competitive => COMPETITIVE,
        PromptType::Customer => CUSTOMER,
        PromptType::Technology => TECHNOLOGY,
        PromptType::Team => TEAM,
        PromptType::Expansion => EXPANSION,
    }
}

/// The business-info block shared by every section prompt.
pub fn base_info(profile: &BusinessProfile) -> String {
    format!(
        "\nBusiness Name: {}\nIndustry: {}\nYears in Operation: {}\nAnnual Revenue: {}\nTeam Size: {}\nTarget Market: {}\nCurrent Challenges: {}\nGrowth Goals: {}\nMarketing Channels: {}\nCustomer Feedback Status: {}\n",
        render_field(&profile.business_name),
        render_field(&profile.industry),
        render_field(&profile.years_in_operation),
        render_field(&profile.annual_revenue),
        render_field(&profile.team_size),
        render_field(&profile.target_market),
        render_field(&profile.current_challenges),
        render_field(&profile.growth_goals),
        render_field(&profile.marketing_channels),
        render_field(&profile.customer_feedback),
    )
}

pub fn build_section_prompt(profile: &BusinessProfile, prompt_type: PromptType) -> String {
    format!(
        "\n{}\n{}\n",
        base_info(profile),
        section_template(prompt_type)
    )
}

/// Builds a prompt from a textual prompt-type id. Unknown ids get the
/// current-performance template.
#[cfg(test)]
pub fn build_prompt(profile: &BusinessProfile, prompt_type_id: &str) -> String {
    let prompt_type = PromptType::from_id(prompt_type_id).unwrap_or(PromptType::CurrentPerformance);
    build_section_prompt(profile, prompt_type)
}
