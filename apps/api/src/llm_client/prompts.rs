// Shared prompt fragments for chat-completion calls.
// Section-specific templates live in analysis::prompts.

/// System prompt for a section analysis. Replace `{title}` before sending.
pub const ANALYST_SYSTEM_TEMPLATE: &str = "You are an expert business analyst specializing in {title}. \
Provide specific, actionable insights in clear business language. \
Use bullet points, avoid markdown formatting, focus on practical recommendations.";

/// Builds the analyst system prompt for one section title.
pub fn analyst_system_prompt(title: &str) -> String {
    ANALYST_SYSTEM_TEMPLATE.replace("{title}", title)
}
