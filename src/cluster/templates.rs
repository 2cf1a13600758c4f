//! Subtopic idea templates
//!
//! Three fixed template lists keyed by content archetype. Unknown archetype
//! names fall back to the guide list.

const GUIDE_TEMPLATES: &[&str] = &[
    "What is {topic}",
    "How to {topic}",
    "{topic} for beginners",
    "{topic} best practices",
    "{topic} tips and tricks",
    "{topic} tools and resources",
    "{topic} examples",
    "{topic} mistakes to avoid",
    "{topic} checklist",
    "{topic} step by step guide",
];

const PRODUCT_TEMPLATES: &[&str] = &[
    "Best {topic}",
    "{topic} reviews",
    "{topic} comparison",
    "{topic} pricing",
    "{topic} features",
    "{topic} alternatives",
    "How to choose {topic}",
    "{topic} for small business",
    "{topic} for enterprise",
    "{topic} vs competitors",
];

const SERVICE_TEMPLATES: &[&str] = &[
    "{topic} services",
    "{topic} cost",
    "How to hire {topic}",
    "{topic} benefits",
    "{topic} process",
    "{topic} case studies",
    "{topic} ROI",
    "{topic} consultant",
    "{topic} agency",
    "DIY {topic} vs professional",
];

/// Template list for an archetype name; unknown names use the guide list.
pub fn templates_for(template_type: &str) -> &'static [&'static str] {
    match template_type {
        "guide" => GUIDE_TEMPLATES,
        "product" => PRODUCT_TEMPLATES,
        "service" => SERVICE_TEMPLATES,
        _ => GUIDE_TEMPLATES,
    }
}

/// Generate up to `count` cluster titles by substituting the topic into
/// each template. Never wraps around: at most one idea per template.
pub fn cluster_ideas(topic: &str, template_type: &str, count: usize) -> Vec<String> {
    templates_for(template_type)
        .iter()
        .take(count)
        .map(|t| t.replace("{topic}", topic))
        .collect()
}
