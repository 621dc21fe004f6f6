use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One category definition: a label, its presentation tokens, and the
/// keywords that vote for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: String,
    pub emoji: String,
    pub color: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: &str, emoji: &str, color: &str, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    #[error("rule #{index} has an empty category label")]
    EmptyCategory { index: usize },
    #[error("duplicate category label: {0}")]
    DuplicateCategory(String),
    #[error("rule '{category}' has a blank keyword")]
    BlankKeyword { category: String },
    #[error("fallback rule '{0}' must not carry keywords")]
    FallbackHasKeywords(String),
    #[error("failed to read rule table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rule table YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Ordered rule list plus the fallback used when nothing scores.
///
/// The fallback is kept out of `rules` so a scan over the substantive rules
/// can never pick it ahead of a real category.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
    #[serde(rename = "default")]
    fallback: CategoryRule,
}

/// On-disk shape of a substitute rule table.
#[derive(Debug, Deserialize)]
struct RuleTableFile {
    rules: Vec<CategoryRule>,
    #[serde(default)]
    default: Option<CategoryRule>,
}

impl RuleTable {
    /// Build a validated table.
    pub fn new(rules: Vec<CategoryRule>, fallback: CategoryRule) -> Result<Self, RuleTableError> {
        let mut seen = HashSet::new();
        for (index, rule) in rules.iter().enumerate() {
            if rule.category.trim().is_empty() {
                return Err(RuleTableError::EmptyCategory { index });
            }
            if !seen.insert(rule.category.as_str()) {
                return Err(RuleTableError::DuplicateCategory(rule.category.clone()));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(RuleTableError::BlankKeyword {
                    category: rule.category.clone(),
                });
            }
        }
        if fallback.category.trim().is_empty() {
            return Err(RuleTableError::EmptyCategory { index: rules.len() });
        }
        if seen.contains(fallback.category.as_str()) {
            return Err(RuleTableError::DuplicateCategory(fallback.category));
        }
        if !fallback.keywords.is_empty() {
            return Err(RuleTableError::FallbackHasKeywords(fallback.category));
        }
        Ok(Self { rules, fallback })
    }

    /// Parse a table from YAML. A missing `default` uses the built-in fallback.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleTableError> {
        let file: RuleTableFile = serde_yaml::from_str(yaml)?;
        let fallback = file.default.unwrap_or_else(default_rule);
        Self::new(file.rules, fallback)
    }

    /// Read and parse a YAML rule table from disk.
    pub fn load(path: &Path) -> Result<Self, RuleTableError> {
        let content = std::fs::read_to_string(path).map_err(|source| RuleTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Substantive rules, in priority order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &CategoryRule {
        &self.fallback
    }

    /// Every rule including the fallback, which always comes last.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }

    /// The shipped rule table.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            fallback: default_rule(),
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn default_rule() -> CategoryRule {
    CategoryRule::new("General Discussion", "💬", "gray-500", &[])
}

fn builtin_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "Pricing Strategy",
            "💰",
            "accent-primary",
            &[
                "price", "pricing", "cost", "charge", "fee", "subscription", "tier", "plan",
                "revenue", "monetize", "monetization", "freemium", "discount", "coupon", "ltv",
                "cac", "margin", "value-based",
            ],
        ),
        CategoryRule::new(
            "Competitor Analysis",
            "🔍",
            "accent-secondary",
            &[
                "competitor", "competition", "rival", "market", "benchmark", "compare",
                "comparison", "industry", "landscape", "analyze", "analysis", "similarweb", "g2",
                "capterra", "positioning", "differentiati",
            ],
        ),
        CategoryRule::new(
            "Sales & Growth",
            "📈",
            "accent-gold",
            &[
                "sales", "sell", "selling", "growth", "pipeline", "lead", "funnel", "conversion",
                "close", "deal", "outreach", "prospect", "quota", "revenue", "arr", "mrr",
                "churn", "retention", "upsell",
            ],
        ),
        CategoryRule::new(
            "Team Building",
            "👥",
            "blue-500",
            &[
                "hire", "hiring", "team", "staff", "employee", "headcount", "role",
                "account executive", "sdr", "vp", "manager", "founder", "recruit", "onboard",
                "culture", "organization", "structure", "talent",
            ],
        ),
        CategoryRule::new(
            "Product Strategy",
            "🚀",
            "purple-500",
            &[
                "product", "feature", "roadmap", "launch", "mvp", "iteration", "feedback", "user",
                "customer", "experience", "ux", "design", "build", "develop", "release",
                "sprint", "agile",
            ],
        ),
        CategoryRule::new(
            "Marketing",
            "📣",
            "pink-500",
            &[
                "market", "marketing", "brand", "content", "seo", "ads", "campaign", "social",
                "email", "newsletter", "traffic", "acquisition", "awareness", "inbound",
                "outbound", "landing page", "copy", "messaging",
            ],
        ),
        CategoryRule::new(
            "Free Trial & Onboarding",
            "🎯",
            "teal-500",
            &[
                "free trial", "trial", "freemium", "onboard", "onboarding", "signup", "demo",
                "credit card", "activation", "setup", "getting started",
            ],
        ),
        CategoryRule::new(
            "Customer Success",
            "⭐",
            "yellow-500",
            &[
                "customer success", "support", "satisfaction", "nps", "review", "churn",
                "retain", "retention", "renewal", "account management", "feedback", "complaint",
                "escalation",
            ],
        ),
    ]
}
