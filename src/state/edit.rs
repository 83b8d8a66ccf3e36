/// Prompt-driven edit rules
///
/// An edit never touches pixels. The prompt is scanned for a handful of
/// keywords and, when one matches, an alternate key visual is returned
/// instead of the selection. Rules are checked in table order and the
/// first match wins.
use crate::kv::LogicalName;

/// How a rule compares its keyword against the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    Sensitive,
    Insensitive,
}

/// One keyword -> alternate visual mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRule {
    pub keyword: &'static str,
    pub case: CaseRule,
    pub target: LogicalName,
}

impl EditRule {
    /// Check whether the prompt mentions this rule's keyword
    pub fn matches(&self, prompt: &str) -> bool {
        match self.case {
            CaseRule::Sensitive => prompt.contains(self.keyword),
            CaseRule::Insensitive => prompt
                .to_lowercase()
                .contains(&self.keyword.to_lowercase()),
        }
    }
}

/// Edit rules in priority order
pub const EDIT_RULES: [EditRule; 3] = [
    // Sports: "soccer"
    EditRule {
        keyword: "축구",
        case: CaseRule::Sensitive,
        target: LogicalName::Kv4,
    },
    // Social media: "Insta"
    EditRule {
        keyword: "인스타",
        case: CaseRule::Sensitive,
        target: LogicalName::Kv5,
    },
    // Brand
    EditRule {
        keyword: "LG",
        case: CaseRule::Insensitive,
        target: LogicalName::Kv6,
    },
];

/// Pick the alternate visual for a prompt, if any rule matches
pub fn target_for_prompt(prompt: &str) -> Option<LogicalName> {
    target_with_rules(&EDIT_RULES, prompt)
}

/// First-match-wins evaluation over an arbitrary rule table
pub fn target_with_rules(rules: &[EditRule], prompt: &str) -> Option<LogicalName> {
    rules
        .iter()
        .find(|rule| rule.matches(prompt))
        .map(|rule| rule.target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keyword_means_no_override() {
        assert_eq!(target_for_prompt(""), None);
        assert_eq!(target_for_prompt("배경 톤을 약간 따뜻하게"), None);
        assert_eq!(target_for_prompt("warmer background, sans-serif text"), None);
    }

    #[test]
    fn test_each_keyword_selects_its_alternate() {
        assert_eq!(target_for_prompt("축구 경기장 느낌으로"), Some(LogicalName::Kv4));
        assert_eq!(target_for_prompt("인스타 감성으로"), Some(LogicalName::Kv5));
        assert_eq!(target_for_prompt("LG 로고를 크게"), Some(LogicalName::Kv6));
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(target_for_prompt("인스타용 축구 이미지"), Some(LogicalName::Kv4));
        assert_eq!(target_for_prompt("LG 인스타 피드"), Some(LogicalName::Kv5));
        assert_eq!(target_for_prompt("lg 축구 후원"), Some(LogicalName::Kv4));
    }

    #[test]
    fn test_brand_keyword_ignores_case() {
        for prompt in ["LG brand color", "lg brand color", "Lg brand color", "make it gLg"] {
            assert_eq!(target_for_prompt(prompt), Some(LogicalName::Kv6), "{prompt}");
        }
    }

    #[test]
    fn test_case_sensitive_rule_needs_exact_keyword() {
        let rule = EditRule {
            keyword: "Insta",
            case: CaseRule::Sensitive,
            target: LogicalName::Kv5,
        };
        assert!(rule.matches("for Insta"));
        assert!(!rule.matches("for insta"));
    }

    #[test]
    fn test_custom_table_order_is_respected() {
        let rules = [
            EditRule { keyword: "b", case: CaseRule::Sensitive, target: LogicalName::Kv6 },
            EditRule { keyword: "a", case: CaseRule::Sensitive, target: LogicalName::Kv4 },
        ];
        assert_eq!(target_with_rules(&rules, "a b"), Some(LogicalName::Kv6));
        assert_eq!(target_with_rules(&rules, "a"), Some(LogicalName::Kv4));
        assert_eq!(target_with_rules(&[], "a b"), None);
    }
}
