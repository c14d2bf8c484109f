//! Deterministic, keyword-driven response generator.
//!
//! Each persona owns an ordered rule table. Rules are evaluated top to bottom
//! against a lowercased view of the user text; the first rule with any keyword
//! contained in the text wins. When nothing matches, the persona's default
//! template answers. `{query}` in a template is replaced by the user text
//! verbatim.
//!
//! The generator performs no I/O and cannot fail, which is what lets the
//! orchestrator always produce an answer.

use crate::domain::models::AgentId;

const QUERY_PLACEHOLDER: &str = "{query}";

/// One (keyword set, template) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRule {
    /// Lowercase keywords, matched as substrings
    pub keywords: &'static [&'static str],
    pub template: &'static str,
}

impl FallbackRule {
    /// `haystack` must already be lowercased
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }

    fn render(&self, user_text: &str) -> String {
        self.template.replace(QUERY_PLACEHOLDER, user_text)
    }
}

/// Rule table plus default for one persona
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    pub rules: &'static [FallbackRule],
    pub default_template: &'static str,
}

const POLICY: RuleTable = RuleTable {
    rules: &[
        FallbackRule {
            keywords: &["eu ai act", "ai act", "high-risk", "high risk"],
            template: "Policy analysis: \"{query}\" falls under the EU AI Act risk-tiering \
                regime. High-risk systems need documented human oversight and conformity \
                assessments; 3 of 4 registered systems currently meet the requirement.",
        },
        FallbackRule {
            keywords: &["gdpr", "ccpa", "regulat", "jurisdiction"],
            template: "Policy analysis: for \"{query}\", review GDPR Article 25 (data protection \
                by design) alongside CCPA obligations. Regulatory framework mapping is 94.2% \
                complete; cross-border transfer clauses need an update.",
        },
        FallbackRule {
            keywords: &["create", "draft", "new policy", "update", "enforce"],
            template: "Policy recommendation: \"{query}\" should start from the Algorithmic \
                Transparency template, which is at 72% compliance and due for review. Route the \
                draft through legal sign-off before enforcement.",
        },
        FallbackRule {
            keywords: &["retention", "fairness standard", "transparency"],
            template: "Policy status: \"{query}\" maps to an active policy set (Data Retention \
                95%, AI Fairness Standards 88%, Algorithmic Transparency 72% under review). \
                Prioritise the transparency policy update.",
        },
    ],
    default_template: "Policy analysis: Based on \"{query}\", recommend reviewing GDPR Article 25 \
        and EU AI Act requirements. Current compliance framework at 94.2% - updates needed for \
        emerging regulations.",
};

const COMPLIANCE: RuleTable = RuleTable {
    rules: &[
        FallbackRule {
            keywords: &["violation", "breach", "incident", "deviation"],
            template: "Compliance alert: \"{query}\" cross-checked against live monitoring. 2 \
                policy violations detected in the last hour, both low severity; automated \
                remediation protocols initiated.",
        },
        FallbackRule {
            keywords: &["risk", "exposure", "assessment"],
            template: "Risk assessment: \"{query}\" rated medium. High-risk activity detected in \
                the data processing pipeline and escalated to the privacy team; all other AI \
                systems operate within acceptable risk parameters.",
        },
        FallbackRule {
            keywords: &["sox", "sarbanes", "financial control"],
            template: "Compliance status: SOX controls relevant to \"{query}\" are at 96% \
                coverage. 1 access-review control is overdue; remediation due within 5 business \
                days.",
        },
        FallbackRule {
            keywords: &["gdpr", "ccpa"],
            template: "Compliance status: \"{query}\" - GDPR/CCPA tracking reports 94.2% \
                compliance with 2 minor deviations flagged (consent logging, retention window). \
                Remediation tickets have been opened.",
        },
    ],
    default_template: "Compliance status: Query \"{query}\" flagged for review. System compliance \
        at 94.2%, detected 2 minor deviations. Automated remediation protocols initiated.",
};

const AUDIT: RuleTable = RuleTable {
    rules: &[
        FallbackRule {
            keywords: &["evidence", "collect", "preserve"],
            template: "Evidence tracking: \"{query}\" - evidence collection 87% complete for the \
                quarterly compliance report. All artefacts hashed and preserved with chain of \
                custody.",
        },
        FallbackRule {
            keywords: &["anomal", "forensic", "investigat", "suspicious"],
            template: "Forensic finding: \"{query}\" correlates with an unusual pattern in model \
                predictions over the last 24 hours. Investigation opened; 3 decision paths \
                isolated for review.",
        },
        FallbackRule {
            keywords: &["log", "trail", "trace", "decision"],
            template: "Audit trail: 1,247 AI decisions logged in the last 24 hours with full \
                traceability. \"{query}\" is recorded with cryptographic verification of every \
                decision path.",
        },
        FallbackRule {
            keywords: &["report", "prepar", "regulator"],
            template: "Audit readiness: \"{query}\" - regulatory audit package 82% assembled. \
                Outstanding items: model cards for 2 systems and access-review exports.",
        },
    ],
    default_template: "Audit trail: \"{query}\" logged with full traceability. Evidence \
        collection 87% complete, all decision paths documented with cryptographic verification.",
};

const ETHICS: RuleTable = RuleTable {
    rules: &[
        FallbackRule {
            keywords: &["bias", "discriminat", "gender", "race", "racial"],
            template: "Bias analysis: \"{query}\" - potential gender bias detected in the \
                recruitment model (confidence 78%, disparate impact ratio 0.82). Recommend \
                re-weighting training data and a follow-up audit.",
        },
        FallbackRule {
            keywords: &["fair", "equit", "demographic"],
            template: "Fairness evaluation: for \"{query}\", outcomes are equitable across \
                demographic groups (fairness score 0.91, max group gap 4.3%). Continue monthly \
                monitoring across protected classes.",
        },
        FallbackRule {
            keywords: &["transparen", "explain", "interpret"],
            template: "Transparency review: \"{query}\" - 4 of 5 production models ship \
                explanation reports; the credit-scoring model lacks feature attributions and \
                needs an explainability layer.",
        },
        FallbackRule {
            keywords: &["impact", "vulnerable", "harm"],
            template: "Ethical impact: \"{query}\" may affect vulnerable populations. Ethical \
                review required before deployment; impact assessment score 6.5/10.",
        },
    ],
    default_template: "Ethics assessment: \"{query}\" analyzed - fairness metrics within \
        parameters. Recommend continued demographic impact monitoring across protected classes.",
};

const PRIVACY: RuleTable = RuleTable {
    rules: &[
        FallbackRule {
            keywords: &["delet", "erasure", "forgotten", "article 17"],
            template: "Data subject rights: \"{query}\" - 12 deletion requests received under \
                GDPR Article 17 this month, 10 fulfilled within SLA, 2 pending identity \
                verification.",
        },
        FallbackRule {
            keywords: &["consent", "opt-in", "opt out", "opt-out"],
            template: "Consent management: \"{query}\" - consent mechanisms functioning with 97% \
                valid consent records. A new data collection practice requires consent text \
                updates.",
        },
        FallbackRule {
            keywords: &["pii", "encrypt", "access", "personal data"],
            template: "Data protection status: \"{query}\" - all PII encrypted at rest and \
                access-controlled. No privacy violations detected in the last 30 days.",
        },
        FallbackRule {
            keywords: &["impact assessment", "dpia", "pia"],
            template: "Privacy impact assessment: \"{query}\" needs a DPIA before launch. 3 of 5 \
                risk areas scored low; cross-border transfer and profiling require mitigations.",
        },
    ],
    default_template: "Privacy evaluation: \"{query}\" processed under GDPR Article 6. Data \
        minimization applied, no violations detected, consent mechanisms functioning.",
};

/// Rule table for a persona
pub const fn rules(persona: AgentId) -> &'static RuleTable {
    match persona {
        AgentId::Policy => &POLICY,
        AgentId::Compliance => &COMPLIANCE,
        AgentId::Audit => &AUDIT,
        AgentId::Ethics => &ETHICS,
        AgentId::Privacy => &PRIVACY,
    }
}

/// Produce a deterministic answer for `user_text` in the voice of `persona`.
pub fn fallback(persona: AgentId, user_text: &str) -> String {
    let table = rules(persona);
    let haystack = user_text.to_lowercase();

    table
        .rules
        .iter()
        .find(|rule| rule.matches(&haystack))
        .map_or_else(
            || table.default_template.replace(QUERY_PLACEHOLDER, user_text),
            |rule| rule.render(user_text),
        )
}
