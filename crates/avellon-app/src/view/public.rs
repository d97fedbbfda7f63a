//! Public marketing pages and the login form

use super::{
    AboutView, Brief, ContactView, Feature, HomeView, InsightsView, LoginView, Metric,
    PlatformView, ReadinessRow, ServicesView, SolutionTab, SolutionsView,
};
use crate::widget_state::{ContactForm, LoginForm, INSIGHT_COUNT};

pub fn render_home() -> HomeView {
    HomeView {
        title: "The Geometry of Risk.",
        hero_heading: "Operational Pre-cognition for the Fortune 500.",
        hero_body: "Traditional intelligence reacts to headlines. AVELLON models the structural \
                    integrity of global stability. We provide an autonomous, generative operating \
                    system for risk that sees, understands, and mitigates threats before they \
                    materialize.",
        pillars: vec![
            Feature {
                heading: "01. PREDICTIVE",
                callout: Some("Don't just monitor. Forecast."),
                body: "Our probabilistic engines model risk velocity, calculating the financial \
                       blast radius of geopolitical friction days in advance.",
            },
            Feature {
                heading: "02. OMNISCIENT",
                callout: Some("Total informational dominance."),
                body: "Fusing satellite reconnaissance, dark web signals, and proprietary sensor \
                       networks into a single, unified truth.",
            },
            Feature {
                heading: "03. AUTONOMOUS",
                callout: Some("Self-healing supply chains."),
                body: "The system doesn't just alert; it suggests mitigation pathways, auditing \
                       suppliers and routing alternatives in real-time.",
            },
        ],
        audiences: vec![
            Metric::new("Governments", "Sovereign"),
            Metric::new("Defense", "Strategic"),
            Metric::new("Finance", "Institutional"),
            Metric::new("Energy", "Critical"),
        ],
        briefing_button: "Request Strategic Briefing →",
    }
}

pub fn render_platform() -> PlatformView {
    PlatformView {
        title: "Generative Risk Operating System",
        intro: "AVELLON is not a dashboard. It is a computational engine for global stability.",
        modules: vec![
            Feature {
                heading: "Global War Room",
                callout: None,
                body: "A geospatial command interface providing real-time situational awareness \
                       across physical, cyber, and cognitive domains.",
            },
            Feature {
                heading: "Predictive Risk Engine",
                callout: None,
                body: "Utilizing graph neural networks to map hidden dependencies between assets, \
                       suppliers, and geopolitical actors.",
            },
            Feature {
                heading: "Digital Twin",
                callout: None,
                body: "Create a high-fidelity simulation of your entire value chain to test \
                       resilience against kinetic and non-kinetic shocks.",
            },
            Feature {
                heading: "Regulatory Sentinel",
                callout: None,
                body: "Automated compliance monitoring against 450+ global sanctions lists, trade \
                       restrictions, and export controls.",
            },
        ],
        readiness: vec![
            ReadinessRow {
                feature: "Security",
                standard: "FEDRAMP High / IL5 Ready",
            },
            ReadinessRow {
                feature: "Deployment",
                standard: "On-Prem / Air-Gapped / Hybrid Cloud",
            },
            ReadinessRow {
                feature: "Auditability",
                standard: "Immutable Blockchain Logs",
            },
            ReadinessRow {
                feature: "Latency",
                standard: "< 50ms Global Edge",
            },
        ],
    }
}

/// Solution tabs in display order.
pub(crate) const SOLUTION_TABS: [SolutionTab; 3] = [
    SolutionTab {
        label: "CORPORATE",
        audience: "Fortune 500 Enterprises",
        challenge: "Supply chain opacity and kinetic disruption.",
        approach: "We transform supply chains from fragile linear sequences into resilient, \
                   self-healing mesh networks.",
        outcome: "40% reduction in downtime costs; 100% visibility into Tier-N suppliers.",
    },
    SolutionTab {
        label: "GOVERNMENT",
        audience: "Defense & Intelligence",
        challenge: "Cognitive overload and signal-to-noise ratio.",
        approach: "AI-driven sensor fusion that prioritizes threats based on strategic intent \
                   and capability.",
        outcome: "Faster OODA loops; enhanced sovereign decision-making.",
    },
    SolutionTab {
        label: "FINANCE",
        audience: "Institutional Finance",
        challenge: "Pricing geopolitical risk into asset models.",
        approach: "Real-time quantification of macro-risk factors mapped to specific tickers \
                   and commodities.",
        outcome: "Alpha generation through superior information asymmetry.",
    },
];

pub fn render_solutions(selected_tab: usize) -> SolutionsView {
    SolutionsView {
        title: "Strategic Solutions",
        tabs: SOLUTION_TABS.to_vec(),
        selected_tab: selected_tab.min(SOLUTION_TABS.len() - 1),
    }
}

pub fn render_services() -> ServicesView {
    ServicesView {
        title: "Advisory & Engagement",
        intro: "Beyond the platform, AVELLON provides high-touch strategic services for our \
                most critical partners.",
        offerings: vec![
            Feature {
                heading: "Strategic Risk Intelligence",
                callout: None,
                body: "Bespoke intelligence products delivered by our team of former agency \
                       analysts and sector experts.",
            },
            Feature {
                heading: "Custom Platform Deployment",
                callout: None,
                body: "Tailoring the AVELLON OS to integrate with proprietary internal data lakes \
                       and legacy ERP systems.",
            },
            Feature {
                heading: "Crisis Response & Simulation",
                callout: None,
                body: "Live 'Red Teaming' and table-top exercises to stress-test executive \
                       decision-making.",
            },
            Feature {
                heading: "Sovereign Advisory",
                callout: None,
                body: "Confidential consultation for heads of state and ministries on national \
                       resilience architecture.",
            },
        ],
    }
}

const BRIEFS: [(&str, &str, &str); INSIGHT_COUNT] = [
    (
        "The Kinetic Pivot: Maritime Chokepoints in 2026",
        "Classification: PUBLIC | Date: Jan 02, 2026",
        "An analysis of shifting naval doctrines in the Indo-Pacific and the implications for \
         commercial semiconductor transit.",
    ),
    (
        "Generative Disinformation and Market Stability",
        "Classification: PUBLIC | Date: Dec 15, 2025",
        "How synthetic media is being weaponized to trigger algorithmic trading flash crashes.",
    ),
    (
        "The Rare Earth Decoupling",
        "Classification: RESTRICTED (Summary Only)",
        "Projecting the 5-year timeline of critical mineral supply chain bifurcation.",
    ),
];

pub fn render_insights(expanded: &[bool; INSIGHT_COUNT], cursor: usize) -> InsightsView {
    let briefs = BRIEFS
        .iter()
        .zip(expanded)
        .map(|(&(title, classification, summary), &expanded)| Brief {
            title,
            classification,
            summary,
            expanded,
        })
        .collect();

    InsightsView {
        title: "Strategic Insights",
        intro: "Briefings for the decision-making elite.",
        briefs,
        cursor: cursor.min(INSIGHT_COUNT - 1),
    }
}

pub fn render_about() -> AboutView {
    AboutView {
        title: "About AVELLON",
        premise: "AVELLON was founded on a singular premise: Complexity is the new threat vector.",
        paragraphs: vec![
            "In a hyper-connected world, a butterfly effect in a remote strait can collapse \
             industries on the other side of the planet. Traditional intelligence agencies are \
             built for a slower, more predictable era.",
            "We are engineers, mathematicians, and strategists building the immunity system for \
             the global economy. We do not predict the future; we calculate the probabilities \
             of survival.",
        ],
        headquarters: "London | Washington D.C. | Singapore",
    }
}

pub fn render_contact(form: &ContactForm, notice: Option<&str>) -> ContactView {
    ContactView {
        title: "Secure Engagement",
        intro: "For strategic inquiries, please utilize the channels below. All communications \
                are encrypted.",
        email: form.email.clone(),
        organization: form.organization.clone(),
        inquiry_type: form.inquiry.label(),
        focus: form.focus,
        offices: vec![
            "10 Downing Street, London",
            "1600 Pennsylvania Ave, Washington D.C.",
            "1 Raffles Quay, Singapore",
        ],
        pgp_note: "PGP Key available upon request.",
        notice: notice.map(str::to_string),
    }
}

pub fn render_login(form: &LoginForm) -> LoginView {
    LoginView {
        heading: "AVELLON SECURE CONSOLE",
        subheading: "Access Restricted to Authorized Personnel.",
        identity: form.identity.clone(),
        masked_keycode: form.masked_keycode(),
        focus: form.focus,
        error: form.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget_state::LoginField;

    #[test]
    fn test_home_has_three_pillars_and_four_audiences() {
        let view = render_home();
        assert_eq!(view.pillars.len(), 3);
        assert_eq!(view.audiences.len(), 4);
        assert_eq!(view.audiences[0].value, "Sovereign");
    }

    #[test]
    fn test_platform_readiness_table() {
        let view = render_platform();
        assert_eq!(view.modules.len(), 4);
        let latency = view.readiness.last().unwrap();
        assert_eq!(latency.feature, "Latency");
        assert_eq!(latency.standard, "< 50ms Global Edge");
    }

    #[test]
    fn test_solutions_tab_is_clamped() {
        assert_eq!(render_solutions(1).selected_tab, 1);
        assert_eq!(render_solutions(9).selected_tab, 2);
        assert_eq!(render_solutions(0).tabs[0].label, "CORPORATE");
    }

    #[test]
    fn test_insights_follow_expanded_flags() {
        let view = render_insights(&[true, false, true], 1);
        let expanded: Vec<bool> = view.briefs.iter().map(|b| b.expanded).collect();
        assert_eq!(expanded, vec![true, false, true]);
        assert_eq!(view.cursor, 1);
        assert!(view.briefs[2].classification.contains("RESTRICTED"));
    }

    #[test]
    fn test_contact_reflects_form() {
        let form = ContactForm {
            email: "ops@example.org".to_string(),
            ..Default::default()
        };
        let view = render_contact(&form, Some("Handshake queued"));
        assert_eq!(view.email, "ops@example.org");
        assert_eq!(view.inquiry_type, "Platform Demo");
        assert_eq!(view.offices.len(), 3);
        assert_eq!(view.notice.as_deref(), Some("Handshake queued"));
    }

    #[test]
    fn test_login_masks_keycode() {
        let form = LoginForm {
            identity: "ana".to_string(),
            keycode: "secret".to_string(),
            focus: LoginField::Keycode,
            error: None,
        };
        let view = render_login(&form);
        assert_eq!(view.identity, "ana");
        assert_eq!(view.masked_keycode.chars().count(), 6);
        assert!(!view.masked_keycode.contains("secret"));
        assert_eq!(view.focus, LoginField::Keycode);
    }
}
