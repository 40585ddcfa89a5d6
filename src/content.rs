//! Copy rendered on the landing page.

use rcoach_inquiry::ServiceCategory;

pub struct Service {
    pub category: ServiceCategory,
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
    pub subtitle: &'static str,
    pub highlight: bool,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

pub struct TrustPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Step {
    pub step: u8,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
    pub meta: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#services",
        label: "Services",
    },
    NavLink {
        href: "#pricing",
        label: "Packages",
    },
    NavLink {
        href: "#process",
        label: "Process",
    },
    NavLink {
        href: "#testimonials",
        label: "Outcomes",
    },
    NavLink {
        href: "#faq",
        label: "FAQ",
    },
    NavLink {
        href: "#contact",
        label: "Contact",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        category: ServiceCategory::Proposal,
        icon: "clipboard-check",
        title: "Proposal & Concept Development",
        desc: "Turn your topic into a clear, defensible study plan with a strong problem statement and methodology.",
        bullets: &[
            "Topic refinement + research questions",
            "Literature mapping + gap identification",
            "Methodology design (qual/quant/mixed)",
            "Ethics-ready documentation",
        ],
    },
    Service {
        category: ServiceCategory::FullProjectSupport,
        icon: "microscope",
        title: "End-to-End Research Project Support",
        desc: "Coaching and hands-on support from proposal to final report/thesis — without compromising academic integrity.",
        bullets: &[
            "Chapter-by-chapter planning",
            "Study instruments + pilot guidance",
            "Project timelines + accountability",
            "Editing for clarity and structure",
        ],
    },
    Service {
        category: ServiceCategory::QualitativeAnalysis,
        icon: "sparkles",
        title: "Qualitative Data Analysis",
        desc: "Make sense of interviews, focus groups, and open-ended surveys using rigorous, transparent methods.",
        bullets: &[
            "Thematic / content analysis",
            "Coding frameworks + codebook",
            "Trustworthiness strategies (e.g., triangulation)",
            "Write-up support (findings + discussion)",
        ],
    },
    Service {
        category: ServiceCategory::QuantitativeAnalysis,
        icon: "line-chart",
        title: "Quantitative Data Analysis",
        desc: "Clean, analyze, and interpret your data using appropriate statistical techniques and clear reporting.",
        bullets: &[
            "Data cleaning + screening",
            "Descriptives, inference, regression (as appropriate)",
            "Assumption checks + interpretation",
            "Tables/figures + results write-up",
        ],
    },
];

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Kickstart Session",
        price: "From $",
        subtitle: "60–90 min 1:1 coaching",
        highlight: false,
        features: &[
            "Clarify topic, goals, and scope",
            "Action plan + next steps",
            "Templates/checklists as needed",
            "Follow-up notes",
        ],
        cta: "Book a session",
    },
    Package {
        name: "Proposal Builder",
        price: "From $$",
        subtitle: "Structured support over 2–4 weeks",
        highlight: true,
        features: &[
            "Problem statement + objectives",
            "Literature structure + synthesis plan",
            "Methodology + sampling + instruments",
            "Ethics-ready draft + supervisor-ready polish",
        ],
        cta: "Request a quote",
    },
    Package {
        name: "Analysis & Results",
        price: "From $$",
        subtitle: "Qualitative or quantitative",
        highlight: false,
        features: &[
            "Data cleaning/coding framework",
            "Appropriate analysis + interpretation",
            "Results section write-up",
            "Tables/figures + appendix support",
        ],
        cta: "Start analysis",
    },
];

pub const TRUST: &[TrustPoint] = &[
    TrustPoint {
        icon: "shield-check",
        title: "Ethical support",
        desc: "Coaching-first approach aligned with academic integrity and your institution’s guidelines.",
    },
    TrustPoint {
        icon: "clock",
        title: "On-time delivery",
        desc: "Clear milestones, feedback loops, and realistic timelines.",
    },
    TrustPoint {
        icon: "check",
        title: "Methodology fit",
        desc: "No cookie-cutter methods — we choose what matches your question and data.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        step: 1,
        title: "Discovery",
        desc: "You share your topic, rubric, and deadline.",
    },
    Step {
        step: 2,
        title: "Scope",
        desc: "We agree on deliverables, timeline, and check-ins.",
    },
    Step {
        step: 3,
        title: "Work & Review",
        desc: "Iterative drafts + feedback until aligned.",
    },
    Step {
        step: 4,
        title: "Finalize",
        desc: "Polished submission-ready outputs.",
    },
];

pub const WORK_WITH: &[&str] = &[
    "Rubrics and supervisor feedback",
    "Word documents and reference lists",
    "SPSS/Stata/R outputs or raw datasets",
    "Interview transcripts, field notes, codes",
    "Existing chapters that need restructuring",
];

pub const DELIVERABLES: &[&str] = &[
    "Clean structure and logical flow",
    "Methods that match your research questions",
    "Transparent analysis and interpretation",
    "Supervisor-ready presentation",
    "Actionable next steps at every stage",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Masters Student",
        quote: "My proposal was rejected twice. After one week of restructuring and tightening the methodology, it was approved.",
        meta: "Proposal coaching",
    },
    Testimonial {
        name: "NGO Research Officer",
        quote: "The analysis made sense for the first time. The results section was clear, defensible, and aligned with our indicators.",
        meta: "Quantitative analysis",
    },
    Testimonial {
        name: "PhD Candidate",
        quote: "The coding framework and theme write-up transformed my qualitative chapters — and I could explain every decision.",
        meta: "Qualitative analysis",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do you write the research for students?",
        answer: "I provide coaching, structured support, and editing to improve clarity and quality. You remain the author and must be able to defend your work.",
    },
    Faq {
        question: "What software do you use for analysis?",
        answer: "I can work with SPSS, Excel, Jamovi, R outputs, or clearly documented calculations. For qualitative work, I support manual coding and software-based coding (e.g., NVivo/ATLAS.ti) depending on what you have.",
    },
    Faq {
        question: "How fast can you deliver?",
        answer: "Turnaround depends on scope and your deadline. After a short discovery call, I’ll propose a timeline with milestones so you always know what’s next.",
    },
    Faq {
        question: "Can you help with supervisor feedback and revisions?",
        answer: "Yes. Share the comments/rubric and I’ll help you plan revisions, respond systematically, and improve the structure and argument.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;

    #[test]
    fn one_service_card_per_category() {
        let categories = SERVICES.iter().map(|s| s.category).collect::<Vec<_>>();

        assert_eq!(categories, ServiceCategory::VARIANTS);
    }

    #[test]
    fn exactly_one_highlighted_package() {
        assert_eq!(PACKAGES.iter().filter(|p| p.highlight).count(), 1);
    }
}
