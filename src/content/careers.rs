pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct Opening {
    pub title: &'static str,
    pub team: &'static str,
    pub location: &'static str,
    pub employment: &'static str,
    pub summary: &'static str,
}

pub const COMPANY_VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Schools set the pace",
        description:
            "We ship to an academic calendar, not a sprint board. Nothing disruptive \
             lands in exam season.",
        icon: "🏫",
    },
    CompanyValue {
        title: "Calm software, calm company",
        description:
            "No on-call heroics, no growth-at-all-costs. We build a system of record; \
             boring reliability is the feature.",
        icon: "🧘",
    },
    CompanyValue {
        title: "Talk to teachers",
        description:
            "Everyone, including engineers, spends time in schools every quarter. \
             Roadmaps start in staff rooms, not dashboards.",
        icon: "🗣️",
    },
    CompanyValue {
        title: "Default to plain language",
        description:
            "If a feature needs a training session, the feature is not finished. The \
             same goes for how we write to each other.",
        icon: "✍️",
    },
];

pub const OPENINGS: &[Opening] = &[
    Opening {
        title: "Senior Rust Engineer",
        team: "Platform",
        location: "Remote (EU)",
        employment: "Full-time",
        summary:
            "Own core services behind attendance and gradebook. You care about data \
             integrity the way schools care about their registers.",
    },
    Opening {
        title: "Frontend Engineer",
        team: "Product",
        location: "Amsterdam or Remote (EU)",
        employment: "Full-time",
        summary:
            "Build the portals that families use daily. Accessibility is a \
             requirement here, not a stretch goal.",
    },
    Opening {
        title: "Product Designer",
        team: "Product",
        location: "Amsterdam",
        employment: "Full-time",
        summary:
            "Design for school secretaries, deputy heads, and grandparents alike. \
             Your portfolio shows complex workflows made boring.",
    },
    Opening {
        title: "Onboarding Specialist",
        team: "Customer Success",
        location: "Remote (Americas)",
        employment: "Full-time",
        summary:
            "Guide schools from their old system to their first full term on Acadex. \
             Former school administrators strongly encouraged to apply.",
    },
    Opening {
        title: "Support Engineer",
        team: "Customer Success",
        location: "Remote (APAC)",
        employment: "Full-time",
        summary:
            "First line for schools in APAC hours. You can read a stack trace and \
             explain the fix to a school office without jargon.",
    },
];
