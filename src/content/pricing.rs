pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub tagline: &'static str,
    pub highlights: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$0",
        period: "forever",
        tagline: "For small schools getting started with digital administration.",
        highlights: &[
            "Up to 100 students",
            "Attendance & gradebook",
            "Student and parent portals",
            "Community support",
        ],
        cta: "Start for free",
        featured: false,
    },
    Plan {
        name: "Campus",
        price: "$249",
        period: "per month",
        tagline: "Everything a single campus needs to run day to day.",
        highlights: &[
            "Up to 1,500 students",
            "Timetable builder & curriculum planning",
            "Admissions pipeline",
            "Fee billing & invoicing",
            "Guardian messaging with translations",
            "Priority email support",
        ],
        cta: "Start 30-day trial",
        featured: true,
    },
    Plan {
        name: "District",
        price: "Custom",
        period: "annual agreement",
        tagline: "Multi-campus groups and districts with their own requirements.",
        highlights: &[
            "Unlimited students & campuses",
            "Cross-campus dashboards",
            "Single sign-on & provisioning",
            "Dedicated onboarding manager",
            "99.9% uptime SLA",
        ],
        cta: "Talk to sales",
        featured: false,
    },
];

pub const PRICING_FAQS: &[Faq] = &[
    Faq {
        question: "Can we switch plans mid-year?",
        answer:
            "Yes. Upgrades apply immediately and we prorate the difference; downgrades \
             take effect at the start of your next billing period.",
    },
    Faq {
        question: "Do you charge per student or per seat?",
        answer:
            "Neither. Each plan includes a student allowance and unlimited staff seats, \
             so adding a teacher never changes your bill.",
    },
    Faq {
        question: "Is there a discount for non-profits and public schools?",
        answer:
            "Publicly funded and non-profit schools receive 20% off the Campus plan. \
             Mention it when you start your trial and we apply it to your account.",
    },
    Faq {
        question: "What happens to our data if we leave?",
        answer:
            "You can export every record (students, grades, attendance, billing) as CSV \
             at any time, and we delete your data 60 days after cancellation.",
    },
    Faq {
        question: "Do you help with migration from our current system?",
        answer:
            "Campus and District plans include assisted imports from common student \
             information systems and from spreadsheets.",
    },
];
