pub struct CommunityEvent {
    pub name: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub struct Program {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const EVENTS: &[CommunityEvent] = &[
    CommunityEvent {
        name: "Acadex User Summit 2025",
        date: "September 18–19, 2025",
        location: "Amsterdam",
        description:
            "Two days of workshops with the schools that shape our roadmap. \
             Timetabling clinic, admissions masterclass, and the 2026 preview.",
    },
    CommunityEvent {
        name: "Webinar: Preparing your first term on Acadex",
        date: "August 27, 2025",
        location: "Online",
        description:
            "A 60-minute walkthrough for newly onboarded schools: importing rosters, \
             building the timetable, and opening the parent portal.",
    },
    CommunityEvent {
        name: "Office hours: fee billing edition",
        date: "Every first Tuesday",
        location: "Online",
        description:
            "Bring your billing questions to the team that builds it. No slides, \
             just answers.",
    },
    CommunityEvent {
        name: "Regional meetup: UK & Ireland",
        date: "October 9, 2025",
        location: "Manchester",
        description:
            "An evening for bursars and data managers to swap setups, hosted with \
             Northfield Academy Trust.",
    },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        title: "Community Forum",
        description:
            "Where 2,000 school administrators trade templates, report card designs, \
             and hard-won advice. Staffed by our support team every weekday.",
        icon: "💬",
    },
    Program {
        title: "Champions Program",
        description:
            "Power users who mentor newly joining schools get early access to betas \
             and a direct line to the product team.",
        icon: "🏅",
    },
    Program {
        title: "Template Library",
        description:
            "Report cards, admission forms, and newsletters contributed by the \
             community, ready to import into your school.",
        icon: "📂",
    },
];
