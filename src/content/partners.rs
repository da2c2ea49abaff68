pub struct Partner {
    pub name: &'static str,
    pub tier: &'static str,
    pub blurb: &'static str,
}

pub const PARTNER_TIERS: &[&str] = &["Integration", "Implementation", "Reseller"];

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "PayBridge",
        tier: "Integration",
        blurb: "Card and direct-debit payments reconciled straight into fee billing.",
    },
    Partner {
        name: "LibraSys",
        tier: "Integration",
        blurb: "Library lending synced with student records and homeroom lists.",
    },
    Partner {
        name: "BusTrak",
        tier: "Integration",
        blurb: "Route planning and bus attendance tied to the morning register.",
    },
    Partner {
        name: "LearnLink LMS",
        tier: "Integration",
        blurb: "Single sign-on and grade passback between classroom and gradebook.",
    },
    Partner {
        name: "Meridian Education Consulting",
        tier: "Implementation",
        blurb:
            "Migration and change-management for districts moving 10,000+ students.",
    },
    Partner {
        name: "SchoolWorks Partners",
        tier: "Implementation",
        blurb: "Onboarding, training, and first-term support across the DACH region.",
    },
    Partner {
        name: "EduSur Distribución",
        tier: "Reseller",
        blurb: "Local-language sales and support throughout Latin America.",
    },
    Partner {
        name: "Southern Cross EdTech",
        tier: "Reseller",
        blurb: "Acadex sales, hosting guidance, and support for Australia and NZ.",
    },
];
