pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const STATS: &[Stat] = &[
    Stat { value: "400+", label: "schools" },
    Stat { value: "14", label: "countries" },
    Stat { value: "250k", label: "students managed" },
    Stat { value: "99.9%", label: "uptime last 12 months" },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            FooterLink { label: "Features", href: "/features" },
            FooterLink { label: "Pricing", href: "/pricing" },
            FooterLink { label: "Partners", href: "/partners" },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink { label: "Blog", href: "/blog" },
            FooterLink { label: "Careers", href: "/careers" },
            FooterLink { label: "Community", href: "/community" },
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            FooterLink { label: "Privacy Policy", href: "/privacy" },
            FooterLink { label: "Terms of Service", href: "/terms" },
        ],
    },
];
