pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct LegalDoc {
    pub title: &'static str,
    pub updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub const PRIVACY_POLICY: LegalDoc = LegalDoc {
    title: "Privacy Policy",
    updated: "Last updated: July 1, 2025",
    sections: &[
        LegalSection {
            heading: "1. Who we are",
            body:
                "Acadex B.V. provides an education-management platform to schools and \
                 school districts. This site, acadex.example, is our public marketing \
                 website. This policy covers the website; the platform itself is \
                 governed by the data-processing agreement each school signs.",
        },
        LegalSection {
            heading: "2. What this website collects",
            body:
                "The website collects no account data and sets no tracking cookies. \
                 The only value stored in your browser is your display-theme \
                 preference, kept in local storage on your device and never \
                 transmitted to us.",
        },
        LegalSection {
            heading: "3. Server logs",
            body:
                "Our hosting provider keeps standard access logs (IP address, \
                 requested page, user agent) for 30 days for security and capacity \
                 purposes. We do not combine these logs with any other data.",
        },
        LegalSection {
            heading: "4. Student data",
            body:
                "No student data is collected through or stored by this website. \
                 Within the platform, schools remain the data controllers of their \
                 student records; Acadex acts solely as a processor and never sells \
                 or advertises against student data.",
        },
        LegalSection {
            heading: "5. Contact forms and email",
            body:
                "If you email us or submit a contact request, we keep the \
                 correspondence for as long as needed to answer you and for up to 24 \
                 months afterwards for follow-up, after which it is deleted.",
        },
        LegalSection {
            heading: "6. Your rights",
            body:
                "Under the GDPR and comparable laws you may request access to, \
                 correction of, or deletion of personal data we hold about you. \
                 Write to privacy@acadex.example and we will respond within 30 days.",
        },
        LegalSection {
            heading: "7. Changes to this policy",
            body:
                "We will post any changes on this page and update the date above. \
                 Material changes to the platform policy are announced to schools \
                 directly at least 30 days in advance.",
        },
    ],
};

pub const TERMS_OF_SERVICE: LegalDoc = LegalDoc {
    title: "Terms of Service",
    updated: "Last updated: July 1, 2025",
    sections: &[
        LegalSection {
            heading: "1. Scope",
            body:
                "These terms govern your use of the Acadex marketing website. Use of \
                 the Acadex platform by a school is governed by the subscription \
                 agreement between that school and Acadex B.V.",
        },
        LegalSection {
            heading: "2. Use of the website",
            body:
                "You may browse and link to this website freely. You may not scrape \
                 it at volumes that degrade service, misrepresent its content, or \
                 use it to distribute malware or unsolicited messages.",
        },
        LegalSection {
            heading: "3. Content and trademarks",
            body:
                "All text, imagery, and the Acadex name and logo on this site belong \
                 to Acadex B.V. or its licensors. Quoting reasonable excerpts with \
                 attribution is welcome; wholesale reproduction is not.",
        },
        LegalSection {
            heading: "4. Pricing information",
            body:
                "Prices shown on this website are indicative, exclude applicable \
                 taxes, and may change. The price that applies to a school is the \
                 one in its order form, which prevails over this website.",
        },
        LegalSection {
            heading: "5. No warranty",
            body:
                "The website is provided as-is. We work to keep its information \
                 current but make no warranty that every description matches the \
                 latest release of the platform.",
        },
        LegalSection {
            heading: "6. Liability",
            body:
                "To the extent permitted by law, Acadex B.V. is not liable for \
                 damages arising from use of this website. Nothing in these terms \
                 limits liability that cannot be limited by law.",
        },
        LegalSection {
            heading: "7. Governing law",
            body:
                "These terms are governed by the laws of the Netherlands. Disputes \
                 are subject to the exclusive jurisdiction of the courts of \
                 Amsterdam.",
        },
    ],
};
