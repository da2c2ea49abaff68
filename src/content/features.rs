pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

pub const FEATURE_CATEGORIES: &[&str] = &["Academics", "Administration", "Engagement"];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Attendance Tracking",
        description:
            "Mark attendance by class, period, or campus in seconds, with automatic \
             absence notifications to guardians and daily summaries for administrators.",
        icon: "📋",
        category: "Academics",
    },
    Feature {
        title: "Gradebook & Report Cards",
        description:
            "Weighted categories, custom grading scales, and one-click report card \
             generation that follows your school's template, not ours.",
        icon: "📝",
        category: "Academics",
    },
    Feature {
        title: "Timetable Builder",
        description:
            "Drag-and-drop scheduling with conflict detection across teachers, rooms, \
             and cohorts. Publish changes to every student calendar instantly.",
        icon: "🗓️",
        category: "Academics",
    },
    Feature {
        title: "Curriculum Planning",
        description:
            "Map lessons to standards, share unit plans across departments, and track \
             coverage through the year from a single view.",
        icon: "📚",
        category: "Academics",
    },
    Feature {
        title: "Admissions Pipeline",
        description:
            "From enquiry to enrolment: application forms, document collection, \
             interview scheduling, and offer letters in one trackable pipeline.",
        icon: "🎓",
        category: "Administration",
    },
    Feature {
        title: "Fee Billing & Invoicing",
        description:
            "Term fees, instalment plans, sibling discounts, and automated reminders. \
             Reconcile payments without spreadsheets.",
        icon: "💳",
        category: "Administration",
    },
    Feature {
        title: "Staff Management",
        description:
            "Roles, substitutions, leave requests, and workload overviews for every \
             teacher and administrator on campus.",
        icon: "🧑‍🏫",
        category: "Administration",
    },
    Feature {
        title: "Guardian Messaging",
        description:
            "Announcements, newsletters, and two-way messaging with read receipts, \
             translated automatically into each family's preferred language.",
        icon: "💬",
        category: "Engagement",
    },
    Feature {
        title: "Student & Parent Portals",
        description:
            "Timetables, homework, grades, and fee statements in a portal families \
             actually use, on any device.",
        icon: "🏠",
        category: "Engagement",
    },
    Feature {
        title: "Insights & Dashboards",
        description:
            "Enrolment trends, attendance heatmaps, and grade distributions out of the \
             box, exportable for board reporting.",
        icon: "📊",
        category: "Engagement",
    },
];
