pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub body: &'static [&'static str],
}

/// Looks a post up by its URL slug.
pub fn find_post(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|p| p.slug == slug)
}

pub const POSTS: &[Post] = &[
    Post {
        slug: "ending-the-spreadsheet-era",
        title: "Ending the spreadsheet era in school administration",
        category: "Product",
        author: "Mira Chen",
        date: "June 12, 2025",
        excerpt:
            "Most schools we meet run on a dozen disconnected spreadsheets. Here is \
             what it costs them, and what replacing them actually looks like.",
        body: &[
            "When we ask a school office how they track admissions, the answer is \
             almost always the same: a spreadsheet. One for enquiries, one for \
             interviews, one for offers, and a shared folder of scanned documents \
             that only one person knows how to navigate.",
            "Spreadsheets are flexible, which is why they spread. But every copy is a \
             fork, every fork drifts, and by the end of term nobody is sure which \
             version of the enrolment list is real. The cost is not dramatic data \
             loss. It is a hundred small reconciliations a week.",
            "Replacing them does not mean a six-month IT project. Schools that move \
             their admissions pipeline into Acadex typically import their current \
             spreadsheet on day one and process the next enquiry in the system the \
             same afternoon.",
            "The spreadsheet era does not end with a migration plan. It ends the \
             first week the office does not have to ask who has the latest copy.",
        ],
    },
    Post {
        slug: "attendance-patterns-worth-watching",
        title: "Five attendance patterns worth watching",
        category: "Best practices",
        author: "Daniel Okafor",
        date: "May 28, 2025",
        excerpt:
            "Attendance data predicts more than truancy. These five patterns show up \
             months before grades slip, and every one is visible in a simple heatmap.",
        body: &[
            "Schools collect attendance every day, but most only look at it when a \
             threshold is crossed. By then the pattern has usually been visible for a \
             term.",
            "The patterns that matter are rarely about total absence. Monday-morning \
             absences cluster around transport and family routines. Single-subject \
             absences point at the subject, not the student. A slow drift from \
             on-time to ten-minutes-late is the earliest signal of all.",
            "None of this requires a data team. A per-student heatmap, colored by \
             period, makes every one of these patterns obvious to a form tutor in \
             seconds.",
            "The goal is not surveillance. It is noticing early enough that the \
             conversation is 'is everything alright?' rather than 'you have missed \
             too many classes.'",
        ],
    },
    Post {
        slug: "report-cards-parents-read",
        title: "Writing report cards that parents actually read",
        category: "Best practices",
        author: "Sofia Lindqvist",
        date: "April 15, 2025",
        excerpt:
            "A report card is the one document every family reads. Most schools spend \
             the effort on grades and bury the part parents care about.",
        body: &[
            "Ask parents what they remember from their child's last report card and \
             they will quote the teacher's comment, not the grade table. Ask teachers \
             what took the longest to produce and the answer is reversed.",
            "The best report comments we see follow a simple shape: one observed \
             strength with an example, one concrete next step, one sentence about the \
             child as a person. Three sentences, no jargon, no percentile talk.",
            "Templates help teachers start, but shared comment banks produce the \
             opposite of the intended effect. Parents compare notes. Identical \
             comments for different children cost more trust than a short original \
             one ever would.",
            "Acadex renders whatever template your school designs, but the template \
             is the easy part. The comment is the product.",
        ],
    },
    Post {
        slug: "timetabling-without-tears",
        title: "Timetabling without tears: how conflict detection works",
        category: "Engineering",
        author: "Mira Chen",
        date: "March 3, 2025",
        excerpt:
            "Building a school timetable means satisfying hundreds of constraints at \
             once. A look at how our builder finds the conflicts before you do.",
        body: &[
            "A timetable for a mid-sized secondary school juggles roughly 40 \
             teachers, 30 rooms, and 25 class groups across a two-week cycle. Placed \
             by hand, a single change ripples through all three dimensions.",
            "Our builder checks every placement against teacher availability, room \
             capacity, and cohort clashes as you drag, and shows the conflict before \
             you drop. The check runs locally, so feedback is immediate even on a \
             projector in a planning meeting.",
            "The most-requested feature was not automation. Deputy heads told us \
             they want to place the hard cases themselves and have the software keep \
             them honest. Full auto-generation is on the roadmap, but conflict \
             detection is what made planning week shorter.",
        ],
    },
    Post {
        slug: "introducing-guardian-translations",
        title: "Introducing automatic translations for guardian messaging",
        category: "Product",
        author: "Daniel Okafor",
        date: "February 10, 2025",
        excerpt:
            "Announcements now reach every family in their preferred language. Here \
             is how it works and why we built it first for newsletters.",
        body: &[
            "In the average urban school we serve, families speak more than twenty \
             languages at home. Every announcement that goes out only in the language \
             of instruction quietly excludes a part of the community.",
            "From today, guardians choose a preferred language in their portal and \
             every announcement, newsletter, and absence notification arrives \
             translated. Teachers keep writing exactly as before.",
            "We started with one-way messages because the stakes are lower: a \
             mistranslated newsletter is embarrassing, a mistranslated safeguarding \
             conversation is dangerous. Two-way message translation ships later this \
             year with an always-visible original text.",
        ],
    },
    Post {
        slug: "acadex-series-a",
        title: "Acadex raises $12M to bring calm software to school offices",
        category: "Company",
        author: "Sofia Lindqvist",
        date: "January 22, 2025",
        excerpt:
            "We have raised a Series A to grow the team and deepen the platform. The \
             plan: more of the same, faster.",
        body: &[
            "Four years ago we started Acadex with a simple observation: the people \
             who run schools deserve software as good as the tools the best-funded \
             startups use, and they almost never get it.",
            "Today 400 schools across 14 countries run their day on Acadex. We are \
             announcing a $12M Series A to grow the engineering and support teams \
             behind them.",
            "What will not change: no ads, no selling student data, no surprise \
             repricing. Schools plan in years, and a system of record has to be \
             trustworthy on the same timescale.",
        ],
    },
];
