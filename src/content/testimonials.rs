pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub school: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote:
            "We closed our admissions round two weeks earlier than last year, and for \
             the first time nobody asked which spreadsheet was the real one.",
        name: "Helen Marsh",
        role: "Head of Admissions",
        school: "Riverside Grammar School",
    },
    Testimonial {
        quote:
            "Report card week used to mean late nights for forty teachers. This term \
             the comments were in by Thursday and the printing took an afternoon.",
        name: "Luis Herrera",
        role: "Deputy Principal",
        school: "Colegio San Marcos",
    },
    Testimonial {
        quote:
            "The guardian translations changed parents' evenings. Families who never \
             replied to a newsletter now message us first.",
        name: "Amina Yusuf",
        role: "Community Liaison",
        school: "Northfield Academy Trust",
    },
    Testimonial {
        quote:
            "Our timetable has 31 part-time staff and three shared sports halls. The \
             conflict checker caught clashes we had been living with for years.",
        name: "Petra Novak",
        role: "Timetabler",
        school: "Gymnázium Vltava",
    },
];
