mod badge;
mod cta;
mod footer;
mod section;

pub use badge::Badge;
pub use cta::CtaBanner;
pub use footer::Footer;
pub use section::SectionHeading;
