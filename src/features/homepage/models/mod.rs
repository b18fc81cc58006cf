mod buttons;
mod sections;

pub use buttons::{ButtonSize, ButtonStyle, SectionButton};
pub use sections::{
    ClientReview, DiasporaChallenge, DiasporaSection, Feature, FeaturesSection, HeroSection,
    NewsletterSection, PortfolioSection, ServiceItem, ServicesSection, StatItem, StatsSection,
    Step, StepsSection, WhoWeAreSection,
};
