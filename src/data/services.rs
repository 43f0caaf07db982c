#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceCategory {
    Digital,
    Revenue,
    Legacy,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 3] = [ServiceCategory::Digital, ServiceCategory::Revenue, ServiceCategory::Legacy];

    pub fn title(self) -> &'static str {
        match self {
            ServiceCategory::Digital => "Digital Transformation Strategy",
            ServiceCategory::Revenue => "Revenue & Fan Engagement",
            ServiceCategory::Legacy => "Legacy & Brand Development",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "ai-strategy",
        title: "AI Implementation",
        description: "Harness the power of artificial intelligence to transform your sports operations, athlete performance analytics, and decision-making processes.",
        category: ServiceCategory::Digital,
    },
    Service {
        id: "blockchain",
        title: "Blockchain Integration",
        description: "Implement secure, transparent blockchain solutions for ticketing, digital collectibles, and smart contract management.",
        category: ServiceCategory::Digital,
    },
    Service {
        id: "data-transformation",
        title: "Data Transformation",
        description: "Convert raw sports data into actionable insights through advanced analytics platforms and visualization dashboards.",
        category: ServiceCategory::Digital,
    },
    Service {
        id: "nft-marketplace",
        title: "NFT Experiences",
        description: "Create engaging digital collectibles and experiences that connect fans with athletes and teams in unprecedented ways.",
        category: ServiceCategory::Revenue,
    },
    Service {
        id: "fan-engagement",
        title: "Fan Engagement Platforms",
        description: "Build interactive platforms that deepen fan relationships through personalized content, gamification, and community features.",
        category: ServiceCategory::Revenue,
    },
    Service {
        id: "smart-venue",
        title: "Smart Venue Technology",
        description: "Transform venues with connected technology that improves operations, safety, and the matchday experience.",
        category: ServiceCategory::Revenue,
    },
    Service {
        id: "brand-architecture",
        title: "Brand Architecture",
        description: "Structure sports properties to maximize recognition, loyalty, and commercial opportunity across every touchpoint.",
        category: ServiceCategory::Legacy,
    },
    Service {
        id: "career-legacy",
        title: "Career Legacy Planning",
        description: "Help athletes build lasting personal brands and business ventures that extend well beyond their playing careers.",
        category: ServiceCategory::Legacy,
    },
    Service {
        id: "metaverse",
        title: "Metaverse Strategy",
        description: "Establish a presence in virtual worlds with strategies for immersive experiences, digital assets, and new revenue streams.",
        category: ServiceCategory::Legacy,
    },
];

pub fn in_category(category: ServiceCategory) -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(move |s| s.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_services() {
        for category in ServiceCategory::ALL {
            assert_eq!(in_category(category).count(), 3, "{}", category.title());
        }
    }
}
