#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpertiseArea {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Out of 100.
    pub proficiency: u8,
    pub image: &'static str,
    pub applications: &'static [&'static str],
}

pub const EXPERTISE: &[ExpertiseArea] = &[
    ExpertiseArea {
        id: "ai",
        title: "Artificial Intelligence",
        description: "Transforming sports with machine learning, computer vision, and predictive analytics for performance optimization and fan experiences.",
        proficiency: 95,
        image: "/images/expertise-ai.jpg",
        applications: &[
            "Athlete Performance Analysis",
            "Fan Behavior Prediction",
            "Automated Content Generation",
            "Tactical Decision Support",
        ],
    },
    ExpertiseArea {
        id: "blockchain",
        title: "Blockchain Technology",
        description: "Pioneering decentralized solutions for ticketing, digital collectibles, loyalty programs, and transparent governance.",
        proficiency: 90,
        image: "/images/expertise-blockchain.jpg",
        applications: &[
            "Smart Ticket Distribution",
            "NFT Strategy & Development",
            "Fan Token Ecosystems",
            "Transparent Revenue Sharing",
        ],
    },
    ExpertiseArea {
        id: "fan",
        title: "Fan Engagement",
        description: "Creating immersive digital experiences that deepen audience connections through personalization, gamification, and interactive content.",
        proficiency: 97,
        image: "/images/expertise-fan.jpg",
        applications: &[
            "Second Screen Experiences",
            "Augmented Reality Activation",
            "Community Building Platforms",
            "Personalized Content Delivery",
        ],
    },
    ExpertiseArea {
        id: "data",
        title: "Data Architecture",
        description: "Designing comprehensive data ecosystems that convert information into actionable insights for strategic advantage.",
        proficiency: 93,
        image: "/images/expertise-data.jpg",
        applications: &[
            "Performance Metrics Framework",
            "Centralized Data Warehousing",
            "Real-time Analytics Dashboards",
            "Predictive Modeling Systems",
        ],
    },
    ExpertiseArea {
        id: "brand",
        title: "Brand Architecture",
        description: "Structuring sports properties to maximize recognition, loyalty, and commercial opportunity across diverse touchpoints.",
        proficiency: 98,
        image: "/images/expertise-brand.jpg",
        applications: &[
            "Digital Identity Development",
            "Multi-channel Brand Strategy",
            "Legacy Planning Frameworks",
            "Brand Extension Modeling",
        ],
    },
];
