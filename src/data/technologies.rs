#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Core,
    Emerging,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Core => "Core Technology",
            Level::Emerging => "Emerging Solution",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Technology {
    pub id: &'static str,
    pub name: &'static str,
    pub icon_url: &'static str,
    pub description: &'static str,
    pub level: Level,
    pub use_cases: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [Technology],
}

pub const TECH_CATEGORIES: &[TechCategory] = &[
    TechCategory {
        name: "Data & Analytics",
        description: "Transforming raw information into actionable intelligence through advanced analytics and visualization.",
        technologies: &[
            Technology {
                id: "python",
                name: "Python",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
                description: "Our primary language for data processing, analytics, and machine learning implementations.",
                level: Level::Core,
                use_cases: &["Athlete performance prediction models", "Injury risk assessments", "Automated video analysis"],
            },
            Technology {
                id: "tensorflow",
                name: "TensorFlow",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tensorflow/tensorflow-original.svg",
                description: "Deep learning framework used for complex pattern recognition and predictive modeling.",
                level: Level::Core,
                use_cases: &["Movement pattern analysis", "Game strategy optimization", "Computer vision for technique analysis"],
            },
            Technology {
                id: "tableau",
                name: "Tableau",
                icon_url: "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/tableau.svg",
                description: "Interactive data visualization tool enabling stakeholders to explore insights intuitively.",
                level: Level::Core,
                use_cases: &["Performance dashboards", "Scouting reports", "Executive KPI tracking"],
            },
            Technology {
                id: "snowflake",
                name: "Snowflake",
                icon_url: "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/snowflake.svg",
                description: "Cloud data platform providing scalable storage and processing capabilities for large datasets.",
                level: Level::Core,
                use_cases: &["Centralized data warehousing", "Cross-team data sharing", "High-performance analytics queries"],
            },
            Technology {
                id: "dbt",
                name: "dbt",
                icon_url: "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/dbt.svg",
                description: "Data transformation tool that enables analytics engineers to transform data in their warehouse efficiently.",
                level: Level::Emerging,
                use_cases: &["Standardizing metrics definitions", "Data quality testing", "Modular analytics workflows"],
            },
        ],
    },
    TechCategory {
        name: "Application Development",
        description: "Building robust, scalable, and user-friendly applications that deliver insights to users across the organization.",
        technologies: &[
            Technology {
                id: "react",
                name: "React",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
                description: "JavaScript library for building interactive user interfaces with reusable components.",
                level: Level::Core,
                use_cases: &["Coaching dashboards", "Fan-facing web apps", "Internal tooling"],
            },
            Technology {
                id: "flutter",
                name: "Flutter",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flutter/flutter-original.svg",
                description: "Cross-platform UI toolkit for building natively compiled applications from a single codebase.",
                level: Level::Emerging,
                use_cases: &["Athlete companion apps", "Matchday apps", "Scouting tools"],
            },
            Technology {
                id: "nodejs",
                name: "Node.js",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
                description: "JavaScript runtime for building scalable network applications and APIs.",
                level: Level::Core,
                use_cases: &["Real-time data APIs", "Ticketing integrations", "Notification services"],
            },
            Technology {
                id: "graphql",
                name: "GraphQL",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/graphql/graphql-plain.svg",
                description: "API query language enabling clients to request exactly the data they need.",
                level: Level::Emerging,
                use_cases: &["Unified data access", "Mobile-friendly APIs", "Partner integrations"],
            },
        ],
    },
    TechCategory {
        name: "Cloud & Infrastructure",
        description: "Leveraging cloud technologies to create scalable, secure, and high-performance systems.",
        technologies: &[
            Technology {
                id: "aws",
                name: "AWS",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original.svg",
                description: "Comprehensive cloud platform with a wide range of services for building sophisticated applications.",
                level: Level::Core,
                use_cases: &["Scalable data platforms", "Media streaming", "Machine learning pipelines"],
            },
            Technology {
                id: "kubernetes",
                name: "Kubernetes",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/kubernetes/kubernetes-plain.svg",
                description: "Container orchestration system for automating application deployment, scaling, and management.",
                level: Level::Core,
                use_cases: &["Matchday traffic scaling", "Service reliability", "Multi-region deployments"],
            },
            Technology {
                id: "terraform",
                name: "Terraform",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/terraform/terraform-original.svg",
                description: "Infrastructure as code tool for building, changing, and versioning infrastructure safely and efficiently.",
                level: Level::Emerging,
                use_cases: &["Reproducible environments", "Compliance controls", "Disaster recovery"],
            },
        ],
    },
    TechCategory {
        name: "Emerging Technologies",
        description: "Exploring cutting-edge solutions to solve complex challenges and create new opportunities.",
        technologies: &[
            Technology {
                id: "ar-vr",
                name: "AR/VR",
                icon_url: "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/oculus.svg",
                description: "Immersive technologies that blend digital content with the physical world or create fully virtual environments.",
                level: Level::Emerging,
                use_cases: &["Immersive fan experiences", "Tactical training simulations", "Virtual venue tours"],
            },
            Technology {
                id: "computer-vision",
                name: "Computer Vision",
                icon_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/opencv/opencv-original.svg",
                description: "AI systems that can analyze and understand visual information from cameras and videos.",
                level: Level::Emerging,
                use_cases: &["Automated player tracking", "Technique analysis", "Broadcast enhancements"],
            },
            Technology {
                id: "wearables",
                name: "Wearable Tech",
                icon_url: "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/garmin.svg",
                description: "Devices that can be worn to collect biometric data and provide real-time feedback.",
                level: Level::Emerging,
                use_cases: &["Load monitoring", "Recovery tracking", "Injury prevention"],
            },
            Technology {
                id: "blockchain",
                name: "Blockchain",
                icon_url: "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons/ethereum.svg",
                description: "Distributed ledger technology enabling secure, transparent, and tamper-proof record-keeping.",
                level: Level::Emerging,
                use_cases: &["Smart ticketing", "Digital collectibles", "Transparent revenue sharing"],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn technology_ids_are_unique() {
        let all: Vec<_> = TECH_CATEGORIES.iter().flat_map(|c| c.technologies.iter()).collect();
        let ids: HashSet<_> = all.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn every_technology_has_use_cases() {
        for category in TECH_CATEGORIES {
            assert!(!category.technologies.is_empty());
            for tech in category.technologies {
                assert!(!tech.use_cases.is_empty(), "{}", tech.id);
            }
        }
    }

    #[test]
    fn emerging_category_holds_only_emerging_solutions() {
        let emerging = TECH_CATEGORIES.last().unwrap();
        assert!(emerging.technologies.iter().all(|t| t.level == Level::Emerging));
    }
}
