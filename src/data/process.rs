#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub sub_steps: &'static [SubStep],
}

const fn sub(title: &'static str, description: &'static str) -> SubStep {
    SubStep { title, description }
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        id: 1,
        title: "Discovery",
        description: "We begin with a deep dive into your organization's current state, challenges, and aspirations. Our discovery phase establishes the foundation for all subsequent work.",
        sub_steps: &[
            sub("Stakeholder Interviews", "Conducting in-depth conversations with key personnel across departments to understand perspectives and pain points."),
            sub("Data Landscape Assessment", "Mapping your existing data ecosystem to identify gaps, redundancies, and opportunities for integration."),
            sub("Competitive Analysis", "Researching industry best practices and competitor approaches to establish benchmarks and identify opportunities."),
            sub("Cultural Assessment", "Understanding the organizational culture to ensure solutions align with your team's values and working style."),
        ],
    },
    ProcessStep {
        id: 2,
        title: "Analysis",
        description: "Through rigorous analysis, we transform raw data into actionable insights. This phase identifies the highest-impact opportunities for innovation.",
        sub_steps: &[
            sub("Gap Analysis", "Identifying critical disparities between current capabilities and desired outcomes."),
            sub("ROI Modeling", "Calculating potential return on investment for various innovation pathways."),
            sub("Barrier Identification", "Pinpointing technological, organizational, or cultural obstacles that must be addressed."),
            sub("Opportunity Prioritization", "Ranking potential initiatives based on impact, feasibility, and alignment with organizational goals."),
        ],
    },
    ProcessStep {
        id: 3,
        title: "Design",
        description: "We create comprehensive, tailored solutions that address your specific challenges while maintaining flexibility for future evolution.",
        sub_steps: &[
            sub("Solution Architecture", "Designing the technical foundation for innovative solutions that integrate with existing systems."),
            sub("Process Engineering", "Developing new workflows that optimize efficiency and effectiveness."),
            sub("User Experience Design", "Creating intuitive interfaces that encourage adoption and maximize utility."),
            sub("Roadmap Development", "Building a phased implementation plan with clear milestones and success metrics."),
        ],
    },
    ProcessStep {
        id: 4,
        title: "Implementation",
        description: "Our implementation approach emphasizes collaboration, knowledge transfer, and sustainable adoption to ensure long-term success.",
        sub_steps: &[
            sub("Agile Deployment", "Utilizing iterative implementation cycles to deliver value quickly and adapt to feedback."),
            sub("Change Management", "Supporting organizational transition through training, communication, and stakeholder engagement."),
            sub("System Integration", "Seamlessly connecting new solutions with existing platforms and data sources."),
            sub("Quality Assurance", "Rigorously testing all aspects of the solution to ensure reliability and performance."),
        ],
    },
    ProcessStep {
        id: 5,
        title: "Measurement",
        description: "We establish robust measurement frameworks to track progress, quantify impact, and identify opportunities for continuous improvement.",
        sub_steps: &[
            sub("KPI Tracking", "Monitoring key performance indicators to measure success against predefined goals."),
            sub("ROI Validation", "Calculating actual return on investment to validate the business case and inform future decisions."),
            sub("User Feedback Collection", "Gathering insights from end-users to identify improvement opportunities and measure satisfaction."),
            sub("Continuous Improvement Planning", "Developing action plans to address identified issues and further enhance performance."),
        ],
    },
];
