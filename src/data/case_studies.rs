//! Case studies shown in the results section.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Milestone {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub before: f64,
    pub after: f64,
    pub lower_is_better: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub sport: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub milestones: &'static [Milestone],
    pub metrics: &'static [Metric],
    pub roi_percent: u32,
    pub testimonial: Testimonial,
    pub image: &'static str,
}

pub const CATEGORIES: &[&str] = &["All", "Performance", "Technology", "Fan Engagement", "Commercial"];

const fn metric(name: &'static str, before: f64, after: f64) -> Metric {
    Metric {
        name,
        before,
        after,
        lower_is_better: false,
    }
}

const fn lower(name: &'static str, before: f64, after: f64) -> Metric {
    Metric {
        name,
        before,
        after,
        lower_is_better: true,
    }
}

const fn milestone(date: &'static str, title: &'static str, description: &'static str) -> Milestone {
    Milestone {
        date,
        title,
        description,
    }
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "performance-optimization",
        title: "Elite Performance Optimization Program",
        client: "European Elite Football Club",
        category: "Performance",
        sport: "Football",
        challenge: "Declining player availability rate and increasing soft tissue injuries affecting team performance in critical matches.",
        solution: "Implemented a custom data-driven load management system with real-time monitoring and predictive analytics to optimize training intensity and recovery protocols.",
        start: "2023-01",
        end: "2023-06",
        milestones: &[
            milestone("2023-01", "Initial Assessment", "Comprehensive evaluation of current performance systems."),
            milestone("2023-02", "Data Integration", "Connected disparate data sources into unified dashboard."),
            milestone("2023-03", "Model Development", "Created predictive injury risk algorithms."),
            milestone("2023-05", "Staff Training", "Comprehensive training on new systems and protocols."),
            milestone("2023-06", "Full Implementation", "Complete rollout across first team and academy."),
        ],
        metrics: &[
            metric("Player Availability (%)", 72.0, 91.0),
            lower("Soft Tissue Injuries per Month", 8.5, 3.2),
            lower("Recovery Time (days)", 18.0, 12.0),
            metric("High-Intensity Minutes per Game", 32.0, 41.0),
        ],
        roi_percent: 312,
        testimonial: Testimonial {
            quote: "Novastra's approach has transformed our performance department. The data integration and predictive models have given us capabilities we didn't know were possible.",
            author: "Performance Director",
            position: "European Football Club",
        },
        image: "https://cdn.pixabay.com/photo/2014/11/17/13/17/crossfit-534615_1280.jpg",
    },
    CaseStudy {
        id: "technology-transformation",
        title: "Digital Transformation Initiative",
        client: "Premier Motorsport Racing Team",
        category: "Technology",
        sport: "Motorsport",
        challenge: "Legacy systems causing data silos and inefficient workflows between race engineering and factory teams.",
        solution: "Designed and implemented a cloud-based data ecosystem with real-time synchronization and ML-powered decision support tools.",
        start: "2022-09",
        end: "2023-04",
        milestones: &[
            milestone("2022-09", "System Architecture", "Design of new cloud infrastructure."),
            milestone("2022-11", "Data Pipeline Development", "Creation of real-time data pipelines."),
            milestone("2023-01", "ML Model Training", "Development of predictive analytics models."),
            milestone("2023-02", "Winter Testing Integration", "Initial deployment during pre-season testing."),
            milestone("2023-04", "Race Season Launch", "Full deployment for race season operations."),
        ],
        metrics: &[
            lower("Data Processing Time (minutes)", 42.0, 3.5),
            lower("Strategy Decision Time (seconds)", 85.0, 12.0),
            metric("System Reliability (%)", 94.5, 99.8),
            metric("Cross-department Collaboration Score", 6.2, 8.9),
        ],
        roi_percent: 280,
        testimonial: Testimonial {
            quote: "In a sport where milliseconds matter, Novastra delivered technology that has fundamentally changed how we operate. The ROI has exceeded our most optimistic projections.",
            author: "Chief Technical Officer",
            position: "Motorsport Organization",
        },
        image: "https://cdn.pixabay.com/photo/2020/04/08/16/32/server-5017527_1280.jpg",
    },
    CaseStudy {
        id: "fan-engagement",
        title: "Next-Gen Fan Engagement Platform",
        client: "Professional Basketball Franchise",
        category: "Fan Engagement",
        sport: "Basketball",
        challenge: "Declining in-arena attendance and digital engagement metrics among key demographic segments.",
        solution: "Created an immersive fan experience platform combining AR/VR technology, gamification, and personalized content delivery.",
        start: "2022-11",
        end: "2023-08",
        milestones: &[
            milestone("2022-11", "Market Research", "In-depth analysis of fan preferences and behaviors."),
            milestone("2023-01", "Platform Design", "UX/UI design and technology framework development."),
            milestone("2023-03", "Beta Testing", "Limited release testing with focus groups."),
            milestone("2023-05", "V1 Release", "Initial public release with core features."),
            milestone("2023-08", "V2 Release", "Full feature release with AR integration."),
        ],
        metrics: &[
            metric("Arena Attendance (% capacity)", 82.0, 97.0),
            metric("App Engagement (minutes/user/week)", 12.0, 34.0),
            metric("Merchandise Revenue ($/user)", 37.0, 58.0),
            metric("Fan Satisfaction Score", 7.2, 9.1),
        ],
        roi_percent: 246,
        testimonial: Testimonial {
            quote: "Novastra understood our challenges from day one. Their innovative approach has created a fan experience that's become the envy of the league.",
            author: "VP of Fan Experience",
            position: "Professional Sports Team",
        },
        image: "https://cdn.pixabay.com/photo/2015/09/02/12/25/basketball-917857_1280.jpg",
    },
];

pub fn in_category(category: &str) -> Vec<&'static CaseStudy> {
    CASE_STUDIES
        .iter()
        .filter(|study| category == "All" || study.category == category)
        .collect()
}

pub fn find(id: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|study| study.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::improvement::improvement;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = CASE_STUDIES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), CASE_STUDIES.len());
    }

    #[test]
    fn every_metric_improved() {
        for study in CASE_STUDIES {
            for m in study.metrics {
                let value = improvement(m.before, m.after, m.lower_is_better).unwrap();
                assert!(value > 0.0, "{} / {}", study.id, m.name);
            }
        }
    }

    #[test]
    fn category_filter() {
        assert_eq!(in_category("All").len(), CASE_STUDIES.len());
        assert_eq!(in_category("Technology").len(), 1);
        assert!(in_category("Commercial").is_empty());
        for category in CATEGORIES {
            assert!(in_category(category).len() <= CASE_STUDIES.len());
        }
    }

    #[test]
    fn milestones_are_chronological() {
        for study in CASE_STUDIES {
            assert!(study.milestones.windows(2).all(|w| w[0].date <= w[1].date));
            assert_eq!(study.milestones.first().map(|m| m.date), Some(study.start));
            assert_eq!(study.milestones.last().map(|m| m.date), Some(study.end));
        }
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("fan-engagement").map(|s| s.sport), Some("Basketball"));
        assert!(find("missing").is_none());
    }
}
