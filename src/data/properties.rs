/// A sports property shown in the partner carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SportsProperty {
    pub name: &'static str,
    pub sport: &'static str,
    pub logo: &'static str,
}

pub const PROPERTIES: &[SportsProperty] = &[
    SportsProperty {
        name: "European Elite Football Club",
        sport: "Football",
        logo: "/images/clients/fcb-logo.png",
    },
    SportsProperty {
        name: "Premier Motorsport Racing Team",
        sport: "Motorsport",
        logo: "/images/clients/f1-logo.png",
    },
    SportsProperty {
        name: "Professional Basketball Franchise",
        sport: "Basketball",
        logo: "/images/clients/heat-logo.png",
    },
    SportsProperty {
        name: "National Tennis Federation",
        sport: "Tennis",
        logo: "/images/clients/tennis-logo.png",
    },
    SportsProperty {
        name: "Collegiate Athletics Conference",
        sport: "Athletics",
        logo: "/images/clients/athletics-logo.png",
    },
];
