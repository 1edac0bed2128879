use super::ServiceAreaDefinition;

// Slugs are never translated; names are proper nouns.
pub const AREAS: &[ServiceAreaDefinition] = &[
    ServiceAreaDefinition {
        slug: "birmingham",
        name: "Birmingham",
        zip_codes: &["35203", "35205", "35206", "35222", "35233", "35234"],
        landmarks: &["Vulcan Park", "Railroad Park", "UAB"],
    },
    ServiceAreaDefinition {
        slug: "hoover",
        name: "Hoover",
        zip_codes: &["35216", "35226", "35244"],
        landmarks: &["Riverchase Galleria", "Hoover Met"],
    },
    ServiceAreaDefinition {
        slug: "vestavia-hills",
        name: "Vestavia Hills",
        zip_codes: &["35216", "35242", "35243"],
        landmarks: &["Vestavia Hills City Center"],
    },
    ServiceAreaDefinition {
        slug: "mountain-brook",
        name: "Mountain Brook",
        zip_codes: &["35213", "35223"],
        landmarks: &["Mountain Brook Village", "Birmingham Zoo"],
    },
    ServiceAreaDefinition {
        slug: "homewood",
        name: "Homewood",
        zip_codes: &["35209", "35229"],
        landmarks: &["Samford University", "Homewood Central Park"],
    },
    ServiceAreaDefinition {
        slug: "trussville",
        name: "Trussville",
        zip_codes: &["35173"],
        landmarks: &[],
    },
    ServiceAreaDefinition {
        slug: "pelham",
        name: "Pelham",
        zip_codes: &["35124"],
        landmarks: &["Oak Mountain State Park"],
    },
    ServiceAreaDefinition {
        slug: "alabaster",
        name: "Alabaster",
        zip_codes: &["35007"],
        landmarks: &[],
    },
    ServiceAreaDefinition {
        slug: "helena",
        name: "Helena",
        zip_codes: &["35080"],
        landmarks: &["Old Town Helena"],
    },
    ServiceAreaDefinition {
        slug: "bessemer",
        name: "Bessemer",
        zip_codes: &["35020", "35022", "35023"],
        landmarks: &[],
    },
    ServiceAreaDefinition {
        slug: "gardendale",
        name: "Gardendale",
        zip_codes: &["35071"],
        landmarks: &[],
    },
    ServiceAreaDefinition {
        slug: "center-point",
        name: "Center Point",
        zip_codes: &["35215"],
        landmarks: &[],
    },
];
