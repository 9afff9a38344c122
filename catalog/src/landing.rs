use shared_types::{Feature, LandingResponse, NavLink};

pub const BRAND: &str = "Innovex";

fn nav(label: &str, path: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        path: path.to_string(),
    }
}

fn feature(title: &str, description: &str) -> Feature {
    Feature {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn landing() -> LandingResponse {
    LandingResponse {
        brand: BRAND.to_string(),
        headline: "Where Great Ideas Meet Investment Opportunities".to_string(),
        tagline: "Discover innovative capstone projects from talented students. Connect groundbreaking ideas with investors who believe in the future.".to_string(),
        features: vec![
            feature(
                "Discover Projects",
                "Browse through innovative capstone projects across various fields and technologies. Find ideas that match your investment interests.",
            ),
            feature(
                "Investment Ready",
                "Projects are tagged by investment status. Connect with teams ready to turn their capstone work into real businesses.",
            ),
            feature(
                "Connect & Grow",
                "Students showcase their work. Investors find opportunities. Supervisors track innovation. Everyone wins.",
            ),
        ],
        navigation: vec![
            nav("Projects", "/projects"),
            nav("Upload Project", "/upload"),
            nav("Admin", "/admin"),
        ],
    }
}
