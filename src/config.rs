use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Scroll requests and missed anchors are visible while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND_NAME: &str = "GenZ Money";
pub const BRAND_REGION: &str = "India";

pub const HERO_SCENE_URL: &str = "https://prod.spline.design/41MGRk-UDPKO-l6W/scene.splinecode";

pub const EARLY_ACCESS_HREF: &str = "#early-access";
pub const BE_MENTOR_HREF: &str = "#be-mentor";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_are_in_page_fragments() {
        assert!(EARLY_ACCESS_HREF.starts_with('#'));
        assert!(BE_MENTOR_HREF.starts_with('#'));
    }

    #[test]
    fn scene_is_a_spline_asset() {
        assert!(HERO_SCENE_URL.starts_with("https://"));
        assert!(HERO_SCENE_URL.ends_with(".splinecode"));
    }

    #[test]
    fn debug_builds_log_more() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
