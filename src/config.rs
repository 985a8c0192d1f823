
pub const CMS_PROJECT_ID: &str = "h1r3w1r3";
pub const CMS_DATASET: &str = "production";
pub const CMS_API_VERSION: &str = "2023-05-03";

/// External scheduling page every demo button points at.
pub const SCHEDULING_URL: &str = "https://cal.com/hirewire/demo";

#[cfg(debug_assertions)]
pub fn get_cms_url() -> String {
    // Live API so drafts published a second ago show up locally
    format!("https://{}.api.sanity.io/v{}/data/query/{}", CMS_PROJECT_ID, CMS_API_VERSION, CMS_DATASET)
}

#[cfg(not(debug_assertions))]
pub fn get_cms_url() -> String {
    format!("https://{}.apicdn.sanity.io/v{}/data/query/{}", CMS_PROJECT_ID, CMS_API_VERSION, CMS_DATASET)
}
