use crate::{
    config::AppConfig,
    models::{About, Footer, Hero, LandingContent, Seo},
    services::fetch_json,
};

/// Load the landing page copy, substituting the built-in defaults on any
/// failure. Unlike the catalog loader this result is applied field by
/// field at render time, so a sparse live document is fine too.
pub async fn load(client: &reqwest::Client, config: &AppConfig) -> LandingContent {
    match fetch_json::<LandingContent>(client, &config.landing_url(), "landing content").await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(error = %err, "landing content fetch failed, using defaults");
            default_content()
        }
    }
}

pub fn default_content() -> LandingContent {
    LandingContent {
        hero: Some(Hero {
            title: Some("Softness in Every Bite".into()),
            subtitle: Some("Premium homemade soft cookies with belgian chocolate.".into()),
            button_text: Some("Order Now".into()),
        }),
        about: Some(About {
            enabled: false,
            title: None,
            description: None,
        }),
        features: Vec::new(),
        seo: Some(Seo {
            title: Some("BiteBabe Soft Cookies".into()),
            description: Some("Softness in every bite. Premium soft cookies homemade.".into()),
        }),
        footer: Some(Footer {
            copyright: Some("2024 BiteBabe Soft Cookies. All rights reserved.".into()),
        }),
    }
}
