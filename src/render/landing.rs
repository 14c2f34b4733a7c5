//! Landing fragments. Each projection falls back per field: a missing or
//! empty field keeps its hardcoded default instead of blanking the region.

use crate::{models::LandingContent, render::escape};

const DEFAULT_TITLE: &str = "BiteBabe Soft Cookies";
const DEFAULT_HERO_TITLE: &str = "Softness in Every Bite";
const DEFAULT_HERO_SUBTITLE: &str = "Premium homemade soft cookies with belgian chocolate.";
const DEFAULT_HERO_BUTTON: &str = "Order Now";
const DEFAULT_FEATURE_ICON: &str = "\u{2728}";

pub fn seo_title(content: &LandingContent) -> &str {
    content
        .seo
        .as_ref()
        .and_then(|seo| seo.title.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
}

pub fn seo_description(content: &LandingContent) -> &str {
    content
        .seo
        .as_ref()
        .and_then(|seo| seo.description.as_deref())
        .unwrap_or_default()
}

pub fn render_hero(content: &LandingContent) -> String {
    let hero = content.hero.as_ref();
    let pick = |field: Option<&str>, default: &'static str| -> String {
        match field.filter(|v| !v.is_empty()) {
            Some(value) => escape(value),
            None => default.to_string(),
        }
    };
    format!(
        "<section class=\"hero\">\
         <h1 class=\"hero-title\">{title}</h1>\
         <p class=\"hero-subtitle\">{subtitle}</p>\
         <a class=\"btn\" href=\"#productsGrid\">{button}</a>\
         </section>",
        title = pick(hero.and_then(|h| h.title.as_deref()), DEFAULT_HERO_TITLE),
        subtitle = pick(
            hero.and_then(|h| h.subtitle.as_deref()),
            DEFAULT_HERO_SUBTITLE
        ),
        button = pick(
            hero.and_then(|h| h.button_text.as_deref()),
            DEFAULT_HERO_BUTTON
        ),
    )
}

/// The about section renders only when explicitly enabled.
pub fn render_about(content: &LandingContent) -> Option<String> {
    let about = content.about.as_ref().filter(|a| a.enabled)?;
    Some(format!(
        "<section class=\"about\" id=\"about\">\
         <h2 id=\"aboutTitle\">{title}</h2>\
         <p id=\"aboutDescription\">{description}</p>\
         </section>",
        title = escape(about.title.as_deref().unwrap_or_default()),
        description = escape(about.description.as_deref().unwrap_or_default()),
    ))
}

pub fn render_features(content: &LandingContent) -> String {
    if content.features.is_empty() {
        return String::new();
    }
    let cards: String = content
        .features
        .iter()
        .map(|feature| {
            format!(
                "<div class=\"feature-card\">\
                 <div class=\"feature-icon\">{icon}</div>\
                 <h3>{title}</h3>\
                 <p>{description}</p>\
                 </div>",
                icon = escape(feature.icon.as_deref().unwrap_or(DEFAULT_FEATURE_ICON)),
                title = escape(feature.title.as_deref().unwrap_or_default()),
                description = escape(feature.description.as_deref().unwrap_or_default()),
            )
        })
        .collect();
    format!("<div class=\"features-grid\" id=\"featuresGrid\">{cards}</div>")
}

pub fn render_footer(content: &LandingContent) -> String {
    let copyright = content
        .footer
        .as_ref()
        .and_then(|f| f.copyright.as_deref())
        .unwrap_or_default();
    format!("<footer class=\"footer\"><p>{}</p></footer>", escape(copyright))
}
