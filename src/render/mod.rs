//! Pure projections of application state into markup fragments. Nothing
//! here mutates state or performs I/O; callers re-render whatever fragment
//! a mutation may have touched.

use crate::state::AppState;

pub mod cart;
pub mod landing;
pub mod products;

/// Escape text for interpolation into markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Brand line for the page header.
pub fn render_store_header(state: &AppState) -> String {
    let store = &state.catalog.store;
    let name = store.name.as_deref().unwrap_or("BiteBabe");
    match store.slogan.as_deref() {
        Some(slogan) => format!(
            "<header class=\"store-header\"><span class=\"brand-name\">{}</span><span class=\"brand-slogan\">{}</span></header>",
            escape(name),
            escape(slogan)
        ),
        None => format!(
            "<header class=\"store-header\"><span class=\"brand-name\">{}</span></header>",
            escape(name)
        ),
    }
}

/// Inline CSS variable overrides from the store theme, if any.
pub fn render_theme_style(state: &AppState) -> String {
    let Some(theme) = state.catalog.store.theme.as_ref() else {
        return String::new();
    };
    let mut vars = String::new();
    for (name, value) in [
        ("--primary", theme.primary.as_deref()),
        ("--bg-soft", theme.background.as_deref()),
        ("--bg-light", theme.light.as_deref()),
        ("--text-dark", theme.text.as_deref()),
        ("--accent", theme.accent.as_deref()),
    ] {
        if let Some(value) = value {
            vars.push_str(&format!("{name}: {};", escape(value)));
        }
    }
    if vars.is_empty() {
        String::new()
    } else {
        format!("<style>:root {{ {vars} }}</style>")
    }
}

/// Assemble the whole storefront document from current state.
pub fn render_page(state: &AppState) -> String {
    let title = landing::seo_title(&state.landing);
    let description = landing::seo_description(&state.landing);

    let mut body = String::new();
    body.push_str(&render_store_header(state));
    body.push_str(&landing::render_hero(&state.landing));
    if let Some(about) = landing::render_about(&state.landing) {
        body.push_str(&about);
    }
    body.push_str(&landing::render_features(&state.landing));
    body.push_str(&products::render_grid(&state.catalog.products));
    if let Some(selection) = state.selection.as_ref() {
        let available = state.catalog.product_toppings(&selection.product);
        body.push_str(&products::render_modal(selection, &available));
    }
    body.push_str(&cart::render_overlay(&state.cart));
    body.push_str(&landing::render_footer(&state.landing));

    format!(
        "<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<meta name=\"description\" content=\"{}\">\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        escape(description),
        render_theme_style(state),
        body
    )
}
