use crate::{
    models::CartLineItem, money::format_rupiah, render::escape, services::cart_service::CartStore,
};

const IMAGE_FALLBACK: &str = "https://placehold.co/100x100/FFD6E8/FF5C9E?text=Cookie";

/// The cart overlay: badge count, line items in insertion order, total.
pub fn render_overlay(cart: &CartStore) -> String {
    format!(
        "<div class=\"cart-overlay\" id=\"cartOverlay\">\
         <span class=\"cart-badge\" id=\"cartBadge\">{badge}</span>\
         <div id=\"cartItems\">{items}</div>\
         <div class=\"cart-total\" id=\"cartTotal\">{total}</div>\
         </div>",
        badge = cart.unit_count(),
        items = render_items(cart.items()),
        total = format_rupiah(cart.total()),
    )
}

pub fn render_items(items: &[CartLineItem]) -> String {
    if items.is_empty() {
        return "<div class=\"empty-cart\">Your cart is empty.</div>".to_string();
    }
    items.iter().map(render_item).collect()
}

fn render_item(item: &CartLineItem) -> String {
    let image = if item.image.is_empty() {
        IMAGE_FALLBACK
    } else {
        &item.image
    };
    let toppings = if item.toppings.is_empty() {
        String::new()
    } else {
        let names: Vec<String> = item.toppings.iter().map(|t| escape(&t.name)).collect();
        format!(
            "<div class=\"cart-item-toppings\">+ {}</div>",
            names.join(", ")
        )
    };
    format!(
        "<div class=\"cart-item\" data-item-id=\"{id}\">\
         <img src=\"{image}\" class=\"cart-item-img\">\
         <div class=\"cart-item-details\">\
         <div class=\"cart-item-title\">{name}</div>\
         <div class=\"cart-item-price\">{price}</div>\
         {toppings}\
         <div class=\"cart-controls\">\
         <button class=\"qty-btn\" data-action=\"qty\" data-delta=\"-1\">-</button>\
         <span>{qty}</span>\
         <button class=\"qty-btn\" data-action=\"qty\" data-delta=\"1\">+</button>\
         <button class=\"remove-btn\" data-action=\"remove\">x</button>\
         </div></div></div>",
        id = item.id,
        image = escape(image),
        name = escape(&item.name),
        price = format_rupiah(item.unit_price),
        qty = item.qty,
    )
}
