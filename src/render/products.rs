use crate::{
    models::{Product, Topping},
    money::format_rupiah,
    render::escape,
    state::ProductSelection,
};

const IMAGE_FALLBACK: &str = "https://placehold.co/400x400/e0f2fe/0087F7?text=Cookie";

/// One card per product, in catalog order.
pub fn render_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_card).collect();
    format!("<div class=\"products-grid\" id=\"productsGrid\">{cards}</div>")
}

fn render_card(product: &Product) -> String {
    let image = if product.image.is_empty() {
        IMAGE_FALLBACK
    } else {
        &product.image
    };
    format!(
        "<div class=\"product-card\" data-product-id=\"{id}\">\
         <div class=\"product-image-wrapper\"><img src=\"{image}\" alt=\"{name}\" class=\"product-image\"></div>\
         <div class=\"product-info\">\
         <div class=\"product-category\">{category}</div>\
         <h3 class=\"product-title\">{name}</h3>\
         <div class=\"product-footer\">\
         <div class=\"product-price\">{price}</div>\
         <button class=\"btn-add-mini\" data-action=\"open\" data-product-id=\"{id}\">+</button>\
         </div></div></div>",
        id = escape(&product.id),
        image = escape(image),
        name = escape(&product.name),
        category = escape(&product.category),
        price = format_rupiah(product.price),
    )
}

/// Body of the product-detail overlay: description, quantity control,
/// topping checklist and the running total on the add button.
pub fn render_modal(selection: &ProductSelection, available: &[&Topping]) -> String {
    let product = &selection.product;
    let mut body = format!(
        "<div class=\"modal-product\">\
         <h2>{name}</h2>\
         <p>{description}</p>\
         <h3 class=\"modal-price\">{price}</h3>\
         </div>\
         <div class=\"qty-control\">\
         <button class=\"qty-btn\" data-action=\"qty\" data-delta=\"-1\">-</button>\
         <span id=\"modalQty\">{qty}</span>\
         <button class=\"qty-btn\" data-action=\"qty\" data-delta=\"1\">+</button>\
         </div>",
        name = escape(&product.name),
        description = escape(&product.description),
        price = format_rupiah(product.price),
        qty = selection.qty,
    );

    if !available.is_empty() {
        body.push_str("<div class=\"toppings-list\">");
        for topping in available {
            let checked = if selection.toppings.iter().any(|t| t.id == topping.id) {
                " checked"
            } else {
                ""
            };
            body.push_str(&format!(
                "<label class=\"topping-option\"><span>{name}</span><span>+{price}</span>\
                 <input type=\"checkbox\" value=\"{id}\"{checked}></label>",
                name = escape(&topping.name),
                price = format_rupiah(topping.price),
                id = escape(&topping.id),
            ));
        }
        body.push_str("</div>");
    }

    body.push_str(&format!(
        "<button class=\"btn btn-primary\" data-action=\"add\">Add to Order &bull; <span id=\"modalTotal\">{}</span></button>",
        format_rupiah(selection.total())
    ));

    format!("<div class=\"modal active\" id=\"productModal\"><div class=\"modal-body\">{body}</div></div>")
}
