use url::Url;

use crate::{
    dto::checkout::{CheckoutOutcome, CheckoutRequest},
    error::{AppError, AppResult},
    models::{CartLineItem, StoreConfig},
    money::format_rupiah,
    services::cart_service::CartStore,
};

/// Destination used when the store config does not carry a number.
pub const FALLBACK_WHATSAPP: &str = "628123456789";

/// Validate the cart and checkout fields, compose the order message and
/// the wa.me handoff link, then clear the cart. The clear is optimistic:
/// there is no delivery confirmation from the external channel, so a
/// composed link is treated as a submitted order.
pub fn checkout(
    cart: &mut CartStore,
    store: &StoreConfig,
    request: &CheckoutRequest,
) -> AppResult<CheckoutOutcome> {
    if cart.is_empty() {
        return Err(AppError::Validation("Your cart is empty!".into()));
    }
    if request.customer_name.trim().is_empty() || request.address.trim().is_empty() {
        return Err(AppError::Validation(
            "Please fill in your name and address.".into(),
        ));
    }

    let message = compose_message(cart.items(), cart.total(), request);
    let number = store.whatsapp.as_deref().unwrap_or(FALLBACK_WHATSAPP);
    let url = handoff_url(number, &message)?;

    cart.clear()?;

    Ok(CheckoutOutcome { message, url })
}

/// Deterministic multi-line order summary, one block per line item.
pub fn compose_message(items: &[CartLineItem], total: i64, request: &CheckoutRequest) -> String {
    let mut message = String::from("Halo, saya ingin pesan:\n\n");

    for item in items {
        message.push_str(&format!(
            "\u{1f36a} {} x{} \u{2014} {}\n",
            item.name,
            item.qty,
            format_rupiah(item.line_total())
        ));
        if !item.toppings.is_empty() {
            let names: Vec<&str> = item.toppings.iter().map(|t| t.name.as_str()).collect();
            message.push_str(&format!("   + Topping: {}\n", names.join(", ")));
        }
        message.push('\n');
    }

    message.push_str(&format!("Total: {}\n\n", format_rupiah(total)));
    message.push_str(&format!("Nama: {}\n", request.customer_name));
    message.push_str(&format!("Alamat: {}\n", request.address));
    message.push_str(&format!("Metode Pembayaran: {}", request.payment_method));

    message
}

/// Build the messaging deep link with the order text as an encoded query
/// parameter. Opening it is the caller's business.
pub fn handoff_url(number: &str, message: &str) -> AppResult<String> {
    let url = Url::parse_with_params(&format!("https://wa.me/{number}"), [("text", message)])?;
    Ok(url.into())
}
