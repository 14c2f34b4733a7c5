use storefront_engine::{
    dto::checkout::CheckoutRequest,
    error::AppError,
    models::{Product, StoreConfig, Topping},
    money::format_rupiah,
    services::{cart_service::CartStore, checkout_service},
    storage::MemoryStorage,
};

fn request() -> CheckoutRequest {
    CheckoutRequest {
        customer_name: "Budi".into(),
        address: "Jl. Mawar 1".into(),
        payment_method: "Transfer".into(),
    }
}

fn seeded_cart() -> anyhow::Result<CartStore> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let product = Product {
        id: "1".into(),
        name: "Classic Choco Walnut".into(),
        description: String::new(),
        price: 25000,
        category: String::new(),
        image: String::new(),
        topping_ids: vec!["1".into()],
        max_order: Some(10),
    };
    let topping = Topping {
        id: "1".into(),
        name: "Extra Sauce".into(),
        price: 5000,
    };
    cart.add(&product, 2, &[topping])?;
    Ok(cart)
}

#[test]
fn empty_cart_fails_validation_and_clears_nothing() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let store = StoreConfig::default();

    let result = checkout_service::checkout(&mut cart, &store, &request());

    assert!(matches!(result, Err(AppError::Validation(_))));
    Ok(())
}

#[test]
fn blank_customer_fields_fail_validation_and_keep_the_cart() -> anyhow::Result<()> {
    let mut cart = seeded_cart()?;
    let store = StoreConfig::default();
    let mut bad = request();
    bad.customer_name = "   ".into();

    let result = checkout_service::checkout(&mut cart, &store, &bad);

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(cart.len(), 1, "failed checkout must not clear the cart");
    Ok(())
}

#[test]
fn successful_checkout_composes_message_and_clears_cart() -> anyhow::Result<()> {
    let mut cart = seeded_cart()?;
    let store = StoreConfig {
        whatsapp: Some("62899999".into()),
        ..StoreConfig::default()
    };

    let outcome = checkout_service::checkout(&mut cart, &store, &request())?;

    let expected = "Halo, saya ingin pesan:\n\n\
                    \u{1f36a} Classic Choco Walnut x2 \u{2014} Rp 60.000\n   + Topping: Extra Sauce\n\n\
                    Total: Rp 60.000\n\n\
                    Nama: Budi\nAlamat: Jl. Mawar 1\nMetode Pembayaran: Transfer";
    assert_eq!(outcome.message, expected);
    assert!(outcome.url.starts_with("https://wa.me/62899999?text="));
    assert!(cart.is_empty(), "checkout clears the cart optimistically");
    Ok(())
}

#[test]
fn missing_store_number_uses_the_fallback() -> anyhow::Result<()> {
    let mut cart = seeded_cart()?;
    let store = StoreConfig::default();

    let outcome = checkout_service::checkout(&mut cart, &store, &request())?;

    assert!(outcome.url.starts_with(&format!(
        "https://wa.me/{}?text=",
        checkout_service::FALLBACK_WHATSAPP
    )));
    Ok(())
}

#[test]
fn handoff_url_encodes_the_message() -> anyhow::Result<()> {
    let url = checkout_service::handoff_url("628123", "Halo, pesan 2 & 3")?;
    assert_eq!(
        url,
        "https://wa.me/628123?text=Halo%2C+pesan+2+%26+3"
    );
    Ok(())
}

#[test]
fn rupiah_formatting_groups_thousands_without_cents() {
    assert_eq!(format_rupiah(0), "Rp 0");
    assert_eq!(format_rupiah(5000), "Rp 5.000");
    assert_eq!(format_rupiah(60000), "Rp 60.000");
    assert_eq!(format_rupiah(1250000), "Rp 1.250.000");
}
