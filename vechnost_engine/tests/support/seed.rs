use vechnost_common::{FeeRate, Money};
use vechnost_engine::{
    db_types::{NewPaymentMethod, NewProduct, NewUser, PaymentGateway, ProductType},
    objects::CreateOrderRequest,
};

/// sha256 of "hunter2".
pub const PASSWORD_HASH: &str = "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7";

pub fn user(email: &str) -> NewUser {
    NewUser {
        name: "Budi".to_string(),
        email: email.to_string(),
        password_hash: PASSWORD_HASH.to_string(),
        phone: None,
    }
}

pub fn product(title: &str, price_units: i64) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: None,
        price: Money::from_units(price_units),
        category_id: None,
        product_type: ProductType::GameTopup,
        provider: None,
        is_active: true,
        tags: Vec::new(),
    }
}

pub fn payment_method(code: &str, gateway: PaymentGateway, fee_percent: FeeRate, fee_flat_units: i64) -> NewPaymentMethod {
    NewPaymentMethod {
        name: code.to_uppercase(),
        code: code.to_string(),
        gateway,
        fee_percent,
        fee_flat: Money::from_units(fee_flat_units),
        is_active: true,
    }
}

pub fn order_for(product_id: i64) -> CreateOrderRequest {
    CreateOrderRequest {
        user_id: None,
        product_id,
        amount: 1,
        target_id: None,
        provider: None,
        payment_method_code: None,
        payment_reference: None,
        note: None,
    }
}
