mod money;

pub mod op;
mod secret;

pub use money::{FeeRate, Money, MoneyConversionError, CENTS_PER_UNIT};
pub use secret::Secret;
