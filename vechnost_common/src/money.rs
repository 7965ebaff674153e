use std::{
    borrow::Cow,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};
use thiserror::Error;

use crate::op;

pub const CENTS_PER_UNIT: i64 = 100;

//--------------------------------------       Money        ----------------------------------------------------------

/// A monetary amount, held as an integer number of cents.
///
/// Keeping amounts in integer cents means that addition and database
/// aggregation (`SUM` over order totals) are exact. Conversions from decimal
/// values round to the nearest cent, halves to even.
///
/// On the wire, `Money` reads and writes JSON numbers denominated in whole
/// currency units, so `{"price": 205000}` and `{"price": 205000.0}` both
/// parse to 20 500 000 cents.
#[derive(Debug, Clone, Copy, Default, Type, Eq, PartialEq, Ord, PartialOrd)]
#[sqlx(transparent)]
pub struct Money(i64);

op!(binary Money, Add, add);
op!(binary Money, Sub, sub);
op!(inplace Money, AddAssign, add_assign);
op!(inplace Money, SubAssign, sub_assign);
op!(unary Money, Neg, neg);

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in cents: {0}")]
pub struct MoneyConversionError(String);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Converts a decimal amount in whole units to cents, rounding halves to
    /// even (`2.675` becomes 268 cents, `2.665` becomes 266).
    pub fn from_decimal(value: Decimal) -> Result<Self, MoneyConversionError> {
        value
            .checked_mul(Decimal::from(CENTS_PER_UNIT))
            .map(|cents| cents.round())
            .and_then(|cents| cents.to_i64())
            .map(Self)
            .ok_or_else(|| MoneyConversionError(format!("{value} is out of range")))
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|e| MoneyConversionError(format!("{s}: {e}")))?;
        Self::from_decimal(value)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        match self.to_decimal().to_f64() {
            Some(units) => serializer.serialize_f64(units),
            None => Err(serde::ser::Error::custom("amount is not representable as a float")),
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        struct MoneyVisitor;

        impl de::Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a monetary amount as a number or decimal string")
            }

            fn visit_i64<E: de::Error>(self, units: i64) -> Result<Money, E> {
                units
                    .checked_mul(CENTS_PER_UNIT)
                    .map(Money)
                    .ok_or_else(|| E::custom(format!("{units} is out of range")))
            }

            fn visit_u64<E: de::Error>(self, units: u64) -> Result<Money, E> {
                i64::try_from(units)
                    .ok()
                    .and_then(|units| units.checked_mul(CENTS_PER_UNIT))
                    .map(Money)
                    .ok_or_else(|| E::custom(format!("{units} is out of range")))
            }

            fn visit_f64<E: de::Error>(self, units: f64) -> Result<Money, E> {
                let value = Decimal::from_f64(units).ok_or_else(|| E::custom(format!("{units} is not a finite amount")))?;
                Money::from_decimal(value).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Money, E> {
                Money::from_str(s).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

//--------------------------------------      FeeRate       ----------------------------------------------------------

/// A percentage surcharge, e.g. `FeeRate::from(2)` is a 2% fee.
///
/// Stored in the database as its exact decimal string and serialized to JSON
/// as a plain number.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct FeeRate(Decimal);

impl FeeRate {
    pub const ZERO: FeeRate = FeeRate(Decimal::ZERO);

    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// The fee this rate levies on `base`, or `None` if the product is not
    /// representable.
    pub fn apply_to(&self, base: Decimal) -> Option<Decimal> {
        base.checked_mul(self.0).and_then(|fee| fee.checked_div(Decimal::ONE_HUNDRED))
    }
}

impl From<Decimal> for FeeRate {
    fn from(rate: Decimal) -> Self {
        Self(rate)
    }
}

impl From<i64> for FeeRate {
    fn from(percent: i64) -> Self {
        Self(Decimal::from(percent))
    }
}

impl Display for FeeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for FeeRate {
    type Err = MoneyConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self).map_err(|e| MoneyConversionError(format!("{s}: {e}")))
    }
}

impl Serialize for FeeRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for FeeRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}

impl Type<Sqlite> for FeeRate {
    fn type_info() -> SqliteTypeInfo {
        <&str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <&str as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for FeeRate {
    fn encode_by_ref(&self, args: &mut Vec<SqliteArgumentValue<'q>>) -> Result<IsNull, BoxDynError> {
        args.push(SqliteArgumentValue::Text(Cow::Owned(self.0.to_string())));
        Ok(IsNull::No)
    }
}

impl<'r> Decode<'r, Sqlite> for FeeRate {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(Self(Decimal::from_str(text)?))
    }
}
