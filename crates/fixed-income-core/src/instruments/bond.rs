//! Fixed coupon bond.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

use crate::error::{BondError, BondResult};

const ISIN_BLANK: &str = "ISIN cannot be null, contain whitespace or empty.";
const CURRENCY_BLANK: &str = "Currency cannot be null, contain whitespace or empty.";
const FACE_VALUE_NOT_POSITIVE: &str = "Face value must be greater than zero.";
const ISSUE_NOT_BEFORE_MATURITY: &str = "Issue date must be earlier than maturity date.";
const COUPON_RATE_NEGATIVE: &str = "Coupon rate cannot be negative.";
const COUPON_FREQUENCY_NOT_POSITIVE: &str =
    "Coupon frequency must be a positive number greater than zero.";

/// A fixed coupon bond.
///
/// Every field is checked once, in [`Bond::new`]; an instance that exists
/// therefore always satisfies:
///
/// - ISIN and currency are neither empty nor whitespace-only
/// - face value is strictly positive
/// - issue date is strictly before maturity date
/// - coupon rate is zero or positive
/// - coupon frequency is at least one
///
/// Values are stored exactly as supplied.
///
/// Equality and hashing follow the field types: dates compare as instants
/// and decimals by numeric value. Two bonds can therefore be equal while
/// their accessors report different offsets or decimal scales.
///
/// # Example
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use fixed_income_core::instruments::Bond;
/// use rust_decimal_macros::dec;
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let bond = Bond::new(
///     "GB1234567890",
///     "GBP",
///     dec!(1000),
///     utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap(),
///     dec!(5.0),
///     utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(bond.isin(), "GB1234567890");
/// assert_eq!(bond.coupon_frequency(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    /// ISIN or other identifier.
    isin: String,

    /// Currency code.
    currency: String,

    /// Principal repaid at maturity.
    face_value: Decimal,

    /// Maturity date.
    maturity_date: DateTime<FixedOffset>,

    /// Coupon rate, in the caller's units (5.0 or 0.05 for five percent).
    coupon_rate: Decimal,

    /// Issue date.
    issue_date: DateTime<FixedOffset>,

    /// Coupon payments per year.
    coupon_frequency: i32,
}

impl Bond {
    /// Creates a validated bond.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// ISIN, currency, face value, issue/maturity ordering, coupon rate,
    /// coupon frequency.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidArgument`] for a blank ISIN or currency,
    /// or when the issue date is not before the maturity date.
    /// Returns [`BondError::OutOfRange`] for a non-positive face value, a
    /// negative coupon rate or a non-positive coupon frequency.
    pub fn new(
        isin: impl Into<String>,
        currency: impl Into<String>,
        face_value: Decimal,
        maturity_date: DateTime<FixedOffset>,
        coupon_rate: Decimal,
        issue_date: DateTime<FixedOffset>,
        coupon_frequency: i32,
    ) -> BondResult<Self> {
        let isin = isin.into();
        let currency = currency.into();

        if let Err(err) = validate(
            &isin,
            &currency,
            face_value,
            maturity_date,
            coupon_rate,
            issue_date,
            coupon_frequency,
        ) {
            log::debug!("rejected bond {isin:?}: {err}");
            return Err(err);
        }

        log::trace!("constructed bond {isin} ({currency})");

        Ok(Self {
            isin,
            currency,
            face_value,
            maturity_date,
            coupon_rate,
            issue_date,
            coupon_frequency,
        })
    }

    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> BondBuilder {
        BondBuilder::default()
    }

    /// Returns the ISIN.
    #[must_use]
    pub fn isin(&self) -> &str {
        &self.isin
    }

    /// Returns the currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> DateTime<FixedOffset> {
        self.maturity_date
    }

    /// Returns the coupon rate.
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> DateTime<FixedOffset> {
        self.issue_date
    }

    /// Returns the number of coupon payments per year.
    #[must_use]
    pub fn coupon_frequency(&self) -> i32 {
        self.coupon_frequency
    }

    /// Returns true if the bond pays no coupon.
    #[must_use]
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate.is_zero()
    }
}

fn ensure_not_blank(value: &str, param: &'static str, message: &'static str) -> BondResult<()> {
    if value.trim().is_empty() {
        return Err(BondError::invalid_argument(param, message));
    }
    Ok(())
}

fn validate(
    isin: &str,
    currency: &str,
    face_value: Decimal,
    maturity_date: DateTime<FixedOffset>,
    coupon_rate: Decimal,
    issue_date: DateTime<FixedOffset>,
    coupon_frequency: i32,
) -> BondResult<()> {
    ensure_not_blank(isin, "isin", ISIN_BLANK)?;
    ensure_not_blank(currency, "currency", CURRENCY_BLANK)?;

    if face_value <= Decimal::ZERO {
        return Err(BondError::out_of_range("face_value", FACE_VALUE_NOT_POSITIVE));
    }
    // Compares instants, so offsets do not matter.
    if issue_date >= maturity_date {
        return Err(BondError::invalid_arguments(ISSUE_NOT_BEFORE_MATURITY));
    }
    if coupon_rate < Decimal::ZERO {
        return Err(BondError::out_of_range("coupon_rate", COUPON_RATE_NEGATIVE));
    }
    if coupon_frequency <= 0 {
        return Err(BondError::out_of_range(
            "coupon_frequency",
            COUPON_FREQUENCY_NOT_POSITIVE,
        ));
    }

    Ok(())
}

/// Builder for [`Bond`].
///
/// An unset ISIN or currency is treated as blank. Any other unset field
/// fails with [`BondError::MissingField`].
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    isin: Option<String>,
    currency: Option<String>,
    face_value: Option<Decimal>,
    maturity_date: Option<DateTime<FixedOffset>>,
    coupon_rate: Option<Decimal>,
    issue_date: Option<DateTime<FixedOffset>>,
    coupon_frequency: Option<i32>,
}

impl BondBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ISIN.
    #[must_use]
    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, value: Decimal) -> Self {
        self.face_value = Some(value);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the coupon rate.
    #[must_use]
    pub fn coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the number of coupon payments per year.
    #[must_use]
    pub fn coupon_frequency(mut self, frequency: i32) -> Self {
        self.coupon_frequency = Some(frequency);
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Bond::new`], plus
    /// [`BondError::MissingField`] for an unset non-string field.
    pub fn build(self) -> BondResult<Bond> {
        let isin = self.isin.unwrap_or_default();
        let currency = self.currency.unwrap_or_default();
        ensure_not_blank(&isin, "isin", ISIN_BLANK)?;
        ensure_not_blank(&currency, "currency", CURRENCY_BLANK)?;

        let face_value = self
            .face_value
            .ok_or_else(|| BondError::missing_field("face_value"))?;
        let maturity_date = self
            .maturity_date
            .ok_or_else(|| BondError::missing_field("maturity_date"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let coupon_frequency = self
            .coupon_frequency
            .ok_or_else(|| BondError::missing_field("coupon_frequency"))?;

        Bond::new(
            isin,
            currency,
            face_value,
            maturity_date,
            coupon_rate,
            issue_date,
            coupon_frequency,
        )
    }
}
