#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Payload format indicator (`00`) and point of initiation (`01`), pre-encoded
pub const PAYLOAD_FORMAT: &str = "000201010211";
/// Merchant account information
pub const MERCHANT_ACCOUNT_TAG: &str = "38";
/// NAPAS application identifier, pre-encoded under sub-tag `00`
pub const NAPAS_AID: &str = "0010A000000727";
/// Beneficiary organization, wraps bank and account
pub const BENEFICIARY_TAG: &str = "01";
pub const BANK_ID_TAG: &str = "00";
pub const ACCOUNT_ID_TAG: &str = "01";
/// Transfer to account service code, pre-encoded under sub-tag `02`
pub const SERVICE_CODE: &str = "0208QRIBFTTA";
/// Transaction currency, VND (704)
pub const CURRENCY: &str = "5303704";
pub const AMOUNT_TAG: &str = "54";
/// Country code, Vietnam
pub const COUNTRY_CODE: &str = "5802VN";
/// Additional data field template
pub const ADDITIONAL_DATA_TAG: &str = "62";
/// Purpose of transaction, inside [`ADDITIONAL_DATA_TAG`]
pub const PURPOSE_TAG: &str = "08";
/// Checksum tag and its fixed length, covered by the checksum itself
pub const CRC_TAG: &str = "6304";

/// Length of a value as it is declared in a length subfield
///
/// Counts UTF-16 code units, which is a character count for ASCII values.
pub fn char_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Payment instruction to be encoded
///
/// Nothing is checked on construction, see [`crate::validate`] for the checked path.
#[derive(Debug, PartialEq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EncodingRequest {
    /// Issuer identifier (BIN), e.g. `970436`
    #[cfg_attr(feature = "serde", serde(alias = "bankID"))]
    pub bank_id: String,
    /// Beneficiary account number
    #[cfg_attr(feature = "serde", serde(alias = "accountNo"))]
    pub account_id: String,
    /// VND, a zero amount is left out of the payload
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: Option<f64>,
    /// Purpose of transfer remark
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl EncodingRequest {
    pub fn new(bank_id: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            bank_id: bank_id.into(),
            account_id: account_id.into(),
            amount: None,
            description: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Decimal rendering of the amount, if it goes into the payload
    ///
    /// `0` and `NaN` count as absent. Integral values render without a fraction,
    /// other values with the shortest digits that round-trip.
    pub fn amount_field(&self) -> Option<String> {
        self.amount
            .filter(|amount| *amount != 0.0 && !amount.is_nan())
            .map(|amount| amount.to_string())
    }

    /// Description, if it goes into the payload
    pub fn description_field(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Encodes into VietQR content, see [`crate::make_content`]
    pub fn encode(&self) -> String {
        crate::encoder::make_content(self)
    }
}
