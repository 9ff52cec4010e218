//! VietQR payload assembly
//!
//! Every field is `tag + 2 digit length + value`, concatenated without delimiters.
//! Nothing here fails: values longer than 99 code units produce a length
//! subfield that is longer than 2 digits, use [`crate::validate`] to reject them first.

use crate::protocol::*;

/// Length subfield
///
/// Zero-left-pads to 2 digits, longer numbers are rendered in full.
pub fn pad2(len: usize) -> String {
    format!("{len:02}")
}

/// TLV field with an explicit declared length
pub fn tlv(tag: &str, len: usize, value: &str) -> String {
    format!("{tag}{}{value}", pad2(len))
}

/// Single TLV field, length taken from the value
pub fn field(tag: &str, value: &str) -> String {
    tlv(tag, char_len(value), value)
}

/// Merchant account information block (tag `38`)
///
/// Holds the NAPAS AID and the beneficiary (tag `01`) wrapping bank (`00`) and account (`01`).
/// Its length is `bank + account + 38` and the beneficiary length is `bank + account + 8`,
/// fixed offsets that hold even once a wrapped length overflows 2 digits.
pub fn merchant_account_info(bank_id: &str, account_id: &str) -> String {
    let variable = char_len(bank_id) + char_len(account_id);
    let beneficiary = field(BANK_ID_TAG, bank_id) + &field(ACCOUNT_ID_TAG, account_id);
    let block = String::from(NAPAS_AID) + &tlv(BENEFICIARY_TAG, variable + 8, &beneficiary);
    tlv(MERCHANT_ACCOUNT_TAG, variable + 38, &block)
}

/// Additional data block (tag `62`) carrying the purpose of transaction
///
/// Declared length is `description + 4`.
pub fn additional_data(description: &str) -> String {
    tlv(
        ADDITIONAL_DATA_TAG,
        char_len(description) + 4,
        &field(PURPOSE_TAG, description),
    )
}

/// Builds the VietQR content for `request`, checksum included
///
/// Fields in order: payload format, merchant account (`38`), service code,
/// currency, amount (`54`, optional), country code, additional data (`62`, optional)
/// and checksum (`63`).
/// The checksum covers everything before it, its own tag and length included.
pub fn make_content(request: &EncodingRequest) -> String {
    let mut content = String::from(PAYLOAD_FORMAT);
    content += &merchant_account_info(&request.bank_id, &request.account_id);
    content += SERVICE_CODE;
    content += CURRENCY;

    if let Some(amount) = request.amount_field() {
        content += &field(AMOUNT_TAG, &amount);
    }
    content += COUNTRY_CODE;

    if let Some(description) = request.description_field() {
        content += &additional_data(description);
    }

    content += CRC_TAG;
    log::trace!("VietQR payload: {content}");

    let crc = crate::crc16(&content);
    log::debug!("VietQR checksum for bank {}: {crc}", request.bank_id);
    content += &crc;

    content
}
