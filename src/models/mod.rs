use crate::error::DataFormatError;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Internal transfers to this recipient are dropped before normalization
pub const EXCLUDED_INTERNAL_RECIPIENT: &str = "0x1caf6d213f8210c17e3c92f879c5ef4bb1d940da";

/// Base-unit denominator: the chain asset carries 18 decimals
const BASE_UNIT: u128 = 1_000_000_000_000_000_000;

/// One explorer result object, as returned by the transaction-list API.
///
/// Every field is kept optional so that an absent key surfaces as a
/// reportable [`DataFormatError`] during normalization instead of a
/// decode failure for the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawTxRecord {
    #[serde(rename = "blockNumber")]
    pub block_number: Option<String>,
    #[serde(rename = "timeStamp")]
    pub time_stamp: Option<String>,
    pub value: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// The two transaction logs kept in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxLogKind {
    /// Directly signed transactions, logged with their sender
    External,
    /// Contract-triggered transfers, logged with their recipient
    Internal,
}

impl TxLogKind {
    /// Explorer `action` query parameter for this log
    pub fn action(&self) -> &'static str {
        match self {
            TxLogKind::External => "txlist",
            TxLogKind::Internal => "txlistinternal",
        }
    }

    /// Block-number column read to derive the watermark
    pub fn watermark_range(&self) -> &'static str {
        match self {
            TxLogKind::External => "norm_tx!A2:A",
            TxLogKind::Internal => "int_tx!A2:A",
        }
    }

    /// Append target, the first data row below the header
    pub fn append_range(&self) -> &'static str {
        match self {
            TxLogKind::External => "norm_tx!A2",
            TxLogKind::Internal => "int_tx!A2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TxLogKind::External => "external",
            TxLogKind::Internal => "internal",
        }
    }
}

/// One normalized log row, in the fixed column order of its log:
/// block number, counterparty address, timestamp, value
#[derive(Debug, Clone, PartialEq)]
pub struct TxRow {
    pub block_number: String,
    pub counterparty: String,
    pub timestamp: String,
    pub value: String,
}

impl TxRow {
    pub fn into_cells(self) -> Vec<String> {
        vec![
            self.block_number,
            self.counterparty,
            self.timestamp,
            self.value,
        ]
    }
}

/// Convert a base-unit integer string into whole coin units with two
/// decimal places, rounding half-up.
pub fn format_value(raw: &str) -> Result<String, DataFormatError> {
    let base: u128 = raw
        .trim()
        .parse()
        .map_err(|_| DataFormatError::BadValue(raw.to_string()))?;

    // 10^16 base units per hundredth of a coin
    let cent = BASE_UNIT / 100;
    let cents = base / cent + u128::from(base % cent >= cent / 2);
    Ok(format!("{}.{:02}", cents / 100, cents % 100))
}

/// Format Unix seconds as `DD/MM/YYYY HH:MM` in UTC
pub fn format_timestamp(raw: &str) -> Result<String, DataFormatError> {
    let secs: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DataFormatError::BadTimestamp(raw.to_string()))?;

    let dt = Utc
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| DataFormatError::BadTimestamp(raw.to_string()))?;
    Ok(dt.format("%d/%m/%Y %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversion_whole_and_fractional() {
        assert_eq!(format_value("5000000000000000000").unwrap(), "5.00");
        assert_eq!(format_value("1250000000000000000").unwrap(), "1.25");
        assert_eq!(format_value("0").unwrap(), "0.00");
    }

    #[test]
    fn test_value_rounds_half_up() {
        // exactly half a hundredth rounds up
        assert_eq!(format_value("5000000000000000").unwrap(), "0.01");
        assert_eq!(format_value("4999999999999999").unwrap(), "0.00");
        // 1.005 coins
        assert_eq!(format_value("1005000000000000000").unwrap(), "1.01");
    }

    #[test]
    fn test_value_rejects_non_integer() {
        assert!(matches!(
            format_value("not-a-number"),
            Err(DataFormatError::BadValue(_))
        ));
        assert!(matches!(
            format_value("-5"),
            Err(DataFormatError::BadValue(_))
        ));
    }

    #[test]
    fn test_timestamp_formatting() {
        // 2022-01-01 00:00:00 UTC
        assert_eq!(format_timestamp("1640995200").unwrap(), "01/01/2022 00:00");
        // 2021-06-15 13:45:30 UTC, seconds truncated by the format
        assert_eq!(format_timestamp("1623764730").unwrap(), "15/06/2021 13:45");
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        assert!(matches!(
            format_timestamp("soon"),
            Err(DataFormatError::BadTimestamp(_))
        ));
    }

    #[test]
    fn test_log_kind_constants() {
        assert_eq!(TxLogKind::External.action(), "txlist");
        assert_eq!(TxLogKind::Internal.action(), "txlistinternal");
        assert_eq!(TxLogKind::External.watermark_range(), "norm_tx!A2:A");
        assert_eq!(TxLogKind::Internal.append_range(), "int_tx!A2");
    }

    #[test]
    fn test_raw_record_ignores_extra_fields() {
        let json = r#"{
            "blockNumber": "101",
            "timeStamp": "1640995200",
            "hash": "0xabc",
            "nonce": "7",
            "from": "0x1111111111111111111111111111111111111111",
            "to": "0x2222222222222222222222222222222222222222",
            "value": "5000000000000000000",
            "gas": "21000"
        }"#;

        let record: RawTxRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.block_number.as_deref(), Some("101"));
        assert_eq!(record.value.as_deref(), Some("5000000000000000000"));
    }

    #[test]
    fn test_raw_record_tolerates_missing_fields() {
        let record: RawTxRecord = serde_json::from_str(r#"{"blockNumber": "7"}"#).unwrap();
        assert!(record.from.is_none());
        assert!(record.value.is_none());
    }

    #[test]
    fn test_row_cell_order_matches_header() {
        let row = TxRow {
            block_number: "101".to_string(),
            counterparty: "0xabc".to_string(),
            timestamp: "01/01/2022 00:00".to_string(),
            value: "5.00".to_string(),
        };
        assert_eq!(
            row.into_cells(),
            vec!["101", "0xabc", "01/01/2022 00:00", "5.00"]
        );
    }
}
