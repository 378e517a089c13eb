use crate::error::{DataFormatError, SyncError};
use crate::models::{
    format_timestamp, format_value, RawTxRecord, TxLogKind, TxRow, EXCLUDED_INTERNAL_RECIPIENT,
};

fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
    block: &str,
) -> Result<&'a str, DataFormatError> {
    value.ok_or_else(|| DataFormatError::MissingField {
        block_number: block.to_string(),
        field,
    })
}

/// Reshape raw explorer records into log rows.
///
/// The internal pipeline drops records addressed to the excluded
/// recipient before anything else is looked at. A record missing any
/// required field aborts the run.
pub fn normalize(kind: TxLogKind, records: Vec<RawTxRecord>) -> Result<Vec<TxRow>, SyncError> {
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        if kind == TxLogKind::Internal
            && record.to.as_deref() == Some(EXCLUDED_INTERNAL_RECIPIENT)
        {
            continue;
        }

        let block_number = required(record.block_number.as_deref(), "blockNumber", "unknown")?;
        let counterparty = match kind {
            TxLogKind::External => required(record.from.as_deref(), "from", block_number)?,
            TxLogKind::Internal => required(record.to.as_deref(), "to", block_number)?,
        };
        let time_stamp = required(record.time_stamp.as_deref(), "timeStamp", block_number)?;
        let value = required(record.value.as_deref(), "value", block_number)?;

        rows.push(TxRow {
            block_number: block_number.to_string(),
            counterparty: counterparty.to_string(),
            timestamp: format_timestamp(time_stamp)?,
            value: format_value(value)?,
        });
    }

    Ok(rows)
}
