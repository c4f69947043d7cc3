//! Order-sensitive split of the post-date remainder into batch and serial.

/// AI prefix for the batch/lot number.
const BATCH_AI: &str = "10";

/// AI prefix for the serial number.
const SERIAL_AI: &str = "21";

/// Split the remainder into `(batch_number, serial_number)`.
///
/// By the time this runs, the 01 anchor and the 17 date block are gone, so
/// the remainder is expected to hold exactly one "10" block and one "21"
/// block with no delimiter between marker and value. Whichever marker comes
/// first owns the text up to the other marker; the second marker owns the
/// tail. Returns `None` when either marker is missing. Value content is not
/// validated and zero-length values are accepted as present.
pub fn split_batch_serial(remainder: &str) -> Option<(String, String)> {
    let batch_pos = remainder.find(BATCH_AI)?;
    let serial_pos = remainder.find(SERIAL_AI)?;

    let (batch, serial) = if batch_pos < serial_pos {
        (
            remainder.get(batch_pos + BATCH_AI.len()..serial_pos)?,
            remainder.get(serial_pos + SERIAL_AI.len()..)?,
        )
    } else {
        (
            remainder.get(batch_pos + BATCH_AI.len()..)?,
            remainder.get(serial_pos + SERIAL_AI.len()..batch_pos)?,
        )
    };

    Some((batch.to_string(), serial.to_string()))
}
