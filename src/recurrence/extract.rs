//! Readers pulling rule fields out of decoded archives.
use crate::archive::{self, ArchiveError, Value, CLASS_KEY};

use super::consts::SELECTOR_CLASS_UID;
use super::OnThe;

/// Collects every boxed unsigned integer of the archive's object table, in
/// table order. Other entries are archiver bookkeeping and are skipped, as
/// are values above `i64::MAX`, which no rule field can hold.
pub fn integers(blob: Option<&[u8]>) -> Result<Vec<i64>, ArchiveError> {
    let Some(archive) = archive::decode(blob)? else {
        return Ok(Vec::new());
    };

    let integers = archive
        .objects()?
        .iter()
        .filter_map(|object| match object {
            Value::Unsigned(value) => i64::try_from(*value).ok(),
            _ => None,
        })
        .collect();

    Ok(integers)
}

/// Finds the first selector object of the archive and reads its day of the
/// week and week number. Yields the zero selector when there is none.
pub fn weekday_selector(blob: Option<&[u8]>) -> Result<OnThe, ArchiveError> {
    let Some(archive) = archive::decode(blob)? else {
        return Ok(OnThe::default());
    };

    let selector = archive
        .objects()?
        .iter()
        .filter_map(Value::as_dictionary)
        .find(|object| matches!(object.get(CLASS_KEY), Some(Value::Uid(SELECTOR_CLASS_UID))));

    let Some(selector) = selector else {
        return Ok(OnThe::default());
    };

    let field = |name: &str| selector.get(name).and_then(Value::as_integer).unwrap_or(0);

    Ok(OnThe::new(field("dayOfTheWeek"), field("weekNumber")))
}
