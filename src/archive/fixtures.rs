//! Test-only builders for keyed archives, written with the `plist` crate.
use plist::{Dictionary, Uid, Value};

pub(crate) fn to_binary(root: &Value) -> Vec<u8> {
    let mut bytes = Vec::new();
    root.to_writer_binary(&mut bytes).expect("fixture should encode as binary");
    bytes
}

pub(crate) fn to_xml(root: &Value) -> Vec<u8> {
    let mut bytes = Vec::new();
    root.to_writer_xml(&mut bytes).expect("fixture should encode as XML");
    bytes
}

pub(crate) fn dictionary<const N: usize>(entries: [(&str, Value); N]) -> Value {
    let mut dictionary = Dictionary::new();
    for (key, value) in entries {
        dictionary.insert(key.to_string(), value);
    }
    Value::Dictionary(dictionary)
}

pub(crate) fn string(text: &str) -> Value {
    Value::String(text.to_string())
}

pub(crate) fn uid(index: u64) -> Value {
    Value::Uid(Uid::new(index))
}

pub(crate) fn unsigned(value: u64) -> Value {
    Value::Integer(value.into())
}

pub(crate) fn signed(value: i64) -> Value {
    Value::Integer(value.into())
}

fn class(name: &str) -> Value {
    dictionary([
        ("$classname", string(name)),
        ("$classes", Value::Array(vec![string(name), string("NSObject")])),
    ])
}

/// Wraps an object table the way a keyed archiver lays it out.
pub(crate) fn keyed_archive(objects: Vec<Value>) -> Value {
    dictionary([
        ("$archiver", string("NSKeyedArchiver")),
        ("$version", unsigned(100_000)),
        ("$top", dictionary([("root", uid(1))])),
        ("$objects", Value::Array(objects)),
    ])
}

/// An archived array of boxed numbers.
pub(crate) fn number_array(values: &[u64]) -> Vec<u8> {
    let class_uid = values.len() as u64 + 2;
    let mut objects = vec![
        string("$null"),
        dictionary([
            ("NS.objects", Value::Array((0..values.len() as u64).map(|i| uid(i + 2)).collect())),
            ("$class", uid(class_uid)),
        ]),
    ];
    objects.extend(values.iter().map(|value| unsigned(*value)));
    objects.push(class("NSArray"));

    to_binary(&keyed_archive(objects))
}

/// An archived day-of-week and week-number selector object.
pub(crate) fn selector(day_of_the_week: i64, week_number: i64) -> Vec<u8> {
    let objects = vec![
        string("$null"),
        dictionary([
            ("$class", uid(2)),
            ("dayOfTheWeek", signed(day_of_the_week)),
            ("weekNumber", signed(week_number)),
        ]),
        class("MWNthWeekday"),
    ];

    to_binary(&keyed_archive(objects))
}

/// A binary container whose `depth` arrays each reference the next object
/// twice, ending in a single integer. Expanding every reference yields
/// `2^depth` leaves.
pub(crate) fn shared_reference_chain(depth: u8) -> Vec<u8> {
    let mut bytes = b"bplist00".to_vec();
    let mut offsets = Vec::new();
    for index in 0..depth {
        offsets.push(bytes.len() as u8);
        bytes.extend([0xA2, index + 1, index + 1]);
    }
    offsets.push(bytes.len() as u8);
    bytes.extend([0x10, 0x00]);

    let offset_table = bytes.len() as u64;
    bytes.extend(&offsets);
    bytes.extend([0u8; 6]);
    bytes.extend([1, 1]);
    bytes.extend((offsets.len() as u64).to_be_bytes());
    bytes.extend(0u64.to_be_bytes());
    bytes.extend(offset_table.to_be_bytes());
    bytes
}
