#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end: file on disk -> tokenizer -> typed records.

use std::io::Write;

use pretty_assertions::assert_eq;
use tally_record::{load, FromRecord, Parsable, RecordReader};
use tally_tokenizer::{FieldError, Tokenizer};

#[derive(Debug, Default, PartialEq)]
struct Reading {
    sensor: String,
    celsius: f32,
    samples: u16,
}

impl Parsable for Reading {
    fn parse(&mut self, tokenizer: &mut Tokenizer) -> Result<(), FieldError> {
        self.sensor = tokenizer.get_string()?;
        self.celsius = tokenizer.get_float()?;
        self.samples = tokenizer.get()?;
        Ok(())
    }
}

#[test]
fn header_then_records_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "sensor,celsius,samples\r\n\"north, roof\",21.5,12\r\nbasement,-3.25,400\r\n"
    )
    .unwrap();

    let mut tokenizer = load(file.path()).unwrap();
    let header: Vec<String> = (0..3).map(|_| tokenizer.get_string().unwrap()).collect();
    assert_eq!(header, vec!["sensor", "celsius", "samples"]);

    let readings = RecordReader::<Reading>::new(&mut tokenizer)
        .read_all()
        .unwrap();
    assert_eq!(
        readings,
        vec![
            Reading {
                sensor: "north, roof".to_string(),
                celsius: 21.5,
                samples: 12,
            },
            Reading {
                sensor: "basement".to_string(),
                celsius: -3.25,
                samples: 400,
            },
        ]
    );
    assert_eq!(tokenizer.current_row(), 3);
}

#[test]
fn single_record_via_from_record() {
    let mut tokenizer = Tokenizer::new("attic,30,1");
    let reading = Reading::from_record(&mut tokenizer).unwrap();
    assert_eq!(reading.sensor, "attic");
    assert!(!tokenizer.has_more_fields());
}
