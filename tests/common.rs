#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use gapframe::{
    avec::{FromWords, reader, slice},
    sans::{Decoder, config::DecoderConfig},
};

#[test]
fn decode_slice_reference_frames() {
    const PATH: &str = "fixtures/reference-frames.gfc";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gapframe::avec::decode_slice(&data, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_slice_interrupted_frames() {
    const PATH: &str = "fixtures/interrupted-frames.gfc";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gapframe::avec::decode_slice(&data, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_reference_frames() {
    const PATH: &str = "fixtures/reference-frames.gfc";
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gapframe::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_interrupted_frames() {
    const PATH: &str = "fixtures/interrupted-frames.gfc";
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gapframe::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_into_vec() {
    let data = std::fs::read("fixtures/reference-frames.gfc").unwrap();
    let mut words: Vec<u64> = Vec::new();
    gapframe::avec::decode_slice(&data, &mut words).unwrap();
    assert_eq!(words, [0xAAAA_AAAA_AAAA, 0x1234_5678_9ABC, 0xFFFF_0000_FFFF]);
}

#[test]
fn decode_truncated_slice() {
    let data = std::fs::read("fixtures/reference-frames.gfc").unwrap();

    let result = gapframe::avec::decode_slice(&data[..data.len() - 1], &mut Vec::<u64>::new());
    assert!(matches!(result, Err(slice::Error::EndOfSlice)));

    let result = gapframe::avec::decode_slice(&data[..10], &mut Vec::<u64>::new());
    assert!(matches!(result, Err(slice::Error::EndOfSlice)));
}

#[test]
fn decode_oversized_sample_count() {
    let mut data = std::fs::read("fixtures/reference-frames.gfc").unwrap();
    data[8..12].copy_from_slice(&u32::MAX.to_le_bytes());

    let mut words: Vec<u64> = Vec::new();
    let result = gapframe::avec::decode_slice(&data, &mut words);
    assert!(matches!(result, Err(slice::Error::EndOfSlice)));
    assert!(words.is_empty());
}

#[test]
fn decode_truncated_reader() {
    let data = std::fs::read("fixtures/reference-frames.gfc").unwrap();
    let mut words: Vec<u64> = Vec::new();

    // Stop just short of the end of the third word.
    let result = gapframe::avec::decode_reader(&mut &data[..16 + 690], &mut words);
    assert!(matches!(result, Err(reader::Error::Io(_))));
    assert_eq!(words, [0xAAAA_AAAA_AAAA, 0x1234_5678_9ABC]);
}

#[test]
fn decode_rejects_foreign_data() {
    let mut data = std::fs::read("fixtures/reference-frames.gfc").unwrap();
    data[12..16].copy_from_slice(b"RIFF");

    let result = gapframe::avec::decode_slice(&data, &mut Vec::<u64>::new());
    assert!(matches!(result, Err(slice::Error::Header(_))));

    let result = gapframe::avec::decode_reader(&mut data.as_slice(), &mut Vec::<u64>::new());
    assert!(matches!(result, Err(reader::Error::Header(_))));
}

#[test]
fn run_configured_decoder() {
    let data = std::fs::read("fixtures/reference-frames.gfc").unwrap();
    let mut decoder = Decoder::new(DecoderConfig::default());
    let mut words: Vec<u64> = Vec::new();

    let ticks = gapframe::avec::run(&mut decoder, data[16..].iter().copied(), &mut words);

    assert_eq!(ticks as usize, data.len() - 16);
    assert_eq!(words.len(), 3);
}

/// Checks published events against the expected-event CSV beside a capture.
///
/// Each row is `word,<tick>,<hex word>` or `error,<tick>,`.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn next(&mut self, kind: &str, tick: u64) -> Vec<String> {
        let row = self.0.remove(0);
        assert_eq!(row[0], kind);
        assert_eq!(row[1], tick.to_string());
        row
    }

    fn finish(&self) {
        assert!(self.0.is_empty(), "missing events: {:?}", self.0);
    }
}

impl FromWords for Validator {
    fn add_word(&mut self, tick: u64, word: u64) {
        let row = self.next("word", tick);
        assert_eq!(row[2], format!("{word:x}"));
    }

    fn add_error(&mut self, tick: u64) {
        self.next("error", tick);
    }
}
