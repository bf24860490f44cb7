use core::num::NonZeroUsize;

use bstr::BString;
use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::sources::Trickle;
use crate::{Handle, LineReader, ReaderOptions, Source};

/// Turns roughly a quarter of the bytes into terminators so that generated
/// streams actually contain lines.
fn with_lines(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .map(|&b| if b % 4 == 0 { b'\n' } else { b })
        .collect()
}

fn chunked(chunk: usize) -> ReaderOptions {
    ReaderOptions {
        chunk_size: NonZeroUsize::new(1 + chunk % 64).unwrap(),
        ..Default::default()
    }
}

fn expected_lines(data: &[u8]) -> Vec<BString> {
    data.split_inclusive(|&b| b == b'\n')
        .map(BString::from)
        .collect()
}

fn drain<S: Source>(reader: &mut LineReader<S>, handle: Handle) -> Vec<BString> {
    reader.lines(handle).collect()
}

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: the lines returned, and their concatenation, do not depend on
/// the chunk size or on how many bytes each read delivers.
#[test]
fn chunk_size_invariance_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(raw: Vec<u8>, chunk: usize, step: usize) -> bool {
        let data = with_lines(&raw);
        let expected = expected_lines(&data);

        let mut whole = LineReader::new(vec![&data[..]], chunked(chunk));
        let mut trickled = LineReader::new(vec![Trickle::new(&data, 1 + step % 7)], chunked(chunk));
        let lines = drain(&mut whole, 0);

        lines == expected
            && drain(&mut trickled, 0) == expected
            && lines.iter().flat_map(|line| line.iter().copied()).eq(data.iter().copied())
            && whole.tracked() == 0
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, usize, usize) -> bool);
}

/// Property: interleaving reads on two handles gives each handle the same
/// lines as reading it alone.
#[test]
fn interleaving_isolation_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(left: Vec<u8>, right: Vec<u8>, schedule: Vec<bool>, chunk: usize) -> bool {
        let left = with_lines(&left);
        let right = with_lines(&right);
        let mut reader = LineReader::new(vec![&left[..], &right[..]], chunked(chunk));
        let mut seen: [Vec<BString>; 2] = Default::default();

        for pick in schedule {
            let handle = Handle::from(pick);
            if let Some(line) = reader.next_line(handle) {
                seen[usize::from(pick)].push(line);
            }
        }
        for (handle, lines) in seen.iter_mut().enumerate() {
            lines.extend(drain(&mut reader, Handle::try_from(handle).unwrap()));
        }

        seen[0] == expected_lines(&left) && seen[1] == expected_lines(&right)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>, Vec<bool>, usize) -> bool);
}

#[quickcheck]
fn no_data_stays_no_data(raw: Vec<u8>, extra_calls: u8) -> bool {
    let data = with_lines(&raw);
    let mut reader = LineReader::new(vec![&data[..]], chunked(raw.len()));
    drain(&mut reader, 0);

    (0..extra_calls % 16).all(|_| reader.next_line(0).is_none())
}

#[quickcheck]
fn invalid_handles_never_disturb_valid_ones(raw: Vec<u8>, bogus: i32) -> bool {
    let bogus = if (0..1024).contains(&bogus) { -1 - bogus } else { bogus };
    let data = with_lines(&raw);
    let mut reader = LineReader::new(vec![&data[..]], chunked(3));

    let mut lines = Vec::new();
    while let Some(line) = reader.next_line(0) {
        lines.push(line);
        if reader.next_line(bogus).is_some() {
            return false;
        }
    }
    lines == expected_lines(&data)
}
