#![no_main]
use std::{io, num::NonZeroUsize};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nextline::{BString, DEFAULT_CHUNK_SIZE, LineReader, ReaderOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    data: Vec<u8>,
    chunk_size: u8,
    /// Caps how many bytes each read may return.
    read_limit: u8,
    terminator: u8,
}

/// Delivers at most `limit` bytes per read.
struct Limited<'a> {
    data: &'a [u8],
    limit: usize,
}

impl io::Read for Limited<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(self.limit);
        self.data.read(&mut buf[..len])
    }
}

fn read_all<R: io::Read>(stream: R, chunk_size: NonZeroUsize, terminator: u8) -> Vec<BString> {
    let mut reader = LineReader::new(
        vec![stream],
        ReaderOptions {
            chunk_size,
            terminator,
            ..Default::default()
        },
    );
    let lines = reader.lines(0).collect();
    assert_eq!(reader.tracked(), 0, "saved bytes left after the last line");
    assert_eq!(reader.next_line(0), None, "line produced after end of stream");
    lines
}

fn lines(input: Input) {
    let chunk_size = NonZeroUsize::new(usize::from(input.chunk_size) + 1).unwrap();
    let limit = usize::from(input.read_limit) + 1;

    let whole = read_all(&input.data[..], DEFAULT_CHUNK_SIZE, input.terminator);
    let limited = read_all(
        Limited {
            data: &input.data,
            limit,
        },
        chunk_size,
        input.terminator,
    );
    assert_eq!(whole, limited);

    let mut rebuilt = Vec::with_capacity(input.data.len());
    for (i, line) in whole.iter().enumerate() {
        let terminated = line.last() == Some(&input.terminator);
        assert!(terminated || i + 1 == whole.len(), "unterminated line before the end");
        assert_eq!(
            line.iter().filter(|&&b| b == input.terminator).count(),
            usize::from(terminated),
            "line holds more than one terminator"
        );
        rebuilt.extend_from_slice(line);
    }
    assert_eq!(rebuilt, input.data);
}

fuzz_target!(|input: Input| lines(input));
