// std imports
use std::io::{self, BufRead, BufReader, Read};

// third-party imports
use thiserror::Error;

// ---

/// ReadError is an error which may occur when decoding characters from the underlying reader.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid utf-8 sequence")]
    InvalidUtf8,
}

// ---

/// Decodes UTF-8 characters from a reader one at a time.
///
/// Exactly one character of pushback is supported: [`Source::backup`] returns the
/// most recently read character to the stream, so that the next call to
/// [`Source::next`] yields it again. End of input is reported as `None` and is
/// never pushed back. Once the reader reports end of input it is not read again.
pub struct Source<R> {
    reader: BufReader<R>,
    last: Option<char>,
    pending: Option<char>,
    eof: bool,
}

impl<R: Read> Source<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            last: None,
            pending: None,
            eof: false,
        }
    }

    pub fn next(&mut self) -> Result<Option<char>, ReadError> {
        if let Some(c) = self.pending.take() {
            self.last = Some(c);
            return Ok(Some(c));
        }

        self.last = self.decode()?;
        Ok(self.last)
    }

    #[inline]
    pub fn backup(&mut self) {
        debug_assert!(self.pending.is_none(), "only one character of pushback is supported");
        self.pending = self.last.take();
    }

    #[inline]
    pub fn peek(&mut self) -> Result<Option<char>, ReadError> {
        let c = self.next()?;
        self.backup();
        Ok(c)
    }

    fn decode(&mut self) -> Result<Option<char>, ReadError> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match first {
            0x00..=0x7F => return Ok(Some(first as char)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(ReadError::InvalidUtf8),
        };

        let mut buf = [first, 0, 0, 0];
        for byte in buf.iter_mut().take(width).skip(1) {
            *byte = self.read_byte()?.ok_or(ReadError::InvalidUtf8)?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(ReadError::InvalidUtf8)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ReadError> {
        if self.eof {
            return Ok(None);
        }

        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    let Some(&byte) = buf.first() else {
                        self.eof = true;
                        return Ok(None);
                    };
                    self.reader.consume(1);
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
