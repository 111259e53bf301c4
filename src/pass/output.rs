//! Batch output of generated passwords.

use std::io::{self, Write};

use zeroize::{Zeroize, Zeroizing};

use super::{Error, generate};
use crate::rand::RandomSource;

const CAPACITY: usize = 8 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error(transparent)]
    Generate(#[from] Error),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Buffered writer whose buffer is wiped every time it is flushed.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= CAPACITY {
            self.inner.write_all(data)?;
        } else {
            self.buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
    }
}

/// Write `count` passwords, one per line.
pub fn write_batch<R, S, W>(
    rng: &mut R,
    out: &mut W,
    length: usize,
    classes: &[S],
    count: usize,
) -> Result<(), OutputError>
where
    R: RandomSource + ?Sized,
    S: AsRef<str>,
    W: Write,
{
    let mut out = SecureBufWriter::new(out);
    for _ in 0..count {
        let pass = generate(rng, length, classes)?;
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Collect `count` passwords into one newline-separated string (clipboard).
pub fn collect_batch<R, S>(
    rng: &mut R,
    length: usize,
    classes: &[S],
    count: usize,
) -> Result<Zeroizing<String>, Error>
where
    R: RandomSource + ?Sized,
    S: AsRef<str>,
{
    // Pre-sized so growth does not leave unwiped copies behind
    let capacity = count.saturating_mul(length.saturating_mul(4) + 1).min(1 << 24);
    let mut passwords = Zeroizing::new(String::with_capacity(capacity));
    for i in 0..count {
        if i > 0 {
            passwords.push('\n');
        }
        let pass = generate(rng, length, classes)?;
        passwords.push_str(pass.as_str());
    }
    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::charset::{DIGITS, LOWERCASE};

    #[test]
    fn writes_one_password_per_line() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        write_batch(&mut rng, &mut out, 12, &[DIGITS, LOWERCASE], 5).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(text.ends_with('\n'));
        for line in lines {
            assert_eq!(line.len(), 12);
            assert!(line.chars().any(|c| c.is_ascii_digit()));
            assert!(line.chars().any(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn generation_errors_stop_the_batch() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        let err = write_batch(&mut rng, &mut out, 1, &[DIGITS, LOWERCASE], 3).unwrap_err();
        assert!(matches!(
            err,
            OutputError::Generate(Error::InvalidLength { length: 1, classes: 2 })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn collect_joins_without_trailing_newline() {
        let mut rng = StdRng::seed_from_u64(9);
        let joined = collect_batch(&mut rng, 8, &[DIGITS], 3).unwrap();
        assert_eq!(joined.lines().count(), 3);
        assert!(!joined.ends_with('\n'));
        assert!(joined.lines().all(|l| l.len() == 8));
    }

    #[test]
    fn buffered_writer_flushes_on_drop() {
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"abc").unwrap();
        }
        assert_eq!(sink, b"abc");
    }

    #[test]
    fn large_writes_bypass_the_buffer() {
        let mut sink = Vec::new();
        let big = vec![b'x'; CAPACITY * 2];
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"head").unwrap();
            w.write_all(&big).unwrap();
            w.write_all(b"tail").unwrap();
        }
        assert_eq!(sink.len(), 4 + big.len() + 4);
        assert!(sink.starts_with(b"head"));
        assert!(sink.ends_with(b"tail"));
    }
}
