//! Minimal PNM (P4/P5/P6) reader and P5 writer

use std::{fs::File, io::{self, BufRead, BufReader, Read, Write}, path::Path};

use thiserror::Error;

use super::{ImageBuffer, ImageY8};

#[derive(Debug, Error)]
pub enum PnmError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Malformed PNM header: {0}")]
    BadHeader(String),
    #[error("Unsupported PNM format: {0}")]
    UnsupportedFormat(String),
    #[error("PNM data truncated (expected {expected} bytes, got {actual})")]
    Truncated {
        expected: usize,
        actual: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PnmFormat {
    Binary,
    Gray,
    Rgb,
}

/// Read the next whitespace-delimited header token, skipping `#` comments
fn next_token(r: &mut impl BufRead) -> Result<String, PnmError> {
    let mut token = String::new();
    let mut in_comment = false;
    loop {
        let mut byte = [0u8; 1];
        if r.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(PnmError::BadHeader("unexpected end of header".into()));
            }
            return Ok(token);
        }
        let c = byte[0] as char;
        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        if c == '#' {
            in_comment = true;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(c);
        }
    }
}

fn next_number(r: &mut impl BufRead, what: &str) -> Result<usize, PnmError> {
    let token = next_token(r)?;
    token.parse()
        .map_err(|_| PnmError::BadHeader(format!("bad {what}: {token:?}")))
}

/// Decode a PNM stream into a grayscale image.
///
/// RGB is converted as `(r + 2g + b) / 4`. 16-bit samples keep the high byte.
pub fn read_pnm(r: impl Read) -> Result<ImageY8, PnmError> {
    let mut r = BufReader::new(r);

    let magic = next_token(&mut r)?;
    let format = match magic.as_str() {
        "P4" => PnmFormat::Binary,
        "P5" => PnmFormat::Gray,
        "P6" => PnmFormat::Rgb,
        other => return Err(PnmError::UnsupportedFormat(other.into())),
    };

    let width = next_number(&mut r, "width")?;
    let height = next_number(&mut r, "height")?;
    let max = match format {
        PnmFormat::Binary => 1,
        _ => next_number(&mut r, "maxval")?,
    };

    let bytes_per_sample = match max {
        1 if format == PnmFormat::Binary => 1,
        255 => 1,
        65535 => 2,
        other => return Err(PnmError::UnsupportedFormat(format!("maxval {other}"))),
    };

    let buflen = match format {
        PnmFormat::Binary => height * width.div_ceil(8),
        PnmFormat::Gray => width * height * bytes_per_sample,
        PnmFormat::Rgb => width * height * 3 * bytes_per_sample,
    };

    let mut buf = Vec::with_capacity(buflen);
    r.by_ref().take(buflen as u64).read_to_end(&mut buf)?;
    if buf.len() < buflen {
        return Err(PnmError::Truncated { expected: buflen, actual: buf.len() });
    }

    let img = match format {
        PnmFormat::Gray => ImageY8::from_fn(width, height, |x, y| {
            buf[(y * width + x) * bytes_per_sample]
        }),
        PnmFormat::Rgb => ImageY8::from_fn(width, height, |x, y| {
            let base = (y * width + x) * 3 * bytes_per_sample;
            let r = buf[base] as u16;
            let g = buf[base + bytes_per_sample] as u16;
            let b = buf[base + 2 * bytes_per_sample] as u16;
            ((r + g + g + b) / 4) as u8
        }),
        PnmFormat::Binary => {
            // rows are padded to whole bytes, and black is 1
            let pbmstride = width.div_ceil(8);
            ImageY8::from_fn(width, height, |x, y| {
                let byte = buf[y * pbmstride + x / 8];
                let bit = 7 - (x & 7);
                if (byte >> bit) & 1 != 0 { 0 } else { 255 }
            })
        }
    };
    Ok(img)
}

/// Read a PNM file from disk
pub fn read_pnm_file(path: impl AsRef<Path>) -> Result<ImageY8, PnmError> {
    let f = File::open(path)?;
    read_pnm(f)
}

impl<C: std::ops::Deref<Target = [u8]>> ImageBuffer<C> {
    /// Write as binary greyscale (P5)
    pub fn write_pnm(&self, f: &mut impl Write) -> io::Result<()> {
        writeln!(f, "P5")?;
        writeln!(f, "{} {}", self.width(), self.height())?;
        writeln!(f, "255")?;
        for (_, row) in self.rows() {
            f.write_all(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{read_pnm, PnmError};
    use crate::util::image::ImageY8;

    #[test]
    fn p5_roundtrip() {
        let img = ImageY8::from_fn(5, 3, |x, y| (x * 40 + y) as u8);
        let mut out = Vec::new();
        img.write_pnm(&mut out).unwrap();
        assert!(out.starts_with(b"P5\n5 3\n255\n"));

        let back = read_pnm(out.as_slice()).unwrap();
        assert_eq!((back.width(), back.height()), (5, 3));
        for y in 0..3 {
            assert_eq!(back.row(y), img.row(y));
        }
    }

    #[test]
    fn p6_to_gray_with_comment() {
        let mut data = b"P6\n# made by hand\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[100, 200, 0, 4, 4, 4]);
        let img = read_pnm(data.as_slice()).unwrap();
        assert_eq!(img.row(0), &[125, 4]);
    }

    #[test]
    fn p4_black_is_one() {
        let mut data = b"P4\n3 1\n".to_vec();
        data.push(0b1010_0000);
        let img = read_pnm(data.as_slice()).unwrap();
        assert_eq!(img.row(0), &[0, 255, 0]);
    }

    #[test]
    fn errors() {
        assert!(matches!(read_pnm(&b"P3\n1 1\n255\n"[..]), Err(PnmError::UnsupportedFormat(_))));
        assert!(matches!(read_pnm(&b"P5\nx 1\n255\n"[..]), Err(PnmError::BadHeader(_))));
        assert!(matches!(
            read_pnm(&b"P5\n2 2\n255\n\x01\x02"[..]),
            Err(PnmError::Truncated { expected: 4, actual: 2 })
        ));
    }
}
