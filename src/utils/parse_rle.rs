use crate::{Error, Result};

/// Returns width, height and row-major cells (0 or 1) of the parsed RLE pattern.
///
/// Comment lines (`#...`) are skipped, the header line must start with `x`.
/// A `rule = ...` entry in the header is ignored: rules come from the run config.
pub fn parse_rle(data: &[u8]) -> Result<(usize, usize, Vec<u8>)> {
    let parse_next_number = |i: &mut usize| -> Result<usize> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Err(Error::Rle("missing number".into()));
            }
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        if j == *i {
            return Err(Error::Rle("missing number".into()));
        }
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| Error::Rle("number out of range".into()))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && matches!(data[i], b'#' | b'\n' | b'\r') {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    if i >= data.len() || data[i] != b'x' {
        return Err(Error::Rle("header line must start with 'x'".into()));
    }
    let width = parse_next_number(&mut i)?;
    let height = parse_next_number(&mut i)?;
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    i += 1;

    let len = width
        .checked_mul(height)
        .ok_or_else(|| Error::Rle("pattern too large".into()))?;
    let mut result = Vec::new();
    result
        .try_reserve_exact(len)
        .map_err(|_| Error::Rle("pattern too large".into()))?;
    result.resize(len, 0);
    let (mut x, mut y, mut cnt) = (0usize, 0usize, 1usize);
    let overflow = || Error::Rle(format!("pattern exceeds declared size {width}x{height}"));
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' => {
                if x.checked_add(cnt).map_or(true, |end| end > width) || y >= height {
                    return Err(overflow());
                }
                for _ in 0..cnt {
                    result[x + y * width] = 1;
                    x += 1;
                }
                (i, cnt) = (i + 1, 1);
            }
            b'b' => {
                if x.checked_add(cnt).map_or(true, |end| end > width) {
                    return Err(overflow());
                }
                (x, i, cnt) = (x + cnt, i + 1, 1);
            }
            b'$' => {
                y = match y.checked_add(cnt) {
                    Some(y) if y <= height => y,
                    _ => return Err(overflow()),
                };
                (x, i, cnt) = (0, i + 1, 1);
            }
            b'!' => return Ok((width, height, result)),
            c => return Err(Error::Rle(format!("unexpected symbol {:?}", c as char))),
        };
    }
    Err(Error::Rle("missing terminating '!'".into()))
}

#[cfg(test)]
mod tests {
    use super::parse_rle;

    #[test]
    fn test_glider() {
        let data = b"#N Glider\n#C comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";
        let (w, h, cells) = parse_rle(data).unwrap();
        assert_eq!((w, h), (3, 3));
        assert_eq!(cells, vec![0, 1, 0, 0, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_multiline_and_blank_rows() {
        let data = b"x = 2, y = 4\r\n2o2$\r\nbo!";
        let (_, _, cells) = parse_rle(data).unwrap();
        assert_eq!(cells, vec![1, 1, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_errors() {
        assert!(parse_rle(b"3o!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n3o!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n2o").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n2q!").is_err());
        assert!(parse_rle(b"x = 4294967296, y = 4294967296\n!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n18446744073709551615o!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n18446744073709551615b!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\n18446744073709551615$!").is_err());
    }
}
