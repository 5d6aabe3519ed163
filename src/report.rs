use crate::record::AutoMpg;
use std::io::{self, Write};

/// One `"{year} {make} {model}"` line per record, in sequence order.
pub fn lines<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a AutoMpg>,
{
    records.into_iter().map(|r| r.to_string()).collect()
}

pub fn write_report<'a, I, W>(records: I, mut out: W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a AutoMpg>,
    W: Write,
{
    for record in records {
        writeln!(out, "{}", record)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::AutoMpgData;

    #[test]
    fn test_report_prints_in_sequence_order() {
        let mut data = AutoMpgData::from_records(vec![
            AutoMpg::new("toyota", "corona", 1982, 27.0).unwrap(),
            AutoMpg::new("chevrolet", "chevelle malibu", 1970, 18.0).unwrap(),
        ]);
        assert_eq!(lines(&data), vec!["1982 Toyota Corona", "1970 Chevrolet Chevelle Malibu"]);

        data.sort_by_year();
        let mut out = Vec::new();
        write_report(&data, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1970 Chevrolet Chevelle Malibu\n1982 Toyota Corona\n"
        );
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let mut out = Vec::new();
        write_report(&AutoMpgData::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
