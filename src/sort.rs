use crate::loader::AutoMpgData;
use crate::record::AutoMpg;
use clap::ValueEnum;
use std::cmp::Ordering;
use std::fmt;

/// The orderings the data set can be put in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// make, model, year, mpg
    Default,
    /// year, make, model, mpg
    Year,
    /// mpg, make, model, year
    Mpg,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::Year => "year",
            SortOrder::Mpg => "mpg",
        }
    }

    pub fn comparator(&self) -> fn(&AutoMpg, &AutoMpg) -> Ordering {
        match self {
            SortOrder::Default => AutoMpg::compare,
            SortOrder::Year => by_year,
            SortOrder::Mpg => by_mpg,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn by_year(a: &AutoMpg, b: &AutoMpg) -> Ordering {
    a.year()
        .cmp(&b.year())
        .then_with(|| a.make().cmp(b.make()))
        .then_with(|| a.model().cmp(b.model()))
        .then_with(|| a.mpg().total_cmp(&b.mpg()))
}

pub fn by_mpg(a: &AutoMpg, b: &AutoMpg) -> Ordering {
    a.mpg()
        .total_cmp(&b.mpg())
        .then_with(|| a.make().cmp(b.make()))
        .then_with(|| a.model().cmp(b.model()))
        .then_with(|| a.year().cmp(&b.year()))
}

impl AutoMpgData {
    /// Stable in-place sort by the given ordering.
    pub fn sort(&mut self, order: SortOrder) -> &[AutoMpg] {
        self.data.sort_by(order.comparator());
        &self.data
    }

    pub fn sort_by_default(&mut self) -> &[AutoMpg] {
        self.sort(SortOrder::Default)
    }

    pub fn sort_by_year(&mut self) -> &[AutoMpg] {
        self.sort(SortOrder::Year)
    }

    pub fn sort_by_mpg(&mut self) -> &[AutoMpg] {
        self.sort(SortOrder::Mpg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(make: &str, model: &str, year: i32, mpg: f64) -> AutoMpg {
        AutoMpg::new(make, model, year, mpg).unwrap()
    }

    fn sample() -> AutoMpgData {
        AutoMpgData::from_records(vec![
            car("plymouth", "duster", 1982, 22.0),
            car("ford", "pinto", 1975, 18.0),
            car("amc", "hornet", 1970, 18.0),
            car("ford", "maverick", 1975, 21.0),
            car("amc", "hornet", 1970, 16.0),
        ])
    }

    fn years(records: &[AutoMpg]) -> Vec<i32> {
        records.iter().map(|r| r.year()).collect()
    }

    #[test]
    fn test_sort_by_year_ascending_with_tie_breaks() {
        let mut data = sample();
        let sorted = data.sort_by_year();
        assert_eq!(years(sorted), vec![1970, 1970, 1975, 1975, 1982]);
        assert_eq!(sorted[0].mpg(), 16.0);
        assert_eq!(sorted[2].model(), "Maverick");
        assert_eq!(sorted[3].model(), "Pinto");
    }

    #[test]
    fn test_sort_by_mpg_breaks_ties_on_make() {
        let mut data = sample();
        let sorted = data.sort_by_mpg();
        let mpgs: Vec<f64> = sorted.iter().map(|r| r.mpg()).collect();
        assert_eq!(mpgs, vec![16.0, 18.0, 18.0, 21.0, 22.0]);
        assert_eq!(sorted[1].make(), "Amc");
        assert_eq!(sorted[2].make(), "Ford");
    }

    #[test]
    fn test_default_matches_natural_ordering() {
        let mut data = sample();
        let mut expected = sample().data;
        expected.sort();
        assert_eq!(data.sort_by_default(), expected.as_slice());
    }

    #[test]
    fn test_sorting_is_idempotent() {
        for order in [SortOrder::Default, SortOrder::Year, SortOrder::Mpg] {
            let mut data = sample();
            let once = data.sort(order).to_vec();
            let twice = data.sort(order).to_vec();
            assert_eq!(once, twice, "order {order}");
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_records() {
        let first = car("amc", "gremlin", 1970, 21.0);
        let mut data = AutoMpgData::from_records(vec![
            car("ford", "pinto", 1971, 25.0),
            first.clone(),
            first.clone(),
        ]);
        data.sort_by_year();
        assert_eq!(data.records()[0], first);
        assert_eq!(data.records()[1], first);
    }

    #[test]
    fn test_sort_order_parses_case_insensitively() {
        let parse = |s: &str| <SortOrder as ValueEnum>::from_str(s, true);
        assert_eq!(parse("YEAR").unwrap(), SortOrder::Year);
        assert_eq!(parse("Mpg").unwrap(), SortOrder::Mpg);
        assert_eq!(parse("default").unwrap(), SortOrder::Default);
        assert!(parse("weight").is_err());
    }
}
