use crate::error::{AutoMpgError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Values that can be coerced into a model year.
pub trait IntoYear {
    fn into_year(self) -> Result<i32>;
}

/// Values that can be coerced into a miles-per-gallon figure.
pub trait IntoMpg {
    fn into_mpg(self) -> Result<f64>;
}

fn construction_error(field: &'static str, value: impl ToString) -> AutoMpgError {
    AutoMpgError::Construction {
        field,
        value: value.to_string(),
    }
}

macro_rules! impl_into_year_lossless {
    ($($t:ty),*) => {
        $(impl IntoYear for $t {
            fn into_year(self) -> Result<i32> {
                Ok(i32::from(self))
            }
        })*
    };
}

macro_rules! impl_into_year_checked {
    ($($t:ty),*) => {
        $(impl IntoYear for $t {
            fn into_year(self) -> Result<i32> {
                i32::try_from(self).map_err(|_| construction_error("year", self))
            }
        })*
    };
}

impl_into_year_lossless!(i8, i16, i32, u8, u16);
impl_into_year_checked!(i64, u32, u64, usize);

impl IntoYear for &str {
    fn into_year(self) -> Result<i32> {
        self.trim()
            .parse::<i32>()
            .map_err(|_| construction_error("year", self))
    }
}

impl IntoYear for String {
    fn into_year(self) -> Result<i32> {
        self.as_str().into_year()
    }
}

macro_rules! impl_into_mpg_lossless {
    ($($t:ty),*) => {
        $(impl IntoMpg for $t {
            fn into_mpg(self) -> Result<f64> {
                Ok(f64::from(self))
            }
        })*
    };
}

impl_into_mpg_lossless!(i8, i16, i32, u8, u16, u32, f32);

impl IntoMpg for f64 {
    fn into_mpg(self) -> Result<f64> {
        Ok(self)
    }
}

impl IntoMpg for &str {
    fn into_mpg(self) -> Result<f64> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| construction_error("mpg", self))
    }
}

impl IntoMpg for String {
    fn into_mpg(self) -> Result<f64> {
        self.as_str().into_mpg()
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// One automobile from the data set.
///
/// Make and model are title-cased on construction and the value is immutable
/// afterwards. Equality, ordering and hashing all use the
/// `(make, model, year, mpg)` tuple.
#[derive(Clone)]
pub struct AutoMpg {
    make: String,
    model: String,
    year: i32,
    mpg: f64,
}

impl AutoMpg {
    /// Builds a record, normalizing the name fields and coercing the numbers.
    ///
    /// Fails with [`AutoMpgError::Construction`] when the year or mpg cannot be
    /// coerced, or when mpg is not a finite number.
    pub fn new(
        make: impl AsRef<str>,
        model: impl AsRef<str>,
        year: impl IntoYear,
        mpg: impl IntoMpg,
    ) -> Result<Self> {
        let year = year.into_year()?;
        let mpg = mpg.into_mpg()?;
        if !mpg.is_finite() {
            return Err(construction_error("mpg", mpg));
        }

        Ok(Self {
            make: title_case(make.as_ref()),
            model: title_case(model.as_ref()),
            year,
            // folds -0.0 into 0.0 so total_cmp agrees with ==
            mpg: mpg + 0.0,
        })
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn mpg(&self) -> f64 {
        self.mpg
    }

    /// Natural ordering: make, model, year, then mpg.
    pub fn compare(a: &AutoMpg, b: &AutoMpg) -> Ordering {
        a.make
            .cmp(&b.make)
            .then_with(|| a.model.cmp(&b.model))
            .then_with(|| a.year.cmp(&b.year))
            .then_with(|| a.mpg.total_cmp(&b.mpg))
    }
}

impl fmt::Display for AutoMpg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}

impl fmt::Debug for AutoMpg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AutoMpg('{}', '{}', {}, {:?})",
            self.make, self.model, self.year, self.mpg
        )
    }
}

impl PartialEq for AutoMpg {
    fn eq(&self, other: &Self) -> bool {
        AutoMpg::compare(self, other) == Ordering::Equal
    }
}

impl Eq for AutoMpg {}

impl PartialOrd for AutoMpg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AutoMpg {
    fn cmp(&self, other: &Self) -> Ordering {
        AutoMpg::compare(self, other)
    }
}

impl Hash for AutoMpg {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.make.hash(state);
        self.model.hash(state);
        self.year.hash(state);
        self.mpg.to_bits().hash(state);
    }
}
