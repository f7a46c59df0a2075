use {
    lazy_static::lazy_static,
    regex::Regex,
    std::{convert::TryFrom, fmt, str::FromStr},
};

lazy_static! {
    static ref ZIP_CODE: Regex = Regex::new(r#"^[0-9]{5}$"#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Zip code must be exactly five digits, unable to parse {0:?}")]
    Format(String),

    #[error("Zip code must be between 00000 and 99999, got {0}")]
    OutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, Error>;

/// US 5-digit zip code, e.g. `00123`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZipCode(u32);

impl ZipCode {
    /// Lowest zip code, `00000`.
    pub const MIN: ZipCode = ZipCode(0);

    /// Highest zip code, `99999`.
    pub const MAX: ZipCode = ZipCode(99_999);

    /// Parses exactly five ASCII digits.
    pub fn parse(code: &str) -> Result<Self> {
        if !ZIP_CODE.is_match(code) {
            return Err(Error::Format(code.into()));
        }
        let value = code
            .parse::<i32>()
            .map_err(|_e| Error::Format(code.into()))?;
        Self::from_int(value)
    }

    pub fn from_int(code: i32) -> Result<Self> {
        if code < Self::MIN.0 as i32 || code > Self::MAX.0 as i32 {
            return Err(Error::OutOfRange(code.into()));
        }
        Ok(Self(code as u32))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Previous zip code in integer order, or [`ZipCode::MIN`] when already there.
    pub fn previous(self) -> Self {
        if self == Self::MIN {
            self
        } else {
            Self(self.0 - 1)
        }
    }

    /// Next zip code in integer order, or [`ZipCode::MAX`] when already there.
    pub fn next(self) -> Self {
        if self == Self::MAX {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    pub fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    pub fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }
}

impl FromStr for ZipCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<i32> for ZipCode {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_int(code)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}
