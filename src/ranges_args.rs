use {
    crate::{zip_code::ZipCode, zip_range::ZipRange},
    lazy_static::lazy_static,
    regex::Regex,
    std::{fs, path::Path},
};

lazy_static! {
    /// `[32222,53333]` captures `32222` and `53333`.
    static ref ZIP_PAIR: Regex =
        Regex::new(r#"\[\s*([0-9]{5})\s*,\s*([0-9]{5})\s*\]"#).unwrap();
}

/// Zip code ranges in the order they were found in the arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangesArgs(pub Vec<ZipRange>);

impl RangesArgs {
    /// Each argument is either a path to a file with whitespace separated
    /// pairs, or the pairs themselves. Pairs that don't parse are skipped.
    pub fn from(args: &[&str]) -> Self {
        let ranges = args
            .iter()
            .flat_map(|arg| Self::pairs(arg))
            .filter_map(|pair| Self::parse_range(&pair))
            .collect::<Vec<_>>();
        log::debug!("Parsed ranges: {}", crate::print_ranges(&ranges));
        Self(ranges)
    }

    pub fn into_inner(self) -> Vec<ZipRange> {
        self.0
    }

    fn pairs(arg: &str) -> Vec<String> {
        log::trace!("Argument: {}", arg);

        let path = Path::new(arg);
        let text = if path.is_file() {
            log::debug!("Found file at {}", path.display());
            match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    log::error!("Unable to read {}: {}", arg, e);
                    return Vec::new();
                }
            }
        } else {
            arg.to_owned()
        };

        text.split_whitespace().map(String::from).collect()
    }

    fn parse_range(pair: &str) -> Option<ZipRange> {
        log::trace!("Zip code pair: {}", pair);

        let captures = match ZIP_PAIR.captures(pair) {
            Some(captures) => captures,
            None => {
                log::warn!("Unable to parse zip code range {:?}; ignoring", pair);
                return None;
            }
        };

        let codes = ZipCode::parse(&captures[1])
            .and_then(|a| ZipCode::parse(&captures[2]).map(|b| (a, b)));
        match codes {
            Ok((a, b)) => {
                let range = ZipRange::new(a, b);
                log::debug!("Parsed zip code range: {}", range);
                Some(range)
            }
            Err(e) => {
                log::warn!("{}; ignoring {:?}", e, pair);
                None
            }
        }
    }
}
