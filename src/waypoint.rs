use std::cmp::Ordering;
use std::fmt;

/// A `<wpt>` entry, borrowed from the document it was read from.
///
/// Coordinates stay in their textual form: they are only ever copied to the
/// output, never computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Waypoint<'a> {
    lat: &'a str,
    lon: &'a str,
    name: &'a str,
    ele: &'a str,
    time: &'a str,
    cmt: &'a str,
}

impl<'a> Waypoint<'a> {
    pub fn new(
        lat: &'a str,
        lon: &'a str,
        name: &'a str,
        ele: &'a str,
        time: &'a str,
        cmt: &'a str,
    ) -> Self {
        Self {
            lat,
            lon,
            name,
            ele,
            time,
            cmt,
        }
    }

    pub fn lat(&self) -> &'a str {
        self.lat
    }

    pub fn lon(&self) -> &'a str {
        self.lon
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn ele(&self) -> &'a str {
        self.ele
    }

    pub fn time(&self) -> &'a str {
        self.time
    }

    pub fn cmt(&self) -> &'a str {
        self.cmt
    }

    /// Orders by latitude text, then longitude text (byte-wise).
    pub fn position_cmp(&self, other: &Waypoint<'_>) -> Ordering {
        self.lat
            .cmp(other.lat)
            .then_with(|| self.lon.cmp(other.lon))
    }

    pub fn same_position(&self, other: &Waypoint<'_>) -> bool {
        self.position_cmp(other) == Ordering::Equal
    }

    pub fn same_name(&self, other: &Waypoint<'_>) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Waypoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] {}, {}, {}, {}",
            self.lat, self.lon, self.ele, self.time, self.name, self.cmt
        )
    }
}
