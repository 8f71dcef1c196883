//! Wind bearing to 16-point compass conversion.

/// One of the 16 compass points, clockwise from north in 22.5° steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    North,
    NorthNortheast,
    Northeast,
    EastNortheast,
    East,
    EastSoutheast,
    Southeast,
    SouthSoutheast,
    South,
    SouthSouthwest,
    Southwest,
    WestSouthwest,
    West,
    WestNorthwest,
    Northwest,
    NorthNorthwest,
}

/// Point table, clockwise starting at north.
const POINTS: [CompassPoint; 16] = [
    CompassPoint::North,
    CompassPoint::NorthNortheast,
    CompassPoint::Northeast,
    CompassPoint::EastNortheast,
    CompassPoint::East,
    CompassPoint::EastSoutheast,
    CompassPoint::Southeast,
    CompassPoint::SouthSoutheast,
    CompassPoint::South,
    CompassPoint::SouthSouthwest,
    CompassPoint::Southwest,
    CompassPoint::WestSouthwest,
    CompassPoint::West,
    CompassPoint::WestNorthwest,
    CompassPoint::Northwest,
    CompassPoint::NorthNorthwest,
];

impl CompassPoint {
    /// Convert a bearing in degrees to the nearest compass point.
    ///
    /// Total over all reals: the bearing is reduced modulo 360 first,
    /// so negative and out-of-range values are handled.
    pub fn from_degrees(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        let index = (normalized / 22.5 + 0.5).floor() as usize % 16;
        POINTS[index]
    }

    /// Conventional abbreviation ("N", "NNE", ...).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthNortheast => "NNE",
            Self::Northeast => "NE",
            Self::EastNortheast => "ENE",
            Self::East => "E",
            Self::EastSoutheast => "ESE",
            Self::Southeast => "SE",
            Self::SouthSoutheast => "SSE",
            Self::South => "S",
            Self::SouthSouthwest => "SSW",
            Self::Southwest => "SW",
            Self::WestSouthwest => "WSW",
            Self::West => "W",
            Self::WestNorthwest => "WNW",
            Self::Northwest => "NW",
            Self::NorthNorthwest => "NNW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_north() {
        assert_eq!(CompassPoint::from_degrees(0.0), CompassPoint::North);
    }

    #[test]
    fn cardinal_points() {
        assert_eq!(CompassPoint::from_degrees(90.0), CompassPoint::East);
        assert_eq!(CompassPoint::from_degrees(180.0), CompassPoint::South);
        assert_eq!(CompassPoint::from_degrees(270.0), CompassPoint::West);
    }

    #[test]
    fn sector_boundaries() {
        // Each sector is centered on its point: N covers [348.75, 11.25)
        assert_eq!(CompassPoint::from_degrees(11.24), CompassPoint::North);
        assert_eq!(
            CompassPoint::from_degrees(11.25),
            CompassPoint::NorthNortheast
        );
        assert_eq!(CompassPoint::from_degrees(348.74), CompassPoint::NorthNorthwest);
        assert_eq!(CompassPoint::from_degrees(348.75), CompassPoint::North);
    }

    #[test]
    fn wraps_back_to_north() {
        assert_eq!(CompassPoint::from_degrees(350.0), CompassPoint::North);
        assert_eq!(CompassPoint::from_degrees(359.9), CompassPoint::North);
        assert_eq!(CompassPoint::from_degrees(360.0), CompassPoint::North);
    }

    #[test]
    fn reduced_modulo_360() {
        for d in [-720.0, -350.0, -90.0, 45.0, 123.4, 400.0, 1080.5] {
            assert_eq!(
                CompassPoint::from_degrees(d),
                CompassPoint::from_degrees(d.rem_euclid(360.0)),
                "degrees {d}"
            );
        }
        assert_eq!(CompassPoint::from_degrees(-90.0), CompassPoint::West);
    }

    #[test]
    fn abbreviations_follow_the_table() {
        assert_eq!(CompassPoint::from_degrees(0.0).abbreviation(), "N");
        assert_eq!(CompassPoint::from_degrees(22.5).abbreviation(), "NNE");
        assert_eq!(CompassPoint::from_degrees(202.5).abbreviation(), "SSW");
        assert_eq!(CompassPoint::from_degrees(337.5).abbreviation(), "NNW");
    }
}
