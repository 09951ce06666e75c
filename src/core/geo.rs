//! Geographische Koordinaten (WGS-84, Grad).

/// Breiten-/Längengrad-Paar in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    /// Breitengrad (positiv = Nord)
    pub lat: f64,
    /// Längengrad (positiv = Ost)
    pub lon: f64,
}

impl LatLon {
    /// Erstellt ein Koordinatenpaar.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_four_decimals() {
        let pos = LatLon::new(41.8781, -87.6298);
        assert_eq!(format!("{}", pos), "(41.8781, -87.6298)");
    }
}
