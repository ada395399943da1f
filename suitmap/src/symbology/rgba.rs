use serde::{Deserialize, Serialize};

/// a color with an opacity in percent (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, alpha: u8) -> Rgba {
        Rgba { r, g, b, alpha }
    }

    /// "#rrggbb"
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// opacity as a fraction in [0, 1]
    pub fn opacity(&self) -> f64 {
        f64::from(self.alpha.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::Rgba;

    #[test]
    fn hex_and_opacity() {
        let c = Rgba::new(255, 167, 0, 100);
        assert_eq!(c.hex(), "#ffa700");
        assert_eq!(c.opacity(), 1.0);
        assert_eq!(Rgba::new(0, 0, 0, 50).opacity(), 0.5);
    }
}
