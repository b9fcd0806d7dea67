// Arcade token spin

/// Degrees added per tick
const SPIN_STEP: f32 = 2.5;
/// Spin wraps back to zero here; the token is symmetric front-to-back
const SPIN_WRAP: f32 = 180.0;

/// Spins the arcade tokens in place. Single phase, runs forever.
#[derive(Debug, Default)]
pub struct TokenSpinner {
    spin: f32,
}

impl TokenSpinner {
    pub fn new() -> Self {
        Self { spin: 0.0 }
    }

    pub fn advance(&mut self) {
        self.spin += SPIN_STEP;
        if self.spin >= SPIN_WRAP {
            self.spin = 0.0;
        }
    }

    /// Current yaw in degrees, always in [0, 180)
    pub fn spin(&self) -> f32 {
        self.spin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_accumulates() {
        let mut token = TokenSpinner::new();
        token.advance();
        assert_eq!(token.spin(), 2.5);
        token.advance();
        assert_eq!(token.spin(), 5.0);
    }

    #[test]
    fn test_spin_is_modular() {
        let mut token = TokenSpinner::new();
        // angle after k ticks must equal (2.5 * k) mod 180
        for k in 1..=500u32 {
            token.advance();
            let expected = (SPIN_STEP * k as f32) % SPIN_WRAP;
            assert!(
                (token.spin() - expected).abs() < 1e-3,
                "tick {}: got {}, expected {}",
                k,
                token.spin(),
                expected
            );
        }
    }

    #[test]
    fn test_spin_wraps_to_zero() {
        let mut token = TokenSpinner::new();
        // 72 ticks at 2.5 degrees reach exactly 180 and wrap
        for _ in 0..72 {
            token.advance();
        }
        assert_eq!(token.spin(), 0.0);
    }
}
