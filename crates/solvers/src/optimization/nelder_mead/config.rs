use thiserror::Error;

/// Coefficients controlling the size of each simplex transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    reflection: f64,
    expansion: f64,
    contraction: f64,
    shrink: f64,
}

/// Configuration for the Nelder-Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    initial_step: f64,
    memoize: bool,
    coefficients: Coefficients,
}

/// Errors that can occur when validating a Nelder-Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("initial_step must be finite and non-zero")]
    InitialStep,

    #[error("reflection coefficient must be finite and positive")]
    Reflection,

    #[error("expansion coefficient must be finite, greater than 1, and greater than reflection")]
    Expansion,

    #[error("contraction coefficient must be in (0, 1)")]
    Contraction,

    #[error("shrink coefficient must be in (0, 1)")]
    Shrink,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            reflection: 1.0,
            expansion: 2.0,
            contraction: 0.5,
            shrink: 0.5,
        }
    }
}

impl Coefficients {
    /// Creates validated transformation coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is non-finite or out of range.
    pub fn new(
        reflection: f64,
        expansion: f64,
        contraction: f64,
        shrink: f64,
    ) -> Result<Self, ConfigError> {
        if !reflection.is_finite() || reflection <= 0.0 {
            return Err(ConfigError::Reflection);
        }
        if !expansion.is_finite() || expansion <= 1.0 || expansion <= reflection {
            return Err(ConfigError::Expansion);
        }
        if !(contraction > 0.0 && contraction < 1.0) {
            return Err(ConfigError::Contraction);
        }
        if !(shrink > 0.0 && shrink < 1.0) {
            return Err(ConfigError::Shrink);
        }

        Ok(Self {
            reflection,
            expansion,
            contraction,
            shrink,
        })
    }

    /// Returns the reflection coefficient (α).
    #[must_use]
    pub fn reflection(&self) -> f64 {
        self.reflection
    }

    /// Returns the expansion coefficient (γ).
    #[must_use]
    pub fn expansion(&self) -> f64 {
        self.expansion
    }

    /// Returns the contraction coefficient (ρ).
    #[must_use]
    pub fn contraction(&self) -> f64 {
        self.contraction
    }

    /// Returns the shrink coefficient (σ) used by reduction.
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.shrink
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Config {
    /// Creates a config with the given iteration budget and default settings.
    ///
    /// Defaults: tolerance `1e-20`, initial step `10.0`, memoization enabled,
    /// and the standard coefficients (α = 1, γ = 2, ρ = 0.5, σ = 0.5).
    #[must_use]
    pub fn new(max_iters: usize) -> Self {
        Self {
            max_iters,
            tolerance: 1e-20,
            initial_step: 10.0,
            memoize: true,
            coefficients: Coefficients::default(),
        }
    }

    /// Sets the convergence tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Sets the per-axis offset used to build the initial simplex.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero or non-finite.
    pub fn with_initial_step(mut self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step == 0.0 {
            return Err(ConfigError::InitialStep);
        }
        self.initial_step = step;
        Ok(self)
    }

    /// Sets the transformation coefficients.
    #[must_use]
    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Enables or disables memoization of objective evaluations.
    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the per-axis offset used to build the initial simplex.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns whether objective evaluations are memoized.
    #[must_use]
    pub fn memoize(&self) -> bool {
        self.memoize
    }

    /// Returns the transformation coefficients.
    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_standard_settings() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.tolerance(), 1e-20);
        assert_eq!(config.initial_step(), 10.0);
        assert!(config.memoize());
        assert_eq!(config.coefficients(), Coefficients::default());
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(
            Config::new(10).with_tolerance(-1.0),
            Err(ConfigError::Tolerance)
        );
        assert_eq!(
            Config::new(10).with_tolerance(f64::NAN),
            Err(ConfigError::Tolerance)
        );
    }

    #[test]
    fn rejects_zero_initial_step() {
        assert_eq!(
            Config::new(10).with_initial_step(0.0),
            Err(ConfigError::InitialStep)
        );
    }

    #[test]
    fn accepts_negative_initial_step() {
        let config = Config::new(10).with_initial_step(-1.0).unwrap();
        assert_eq!(config.initial_step(), -1.0);
    }

    #[test]
    fn validates_coefficients() {
        assert_eq!(
            Coefficients::new(0.0, 2.0, 0.5, 0.5),
            Err(ConfigError::Reflection)
        );
        assert_eq!(
            Coefficients::new(1.0, 1.0, 0.5, 0.5),
            Err(ConfigError::Expansion)
        );
        assert_eq!(
            Coefficients::new(1.5, 1.2, 0.5, 0.5),
            Err(ConfigError::Expansion)
        );
        assert_eq!(
            Coefficients::new(1.0, 2.0, 1.0, 0.5),
            Err(ConfigError::Contraction)
        );
        assert_eq!(
            Coefficients::new(1.0, 2.0, 0.5, f64::NAN),
            Err(ConfigError::Shrink)
        );
        assert!(Coefficients::new(1.0, 3.0, 0.25, 0.75).is_ok());
    }
}
