//! Demosaic configuration.

use crate::{Demosaic, GreenRounding, CFA};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DemosaicOptions {
    pub cfa: CFA,
    pub algorithm: Demosaic,
    pub rounding: GreenRounding,
    /// `true` produces `[.., 3]` colour output, `false` gray output.
    pub color: bool,
}

impl Default for DemosaicOptions {
    fn default() -> Self {
        Self {
            cfa: CFA::GRBG,
            algorithm: Demosaic::NearestNeighbour,
            rounding: GreenRounding::HalfAwayFromZero,
            color: true,
        }
    }
}

impl DemosaicOptions {
    pub fn builder() -> DemosaicOptionsBuilder {
        DemosaicOptionsBuilder::default()
    }
}

#[derive(Default)]
pub struct DemosaicOptionsBuilder {
    cfa: Option<CFA>,
    algorithm: Option<Demosaic>,
    rounding: Option<GreenRounding>,
    color: Option<bool>,
}

impl DemosaicOptionsBuilder {
    pub fn cfa(mut self, cfa: CFA) -> Self {
        self.cfa = Some(cfa);
        self
    }

    pub fn algorithm(mut self, algorithm: Demosaic) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Select the algorithm by its integer selector, see [`Demosaic::from_alg`].
    pub fn alg(self, alg: i32) -> Self {
        self.algorithm(Demosaic::from_alg(alg))
    }

    pub fn rounding(mut self, rounding: GreenRounding) -> Self {
        self.rounding = Some(rounding);
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    pub fn build(self) -> DemosaicOptions {
        let default = DemosaicOptions::default();
        DemosaicOptions {
            cfa: self.cfa.unwrap_or(default.cfa),
            algorithm: self.algorithm.unwrap_or(default.algorithm),
            rounding: self.rounding.unwrap_or(default.rounding),
            color: self.color.unwrap_or(default.color),
        }
    }
}
