/// Linear mapping between a data domain and a screen range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        Self {
            domain: (d_min, d_max),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let t = (value - d_min) / (d_max - d_min);
        let res = r_min as f64 + t * (r_max - r_min) as f64;
        if res.is_finite() {
            res as f32
        } else {
            0.0
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let r_span = (r_max - r_min) as f64;
        if r_span.abs() < f64::EPSILON {
            return d_min;
        }
        let t = (pixel - r_min) as f64 / r_span;
        d_min + t * (d_max - d_min)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Data units covered by one screen unit.
    pub fn data_per_pixel(&self) -> f64 {
        let r_span = (self.range.1 - self.range.0) as f64;
        if r_span.abs() < f64::EPSILON {
            return 0.0;
        }
        (self.domain.1 - self.domain.0) / r_span
    }
}
