/// Observed min and max of one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionRange {
    pub min: f64,
    pub max: f64,
}

impl DimensionRange {
    /// Range of `values`. No values gives the degenerate range [0, 0].
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self { min: 0.0, max: 0.0 };
        };
        iter.fold(Self { min: first, max: first }, |range, v| Self {
            min: range.min.min(v),
            max: range.max.max(v),
        })
    }

    /// Constant dimensions carry no signal.
    pub fn is_constant(&self) -> bool {
        self.max == self.min
    }

    /// Map `value` into [0, 1]. Constant ranges map everything to 0.0.
    ///
    /// A span between finite extremes can overflow to infinity; it is then
    /// computed on halved operands instead.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_constant() {
            return 0.0;
        }
        let span = self.max - self.min;
        let scaled = if span.is_finite() {
            (value - self.min) / span
        } else {
            let (min, max) = (self.min / 2.0, self.max / 2.0);
            (value / 2.0 - min) / (max - min)
        };
        scaled.clamp(0.0, 1.0)
    }
}
