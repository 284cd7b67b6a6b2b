/// Ordered price sequence, one value per discrete dispatch step.
///
/// The label (CSV index column or plain step number) is opaque to the
/// optimizer and only re-attached to schedule rows on output. Negative
/// prices are valid.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    labels: Vec<String>,
    prices: Vec<f64>,
}

impl PriceSeries {
    /// Series labelled by step number.
    pub fn from_prices(prices: impl IntoIterator<Item = f64>) -> Self {
        let prices: Vec<f64> = prices.into_iter().collect();
        let labels = (0..prices.len()).map(|t| t.to_string()).collect();
        Self { labels, prices }
    }

    /// Series with caller-supplied step labels.
    pub fn from_labelled(points: impl IntoIterator<Item = (String, f64)>) -> Self {
        let (labels, prices) = points.into_iter().unzip();
        Self { labels, prices }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
