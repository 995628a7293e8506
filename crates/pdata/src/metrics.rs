//! Metric trees.

pub use crate::generated::metrics::{
    DoubleDataPoint, DoubleDataPointSlice, DoubleExemplar, DoubleExemplarSlice, DoubleGauge,
    DoubleHistogram, DoubleHistogramDataPoint, DoubleHistogramDataPointSlice, DoubleSum,
    InstrumentationLibraryMetrics, InstrumentationLibraryMetricsSlice, IntDataPoint,
    IntDataPointSlice, IntExemplar, IntExemplarSlice, IntGauge, IntHistogram,
    IntHistogramDataPoint, IntHistogramDataPointSlice, IntSum, Metric, MetricData,
    MetricDataType, MetricSlice, Metrics, ResourceMetrics, ResourceMetricsSlice, Summary,
    SummaryDataPoint, SummaryDataPointSlice, ValueAtQuantile, ValueAtQuantileSlice,
};
pub use crate::proto::metrics::AggregationTemporality;

impl Metrics {
    /// Counts metrics across every resource and instrumentation library.
    pub fn metric_count(&self) -> usize {
        self.metric_and_data_point_count().0
    }

    /// Counts data points of every metric, whatever its data shape.
    pub fn data_point_count(&self) -> usize {
        self.metric_and_data_point_count().1
    }

    /// Returns `(metrics, data points)` from a single walk of the tree.
    pub fn metric_and_data_point_count(&self) -> (usize, usize) {
        let mut metrics = 0;
        let mut points = 0;
        for rm in self.resource_metrics().iter() {
            for ilm in rm.instrumentation_library_metrics().iter() {
                let slice = ilm.metrics();
                metrics += slice.len();
                points += slice.iter().map(|m| m.data_point_count()).sum::<usize>();
            }
        }
        (metrics, points)
    }
}

impl Metric {
    /// Number of data points carried by this metric; zero when no data is set.
    pub fn data_point_count(&self) -> usize {
        match self.data() {
            None => 0,
            Some(MetricData::IntGauge(data)) => data.data_points().len(),
            Some(MetricData::DoubleGauge(data)) => data.data_points().len(),
            Some(MetricData::IntSum(data)) => data.data_points().len(),
            Some(MetricData::DoubleSum(data)) => data.data_points().len(),
            Some(MetricData::IntHistogram(data)) => data.data_points().len(),
            Some(MetricData::DoubleHistogram(data)) => data.data_points().len(),
            Some(MetricData::Summary(data)) => data.data_points().len(),
        }
    }
}
