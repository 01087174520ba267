#[derive(Debug, Default, Clone)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub segment_buckets: usize,
}

impl RegistryMetrics {
    pub fn record_register(&mut self, new_bucket: bool) {
        self.total_routes_registered += 1;
        if new_bucket {
            self.segment_buckets += 1;
        }
    }
}
