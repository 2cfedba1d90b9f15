use crate::models::Dimension;

/// Which columns the snapshot source actually provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSchema {
    /// Present dimension columns, in canonical order.
    dimensions: Vec<Dimension>,
    cluster_column: Option<String>,
}

impl SnapshotSchema {
    pub fn new(
        dimensions: impl IntoIterator<Item = Dimension>,
        cluster_column: Option<String>,
    ) -> Self {
        let mut dimensions: Vec<Dimension> = dimensions.into_iter().collect();
        dimensions.sort();
        dimensions.dedup();
        Self {
            dimensions,
            cluster_column,
        }
    }

    /// All five dimensions present.
    pub fn complete(cluster_column: Option<&str>) -> Self {
        Self::new(Dimension::ALL, cluster_column.map(str::to_string))
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn has_dimension(&self, dimension: Dimension) -> bool {
        self.dimensions.contains(&dimension)
    }

    pub fn missing_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| !self.has_dimension(*d))
            .collect()
    }

    pub fn cluster_column(&self) -> Option<&str> {
        self.cluster_column.as_deref()
    }

    pub fn has_cluster_column(&self) -> bool {
        self.cluster_column.is_some()
    }
}
