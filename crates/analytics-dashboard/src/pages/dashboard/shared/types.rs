//! Shared types for the dashboard

/// Dashboard section type
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Section {
    #[default]
    Dashboard,
    Prediction,
    ClientPrediction,
    Products,
    Clusters,
    ClientClusters,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Prediction,
        Section::ClientPrediction,
        Section::Products,
        Section::Clusters,
        Section::ClientClusters,
    ];

    /// Heading shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Profitability Dashboard",
            Section::Prediction => "Revenue Prediction",
            Section::ClientPrediction => "Client Prediction",
            Section::Products => "All Products",
            Section::Clusters => "Product Clusters",
            Section::ClientClusters => "Client Clusters",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Prediction => "Prediction",
            Section::ClientPrediction => "Client Prediction",
            Section::Products => "Products",
            Section::Clusters => "Clusters",
            Section::ClientClusters => "Client Clusters",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Dashboard => "📊",
            Section::Prediction => "🔮",
            Section::ClientPrediction => "👤",
            Section::Products => "📦",
            Section::Clusters => "🧩",
            Section::ClientClusters => "👥",
        }
    }

    /// Sections with a PDF export button in the header.
    pub fn exportable(self) -> bool {
        matches!(
            self,
            Section::Dashboard | Section::Clusters | Section::ClientClusters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exportable_sections() {
        let exportable: Vec<Section> = Section::ALL.into_iter().filter(|s| s.exportable()).collect();
        assert_eq!(
            exportable,
            vec![Section::Dashboard, Section::Clusters, Section::ClientClusters]
        );
    }
}
