// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod postings_csv_datasource;
        pub(crate) mod postings_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod posting_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod postings_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod category_aggregate;
        pub(crate) mod dashboard_config;
        pub(crate) mod dashboard_view;
        pub(crate) mod filter_config;
        pub(crate) mod metrics;
        pub(crate) mod posting;
        pub(crate) mod provider;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregation_stage;
        pub(crate) mod filter_stage;
        pub(crate) mod metrics_stage;
        pub(crate) mod ordering_policy;
        pub(crate) mod pipeline;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod postings_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod dashboard_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod kpi_fmt;
    pub(crate) mod table_printer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::category_aggregate::*;
        pub use crate::domain::entities::dashboard_config::*;
        pub use crate::domain::entities::dashboard_view::*;
        pub use crate::domain::entities::filter_config::*;
        pub use crate::domain::entities::metrics::*;
        pub use crate::domain::entities::posting::*;
        pub use crate::domain::entities::provider::*;
        pub use crate::domain::usecases::dashboard_usecase::DataState;
    }

    pub mod formatting {
        pub use crate::presentation::amount_fmt::format_amount;
        pub use crate::presentation::kpi_fmt::Kpi;
    }
}
