#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub use ingress_metrics_core as core;
pub use ingress_metrics_k8s_api as k8s;
pub use ingress_metrics_k8s_index as index;

mod args;
mod export;

pub use self::{
    args::{ExportArgs, ExportArgsError},
    export::FeatureMetrics,
};
