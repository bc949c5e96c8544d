use crate::ExportArgs;
use ingress_metrics_core::{BackendFeature, FrontendFeature, NegFeature};
use ingress_metrics_k8s_index::{ControllerMetrics, FeatureCounts, SharedMetrics};
use prometheus_client::{
    encoding::EncodeLabelSet,
    metrics::{family::Family, gauge::Gauge},
    registry::Registry,
};
use std::{fmt, future::Future};
use tokio::time;

/// Publishes feature usage counts as Prometheus gauges.
#[derive(Clone, Debug)]
pub struct FeatureMetrics {
    ingresses: Family<FeatureLabels, Gauge>,
    service_ports: Family<FeatureLabels, Gauge>,
    negs: Family<FeatureLabels, Gauge>,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct FeatureLabels {
    feature: String,
}

// === impl FeatureMetrics ===

impl FeatureMetrics {
    pub fn register(prom: &mut Registry) -> Self {
        let ingresses = Family::default();
        prom.register("number_of_ingresses", "Number of Ingresses", ingresses.clone());

        let service_ports = Family::default();
        prom.register("number_of_service_ports", "Number of Service Ports", service_ports.clone());

        let negs = Family::default();
        prom.register("number_of_negs", "Number of NEGs", negs.clone());

        Self {
            ingresses,
            service_ports,
            negs,
        }
    }

    /// Computes feature usage and updates every gauge.
    ///
    /// Ingress gauges cover both frontend features and the backend features
    /// of the ingresses' service ports, except the kind of service port.
    pub fn export(&self, metrics: &ControllerMetrics) {
        let usage = metrics.compute_ingress_usage();
        let negs = metrics.compute_neg_metrics();

        set_all(&self.ingresses, &usage.ingresses);
        set_all(&self.ingresses, &usage.ingress_backends);
        set_all(&self.service_ports, &usage.service_ports);
        set_all(&self.negs, &negs);

        tracing::debug!(
            ingresses = ?usage.ingresses,
            ingress_backends = ?usage.ingress_backends,
            service_ports = ?usage.service_ports,
            ?negs,
            "Exported feature usage"
        );
        tracing::info!(
            ingresses = usage.ingresses[&FrontendFeature::Ingress],
            service_ports = usage.service_ports[&BackendFeature::ServicePort],
            negs = negs[&NegFeature::Neg],
            "Exported ingress usage metrics"
        );
    }

    /// Exports feature usage once per interval, after an initial delay, until
    /// `shutdown` completes.
    pub async fn run(
        self,
        metrics: SharedMetrics,
        args: ExportArgs,
        shutdown: impl Future<Output = ()>,
    ) -> anyhow::Result<()> {
        args.validate()?;
        tokio::pin!(shutdown);

        tracing::info!(
            interval = ?args.export_interval(),
            initial_delay = ?args.initial_delay(),
            "Ingress usage metrics initialized"
        );

        tokio::select! {
            _ = &mut shutdown => return Ok(()),
            _ = time::sleep(args.initial_delay()) => {}
        }

        let mut interval = time::interval(args.export_interval());
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::debug!("Stopping ingress usage metrics export");
                    return Ok(());
                }
                _ = interval.tick() => self.export(&metrics),
            }
        }
    }
}

fn set_all<F: fmt::Display>(family: &Family<FeatureLabels, Gauge>, counts: &FeatureCounts<F>) {
    for (feature, count) in counts {
        family
            .get_or_create(&FeatureLabels {
                feature: feature.to_string(),
            })
            .set(i64::try_from(*count).unwrap_or(i64::MAX));
    }
}
