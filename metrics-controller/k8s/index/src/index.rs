use crate::features;
use ahash::{AHashMap as HashMap, AHashSet as HashSet};
use ingress_metrics_core::{
    BackendFeature, FrontendFeature, IngressMetricsCollector, IngressState, NegFeature,
    NegMetricsCollector, NegServiceState, ServicePort,
};
use parking_lot::RwLock;
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

/// Usage counts for every feature of a vocabulary, including unused features.
pub type FeatureCounts<F> = BTreeMap<F, usize>;

pub type SharedMetrics = Arc<ControllerMetrics>;

/// Feature usage across all recorded ingresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngressUsage {
    /// The number of ingresses using each frontend feature.
    pub ingresses: FeatureCounts<FrontendFeature>,

    /// The number of ingresses with at least one service port using each
    /// backend feature in [`BackendFeature::INGRESS`].
    pub ingress_backends: FeatureCounts<BackendFeature>,

    /// The number of distinct service ports using each backend feature.
    pub service_ports: FeatureCounts<BackendFeature>,
}

/// Holds the latest observed ingress and NEG states.
///
/// Writers replace or remove whole entries, so a computation never observes a
/// partially updated entry. Computations copy the current entries out of the
/// lock and classify them without holding it.
#[derive(Debug, Default)]
pub struct ControllerMetrics {
    /// Ordered by key so that the first service port seen for an id is stable.
    ingresses: RwLock<BTreeMap<String, Arc<IngressState>>>,

    neg_services: RwLock<HashMap<String, NegServiceState>>,
}

// === impl ControllerMetrics ===

impl ControllerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedMetrics {
        Arc::new(Self::new())
    }

    /// Counts the ingresses that use each frontend feature and the distinct
    /// service ports that use each backend feature.
    pub fn compute_ingress_metrics(
        &self,
    ) -> (FeatureCounts<FrontendFeature>, FeatureCounts<BackendFeature>) {
        let IngressUsage {
            ingresses,
            service_ports,
            ..
        } = self.compute_ingress_usage();
        (ingresses, service_ports)
    }

    /// Computes feature usage across all recorded ingresses.
    ///
    /// A service port referenced by several ingresses is classified once,
    /// using the first copy seen in ingress key order.
    pub fn compute_ingress_usage(&self) -> IngressUsage {
        let states = self.ingresses.read().values().cloned().collect::<Vec<_>>();

        let mut usage = IngressUsage::default();
        let mut seen = HashSet::new();
        let mut svc_ports = Vec::<&ServicePort>::new();
        for state in &states {
            let detected = features::for_ingress(&state.ingress)
                .into_iter()
                .collect::<BTreeSet<_>>();
            increment(&mut usage.ingresses, detected);

            let detected = state
                .service_ports
                .iter()
                .flat_map(features::for_service_port)
                .filter(|f| BackendFeature::INGRESS.contains(f))
                .collect::<BTreeSet<_>>();
            increment(&mut usage.ingress_backends, detected);

            for svc_port in &state.service_ports {
                if seen.insert(&svc_port.id) {
                    svc_ports.push(svc_port);
                }
            }
        }

        for svc_port in svc_ports {
            let detected = features::for_service_port(svc_port)
                .into_iter()
                .collect::<BTreeSet<_>>();
            increment(&mut usage.service_ports, detected);
        }

        tracing::debug!(
            ingresses = states.len(),
            service_ports = seen.len(),
            "Computed ingress usage metrics"
        );
        usage
    }

    /// Sums NEG usage across all services.
    pub fn compute_neg_metrics(&self) -> FeatureCounts<NegFeature> {
        let states = self
            .neg_services
            .read()
            .values()
            .copied()
            .collect::<Vec<_>>();

        let mut counts = zeroed(NegFeature::ALL);
        for state in &states {
            add(&mut counts, NegFeature::StandaloneNeg, state.standalone_neg);
            add(&mut counts, NegFeature::IngressNeg, state.ingress_neg);
            add(&mut counts, NegFeature::AsmNeg, state.asm_neg);
            add(&mut counts, NegFeature::Neg, state.total());
        }

        tracing::debug!(services = states.len(), "Computed NEG usage metrics");
        counts
    }
}

impl IngressMetricsCollector for ControllerMetrics {
    fn set_ingress(&self, key: String, state: IngressState) {
        tracing::trace!(ingress = %key, "Setting ingress state");
        self.ingresses.write().insert(key, Arc::new(state));
    }

    fn delete_ingress(&self, key: &str) {
        tracing::trace!(ingress = %key, "Deleting ingress state");
        self.ingresses.write().remove(key);
    }
}

impl NegMetricsCollector for ControllerMetrics {
    fn set_neg_service(&self, key: String, state: NegServiceState) {
        tracing::trace!(service = %key, ?state, "Setting NEG state");
        self.neg_services.write().insert(key, state);
    }

    fn delete_neg_service(&self, key: &str) {
        tracing::trace!(service = %key, "Deleting NEG state");
        self.neg_services.write().remove(key);
    }
}

// === impl IngressUsage ===

impl Default for IngressUsage {
    fn default() -> Self {
        Self {
            ingresses: zeroed(FrontendFeature::ALL),
            ingress_backends: zeroed(BackendFeature::INGRESS),
            service_ports: zeroed(BackendFeature::ALL),
        }
    }
}

fn increment<F: Ord>(counts: &mut FeatureCounts<F>, features: impl IntoIterator<Item = F>) {
    for feature in features {
        add(counts, feature, 1);
    }
}

fn add<F: Ord>(counts: &mut FeatureCounts<F>, feature: F, n: usize) {
    let count = counts.entry(feature).or_default();
    *count = count.saturating_add(n);
}

fn zeroed<F: Copy + Ord>(all: &[F]) -> FeatureCounts<F> {
    all.iter().map(|f| (*f, 0)).collect()
}
