//! Classifies ingresses and service ports into the features they use.
//!
//! Classification is pure: a feature is either detected and listed once, or
//! omitted. Features are listed in a stable order.

use ingress_metrics_core::{BackendFeature, FrontendFeature, ServicePort};
use ingress_metrics_k8s_api::{
    annotations,
    backend_config::{AFFINITY_CLIENT_IP, AFFINITY_GENERATED_COOKIE},
    Ingress, ResourceExt,
};

/// Returns the frontend features used by an ingress.
pub fn for_ingress(ingress: &Ingress) -> Vec<FrontendFeature> {
    let anns = ingress.annotations();
    let spec = ingress.spec.as_ref();
    let rules = spec.and_then(|s| s.rules.as_deref()).unwrap_or_default();

    let mut features = Features::new(FrontendFeature::Ingress);

    let internal = anns.get(annotations::INGRESS_CLASS).map(String::as_str)
        == Some(annotations::INTERNAL_INGRESS_CLASS)
        || spec.and_then(|s| s.ingress_class_name.as_deref())
            == Some(annotations::INTERNAL_INGRESS_CLASS);
    features.push(if internal {
        FrontendFeature::InternalIngress
    } else {
        FrontendFeature::ExternalIngress
    });

    if http_enabled(ingress) {
        features.push(FrontendFeature::HttpEnabled);
    }

    if rules
        .iter()
        .any(|r| r.host.as_deref().is_some_and(|h| !h.is_empty()))
    {
        features.push(FrontendFeature::HostBasedRouting);
    }
    if rules
        .iter()
        .any(|r| r.http.as_ref().is_some_and(|http| !http.paths.is_empty()))
    {
        features.push(FrontendFeature::PathBasedRouting);
    }

    let pre_shared = anns.contains_key(annotations::PRE_SHARED_CERT);
    let managed = anns.contains_key(annotations::MANAGED_CERTIFICATES);
    let secret_based = spec
        .and_then(|s| s.tls.as_deref())
        .unwrap_or_default()
        .iter()
        .any(|tls| tls.secret_name.as_deref().is_some_and(|n| !n.is_empty()));
    if pre_shared {
        features.push(FrontendFeature::PreSharedCertsForTls);
    }
    if managed {
        features.push(FrontendFeature::ManagedCertsForTls);
    }
    if secret_based {
        features.push(FrontendFeature::SecretBasedCertsForTls);
    }
    if pre_shared || managed || secret_based {
        features.push(FrontendFeature::TlsTermination);
    }

    // TODO: decide whether an internal ingress with a global static IP should
    // report staticGlobalIP; internal load-balancers only accept regional
    // addresses.
    if anns.contains_key(annotations::STATIC_IP) {
        features.push(FrontendFeature::StaticGlobalIp);
    }

    let features = features.into_vec();
    tracing::trace!(
        namespace = %ingress.namespace().unwrap_or_default(),
        name = %ingress.name_any(),
        ?features,
        "Classified ingress"
    );
    features
}

/// Returns the backend features used by a service port.
pub fn for_service_port(port: &ServicePort) -> Vec<BackendFeature> {
    let mut features = Features::new(BackendFeature::ServicePort);

    features.push(if port.l7_ilb_enabled {
        BackendFeature::InternalServicePort
    } else {
        BackendFeature::ExternalServicePort
    });

    if port.neg_enabled {
        features.push(BackendFeature::Neg);
    }

    if let Some(config) = port.backend_config.as_ref() {
        let spec = &config.spec;

        if spec.cdn.as_ref().is_some_and(|cdn| cdn.enabled) {
            features.push(BackendFeature::CloudCdn);
        }
        if spec.iap.as_ref().is_some_and(|iap| iap.enabled) {
            features.push(BackendFeature::CloudIap);
        }

        match spec
            .session_affinity
            .as_ref()
            .and_then(|sa| sa.affinity_type.as_deref())
        {
            Some(AFFINITY_GENERATED_COOKIE) => features.push(BackendFeature::CookieAffinity),
            Some(AFFINITY_CLIENT_IP) => features.push(BackendFeature::ClientIpAffinity),
            _ => {}
        }

        if spec
            .security_policy
            .as_ref()
            .is_some_and(|sp| !sp.name.is_empty())
        {
            features.push(BackendFeature::CloudArmor);
        }
        if spec.connection_draining.is_some() {
            features.push(BackendFeature::BackendConnectionDraining);
        }
        if spec.timeout_sec.is_some() {
            features.push(BackendFeature::BackendTimeout);
        }
        // An empty header list still counts as configured.
        if spec.custom_request_headers.is_some() {
            features.push(BackendFeature::CustomRequestHeaders);
        }
    }

    let features = features.into_vec();
    tracing::trace!(service_port = %port.id, ?features, "Classified service port");
    features
}

/// Whether the load-balancer serves plaintext HTTP.
///
/// Only a value that parses as false disables HTTP.
fn http_enabled(ingress: &Ingress) -> bool {
    let Some(value) = ingress.annotations().get(annotations::ALLOW_HTTP) else {
        return true;
    };
    match parse_bool(value) {
        Some(enabled) => enabled,
        None => {
            tracing::warn!(
                namespace = %ingress.namespace().unwrap_or_default(),
                name = %ingress.name_any(),
                annotation = annotations::ALLOW_HTTP,
                %value,
                "Could not parse annotation; assuming HTTP is enabled"
            );
            true
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// An insertion-ordered feature set.
struct Features<F>(Vec<F>);

impl<F: PartialEq> Features<F> {
    fn new(first: F) -> Self {
        Self(vec![first])
    }

    fn push(&mut self, feature: F) {
        if !self.0.contains(&feature) {
            self.0.push(feature);
        }
    }

    fn into_vec(self) -> Vec<F> {
        self.0
    }
}
