
use ingress_metrics_core::{IngressState, ServicePort, ServicePortId};
use ingress_metrics_k8s_api::{
    self as k8s, annotations, backend_config, BackendConfig, BackendConfigSpec,
};
use std::num::NonZeroU16;

const NS: &str = "default";
const TTL: i64 = 10;

fn mk_id(name: &str, port: u16) -> ServicePortId {
    ServicePortId::new(NS, name, NonZeroU16::new(port).expect("port must be non-zero"))
}

fn mk_backend(name: &str, port: u16) -> k8s::IngressBackend {
    k8s::IngressBackend {
        service: Some(k8s::IngressServiceBackend {
            name: name.to_string(),
            port: Some(k8s::ServiceBackendPort {
                number: Some(port.into()),
                name: None,
            }),
        }),
        ..Default::default()
    }
}

#[derive(Default)]
struct IngressBuilder {
    name: String,
    annotations: Vec<(&'static str, &'static str)>,
    default_backend: Option<(&'static str, u16)>,
    rules: Vec<(&'static str, Vec<(&'static str, &'static str, u16)>)>,
    tls: Vec<(Vec<&'static str>, &'static str)>,
}

impl IngressBuilder {
    fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn annotation(mut self, key: &'static str, value: &'static str) -> Self {
        self.annotations.push((key, value));
        self
    }

    fn default_backend(mut self, svc: &'static str, port: u16) -> Self {
        self.default_backend = Some((svc, port));
        self
    }

    fn rule(mut self, host: &'static str, paths: Vec<(&'static str, &'static str, u16)>) -> Self {
        self.rules.push((host, paths));
        self
    }

    fn tls(mut self, hosts: Vec<&'static str>, secret: &'static str) -> Self {
        self.tls.push((hosts, secret));
        self
    }

    fn build(self) -> k8s::Ingress {
        let rules = self
            .rules
            .into_iter()
            .map(|(host, paths)| k8s::IngressRule {
                host: Some(host.to_string()),
                http: (!paths.is_empty()).then(|| k8s::HTTPIngressRuleValue {
                    paths: paths
                        .into_iter()
                        .map(|(path, svc, port)| k8s::HTTPIngressPath {
                            path: Some(path.to_string()),
                            path_type: "ImplementationSpecific".to_string(),
                            backend: mk_backend(svc, port),
                        })
                        .collect(),
                }),
            })
            .collect::<Vec<_>>();
        let tls = self
            .tls
            .into_iter()
            .map(|(hosts, secret)| k8s::IngressTLS {
                hosts: Some(hosts.into_iter().map(ToString::to_string).collect()),
                secret_name: Some(secret.to_string()),
            })
            .collect::<Vec<_>>();

        k8s::Ingress {
            metadata: k8s::ObjectMeta {
                namespace: Some(NS.to_string()),
                name: Some(self.name),
                annotations: (!self.annotations.is_empty()).then(|| {
                    self.annotations
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect()
                }),
                ..Default::default()
            },
            spec: Some(k8s::IngressSpec {
                default_backend: self.default_backend.map(|(svc, port)| mk_backend(svc, port)),
                rules: (!rules.is_empty()).then_some(rules),
                tls: (!tls.is_empty()).then_some(tls),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// The service ports shared by the test ingresses.
///
/// The first and third ports share an id but were resolved with different
/// settings.
fn svc_ports() -> [ServicePort; 4] {
    [
        ServicePort {
            id: mk_id("dummy-service", 80),
            backend_config: Some(BackendConfig {
                spec: BackendConfigSpec {
                    cdn: Some(backend_config::CdnConfig {
                        enabled: true,
                        cache_policy: Some(Default::default()),
                    }),
                    session_affinity: Some(backend_config::SessionAffinityConfig {
                        affinity_type: Some(backend_config::AFFINITY_GENERATED_COOKIE.to_string()),
                        affinity_cookie_ttl_sec: Some(TTL),
                    }),
                    security_policy: Some(backend_config::SecurityPolicyConfig {
                        name: "security-policy-1".to_string(),
                    }),
                    connection_draining: Some(backend_config::ConnectionDrainingConfig {
                        draining_timeout_sec: TTL,
                    }),
                    ..Default::default()
                },
            }),
            ..Default::default()
        },
        ServicePort {
            id: mk_id("foo-service", 80),
            neg_enabled: true,
            backend_config: Some(BackendConfig {
                spec: BackendConfigSpec {
                    iap: Some(backend_config::IapConfig {
                        enabled: true,
                        ..Default::default()
                    }),
                    session_affinity: Some(backend_config::SessionAffinityConfig {
                        affinity_type: Some(backend_config::AFFINITY_CLIENT_IP.to_string()),
                        affinity_cookie_ttl_sec: Some(TTL),
                    }),
                    timeout_sec: Some(TTL),
                    custom_request_headers: Some(backend_config::CustomRequestHeadersConfig {
                        headers: vec![],
                    }),
                    ..Default::default()
                },
            }),
            ..Default::default()
        },
        // NEG default backend.
        ServicePort {
            id: mk_id("dummy-service", 80),
            neg_enabled: true,
            l7_ilb_enabled: true,
            backend_config: None,
        },
        ServicePort {
            id: mk_id("bar-service", 5000),
            neg_enabled: true,
            l7_ilb_enabled: true,
            backend_config: Some(BackendConfig {
                spec: BackendConfigSpec {
                    iap: Some(backend_config::IapConfig {
                        enabled: true,
                        ..Default::default()
                    }),
                    session_affinity: Some(backend_config::SessionAffinityConfig {
                        affinity_type: Some(backend_config::AFFINITY_GENERATED_COOKIE.to_string()),
                        affinity_cookie_ttl_sec: Some(TTL),
                    }),
                    connection_draining: Some(backend_config::ConnectionDrainingConfig {
                        draining_timeout_sec: TTL,
                    }),
                    ..Default::default()
                },
            }),
        },
    ]
}

/// Test ingresses, indexed by the number in their name.
fn ingress_states() -> Vec<IngressState> {
    let [sp0, sp1, sp2, sp3] = svc_ports();
    let foo_rule = || vec![("/foo", "foo-service", 80)];

    vec![
        // Empty spec.
        IngressState::new(IngressBuilder::new("ingress0").build(), []),
        // HTTP disabled.
        IngressState::new(
            IngressBuilder::new("ingress1")
                .annotation(annotations::ALLOW_HTTP, "false")
                .build(),
            [],
        ),
        // Default backend.
        IngressState::new(
            IngressBuilder::new("ingress2")
                .default_backend("dummy-service", 80)
                .build(),
            [sp0.clone()],
        ),
        // Host rule only.
        IngressState::new(
            IngressBuilder::new("ingress3")
                .rule("foo.bar", vec![])
                .build(),
            [],
        ),
        // Host and path rules.
        IngressState::new(
            IngressBuilder::new("ingress4")
                .rule("foo.bar", foo_rule())
                .build(),
            [sp1.clone()],
        ),
        // Default backend and host rule.
        IngressState::new(
            IngressBuilder::new("ingress5")
                .default_backend("dummy-service", 80)
                .rule("foo.bar", foo_rule())
                .build(),
            [sp0.clone(), sp1.clone()],
        ),
        // TLS termination with pre-shared certs.
        IngressState::new(
            IngressBuilder::new("ingress6")
                .annotation(annotations::PRE_SHARED_CERT, "pre-shared-cert1,pre-shared-cert2")
                .default_backend("dummy-service", 80)
                .build(),
            [sp0.clone()],
        ),
        // TLS termination with managed certs.
        IngressState::new(
            IngressBuilder::new("ingress7")
                .annotation(annotations::MANAGED_CERTIFICATES, "managed-cert1,managed-cert2")
                .default_backend("dummy-service", 80)
                .build(),
            [sp0.clone()],
        ),
        // TLS termination with pre-shared and managed certs.
        IngressState::new(
            IngressBuilder::new("ingress8")
                .annotation(annotations::PRE_SHARED_CERT, "pre-shared-cert1,pre-shared-cert2")
                .annotation(annotations::MANAGED_CERTIFICATES, "managed-cert1,managed-cert2")
                .default_backend("dummy-service", 80)
                .build(),
            [sp0.clone()],
        ),
        // TLS termination with pre-shared and secret based certs.
        IngressState::new(
            IngressBuilder::new("ingress9")
                .annotation(annotations::PRE_SHARED_CERT, "pre-shared-cert1,pre-shared-cert2")
                .rule("foo.bar", foo_rule())
                .tls(vec!["foo.bar"], "secret-1")
                .build(),
            [sp1],
        ),
        // Global static IP.
        IngressState::new(
            IngressBuilder::new("ingress10")
                .annotation(annotations::PRE_SHARED_CERT, "pre-shared-cert1,pre-shared-cert2")
                .annotation(annotations::STATIC_IP, "10.0.1.2")
                .default_backend("dummy-service", 80)
                .build(),
            [sp0],
        ),
        // Default backend and host rule for an internal load-balancer.
        IngressState::new(
            IngressBuilder::new("ingress11")
                .annotation(annotations::INGRESS_CLASS, annotations::INTERNAL_INGRESS_CLASS)
                .default_backend("dummy-service", 80)
                .rule("bar", vec![("/bar", "bar-service", 5000)])
                .build(),
            [sp2, sp3],
        ),
    ]
}

fn ingress_key(state: &IngressState) -> String {
    use k8s::ResourceExt;
    format!("{}/{}", NS, state.ingress.name_any())
}

fn trace_init() -> tracing::subscriber::DefaultGuard {
    tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .finish(),
    )
}
