//! Frontend assembly over a fixed label namespace.
//!
//! [`Extractor`] compiles the error page and rate set patterns once and applies them to any
//! number of label sets, reporting problems to its diagnostics handle.
use lbx_model::{ErrorPages, FrontendConfig, Labels, RateLimit};
use tracing::{debug, instrument};

use crate::{
    accessor::LabelReader,
    diagnostics::{DiagnosticsHandle, tracing_diagnostics},
    error::CoreResult,
    extract::{parse_error_pages, parse_rate_sets},
    matcher::KeyPattern,
    namespace::LabelNamespace,
};

/// Prefix plus the pattern derived from it.
#[derive(Debug, Clone)]
struct Scope {
    prefix: String,
    pattern: KeyPattern,
}

impl Scope {
    fn new(prefix: String) -> CoreResult<Self> {
        let pattern = KeyPattern::for_prefix(&prefix)?;
        Ok(Self { prefix, pattern })
    }
}

/// Decodes grouped frontend configuration from label sets.
///
/// Holds no per-call state; a single instance can be shared between threads.
#[derive(Clone)]
pub struct Extractor {
    namespace: LabelNamespace,
    error_pages: Scope,
    rate_sets: Scope,
    extractor_func_key: String,
    diagnostics: DiagnosticsHandle,
}

impl Extractor {
    /// Build an extractor for `namespace`, reporting to `diagnostics`.
    pub fn new(namespace: LabelNamespace, diagnostics: DiagnosticsHandle) -> CoreResult<Self> {
        namespace.validate()?;

        Ok(Self {
            error_pages: Scope::new(namespace.error_page_prefix())?,
            rate_sets: Scope::new(namespace.rate_set_prefix())?,
            extractor_func_key: namespace.rate_limit_extractor_func_key(),
            namespace,
            diagnostics,
        })
    }

    /// Default namespace, diagnostics logged through `tracing`.
    pub fn with_defaults() -> CoreResult<Self> {
        Self::new(LabelNamespace::default(), tracing_diagnostics())
    }

    pub fn namespace(&self) -> &LabelNamespace {
        &self.namespace
    }

    /// Accessor view over `labels` sharing this extractor's diagnostics.
    pub fn reader<'a>(&'a self, labels: &'a Labels) -> LabelReader<'a> {
        LabelReader::new(labels, self.diagnostics.as_ref())
    }

    /// Named error pages, `None` if no error page label was recognized.
    pub fn error_pages(&self, labels: &Labels) -> Option<ErrorPages> {
        parse_error_pages(
            labels,
            &self.error_pages.prefix,
            &self.error_pages.pattern,
            self.diagnostics.as_ref(),
        )
    }

    /// Rate limit configuration.
    ///
    /// `None` unless the extractor function label is set, whatever rate set labels exist.
    pub fn rate_limit(&self, labels: &Labels) -> Option<RateLimit> {
        let extractor_func = self.reader(labels).string(&self.extractor_func_key, "");
        if extractor_func.is_empty() {
            debug!(
                key = %self.extractor_func_key,
                "no extractor function, rate limit skipped"
            );
            return None;
        }

        let rate_set = parse_rate_sets(
            labels,
            &self.rate_sets.prefix,
            &self.rate_sets.pattern,
            self.diagnostics.as_ref(),
        );

        Some(RateLimit {
            extractor_func,
            rate_set,
        })
    }

    /// Every grouped frontend feature found in `labels`.
    #[instrument(level = "debug", skip_all, fields(namespace = %self.namespace.root(), labels = labels.len()))]
    pub fn frontend(&self, labels: &Labels) -> FrontendConfig {
        FrontendConfig {
            error_pages: self.error_pages(labels),
            rate_limit: self.rate_limit(labels),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use lbx_model::{ErrorPage, Rate};

    use super::*;
    use crate::{
        diagnostics::{CollectingDiagnostics, Diagnostic, noop_diagnostics},
        error::CoreError,
    };

    fn labels(pairs: &[(&str, &str)]) -> Labels {
        pairs.iter().copied().collect()
    }

    fn collecting(ns: LabelNamespace) -> (Extractor, Arc<CollectingDiagnostics>) {
        let sink = Arc::new(CollectingDiagnostics::new());
        let extractor = Extractor::new(ns, sink.clone()).unwrap();
        (extractor, sink)
    }

    #[test]
    fn rejects_invalid_namespace() {
        let res = Extractor::new(LabelNamespace::new("bad ns"), noop_diagnostics());
        assert!(matches!(res, Err(CoreError::InvalidNamespace(_))));
    }

    #[test]
    fn error_pages_scenario() {
        let (ex, sink) = collecting(LabelNamespace::default());
        let l = labels(&[
            ("traefik.frontend.errors.404.status", "404"),
            ("traefik.frontend.errors.404.backend", "b1"),
            ("traefik.frontend.errors.500.status", "500,502"),
            ("traefik.frontend.rule", "Host:example.com"),
        ]);

        let pages = ex.error_pages(&l).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages["404"].status, vec!["404"]);
        assert_eq!(pages["404"].backend, "b1");
        assert_eq!(pages["500"].status, vec!["500", "502"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn rate_limit_requires_extractor_func() {
        let (ex, sink) = collecting(LabelNamespace::default());
        let l = labels(&[
            ("traefik.frontend.rateLimit.rateSet.foo.period", "6"),
            ("traefik.frontend.rateLimit.rateSet.foo.average", "12"),
            ("traefik.frontend.rateLimit.rateSet.foo.burst", "18"),
            ("traefik.frontend.rateLimit.rateSet.broken", "x"),
        ]);

        assert!(ex.rate_limit(&l).is_none());

        let mut with_empty = l.clone();
        with_empty.insert("traefik.frontend.rateLimit.extractorFunc", "");
        assert!(ex.rate_limit(&with_empty).is_none());

        // Grouped parsing never ran, so the broken key was not reported.
        assert!(sink.is_empty());
    }

    #[test]
    fn rate_limit_with_extractor_func() {
        let (ex, sink) = collecting(LabelNamespace::default());
        let l = labels(&[
            ("traefik.frontend.rateLimit.extractorFunc", "client.ip"),
            ("traefik.frontend.rateLimit.rateSet.foo.period", "6"),
            ("traefik.frontend.rateLimit.rateSet.foo.average", "12"),
            ("traefik.frontend.rateLimit.rateSet.foo.burst", "18"),
        ]);

        let limit = ex.rate_limit(&l).unwrap();
        assert_eq!(limit.extractor_func, "client.ip");
        assert_eq!(
            limit.rate_set.unwrap()["foo"],
            Rate {
                period: Duration::from_secs(6),
                average: 12,
                burst: 18,
            }
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn rate_limit_without_rate_sets_keeps_extractor_func() {
        let (ex, _) = collecting(LabelNamespace::default());
        let l = labels(&[("traefik.frontend.rateLimit.extractorFunc", "request.host")]);

        let limit = ex.rate_limit(&l).unwrap();
        assert_eq!(limit.extractor_func, "request.host");
        assert!(limit.rate_set.is_none());
    }

    #[test]
    fn segment_only_sees_its_own_labels() {
        let (ex, sink) = collecting(LabelNamespace::default().with_segment("api"));
        let l = labels(&[
            ("traefik.frontend.errors.global.status", "500"),
            ("traefik.api.frontend.errors.mine.status", "503"),
            ("traefik.api.frontend.rateLimit.extractorFunc", "client.ip"),
            ("traefik.api.frontend.rateLimit.rateSet.r.average", "5"),
        ]);

        let cfg = ex.frontend(&l);
        let pages = cfg.error_pages.unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages["mine"],
            ErrorPage {
                status: vec!["503".into()],
                ..Default::default()
            }
        );
        assert_eq!(cfg.rate_limit.unwrap().rate_set.unwrap()["r"].average, 5);
        assert!(sink.is_empty());
    }

    #[test]
    fn frontend_is_empty_without_grouped_labels() {
        let (ex, _) = collecting(LabelNamespace::default());
        let l = labels(&[("traefik.enable", "true"), ("traefik.port", "80")]);

        assert!(ex.frontend(&l).is_empty());
    }

    #[test]
    fn diagnostics_flow_to_the_injected_sink() {
        let (ex, sink) = collecting(LabelNamespace::default());
        let l = labels(&[
            ("traefik.frontend.errors.foo", "x"),
            ("traefik.frontend.rateLimit.extractorFunc", "client.ip"),
            ("traefik.frontend.rateLimit.rateSet.foo.period", "soon"),
        ]);

        let cfg = ex.frontend(&l);
        assert!(cfg.error_pages.is_none());
        assert_eq!(
            cfg.rate_limit.unwrap().rate_set.unwrap()["foo"],
            Rate::default()
        );

        let diags = sink.take();
        assert_eq!(diags.len(), 2);
        assert!(matches!(&diags[0], Diagnostic::MalformedKey { .. }));
        assert!(matches!(&diags[1], Diagnostic::DecodeFailed { value, .. } if value == "soon"));
    }

    #[test]
    fn custom_namespace() {
        let (ex, _) = collecting(LabelNamespace::new("com.example"));
        let l = labels(&[
            ("com.example.frontend.errors.p.query", "/{status}"),
            ("traefik.frontend.errors.q.query", "/ignored"),
        ]);

        let pages = ex.error_pages(&l).unwrap();
        assert_eq!(pages.keys().collect::<Vec<_>>(), vec!["p"]);
    }

    #[test]
    fn extractor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Extractor>();
    }
}
