use lbx_model::{ErrorPage, ErrorPageField, ErrorPages, Labels, RecordKind};

use crate::{
    decode::split_and_trim, diagnostics::DiagnosticsSink, error::DecodeError,
    extract::{GroupRecord, extract_groups},
    matcher::KeyPattern,
};

impl GroupRecord for ErrorPage {
    type Field = ErrorPageField;
    const KIND: RecordKind = RecordKind::ErrorPage;

    fn assign(&mut self, field: ErrorPageField, raw: &str) -> Result<(), DecodeError> {
        match field {
            ErrorPageField::Status => self.status = split_and_trim(raw, ','),
            ErrorPageField::Query => self.query = raw.to_string(),
            ErrorPageField::Backend => self.backend = raw.to_string(),
        }
        Ok(())
    }
}

/// Error pages under `prefix`, keyed by page name.
pub fn parse_error_pages(
    labels: &Labels,
    prefix: &str,
    pattern: &KeyPattern,
    sink: &dyn DiagnosticsSink,
) -> Option<ErrorPages> {
    extract_groups::<ErrorPage>(labels, prefix, pattern, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingDiagnostics, Diagnostic};

    const PREFIX: &str = "traefik.frontend.errors.";

    fn parse(pairs: &[(&str, &str)]) -> (Option<ErrorPages>, Vec<Diagnostic>) {
        let sink = CollectingDiagnostics::new();
        let labels: Labels = pairs.iter().copied().collect();
        let pages = parse_error_pages(
            &labels,
            PREFIX,
            &KeyPattern::for_prefix(PREFIX).unwrap(),
            &sink,
        );
        (pages, sink.take())
    }

    #[test]
    fn groups_fields_by_page_name() {
        let (pages, diags) = parse(&[
            ("traefik.frontend.errors.404.status", "404"),
            ("traefik.frontend.errors.404.backend", "b1"),
            ("traefik.frontend.errors.500.status", "500,502"),
        ]);
        let pages = pages.unwrap();

        assert!(diags.is_empty());
        assert_eq!(pages.len(), 2);
        assert_eq!(
            pages["404"],
            ErrorPage {
                status: vec!["404".into()],
                backend: "b1".into(),
                query: String::new(),
            }
        );
        assert_eq!(pages["500"].status, vec!["500", "502"]);
        assert!(pages["500"].backend.is_empty());
    }

    #[test]
    fn status_list_is_trimmed_and_ordered() {
        let (pages, _) = parse(&[("traefik.frontend.errors.x.status", "500,502, 503")]);
        assert_eq!(pages.unwrap()["x"].status, vec!["500", "502", "503"]);
    }

    #[test]
    fn query_and_backend_are_verbatim() {
        let (pages, _) = parse(&[
            ("traefik.frontend.errors.foo.query", " /{status}.html "),
            ("traefik.frontend.errors.foo.backend", "foobar"),
        ]);
        let page = &pages.unwrap()["foo"];
        assert_eq!(page.query, " /{status}.html ");
        assert_eq!(page.backend, "foobar");
    }

    #[test]
    fn unknown_field_creates_no_group_and_keeps_going() {
        let (pages, diags) = parse(&[
            ("traefik.frontend.errors.bad.color", "red"),
            ("traefik.frontend.errors.good.query", "/q"),
        ]);
        let pages = pages.unwrap();

        assert_eq!(pages.len(), 1);
        assert!(!pages.contains_key("bad"));
        assert_eq!(pages["good"].query, "/q");
        assert_eq!(
            diags,
            vec![Diagnostic::UnknownField {
                kind: RecordKind::ErrorPage,
                key: "traefik.frontend.errors.bad.color".into(),
            }]
        );
    }

    #[test]
    fn empty_value_still_creates_the_page() {
        let (pages, diags) = parse(&[("traefik.frontend.errors.foo.backend", "")]);
        assert_eq!(pages.unwrap()["foo"], ErrorPage::default());
        assert!(diags.is_empty());
    }
}
