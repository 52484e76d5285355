use dalal_core::{Capability, DalalError};

/// Collapse a set of provider errors into a uniform `DalalError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<DalalError>,
    not_found_what: Option<String>,
) -> DalalError {
    if !attempted_any {
        return DalalError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, DalalError::ProviderTimeout { .. }))
    {
        return DalalError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, DalalError::NotFound { .. }))
    {
        return DalalError::not_found(what);
    }
    DalalError::AllProvidersFailed(errors)
}

/// Trim a symbol and reject blanks before it reaches any connector.
pub(crate) fn normalize_symbol(symbol: &str) -> Result<String, DalalError> {
    let s = symbol.trim();
    if s.is_empty() {
        return Err(DalalError::InvalidArg("symbol cannot be empty".into()));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_errors_all_timeouts() {
        let errors = vec![
            DalalError::provider_timeout("p1", "decision"),
            DalalError::provider_timeout("p2", "decision"),
        ];
        let e = collapse_errors(
            Capability::Decision,
            true,
            errors,
            Some("decision for IT_INFY".to_string()),
        );
        match e {
            DalalError::AllProvidersTimedOut { capability } => {
                assert_eq!(capability, Capability::Decision.to_string());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn collapse_errors_all_not_found() {
        let errors = vec![DalalError::not_found("x"), DalalError::not_found("y")];
        let e = collapse_errors(
            Capability::Stock,
            true,
            errors,
            Some("stock for IT_INFY".to_string()),
        );
        match e {
            DalalError::NotFound { what } => assert_eq!(what, "stock for IT_INFY"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn collapse_errors_unsupported_when_no_attempts() {
        let e = collapse_errors(Capability::Portfolio, false, vec![], None);
        match e {
            DalalError::Unsupported { capability } => {
                assert_eq!(capability, Capability::Portfolio.to_string());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn collapse_errors_mixed_maps_to_all_failed() {
        let errors = vec![
            DalalError::not_found("x"),
            DalalError::provider_timeout("p2", "stock"),
        ];
        let e = collapse_errors(
            Capability::Stock,
            true,
            errors.clone(),
            Some("stock for IT_INFY".to_string()),
        );
        match e {
            DalalError::AllProvidersFailed(es) => assert_eq!(es, errors),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn normalize_symbol_trims_and_rejects_blank() {
        assert_eq!(normalize_symbol("  IT_INFY ").as_deref(), Ok("IT_INFY"));
        assert!(matches!(
            normalize_symbol("   "),
            Err(DalalError::InvalidArg(_))
        ));
    }
}
