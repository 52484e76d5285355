/// Generate a router async method that walks connectors exposing `accessor`
/// and calls a single-provider method on each until one succeeds.
///
/// Notes on `not_found` label:
/// - Pass a noun only (e.g., "decision", "stock").
/// - For symbol-keyed methods the final error reads "{label} for {SYMBOL}".
/// - Do not include the word "for" in the label.
macro_rules! dalal_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident(symbol) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        not_found: $not_found:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::router", skip(self)))]
        ///
        /// # Errors
        /// Returns `InvalidArg` for a blank symbol, otherwise an error if no
        /// connector succeeds or none support the capability.
        pub async fn $name(&self, symbol: &str) -> Result<$ret, dalal_core::DalalError> {
            let symbol = $crate::router::util::normalize_symbol(symbol)?;
            let what = format!("{} for {}", $not_found, symbol);
            self.fetch_single($capability, what, move |c| {
                c.$accessor()?;
                let symbol = symbol.clone();
                Some(async move {
                    match c.$accessor() {
                        Some(p) => p.$call_name(&symbol).await,
                        None => Err(dalal_core::DalalError::connector(
                            c.name(),
                            format!("missing {} capability during call", $capability),
                        )),
                    }
                })
            })
            .await
        }
    };
    (
        $(#[$meta:meta])*
        method: $name:ident() -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        not_found: $not_found:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "tracing", tracing::instrument(target = "dalal::router", skip(self)))]
        ///
        /// # Errors
        /// Returns an error if no connector succeeds or none support the capability.
        pub async fn $name(&self) -> Result<$ret, dalal_core::DalalError> {
            self.fetch_single($capability, $not_found.to_string(), move |c| {
                c.$accessor()?;
                Some(async move {
                    match c.$accessor() {
                        Some(p) => p.$call_name().await,
                        None => Err(dalal_core::DalalError::connector(
                            c.name(),
                            format!("missing {} capability during call", $capability),
                        )),
                    }
                })
            })
            .await
        }
    };
}

pub(crate) use dalal_router_method;
