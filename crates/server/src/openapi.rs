// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Store Explorer API",
        version = "0.1.0",
        description = "Decodes on-chain store table schemas and records into typed JSON.",
        license(name = "GPL-3.0-or-later"),
        contact(url = "https://github.com/paritytech/store-explorer")
    ),
    servers(
        (url = "http://localhost:8080", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "version", description = "API version and description"),
        (name = "store", description = "Store table schema and record decoding"),
    ),
    paths(
        crate::handlers::health::get_health::get_health,
        crate::handlers::version::get_version::get_version,
        crate::handlers::openapi::get_openapi,
        crate::handlers::store::decode_schema::decode_schema,
        crate::handlers::store::decode_records::decode_records,
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{self, RouteRegistry};
    use std::collections::BTreeSet;

    /// Build the versioned route registry the way `create_app` does.
    fn build_full_registry() -> RouteRegistry {
        let registry = RouteRegistry::new();

        let _ = routes::health::routes(&registry);
        let _ = routes::version::routes(&registry);
        let _ = routes::openapi::routes(&registry);
        let _ = routes::store::routes(&registry);

        registry
    }

    /// Every registered route must be documented, and every documented path registered.
    #[test]
    fn openapi_paths_match_registered_routes() {
        let registry = build_full_registry();

        let registered: BTreeSet<String> = registry
            .routes()
            .into_iter()
            .map(|r| format!("{} {}", r.method.to_uppercase(), r.path))
            .collect();

        let spec = ApiDoc::openapi();
        let json_value = serde_json::to_value(&spec).expect("Failed to serialize OpenAPI spec");

        let mut openapi: BTreeSet<String> = BTreeSet::new();
        if let Some(paths) = json_value["paths"].as_object() {
            for (path, methods) in paths {
                if let Some(methods_obj) = methods.as_object() {
                    for method in methods_obj.keys() {
                        if matches!(method.as_str(), "get" | "post" | "put" | "delete" | "patch") {
                            openapi.insert(format!("{} {}", method.to_uppercase(), path));
                        }
                    }
                }
            }
        }

        let undocumented: Vec<&String> = registered.difference(&openapi).collect();
        let phantom: Vec<&String> = openapi.difference(&registered).collect();

        assert!(
            undocumented.is_empty() && phantom.is_empty(),
            "OpenAPI spec is out of sync with registered routes.\n  undocumented: {:?}\n  phantom: {:?}",
            undocumented,
            phantom
        );
    }
}
