//! TypeScript type generation module.
//!
//! Exports TypeScript definitions for the request and response types of the
//! API so front-end clients stay in step with the Rust structs.

#[cfg(test)]
mod tests {
    use std::{env, path::Path};

    use ts_rs::TS;

    #[test]
    fn generate_typescript_types() {
        // PRODUCTS_TS_OUTPUT_DIR wins; otherwise write next to the workspace.
        let output_dir_str = env::var("PRODUCTS_TS_OUTPUT_DIR")
            .unwrap_or_else(|_| "../ts-bindings".to_string());
        let output_dir = Path::new(&output_dir_str);

        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir).expect("Failed to create output directory");
        }

        // Remove stale definitions so renamed or deleted types do not linger
        for entry in std::fs::read_dir(output_dir).expect("Failed to read output directory") {
            let path = entry.expect("Failed to read directory entry").path();
            if path.extension().and_then(|s| s.to_str()) == Some("ts") {
                std::fs::remove_file(&path)
                    .unwrap_or_else(|e| panic!("Failed to remove {:?}: {}", path, e));
            }
        }

        unsafe {
            env::set_var("TS_RS_EXPORT_DIR", output_dir);
        }

        use crate::api::{ErrorResponse, status::HealthStatus};
        use crate::models::*;

        Material::export().expect("Failed to export Material type");
        MaterialInput::export().expect("Failed to export MaterialInput type");

        Offer::export().expect("Failed to export Offer type");
        OfferInput::export().expect("Failed to export OfferInput type");

        OfferMaterial::export().expect("Failed to export OfferMaterial type");
        OfferMaterialInput::export().expect("Failed to export OfferMaterialInput type");

        ErrorResponse::export().expect("Failed to export ErrorResponse type");
        HealthStatus::export().expect("Failed to export HealthStatus type");

        println!("TypeScript types generated successfully in {:?}", output_dir);
    }
}
