//! Output Rendering
//!
//! Renders results as human-readable text or single-line JSON.

use serde_json::json;

use crate::config::OutputFormat;
use crate::domain::assets::PlatformRegistry;
use crate::domain::value_objects::PlatformConfig;

/// Render a resolved platform
pub fn render_platform(
    config: &PlatformConfig,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "platform: {}\n{}: {}\n",
            config.platform_type(),
            config.parameter_name(),
            config.parameter()
        )),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(config)?)),
    }
}

/// Render the supported platforms with the parameter each asks for
pub fn render_platform_list(registry: &PlatformRegistry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for flow in registry.flows() {
                out.push_str(&format!(
                    "{:<8} {:<7} {}\n",
                    flow.platform_type(),
                    flow.parameter_name(),
                    flow.env_var()
                ));
            }
            out
        }
        OutputFormat::Json => {
            let entries: Vec<_> = registry
                .flows()
                .map(|flow| {
                    json!({
                        "platform": flow.platform_type(),
                        "parameter": flow.parameter_name(),
                        "env_var": flow.env_var(),
                    })
                })
                .collect();
            format!("{}\n", serde_json::Value::Array(entries))
        }
    }
}
