//! Platform asset - which platform to install on, and where
//!
//! Generation asks two questions in sequence: the platform type, then the
//! platform-specific parameter. Each platform's follow-up question lives in a
//! `PlatformFlow` registered by tag, so the dispatch never grows a match arm
//! per platform.
//!
//! State:
//! - `[0]` platform type
//! - `[1]` AWS: region code / libvirt: connection URI

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::State;
use crate::domain::ports::{Asset, Parents};
use crate::domain::services::{PromptResolver, UserProvided};
use crate::domain::value_objects::region::{default_region_option, region_options};
use crate::domain::value_objects::{
    PlatformConfig, PromptSpec, Region, AWS_PLATFORM_TYPE, LIBVIRT_PLATFORM_TYPE,
};
use crate::error::{InstallConfigError, InstallConfigResult};

/// Override for the platform question
pub const PLATFORM_ENV_VAR: &str = "OPENSHIFT_INSTALL_PLATFORM";
/// Override for the AWS region question
pub const AWS_REGION_ENV_VAR: &str = "OPENSHIFT_INSTALL_AWS_REGION";
/// Override for the libvirt URI question
pub const LIBVIRT_URI_ENV_VAR: &str = "OPENSHIFT_INSTALL_LIBVIRT_URI";

/// Default libvirt connection URI
pub const DEFAULT_LIBVIRT_URI: &str = "qemu+tcp://192.168.122.1/system";

/// Platform-specific follow-up questions
pub trait PlatformFlow: Send + Sync {
    /// Tag offered at the platform prompt and stored at state position 0
    fn platform_type(&self) -> &'static str;

    /// Name of the value this flow asks for
    fn parameter_name(&self) -> &'static str;

    /// Override variable for this flow's question
    fn env_var(&self) -> &'static str;

    fn resolve(&self, resolver: &PromptResolver) -> InstallConfigResult<PlatformConfig>;

    /// Rebuild this flow's config from a stored parameter
    fn from_parameter(&self, value: &str) -> InstallConfigResult<PlatformConfig> {
        Ok(PlatformConfig::Other {
            platform: self.platform_type().to_string(),
            parameter_name: self.parameter_name().to_string(),
            value: value.to_string(),
        })
    }
}

/// AWS: pick a region from the catalog, keep only its code
pub struct AwsFlow;

impl PlatformFlow for AwsFlow {
    fn platform_type(&self) -> &'static str {
        AWS_PLATFORM_TYPE
    }

    fn parameter_name(&self) -> &'static str {
        "region"
    }

    fn env_var(&self) -> &'static str {
        AWS_REGION_ENV_VAR
    }

    fn resolve(&self, resolver: &PromptResolver) -> InstallConfigResult<PlatformConfig> {
        let prompt = PromptSpec::select("Region", region_options())
            .with_help("The AWS region to be used for installation.")
            .with_default(default_region_option());

        let answer = UserProvided::new(prompt, AWS_REGION_ENV_VAR, resolver.clone()).value()?;
        self.from_parameter(&answer)
    }

    fn from_parameter(&self, value: &str) -> InstallConfigResult<PlatformConfig> {
        Ok(PlatformConfig::Aws {
            region: Region::parse(value)?,
        })
    }
}

/// Libvirt: free-text connection URI, used as typed
pub struct LibvirtFlow;

impl PlatformFlow for LibvirtFlow {
    fn platform_type(&self) -> &'static str {
        LIBVIRT_PLATFORM_TYPE
    }

    fn parameter_name(&self) -> &'static str {
        "uri"
    }

    fn env_var(&self) -> &'static str {
        LIBVIRT_URI_ENV_VAR
    }

    fn resolve(&self, resolver: &PromptResolver) -> InstallConfigResult<PlatformConfig> {
        let prompt = PromptSpec::input("URI")
            .with_help(
                "The libvirt connection URI to be used. \
                 This must be accessible from the running cluster.",
            )
            .with_default(DEFAULT_LIBVIRT_URI);

        let uri = UserProvided::new(prompt, LIBVIRT_URI_ENV_VAR, resolver.clone()).value()?;
        self.from_parameter(&uri)
    }

    fn from_parameter(&self, value: &str) -> InstallConfigResult<PlatformConfig> {
        Ok(PlatformConfig::Libvirt {
            uri: value.to_string(),
        })
    }
}

/// Supported platforms in prompt order
pub struct PlatformRegistry {
    flows: Vec<Box<dyn PlatformFlow>>,
}

impl PlatformRegistry {
    pub fn empty() -> Self {
        Self { flows: Vec::new() }
    }

    /// Add a flow; a flow with the same tag is replaced in place
    pub fn register(&mut self, flow: Box<dyn PlatformFlow>) {
        match self
            .flows
            .iter()
            .position(|f| f.platform_type() == flow.platform_type())
        {
            Some(idx) => self.flows[idx] = flow,
            None => self.flows.push(flow),
        }
    }

    pub fn get(&self, platform_type: &str) -> Option<&dyn PlatformFlow> {
        self.flows
            .iter()
            .find(|f| f.platform_type() == platform_type)
            .map(|f| f.as_ref())
    }

    pub fn platform_types(&self) -> Vec<&'static str> {
        self.flows.iter().map(|f| f.platform_type()).collect()
    }

    pub fn flows(&self) -> impl Iterator<Item = &dyn PlatformFlow> {
        self.flows.iter().map(|f| f.as_ref())
    }

    /// Read a Platform state back through the flow that produced it
    pub fn config_from_state(&self, state: &State) -> InstallConfigResult<PlatformConfig> {
        let (platform, parameter) = PlatformConfig::state_parts(state)?;
        self.get(platform)
            .ok_or_else(|| InstallConfigError::UnknownPlatform(platform.to_string()))?
            .from_parameter(parameter)
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(AwsFlow));
        registry.register(Box::new(LibvirtFlow));
        registry
    }
}

/// Queries the user for the platform on which to install the cluster
pub struct Platform {
    registry: PlatformRegistry,
    resolver: PromptResolver,
}

impl Platform {
    pub fn new(resolver: PromptResolver) -> Self {
        Self::with_registry(PlatformRegistry::default(), resolver)
    }

    pub fn with_registry(registry: PlatformRegistry, resolver: PromptResolver) -> Self {
        Self { registry, resolver }
    }

    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Run both questions and return the typed result
    pub fn resolve(&self) -> InstallConfigResult<PlatformConfig> {
        let platform = self.query_platform()?;

        let flow = self
            .registry
            .get(&platform)
            .ok_or_else(|| InstallConfigError::UnknownPlatform(platform.clone()))?;

        debug!(platform = %platform, "platform chosen");
        let config = flow.resolve(&self.resolver)?;
        if config.platform_type() != flow.platform_type() {
            return Err(InstallConfigError::MalformedState {
                asset: self.name().to_string(),
                message: format!(
                    "{} flow produced a {} config",
                    flow.platform_type(),
                    config.platform_type()
                ),
            });
        }
        Ok(config)
    }

    fn query_platform(&self) -> InstallConfigResult<String> {
        let prompt = PromptSpec::select("Platform", self.registry.platform_types());
        UserProvided::new(prompt, PLATFORM_ENV_VAR, self.resolver.clone()).value()
    }
}

impl Asset for Platform {
    fn name(&self) -> &str {
        "Platform"
    }

    fn dependencies(&self) -> Vec<Arc<dyn Asset>> {
        Vec::new()
    }

    fn generate(&self, _parents: &Parents) -> InstallConfigResult<State> {
        Ok(self.resolve()?.to_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{NoOverrides, OverrideSource, Prompter};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Answers prompts by message; unknown messages get the spec default.
    struct Scripted {
        answers: HashMap<&'static str, &'static str>,
        asked: Mutex<Vec<PromptSpec>>,
    }

    impl Scripted {
        fn new(answers: &[(&'static str, &'static str)]) -> Arc<Self> {
            Arc::new(Self {
                answers: answers.iter().copied().collect(),
                asked: Mutex::new(Vec::new()),
            })
        }
    }

    impl Prompter for Scripted {
        fn ask(&self, spec: &PromptSpec) -> InstallConfigResult<Option<String>> {
            self.asked.lock().unwrap().push(spec.clone());
            Ok(self
                .answers
                .get(spec.message())
                .map(|a| a.to_string())
                .or_else(|| spec.default_value().map(str::to_string)))
        }
    }

    fn overrides(pairs: &[(&str, &str)]) -> Arc<dyn OverrideSource> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Arc::new(move |name: &str| map.get(name).cloned())
    }

    fn platform(env: &[(&str, &str)], prompter: Arc<Scripted>) -> Platform {
        Platform::new(PromptResolver::new(overrides(env), prompter))
    }

    fn generate(platform: &Platform) -> InstallConfigResult<State> {
        platform.generate(&Parents::new())
    }

    #[test]
    fn every_platform_yields_two_contents_tagged_with_its_type() {
        for tag in PlatformRegistry::default().platform_types() {
            let p = platform(&[(PLATFORM_ENV_VAR, tag)], Scripted::new(&[]));
            let state = generate(&p).unwrap();
            assert_eq!(state.len(), 2, "platform {}", tag);
            assert_eq!(state.str_at(0), Some(tag));
        }
    }

    #[test]
    fn unknown_platform_override_fails() {
        let p = platform(&[(PLATFORM_ENV_VAR, "openstack")], Scripted::new(&[]));
        let err = generate(&p).unwrap_err();
        assert_eq!(err.to_string(), "unknown platform type \"openstack\"");
    }

    #[test]
    fn region_override_label_is_stripped() {
        let p = platform(
            &[
                (PLATFORM_ENV_VAR, "aws"),
                (AWS_REGION_ENV_VAR, "eu-west-1 (Ireland)"),
            ],
            Scripted::new(&[]),
        );
        assert_eq!(generate(&p).unwrap(), State::from_strings(["aws", "eu-west-1"]));
    }

    #[test]
    fn bare_region_override_is_unchanged() {
        let p = platform(
            &[(PLATFORM_ENV_VAR, "aws"), (AWS_REGION_ENV_VAR, "us-east-1")],
            Scripted::new(&[]),
        );
        assert_eq!(generate(&p).unwrap().str_at(1), Some("us-east-1"));
    }

    #[test]
    fn empty_region_answer_is_invalid() {
        let p = platform(&[(PLATFORM_ENV_VAR, "aws")], Scripted::new(&[("Region", " ")]));
        assert!(matches!(
            generate(&p),
            Err(InstallConfigError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn uri_override_is_verbatim() {
        let uri = "qemu+ssh://root@host/system?keyfile=/tmp/k (lab)";
        let p = platform(
            &[(PLATFORM_ENV_VAR, "libvirt"), (LIBVIRT_URI_ENV_VAR, uri)],
            Scripted::new(&[]),
        );
        assert_eq!(generate(&p).unwrap().str_at(1), Some(uri));
    }

    #[test]
    fn nothing_available_fails() {
        struct Absent;
        impl Prompter for Absent {
            fn ask(&self, _spec: &PromptSpec) -> InstallConfigResult<Option<String>> {
                Ok(None)
            }
        }

        let p = Platform::new(PromptResolver::new(Arc::new(NoOverrides), Arc::new(Absent)));
        assert!(matches!(
            generate(&p),
            Err(InstallConfigError::Unresolved { ref env_var, .. }) if env_var == PLATFORM_ENV_VAR
        ));
    }

    #[test]
    fn interactive_answers_flow_through_both_questions() {
        let prompter = Scripted::new(&[
            ("Platform", "aws"),
            ("Region", "ap-northeast-3 (Osaka-Local)"),
        ]);
        let p = platform(&[], prompter.clone());

        assert_eq!(
            generate(&p).unwrap(),
            State::from_strings(["aws", "ap-northeast-3"])
        );

        let asked = prompter.asked.lock().unwrap();
        assert_eq!(asked.len(), 2);
        assert_eq!(
            asked[0].options().map(|o| o.to_vec()),
            Some(vec!["aws".to_string(), "libvirt".to_string()])
        );
        assert_eq!(asked[1].default_value(), Some("us-east-1 (N. Virginia)"));
        assert_eq!(asked[1].options().map(|o| o.len()), Some(18));
    }

    #[test]
    fn libvirt_default_uri_when_prompt_accepts_default() {
        let p = platform(&[], Scripted::new(&[("Platform", "libvirt")]));
        assert_eq!(
            generate(&p).unwrap(),
            State::from_strings(["libvirt", DEFAULT_LIBVIRT_URI])
        );
    }

    #[test]
    fn platform_override_skips_platform_prompt() {
        let prompter = Scripted::new(&[]);
        let p = platform(&[(PLATFORM_ENV_VAR, "libvirt")], prompter.clone());
        generate(&p).unwrap();

        let asked = prompter.asked.lock().unwrap();
        assert_eq!(asked.len(), 1);
        assert_eq!(asked[0].message(), "URI");
    }

    /// Registered platform answering with a fixed endpoint
    struct Lab;

    impl PlatformFlow for Lab {
        fn platform_type(&self) -> &'static str {
            "lab"
        }
        fn parameter_name(&self) -> &'static str {
            "endpoint"
        }
        fn env_var(&self) -> &'static str {
            "LAB_ENDPOINT"
        }
        fn resolve(&self, _resolver: &PromptResolver) -> InstallConfigResult<PlatformConfig> {
            self.from_parameter("https://lab.local")
        }
    }

    fn with_lab() -> PlatformRegistry {
        let mut registry = PlatformRegistry::default();
        registry.register(Box::new(Lab));
        registry
    }

    #[test]
    fn registered_flow_is_offered_and_dispatched() {
        let registry = with_lab();
        assert_eq!(registry.platform_types(), vec!["aws", "libvirt", "lab"]);

        let resolver =
            PromptResolver::new(overrides(&[(PLATFORM_ENV_VAR, "lab")]), Scripted::new(&[]));
        let p = Platform::with_registry(registry, resolver);

        let state = generate(&p).unwrap();
        assert_eq!(state, State::from_strings(["lab", "https://lab.local"]));
        assert_eq!(
            p.registry().config_from_state(&state).unwrap().parameter_name(),
            "endpoint"
        );
    }

    #[test]
    fn flow_returning_another_platform_is_rejected() {
        struct Borrowed;
        impl PlatformFlow for Borrowed {
            fn platform_type(&self) -> &'static str {
                "borrowed"
            }
            fn parameter_name(&self) -> &'static str {
                "uri"
            }
            fn env_var(&self) -> &'static str {
                "BORROWED_URI"
            }
            fn resolve(&self, _resolver: &PromptResolver) -> InstallConfigResult<PlatformConfig> {
                Ok(PlatformConfig::Libvirt {
                    uri: "qemu:///borrowed".to_string(),
                })
            }
        }

        let mut registry = PlatformRegistry::default();
        registry.register(Box::new(Borrowed));
        let resolver = PromptResolver::new(
            overrides(&[(PLATFORM_ENV_VAR, "borrowed")]),
            Scripted::new(&[]),
        );
        let p = Platform::with_registry(registry, resolver);

        assert!(matches!(
            generate(&p),
            Err(InstallConfigError::MalformedState { .. })
        ));
    }

    #[test]
    fn config_from_state_uses_builtin_types() {
        let registry = PlatformRegistry::default();
        let config = registry
            .config_from_state(&State::from_strings(["aws", "eu-north-1"]))
            .unwrap();
        assert_eq!(
            config,
            PlatformConfig::Aws {
                region: Region::parse("eu-north-1").unwrap()
            }
        );

        let err = registry
            .config_from_state(&State::from_strings(["lab", "x"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown platform type \"lab\"");
    }

    /// Fails with an I/O error when asked the given question
    struct FailsOn(&'static str);

    impl Prompter for FailsOn {
        fn ask(&self, spec: &PromptSpec) -> InstallConfigResult<Option<String>> {
            if spec.message() == self.0 {
                let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
                return Err(err.into());
            }
            Ok(Some("aws".to_string()))
        }
    }

    #[test]
    fn prompter_failure_on_region_propagates() {
        let p = Platform::new(PromptResolver::new(
            Arc::new(NoOverrides),
            Arc::new(FailsOn("Region")),
        ));
        match generate(&p) {
            Err(InstallConfigError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn prompter_failure_on_platform_propagates() {
        let p = Platform::new(PromptResolver::new(
            Arc::new(NoOverrides),
            Arc::new(FailsOn("Platform")),
        ));
        assert!(matches!(generate(&p), Err(InstallConfigError::Io(_))));
    }

    #[test]
    fn register_replaces_same_tag() {
        let mut registry = PlatformRegistry::default();
        registry.register(Box::new(AwsFlow));
        assert_eq!(registry.platform_types(), vec!["aws", "libvirt"]);
    }

    #[test]
    fn platform_asset_has_no_dependencies() {
        let p = platform(&[], Scripted::new(&[]));
        assert_eq!(p.name(), "Platform");
        assert!(p.dependencies().is_empty());
    }
}
