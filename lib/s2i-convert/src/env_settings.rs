use localconfig::{ComponentConfig, EnvSettings};

/// Derives the env settings of a converted component.
///
/// The debug port is recorded when it is set, or when it equals `default_debug_port`. With a
/// default of `0` an unset port is therefore still written as `0`.
pub fn synthesize_env_settings<C: ComponentConfig + ?Sized>(
    config: &C,
    default_debug_port: u16,
) -> EnvSettings {
    let debug_port = config.debug_port();

    EnvSettings {
        name: config.name().to_string(),
        project: config.project().to_string(),
        app_name: config.application().to_string(),
        debug_port: (debug_port != 0 || debug_port == default_debug_port).then_some(debug_port),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::synthesize_env_settings;
    use crate::test_support::config_from;

    fn config_with_debug_port(port: Option<u16>) -> localconfig::LocalConfigInfo {
        let debug_port = port.map(|p| format!("  DebugPort: {p}\n")).unwrap_or_default();
        config_from(&format!(
            "kind: LocalConfig\napiversion: odo.dev/v1alpha1\nComponentSettings:\n  Name: nodejs-app\n  Project: myproject\n  Application: app\n{debug_port}"
        ))
    }

    #[test_case(None, 0, Some(0) ; "unset port with zero default is recorded")]
    #[test_case(Some(0), 0, Some(0) ; "zero port with zero default is recorded")]
    #[test_case(None, 5858, None ; "unset port with non zero default is absent")]
    #[test_case(Some(5858), 5858, Some(5858) ; "port equal to default")]
    #[test_case(Some(9292), 5858, Some(9292) ; "custom port")]
    fn debug_port_boundary(port: Option<u16>, default_debug_port: u16, expected: Option<u16>) {
        let settings = synthesize_env_settings(&config_with_debug_port(port), default_debug_port);

        assert_eq!(expected, settings.debug_port);
    }

    #[test]
    fn should_copy_identity_verbatim() {
        let settings = synthesize_env_settings(&config_with_debug_port(None), 5858);

        assert_eq!("nodejs-app", settings.name);
        assert_eq!("myproject", settings.project);
        assert_eq!("app", settings.app_name);
    }
}
