use crate::domain::value::MethodName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Selects between production endpoints and their non-charging test twins.
pub enum OperatingMode {
    #[default]
    Live,
    Test,
}

impl OperatingMode {
    pub fn is_test(self) -> bool {
        self == Self::Test
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Method path of an API operation, possibly depending on [`OperatingMode`].
pub enum MethodPath {
    /// Same path in both modes.
    Fixed(&'static str),
    /// Separate live and test paths, e.g. `sms/send` and `sms/testsend`.
    ModeDependent {
        live: &'static str,
        test: &'static str,
    },
}

impl MethodPath {
    pub const SMS_SEND: Self = Self::ModeDependent {
        live: "sms/send",
        test: "sms/testsend",
    };
    pub const SMS_STATUS: Self = Self::ModeDependent {
        live: "sms/status",
        test: "sms/teststatus",
    };
    pub const SMS_LIST: Self = Self::ModeDependent {
        live: "sms/list",
        test: "sms/testlist",
    };

    /// Pick the path to call under `mode`.
    pub fn resolve(self, mode: OperatingMode) -> MethodName {
        let path = match (self, mode) {
            (Self::Fixed(path), _) => path,
            (Self::ModeDependent { live, .. }, OperatingMode::Live) => live,
            (Self::ModeDependent { test, .. }, OperatingMode::Test) => test,
        };
        MethodName::from_static(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_mode_paths_follow_mode() {
        assert_eq!(
            MethodPath::SMS_SEND.resolve(OperatingMode::Live).as_str(),
            "sms/send"
        );
        assert_eq!(
            MethodPath::SMS_SEND.resolve(OperatingMode::Test).as_str(),
            "sms/testsend"
        );
        assert_eq!(
            MethodPath::SMS_STATUS.resolve(OperatingMode::Test).as_str(),
            "sms/teststatus"
        );
        assert_eq!(
            MethodPath::SMS_LIST.resolve(OperatingMode::Test).as_str(),
            "sms/testlist"
        );
    }

    #[test]
    fn fixed_paths_ignore_mode() {
        let path = MethodPath::Fixed("balance");
        assert_eq!(path.resolve(OperatingMode::Live).as_str(), "balance");
        assert_eq!(path.resolve(OperatingMode::Test).as_str(), "balance");
    }

    #[test]
    fn default_mode_is_live() {
        assert_eq!(OperatingMode::default(), OperatingMode::Live);
        assert!(!OperatingMode::default().is_test());
    }
}
