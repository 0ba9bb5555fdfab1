/// Declares lazily initialised configuration statics. Each one is read from
/// the process environment first and falls back to the given default, which
/// is where build-time values (`option_env!`) are wired in since the browser
/// has no environment.
#[macro_export]
macro_rules! config_var {
    ($(
        $vis:vis $name:ident: $ty:ty = $default:expr;
    )*) => {$(
        $vis static $name: std::sync::LazyLock<$ty> = std::sync::LazyLock::new(|| {
            $crate::config::FromVar::from_var(stringify!($name)).unwrap_or_else(|e| {
                log::debug!("using default for '{}': {e}", stringify!($name));
                $default
            })
        });
    )*};
}

config_var! {
    pub API_ORIGIN: String = option_env!("API_ORIGIN").unwrap_or("http://localhost:3000").into();
    pub LOG_LEVEL: log::LevelFilter = option_env!("LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info);
}

pub trait FromVar: Sized {
    fn parse(var: String) -> Result<Self, String>;

    fn from_var(var: &str) -> Result<Self, String> {
        let var = std::env::var(var).map_err(|e| format!("{var} not set: {e}"))?;
        Self::parse(var)
    }
}

impl FromVar for String {
    fn parse(var: String) -> Result<Self, String> {
        Ok(var)
    }
}

macro_rules! derive_from_var {
    ($($ty:ty),*) => {
        $(
            impl FromVar for $ty {
                fn parse(var: String) -> Result<Self, String> {
                    var.parse().map_err(|e| format!("failed to parse {var}: {e}"))
                }
            }
        )*
    };
}

derive_from_var!(log::LevelFilter, u64);

#[cfg(test)]
mod tests {
    use super::FromVar;

    #[test]
    fn test_parse() {
        assert_eq!(u64::parse("42".into()), Ok(42));
        assert!(u64::parse("nope".into()).unwrap_err().contains("nope"));
        assert_eq!(
            log::LevelFilter::parse("warn".into()),
            Ok(log::LevelFilter::Warn)
        );
    }

    #[test]
    fn test_missing_var_falls_back() {
        crate::config_var! {
            CODECURE_TEST_SURELY_UNSET: u64 = 7;
        }

        assert_eq!(*CODECURE_TEST_SURELY_UNSET, 7);
    }

    #[test]
    fn test_env_wins_over_default() {
        crate::config_var! {
            CODECURE_TEST_FROM_ENV: u64 = 7;
            CODECURE_TEST_ORIGIN_FROM_ENV: String = "http://localhost:3000".into();
        }

        // both names are unique to this test, nothing else reads them
        std::env::set_var("CODECURE_TEST_FROM_ENV", "42");
        std::env::set_var("CODECURE_TEST_ORIGIN_FROM_ENV", "https://api.example.com");

        assert_eq!(*CODECURE_TEST_FROM_ENV, 42);
        assert_eq!(*CODECURE_TEST_ORIGIN_FROM_ENV, "https://api.example.com");
    }

    #[test]
    fn test_unparsable_env_falls_back() {
        crate::config_var! {
            CODECURE_TEST_BAD_NUMBER: u64 = 7;
        }

        std::env::set_var("CODECURE_TEST_BAD_NUMBER", "seven");
        assert_eq!(*CODECURE_TEST_BAD_NUMBER, 7);
    }
}
